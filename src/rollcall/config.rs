use crate::error::{Result, RollcallError};
use std::fmt;
use std::path::Path;

const DEFAULT_ENV_FILE: &str = ".env";

pub const PGHOST: &str = "PGHOST";
pub const PGPORT: &str = "PGPORT";
pub const PGUSER: &str = "PGUSER";
pub const PGPASSWORD: &str = "PGPASSWORD";
pub const PGDATABASE: &str = "PGDATABASE";

/// The variables a connection needs, in the order they are reported.
pub const REQUIRED_VARS: [&str; 5] = [PGHOST, PGPORT, PGUSER, PGPASSWORD, PGDATABASE];

/// Connection parameters for the students database.
///
/// Built once at startup from the environment and passed down to the store.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
}

impl ConnectionConfig {
    /// Resolve the config from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve the config from an arbitrary variable lookup.
    ///
    /// Unset and empty values both count as missing. Every missing name is
    /// reported in a single error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let values: Vec<Option<String>> = REQUIRED_VARS
            .iter()
            .map(|&name| lookup(name).filter(|v| !v.is_empty()))
            .collect();

        let missing: Vec<&'static str> = REQUIRED_VARS
            .iter()
            .zip(&values)
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(RollcallError::MissingEnv(missing));
        }

        let mut values = values.into_iter().flatten();
        let mut next = || values.next().unwrap_or_default();
        let host = next();
        let raw_port = next();
        let port = raw_port.trim().parse::<u16>().map_err(|_| {
            RollcallError::Config(format!("{} must be a port number, got '{}'", PGPORT, raw_port))
        })?;

        Ok(Self {
            host,
            port,
            user: next(),
            password: next(),
            dbname: next(),
        })
    }

    /// Driver-level configuration for opening a connection.
    pub fn pg_config(&self) -> postgres::Config {
        let mut config = postgres::Config::new();
        config
            .host(&self.host)
            .port(self.port)
            .user(&self.user)
            .password(&self.password)
            .dbname(&self.dbname)
            .application_name(env!("CARGO_PKG_NAME"));
        config
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("dbname", &self.dbname)
            .finish()
    }
}

/// Seed the process environment from a dotenv file.
///
/// Without an explicit path, `.env` in the working directory is loaded if it
/// exists. An explicit path must exist. Variables already set in the process
/// environment are left untouched.
pub fn load_env_file(path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            dotenvy::from_path(path).map_err(|e| {
                RollcallError::Config(format!("cannot load {}: {}", path.display(), e))
            })?;
            tracing::debug!(path = %path.display(), "loaded env file");
        }
        None => {
            let default = Path::new(DEFAULT_ENV_FILE);
            if default.exists() {
                dotenvy::from_path(default).map_err(|e| {
                    RollcallError::Config(format!("cannot load {}: {}", DEFAULT_ENV_FILE, e))
                })?;
                tracing::debug!(path = DEFAULT_ENV_FILE, "loaded env file");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    fn full_env() -> Vec<(&'static str, &'static str)> {
        vec![
            (PGHOST, "db.internal"),
            (PGPORT, "5433"),
            (PGUSER, "registrar"),
            (PGPASSWORD, "hunter2"),
            (PGDATABASE, "school"),
        ]
    }

    #[test]
    fn resolves_all_values() {
        let config = ConnectionConfig::from_lookup(lookup_from(&full_env())).unwrap();
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 5433);
        assert_eq!(config.user, "registrar");
        assert_eq!(config.password, "hunter2");
        assert_eq!(config.dbname, "school");
    }

    #[test]
    fn reports_all_five_missing_names() {
        let err = ConnectionConfig::from_lookup(|_| None).unwrap_err();
        match err {
            RollcallError::MissingEnv(names) => assert_eq!(names, REQUIRED_VARS.to_vec()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_values_count_as_missing() {
        let mut env = full_env();
        env[0] = (PGHOST, "");
        env.retain(|(k, _)| *k != PGDATABASE);

        let err = ConnectionConfig::from_lookup(lookup_from(&env)).unwrap_err();
        assert!(matches!(err, RollcallError::MissingEnv(ref names) if names == &[PGHOST, PGDATABASE]));
        let message = err.to_string();
        assert!(message.contains("PGHOST, PGDATABASE"));
    }

    #[test]
    fn rejects_non_numeric_port() {
        let mut env = full_env();
        env[1] = (PGPORT, "fivefourthreetwo");
        let err = ConnectionConfig::from_lookup(lookup_from(&env)).unwrap_err();
        assert!(matches!(err, RollcallError::Config(_)));
    }

    #[test]
    fn debug_output_hides_password() {
        let config = ConnectionConfig::from_lookup(lookup_from(&full_env())).unwrap();
        let debug = format!("{config:?}");
        assert!(debug.contains("db.internal"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn explicit_env_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.env");
        let err = load_env_file(Some(&missing)).unwrap_err();
        assert!(matches!(err, RollcallError::Config(_)));
    }
}
