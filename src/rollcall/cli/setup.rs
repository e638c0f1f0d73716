use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rollcall::model::{parse_enrollment_date, StudentId};
use std::path::PathBuf;

/// Returns the version string, with the git hash for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "rollcall", bin_name = "rollcall", version = get_version())]
#[command(about = "PostgreSQL CRUD for the students table", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Load connection variables from this file instead of ./.env
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Retrieve and display all students
    GetAll,

    /// Insert a new student
    Add {
        /// First name
        #[arg(long, value_parser = parse_non_blank)]
        first: String,

        /// Last name
        #[arg(long, value_parser = parse_non_blank)]
        last: String,

        /// Email (unique)
        #[arg(long, value_parser = parse_non_blank)]
        email: String,

        /// Enrollment date
        #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },

    /// Update a student's email by id
    UpdateEmail {
        /// student_id
        #[arg(long)]
        id: StudentId,

        /// New email
        #[arg(long, value_parser = parse_non_blank)]
        email: String,
    },

    /// Delete a student by id
    Delete {
        /// student_id
        #[arg(long)]
        id: StudentId,
    },
}

fn parse_non_blank(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err("value cannot be blank".to_string());
    }
    Ok(value.to_string())
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_enrollment_date(value).map_err(|_| "expected a calendar date as YYYY-MM-DD".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("rollcall").chain(args.iter().copied()))
    }

    #[test]
    fn parses_get_all() {
        let cli = parse(&["get-all"]).unwrap();
        assert_eq!(cli.command, Commands::GetAll);
        assert!(!cli.verbose);
        assert_eq!(cli.env_file, None);
    }

    #[test]
    fn parses_add_with_and_without_date() {
        let cli = parse(&[
            "add", "--first", "Hussam", "--last", "Nabtiti", "--email", "h@example.com",
            "--date", "2023-09-03",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Commands::Add {
                first: "Hussam".into(),
                last: "Nabtiti".into(),
                email: "h@example.com".into(),
                date: NaiveDate::from_ymd_opt(2023, 9, 3),
            }
        );

        let cli = parse(&["add", "--first", "A", "--last", "B", "--email", "a@b.c"]).unwrap();
        assert!(matches!(cli.command, Commands::Add { date: None, .. }));
    }

    #[test]
    fn parses_update_email_and_delete() {
        let cli = parse(&["update-email", "--id", "1", "--email", "new@example.com"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::UpdateEmail {
                id: 1,
                email: "new@example.com".into()
            }
        );

        let cli = parse(&["delete", "--id", "3"]).unwrap();
        assert_eq!(cli.command, Commands::Delete { id: 3 });
    }

    #[test]
    fn global_flags_work_after_the_subcommand() {
        let cli = parse(&["get-all", "-v", "--env-file", "conf/.env"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.env_file, Some(PathBuf::from("conf/.env")));
    }

    #[test]
    fn missing_required_flags_are_usage_errors() {
        let err = parse(&["add", "--first", "A", "--email", "a@b.c"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = parse(&["delete"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = parse(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand);
    }

    #[test]
    fn malformed_values_are_rejected() {
        let err = parse(&["delete", "--id", "three"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = parse(&[
            "add", "--first", "A", "--last", "B", "--email", "a@b.c", "--date", "03/09/2023",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = parse(&["update-email", "--id", "1", "--email", ""]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn blank_text_values_are_usage_errors() {
        let err = parse(&["add", "--first", "   ", "--last", "B", "--email", "a@b.c"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = parse(&["add", "--first", "A", "--last", "\t", "--email", "a@b.c"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = parse(&["update-email", "--id", "1", "--email", "  "]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn short_aliases_are_not_accepted() {
        assert!(parse(&["ls"]).is_err());
        assert!(parse(&["rm", "--id", "1"]).is_err());
    }
}
