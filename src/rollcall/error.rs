use thiserror::Error;

#[derive(Error, Debug)]
pub enum RollcallError {
    #[error(
        "Missing env vars: {}. Set them in your environment or a .env file",
        .0.join(", ")
    )]
    MissingEnv(Vec<&'static str>),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<postgres::Error> for RollcallError {
    fn from(err: postgres::Error) -> Self {
        // Use the server's message rather than the client's "db error" wrapper
        match err.as_db_error() {
            Some(db) => match db.detail() {
                Some(detail) => RollcallError::Store(format!("{} ({})", db.message(), detail)),
                None => RollcallError::Store(db.message().to_string()),
            },
            None => RollcallError::Store(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, RollcallError>;
