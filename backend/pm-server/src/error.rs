use thiserror::Error;

/// Startup failures
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] pm_config::ConfigError),

    #[error("Failed to read JWT key file {path}: {source}")]
    JwtKeyFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Auth setup error: {0}")]
    Auth(#[from] pm_auth::AuthError),

    #[error("Membership directory setup error: {0}")]
    Directory(#[from] pm_auth::DirectoryError),

    #[error("Database error: {0}")]
    Database(#[from] pm_db::DbError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
