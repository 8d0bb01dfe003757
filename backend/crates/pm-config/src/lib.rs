mod auth_config;
mod authorization_config;
mod config;
mod database_config;
mod directory_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod sprint_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use authorization_config::AuthorizationConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use directory_config::DirectoryConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use sprint_config::SprintConfig;

// Server
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const MIN_PORT: u16 = 1024;

// Database
pub const DEFAULT_DATABASE_FILENAME: &str = "data.db";

// Auth
pub const MIN_JWT_SECRET_LENGTH: usize = 32;
pub const DEFAULT_SIGN_IN_URL: &str = "/sign-in";
pub const DEFAULT_SESSION_COOKIE: &str = "__session";

// Directory
pub const DEFAULT_DIRECTORY_API_URL: &str = "https://api.clerk.com/v1";
pub const DEFAULT_DIRECTORY_TIMEOUT_SECS: u64 = 10;
pub const MIN_DIRECTORY_TIMEOUT_SECS: u64 = 1;
pub const MAX_DIRECTORY_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_DIRECTORY_PAGE_SIZE: u32 = 100;
pub const MIN_DIRECTORY_PAGE_SIZE: u32 = 1;
pub const MAX_DIRECTORY_PAGE_SIZE: u32 = 500;

// Sprint
pub const DEFAULT_ALLOW_REACTIVATION: bool = true;

// Logging
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
