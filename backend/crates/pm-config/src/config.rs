use crate::{
    AuthConfig, AuthorizationConfig, ConfigError, ConfigErrorResult, DatabaseConfig,
    DirectoryConfig, LoggingConfig, ServerConfig, SprintConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub directory: DirectoryConfig,
    pub authorization: AuthorizationConfig,
    pub sprint: SprintConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for PM_CONFIG_DIR env var, else use ./.pm/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: PM_CONFIG_DIR env var > ./.pm/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("PM_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".pm"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&config_dir)?;
        self.directory.validate()?;
        self.authorization.validate()?;

        Ok(())
    }

    /// Absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Resolved RS256 public key path, if one is configured.
    pub fn jwt_public_key_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let config_dir = Self::config_dir()?;
        Ok(self.auth.public_key_path(&config_dir))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  auth: {} (sign-in: {}, cookie: {})",
            self.auth.algorithm(),
            self.auth.sign_in_url,
            self.auth.session_cookie
        );
        info!(
            "  directory: {} (timeout={}s, page_size={})",
            self.directory.api_url, self.directory.timeout_secs, self.directory.page_size
        );
        match &self.authorization.admin_roles {
            Some(roles) => info!("  authorization: admin_roles=[{}]", roles.join(", ")),
            None => info!("  authorization: default admin roles"),
        }
        info!(
            "  sprint: allow_reactivation={}",
            self.sprint.allow_reactivation
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("PM_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("PM_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("PM_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_option_string("PM_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_string(
            "PM_AUTH_JWT_PUBLIC_KEY_PATH",
            &mut self.auth.jwt_public_key_path,
        );
        Self::apply_env_string("PM_AUTH_SIGN_IN_URL", &mut self.auth.sign_in_url);
        Self::apply_env_string("PM_AUTH_SESSION_COOKIE", &mut self.auth.session_cookie);

        // Directory
        Self::apply_env_string("PM_DIRECTORY_API_URL", &mut self.directory.api_url);
        Self::apply_env_string("PM_DIRECTORY_SECRET_KEY", &mut self.directory.secret_key);
        Self::apply_env_parse(
            "PM_DIRECTORY_TIMEOUT_SECS",
            &mut self.directory.timeout_secs,
        );
        Self::apply_env_parse("PM_DIRECTORY_PAGE_SIZE", &mut self.directory.page_size);

        // Authorization (comma separated)
        if let Ok(val) = std::env::var("PM_AUTHORIZATION_ADMIN_ROLES") {
            self.authorization.admin_roles = Some(
                val.split(',')
                    .map(|r| r.trim().to_string())
                    .filter(|r| !r.is_empty())
                    .collect(),
            );
        }

        // Sprint
        Self::apply_env_bool(
            "PM_SPRINT_ALLOW_REACTIVATION",
            &mut self.sprint.allow_reactivation,
        );

        // Logging
        Self::apply_env_parse("PM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_string("PM_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("PM_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
