use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SESSION_COOKIE, DEFAULT_SIGN_IN_URL,
    MIN_JWT_SECRET_LENGTH,
};

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Session token verification and sign-in redirect settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 shared secret
    pub jwt_secret: Option<String>,
    /// RS256 public key (PEM), relative to the config directory or absolute
    pub jwt_public_key_path: Option<String>,
    /// Where unauthenticated page requests are redirected
    pub sign_in_url: String,
    /// Cookie carrying the session token when no bearer header is sent
    pub session_cookie: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            jwt_public_key_path: None,
            sign_in_url: String::from(DEFAULT_SIGN_IN_URL),
            session_cookie: String::from(DEFAULT_SESSION_COOKIE),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (Some(secret), _) => {
                if secret.len() < MIN_JWT_SECRET_LENGTH {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_secret must be at least {} characters",
                        MIN_JWT_SECRET_LENGTH
                    )));
                }
            }
            (None, Some(_)) => {
                if let Some(path) = self.public_key_path(config_dir)
                    && !path.exists()
                {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_public_key_path not found: {}",
                        path.display()
                    )));
                }
            }
            (None, None) => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret or auth.jwt_public_key_path is required",
                ));
            }
        }

        if self.sign_in_url.trim().is_empty() {
            return Err(ConfigError::auth("auth.sign_in_url cannot be empty"));
        }

        if self.session_cookie.trim().is_empty() {
            return Err(ConfigError::auth("auth.session_cookie cannot be empty"));
        }

        Ok(())
    }

    /// Resolved public key path, relative paths anchored at `config_dir`
    pub fn public_key_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.jwt_public_key_path.as_ref().map(|p| {
            let path = Path::new(p);
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                config_dir.join(path)
            }
        })
    }

    /// Algorithm name for logging
    pub fn algorithm(&self) -> &'static str {
        if self.jwt_secret.is_some() {
            "HS256"
        } else if self.jwt_public_key_path.is_some() {
            "RS256"
        } else {
            "none"
        }
    }
}
