use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthorizationConfig {
    /// Organization roles allowed to create sprints and change their status.
    /// `None` keeps the built-in administrator roles.
    pub admin_roles: Option<Vec<String>>,
}

impl AuthorizationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(roles) = &self.admin_roles
            && roles.iter().all(|r| r.trim().is_empty())
        {
            return Err(ConfigError::authorization(
                "authorization.admin_roles must name at least one role",
            ));
        }

        Ok(())
    }
}
