use crate::DEFAULT_ALLOW_REACTIVATION;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SprintConfig {
    /// Whether a COMPLETED sprint may be set back to ACTIVE
    pub allow_reactivation: bool,
}

impl Default for SprintConfig {
    fn default() -> Self {
        Self {
            allow_reactivation: DEFAULT_ALLOW_REACTIVATION,
        }
    }
}
