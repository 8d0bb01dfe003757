use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Session token claims as issued by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user id)
    pub sub: String,
    /// Session id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    /// Active organization, absent until the user picks or creates one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub o: Option<OrganizationClaim>,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Not-before timestamp (Unix)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
}

/// Compact active-organization claim (`o`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationClaim {
    pub id: String,
    /// Role in the active organization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rol: Option<String>,
    /// Organization slug
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slg: Option<String>,
}

impl SessionClaims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user_id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Active organization id, treating an empty id as no organization
    pub fn organization_id(&self) -> Option<&str> {
        self.o
            .as_ref()
            .map(|o| o.id.as_str())
            .filter(|id| !id.is_empty())
    }
}
