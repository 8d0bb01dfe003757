use crate::SessionClaims;

/// The authenticated caller, derived from verified session claims
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    pub user_id: String,
    /// Active organization from the session, if any
    pub organization_id: Option<String>,
}

impl CallerIdentity {
    pub fn new(user_id: impl Into<String>, organization_id: Option<String>) -> Self {
        Self {
            user_id: user_id.into(),
            organization_id,
        }
    }

    pub fn from_claims(claims: SessionClaims) -> Self {
        let organization_id = claims.organization_id().map(str::to_string);
        Self {
            user_id: claims.sub,
            organization_id,
        }
    }

    pub fn has_active_organization(&self) -> bool {
        self.organization_id.is_some()
    }
}
