use serde::{Deserialize, Serialize};

/// One user's membership in an organization, as reported by the membership
/// directory. Resolved on every privileged call; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRecord {
    pub user_id: String,
    pub role: String,
}

impl MembershipRecord {
    pub fn new(user_id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role: role.into(),
        }
    }

    /// Role folded to lowercase for allow-list comparison
    pub fn normalized_role(&self) -> String {
        self.role.to_lowercase()
    }
}
