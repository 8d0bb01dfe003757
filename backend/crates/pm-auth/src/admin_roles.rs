use std::collections::BTreeSet;

/// Role strings that carry administrator privilege in an organization
pub const DEFAULT_ADMIN_ROLES: [&str; 4] = ["admin", "org:admin", "owner", "org:owner"];

/// Case-insensitive allow-list of administrator roles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRoles {
    roles: BTreeSet<String>,
}

impl AdminRoles {
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            roles: roles
                .into_iter()
                .map(|r| r.as_ref().trim().to_lowercase())
                .filter(|r| !r.is_empty())
                .collect(),
        }
    }

    /// True when `role`, lowercased, is in the allow-list
    pub fn permits(&self, role: &str) -> bool {
        self.roles.contains(&role.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl Default for AdminRoles {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_ROLES)
    }
}
