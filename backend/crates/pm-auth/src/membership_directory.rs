use crate::DirectoryResult;

use pm_core::MembershipRecord;

use async_trait::async_trait;

/// Lookup of organization memberships held by the identity provider
#[async_trait]
pub trait MembershipDirectory: Send + Sync {
    /// Every membership of `organization_id`
    async fn list_memberships(
        &self,
        organization_id: &str,
    ) -> DirectoryResult<Vec<MembershipRecord>>;

    /// The membership of `user_id` in `organization_id`, if there is one
    async fn find_membership(
        &self,
        organization_id: &str,
        user_id: &str,
    ) -> DirectoryResult<Option<MembershipRecord>> {
        let memberships = self.list_memberships(organization_id).await?;
        Ok(memberships.into_iter().find(|m| m.user_id == user_id))
    }
}
