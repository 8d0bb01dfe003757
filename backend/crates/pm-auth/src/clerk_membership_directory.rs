//! Membership directory backed by the identity provider's backend API.
//!
//! `GET {api_url}/organizations/{organization_id}/memberships?limit=&offset=`
//! authenticated with the secret key as a bearer token. Results are paged;
//! pages are requested until `total_count` entries have been seen.

use crate::{DirectoryError, DirectoryResult, MembershipDirectory};

use pm_core::MembershipRecord;

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::debug;
use reqwest::Client as ReqwestClient;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_PAGE_SIZE: u32 = 100;

#[derive(Debug, Deserialize)]
struct MembershipPage {
    data: Vec<MembershipEntry>,
    #[serde(default)]
    total_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct MembershipEntry {
    role: String,
    #[serde(default)]
    public_user_data: Option<PublicUserData>,
}

#[derive(Debug, Deserialize)]
struct PublicUserData {
    user_id: String,
}

impl MembershipEntry {
    // Entries without public user data (pending invitations) cannot match a caller
    fn into_record(self) -> Option<MembershipRecord> {
        self.public_user_data
            .map(|user| MembershipRecord::new(user.user_id, self.role))
    }
}

pub struct ClerkMembershipDirectory {
    base_url: Url,
    secret_key: String,
    page_size: u32,
    client: ReqwestClient,
}

impl ClerkMembershipDirectory {
    /// # Arguments
    /// * `api_url` - Backend API root (e.g., "https://api.clerk.com/v1")
    /// * `secret_key` - Backend secret key sent as the bearer token
    /// * `timeout` - Per-request timeout
    /// * `page_size` - Memberships requested per page
    #[track_caller]
    pub fn new(
        api_url: &str,
        secret_key: &str,
        timeout: Duration,
        page_size: u32,
    ) -> DirectoryResult<Self> {
        let trimmed = api_url.trim_end_matches('/');
        let base_url = Url::parse(trimmed).map_err(|e| DirectoryError::InvalidUrl {
            url: api_url.to_string(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(DirectoryError::InvalidUrl {
                url: api_url.to_string(),
                message: "URL cannot be used as a base".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            secret_key: secret_key.to_string(),
            page_size: page_size.max(1),
            client,
        })
    }

    fn page_url(&self, organization_id: &str, offset: u64) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new` that the URL can be a base
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.extend(["organizations", organization_id, "memberships"]);
        }
        url.query_pairs_mut()
            .append_pair("limit", &self.page_size.to_string())
            .append_pair("offset", &offset.to_string());
        url
    }

    async fn fetch_page(&self, organization_id: &str, offset: u64) -> DirectoryResult<MembershipPage> {
        let url = self.page_url(organization_id, offset);
        debug!("Fetching memberships: {}", url);

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.secret_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(DirectoryError::Api {
                status: status.as_u16(),
                body,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        serde_json::from_str(&body).map_err(|e| DirectoryError::Decode {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

#[async_trait]
impl MembershipDirectory for ClerkMembershipDirectory {
    async fn list_memberships(
        &self,
        organization_id: &str,
    ) -> DirectoryResult<Vec<MembershipRecord>> {
        let mut records = Vec::new();
        let mut offset: u64 = 0;

        loop {
            let page = self.fetch_page(organization_id, offset).await?;
            let fetched = page.data.len() as u64;
            offset += fetched;
            records.extend(page.data.into_iter().filter_map(MembershipEntry::into_record));

            let total = page.total_count.unwrap_or(offset);
            if fetched == 0 || offset >= total {
                break;
            }
        }

        debug!(
            "Organization {} has {} memberships",
            organization_id,
            records.len()
        );

        Ok(records)
    }
}
