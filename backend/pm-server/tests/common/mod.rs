#![allow(dead_code)]

//! Test infrastructure for pm-server tests

use pm_auth::{
    AdminRoles, DirectoryError, DirectoryResult, JwtValidator, MembershipDirectory,
    OrganizationClaim, SessionClaims,
};
use pm_core::{FixedClock, MembershipRecord, Project, Sprint, SprintStatus};
use pm_db::{ProjectRepository, SprintRepository};
use pm_server::{AppState, HandlerContext};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{EncodingKey, Header, encode};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-bytes";
pub const TEST_ORG_ID: &str = "org_acme";
pub const ADMIN_USER: &str = "user_admin";
pub const MEMBER_USER: &str = "user_member";
pub const OUTSIDER_USER: &str = "user_outsider";
pub const SIGN_IN_URL: &str = "/sign-in";
pub const SESSION_COOKIE: &str = "__session";

/// Sprint window used by the fixtures: 2024-01-01 .. 2024-01-14
pub fn window_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

pub fn window_end() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 14, 0, 0, 0).unwrap()
}

/// A moment inside the fixture window
pub fn mid_window() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 7, 12, 0, 0).unwrap()
}

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    pm_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// In-memory membership directory keyed by organization id
#[derive(Default)]
pub struct StubDirectory {
    memberships: HashMap<String, Vec<MembershipRecord>>,
    fail: bool,
    calls: AtomicUsize,
}

impl StubDirectory {
    /// ADMIN_USER as `org:admin` and MEMBER_USER as `org:member` in TEST_ORG_ID
    pub fn with_default_members() -> Self {
        Self::default()
            .with_member(TEST_ORG_ID, ADMIN_USER, "org:admin")
            .with_member(TEST_ORG_ID, MEMBER_USER, "org:member")
    }

    pub fn with_member(mut self, organization_id: &str, user_id: &str, role: &str) -> Self {
        self.memberships
            .entry(organization_id.to_string())
            .or_default()
            .push(MembershipRecord::new(user_id, role));
        self
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MembershipDirectory for StubDirectory {
    async fn list_memberships(
        &self,
        organization_id: &str,
    ) -> DirectoryResult<Vec<MembershipRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DirectoryError::Api {
                status: 503,
                body: "directory unavailable".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(self
            .memberships
            .get(organization_id)
            .cloned()
            .unwrap_or_default())
    }
}

/// Handler context backed by `pool`, `directory` and a clock frozen at `now`
pub fn handler_context(
    pool: SqlitePool,
    directory: Arc<StubDirectory>,
    now: DateTime<Utc>,
) -> HandlerContext {
    HandlerContext {
        pool,
        directory,
        clock: Arc::new(FixedClock::new(now)),
        admin_roles: AdminRoles::default(),
        allow_reactivation: true,
    }
}

/// AppState for router tests, HS256 tokens signed with TEST_SECRET
pub fn create_test_app_state(
    pool: SqlitePool,
    directory: Arc<StubDirectory>,
    now: DateTime<Utc>,
) -> AppState {
    AppState {
        pool,
        jwt_validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET.as_bytes())),
        directory,
        clock: Arc::new(FixedClock::new(now)),
        admin_roles: AdminRoles::default(),
        allow_reactivation: true,
        sign_in_url: SIGN_IN_URL.to_string(),
        session_cookie: SESSION_COOKIE.to_string(),
    }
}

/// Mint a session token for `user_id`, optionally with an active organization
pub fn mint_token(user_id: &str, organization_id: Option<&str>) -> String {
    let now = Utc::now().timestamp();
    let claims = SessionClaims {
        sub: user_id.to_string(),
        sid: Some("sess_test".to_string()),
        o: organization_id.map(|id| OrganizationClaim {
            id: id.to_string(),
            rol: None,
            slg: None,
        }),
        exp: now + 3600,
        iat: now,
        nbf: None,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("Failed to mint token")
}

/// Insert a project owned by TEST_ORG_ID
pub async fn create_test_project(pool: &SqlitePool) -> Project {
    let project = Project {
        id: Uuid::new_v4(),
        organization_id: TEST_ORG_ID.to_string(),
        name: "Test Project".to_string(),
        key: "TEST".to_string(),
        description: None,
        created_at: window_start(),
    };
    ProjectRepository::new(pool.clone())
        .create(&project)
        .await
        .expect("Failed to create test project");
    project
}

/// Insert a sprint over the fixture window with the given status
pub async fn create_test_sprint(pool: &SqlitePool, project_id: Uuid, status: SprintStatus) -> Sprint {
    let sprint = Sprint {
        id: Uuid::new_v4(),
        project_id,
        name: "Sprint 1".to_string(),
        start_date: window_start(),
        end_date: window_end(),
        status,
        created_at: window_start() - Duration::days(3),
    };
    SprintRepository::new(pool.clone())
        .create(&sprint)
        .await
        .expect("Failed to create test sprint");
    sprint
}

/// Number of sprint rows, for asserting that failed calls wrote nothing
pub async fn sprint_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM pm_sprints")
        .fetch_one(pool)
        .await
        .expect("Failed to count sprints")
}
