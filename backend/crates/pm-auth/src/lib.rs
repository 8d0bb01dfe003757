pub mod access_policy;
pub mod admin_roles;
pub mod caller_identity;
pub mod claims;
pub mod clerk_membership_directory;
pub mod error;
pub mod gate_matcher;
pub mod jwt_validator;
pub mod membership_directory;

pub use access_policy::{GateDecision, ONBOARDING_PATH, evaluate_access};
pub use admin_roles::{AdminRoles, DEFAULT_ADMIN_ROLES};
pub use caller_identity::CallerIdentity;
pub use claims::{OrganizationClaim, SessionClaims};
pub use clerk_membership_directory::ClerkMembershipDirectory;
pub use error::{AuthError, DirectoryError, DirectoryResult, Result};
pub use gate_matcher::gate_applies;
pub use jwt_validator::JwtValidator;
pub use membership_directory::MembershipDirectory;
