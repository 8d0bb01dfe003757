use crate::identity::resolve_identity;

use pm_auth::{JwtValidator, OrganizationClaim, SessionClaims};

use axum::http::{HeaderMap, HeaderValue, header};
use jsonwebtoken::{EncodingKey, Header, encode};

const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
const COOKIE: &str = "__session";

fn token(user: &str, org: Option<&str>) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = SessionClaims {
        sub: user.to_string(),
        sid: None,
        o: org.map(|id| OrganizationClaim {
            id: id.to_string(),
            rol: None,
            slg: None,
        }),
        exp: now + 600,
        iat: now,
        nbf: None,
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET)).unwrap()
}

fn headers_with(name: header::HeaderName, value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(name, HeaderValue::from_str(value).unwrap());
    headers
}

#[test]
fn given_bearer_token_when_resolving_then_returns_identity() {
    let validator = JwtValidator::with_hs256(SECRET);
    let headers = headers_with(
        header::AUTHORIZATION,
        &format!("Bearer {}", token("user_1", Some("org_1"))),
    );

    let identity = resolve_identity(&headers, COOKIE, &validator).unwrap();

    assert_eq!(identity.user_id, "user_1");
    assert_eq!(identity.organization_id.as_deref(), Some("org_1"));
}

#[test]
fn given_session_cookie_when_resolving_then_returns_identity() {
    let validator = JwtValidator::with_hs256(SECRET);
    let headers = headers_with(
        header::COOKIE,
        &format!("theme=dark; {}={}", COOKIE, token("user_2", None)),
    );

    let identity = resolve_identity(&headers, COOKIE, &validator).unwrap();

    assert_eq!(identity.user_id, "user_2");
    assert!(!identity.has_active_organization());
}

#[test]
fn given_no_token_when_resolving_then_none() {
    let validator = JwtValidator::with_hs256(SECRET);

    assert!(resolve_identity(&HeaderMap::new(), COOKIE, &validator).is_none());
}

#[test]
fn given_invalid_token_when_resolving_then_none() {
    let validator = JwtValidator::with_hs256(SECRET);
    let headers = headers_with(header::AUTHORIZATION, "Bearer not.a.token");

    assert!(resolve_identity(&headers, COOKIE, &validator).is_none());
}

#[test]
fn given_non_bearer_scheme_when_resolving_then_none() {
    let validator = JwtValidator::with_hs256(SECRET);
    let headers = headers_with(header::AUTHORIZATION, "Basic dXNlcjpwYXNz");

    assert!(resolve_identity(&headers, COOKIE, &validator).is_none());
}
