//! Integration tests for JWT validation.
//!
//! Tokens are minted locally with the same HS256 secret the server is
//! configured with, then fed through `validate_token`. No running server or
//! database is needed.
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

use myhome_backend::auth::jwt::{Claims, validate_token};

const TEST_SECRET: &str = "test-secret-at-least-256-bits-long-for-hs256-xxxxxxx";

fn mint_token(claims: &Claims, secret: &str) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to encode test JWT")
}

fn claims_for(sub: &str, exp_offset: i64) -> Claims {
    let now = Utc::now().timestamp();
    Claims {
        sub: sub.to_string(),
        exp: (now + exp_offset) as usize,
        iat: Some(now as usize),
        email: Some("resident@example.com".to_string()),
        name: Some("Resident".to_string()),
    }
}

#[test]
fn test_valid_token_decodes_correctly() {
    let user_id = Uuid::new_v4();
    let token = mint_token(&claims_for(&user_id.to_string(), 3600), TEST_SECRET);

    let claims = validate_token(&token, TEST_SECRET).expect("Token should be valid");

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.email.as_deref(), Some("resident@example.com"));
    assert_eq!(claims.name.as_deref(), Some("Resident"));
    assert_eq!(claims.user_id().unwrap(), user_id);
}

#[test]
fn test_expired_token_is_rejected() {
    // Well past the 60s default leeway.
    let token = mint_token(&claims_for(&Uuid::new_v4().to_string(), -300), TEST_SECRET);

    let result = validate_token(&token, TEST_SECRET);
    assert!(result.unwrap_err().contains("ExpiredSignature"));
}

#[test]
fn test_wrong_secret_is_rejected() {
    let token = mint_token(&claims_for(&Uuid::new_v4().to_string(), 3600), TEST_SECRET);

    let result = validate_token(&token, "completely-wrong-secret-xxxxxxxxxxxxxxxxxxx");
    assert!(result.unwrap_err().contains("InvalidSignature"));
}

#[test]
fn test_garbage_token_is_rejected() {
    assert!(validate_token("not.a.valid.jwt", TEST_SECRET).is_err());
}

#[test]
fn test_non_uuid_subject_is_reported() {
    let token = mint_token(&claims_for("not-a-uuid", 3600), TEST_SECRET);

    let claims = validate_token(&token, TEST_SECRET).expect("Signature is valid");
    assert!(claims.user_id().is_err());
}
