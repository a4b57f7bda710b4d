use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims issued by the MyHome auth service.
///
/// The `sub` field is the user's UUID in the `users` table.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The user UUID.
    pub sub: String,
    /// Token expiration (Unix timestamp).
    pub exp: usize,
    /// Token issued-at (Unix timestamp).
    pub iat: Option<usize>,
    pub email: Option<String>,
    /// Display name, used when the user is first seen.
    pub name: Option<String>,
}

impl Claims {
    /// Extract the user UUID from the `sub` claim.
    pub fn user_id(&self) -> Result<Uuid, String> {
        Uuid::parse_str(&self.sub).map_err(|e| format!("Invalid UUID in sub claim: {e}"))
    }
}

/// Validate an HS256-signed JWT and return the decoded claims.
///
/// The error string carries the `jsonwebtoken` error kind, e.g. `ExpiredSignature`.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| format!("{:?}", e.kind()))
}
