use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// A token asserts a user's public identifier for 30 minutes. Possession of
/// a valid token is the only authorization primitive; there is no revocation
/// and no refresh.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub public_id: String,
    pub exp: i64,
}

impl Claims {
    pub fn new(public_id: String) -> Self {
        Self {
            public_id,
            exp: (Utc::now() + Duration::minutes(30)).timestamp(),
        }
    }
}

pub fn encode_token(claims: &Claims, secret: &str) -> Result<String, String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("JWT encode failed: {e}"))
}

/// Checks signature and expiry, returning the embedded claims.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| format!("JWT decode failed: {e}"))
}
