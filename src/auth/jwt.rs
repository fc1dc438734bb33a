use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by the identity provider's HS256 tokens.
///
/// The `sub` field is the user's UUID. Name fields are optional; the
/// extractor falls back to the email local part for the username.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The auth user UUID.
    pub sub: String,
    /// Token expiration (Unix timestamp).
    pub exp: usize,
    /// Token issued-at (Unix timestamp).
    pub iat: Option<usize>,
    /// User's email.
    pub email: Option<String>,
    /// Preferred username.
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Claims {
    /// Extract the user UUID from the `sub` claim.
    pub fn user_id(&self) -> Result<Uuid, String> {
        Uuid::parse_str(&self.sub).map_err(|e| format!("Invalid UUID in sub claim: {e}"))
    }

    /// Username from the claim, falling back to the email local part.
    pub fn preferred_username(&self) -> Option<String> {
        self.username.clone().or_else(|| {
            self.email
                .as_ref()
                .map(|e| e.split('@').next().unwrap_or(e).to_string())
        })
    }
}

/// Validate an HS256 JWT against the shared secret and return its claims.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, String> {
    let validation = Validation::new(Algorithm::HS256);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| format!("{:?}", e.kind()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferred_username_falls_back_to_email_local_part() {
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            exp: 0,
            iat: None,
            email: Some("alice@example.com".to_string()),
            username: None,
            first_name: None,
            last_name: None,
        };
        assert_eq!(claims.preferred_username().unwrap(), "alice");
    }

    #[test]
    fn explicit_username_wins() {
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            exp: 0,
            iat: None,
            email: Some("alice@example.com".to_string()),
            username: Some("alice-the-builder".to_string()),
            first_name: None,
            last_name: None,
        };
        assert_eq!(claims.preferred_username().unwrap(), "alice-the-builder");
    }
}
