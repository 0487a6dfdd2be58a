use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use storage::{Database, error::StorageError, repository::user::UserRepository};
use uuid::Uuid;

use crate::error::WebError;

/// Claims carried by a session token. Tokens are signed with HS256 by the
/// identity service; this layer only verifies them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: Uuid,
    pub iat: u64,
    pub exp: u64,
}

/// Decoding half of the shared token secret.
#[derive(Clone)]
pub struct JwtKeys {
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Verify and decode a bearer token
    pub fn verify(&self, token: &str) -> Result<Claims, &'static str> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|err| {
                use jsonwebtoken::errors::ErrorKind;
                match err.kind() {
                    ErrorKind::ExpiredSignature => "Token expired",
                    ErrorKind::InvalidSignature => "Invalid signature",
                    _ => "Invalid token",
                }
            })
    }
}

/// State handed to [`require_auth`]: key material plus the store used to
/// confirm the token's subject still exists.
#[derive(Clone)]
pub struct AuthState {
    pub keys: JwtKeys,
    pub db: Database,
}

/// Authenticated identity, inserted into request extensions for handlers.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub email: String,
}

pub async fn require_auth(
    State(auth): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = bearer_token(req.headers())
        .ok_or_else(|| WebError::Unauthorized("Not authenticated".to_string()))?;

    let claims = auth.keys.verify(token).map_err(|reason| {
        tracing::warn!("Rejected bearer token: {}", reason);
        WebError::Unauthorized(reason.to_string())
    })?;

    let user = UserRepository::new(auth.db.pool())
        .find_by_id(claims.user_id)
        .await
        .map_err(|e| match e {
            StorageError::NotFound => {
                tracing::warn!(user_id = %claims.user_id, "Token subject no longer exists");
                WebError::Unauthorized("User not found".to_string())
            }
            other => WebError::Storage(other),
        })?;

    req.extensions_mut().insert(CurrentUser {
        user_id: user.user_id,
        email: user.email,
    });

    Ok(next.run(req).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();

    if token.is_empty() { None } else { Some(token) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use std::time::{SystemTime, UNIX_EPOCH};

    const SECRET: &[u8] = b"test-secret-that-is-long-enough-for-hs256";

    fn now() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
    }

    fn sign(claims: &Claims, secret: &[u8]) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret),
        )
        .unwrap()
    }

    fn claims_expiring_in(seconds: i64) -> Claims {
        Claims {
            user_id: Uuid::new_v4(),
            iat: now(),
            exp: (now() as i64 + seconds) as u64,
        }
    }

    #[test]
    fn test_verify_round_trips_claims() {
        let keys = JwtKeys::from_secret(SECRET);
        let claims = claims_expiring_in(3600);
        let token = sign(&claims, SECRET);

        let verified = keys.verify(&token).unwrap();
        assert_eq!(verified.user_id, claims.user_id);
        assert_eq!(verified.exp, claims.exp);
    }

    #[test]
    fn test_verify_rejects_garbage_token() {
        let keys = JwtKeys::from_secret(SECRET);
        assert_eq!(keys.verify("not-a-token"), Err("Invalid token"));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let keys = JwtKeys::from_secret(SECRET);
        let token = sign(&claims_expiring_in(3600), b"a-completely-different-secret-value");

        assert_eq!(keys.verify(&token), Err("Invalid signature"));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let keys = JwtKeys::from_secret(SECRET);
        // Well past the default leeway
        let token = sign(&claims_expiring_in(-600), SECRET);

        assert_eq!(keys.verify(&token), Err("Token expired"));
    }

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc123"));
        assert_eq!(bearer_token(&headers), Some("abc123"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc123"));
        assert_eq!(bearer_token(&headers), None);
    }
}
