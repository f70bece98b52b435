use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::error::AppError;
use crate::repos::user_repo::Role;

/// Access token claims. The role claim is what the route gates check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub iss: String,
    pub aud: String,
    pub sub: String,
    pub role: Role,
    pub exp: i64,
    pub jti: String,
}

/// HS256 signer and verifier for access tokens.
///
/// Issuance and the route gates share one key, issuer and audience, so a
/// token this service mints always passes its own verification until expiry.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
    ttl_seconds: u64,
}

// Key material must not be printable via Debug.
impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    pub fn new(
        secret: &str,
        issuer: String,
        audience: String,
        ttl_seconds: u64,
        leeway_seconds: u64,
    ) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&issuer]);
        validation.set_audience(&[&audience]);
        validation.leeway = leeway_seconds;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            issuer,
            audience,
            ttl_seconds,
        }
    }

    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Issue a token for an authenticated subject, carrying their role claim.
    pub fn issue(&self, username: &str, role: Role) -> Result<String, AppError> {
        let exp = Utc::now().timestamp() + self.ttl_seconds as i64;

        let claims = AccessTokenClaims {
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            sub: username.to_string(),
            role,
            exp,
            jti: Uuid::new_v4().to_string(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(
            |e| {
                error!(error = %e, "failed to sign access token");
                AppError::Internal
            },
        )
    }

    /// Verify signature, issuer, audience and expiry (with leeway).
    pub fn verify(&self, token: &str) -> Result<AccessTokenClaims, jsonwebtoken::errors::Error> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    use super::*;

    fn service() -> TokenService {
        TokenService::new(
            "test-signing-secret",
            "https://auth.test".to_string(),
            "walks-api".to_string(),
            600,
            0,
        )
    }

    #[test]
    fn issued_token_passes_verification_with_its_claims() {
        let svc = service();

        let token = svc.issue("writer", Role::Writer).unwrap();
        let claims = svc.verify(&token).unwrap();

        assert_eq!(claims.sub, "writer");
        assert_eq!(claims.role, Role::Writer);
        assert_eq!(claims.iss, "https://auth.test");
        assert_eq!(claims.aud, "walks-api");
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn payload_carries_the_role_claim_as_a_lowercase_string() {
        let svc = service();
        let token = svc.issue("reader", Role::Reader).unwrap();

        let payload = token.split('.').nth(1).unwrap();
        let decoded = URL_SAFE_NO_PAD.decode(payload).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&decoded).unwrap();

        assert_eq!(json["role"], "reader");
        assert_eq!(json["sub"], "reader");
    }

    #[test]
    fn distinct_tokens_get_distinct_jti() {
        let svc = service();

        let a = svc.verify(&svc.issue("reader", Role::Reader).unwrap()).unwrap();
        let b = svc.verify(&svc.issue("reader", Role::Reader).unwrap()).unwrap();

        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn verification_rejects_a_foreign_key() {
        let ours = service();
        let theirs = TokenService::new(
            "some-other-secret",
            "https://auth.test".to_string(),
            "walks-api".to_string(),
            600,
            0,
        );

        let token = theirs.issue("writer", Role::Writer).unwrap();
        assert!(ours.verify(&token).is_err());
    }

    #[test]
    fn verification_rejects_wrong_issuer_and_audience() {
        let svc = service();

        let wrong_issuer = TokenService::new(
            "test-signing-secret",
            "https://elsewhere.test".to_string(),
            "walks-api".to_string(),
            600,
            0,
        );
        assert!(svc.verify(&wrong_issuer.issue("reader", Role::Reader).unwrap()).is_err());

        let wrong_audience = TokenService::new(
            "test-signing-secret",
            "https://auth.test".to_string(),
            "someone-else".to_string(),
            600,
            0,
        );
        assert!(svc.verify(&wrong_audience.issue("reader", Role::Reader).unwrap()).is_err());
    }

    #[test]
    fn verification_rejects_an_expired_token() {
        let svc = service();

        let claims = AccessTokenClaims {
            iss: "https://auth.test".to_string(),
            aud: "walks-api".to_string(),
            sub: "reader".to_string(),
            role: Role::Reader,
            exp: Utc::now().timestamp() - 3600,
            jti: Uuid::new_v4().to_string(),
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-signing-secret"),
        )
        .unwrap();

        assert!(svc.verify(&token).is_err());
    }

    #[test]
    fn verification_rejects_garbage() {
        let svc = service();
        assert!(svc.verify("not-a-token").is_err());
    }
}
