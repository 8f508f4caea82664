use anyhow::Context;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::application::error::{ServiceError, ServiceResult};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Issues and verifies HS256 access tokens carrying the user id as `sub`.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(ttl_secs),
        }
    }

    pub fn issue(&self, user_id: i64) -> ServiceResult<IssuedToken> {
        self.issue_at(user_id, Utc::now())
    }

    pub fn issue_at(&self, user_id: i64, issued_at: DateTime<Utc>) -> ServiceResult<IssuedToken> {
        let expires_at = issued_at + self.ttl;
        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at.timestamp().max(0) as usize,
            exp: expires_at.timestamp().max(0) as usize,
        };
        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .context("failed to sign access token")?;
        Ok(IssuedToken { token, expires_at })
    }

    pub fn verify(&self, token: &str) -> ServiceResult<i64> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation).map_err(
            |e| {
                tracing::debug!(error = %e, "token_rejected");
                ServiceError::unauthorized("Could not validate credentials")
            },
        )?;
        data.claims
            .sub
            .parse::<i64>()
            .map_err(|_| ServiceError::unauthorized("Could not validate credentials"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies() {
        let svc = TokenService::new("test-secret", 3600);
        let issued = svc.issue(42).unwrap();
        assert!(issued.expires_at > Utc::now());
        assert_eq!(svc.verify(&issued.token).unwrap(), 42);
    }

    #[test]
    fn expired_token_is_unauthorized() {
        let svc = TokenService::new("test-secret", 3600);
        let issued = svc
            .issue_at(42, Utc::now() - Duration::seconds(7200))
            .unwrap();
        assert!(matches!(
            svc.verify(&issued.token),
            Err(ServiceError::Unauthorized(_))
        ));
    }

    #[test]
    fn foreign_signature_is_unauthorized() {
        let issuer = TokenService::new("secret-a", 3600);
        let verifier = TokenService::new("secret-b", 3600);
        let issued = issuer.issue(7).unwrap();
        assert!(matches!(
            verifier.verify(&issued.token),
            Err(ServiceError::Unauthorized(_))
        ));
    }

    #[test]
    fn garbage_is_unauthorized() {
        let svc = TokenService::new("test-secret", 3600);
        assert!(matches!(
            svc.verify("not.a.jwt"),
            Err(ServiceError::Unauthorized(_))
        ));
        assert!(svc.verify("").is_err());
    }
}
