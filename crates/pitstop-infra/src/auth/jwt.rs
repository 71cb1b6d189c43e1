//! JWT credential service implementation.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use pitstop_core::ports::{AuthError, IdentityClaims, TokenClaims, TokenService};

/// JWT credential service configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_secs: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            ttl_secs: 3600,
        }
    }
}

/// Wire-format claims: the identity payload flattened alongside the
/// registered `iat`/`exp` claims, matching the tokens the original frontend
/// already holds.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    #[serde(flatten)]
    identity: IdentityClaims,
    iat: i64,
    exp: i64,
}

/// HS256-signed credential service.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            encoding_key,
            decoding_key,
            config,
        }
    }

    pub fn from_env() -> Self {
        let secret = std::env::var("ACCESS_TOKEN_SECRET")
            .unwrap_or_else(|_| "change-me-in-production".to_string());

        // Warn if using default secret in production
        if secret == "change-me-in-production" {
            let is_production = std::env::var("RUST_ENV")
                .map(|v| v == "production" || v == "prod")
                .unwrap_or(false);

            if is_production {
                tracing::error!(
                    "SECURITY: Using default signing secret in production! Set ACCESS_TOKEN_SECRET environment variable."
                );
            } else {
                tracing::warn!(
                    "Using default signing secret. Set ACCESS_TOKEN_SECRET for production use."
                );
            }
        }

        let config = JwtConfig {
            secret,
            ttl_secs: std::env::var("TOKEN_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600),
        };
        Self::new(config)
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, identity: IdentityClaims) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + TimeDelta::seconds(self.config.ttl_secs);

        let claims = Claims {
            identity,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let validation = Validation::default();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            })?;

        Ok(TokenClaims {
            identity: token_data.claims.identity,
            iat: token_data.claims.iat,
            exp: token_data.claims.exp,
        })
    }

    fn ttl_seconds(&self) -> i64 {
        self.config.ttl_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key".to_string(),
            ttl_secs: 3600,
        }
    }

    #[test]
    fn test_issue_token_success() {
        let service = JwtTokenService::new(test_config());

        let result = service.issue(IdentityClaims::with_email("test@example.com"));

        assert!(result.is_ok());
        let token = result.unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_verify_token_roundtrip() {
        let service = JwtTokenService::new(test_config());

        let mut identity = IdentityClaims::with_email("test@example.com");
        identity
            .extra
            .insert("displayName".to_string(), json!("Test User"));

        let token = service.issue(identity).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.identity.email.as_deref(), Some("test@example.com"));
        assert_eq!(
            claims.identity.extra.get("displayName"),
            Some(&json!("Test User"))
        );
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_issue_without_email() {
        // Issuance does not require an email; the holder just cannot pass
        // the ownership check later.
        let service = JwtTokenService::new(test_config());

        let token = service.issue(IdentityClaims::default()).unwrap();
        let claims = service.verify(&token).unwrap();

        assert!(claims.identity.email.is_none());
    }

    #[test]
    fn test_verify_invalid_token() {
        let service = JwtTokenService::new(test_config());

        let result = service.verify("not-a-token");

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AuthError::InvalidToken(_)));
    }

    #[test]
    fn test_verify_tampered_token() {
        let issuer = JwtTokenService::new(test_config());
        let verifier = JwtTokenService::new(JwtConfig {
            secret: "a-different-secret".to_string(),
            ttl_secs: 3600,
        });

        let token = issuer
            .issue(IdentityClaims::with_email("test@example.com"))
            .unwrap();

        let result = verifier.verify(&token);
        assert!(matches!(result.unwrap_err(), AuthError::InvalidToken(_)));
    }

    #[test]
    fn test_verify_expired_token() {
        // Expiry beyond the default 60s validation leeway.
        let service = JwtTokenService::new(JwtConfig {
            secret: "test-secret-key".to_string(),
            ttl_secs: -120,
        });

        let token = service
            .issue(IdentityClaims::with_email("test@example.com"))
            .unwrap();

        let result = service.verify(&token);
        assert!(matches!(result.unwrap_err(), AuthError::TokenExpired));
    }

    #[test]
    fn test_ttl_seconds() {
        let service = JwtTokenService::new(test_config());

        assert_eq!(service.ttl_seconds(), 3600);
    }
}
