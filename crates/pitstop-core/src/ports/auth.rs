//! Authentication port - issuing and verifying credential tokens.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identity payload embedded in a credential token.
///
/// Login sends whatever the frontend knows about the user; only `email` is
/// meaningful to this backend, the rest rides along. A missing email is not
/// rejected at issuance - the holder simply cannot pass the ownership check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentityClaims {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IdentityClaims {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            extra: Map::new(),
        }
    }
}

/// Decoded claims from a verified token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub identity: IdentityClaims,
    /// Issued-at (seconds since epoch).
    pub iat: i64,
    /// Expiry (seconds since epoch).
    pub exp: i64,
}

/// Token service trait - the issue/verify contract.
pub trait TokenService: Send + Sync {
    /// Sign a time-limited credential embedding the identity payload.
    fn issue(&self, identity: IdentityClaims) -> Result<String, AuthError>;

    /// Verify signature and expiry, returning the decoded claims.
    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError>;

    /// Validity window of issued credentials, in seconds.
    fn ttl_seconds(&self) -> i64;
}

/// Authentication errors.
///
/// The absent-vs-invalid split matters: a missing credential is rejected with
/// 401 while a tampered or expired one gets 403, and both paths are tested
/// independently.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Missing credential cookie")]
    MissingCredential,

    #[error("Credential expired")]
    TokenExpired,

    #[error("Invalid credential: {0}")]
    InvalidToken(String),

    #[error("Credential does not match the requested identity")]
    OwnershipMismatch,
}
