//! Store-level error types.

use thiserror::Error;

/// Errors surfaced by the document store adapters.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Store query failed: {0}")]
    Query(String),

    #[error("Malformed document id: {0}")]
    MalformedId(String),
}
