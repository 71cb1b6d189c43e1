//! # Pitstop Infrastructure
//!
//! Concrete implementations of the ports defined in `pitstop-core`.
//! This crate contains the credential token service and the document store
//! adapters.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory store only, no driver dependency
//! - `mongodb` - Document store adapter backed by the MongoDB driver

pub mod auth;
pub mod store;

// Re-exports - In-Memory
pub use store::{InMemoryBookingStore, InMemoryServiceCatalog};

pub use auth::JwtTokenService;

// Re-exports - MongoDB
#[cfg(feature = "mongodb")]
pub use store::MongoStore;

pub use store::StoreConfig;
