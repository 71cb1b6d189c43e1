use async_trait::async_trait;

use crate::domain::{Booking, BookingDraft, DeleteAck, InsertAck, Service, UpdateAck};
use crate::error::StoreError;

/// Read-only access to the `services` catalog collection.
#[async_trait]
pub trait ServiceCatalog: Send + Sync {
    /// List the full catalog.
    async fn list(&self) -> Result<Vec<Service>, StoreError>;

    /// Find one service by its id.
    async fn get(&self, id: &str) -> Result<Option<Service>, StoreError>;
}

/// Mutable access to the `bookings` collection.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Insert a booking verbatim; the store assigns the id.
    async fn insert(&self, draft: BookingDraft) -> Result<InsertAck, StoreError>;

    /// List bookings owned by the given email.
    async fn list_by_email(&self, email: &str) -> Result<Vec<Booking>, StoreError>;

    /// Find one booking by its id.
    async fn get(&self, id: &str) -> Result<Option<Booking>, StoreError>;

    /// Set the booking's status, creating the document if the id is absent (upsert).
    async fn set_status(&self, id: &str, status: &str) -> Result<UpdateAck, StoreError>;

    /// Delete one booking by its id.
    async fn delete(&self, id: &str) -> Result<DeleteAck, StoreError>;
}
