//! In-memory store implementation - used when no store URL is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

use pitstop_core::domain::{Booking, BookingDraft, DeleteAck, InsertAck, Service, UpdateAck};
use pitstop_core::error::StoreError;
use pitstop_core::ports::{BookingStore, ServiceCatalog};

/// In-memory service catalog.
///
/// The catalog is seed data, so this adapter is constructed with its contents
/// up front and never mutated. Note: data is lost on process restart.
pub struct InMemoryServiceCatalog {
    services: Vec<Service>,
}

impl InMemoryServiceCatalog {
    pub fn new() -> Self {
        Self {
            services: Vec::new(),
        }
    }

    pub fn with_services(services: Vec<Service>) -> Self {
        Self { services }
    }
}

impl Default for InMemoryServiceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServiceCatalog for InMemoryServiceCatalog {
    async fn list(&self) -> Result<Vec<Service>, StoreError> {
        Ok(self.services.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Service>, StoreError> {
        Ok(self.services.iter().find(|s| s.id == id).cloned())
    }
}

/// In-memory booking store using a HashMap behind an async RwLock.
pub struct InMemoryBookingStore {
    docs: RwLock<HashMap<String, Map<String, Value>>>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self {
            docs: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryBookingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn insert(&self, draft: BookingDraft) -> Result<InsertAck, StoreError> {
        let id = Uuid::new_v4().to_string();

        let mut docs = self.docs.write().await;
        docs.insert(id.clone(), draft.0);

        Ok(InsertAck {
            acknowledged: true,
            inserted_id: id,
        })
    }

    async fn list_by_email(&self, email: &str) -> Result<Vec<Booking>, StoreError> {
        let docs = self.docs.read().await;

        let mut bookings: Vec<Booking> = docs
            .iter()
            .filter(|(_, fields)| {
                fields.get("email").and_then(Value::as_str) == Some(email)
            })
            .map(|(id, fields)| Booking::new(id.clone(), fields.clone()))
            .collect();

        // HashMap iteration order is arbitrary; keep responses stable.
        bookings.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(bookings)
    }

    async fn get(&self, id: &str) -> Result<Option<Booking>, StoreError> {
        let docs = self.docs.read().await;
        Ok(docs
            .get(id)
            .map(|fields| Booking::new(id.to_string(), fields.clone())))
    }

    async fn set_status(&self, id: &str, status: &str) -> Result<UpdateAck, StoreError> {
        let mut docs = self.docs.write().await;

        if let Some(fields) = docs.get_mut(id) {
            let previous = fields.insert("status".to_string(), Value::String(status.to_string()));
            let modified = previous.as_ref().and_then(Value::as_str) != Some(status);

            Ok(UpdateAck {
                acknowledged: true,
                matched_count: 1,
                modified_count: u64::from(modified),
                upserted_id: None,
            })
        } else {
            // Upsert path: create a document carrying only the status.
            let mut fields = Map::new();
            fields.insert("status".to_string(), Value::String(status.to_string()));
            docs.insert(id.to_string(), fields);

            Ok(UpdateAck {
                acknowledged: true,
                matched_count: 0,
                modified_count: 0,
                upserted_id: Some(id.to_string()),
            })
        }
    }

    async fn delete(&self, id: &str) -> Result<DeleteAck, StoreError> {
        let mut docs = self.docs.write().await;
        let removed = docs.remove(id).is_some();

        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: u64::from(removed),
        })
    }
}
