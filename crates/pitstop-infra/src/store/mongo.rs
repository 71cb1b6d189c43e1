//! MongoDB store adapter.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Bson, Document, doc, oid::ObjectId};
use mongodb::{Client, Collection};
use serde_json::{Map, Value};

use pitstop_core::domain::{Booking, BookingDraft, DeleteAck, InsertAck, Service, UpdateAck};
use pitstop_core::error::StoreError;
use pitstop_core::ports::{BookingStore, ServiceCatalog};

use super::StoreConfig;

/// Store adapter holding the `services` and `bookings` collections.
///
/// Collections are raw `Document`s: booking payloads are stored verbatim and
/// the catalog schema is owned by whoever seeds it.
pub struct MongoStore {
    services: Collection<Document>,
    bookings: Collection<Document>,
}

impl MongoStore {
    /// Connect and ping the deployment. A failed ping is a startup-fatal
    /// error; the process must not begin serving without its store.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        tracing::info!("Connecting to document store...");

        let client = Client::with_uri_str(&config.url)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let db = client.database(&config.db_name);
        tracing::info!(db = %config.db_name, "Document store connected");

        Ok(Self {
            services: db.collection("services"),
            bookings: db.collection("bookings"),
        })
    }

    fn parse_object_id(id: &str) -> Result<ObjectId, StoreError> {
        ObjectId::parse_str(id).map_err(|_| StoreError::MalformedId(id.to_string()))
    }
}

/// Split a document into its hex id and a JSON field map.
fn split_document(mut doc: Document) -> Result<(String, Map<String, Value>), StoreError> {
    let id = match doc.remove("_id") {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(other) => other.to_string(),
        None => return Err(StoreError::Query("document has no _id".to_string())),
    };

    let fields = match serde_json::to_value(&doc).map_err(|e| StoreError::Query(e.to_string()))? {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    Ok((id, fields))
}

fn to_service(doc: Document) -> Result<Service, StoreError> {
    let (id, fields) = split_document(doc)?;
    Ok(Service::new(id, fields))
}

fn to_booking(doc: Document) -> Result<Booking, StoreError> {
    let (id, fields) = split_document(doc)?;
    Ok(Booking::new(id, fields))
}

fn bson_id_to_hex(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        other => other.to_string(),
    }
}

/// Mask an email for logging to avoid PII in logs.
fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        // Take the first char, not the first byte; locals can start with a
        // multi-byte character.
        let masked_local = match local.chars().next() {
            Some(first) if local.chars().count() > 1 => format!("{first}***"),
            _ => "***".to_string(),
        };
        format!("{masked_local}{domain}")
    } else {
        "***".to_string()
    }
}

#[async_trait]
impl ServiceCatalog for MongoStore {
    async fn list(&self) -> Result<Vec<Service>, StoreError> {
        let cursor = self
            .services
            .find(doc! {})
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let docs: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        docs.into_iter().map(to_service).collect()
    }

    async fn get(&self, id: &str) -> Result<Option<Service>, StoreError> {
        let oid = Self::parse_object_id(id)?;

        let doc = self
            .services
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        doc.map(to_service).transpose()
    }
}

#[async_trait]
impl BookingStore for MongoStore {
    async fn insert(&self, draft: BookingDraft) -> Result<InsertAck, StoreError> {
        let doc = mongodb::bson::to_document(&draft.0)
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let result = self
            .bookings
            .insert_one(doc)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(InsertAck {
            acknowledged: true,
            inserted_id: bson_id_to_hex(&result.inserted_id),
        })
    }

    async fn list_by_email(&self, email: &str) -> Result<Vec<Booking>, StoreError> {
        tracing::debug!(owner = %mask_email(email), "Listing bookings by owner");

        let cursor = self
            .bookings
            .find(doc! { "email": email })
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let docs: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        docs.into_iter().map(to_booking).collect()
    }

    async fn get(&self, id: &str) -> Result<Option<Booking>, StoreError> {
        let oid = Self::parse_object_id(id)?;

        let doc = self
            .bookings
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        doc.map(to_booking).transpose()
    }

    async fn set_status(&self, id: &str, status: &str) -> Result<UpdateAck, StoreError> {
        let oid = Self::parse_object_id(id)?;

        let result = self
            .bookings
            .update_one(doc! { "_id": oid }, doc! { "$set": { "status": status } })
            .upsert(true)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(UpdateAck {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id.as_ref().map(bson_id_to_hex),
        })
    }

    async fn delete(&self, id: &str) -> Result<DeleteAck, StoreError> {
        let oid = Self::parse_object_id(id)?;

        let result = self
            .bookings
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: result.deleted_count,
        })
    }
}
