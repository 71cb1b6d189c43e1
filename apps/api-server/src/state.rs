//! Application state - shared across all handlers.

use std::sync::Arc;

use pitstop_core::StoreError;
use pitstop_core::ports::{BookingStore, ServiceCatalog};
use pitstop_infra::{InMemoryBookingStore, InMemoryServiceCatalog, StoreConfig};

#[cfg(feature = "mongodb")]
use pitstop_infra::MongoStore;

use crate::config::CookiePolicy;

/// Shared application state, built once at startup and injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<dyn ServiceCatalog>,
    pub bookings: Arc<dyn BookingStore>,
    pub cookie_policy: CookiePolicy,
    /// Which store backs this process, reported by the health endpoint.
    pub store_kind: &'static str,
}

impl AppState {
    /// Build the application state with the appropriate store adapter.
    ///
    /// A configured store that cannot be reached is a fatal startup error;
    /// a missing configuration falls back to the in-memory store for
    /// development and tests.
    pub async fn new(
        store_config: Option<&StoreConfig>,
        cookie_policy: CookiePolicy,
    ) -> Result<Self, StoreError> {
        #[cfg(feature = "mongodb")]
        if let Some(config) = store_config {
            let store = Arc::new(MongoStore::connect(config).await?);
            return Ok(Self {
                services: store.clone(),
                bookings: store,
                cookie_policy,
                store_kind: "mongodb",
            });
        }

        #[cfg(not(feature = "mongodb"))]
        if store_config.is_some() {
            tracing::error!("STORE_URL set but this build has no document store driver");
            return Err(StoreError::Connection(
                "store configured but the mongodb feature is disabled".to_string(),
            ));
        }

        tracing::warn!("No document store configured. Running with the in-memory store.");

        Ok(Self {
            services: Arc::new(InMemoryServiceCatalog::new()),
            bookings: Arc::new(InMemoryBookingStore::new()),
            cookie_policy,
            store_kind: "memory",
        })
    }

    /// In-memory state for handler tests.
    #[cfg(test)]
    pub fn in_memory(cookie_policy: CookiePolicy) -> Self {
        Self {
            services: Arc::new(InMemoryServiceCatalog::new()),
            bookings: Arc::new(InMemoryBookingStore::new()),
            cookie_policy,
            store_kind: "memory",
        }
    }

    #[cfg(test)]
    pub fn with_catalog(mut self, catalog: InMemoryServiceCatalog) -> Self {
        self.services = Arc::new(catalog);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_store_config_falls_back_to_memory() {
        let state = AppState::new(None, CookiePolicy::Local).await.unwrap();
        assert_eq!(state.store_kind, "memory");
    }

    #[cfg(not(feature = "mongodb"))]
    #[tokio::test]
    async fn test_configured_store_without_driver_is_fatal() {
        let config = StoreConfig {
            url: "mongodb://localhost:27017".to_string(),
            db_name: "carService".to_string(),
        };

        let result = AppState::new(Some(&config), CookiePolicy::Local).await;
        assert!(matches!(result, Err(StoreError::Connection(_))));
    }
}
