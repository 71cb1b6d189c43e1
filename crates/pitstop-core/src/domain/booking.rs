use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Booking entity - an order placed against the service catalog.
///
/// Clients submit bookings with whatever fields the frontend collects
/// (`email`, `serviceRef`, `status`, date, price, ...). The payload is stored
/// verbatim, so the document body is a field map with typed accessors for the
/// fields the backend itself reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Booking {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Owner email, used for the ownership check on listing.
    pub fn email(&self) -> Option<&str> {
        self.fields.get("email").and_then(Value::as_str)
    }

    pub fn status(&self) -> Option<&str> {
        self.fields.get("status").and_then(Value::as_str)
    }
}

/// A booking as submitted by a client - no id yet, the store assigns one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingDraft(pub Map<String, Value>);

impl BookingDraft {
    pub fn email(&self) -> Option<&str> {
        self.0.get("email").and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for BookingDraft {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
