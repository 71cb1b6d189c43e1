use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Service entity - one entry in the read-only catalog (title, image, price, ...).
///
/// The catalog is seed data maintained out-of-band, so everything beyond the id is
/// carried as an opaque field map rather than a rigid schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Service {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// The display title, when the seed document carries one.
    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }
}
