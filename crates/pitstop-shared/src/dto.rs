//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Response to credential issue/revoke requests (`POST /jwt`, `POST /logOut`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthAck {
    pub success: bool,
}

impl AuthAck {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Body of `PATCH /bookings/{id}` - the only mutable booking field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusPatch {
    pub status: String,
}

/// Query string of `GET /bookings`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingsQuery {
    pub email: Option<String>,
}
