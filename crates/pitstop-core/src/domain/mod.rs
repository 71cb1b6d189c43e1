//! Domain entities - the documents this backend serves.

mod ack;
mod booking;
mod service;

pub use ack::{DeleteAck, InsertAck, UpdateAck};
pub use booking::{Booking, BookingDraft};
pub use service::Service;
