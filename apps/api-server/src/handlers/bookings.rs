//! Booking handlers.

use actix_web::{HttpResponse, web};
use serde_json::{Map, Value};

use pitstop_core::domain::BookingDraft;
use pitstop_core::ports::AuthError;
use pitstop_shared::dto::{BookingsQuery, StatusPatch};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /bookings - insert the payload verbatim, no schema validation.
pub async fn create_booking(
    state: web::Data<AppState>,
    body: web::Json<Map<String, Value>>,
) -> AppResult<HttpResponse> {
    let ack = state
        .bookings
        .insert(BookingDraft::from(body.into_inner()))
        .await?;

    Ok(HttpResponse::Created().json(ack))
}

/// GET /bookings?email= - protected; list the caller's own bookings.
///
/// The listing is always scoped to the verified credential's email. A query
/// email naming anyone else is rejected before the store is touched, and a
/// credential with no email cannot establish ownership at all.
pub async fn list_bookings(
    state: web::Data<AppState>,
    identity: Identity,
    query: web::Query<BookingsQuery>,
) -> AppResult<HttpResponse> {
    let Some(caller) = identity.email.as_deref() else {
        return Err(AuthError::OwnershipMismatch.into());
    };

    if let Some(requested) = query.email.as_deref() {
        if requested != caller {
            tracing::warn!("Booking list rejected: query email does not match credential");
            return Err(AuthError::OwnershipMismatch.into());
        }
    }

    let bookings = state.bookings.list_by_email(caller).await?;
    Ok(HttpResponse::Ok().json(bookings))
}

/// GET /bookings/{id} - fetch one booking, 404 when absent.
pub async fn get_booking(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let booking = state
        .bookings
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No booking with id {}", id)))?;

    Ok(HttpResponse::Ok().json(booking))
}

/// PATCH /bookings/{id} - set the status field (upsert-enabled).
pub async fn update_booking(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<StatusPatch>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let ack = state.bookings.set_status(&id, &body.status).await?;

    Ok(HttpResponse::Ok().json(ack))
}

/// DELETE /bookings/{id} - remove one booking.
pub async fn delete_booking(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let ack = state.bookings.delete(&id).await?;

    Ok(HttpResponse::Ok().json(ack))
}
