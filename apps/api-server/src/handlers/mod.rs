//! HTTP handlers and route configuration.

mod auth;
mod bookings;
mod health;
mod services;

use actix_web::web;

/// Configure all application routes.
///
/// Paths mirror the frontend's existing contract, including the `/logOut`
/// casing.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::liveness))
        .route("/health", web::get().to(health::health_check))
        // Auth routes
        .route("/jwt", web::post().to(auth::issue_token))
        .route("/logOut", web::post().to(auth::log_out))
        // Service catalog (read-only)
        .service(
            web::scope("/services")
                .route("", web::get().to(services::list_services))
                .route("/{id}", web::get().to(services::get_service)),
        )
        // Bookings
        .service(
            web::scope("/bookings")
                .route("", web::get().to(bookings::list_bookings))
                .route("", web::post().to(bookings::create_booking))
                .route("/{id}", web::get().to(bookings::get_booking))
                .route("/{id}", web::patch().to(bookings::update_booking))
                .route("/{id}", web::delete().to(bookings::delete_booking)),
        );
}
