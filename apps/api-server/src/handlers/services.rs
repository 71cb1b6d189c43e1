//! Service catalog handlers - read-only.

use actix_web::{HttpResponse, web};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /services - list the full catalog.
pub async fn list_services(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let services = state.services.list().await?;
    Ok(HttpResponse::Ok().json(services))
}

/// GET /services/{id} - fetch one catalog entry, 404 when absent.
pub async fn get_service(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let service = state
        .services
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No service with id {}", id)))?;

    Ok(HttpResponse::Ok().json(service))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};
    use pitstop_core::domain::Service;
    use pitstop_infra::InMemoryServiceCatalog;
    use serde_json::{Map, json};

    use crate::config::CookiePolicy;

    fn seeded_state() -> AppState {
        let mut fields = Map::new();
        fields.insert("title".to_string(), json!("Full Engine Repair"));
        fields.insert("price".to_string(), json!("250"));

        AppState::in_memory(CookiePolicy::Local).with_catalog(
            InMemoryServiceCatalog::with_services(vec![Service::new("svc-1", fields)]),
        )
    }

    #[actix_web::test]
    async fn test_list_services_returns_catalog() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_state()))
                .route("/services", web::get().to(list_services)),
        )
        .await;

        let req = test::TestRequest::get().uri("/services").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.as_array().map(Vec::len), Some(1));
        assert_eq!(body[0]["title"], "Full Engine Repair");
        assert_eq!(body[0]["id"], "svc-1");
    }

    #[actix_web::test]
    async fn test_get_service_unknown_id_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_state()))
                .route("/services/{id}", web::get().to(get_service)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/services/missing")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
