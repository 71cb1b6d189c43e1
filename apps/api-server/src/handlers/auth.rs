//! Authentication handlers - credential issue and revoke.

use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web::{HttpResponse, web};
use std::sync::Arc;

use pitstop_core::ports::{IdentityClaims, TokenService};
use pitstop_shared::dto::AuthAck;

use crate::config::CookiePolicy;
use crate::middleware::auth::TOKEN_COOKIE;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Build the credential cookie with the deployment's attribute policy.
fn credential_cookie(policy: CookiePolicy, value: String, max_age: Duration) -> Cookie<'static> {
    let builder = Cookie::build(TOKEN_COOKIE, value)
        .path("/")
        .http_only(true)
        .max_age(max_age);

    match policy {
        CookiePolicy::CrossSite => builder.secure(true).same_site(SameSite::None),
        CookiePolicy::Local => builder.secure(false).same_site(SameSite::Lax),
    }
    .finish()
}

/// POST /jwt - sign a credential for the submitted identity and set the cookie.
///
/// The payload is taken as-is; a missing email is not rejected here, it just
/// leaves the holder unable to pass the ownership check on protected routes.
pub async fn issue_token(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    body: web::Json<IdentityClaims>,
) -> AppResult<HttpResponse> {
    let identity = body.into_inner();
    tracing::debug!(has_email = identity.email.is_some(), "Issuing credential");

    let token = token_service
        .issue(identity)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let cookie = credential_cookie(
        state.cookie_policy,
        token,
        Duration::seconds(token_service.ttl_seconds()),
    );

    Ok(HttpResponse::Ok().cookie(cookie).json(AuthAck::ok()))
}

/// POST /logOut - clear the credential cookie.
///
/// This only clears the client's cookie; a previously copied token stays
/// valid until natural expiry (no server-side revocation).
pub async fn log_out(state: web::Data<AppState>) -> HttpResponse {
    let cookie = credential_cookie(state.cookie_policy, String::new(), Duration::ZERO);

    HttpResponse::Ok().cookie(cookie).json(AuthAck::ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use pitstop_infra::JwtTokenService;
    use pitstop_infra::auth::JwtConfig;

    fn token_service() -> Arc<dyn TokenService> {
        Arc::new(JwtTokenService::new(JwtConfig {
            secret: "auth-handler-test-secret".to_string(),
            ttl_secs: 3600,
        }))
    }

    #[actix_web::test]
    async fn test_issue_sets_http_only_cookie() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory(CookiePolicy::Local)))
                .app_data(web::Data::new(token_service()))
                .route("/jwt", web::post().to(issue_token)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/jwt")
            .set_json(serde_json::json!({ "email": "a@x.com" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert!(res.status().is_success());
        let cookie = res
            .response()
            .cookies()
            .find(|c| c.name() == TOKEN_COOKIE)
            .expect("token cookie set");
        assert!(cookie.http_only().unwrap_or(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert!(!cookie.value().is_empty());
    }

    #[actix_web::test]
    async fn test_cross_site_policy_sets_secure_none() {
        let cookie = credential_cookie(
            CookiePolicy::CrossSite,
            "tok".to_string(),
            Duration::seconds(3600),
        );

        assert!(cookie.secure().unwrap_or(false));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
        assert!(cookie.http_only().unwrap_or(false));
    }

    #[actix_web::test]
    async fn test_log_out_clears_cookie() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory(CookiePolicy::Local)))
                .route("/logOut", web::post().to(log_out)),
        )
        .await;

        let req = test::TestRequest::post().uri("/logOut").to_request();
        let res = test::call_service(&app, req).await;

        assert!(res.status().is_success());
        let cookie = res
            .response()
            .cookies()
            .find(|c| c.name() == TOKEN_COOKIE)
            .expect("token cookie cleared");
        assert!(cookie.value().is_empty());
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
