//! Authentication middleware and extractors.

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use std::future::{Ready, ready};
use std::sync::Arc;

use pitstop_core::ports::{AuthError, TokenClaims, TokenService};
use serde_json::{Map, Value};

/// Name of the credential cookie.
pub const TOKEN_COOKIE: &str = "token";

/// Authenticated identity extractor, decoded from the credential cookie.
///
/// Use this in handlers to require authentication:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, {:?}!", identity.email)
/// }
/// ```
///
/// Rejections carry the absent-vs-invalid distinction: no cookie at all is
/// 401, a cookie that fails signature or expiry checks is 403. The handler is
/// never invoked in either case.
#[derive(Debug, Clone)]
pub struct Identity {
    pub email: Option<String>,
    pub extra: Map<String, Value>,
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            email: claims.identity.email,
            extra: claims.identity.extra,
        }
    }
}

/// Error type for authentication failures.
#[derive(Debug)]
pub struct AuthenticationError(pub AuthError);

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match &self.0 {
            AuthError::MissingCredential => actix_web::http::StatusCode::UNAUTHORIZED,
            AuthError::TokenExpired => actix_web::http::StatusCode::FORBIDDEN,
            AuthError::InvalidToken(_) => actix_web::http::StatusCode::FORBIDDEN,
            AuthError::OwnershipMismatch => actix_web::http::StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        use pitstop_shared::ErrorResponse;

        let error = match &self.0 {
            AuthError::MissingCredential => ErrorResponse::unauthorized()
                .with_detail("Please log in to obtain a credential cookie."),
            AuthError::TokenExpired => ErrorResponse::forbidden()
                .with_detail("Your credential has expired. Please log in again."),
            AuthError::InvalidToken(_) => {
                ErrorResponse::forbidden().with_detail("Credential verification failed.")
            }
            AuthError::OwnershipMismatch => ErrorResponse::unauthorized()
                .with_detail("The requested identity does not match your credential."),
        };

        actix_web::HttpResponse::build(self.status_code()).json(error)
    }
}

impl FromRequest for Identity {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // Get token service from app data
        let token_service = match req.app_data::<actix_web::web::Data<Arc<dyn TokenService>>>() {
            Some(service) => service,
            None => {
                tracing::error!("TokenService not found in app data");
                return ready(Err(AuthenticationError(AuthError::InvalidToken(
                    "Server configuration error".to_string(),
                ))));
            }
        };

        // Extract the credential from the cookie store
        let cookie = match req.cookie(TOKEN_COOKIE) {
            Some(cookie) => cookie,
            None => return ready(Err(AuthenticationError(AuthError::MissingCredential))),
        };

        // Validate signature and expiry
        match token_service.verify(cookie.value()) {
            Ok(claims) => ready(Ok(Identity::from(claims))),
            Err(e) => ready(Err(AuthenticationError(e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::{App, HttpResponse, test, web};
    use pitstop_core::ports::IdentityClaims;
    use pitstop_infra::JwtTokenService;
    use pitstop_infra::auth::JwtConfig;

    async fn whoami(identity: Identity) -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({ "email": identity.email }))
    }

    fn token_service(ttl_secs: i64) -> Arc<dyn TokenService> {
        Arc::new(JwtTokenService::new(JwtConfig {
            secret: "extractor-test-secret".to_string(),
            ttl_secs,
        }))
    }

    macro_rules! test_app {
        ($service:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($service))
                    .route("/whoami", web::get().to(whoami)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_missing_cookie_is_401() {
        let app = test_app!(token_service(3600));

        let req = test::TestRequest::get().uri("/whoami").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_tampered_token_is_403() {
        let service = token_service(3600);
        let token = service
            .issue(IdentityClaims::with_email("a@x.com"))
            .unwrap();
        let tampered = format!("{token}x");

        let app = test_app!(service);
        let req = test::TestRequest::get()
            .uri("/whoami")
            .cookie(Cookie::new(TOKEN_COOKIE, tampered))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), actix_web::http::StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_expired_token_is_403() {
        let expired_issuer = token_service(-120);
        let token = expired_issuer
            .issue(IdentityClaims::with_email("a@x.com"))
            .unwrap();

        let app = test_app!(token_service(3600));
        let req = test::TestRequest::get()
            .uri("/whoami")
            .cookie(Cookie::new(TOKEN_COOKIE, token))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), actix_web::http::StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_valid_token_injects_identity() {
        let service = token_service(3600);
        let token = service
            .issue(IdentityClaims::with_email("a@x.com"))
            .unwrap();

        let app = test_app!(service);
        let req = test::TestRequest::get()
            .uri("/whoami")
            .cookie(Cookie::new(TOKEN_COOKIE, token))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["email"], "a@x.com");
    }
}
