//! Application configuration loaded from environment variables.

use std::env;

use pitstop_infra::StoreConfig;

/// Credential cookie attribute policy.
///
/// `CrossSite` (secure + SameSite=None) is required when the frontend is
/// served from another origin over TLS; `Local` relaxes both for plain-HTTP
/// development. The two are mutually incompatible, so the policy is fixed
/// per deployment rather than varied per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookiePolicy {
    CrossSite,
    Local,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: Option<StoreConfig>,
    pub cookie_policy: CookiePolicy,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let store = env::var("STORE_URL").ok().map(|url| StoreConfig {
            url,
            db_name: env::var("STORE_DB").unwrap_or_else(|_| "carService".to_string()),
        });

        let cookie_policy = match env::var("COOKIE_POLICY").as_deref() {
            Ok("cross-site") => CookiePolicy::CrossSite,
            Ok("local") => CookiePolicy::Local,
            Ok(other) => {
                tracing::warn!(value = %other, "Unknown COOKIE_POLICY, defaulting to local");
                CookiePolicy::Local
            }
            Err(_) => CookiePolicy::Local,
        };

        // Credentialed CORS requires an explicit allow-list; a wildcard origin
        // is rejected by browsers when cookies are involved.
        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            store,
            cookie_policy,
            cors_origins,
        }
    }
}
