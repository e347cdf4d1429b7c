//! API layer - HTTP entry points.

pub mod http;

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::app::App;
use crate::config::AppConfig;

/// Full router: routes, request tracing and optional CORS.
pub fn router(app: Arc<App>, config: &AppConfig) -> Router {
    let mut router = http::routes(&config.api_prefix)
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer(config.cors_allowed_origins.as_deref()) {
        router = router.layer(cors);
    }
    router
}

/// `None` disables CORS, `*` allows any origin, anything else is a
/// comma-separated origin list.
pub fn build_cors_layer(allowed_origins: Option<&str>) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins.map(str::trim).filter(|s| !s.is_empty())?;

    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::infrastructure::persistence::InMemoryCharacterRepo;
    use crate::infrastructure::random::SystemRandom;

    fn app() -> Arc<App> {
        Arc::new(App::new(
            Arc::new(InMemoryCharacterRepo::new()),
            Arc::new(SystemRandom::new()),
        ))
    }

    #[test]
    fn cors_disabled_without_origins() {
        assert!(build_cors_layer(None).is_none());
        assert!(build_cors_layer(Some("  ")).is_none());
        assert!(build_cors_layer(Some(" , ")).is_none());
    }

    #[test]
    fn cors_enabled_for_wildcard_and_lists() {
        assert!(build_cors_layer(Some("*")).is_some());
        assert!(build_cors_layer(Some("http://localhost:5173, https://arena.example")).is_some());
    }

    #[tokio::test]
    async fn router_serves_configured_prefix() {
        let config = AppConfig {
            api_prefix: "/arena".to_string(),
            ..AppConfig::default()
        };
        let request = Request::builder()
            .uri("/arena/health")
            .body(Body::empty())
            .unwrap();

        let response = router(app(), &config).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn wildcard_cors_answers_with_any_origin() {
        let config = AppConfig {
            cors_allowed_origins: Some("*".to_string()),
            ..AppConfig::default()
        };
        let request = Request::builder()
            .uri("/api/v1/health")
            .header(header::ORIGIN, "http://localhost:5173")
            .body(Body::empty())
            .unwrap();

        let response = router(app(), &config).oneshot(request).await.unwrap();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("*"))
        );
    }
}
