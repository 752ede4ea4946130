mod handlers;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::post,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{ContactConfig, ServerConfig};
use crate::contact::EmailProvider;

/// Shared, read-only state for request handlers.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn EmailProvider>,
    pub contact: ContactConfig,
}

/// Build the router. Cross-origin requests are only allowed for the
/// configured origins; with none configured the endpoint is same-origin.
pub fn create_router(config: ServerConfig, provider: Arc<dyn EmailProvider>) -> Router {
    let cors_origins = config.cors_origins;
    let state = AppState {
        provider,
        contact: config.contact,
    };

    let api = Router::new().route("/contact", post(handlers::send_contact));

    let mut router = Router::new().nest("/api", api);
    if let Some(origins) = cors_origins.as_deref() {
        router = router.layer(cors_layer(origins));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
