//! CORS policy for the browser client.

use axum::http::{
    header::{CONTENT_TYPE, LOCATION},
    HeaderValue, Method,
};
use tower_http::cors::CorsLayer;

/// Build the CORS layer.
///
/// With an origin configured only that origin may call the API; without
/// one every origin is allowed, which suits local development.
pub fn cors_layer(allowed_origin: Option<&str>) -> CorsLayer {
    let Some(origin) = allowed_origin else {
        return CorsLayer::permissive();
    };

    match origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([CONTENT_TYPE])
            .expose_headers([LOCATION]),
        Err(e) => {
            tracing::warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
            CorsLayer::permissive()
        }
    }
}
