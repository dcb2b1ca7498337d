use axum::{Router, http};
use http::header::CONTENT_TYPE;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::adapters::{self, http::app_state::AppState};

/// Path prefix the landing page used when the handlers were serverless functions.
pub const LEGACY_FUNCTIONS_PREFIX: &str = "/.netlify/functions";

pub fn create_app(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(app_state.config.cors_origin.clone())
        .allow_methods([http::Method::GET, http::Method::POST])
        .allow_headers([CONTENT_TYPE]);

    let routes = adapters::http::routes::router();

    Router::new()
        .merge(routes.clone())
        .nest(LEGACY_FUNCTIONS_PREFIX, routes)
        .with_state(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &http::Request<_>| {
                        let request_id = Uuid::new_v4();
                        tracing::info_span!(
                            "http-request",
                            method = %request.method(),
                            uri = %request.uri(),
                            version = ?request.version(),
                            request_id = %request_id
                        )
                    }),
                )
                .layer(SetResponseHeaderLayer::if_not_present(
                    http::header::X_CONTENT_TYPE_OPTIONS,
                    http::HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    http::header::X_FRAME_OPTIONS,
                    http::HeaderValue::from_static("DENY"),
                ))
                .layer(cors),
        )
}
