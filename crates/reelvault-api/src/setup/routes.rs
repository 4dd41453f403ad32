//! Route assembly.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::auth;
use crate::handlers;
use crate::state::AppState;

/// Slack on top of the file-size ceilings to account for multipart
/// framing around the file bytes.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn build_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/api/records", post(handlers::records::create_record))
        .route("/api/records/{record_id}", get(handlers::records::get_record))
        .route(
            "/api/records/{record_id}/thumbnail",
            post(handlers::thumbnail_upload::upload_thumbnail).layer(DefaultBodyLimit::max(
                state.config.max_thumbnail_size_bytes + MULTIPART_OVERHEAD,
            )),
        )
        .route(
            "/api/records/{record_id}/video",
            post(handlers::video_upload::upload_video).layer(DefaultBodyLimit::max(
                state.config.max_video_size_bytes + MULTIPART_OVERHEAD,
            )),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_auth,
        ));

    Router::new()
        .merge(api)
        .route("/healthz", get(health))
        .nest_service("/assets", ServeDir::new(&state.config.asset_root))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
