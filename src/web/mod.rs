use crate::domain::ports::SchoolDirectory;
use axum::routing::get;
use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod handlers;

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn SchoolDirectory>,
    /// Prebuilt front-end bundle served by the catch-all route.
    pub static_dir: PathBuf,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/search_school", get(handlers::search_school))
        .route("/api/timetable", get(handlers::timetable))
        // CORS applies to the API routes only, not the static bundle.
        .route_layer(CorsLayer::permissive())
        // Everything else is the single-page front-end.
        .fallback(handlers::serve_frontend)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
