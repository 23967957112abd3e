use {
    std::sync::Arc,
    axum::{http::HeaderValue, routing::get, Router},
    tower_http::{
        cors::{Any, CorsLayer},
        trace::TraceLayer,
    },
    comment_sentiment_core::{
        analysis::AnalysisService,
        config::ServerConfig,
    },
};

pub mod api;
pub mod utils;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AnalysisService>,
}

impl AppState {
    pub fn new(service: AnalysisService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/analyse/:video_name", get(api::analyse))
        .route("/comments/:video_name", get(api::comments))
        .route("/files", get(api::files))
        .merge(api::health_routes())
        .layer(cors_layer(server.allowed_origins()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
