use {
    axum::extract::{Path, State},
    tokio_util::sync::CancellationToken,
    tracing::info,
    comment_sentiment_core::models::{AnalyseResult, FileData},
    crate::{api::ApiResponse, AppState},
};

/// GET /analyse/:video_name
///
/// The run is cancelled if the client goes away before it finishes, so an
/// abandoned request never exports results.
pub async fn analyse(State(state): State<AppState>, Path(video_name): Path<String>) -> ApiResponse<AnalyseResult> {
    info!("analyse requested for {}", video_name);

    let cancel = CancellationToken::new();
    let guard = cancel.clone().drop_guard();
    let service = state.service.clone();

    let result = tokio::task::spawn_blocking(move || service.analyse(&video_name, &cancel)).await;
    guard.disarm();

    ApiResponse::from_blocking(result)
}

/// GET /comments/:video_name
pub async fn comments(State(state): State<AppState>, Path(video_name): Path<String>) -> ApiResponse<Vec<String>> {
    let service = state.service.clone();
    ApiResponse::from_blocking(tokio::task::spawn_blocking(move || service.keywords(&video_name)).await)
}

/// GET /files
pub async fn files(State(state): State<AppState>) -> ApiResponse<Vec<FileData>> {
    let service = state.service.clone();
    ApiResponse::from_blocking(tokio::task::spawn_blocking(move || service.files()).await)
}
