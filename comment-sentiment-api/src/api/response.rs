use {
    axum::{
        http::StatusCode,
        response::{IntoResponse, Response},
        Json,
    },
    serde::Serialize,
    tokio::task::JoinError,
    tracing::error,
    comment_sentiment_core::error::Error,
};

/// Body shared by every operation, tagged by `status`:
/// `{"status":"ok","data":..}`, `{"status":"not_found","message":..}` or
/// `{"status":"error","message":..}`.
#[derive(Serialize, Debug)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ApiResponse<T> {
    Ok { data: T },
    NotFound { message: String },
    Error { message: String },
}

impl<T> ApiResponse<T> {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiResponse::Ok { .. } => StatusCode::OK,
            ApiResponse::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiResponse::Error { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn from_blocking(result: Result<comment_sentiment_core::error::Result<T>, JoinError>) -> Self {
        match result {
            Ok(Ok(data)) => ApiResponse::Ok { data },
            Ok(Err(err)) => err.into(),
            Err(err) => {
                error!("analysis task failed: {}", err);
                ApiResponse::Error {
                    message: "analysis task failed".to_owned(),
                }
            },
        }
    }
}

impl<T> From<Error> for ApiResponse<T> {
    fn from(err: Error) -> Self {
        match err {
            Error::SourceNotFound(video_name) => ApiResponse::NotFound {
                message: format!("file not found: {}", video_name),
            },
            other => {
                error!("request failed: {}", other);
                ApiResponse::Error {
                    message: other.to_string(),
                }
            },
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}
