use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Failures of the two request pipelines.
///
/// Both carry the collaborator's message untouched and map to a 500 with
/// that message as `detail`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    #[error("Compilation failed: {0}")]
    CompilationFailed(String),
}

impl Error {
    /// The underlying message, without the kind prefix.
    pub fn detail(&self) -> &str {
        match self {
            Error::GenerationFailed(detail) | Error::CompilationFailed(detail) => detail,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        log::warn!("{self}");

        let body = serde_json::json!({ "detail": self.detail() });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
