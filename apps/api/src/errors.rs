use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::pdf_client::PdfError;
use crate::resume::session::SessionError;
use crate::resume::submit::SubmitError;
use crate::resume::validation::ErrorMap;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request broke a contract of the session (e.g. an index past the end).
    #[error("Precondition failed: {0}")]
    Precondition(#[from] SessionError),

    #[error("Resume is not ready for submission")]
    InvalidResume(ErrorMap),

    #[error("PDF service error: {0}")]
    Pdf(#[from] PdfError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<SubmitError> for AppError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Invalid(errors) => AppError::InvalidResume(errors),
            SubmitError::Pdf(err) => AppError::Pdf(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, fields) = match self {
            AppError::Precondition(err) => {
                tracing::warn!("Rejected resume action: {err}");
                (StatusCode::CONFLICT, "PRECONDITION_FAILED", err.to_string(), None)
            }
            AppError::InvalidResume(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_RESUME",
                "Resume has validation errors".to_string(),
                Some(errors),
            ),
            AppError::Pdf(err) => {
                tracing::error!("PDF service error: {err}");
                (
                    StatusCode::BAD_GATEWAY,
                    "PDF_SERVICE_ERROR",
                    "The PDF service could not generate the document".to_string(),
                    None,
                )
            }
            AppError::Internal(err) => {
                tracing::error!("Internal error: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    None,
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(fields) = fields {
            error["fields"] = json!(fields);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
