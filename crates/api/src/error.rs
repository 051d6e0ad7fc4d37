use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use variations_core::batch::StatementFailure;
use variations_core::error::CoreError;
use variations_db::StoreError;

use crate::response::{ErrorEntry, ErrorsResponse};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for rejected requests and adds the failures that can
/// only happen once the store is involved. Implements [`IntoResponse`] to
/// produce the `{ "errors": [...] }` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request was rejected before reaching the store.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The store executed the batch but rejected some statements.
    #[error("{} batch statement(s) failed", .0.len())]
    Statements(Vec<StatementFailure>),

    /// The batch call itself failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, errors) = match self {
            AppError::Core(err) => {
                tracing::warn!(name = %err.name(), "{}", err.summary());
                (StatusCode::BAD_REQUEST, vec![ErrorEntry::from(&err)])
            }
            AppError::Statements(failures) => {
                tracing::warn!(failed = failures.len(), "Store rejected batch statements");
                (
                    StatusCode::BAD_REQUEST,
                    failures.into_iter().map(ErrorEntry::from).collect(),
                )
            }
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                (StatusCode::INTERNAL_SERVER_ERROR, vec![internal_entry()])
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, vec![internal_entry()])
            }
        };

        (status, axum::Json(ErrorsResponse { errors })).into_response()
    }
}

fn internal_entry() -> ErrorEntry {
    ErrorEntry::new("Internal error", "An internal error occurred")
}
