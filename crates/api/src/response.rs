//! Shared response envelope types for API handlers.
//!
//! Successful responses use a `{ "data": ... }` envelope. Every error
//! response, whatever its cause, uses `{ "errors": [ ... ] }`.

use serde::Serialize;
use variations_core::batch::StatementFailure;
use variations_core::error::CoreError;

/// Standard `{ "data": T }` response envelope.
///
/// For variation batches `T` is the store's per-statement result list; see
/// [`variations_core::batch::BatchExecution`] for what is left out.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Standard `{ "errors": [...] }` response envelope.
#[derive(Debug, Serialize)]
pub struct ErrorsResponse {
    pub errors: Vec<ErrorEntry>,
}

/// One reported error.
///
/// `index` and `table_name` are only present for statements the store
/// rejected; `index` is the position of the statement (and of its source
/// element) in the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEntry {
    pub name: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
}

impl ErrorEntry {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            index: None,
            table_name: None,
        }
    }
}

impl From<&CoreError> for ErrorEntry {
    fn from(err: &CoreError) -> Self {
        Self::new(err.name(), err.message())
    }
}

impl From<StatementFailure> for ErrorEntry {
    fn from(failure: StatementFailure) -> Self {
        Self {
            name: failure.code.unwrap_or_else(|| "StatementError".to_string()),
            message: failure.message,
            index: Some(failure.index),
            table_name: failure.table_name,
        }
    }
}
