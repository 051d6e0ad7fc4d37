//! Batch planning (pre-flight) and reduction of store outcomes (post-flight).
//!
//! The two stages fail differently. Planning is all-or-nothing: the first
//! invalid element rejects the request and nothing is sent. Reduction
//! collects every per-statement error, because by then the store has
//! already applied the statements that succeeded. The store does not roll
//! back a partially failed batch.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::method::WriteMethod;
use crate::request::check_request_shape;
use crate::statement::{StatementBuilder, StatementRequest};
use crate::types::Timestamp;
use crate::validation::validate_all;

/// Statements ready for execution, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPlan {
    pub method: WriteMethod,
    pub statements: Vec<StatementRequest>,
}

/// Gate, validate and build a batch.
///
/// `now` is called once per element as its statement is built.
pub fn plan_batch<F>(
    method: &str,
    body: &[u8],
    builder: &StatementBuilder,
    mut now: F,
) -> Result<BatchPlan, CoreError>
where
    F: FnMut() -> Timestamp,
{
    let (method, elements) = check_request_shape(method, body)?;
    let variations = validate_all(&elements)?;

    let statements = variations
        .into_iter()
        .map(|variation| builder.build(variation, method, &now()))
        .collect();

    Ok(BatchPlan { method, statements })
}

/// Error reported by the store for a single statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatementError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl StatementError {
    fn is_empty(&self) -> bool {
        self.code.as_deref().map_or(true, str::is_empty) && self.message.is_empty()
    }
}

/// Outcome of one statement, in the same position as the statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatementOutcome {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<StatementError>,
}

impl StatementOutcome {
    pub fn succeeded(table_name: impl Into<String>) -> Self {
        Self {
            table_name: Some(table_name.into()),
            error: None,
        }
    }

    pub fn failed(
        table_name: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            table_name: Some(table_name.into()),
            error: Some(StatementError {
                code: Some(code.into()),
                message: message.into(),
            }),
        }
    }
}

/// Raw result of a batch execution as returned to callers on success.
///
/// Only `Responses` is carried. Batches are sent without
/// `ReturnConsumedCapacity`, so the store never reports `ConsumedCapacity`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchExecution {
    pub responses: Vec<StatementOutcome>,
}

/// A failed statement, tied back to its position in the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementFailure {
    pub index: usize,
    pub table_name: Option<String>,
    pub code: Option<String>,
    pub message: String,
}

/// Overall verdict on an executed batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchVerdict {
    Succeeded(BatchExecution),
    /// At least one statement failed. The others may still have been applied.
    Failed(Vec<StatementFailure>),
}

/// Collapse per-statement outcomes into a verdict.
pub fn reduce_batch(execution: BatchExecution) -> BatchVerdict {
    let failures: Vec<StatementFailure> = execution
        .responses
        .iter()
        .enumerate()
        .filter_map(|(index, outcome)| {
            let error = outcome.error.as_ref().filter(|e| !e.is_empty())?;
            Some(StatementFailure {
                index,
                table_name: outcome.table_name.clone(),
                code: error.code.clone(),
                message: error.message.clone(),
            })
        })
        .collect();

    if failures.is_empty() {
        BatchVerdict::Succeeded(execution)
    } else {
        BatchVerdict::Failed(failures)
    }
}
