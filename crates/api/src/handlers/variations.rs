//! Handler for the `/product-variations` resource.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::Method;
use axum::Json;
use chrono::Utc;
use variations_core::batch::{plan_batch, reduce_batch, BatchExecution, BatchVerdict};
use variations_core::statement::StatementBuilder;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST | PATCH /api/v1/product-variations
///
/// Insert (`POST`) or update (`PATCH`) a batch of variations. Any other
/// method is rejected after the body check. The first invalid element
/// rejects the whole batch and nothing is written. Once the batch has been
/// executed, any per-statement error turns the response into a 400 listing
/// every failed statement; the statements that succeeded stay applied.
pub async fn write_variations(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> AppResult<Json<DataResponse<BatchExecution>>> {
    let env = state.store_env()?;
    tracing::info!(method = %method, bytes = body.len(), "Received variation batch");

    let builder = StatementBuilder::new(env.product_variations_table.as_str());
    let plan = plan_batch(method.as_str(), &body, &builder, Utc::now)?;

    tracing::info!(
        method = %plan.method,
        statements = plan.statements.len(),
        table = builder.table(),
        "Executing variation batch"
    );
    let execution = state.executor.execute_batch(plan.statements).await?;

    match reduce_batch(execution) {
        BatchVerdict::Succeeded(execution) => Ok(Json(DataResponse { data: execution })),
        BatchVerdict::Failed(failures) => Err(AppError::Statements(failures)),
    }
}
