use async_trait::async_trait;
use variations_core::batch::BatchExecution;
use variations_core::statement::StatementRequest;

pub mod dynamo;
pub mod error;

pub use dynamo::DynamoExecutor;
pub use error::StoreError;

/// Executes a batch of independent statements against the store.
///
/// Outcomes come back in statement order. Statements are applied
/// individually; a failed statement does not undo the others.
#[async_trait]
pub trait BatchStatementExecutor: Send + Sync {
    async fn execute_batch(
        &self,
        statements: Vec<StatementRequest>,
    ) -> Result<BatchExecution, StoreError>;
}

/// Create a DynamoDB-backed executor for `region`, or for the SDK's default
/// region chain when `None`.
pub async fn connect(region: Option<&str>) -> DynamoExecutor {
    DynamoExecutor::connect(region).await
}
