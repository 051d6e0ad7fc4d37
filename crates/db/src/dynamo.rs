//! DynamoDB PartiQL implementation of [`BatchStatementExecutor`].

use async_trait::async_trait;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{AttributeValue, BatchStatementRequest, BatchStatementResponse};
use aws_sdk_dynamodb::Client;
use variations_core::batch::{BatchExecution, StatementError, StatementOutcome};
use variations_core::statement::{StatementParam, StatementRequest};

use crate::{BatchStatementExecutor, StoreError};

/// Sends batches through `BatchExecuteStatement`.
#[derive(Debug, Clone)]
pub struct DynamoExecutor {
    client: Client,
}

impl DynamoExecutor {
    pub async fn connect(region: Option<&str>) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region.to_string()));
        }
        let config = loader.load().await;
        Self::from_client(Client::new(&config))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BatchStatementExecutor for DynamoExecutor {
    async fn execute_batch(
        &self,
        statements: Vec<StatementRequest>,
    ) -> Result<BatchExecution, StoreError> {
        let requests = statements
            .into_iter()
            .map(to_batch_request)
            .collect::<Result<Vec<_>, _>>()?;
        let count = requests.len();

        let output = self
            .client
            .batch_execute_statement()
            .set_statements(Some(requests))
            .send()
            .await
            .map_err(|e| {
                let detail = DisplayErrorContext(&e).to_string();
                tracing::error!(error = %detail, statements = count, "BatchExecuteStatement failed");
                StoreError::Request(detail)
            })?;

        let responses: Vec<StatementOutcome> =
            output.responses().iter().map(to_outcome).collect();
        tracing::debug!(
            statements = count,
            responses = responses.len(),
            "BatchExecuteStatement completed"
        );

        Ok(BatchExecution { responses })
    }
}

fn to_attribute(param: StatementParam) -> AttributeValue {
    match param {
        StatementParam::S(value) => AttributeValue::S(value),
        StatementParam::N(value) => AttributeValue::N(value),
    }
}

fn to_batch_request(statement: StatementRequest) -> Result<BatchStatementRequest, StoreError> {
    let parameters = statement.parameters.into_iter().map(to_attribute).collect();
    BatchStatementRequest::builder()
        .statement(statement.statement)
        .set_parameters(Some(parameters))
        .build()
        .map_err(|e| StoreError::InvalidRequest(e.to_string()))
}

fn to_outcome(response: &BatchStatementResponse) -> StatementOutcome {
    StatementOutcome {
        table_name: response.table_name().map(str::to_string),
        error: response.error().map(|error| StatementError {
            code: error.code().map(|code| code.as_str().to_string()),
            message: error.message().unwrap_or_default().to_string(),
        }),
    }
}
