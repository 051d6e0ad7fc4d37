#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use variations_api::state::AppState;
use variations_core::batch::{BatchExecution, StatementOutcome};
use variations_core::config::StoreEnv;
use variations_core::error::CoreError;
use variations_core::statement::StatementRequest;
use variations_db::{BatchStatementExecutor, StoreError};

pub const TEST_TABLE: &str = "wp-product-variations-test";

/// How the scripted store answers the next batch.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Every statement succeeds.
    AllSucceed,
    /// The statements at these positions fail with `(code, message)`.
    FailAt(Vec<(usize, &'static str, &'static str)>),
    /// The batch call itself fails.
    TransportError,
    /// The executor panics.
    Panic,
}

/// In-memory executor that records every batch it receives.
pub struct ScriptedExecutor {
    reply: Mutex<Reply>,
    batches: Mutex<Vec<Vec<StatementRequest>>>,
}

impl ScriptedExecutor {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply: Mutex::new(reply),
            batches: Mutex::new(Vec::new()),
        })
    }

    pub fn batches(&self) -> Vec<Vec<StatementRequest>> {
        self.batches.lock().unwrap().clone()
    }

    pub fn set_reply(&self, reply: Reply) {
        *self.reply.lock().unwrap() = reply;
    }
}

#[async_trait]
impl BatchStatementExecutor for ScriptedExecutor {
    async fn execute_batch(
        &self,
        statements: Vec<StatementRequest>,
    ) -> Result<BatchExecution, StoreError> {
        let count = statements.len();
        self.batches.lock().unwrap().push(statements);

        let reply = self.reply.lock().unwrap().clone();
        let responses = match reply {
            Reply::AllSucceed => (0..count)
                .map(|_| StatementOutcome::succeeded(TEST_TABLE))
                .collect(),
            Reply::FailAt(failures) => (0..count)
                .map(|i| match failures.iter().find(|(at, _, _)| *at == i) {
                    Some((_, code, message)) => StatementOutcome::failed(TEST_TABLE, *code, *message),
                    None => StatementOutcome::succeeded(TEST_TABLE),
                })
                .collect(),
            Reply::TransportError => {
                return Err(StoreError::Request(
                    "dispatch failure: connection refused (secret-endpoint.internal)".into(),
                ))
            }
            Reply::Panic => panic!("scripted executor panic"),
        };

        Ok(BatchExecution { responses })
    }
}

pub fn test_store_env() -> StoreEnv {
    StoreEnv {
        default_region: "eu-west-1".to_string(),
        products_table: "wp-products-test".to_string(),
        product_variations_table: TEST_TABLE.to_string(),
    }
}

/// Build the full application router around `executor`.
pub fn build_test_app(executor: Arc<ScriptedExecutor>) -> Router {
    build_test_app_with_env(executor, Ok(test_store_env()))
}

pub fn build_test_app_with_env(
    executor: Arc<ScriptedExecutor>,
    store_env: Result<StoreEnv, CoreError>,
) -> Router {
    let state = AppState {
        store_env: store_env.map(Arc::new),
        executor,
    };
    variations_api::build_app(state)
}

pub fn variation(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "sku": format!("SKU-{id}"),
        "permalink": format!("https://shop.example/product/{id}"),
        "price": 24.5,
        "quantity": 10,
        "size": "L"
    })
}

pub async fn send(app: Router, method: Method, uri: &str, body: Vec<u8>) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    json: serde_json::Value,
) -> Response<Body> {
    send(app, method, uri, serde_json::to_vec(&json).unwrap()).await
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Vec::new()).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
