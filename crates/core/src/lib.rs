//! Domain logic for batch writes of product variations.
//!
//! Everything here is pure: environment and request gates, per-element
//! validation, statement building and reduction of store outcomes. The
//! store itself lives behind `variations_db::BatchStatementExecutor`.

pub mod batch;
pub mod config;
pub mod error;
pub mod method;
pub mod request;
pub mod statement;
pub mod types;
pub mod validation;
pub mod variation;
