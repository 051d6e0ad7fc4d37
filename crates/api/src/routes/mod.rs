pub mod health;

use axum::routing::any;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /product-variations      POST create, PATCH update (other methods rejected)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().route(
        "/product-variations",
        any(handlers::variations::write_variations),
    )
}
