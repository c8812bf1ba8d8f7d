//! Route definitions.
//!
//! - `cashbook` - HTML pages and form endpoints at the site root
//! - `api` - JSON mirror nested under `/api/v1`
//! - `health` - liveness and database check

use axum::Router;

use crate::AppState;

pub mod api;
pub mod cashbook;
pub mod health;

/// Creates the JSON API router.
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(api::routes())
}
