//! HTTP layer with Axum routes.
//!
//! This crate provides:
//! - The HTML cash-drawer pages and their form endpoints
//! - A JSON mirror of the same operations under `/api/v1`
//! - A JSON-or-form body extractor
//! - Error to response mapping

pub mod error;
pub mod extractors;
pub mod routes;
pub mod views;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use axum::Router;
use caixa_shared::LedgerConfig;
use chrono::{Local, NaiveDate};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Ledger presentation settings.
    pub ledger: LedgerConfig,
}

impl AppState {
    /// Creates the state from an established pool.
    pub fn new(db: DatabaseConnection, ledger: LedgerConfig) -> Self {
        Self {
            db: Arc::new(db),
            ledger,
        }
    }

    /// The current date in the server's local time zone.
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .merge(routes::cashbook::routes())
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
