//! JSON mirror of the cash drawer for programmatic clients.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use caixa_core::{CashTransaction, LedgerSummary, MonthlyReport};
use caixa_db::{CashbookRepository, LedgerRepository};
use caixa_shared::AppError;

use super::cashbook::{MonthlyReportQuery, load_monthly_report};
use crate::{AppState, error::ApiError};

/// Creates the JSON routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/summary", get(summary))
        .route("/reports/monthly", get(monthly_report))
        .route("/transactions/{id}", get(get_transaction))
}

/// Live balance over open transactions plus today's listing.
async fn summary(State(state): State<AppState>) -> Result<Json<LedgerSummary>, ApiError> {
    let summary = LedgerRepository::new((*state.db).clone())
        .summary(state.today())
        .await?;

    Ok(Json(summary))
}

/// Monthly report; the placeholder when month or year is missing.
async fn monthly_report(
    State(state): State<AppState>,
    Query(query): Query<MonthlyReportQuery>,
) -> Result<Json<MonthlyReport>, ApiError> {
    Ok(Json(load_monthly_report(&state, &query).await?))
}

/// One transaction by ID.
async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CashTransaction>, ApiError> {
    CashbookRepository::new((*state.db).clone())
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError(AppError::NotFound(format!("Transaction {id} not found"))))
}
