//! Cash drawer pages and form endpoints.
//!
//! Every mutation answers `303 See Other` to `/`. Bodies may be JSON or
//! urlencoded forms. Field names from the legacy Portuguese forms
//! (`tipo`, `valor`, `forma_pagamento`, `nome_do_item`, `descricao`,
//! `data`) are accepted as aliases.

use axum::{
    Router,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use caixa_core::{
    LedgerError, MonthlyReport, NewTransaction, ReportPeriod, TransactionChanges, parse_date,
};
use caixa_db::{CashbookRepository, LedgerRepository};
use caixa_shared::{AppError, AppResult, LedgerConfig};
use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    AppState,
    error::{PageError, from_db, from_ledger},
    extractors::{JsonOrForm, Scalar},
    views,
};

/// Creates the cash drawer routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/add-transacao", post(add_transaction))
        .route("/edit-transacao/{id}", get(edit_transaction))
        .route("/update-transacao", post(update_transaction))
        .route("/delete-transacao", post(delete_transaction))
        .route("/fechar-caixa", post(close_register))
        .route("/relatorio-mensal", get(monthly_report))
}

// ============================================================================
// Request Types
// ============================================================================

/// Body for recording a transaction.
#[derive(Debug, Deserialize)]
pub struct AddTransactionRequest {
    /// `entry` or `exit`.
    #[serde(rename = "type", alias = "tipo", default)]
    pub kind: String,
    /// Decimal amount, as text or a JSON number.
    #[serde(alias = "valor", default)]
    pub amount: Option<Scalar>,
    /// Payment method.
    #[serde(alias = "forma_pagamento", default)]
    pub payment_method: String,
    /// Item name.
    #[serde(alias = "nome_do_item", default)]
    pub item_name: String,
    /// Free-text description.
    #[serde(alias = "descricao", default)]
    pub description: String,
}

impl AddTransactionRequest {
    /// Validates the raw fields.
    ///
    /// # Errors
    ///
    /// Returns a `LedgerError` for a malformed amount or type.
    pub fn validate(self) -> Result<NewTransaction, LedgerError> {
        let amount = self.amount.map(|a| a.to_string()).unwrap_or_default();
        NewTransaction::parse(
            &self.kind,
            &amount,
            self.payment_method,
            self.item_name,
            self.description,
        )
    }
}

/// Body for replacing a transaction's fields.
#[derive(Debug, Deserialize)]
pub struct UpdateTransactionRequest {
    /// Transaction ID.
    #[serde(default)]
    pub id: Option<Scalar>,
    /// `entry` or `exit`.
    #[serde(rename = "type", alias = "tipo", default)]
    pub kind: String,
    /// Decimal amount, as text or a JSON number.
    #[serde(alias = "valor", default)]
    pub amount: Option<Scalar>,
    /// New date, `YYYY-MM-DD`.
    #[serde(alias = "data", default)]
    pub date: String,
    /// Payment method.
    #[serde(alias = "forma_pagamento", default)]
    pub payment_method: String,
    /// Item name.
    #[serde(alias = "nome_do_item", default)]
    pub item_name: String,
    /// Free-text description.
    #[serde(alias = "descricao", default)]
    pub description: String,
}

impl UpdateTransactionRequest {
    /// Validates the raw fields.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed ID, amount, type or date.
    pub fn validate(self) -> AppResult<(i32, TransactionChanges)> {
        let id = parse_id(self.id.as_ref())?;
        let amount = self.amount.map(|a| a.to_string()).unwrap_or_default();
        let date = parse_date(&self.date).map_err(|e| from_ledger(&e))?;
        let changes = TransactionChanges::parse(
            &self.kind,
            &amount,
            date,
            self.payment_method,
            self.item_name,
            self.description,
        )
        .map_err(|e| from_ledger(&e))?;

        Ok((id, changes))
    }
}

/// Body for deleting a transaction.
#[derive(Debug, Deserialize)]
pub struct DeleteTransactionRequest {
    /// Transaction ID.
    #[serde(default)]
    pub id: Option<Scalar>,
}

/// Query parameters for the monthly report.
#[derive(Debug, Default, Deserialize)]
pub struct MonthlyReportQuery {
    /// Month, 1-12.
    #[serde(alias = "mes")]
    pub month: Option<String>,
    /// Four-digit year.
    #[serde(alias = "ano")]
    pub year: Option<String>,
}

fn parse_id(raw: Option<&Scalar>) -> AppResult<i32> {
    let text = raw.map(Scalar::as_text).unwrap_or_default();
    text.trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("Invalid transaction id: {text:?}")))
}

// ============================================================================
// Shared queries
// ============================================================================

/// The period shown before a month has been chosen.
fn placeholder_period(config: LedgerConfig) -> ReportPeriod {
    ReportPeriod::new(config.default_report_month, config.default_report_year).unwrap_or_else(
        |e| {
            warn!(error = %e, "Configured placeholder report period is invalid, using 01/2024");
            ReportPeriod::FALLBACK
        },
    )
}

/// Builds the report named by `query`, or the placeholder when the month or
/// year is missing.
///
/// # Errors
///
/// Returns a validation error for a malformed month or year and a database
/// error if the report queries fail.
pub async fn load_monthly_report(
    state: &AppState,
    query: &MonthlyReportQuery,
) -> AppResult<MonthlyReport> {
    let period = ReportPeriod::from_query(query.month.as_deref(), query.year.as_deref())
        .map_err(|e| from_ledger(&e))?;

    let Some(period) = period else {
        return Ok(MonthlyReport::placeholder(placeholder_period(state.ledger)));
    };

    LedgerRepository::new((*state.db).clone())
        .monthly_report(period)
        .await
        .map_err(|e| from_db(&e))
}

// ============================================================================
// Handlers
// ============================================================================

/// Live balance and today's transactions.
async fn home(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let summary = LedgerRepository::new((*state.db).clone())
        .summary(state.today())
        .await?;

    Ok(Html(views::home(&summary)))
}

/// Records a new open transaction dated today.
async fn add_transaction(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<AddTransactionRequest>,
) -> Result<Redirect, PageError> {
    let input = payload.validate()?;

    let created = CashbookRepository::new((*state.db).clone())
        .add(&input, state.today())
        .await?;

    info!(
        transaction_id = created.id,
        kind = %created.kind,
        amount = %created.amount,
        "Transaction recorded"
    );

    Ok(Redirect::to("/"))
}

/// Edit form for one transaction; unknown IDs go back home.
async fn edit_transaction(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, PageError> {
    let found = CashbookRepository::new((*state.db).clone())
        .find_by_id(id)
        .await?;

    Ok(match found {
        Some(tx) => Html(views::edit(&tx)).into_response(),
        None => Redirect::to("/").into_response(),
    })
}

/// Replaces every editable field of a transaction.
async fn update_transaction(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<UpdateTransactionRequest>,
) -> Result<Redirect, PageError> {
    let (id, changes) = payload.validate()?;

    let affected = CashbookRepository::new((*state.db).clone())
        .update(id, &changes)
        .await?;

    if affected == 0 {
        warn!(transaction_id = id, "Update matched no transaction");
    } else {
        info!(transaction_id = id, amount = %changes.amount, "Transaction updated");
    }

    Ok(Redirect::to("/"))
}

/// Deletes a transaction. Unknown IDs are not an error.
async fn delete_transaction(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<DeleteTransactionRequest>,
) -> Result<Redirect, PageError> {
    let id = parse_id(payload.id.as_ref())?;

    let removed = CashbookRepository::new((*state.db).clone())
        .delete(id)
        .await?;

    if removed == 0 {
        warn!(transaction_id = id, "Delete matched no transaction");
    } else {
        info!(transaction_id = id, "Transaction deleted");
    }

    Ok(Redirect::to("/"))
}

/// Closes the register period.
async fn close_register(State(state): State<AppState>) -> Result<Redirect, PageError> {
    let closed = CashbookRepository::new((*state.db).clone())
        .close_period()
        .await?;

    info!(closed, "Register period closed");

    Ok(Redirect::to("/"))
}

/// Monthly report page.
async fn monthly_report(
    State(state): State<AppState>,
    Query(query): Query<MonthlyReportQuery>,
) -> Result<Html<String>, PageError> {
    let report = load_monthly_report(&state, &query).await?;

    Ok(Html(views::monthly_report(&report)))
}
