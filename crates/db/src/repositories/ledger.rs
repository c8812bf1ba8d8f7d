//! Ledger repository for balance and report queries.
//!
//! Totals are computed by the database in one grouped-sum statement per
//! request: every metric is a `SUM(CASE WHEN <predicate> THEN amount ELSE 0 END)`
//! column. Date windows are computed in Rust and bound as parameters.

use caixa_core::{
    CashTransaction, DateWindow, LedgerSummary, LedgerWindows, MonthlyReport, ReportPeriod, Totals,
    WindowTotals,
};
use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
    sea_query::{Alias, Expr, Func, SimpleExpr},
};

use crate::entities::{cash_transactions, sea_orm_active_enums::TransactionKind};

/// Which rows a summed column counts.
#[derive(Debug, Clone, Copy)]
struct SumFilter {
    kind: TransactionKind,
    open_only: bool,
    window: Option<DateWindow>,
}

impl SumFilter {
    const fn open(kind: TransactionKind, window: Option<DateWindow>) -> Self {
        Self {
            kind,
            open_only: true,
            window,
        }
    }

    const fn any(kind: TransactionKind, window: DateWindow) -> Self {
        Self {
            kind,
            open_only: false,
            window: Some(window),
        }
    }

    /// `CAST(SUM(CASE WHEN ... THEN amount_cents ELSE 0 END) AS BIGINT)`
    fn sum_expr(self) -> SimpleExpr {
        let mut predicate = cash_transactions::Column::Kind.eq(self.kind);
        if self.open_only {
            predicate = predicate.and(cash_transactions::Column::Closed.eq(false));
        }
        if let Some(window) = self.window {
            predicate = predicate.and(cash_transactions::Column::Date.between(window.start, window.end));
        }

        let amount_if = Expr::case(predicate, Expr::col(cash_transactions::Column::AmountCents))
            .finally(Expr::val(0i64));

        Func::cast_as(Func::sum(amount_if), Alias::new("BIGINT")).into()
    }
}

/// Raw sums for the live summary, in minor units.
#[derive(Debug, Default, FromQueryResult)]
struct WindowSums {
    overall_entry: Option<i64>,
    overall_exit: Option<i64>,
    today_entry: Option<i64>,
    today_exit: Option<i64>,
    week_entry: Option<i64>,
    week_exit: Option<i64>,
    month_entry: Option<i64>,
    month_exit: Option<i64>,
}

impl From<WindowSums> for WindowTotals {
    fn from(sums: WindowSums) -> Self {
        Self {
            overall: Totals::from_cents(sums.overall_entry, sums.overall_exit),
            today: Totals::from_cents(sums.today_entry, sums.today_exit),
            week: Totals::from_cents(sums.week_entry, sums.week_exit),
            month: Totals::from_cents(sums.month_entry, sums.month_exit),
        }
    }
}

/// Raw sums for a monthly report, in minor units.
#[derive(Debug, Default, FromQueryResult)]
struct MonthSums {
    total_entry: Option<i64>,
    total_exit: Option<i64>,
}

/// Ledger repository for summary and report queries.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    db: DatabaseConnection,
}

impl LedgerRepository {
    /// Creates a new ledger repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    // ========================================================================
    // Live summary
    // ========================================================================

    /// Builds the live summary as of `today`.
    ///
    /// Totals count open transactions only; the listing holds every
    /// transaction dated `today`. Both reads share one database transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if any query fails. No partial summary is returned.
    pub async fn summary(&self, today: NaiveDate) -> Result<LedgerSummary, DbErr> {
        let windows = LedgerWindows::for_date(today);

        let txn = self.db.begin().await?;
        let totals = query_window_totals(&txn, &windows).await?;
        let listing = query_transactions_in(&txn, DateWindow::day(today)).await?;
        txn.commit().await?;

        Ok(LedgerSummary::new(today, totals, listing))
    }

    /// Open-balance totals over the given windows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn window_totals(&self, windows: &LedgerWindows) -> Result<WindowTotals, DbErr> {
        query_window_totals(&self.db, windows).await
    }

    /// Every transaction dated `date`, open or closed, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn transactions_on(&self, date: NaiveDate) -> Result<Vec<CashTransaction>, DbErr> {
        query_transactions_in(&self.db, DateWindow::day(date)).await
    }

    // ========================================================================
    // Monthly report
    // ========================================================================

    /// Builds the report for `period`, closed transactions included.
    ///
    /// # Errors
    ///
    /// Returns an error if any query fails. No partial report is returned.
    pub async fn monthly_report(&self, period: ReportPeriod) -> Result<MonthlyReport, DbErr> {
        let window = period.window();

        let txn = self.db.begin().await?;
        let totals = query_period_totals(&txn, window).await?;
        let listing = query_transactions_in(&txn, window).await?;
        txn.commit().await?;

        Ok(MonthlyReport::new(period, totals, listing))
    }

    /// Totals for `period`, closed transactions included.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn monthly_totals(&self, period: ReportPeriod) -> Result<Totals, DbErr> {
        query_period_totals(&self.db, period.window()).await
    }
}

async fn query_window_totals<C>(db: &C, windows: &LedgerWindows) -> Result<WindowTotals, DbErr>
where
    C: ConnectionTrait,
{
    use TransactionKind::{Entry, Exit};

    let sums = cash_transactions::Entity::find()
        .select_only()
        .column_as(SumFilter::open(Entry, None).sum_expr(), "overall_entry")
        .column_as(SumFilter::open(Exit, None).sum_expr(), "overall_exit")
        .column_as(SumFilter::open(Entry, Some(windows.today)).sum_expr(), "today_entry")
        .column_as(SumFilter::open(Exit, Some(windows.today)).sum_expr(), "today_exit")
        .column_as(SumFilter::open(Entry, Some(windows.week)).sum_expr(), "week_entry")
        .column_as(SumFilter::open(Exit, Some(windows.week)).sum_expr(), "week_exit")
        .column_as(SumFilter::open(Entry, Some(windows.month)).sum_expr(), "month_entry")
        .column_as(SumFilter::open(Exit, Some(windows.month)).sum_expr(), "month_exit")
        .into_model::<WindowSums>()
        .one(db)
        .await?
        .unwrap_or_default();

    Ok(sums.into())
}

async fn query_period_totals<C>(db: &C, window: DateWindow) -> Result<Totals, DbErr>
where
    C: ConnectionTrait,
{
    let sums = cash_transactions::Entity::find()
        .select_only()
        .column_as(SumFilter::any(TransactionKind::Entry, window).sum_expr(), "total_entry")
        .column_as(SumFilter::any(TransactionKind::Exit, window).sum_expr(), "total_exit")
        .into_model::<MonthSums>()
        .one(db)
        .await?
        .unwrap_or_default();

    Ok(Totals::from_cents(sums.total_entry, sums.total_exit))
}

async fn query_transactions_in<C>(db: &C, window: DateWindow) -> Result<Vec<CashTransaction>, DbErr>
where
    C: ConnectionTrait,
{
    let rows = cash_transactions::Entity::find()
        .filter(cash_transactions::Column::Date.between(window.start, window.end))
        .order_by_asc(cash_transactions::Column::Date)
        .order_by_asc(cash_transactions::Column::Id)
        .all(db)
        .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}
