//! Cashbook repository: recording, editing and closing transactions.

use caixa_core::{CashTransaction, NewTransaction, TransactionChanges};
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter, Set,
    sea_query::Expr,
};

use crate::entities::{cash_transactions, sea_orm_active_enums::TransactionKind};

/// Repository for transaction mutations and period closing.
#[derive(Debug, Clone)]
pub struct CashbookRepository {
    db: DatabaseConnection,
}

impl CashbookRepository {
    /// Creates a new cashbook repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a new open transaction dated `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn add(
        &self,
        input: &NewTransaction,
        today: NaiveDate,
    ) -> Result<CashTransaction, DbErr> {
        let model = cash_transactions::ActiveModel {
            id: NotSet,
            kind: Set(TransactionKind::from(input.kind)),
            amount_cents: Set(input.amount.cents()),
            payment_method: Set(input.payment_method.clone()),
            item_name: Set(input.item_name.clone()),
            description: Set(input.description.clone()),
            date: Set(today),
            closed: Set(false),
        }
        .insert(&self.db)
        .await?;

        Ok(model.into())
    }

    /// Finds a transaction by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<CashTransaction>, DbErr> {
        Ok(cash_transactions::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Into::into))
    }

    /// Replaces every editable field of transaction `id`.
    ///
    /// The closed flag is never touched. An unknown ID is not an error;
    /// the returned count of affected rows is zero in that case.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update(&self, id: i32, changes: &TransactionChanges) -> Result<u64, DbErr> {
        let result = cash_transactions::Entity::update_many()
            .col_expr(
                cash_transactions::Column::Kind,
                Expr::value(TransactionKind::from(changes.kind)),
            )
            .col_expr(
                cash_transactions::Column::AmountCents,
                Expr::value(changes.amount.cents()),
            )
            .col_expr(cash_transactions::Column::Date, Expr::value(changes.date))
            .col_expr(
                cash_transactions::Column::PaymentMethod,
                Expr::value(changes.payment_method.clone()),
            )
            .col_expr(
                cash_transactions::Column::ItemName,
                Expr::value(changes.item_name.clone()),
            )
            .col_expr(
                cash_transactions::Column::Description,
                Expr::value(changes.description.clone()),
            )
            .filter(cash_transactions::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes transaction `id`. Deleting an unknown ID affects zero rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = cash_transactions::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Closes the current register period.
    ///
    /// Every open transaction is marked closed by a single `UPDATE`, so
    /// readers see either none or all of them closed. Returns how many were
    /// closed; a second call right after returns zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn close_period(&self) -> Result<u64, DbErr> {
        let result = cash_transactions::Entity::update_many()
            .col_expr(cash_transactions::Column::Closed, Expr::value(true))
            .filter(cash_transactions::Column::Closed.eq(false))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
