//! Cash transactions table.
//!
//! One row per drawer movement. Amounts are stored in minor units.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CashTransactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CashTransactions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CashTransactions::Kind).string_len(8).not_null())
                    .col(
                        ColumnDef::new(CashTransactions::AmountCents)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CashTransactions::PaymentMethod)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(CashTransactions::ItemName)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(CashTransactions::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(CashTransactions::Date).date().not_null())
                    .col(
                        ColumnDef::new(CashTransactions::Closed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .check(Expr::col(CashTransactions::AmountCents).gte(0))
                    .check(Expr::col(CashTransactions::Kind).is_in(["entry", "exit"]))
                    .to_owned(),
            )
            .await?;

        // Live balance filters on the open flag
        manager
            .create_index(
                Index::create()
                    .name("idx_cash_transactions_closed")
                    .table(CashTransactions::Table)
                    .col(CashTransactions::Closed)
                    .to_owned(),
            )
            .await?;

        // Day/week/month windows and monthly reports filter on date
        manager
            .create_index(
                Index::create()
                    .name("idx_cash_transactions_date")
                    .table(CashTransactions::Table)
                    .col(CashTransactions::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(CashTransactions::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum CashTransactions {
    Table,
    Id,
    Kind,
    AmountCents,
    PaymentMethod,
    ItemName,
    Description,
    Date,
    Closed,
}
