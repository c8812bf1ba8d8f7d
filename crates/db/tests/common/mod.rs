//! Shared setup for repository integration tests.
//!
//! Each test gets its own in-memory SQLite database with the real
//! migrations applied. The pool is capped at one connection because every
//! in-memory SQLite connection is a separate database.

#![allow(dead_code)]

use caixa_core::TransactionKind;
use caixa_db::entities::cash_transactions;
use caixa_db::migration::{Migrator, MigratorTrait};
use caixa_shared::DatabaseConfig;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, Set};

pub async fn setup() -> DatabaseConnection {
    let mut config = DatabaseConfig::new("sqlite::memory:");
    config.max_connections = 1;
    config.min_connections = 1;

    let db = caixa_db::connect(&config)
        .await
        .expect("Failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

/// Inserts a row with full control over date and closed flag.
pub async fn insert_row(
    db: &DatabaseConnection,
    kind: TransactionKind,
    cents: i64,
    date: NaiveDate,
    closed: bool,
) -> cash_transactions::Model {
    cash_transactions::ActiveModel {
        id: NotSet,
        kind: Set(kind.into()),
        amount_cents: Set(cents),
        payment_method: Set("cash".to_string()),
        item_name: Set(format!("item {cents}")),
        description: Set(String::new()),
        date: Set(date),
        closed: Set(closed),
    }
    .insert(db)
    .await
    .expect("Failed to insert row")
}

pub async fn row_count(db: &DatabaseConnection) -> u64 {
    cash_transactions::Entity::find()
        .count(db)
        .await
        .expect("Failed to count rows")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
