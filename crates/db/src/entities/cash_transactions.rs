//! `SeaORM` Entity for cash_transactions table.

use caixa_core::{Amount, CashTransaction};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::TransactionKind;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cash_transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub kind: TransactionKind,
    pub amount_cents: i64,
    pub payment_method: String,
    pub item_name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub date: Date,
    pub closed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CashTransaction {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            kind: model.kind.into(),
            amount: Amount::from_cents(model.amount_cents),
            payment_method: model.payment_method,
            item_name: model.item_name,
            description: model.description,
            date: model.date,
            closed: model.closed,
        }
    }
}
