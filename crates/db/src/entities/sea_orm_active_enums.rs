//! `SeaORM` active enums.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Stored direction of a cash movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum TransactionKind {
    /// Cash in.
    #[sea_orm(string_value = "entry")]
    Entry,
    /// Cash out.
    #[sea_orm(string_value = "exit")]
    Exit,
}

impl From<caixa_core::TransactionKind> for TransactionKind {
    fn from(kind: caixa_core::TransactionKind) -> Self {
        match kind {
            caixa_core::TransactionKind::Entry => Self::Entry,
            caixa_core::TransactionKind::Exit => Self::Exit,
        }
    }
}

impl From<TransactionKind> for caixa_core::TransactionKind {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Entry => Self::Entry,
            TransactionKind::Exit => Self::Exit,
        }
    }
}
