//! `SeaORM` entity definitions.

pub mod cash_transactions;
pub mod sea_orm_active_enums;
