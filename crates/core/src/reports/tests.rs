//! Tests for monthly report assembly.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::MonthlyReport;
use crate::ledger::{Amount, CashTransaction, LedgerSummary, Totals, TransactionKind};
use crate::period::ReportPeriod;

fn tx(id: i32, kind: TransactionKind, cents: i64, date: NaiveDate, closed: bool) -> CashTransaction {
    CashTransaction {
        id,
        kind,
        amount: Amount::from_cents(cents),
        payment_method: "cash".to_string(),
        item_name: format!("item {id}"),
        description: String::new(),
        date,
        closed,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_march_report_includes_closed_transactions() {
    let records = vec![
        tx(1, TransactionKind::Entry, 10_000, date(2024, 3, 4), true),
        tx(2, TransactionKind::Exit, 4_000, date(2024, 3, 20), false),
        tx(3, TransactionKind::Entry, 99_900, date(2024, 4, 1), false),
        tx(4, TransactionKind::Entry, 55_500, date(2023, 3, 4), false),
    ];

    let report = MonthlyReport::tally(ReportPeriod::new(3, 2024).unwrap(), &records);

    assert_eq!(report.totals.total_entry, dec!(100));
    assert_eq!(report.totals.total_exit, dec!(40));
    assert_eq!(report.totals.balance, dec!(60));
    let ids: Vec<i32> = report.transactions.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(!report.is_placeholder);
}

#[test]
fn test_live_summary_differs_from_report_for_closed_rows() {
    let records = vec![
        tx(1, TransactionKind::Entry, 10_000, date(2024, 3, 4), true),
        tx(2, TransactionKind::Exit, 4_000, date(2024, 3, 20), false),
    ];

    let summary = LedgerSummary::tally(date(2024, 3, 20), &records);
    let report = MonthlyReport::tally(ReportPeriod::new(3, 2024).unwrap(), &records);

    assert_eq!(summary.month, Totals::new(Decimal::ZERO, dec!(40)));
    assert_eq!(report.totals, Totals::new(dec!(100), dec!(40)));
}

#[test]
fn test_placeholder_is_empty() {
    let report = MonthlyReport::placeholder(ReportPeriod::new(1, 2024).unwrap());
    assert!(report.is_placeholder);
    assert_eq!(report.period.month(), 1);
    assert_eq!(report.period.year(), 2024);
    assert!(report.totals.is_zero());
    assert!(report.transactions.is_empty());
}

#[test]
fn test_placeholder_serializes_zeroes() {
    let report = MonthlyReport::placeholder(ReportPeriod::new(1, 2024).unwrap());
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["period"]["month"], 1);
    assert_eq!(json["period"]["year"], 2024);
    assert_eq!(json["totals"]["balance"], "0");
    assert_eq!(json["transactions"].as_array().map(Vec::len), Some(0));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Report balance always equals the signed sum of the listed transactions.
    #[test]
    fn prop_report_balance_matches_listing(
        rows in prop::collection::vec((any::<bool>(), 0i64..1_000_000i64, 1u32..=28u32, 1u32..=12u32, any::<bool>()), 0..30),
        month in 1u32..=12u32,
    ) {
        let records: Vec<CashTransaction> = rows
            .into_iter()
            .zip(1..)
            .map(|((is_entry, cents, day, m, closed), id)| {
                let kind = if is_entry { TransactionKind::Entry } else { TransactionKind::Exit };
                tx(id, kind, cents, date(2024, m, day), closed)
            })
            .collect();

        let report = MonthlyReport::tally(ReportPeriod::new(month, 2024).unwrap(), &records);
        let signed: Decimal = report.transactions.iter().map(CashTransaction::signed_amount).sum();

        prop_assert_eq!(report.totals.balance, signed);
        let in_month = report
            .transactions
            .iter()
            .all(|t| t.date.month() == month && t.date.year() == 2024);
        prop_assert!(in_month);
    }
}
