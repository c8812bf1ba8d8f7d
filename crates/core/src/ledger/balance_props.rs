//! Property-based tests for ledger totals.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::balance::{LedgerSummary, Totals};
use super::transaction::CashTransaction;
use super::types::{Amount, TransactionKind};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Strategy for a transaction dated within roughly four months of 2024.
fn transaction_strategy() -> impl Strategy<Value = (bool, i64, u64, bool)> {
    (any::<bool>(), 0i64..10_000_000i64, 0u64..120u64, any::<bool>())
}

fn ledger_strategy(max_len: usize) -> impl Strategy<Value = Vec<CashTransaction>> {
    prop::collection::vec(transaction_strategy(), 0..=max_len).prop_map(|rows| {
        rows.into_iter()
            .zip(1..)
            .map(|((is_entry, cents, offset, closed), id)| CashTransaction {
                id,
                kind: if is_entry {
                    TransactionKind::Entry
                } else {
                    TransactionKind::Exit
                },
                amount: Amount::from_cents(cents),
                payment_method: "cash".to_string(),
                item_name: format!("item {id}"),
                description: String::new(),
                date: base_date() + Days::new(offset),
                closed,
            })
            .collect()
    })
}

fn today_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..120u64).prop_map(|offset| base_date() + Days::new(offset))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The open balance equals entries minus exits and the signed sum of
    /// every open transaction.
    #[test]
    fn prop_balance_is_signed_sum_of_open(
        ledger in ledger_strategy(40),
        today in today_strategy(),
    ) {
        let summary = LedgerSummary::tally(today, &ledger);
        let signed: Decimal = ledger
            .iter()
            .filter(|tx| !tx.closed)
            .map(CashTransaction::signed_amount)
            .sum();

        prop_assert_eq!(summary.overall.balance, summary.overall.total_entry - summary.overall.total_exit);
        prop_assert_eq!(summary.overall.balance, signed);
    }

    /// Day, week and month totals never exceed the overall open totals.
    #[test]
    fn prop_windows_are_subsets(
        ledger in ledger_strategy(40),
        today in today_strategy(),
    ) {
        let summary = LedgerSummary::tally(today, &ledger);
        let overall = summary.overall;

        for window in [summary.today, summary.week, summary.month] {
            prop_assert!(window.total_entry <= overall.total_entry);
            prop_assert!(window.total_exit <= overall.total_exit);
        }
        prop_assert!(summary.today.total_entry <= summary.week.total_entry);
        prop_assert!(summary.today.total_exit <= summary.week.total_exit);
    }

    /// Summing each day's totals over every day with open transactions gives
    /// the overall open totals.
    #[test]
    fn prop_day_totals_partition_overall(ledger in ledger_strategy(40)) {
        let days: BTreeSet<NaiveDate> = ledger
            .iter()
            .filter(|tx| !tx.closed)
            .map(|tx| tx.date)
            .collect();

        let mut summed = Totals::default();
        for day in &days {
            let daily = LedgerSummary::tally(*day, &ledger).today;
            summed = Totals::new(
                summed.total_entry + daily.total_entry,
                summed.total_exit + daily.total_exit,
            );
        }

        let overall = LedgerSummary::tally(base_date(), &ledger).overall;
        prop_assert_eq!(summed, overall);
    }

    /// After every transaction is closed the live totals are zero, and
    /// closing again changes nothing.
    #[test]
    fn prop_closing_everything_zeroes_live_totals(
        ledger in ledger_strategy(40),
        today in today_strategy(),
    ) {
        let close = |records: &[CashTransaction]| -> Vec<CashTransaction> {
            records
                .iter()
                .cloned()
                .map(|mut tx| {
                    tx.closed = true;
                    tx
                })
                .collect()
        };

        let once = close(&ledger);
        let twice = close(&once);
        prop_assert_eq!(&once, &twice);

        let summary = LedgerSummary::tally(today, &once);
        prop_assert!(summary.overall.is_zero());
        prop_assert!(summary.today.is_zero());
        prop_assert!(summary.week.is_zero());
        prop_assert!(summary.month.is_zero());
        // Closed transactions dated today are still listed.
        let listed = once.iter().filter(|tx| tx.date == today).count();
        prop_assert_eq!(summary.today_transactions.len(), listed);
    }
}
