//! Derived state over an entry sequence.
//!
//! Every function here is pure: it reads the slice it is given, keeps no
//! state between calls and returns the same result for the same input.
//! Sums are exact decimal sums taken in slice order. A sum that would leave
//! the `Decimal` range saturates at `Decimal::MAX` instead of failing.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::entry::{Entry, Kind};

fn total_of(entries: &[Entry], kind: Kind) -> Decimal {
    saturating_sum(
        entries
            .iter()
            .filter(|entry| entry.kind() == kind)
            .map(|entry| entry.amount().value()),
    )
}

/// Non-negative terms only, so the result stays within `[0, Decimal::MAX]`.
fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, |sum, value| {
        sum.checked_add(value).unwrap_or(Decimal::MAX)
    })
}

/// Sum of all income amounts. Zero for an empty slice.
pub fn total_income(entries: &[Entry]) -> Decimal {
    total_of(entries, Kind::Income)
}

/// Sum of all expense amounts. Zero for an empty slice.
pub fn total_expense(entries: &[Entry]) -> Decimal {
    total_of(entries, Kind::Expense)
}

/// Income minus expenses. Negative when spending exceeds earnings.
pub fn balance(entries: &[Entry]) -> Decimal {
    total_income(entries) - total_expense(entries)
}

/// Entries whose description or category contains `query`, ignoring case.
///
/// An empty query keeps every entry. Input order is preserved.
pub fn filter(entries: &[Entry], query: &str) -> Vec<Entry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| matches_text(entry, &needle))
        .cloned()
        .collect()
}

fn matches_text(entry: &Entry, needle: &str) -> bool {
    needle.is_empty()
        || entry.description().to_lowercase().contains(needle)
        || entry.category().to_lowercase().contains(needle)
}

/// Whether the ledger is in the black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Standing {
    /// Balance rounds to zero or more
    Surplus,
    /// Balance rounds to less than zero
    Deficit,
}

impl Standing {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Surplus => "Current savings",
            Self::Deficit => "Current deficit",
        }
    }
}

/// Aggregate totals for an entry sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
    pub count: usize,
}

impl Summary {
    /// Judged on the balance rounded to cents, as it is displayed.
    pub fn standing(&self) -> Standing {
        let cents = self
            .balance
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if cents < Decimal::ZERO {
            Standing::Deficit
        } else {
            Standing::Surplus
        }
    }
}

/// Compute income, expense and balance in one call.
pub fn summarize(entries: &[Entry]) -> Summary {
    let income = total_income(entries);
    let expense = total_expense(entries);
    Summary {
        income,
        expense,
        balance: income - expense,
        count: entries.len(),
    }
}

/// Text, kind and size restrictions applied on top of [`filter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryQuery {
    /// Case-insensitive substring of description or category
    pub text: Option<String>,

    /// Keep only this kind
    pub kind: Option<Kind>,

    /// Maximum number of results
    pub limit: Option<usize>,
}

impl EntryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Run the query, keeping input order.
    pub fn apply(&self, entries: &[Entry]) -> Vec<Entry> {
        let mut matched = filter(entries, self.text.as_deref().unwrap_or(""));
        if let Some(kind) = self.kind {
            matched.retain(|entry| entry.kind() == kind);
        }
        if let Some(limit) = self.limit {
            matched.truncate(limit);
        }
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::entry::NewEntry;
    use crate::store::{InMemoryLedger, LedgerStore};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn build(entries: Vec<NewEntry>) -> Vec<Entry> {
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut store = InMemoryLedger::with_clock(FixedClock(day));
        for entry in entries {
            store.add(entry).unwrap();
        }
        store.list()
    }

    fn scenario() -> Vec<Entry> {
        build(vec![
            NewEntry::income("Salary", "1000.00", "Work"),
            NewEntry::expense("Rent", "250.50", "Housing"),
            NewEntry::expense("Groceries", "49.99", "Food"),
        ])
    }

    #[test]
    fn test_empty_totals_are_zero() {
        assert_eq!(total_income(&[]), Decimal::ZERO);
        assert_eq!(total_expense(&[]), Decimal::ZERO);
        assert_eq!(balance(&[]), Decimal::ZERO);
        assert!(filter(&[], "anything").is_empty());
        assert!(filter(&[], "").is_empty());
    }

    #[test]
    fn test_scenario_totals() {
        let entries = scenario();
        assert_eq!(total_income(&entries), dec!(1000.00));
        assert_eq!(total_expense(&entries), dec!(300.49));
        assert_eq!(balance(&entries), dec!(699.51));
    }

    #[test]
    fn test_repeated_cents_do_not_drift() {
        let entries = build(
            (0..10)
                .map(|i| NewEntry::expense(format!("dime {}", i), "0.10", "Coins"))
                .collect(),
        );
        assert_eq!(total_expense(&entries), dec!(1.00));
    }

    #[test]
    fn test_balance_can_be_negative() {
        let entries = build(vec![
            NewEntry::income("Refund", "5", "Misc"),
            NewEntry::expense("Dinner", "30", "Food"),
        ]);
        let summary = summarize(&entries);
        assert_eq!(summary.balance, dec!(-25));
        assert_eq!(summary.standing(), Standing::Deficit);
        assert_eq!(summary.standing().label(), "Current deficit");
    }

    #[test]
    fn test_zero_balance_is_surplus() {
        let summary = summarize(&[]);
        assert_eq!(summary.standing(), Standing::Surplus);
        assert_eq!(summary.count, 0);
    }

    #[test]
    fn test_filter_matches_description_or_category() {
        let entries = build(vec![
            NewEntry::expense("Rent", "900", "Housing"),
            NewEntry::expense("Coffee", "4", "Food"),
        ]);

        let food = filter(&entries, "foo");
        assert_eq!(food.len(), 1);
        assert_eq!(food[0].description(), "Coffee");

        let rent = filter(&entries, "REN");
        assert_eq!(rent.len(), 1);
        assert_eq!(rent[0].description(), "Rent");

        assert!(filter(&entries, "zzz").is_empty());
    }

    #[test]
    fn test_empty_query_is_identity() {
        let entries = scenario();
        assert_eq!(filter(&entries, ""), entries);
    }

    #[test]
    fn test_filter_preserves_order() {
        let entries = build(vec![
            NewEntry::expense("Bus fare", "2", "Transport"),
            NewEntry::expense("Taxi", "20", "Transport"),
            NewEntry::expense("Lunch", "9", "Food"),
        ]);
        let matched = filter(&entries, "transport");
        let names: Vec<&str> = matched.iter().map(|e| e.description()).collect();
        assert_eq!(names, vec!["Taxi", "Bus fare"]);
    }

    #[test]
    fn test_derivations_are_idempotent() {
        let entries = scenario();
        let first = (summarize(&entries), filter(&entries, "o"));
        for _ in 0..5 {
            assert_eq!((summarize(&entries), filter(&entries, "o")), first);
        }
    }

    #[test]
    fn test_query_kind_and_limit() {
        let entries = scenario();

        let expenses = EntryQuery::new().kind(Kind::Expense).apply(&entries);
        let names: Vec<&str> = expenses.iter().map(|e| e.description()).collect();
        assert_eq!(names, vec!["Groceries", "Rent"]);

        let newest = EntryQuery::new().limit(1).apply(&entries);
        assert_eq!(newest.len(), 1);
        assert_eq!(newest[0].description(), "Groceries");

        let work = EntryQuery::new()
            .text("WORK")
            .kind(Kind::Income)
            .apply(&entries);
        assert_eq!(work.len(), 1);
        assert_eq!(work[0].description(), "Salary");
    }

    #[test]
    fn test_sum_saturates_instead_of_overflowing() {
        let terms = [Decimal::MAX, Decimal::ONE, Decimal::MAX];
        assert_eq!(saturating_sum(terms.into_iter()), Decimal::MAX);
        assert_eq!(
            saturating_sum([dec!(0.10), dec!(0.20)].into_iter()),
            dec!(0.30)
        );
    }

    #[test]
    fn test_largest_amounts_total_without_panicking() {
        let max = crate::entry::Amount::max();
        let entries = build(vec![
            NewEntry::income("Windfall", max, "Luck"),
            NewEntry::income("Another", max, "Luck"),
            NewEntry::expense("Yacht", max, "Toys"),
        ]);
        let summary = summarize(&entries);
        assert_eq!(summary.income, max * dec!(2));
        assert_eq!(summary.balance, max);
        assert_eq!(summary.standing(), Standing::Surplus);
    }

    #[test]
    fn test_standing_follows_displayed_cents() {
        let entries = build(vec![
            NewEntry::income("Interest", "0.006", "Bank"),
            NewEntry::expense("Fee", "0.01", "Bank"),
        ]);
        let summary = summarize(&entries);
        assert_eq!(summary.balance, dec!(-0.004));
        assert_eq!(summary.standing(), Standing::Surplus);

        let entries = build(vec![NewEntry::expense("Fee", "0.005", "Bank")]);
        assert_eq!(summarize(&entries).standing(), Standing::Deficit);
    }
}
