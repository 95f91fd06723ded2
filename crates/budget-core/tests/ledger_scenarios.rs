use budget_core::{
    balance, filter, summarize, total_expense, total_income, FixedClock, InMemoryLedger, Kind,
    LedgerError, LedgerStore, NewEntry, ValidationError,
};
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn ledger() -> InMemoryLedger<FixedClock> {
    let day = NaiveDate::from_ymd_opt(2024, 9, 30).expect("valid date");
    InMemoryLedger::with_clock(FixedClock(day))
}

#[test]
fn test_monthly_budget_scenario() {
    let mut store = ledger();
    store
        .add(NewEntry::new("Salary", "1000.00", Kind::Income, "Work"))
        .expect("salary should be accepted");
    store
        .add(NewEntry::new("Rent", "250.50", Kind::Expense, "Housing"))
        .expect("rent should be accepted");
    let groceries = store
        .add(NewEntry::new("Groceries", "49.99", Kind::Expense, "Food"))
        .expect("groceries should be accepted");

    let entries = store.list();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0], groceries);

    assert_eq!(total_income(&entries), dec!(1000.00));
    assert_eq!(total_expense(&entries), dec!(300.49));
    assert_eq!(balance(&entries), dec!(699.51));

    let food = filter(&entries, "food");
    assert_eq!(food, vec![groceries]);
}

#[test]
fn test_add_then_list_contains_supplied_fields_first() {
    let mut store = ledger();
    store
        .add(NewEntry::income("Bonus", dec!(75), "Work"))
        .expect("bonus should be accepted");
    let added = store
        .add(NewEntry::expense("Cinema", 12.5, "Leisure"))
        .expect("cinema should be accepted");

    let first = &store.list()[0];
    assert_eq!(first.id(), added.id());
    assert_eq!(first.description(), "Cinema");
    assert_eq!(first.amount().value(), dec!(12.5));
    assert_eq!(first.kind(), Kind::Expense);
    assert_eq!(first.category(), "Leisure");
    assert_eq!(
        first.date(),
        NaiveDate::from_ymd_opt(2024, 9, 30).expect("valid date")
    );
}

#[test]
fn test_invalid_amounts_are_never_stored() {
    let mut store = ledger();
    for amount in ["0", "0.00", "-1", "abc", "", "1,000"] {
        let result = store.add(NewEntry::expense("Thing", amount, "Stuff"));
        match result {
            Err(LedgerError::Validation(err)) => assert_eq!(err.field(), "amount"),
            other => panic!("expected amount validation error for {:?}, got {:?}", amount, other),
        }
    }
    assert!(store.list().is_empty());
}

#[test]
fn test_empty_labels_are_rejected() {
    let mut store = ledger();
    let err = store
        .add(NewEntry::income("   ", "10", "Work"))
        .expect_err("blank description");
    assert!(matches!(
        err,
        LedgerError::Validation(ValidationError::EmptyDescription)
    ));

    let err = store
        .add(NewEntry::income("Tip", "10", ""))
        .expect_err("blank category");
    assert!(matches!(
        err,
        LedgerError::Validation(ValidationError::EmptyCategory)
    ));

    assert!(store.is_empty());
}

#[test]
fn test_remove_twice_reports_not_found() {
    let mut store = ledger();
    let keep = store
        .add(NewEntry::expense("Keep", "1", "X"))
        .expect("keep should be accepted");
    let drop = store
        .add(NewEntry::expense("Drop", "2", "X"))
        .expect("drop should be accepted");

    assert!(store.remove(drop.id()));
    assert!(!store.remove(drop.id()));
    assert_eq!(store.list(), vec![keep]);
}

#[test]
fn test_summary_after_removal_recomputes() {
    let mut store = ledger();
    let salary = store
        .add(NewEntry::income("Salary", "500", "Work"))
        .expect("salary should be accepted");
    store
        .add(NewEntry::expense("Rent", "400", "Housing"))
        .expect("rent should be accepted");

    assert_eq!(summarize(&store.list()).balance, dec!(100));
    assert!(store.remove(salary.id()));

    let summary = summarize(&store.list());
    assert_eq!(summary.income, dec!(0));
    assert_eq!(summary.expense, dec!(400));
    assert_eq!(summary.balance, dec!(-400));
    assert_eq!(summary.count, 1);
}

#[test]
fn test_out_of_range_amount_is_rejected_and_totals_still_work() {
    let mut store = ledger();
    store
        .add(NewEntry::income("Salary", "1000.00", "Work"))
        .expect("salary should be accepted");

    let err = store
        .add(NewEntry::income(
            "Jackpot",
            "79228162514264337593543950335",
            "Luck",
        ))
        .unwrap_err();
    assert!(matches!(
        err,
        LedgerError::Validation(ValidationError::AmountTooLarge { .. })
    ));
    assert_eq!(store.len(), 1);

    let summary = summarize(&store.list());
    assert_eq!(summary.income, dec!(1000.00));
    assert_eq!(summary.balance, dec!(1000.00));
}
