mod common;
use common::{date, sample_snapshot, time};
use rpaysheet::core::entries::{EntryLogic, EntryPatch, NewEntry};
use rpaysheet::core::expenses::ExpenseLogic;
use rpaysheet::core::ids::next_numeric_id;
use rpaysheet::errors::AppError;
use rpaysheet::models::RateType;
use std::collections::HashSet;

fn new_entry(d: &str, hours: f64, wt: &str) -> NewEntry {
    NewEntry {
        work_date: date(d),
        hours,
        work_type_id: wt.to_string(),
        start_time: None,
        end_time: None,
        custom_rate: None,
    }
}

#[test]
fn test_add_denormalizes_work_type_and_assigns_id() {
    let mut snapshot = sample_snapshot();
    let before = snapshot.entries.len();

    let added = EntryLogic::add(&mut snapshot, new_entry("2025-05-02", 6.0, "install"))
        .expect("add entry");

    assert_eq!(added.id, "e6");
    assert_eq!(added.work_type.name, "Install");
    assert_eq!(added.work_type.rate_type, RateType::Fixed);
    assert_eq!(snapshot.entries.len(), before + 1);
    assert_eq!(snapshot.entry("e6"), Some(&added));
}

#[test]
fn test_add_unknown_work_type_fails() {
    let mut snapshot = sample_snapshot();
    let err = EntryLogic::add(&mut snapshot, new_entry("2025-05-02", 1.0, "nope")).unwrap_err();
    assert!(matches!(err, AppError::WorkTypeNotFound(id) if id == "nope"));
}

#[test]
fn test_add_rejects_custom_rate_outside_other() {
    let mut snapshot = sample_snapshot();
    let mut n = new_entry("2025-05-02", 1.0, "labor");
    n.custom_rate = Some(30.0);

    let err = EntryLogic::add(&mut snapshot, n).unwrap_err();
    assert!(matches!(err, AppError::InvalidEntry(_)));
}

#[test]
fn test_add_accepts_custom_rate_for_other() {
    let mut snapshot = sample_snapshot();
    let mut n = new_entry("2025-05-02", 2.0, "other");
    n.custom_rate = Some(30.0);

    let added = EntryLogic::add(&mut snapshot, n).expect("add other entry");
    assert_eq!(added.custom_rate, Some(30.0));
}

#[test]
fn test_add_rejects_half_time_range_and_negative_hours() {
    let mut snapshot = sample_snapshot();

    let mut half = new_entry("2025-05-02", 2.0, "labor");
    half.start_time = Some(time("09:00"));
    assert!(matches!(
        EntryLogic::add(&mut snapshot, half).unwrap_err(),
        AppError::InvalidEntry(_)
    ));

    let negative = new_entry("2025-05-02", -1.0, "labor");
    assert!(matches!(
        EntryLogic::add(&mut snapshot, negative).unwrap_err(),
        AppError::InvalidEntry(_)
    ));

    let mut reversed = new_entry("2025-05-02", 2.0, "labor");
    reversed.start_time = Some(time("17:00"));
    reversed.end_time = Some(time("09:00"));
    assert!(matches!(
        EntryLogic::add(&mut snapshot, reversed).unwrap_err(),
        AppError::InvalidEntry(_)
    ));
}

#[test]
fn test_edit_changes_work_type_and_drops_stale_custom_rate() {
    let mut snapshot = sample_snapshot();

    let patch = EntryPatch {
        work_type_id: Some("labor".into()),
        hours: Some(3.0),
        ..Default::default()
    };
    let updated = EntryLogic::edit(&mut snapshot, "e3", patch).expect("edit entry");

    assert_eq!(updated.work_type.name, "Labor");
    assert_eq!(updated.work_type_id, "labor");
    assert_eq!(updated.hours, 3.0);
    assert_eq!(updated.custom_rate, None);
    assert_eq!(snapshot.entry("e3"), Some(&updated));
}

#[test]
fn test_edit_times() {
    let mut snapshot = sample_snapshot();

    let cleared = EntryLogic::edit(
        &mut snapshot,
        "e1",
        EntryPatch {
            clear_times: true,
            ..Default::default()
        },
    )
    .expect("clear times");
    assert!(!cleared.has_time_range());

    let set = EntryLogic::edit(
        &mut snapshot,
        "e2",
        EntryPatch {
            start_time: Some(time("08:00")),
            end_time: Some(time("12:30")),
            work_date: Some(date("2024-04-01")),
            ..Default::default()
        },
    )
    .expect("set times");
    assert!(set.has_time_range());
    assert_eq!(set.work_date, date("2024-04-01"));
}

#[test]
fn test_edit_missing_entry() {
    let mut snapshot = sample_snapshot();
    let err = EntryLogic::edit(&mut snapshot, "e99", EntryPatch::default()).unwrap_err();
    assert!(matches!(err, AppError::EntryNotFound(id) if id == "e99"));
}

#[test]
fn test_failed_edit_leaves_snapshot_untouched() {
    let mut snapshot = sample_snapshot();
    let before = snapshot.clone();

    let err = EntryLogic::edit(
        &mut snapshot,
        "e1",
        EntryPatch {
            hours: Some(-4.0),
            ..Default::default()
        },
    )
    .unwrap_err();

    assert!(matches!(err, AppError::InvalidEntry(_)));
    assert_eq!(snapshot, before);
}

#[test]
fn test_delete_entry() {
    let mut snapshot = sample_snapshot();

    let removed = EntryLogic::delete(&mut snapshot, "e2").expect("delete entry");
    assert_eq!(removed.id, "e2");
    assert!(snapshot.entry("e2").is_none());

    let err = EntryLogic::delete(&mut snapshot, "e2").unwrap_err();
    assert!(matches!(err, AppError::EntryNotFound(_)));
}

#[test]
fn test_add_after_max_numeric_id_reuses_lowest_free_id() {
    let mut snapshot = sample_snapshot();
    snapshot.entries[0].id = format!("e{}", u64::MAX);

    let added = EntryLogic::add(&mut snapshot, new_entry("2025-05-02", 1.0, "labor"))
        .expect("add entry");

    assert_eq!(added.id, "e1");
    let ids: HashSet<&str> = snapshot.entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids.len(), snapshot.entries.len());
}

#[test]
fn test_next_numeric_id_ignores_foreign_ids() {
    let ids = ["e3", "legacy", "x9", "e", "e-1"];
    assert_eq!(next_numeric_id("e", ids).expect("id"), "e4");
    assert_eq!(next_numeric_id("x", ids).expect("id"), "x10");
    assert_eq!(next_numeric_id("e", Vec::<&str>::new()).expect("id"), "e1");
}

#[test]
fn test_add_and_delete_expense() {
    let mut snapshot = sample_snapshot();

    let added = ExpenseLogic::add(&mut snapshot, date("2025-03-20"), 12.5, "  parking ")
        .expect("add expense");
    assert_eq!(added.id, "x2");
    assert_eq!(added.description, "parking");
    assert_eq!(snapshot.expenses.len(), 2);

    let removed = ExpenseLogic::delete(&mut snapshot, "x2").expect("delete expense");
    assert_eq!(removed, added);

    let err = ExpenseLogic::delete(&mut snapshot, "x2").unwrap_err();
    assert!(matches!(err, AppError::ExpenseNotFound(id) if id == "x2"));
}

#[test]
fn test_expense_amount_must_be_non_negative() {
    let mut snapshot = sample_snapshot();

    for amount in [-1.0, f64::NAN, f64::INFINITY] {
        let err = ExpenseLogic::add(&mut snapshot, date("2025-03-20"), amount, "").unwrap_err();
        assert!(matches!(err, AppError::InvalidEntry(_)));
    }
    assert_eq!(snapshot.expenses.len(), 1);
}
