mod common;
use common::{entry, fixed, hourly, rates, sample_snapshot};
use rpaysheet::core::calculator::{
    MonthOrder, compute_entry_value, grand_total, group_by_month, month_total, monthly_stats,
};
use rpaysheet::core::logic::{Core, ReportFilter};
use rpaysheet::core::period::Period;
use rpaysheet::models::{MonthKey, RatePolicy, TimeEntry};
use std::collections::HashSet;

fn key(y: i32, m: u32) -> MonthKey {
    MonthKey::new(y, m).expect("valid month")
}

#[test]
fn test_same_month_name_in_different_years_stays_apart() {
    let entries = vec![
        entry("a", "2024-03-01", 1.0, "labor", hourly("Labor")),
        entry("b", "2024-03-20", 1.0, "labor", hourly("Labor")),
        entry("c", "2025-03-05", 1.0, "labor", hourly("Labor")),
    ];

    let groups = group_by_month(&entries, MonthOrder::Ascending);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].key, key(2024, 3));
    assert_eq!(groups[0].len(), 2);
    assert_eq!(groups[1].key, key(2025, 3));
    assert_eq!(groups[1].len(), 1);
    assert_eq!(groups[0].key.label(), "March 2024");
    assert_eq!(groups[1].key.label(), "March 2025");
}

#[test]
fn test_grouping_partitions_input() {
    let snapshot = sample_snapshot();
    let groups = group_by_month(&snapshot.entries, MonthOrder::FirstSeen);

    let total: usize = groups.iter().map(|g| g.len()).sum();
    assert_eq!(total, snapshot.entries.len());

    let ids: HashSet<&str> = groups
        .iter()
        .flat_map(|g| g.entries.iter().map(|e| e.id.as_str()))
        .collect();
    let input: HashSet<&str> = snapshot.entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, input);

    for g in &groups {
        assert!(g.entries.iter().all(|e| g.key.contains(e.work_date)));
    }
}

#[test]
fn test_group_order_options() {
    let entries = vec![
        entry("a", "2025-02-01", 1.0, "labor", hourly("Labor")),
        entry("b", "2024-11-01", 1.0, "labor", hourly("Labor")),
        entry("c", "2025-06-01", 1.0, "labor", hourly("Labor")),
        entry("d", "2025-02-14", 1.0, "labor", hourly("Labor")),
    ];

    let first_seen: Vec<MonthKey> = group_by_month(&entries, MonthOrder::FirstSeen)
        .iter()
        .map(|g| g.key)
        .collect();
    assert_eq!(first_seen, vec![key(2025, 2), key(2024, 11), key(2025, 6)]);

    let asc: Vec<MonthKey> = group_by_month(&entries, MonthOrder::Ascending)
        .iter()
        .map(|g| g.key)
        .collect();
    assert_eq!(asc, vec![key(2024, 11), key(2025, 2), key(2025, 6)]);

    let desc: Vec<MonthKey> = group_by_month(&entries, MonthOrder::Descending)
        .iter()
        .map(|g| g.key)
        .collect();
    assert_eq!(desc, vec![key(2025, 6), key(2025, 2), key(2024, 11)]);
}

#[test]
fn test_group_keeps_entry_order_within_month() {
    let entries = vec![
        entry("late", "2025-02-20", 1.0, "labor", hourly("Labor")),
        entry("early", "2025-02-01", 1.0, "labor", hourly("Labor")),
    ];

    let groups = group_by_month(&entries, MonthOrder::Descending);
    let ids: Vec<&str> = groups[0].entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["late", "early"]);
}

#[test]
fn test_empty_input_gives_no_groups() {
    let entries: Vec<TimeEntry> = Vec::new();
    let groups = group_by_month(&entries, MonthOrder::Descending);
    assert!(groups.is_empty());
    assert_eq!(grand_total(&groups, &rates(&[])), 0.0);
}

#[test]
fn test_month_totals_on_sample() {
    let snapshot = sample_snapshot();
    let groups = group_by_month(&snapshot.entries, MonthOrder::Ascending);

    let totals: Vec<f64> = groups.iter().map(|g| g.total(&snapshot.rates)).collect();
    assert_eq!(totals, vec![270.0, 50.0, 40.0]);
    assert_eq!(grand_total(&groups, &snapshot.rates), 360.0);
}

#[test]
fn test_month_total_equals_in_order_sum_of_rows() {
    let table = rates(&[
        ("labor", RatePolicy::hourly(17.33)),
        ("install", RatePolicy::fixed(0.1)),
    ]);
    let entries = vec![
        entry("a", "2025-01-01", 0.1, "labor", hourly("Labor")),
        entry("b", "2025-01-02", 3.0, "install", fixed("Install")),
        entry("c", "2025-01-03", 7.7, "labor", hourly("Labor")),
        entry("d", "2025-01-04", 0.2, "install", fixed("Install")),
    ];

    let mut rows_sum = 0.0;
    for e in &entries {
        rows_sum += compute_entry_value(e, table.get(&e.work_type_id));
    }

    assert_eq!(month_total(&entries, &table), rows_sum);
}

#[test]
fn test_report_rows_match_month_totals() {
    let snapshot = sample_snapshot();
    let report = Core::build_report(&snapshot, &ReportFilter::default(), MonthOrder::Descending);

    assert_eq!(report.months.len(), 3);
    assert_eq!(report.months[0].key, key(2025, 4));
    assert_eq!(report.entry_count(), snapshot.entries.len());

    for m in &report.months {
        let sum = m.rows.iter().fold(0.0, |acc, r| acc + r.value);
        assert_eq!(sum, m.total);
    }
    assert_eq!(report.grand_total, 360.0);
}

#[test]
fn test_report_rate_column() {
    let snapshot = sample_snapshot();
    let report = Core::build_report(&snapshot, &ReportFilter::default(), MonthOrder::Ascending);

    let march_2025 = &report.months[1];
    assert_eq!(march_2025.rows[0].rate, Some(25.0)); // custom
    assert_eq!(march_2025.rows[1].rate, None); // no rate configured
    assert_eq!(march_2025.rows[1].value, 0.0);
}

#[test]
fn test_report_filters() {
    let snapshot = sample_snapshot();

    let by_period = ReportFilter {
        period: Some(Period::parse("2025-03").expect("valid period")),
        work_type_id: None,
    };
    let report = Core::build_report(&snapshot, &by_period, MonthOrder::Ascending);
    assert_eq!(report.months.len(), 1);
    assert_eq!(report.grand_total, 50.0);

    let by_type = ReportFilter {
        period: None,
        work_type_id: Some("other".into()),
    };
    let report = Core::build_report(&snapshot, &by_type, MonthOrder::Ascending);
    assert_eq!(report.entry_count(), 2);
    assert_eq!(report.grand_total, 90.0);
}

#[test]
fn test_grouping_is_idempotent() {
    let snapshot = sample_snapshot();
    let a = group_by_month(&snapshot.entries, MonthOrder::FirstSeen);
    let b = group_by_month(&snapshot.entries, MonthOrder::FirstSeen);
    assert_eq!(a, b);
}

#[test]
fn test_monthly_stats_net_amount() {
    let snapshot = sample_snapshot();
    let stats = monthly_stats(&snapshot, MonthOrder::Ascending);

    assert_eq!(stats.len(), 3);
    assert_eq!(stats[0].key, key(2024, 3));
    assert_eq!(stats[0].total_salary, 270.0);
    assert_eq!(stats[0].total_expenses, 30.0);
    assert_eq!(stats[0].net_amount, 240.0);
    assert_eq!(stats[1].total_expenses, 0.0);
    assert_eq!(stats[1].net_amount, 50.0);
}

#[test]
fn test_monthly_stats_include_expense_only_months() {
    let mut snapshot = sample_snapshot();
    snapshot.expenses.push(rpaysheet::models::Expense {
        id: "x2".into(),
        date: common::date("2025-12-01"),
        amount: 12.5,
        description: String::new(),
    });

    let stats = monthly_stats(&snapshot, MonthOrder::Descending);
    assert_eq!(stats[0].key, key(2025, 12));
    assert_eq!(stats[0].total_salary, 0.0);
    assert_eq!(stats[0].net_amount, -12.5);
}
