use rpaysheet::ui::prompt::is_yes;
use rpaysheet::utils::table::{Column, Table};

fn sample_table() -> Table {
    let mut t = Table::new(vec![Column::left("Month"), Column::right("Total")]);
    t.add_row(vec!["March 2024".into(), "$270.00".into()]);
    t
}

#[test]
fn test_header_rule_defaults_to_dash() {
    let out = sample_table().render();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], format!("Month{}Total", " ".repeat(9)));
    assert_eq!(lines[1], "-".repeat(19));
    assert_eq!(lines[2], "March 2024  $270.00");
}

#[test]
fn test_header_rule_uses_given_character() {
    let out = sample_table().with_rule("=").render();
    assert_eq!(out.lines().nth(1), Some("=".repeat(19).as_str()));

    let out = sample_table().with_rule("").render();
    assert_eq!(out.lines().nth(1), Some("-".repeat(19).as_str()));
}

#[test]
fn test_confirmation_answers() {
    assert!(is_yes("y\n"));
    assert!(is_yes(" YES "));
    assert!(!is_yes(""));
    assert!(!is_yes("n"));
    assert!(!is_yes("yeah"));
}
