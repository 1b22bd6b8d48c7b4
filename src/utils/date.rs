use chrono::NaiveDate;

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// "Sep 1, 2025"
pub fn display_date(d: NaiveDate) -> String {
    d.format("%b %-d, %Y").to_string()
}
