//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Two decimals with thousands separators: `$1,234.50`, `-$12.00`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // -0.00 would read oddly
    let sign = if grouped == "0" && frac_part == "00" { "" } else { sign };

    format!("{sign}{symbol}{grouped}.{frac_part}")
}

/// Quantity without trailing zeros: 8 → "8", 2.5 → "2.5".
pub fn format_quantity(q: f64) -> String {
    let s = format!("{:.2}", q);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// "8 hour(s)", "3 job(s)"
pub fn format_hours(q: f64, unit: &str) -> String {
    format!("{} {}", format_quantity(q), unit)
}

pub fn separator(ch: &str, width: usize) -> String {
    let c = ch.chars().next().unwrap_or('-');
    std::iter::repeat_n(c, width).collect()
}
