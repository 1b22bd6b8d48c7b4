/// ANSI color helpers for terminal output.
use ansi_term::Colour::{Fixed, Green, Red};

/// Amount color:
/// \>0 → green
/// \<0 → red
/// 0 → grey
pub fn colorize_amount(value: f64, text: &str) -> String {
    if value > 0.0 {
        Green.paint(text).to_string()
    } else if value < 0.0 {
        Red.paint(text).to_string()
    } else {
        Fixed(244).paint(text).to_string()
    }
}
