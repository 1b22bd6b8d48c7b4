//! Interactive yes/no questions on stdin.

use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};

/// Show `question` as a warning and read one answer line.
/// Only `y` / `yes` (any case) confirm; EOF counts as no.
pub fn confirm(question: &str) -> AppResult<bool> {
    warning(question);
    print!("Confirm [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
