//! rPaysheet main entrypoint.

use rpaysheet::run;
use rpaysheet::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
