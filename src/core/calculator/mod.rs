pub mod entry_value;
pub mod monthly;
pub mod stats;

pub use entry_value::{compute_entry_value, custom_rate_applies, effective_rate};
pub use monthly::{MonthGroup, MonthOrder, grand_total, group_by_month, month_total};
pub use stats::{MonthlyStats, monthly_stats};
