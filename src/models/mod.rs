pub mod expense;
pub mod month_key;
pub mod rate_policy;
pub mod snapshot;
pub mod time_entry;
pub mod work_type;

pub use expense::Expense;
pub use month_key::MonthKey;
pub use rate_policy::{RatePolicy, RateTable};
pub use snapshot::Snapshot;
pub use time_entry::TimeEntry;
pub use work_type::{RateType, WorkType, WorkTypeRef};
