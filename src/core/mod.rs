pub mod calculator;
pub mod entries;
pub mod expenses;
pub mod ids;
pub mod logic;
pub mod period;
