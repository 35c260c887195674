pub mod totals;
pub mod week;
