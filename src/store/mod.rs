//! On-disk time log.

pub mod log_store;

pub use log_store::{HEADER, LogState, LogStore};
