pub mod backup;
pub mod calculator;
pub mod config;
pub mod edit;
pub mod report;
pub mod timer;
