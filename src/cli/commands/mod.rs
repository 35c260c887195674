pub mod backup;
pub mod config;
pub mod edit;
pub mod export;
pub mod init;
pub mod last;
pub mod list;
pub mod report;
pub mod start;
pub mod status;
pub mod stop;

use crate::config::Config;
use crate::store::LogStore;

/// Time log configured for this run.
pub(crate) fn open_store(cfg: &Config) -> LogStore {
    LogStore::new(cfg.store_path())
}
