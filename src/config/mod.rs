//! Configuration for the ledger
//!
//! - Path resolution for the settings file and the table files
//! - User settings (pool envelope name, overdraft policy, display options)

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::{OverdraftPolicy, Settings, DEFAULT_POOL_ENVELOPE};
