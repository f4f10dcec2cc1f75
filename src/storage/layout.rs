//! Table layout handed to the store at construction

use std::path::PathBuf;

use crate::config::LedgerPaths;

/// Where each of the four tables lives on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub accounts: PathBuf,
    pub envelopes: PathBuf,
    pub groups: PathBuf,
    pub transactions: PathBuf,
}

impl StorageLayout {
    /// Standard layout: one JSON file per table in the data directory
    pub fn from_paths(paths: &LedgerPaths) -> Self {
        Self {
            accounts: paths.accounts_file(),
            envelopes: paths.envelopes_file(),
            groups: paths.groups_file(),
            transactions: paths.transactions_file(),
        }
    }
}
