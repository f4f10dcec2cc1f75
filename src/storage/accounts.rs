//! Accounts table, stored in accounts.json

use crate::models::Account;

use super::table::{Row, Table};

pub type AccountTable = Table<Account>;

impl Row for Account {
    const TABLE: &'static str = "accounts";

    fn unique_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn check(&self) -> Result<(), String> {
        self.validate().map_err(|e| e.to_string())
    }
}
