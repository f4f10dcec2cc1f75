//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod envelope;
pub mod group;
pub mod summary;
pub mod transaction;

pub use account::{handle_account_command, AccountCommands};
pub use envelope::{handle_envelope_command, EnvelopeCommands};
pub use group::{handle_group_command, GroupCommands};
pub use summary::handle_summary_command;
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;

/// Date format accepted on the command line
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a user-entered amount such as "25", "25.50" or "$25.50"
pub(crate) fn parse_amount(input: &str) -> LedgerResult<Money> {
    Money::parse(input).map_err(|e| {
        LedgerError::InvalidAmount(format!(
            "'{}': {}. Use a format like '1000.00' or '1000'",
            input, e
        ))
    })
}

/// Parse an optional YYYY-MM-DD date, defaulting to today
pub(crate) fn parse_date(input: Option<&str>) -> LedgerResult<NaiveDate> {
    match input {
        Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| {
            LedgerError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", s))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
