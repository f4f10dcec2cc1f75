//! Display formatting for terminal output
//!
//! Listings are rendered as tables; postings and summaries as short detail
//! blocks. All amounts are shown with the configured currency symbol.

pub mod account;
pub mod envelope;
pub mod summary;
pub mod transaction;

pub use account::{format_account_details, format_account_list};
pub use envelope::{format_envelope_details, format_envelope_list, format_group_list};
pub use summary::format_summary;
pub use transaction::{format_posting, format_transaction_list};

use std::fmt::Write;

use chrono::NaiveDate;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

/// Render rows as a psql-style table, right-aligning the given columns
pub(crate) fn render_table<T: Tabled>(rows: Vec<T>, numeric_columns: &[usize]) -> String {
    let mut table = Table::new(rows);
    table.with(Style::psql());
    for &column in numeric_columns {
        table.modify(Columns::single(column), Alignment::right());
    }
    table.to_string()
}

/// Render a date with a user-supplied strftime format, falling back to
/// YYYY-MM-DD when the format cannot render a date
pub(crate) fn format_date(date: NaiveDate, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

/// Truncate a string to a maximum display width, adding an ellipsis
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max_len).collect()
    }
}
