//! Transaction display formatting
//!
//! The log is shown as a table with the flat four-slot view of each
//! transaction, so every row reads the same regardless of kind.

use tabled::Tabled;

use crate::models::Transaction;
use crate::services::Posting;

use super::{format_date, render_table, truncate};

#[derive(Tabled)]
struct TransactionLine {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Memo")]
    memo: String,
}

impl TransactionLine {
    fn new(txn: &Transaction, symbol: &str, date_format: &str) -> Self {
        let slots = txn.slots();
        // A withdrawal drains both an account and an envelope
        let from: Vec<&str> = [slots.from_account, slots.from_envelope]
            .into_iter()
            .flatten()
            .collect();
        let to: Vec<&str> = [slots.to_account, slots.to_envelope]
            .into_iter()
            .flatten()
            .collect();

        Self {
            date: format_date(txn.date, date_format),
            kind: txn.kind.label().to_string(),
            from: from.join(" / "),
            to: to.join(" / "),
            amount: txn.amount.format_with_symbol(symbol),
            memo: truncate(&txn.memo, 30),
        }
    }
}

/// Format the transaction log
pub fn format_transaction_list(
    transactions: &[Transaction],
    symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let lines: Vec<TransactionLine> = transactions
        .iter()
        .map(|txn| TransactionLine::new(txn, symbol, date_format))
        .collect();

    render_table(lines, &[4])
}

/// Format the outcome of a deposit, withdrawal or transfer
pub fn format_posting(posting: &Posting, symbol: &str) -> String {
    let txn = &posting.transaction;
    let mut output = format!(
        "Recorded {} of {} on {}",
        txn.kind.label(),
        txn.amount.format_with_symbol(symbol),
        txn.date
    );
    if !txn.memo.is_empty() {
        output.push_str(&format!(" ({})", txn.memo));
    }
    output.push('\n');

    for change in &posting.changes {
        output.push_str(&format!(
            "  {} {}: {} -> {}\n",
            change.kind,
            change.name,
            change.before.format_with_symbol(symbol),
            change.after.format_with_symbol(symbol)
        ));
    }

    output
}
