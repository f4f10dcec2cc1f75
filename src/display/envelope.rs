//! Envelope and group display formatting

use tabled::Tabled;

use crate::models::{names_match, Envelope, EnvelopeId};
use crate::storage::{BalanceRow, GroupRow};

use super::render_table;

#[derive(Tabled)]
struct EnvelopeLine {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

#[derive(Tabled)]
struct GroupLine {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
}

/// Format envelopes as a table; the pool is marked with `*`
pub fn format_envelope_list(rows: &[BalanceRow<EnvelopeId>], pool: &str, symbol: &str) -> String {
    if rows.is_empty() {
        return "No envelopes found. Run 'ledger init' first.".to_string();
    }

    let lines: Vec<EnvelopeLine> = rows
        .iter()
        .map(|row| EnvelopeLine {
            id: row.id.short(),
            name: if names_match(&row.name, pool) {
                format!("{} *", row.name)
            } else {
                row.name.clone()
            },
            balance: row.balance.format_with_symbol(symbol),
        })
        .collect();

    render_table(lines, &[2])
}

/// Format a single envelope's details
pub fn format_envelope_details(envelope: &Envelope, symbol: &str) -> String {
    format!(
        "Envelope: {}\n  Group:    {}\n  ID:       {}\n  Balance:  {}\n",
        envelope.name,
        envelope.group,
        envelope.id,
        envelope.balance.format_with_symbol(symbol)
    )
}

pub fn format_group_list(rows: &[GroupRow]) -> String {
    if rows.is_empty() {
        return "No groups found.".to_string();
    }

    let lines: Vec<GroupLine> = rows
        .iter()
        .map(|row| GroupLine {
            id: row.id.short(),
            name: row.name.clone(),
        })
        .collect();

    render_table(lines, &[])
}
