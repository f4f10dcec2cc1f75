//! Transaction CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_transaction_list;
use crate::error::LedgerResult;
use crate::services::{TransactionFilter, TransactionService};
use crate::storage::Storage;

#[derive(Subcommand)]
pub enum TransactionCommands {
    /// List recorded transactions, most recent last
    List {
        /// Number of transactions to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
        /// Only transactions touching this account or envelope
        #[arg(long)]
        holder: Option<String>,
    },
}

pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::List { limit, holder } => {
            let mut filter = TransactionFilter::new().limit(limit);
            if let Some(holder) = holder {
                filter = filter.holder(holder);
            }

            let transactions = service.list(&filter)?;
            println!(
                "{}",
                format_transaction_list(
                    &transactions,
                    &settings.currency_symbol,
                    &settings.date_format
                )
            );
        }
    }

    Ok(())
}
