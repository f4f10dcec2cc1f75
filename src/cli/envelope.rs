//! Envelope CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_envelope_details, format_envelope_list, format_posting};
use crate::error::LedgerResult;
use crate::services::EnvelopeService;
use crate::storage::Storage;

use super::{parse_amount, parse_date};

/// Envelope subcommands
#[derive(Subcommand)]
pub enum EnvelopeCommands {
    /// Create a new envelope
    Create {
        /// Envelope name
        name: String,
        /// Group the envelope belongs to
        #[arg(short, long)]
        group: String,
    },
    /// List all envelopes
    List,
    /// Show envelope details
    Show {
        envelope: String,
    },
    /// Move unallocated money from the pool into an envelope
    Fund {
        envelope: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
        #[arg(short, long, default_value = "")]
        memo: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Move budget between two envelopes
    Transfer {
        /// Source envelope
        from: String,
        /// Destination envelope
        to: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
        #[arg(short, long, default_value = "")]
        memo: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Handle an envelope command
pub fn handle_envelope_command(
    storage: &Storage,
    settings: &Settings,
    cmd: EnvelopeCommands,
) -> LedgerResult<()> {
    let service = EnvelopeService::new(storage, settings);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        EnvelopeCommands::Create { name, group } => {
            let envelope = service.create(&group, &name)?;
            println!("Created envelope: {} (group: {})", envelope.name, envelope.group);
        }

        EnvelopeCommands::List => {
            let rows = service.list()?;
            println!("{}", format_envelope_list(&rows, service.pool_name(), symbol));
        }

        EnvelopeCommands::Show { envelope } => {
            let found = service.get(&envelope)?;
            print!("{}", format_envelope_details(&found, symbol));
        }

        EnvelopeCommands::Fund {
            envelope,
            amount,
            memo,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = parse_date(date.as_deref())?;

            let posting = service.fund(&envelope, amount, &memo, date)?;
            print!("{}", format_posting(&posting, symbol));
        }

        EnvelopeCommands::Transfer {
            from,
            to,
            amount,
            memo,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = parse_date(date.as_deref())?;

            let posting = service.transfer(&from, &to, amount, &memo, date)?;
            print!("{}", format_posting(&posting, symbol));
        }
    }

    Ok(())
}
