//! Account CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_account_details, format_account_list, format_posting};
use crate::error::{LedgerError, LedgerResult};
use crate::models::AccountType;
use crate::services::AccountService;
use crate::storage::Storage;

use super::{parse_amount, parse_date};

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new account
    Create {
        /// Account name
        name: String,
        /// Account type (checking, savings, credit, cash, investment, other)
        #[arg(short = 't', long, default_value = "checking")]
        account_type: String,
        /// Starting balance (e.g., "1000.00" or "1000")
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        balance: String,
    },
    /// List all accounts
    List,
    /// Show account details
    Show {
        /// Account name
        account: String,
    },
    /// Deposit money into an account
    Deposit {
        /// Account name
        account: String,
        /// Amount to deposit
        #[arg(allow_hyphen_values = true)]
        amount: String,
        #[arg(short, long, default_value = "")]
        memo: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Spend from an account against an envelope
    Withdraw {
        /// Account name
        account: String,
        /// Envelope the spending is charged to
        envelope: String,
        /// Amount to withdraw
        #[arg(allow_hyphen_values = true)]
        amount: String,
        #[arg(short, long, default_value = "")]
        memo: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Handle an account command
pub fn handle_account_command(
    storage: &Storage,
    settings: &Settings,
    cmd: AccountCommands,
) -> LedgerResult<()> {
    let service = AccountService::new(storage, settings);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        AccountCommands::Create {
            name,
            account_type,
            balance,
        } => {
            let account_type = AccountType::parse(&account_type).ok_or_else(|| {
                LedgerError::Validation(format!(
                    "Invalid account type: '{}'. Valid types: checking, savings, credit, cash, investment, other",
                    account_type
                ))
            })?;
            let starting_balance = parse_amount(&balance)?;

            let account = service.create(&name, account_type, starting_balance, parse_date(None)?)?;

            println!("Created account: {}", account.name);
            println!("  Type: {}", account.account_type);
            println!(
                "  Starting Balance: {}",
                account.balance.format_with_symbol(symbol)
            );
            println!("  ID: {}", account.id);
        }

        AccountCommands::List => {
            let rows = service.list()?;
            println!("{}", format_account_list(&rows, symbol));
        }

        AccountCommands::Show { account } => {
            let found = service.get(&account)?;
            print!("{}", format_account_details(&found, symbol));
        }

        AccountCommands::Deposit {
            account,
            amount,
            memo,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = parse_date(date.as_deref())?;

            let posting = service.deposit(&account, amount, &memo, date)?;
            print!("{}", format_posting(&posting, symbol));
        }

        AccountCommands::Withdraw {
            account,
            envelope,
            amount,
            memo,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = parse_date(date.as_deref())?;

            let posting = service.withdraw(&account, &envelope, amount, &memo, date)?;
            print!("{}", format_posting(&posting, symbol));
        }
    }

    Ok(())
}
