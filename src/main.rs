use std::sync::Once;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use envelope_ledger::cli::{
    handle_account_command, handle_envelope_command, handle_group_command,
    handle_summary_command, handle_transaction_command, AccountCommands, EnvelopeCommands,
    GroupCommands, TransactionCommands,
};
use envelope_ledger::config::{LedgerPaths, Settings};
use envelope_ledger::storage::{initialize_storage, Storage, StorageLayout};

#[derive(Parser)]
#[command(
    name = "ledger",
    author = "Kaylee Beyene",
    version,
    about = "Envelope budgeting ledger",
    long_about = "Keeps accounts, envelopes and an income pool in step. Deposits \
                  land in the pool, funding moves money from the pool into \
                  envelopes, and every withdrawal is charged to an envelope."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Envelope management commands
    #[command(subcommand, alias = "env")]
    Envelope(EnvelopeCommands),

    /// Envelope group commands
    #[command(subcommand)]
    Group(GroupCommands),

    /// Transaction log commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Show ledger totals and whether the books balance
    Summary,

    /// Initialize a new ledger
    Init,

    /// Show current configuration and paths
    Config,
}

static TRACING: Once = Once::new();

/// Log to stderr, filtered by RUST_LOG
fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::registry()
            .with(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "envelope_ledger=warn".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    });
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::open(StorageLayout::from_paths(&paths))?;

    match cli.command {
        Some(Commands::Account(cmd)) => {
            handle_account_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Envelope(cmd)) => {
            handle_envelope_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Group(cmd)) => {
            handle_group_command(&storage, cmd)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Summary) => {
            handle_summary_command(&storage, &settings)?;
        }
        Some(Commands::Init) => {
            println!("Initializing ledger at: {}", paths.data_dir().display());
            settings.save(&paths)?;

            if initialize_storage(&storage, &settings)? {
                println!("Initialization complete!");
                println!();
                println!("Created the '{}' envelope for unallocated money.", settings.pool_envelope);
                println!("Default groups: Bills, Needs, Wants, Savings");
                println!();
                println!("Run 'ledger account create <name> -b <balance>' to add an account.");
            } else {
                println!("Ledger already initialized.");
            }
        }
        Some(Commands::Config) => {
            println!("Ledger Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Pool envelope:    {}", settings.pool_envelope);
            println!("  Overdraft policy: {:?}", settings.overdraft_policy);
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
        }
        None => {
            println!("ledger - envelope budgeting from the command line");
            println!();
            println!("Run 'ledger --help' for usage information.");
            println!("Run 'ledger init' to create a new ledger.");
        }
    }

    Ok(())
}
