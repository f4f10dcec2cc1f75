//! envelope-ledger - envelope budgeting ledger
//!
//! Money lives in accounts and is budgeted into envelopes, which are
//! organised under groups. A distinguished envelope, the income pool, holds
//! money that has been deposited but not yet allocated. Every deposit,
//! withdrawal and envelope transfer is recorded in an append-only
//! transaction log, and the pool plus all other envelopes always add up to
//! the money held across accounts.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Accounts, envelopes, groups, transactions and money
//! - `engine`: Balance transfer rules, free of any I/O
//! - `storage`: The persistence gateway and its JSON file implementation
//! - `services`: Bookkeeping operations, each run in one atomic scope
//! - `display`, `cli`: Terminal output and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use envelope_ledger::config::{LedgerPaths, Settings};
//! use envelope_ledger::services::AccountService;
//! use envelope_ledger::storage::{initialize_storage, Storage, StorageLayout};
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(StorageLayout::from_paths(&paths))?;
//! initialize_storage(&storage, &settings)?;
//!
//! let accounts = AccountService::new(&storage, &settings);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
