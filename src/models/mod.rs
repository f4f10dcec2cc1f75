//! Core data models for the ledger
//!
//! Accounts and envelopes hold balances, groups label envelopes, and
//! transactions record every movement of money between them.

pub mod account;
pub mod balance;
pub mod envelope;
pub mod ids;
pub mod money;
pub mod transaction;

pub use account::{Account, AccountType};
pub use balance::Balance;
pub use envelope::{Envelope, Group};
pub use ids::{AccountId, EnvelopeId, GroupId, TransactionId};
pub use money::Money;
pub use transaction::{Transaction, TransactionKind, TransactionSlots};

/// Longest name accepted for any account, envelope or group
pub const MAX_NAME_LEN: usize = 100;

/// Folded form of a name, used for every uniqueness check and lookup
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// Whether two account, envelope or group names refer to the same holder
pub fn names_match(a: &str, b: &str) -> bool {
    name_key(a) == name_key(b)
}
