//! Transaction model
//!
//! Transactions are immutable, append-only log entries describing one
//! movement of money. The kind carries exactly the names that movement
//! touched.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;
use super::names_match;

/// What a transaction moved, and between which holders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money entered an account; the pool envelope grew by the same amount
    Deposit {
        from_envelope: String,
        to_account: String,
    },
    /// Money left an account, drawn against an envelope
    Withdrawal {
        from_account: String,
        from_envelope: String,
    },
    /// Budget moved from one envelope to another
    Transfer {
        from_envelope: String,
        to_envelope: String,
    },
}

impl TransactionKind {
    /// Lowercase type label as stored on disk
    pub fn label(&self) -> &'static str {
        match self {
            Self::Deposit { .. } => "deposit",
            Self::Withdrawal { .. } => "withdrawal",
            Self::Transfer { .. } => "transfer",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit { .. } => write!(f, "Deposit"),
            Self::Withdrawal { .. } => write!(f, "Withdrawal"),
            Self::Transfer { .. } => write!(f, "Transfer"),
        }
    }
}

/// Flat view of a transaction's four name slots
///
/// Exactly two slots are populated for any transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionSlots<'a> {
    pub from_account: Option<&'a str>,
    pub to_account: Option<&'a str>,
    pub from_envelope: Option<&'a str>,
    pub to_envelope: Option<&'a str>,
}

/// A row in the transactions table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    pub date: NaiveDate,

    #[serde(flatten)]
    pub kind: TransactionKind,

    #[serde(default)]
    pub memo: String,

    /// Always positive
    pub amount: Money,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        kind: TransactionKind,
        amount: Money,
        memo: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            date,
            kind,
            memo: memo.into(),
            amount,
        }
    }

    /// Project the kind onto the four-slot layout
    pub fn slots(&self) -> TransactionSlots<'_> {
        match &self.kind {
            TransactionKind::Deposit {
                from_envelope,
                to_account,
            } => TransactionSlots {
                from_envelope: Some(from_envelope),
                to_account: Some(to_account),
                ..Default::default()
            },
            TransactionKind::Withdrawal {
                from_account,
                from_envelope,
            } => TransactionSlots {
                from_account: Some(from_account),
                from_envelope: Some(from_envelope),
                ..Default::default()
            },
            TransactionKind::Transfer {
                from_envelope,
                to_envelope,
            } => TransactionSlots {
                from_envelope: Some(from_envelope),
                to_envelope: Some(to_envelope),
                ..Default::default()
            },
        }
    }

    /// Check whether an account or envelope name appears in any slot
    /// (case-insensitive)
    pub fn involves(&self, name: &str) -> bool {
        let slots = self.slots();
        [
            slots.from_account,
            slots.to_account,
            slots.from_envelope,
            slots.to_envelope,
        ]
        .into_iter()
        .flatten()
        .any(|slot| names_match(slot, name))
    }

    /// Validate a row read back from storage
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        let slots = self.slots();
        let empty = [
            slots.from_account,
            slots.to_account,
            slots.from_envelope,
            slots.to_envelope,
        ]
        .into_iter()
        .flatten()
        .any(|slot| slot.trim().is_empty());
        if empty {
            return Err(TransactionValidationError::EmptySlot);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    EmptySlot,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Transaction amount must be positive, got {}", amount)
            }
            Self::EmptySlot => write!(f, "Transaction has an empty account or envelope name"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
