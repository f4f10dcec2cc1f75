//! Envelope and Group models
//!
//! Envelopes are budget categories holding allocated money. Groups are plain
//! labels that envelopes are organised under.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::balance::Balance;
use super::ids::{EnvelopeId, GroupId};
use super::money::Money;
use super::MAX_NAME_LEN;

/// A named grouping of envelopes (e.g., "Bills", "Needs")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: GroupId::new(),
            name: name.into(),
        }
    }

    /// Validate the group
    pub fn validate(&self) -> Result<(), EnvelopeValidationError> {
        validate_name(&self.name)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A row in the envelopes table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub id: EnvelopeId,

    /// Name of the group this envelope belongs to
    pub group: String,

    /// Unique envelope name
    pub name: String,

    /// Money currently allocated to this envelope
    pub balance: Money,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Envelope {
    /// Create a new, empty envelope in a group
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: EnvelopeId::new(),
            group: group.into(),
            name: name.into(),
            balance: Money::zero(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate the envelope
    pub fn validate(&self) -> Result<(), EnvelopeValidationError> {
        validate_name(&self.name)?;

        if self.group.trim().is_empty() {
            return Err(EnvelopeValidationError::MissingGroup);
        }

        Ok(())
    }
}

impl Balance for Envelope {
    fn name(&self) -> &str {
        &self.name
    }

    fn balance(&self) -> Money {
        self.balance
    }

    fn set_balance(&mut self, balance: Money) {
        self.balance = balance;
        self.updated_at = Utc::now();
    }

    fn holder_kind(&self) -> &'static str {
        "Envelope"
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.group, self.name)
    }
}

fn validate_name(name: &str) -> Result<(), EnvelopeValidationError> {
    if name.trim().is_empty() {
        return Err(EnvelopeValidationError::EmptyName);
    }
    if name.len() > MAX_NAME_LEN {
        return Err(EnvelopeValidationError::NameTooLong(name.len()));
    }
    Ok(())
}

/// Validation errors for envelopes and groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeValidationError {
    EmptyName,
    NameTooLong(usize),
    MissingGroup,
}

impl fmt::Display for EnvelopeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
            Self::MissingGroup => write!(f, "Envelope must belong to a group"),
        }
    }
}

impl std::error::Error for EnvelopeValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_envelope_is_empty() {
        let env = Envelope::new("Needs", "Groceries");
        assert_eq!(env.balance(), Money::zero());
        assert_eq!(env.group, "Needs");
        assert_eq!(env.to_string(), "Needs / Groceries");
    }

    #[test]
    fn test_envelope_validation() {
        let mut env = Envelope::new("Needs", "Groceries");
        assert!(env.validate().is_ok());

        env.group = String::new();
        assert_eq!(env.validate(), Err(EnvelopeValidationError::MissingGroup));

        env.name = String::new();
        assert_eq!(env.validate(), Err(EnvelopeValidationError::EmptyName));
    }

    #[test]
    fn test_group_validation() {
        assert!(Group::new("Bills").validate().is_ok());
        assert!(matches!(
            Group::new("x".repeat(150)).validate(),
            Err(EnvelopeValidationError::NameTooLong(150))
        ));
    }
}
