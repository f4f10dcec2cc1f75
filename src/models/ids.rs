//! Typed row identifiers
//!
//! Every stored row gets a random UUID when it is created. Each table has its
//! own newtype so an envelope id can never be passed where an account id is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random id
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Short form used in tables: prefix plus the first eight hex digits
            pub fn short(&self) -> String {
                format!("{}{}", $prefix, &self.0.simple().to_string()[..8])
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.short())
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

define_id!(
    /// Identifier of a row in the accounts table
    AccountId,
    "acc-"
);
define_id!(
    /// Identifier of a row in the envelopes table
    EnvelopeId,
    "env-"
);
define_id!(
    /// Identifier of a row in the groups table
    GroupId,
    "grp-"
);
define_id!(
    /// Identifier of a row in the transactions table
    TransactionId,
    "txn-"
);
