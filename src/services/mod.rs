//! Bookkeeping operations
//!
//! Services load entities through a [`LedgerGateway`], let the
//! [`TransferEngine`](crate::engine::TransferEngine) move money between them,
//! and write the results back inside a single gateway scope.

pub mod account;
pub mod envelope;
pub mod group;
pub mod summary;
pub mod transaction;

pub use account::AccountService;
pub use envelope::EnvelopeService;
pub use group::GroupService;
pub use summary::{LedgerSummary, SummaryService};
pub use transaction::{TransactionFilter, TransactionService};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, Balance, Envelope, Group, Money, Transaction};
use crate::storage::LedgerGateway;

/// How one holder's balance moved during a posting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceChange {
    pub name: String,
    /// "Account" or "Envelope"
    pub kind: &'static str,
    pub before: Money,
    pub after: Money,
}

impl BalanceChange {
    fn new<H: Balance + ?Sized>(holder: &H, before: Money) -> Self {
        Self {
            name: holder.name().to_string(),
            kind: holder.holder_kind(),
            before,
            after: holder.balance(),
        }
    }
}

/// Result of a value-moving operation: the logged transaction and the two
/// balances it touched
#[derive(Debug, Clone)]
pub struct Posting {
    pub transaction: Transaction,
    pub changes: [BalanceChange; 2],
}

pub(crate) fn require_account<G>(gateway: &G, name: &str) -> LedgerResult<Account>
where
    G: LedgerGateway + ?Sized,
{
    gateway
        .account_by_name(name)?
        .ok_or_else(|| LedgerError::account_not_found(name))
}

pub(crate) fn require_envelope<G>(gateway: &G, name: &str) -> LedgerResult<Envelope>
where
    G: LedgerGateway + ?Sized,
{
    gateway
        .envelope_by_name(name)?
        .ok_or_else(|| LedgerError::envelope_not_found(name))
}

pub(crate) fn require_group<G>(gateway: &G, name: &str) -> LedgerResult<Group>
where
    G: LedgerGateway + ?Sized,
{
    gateway
        .group_by_name(name)?
        .ok_or_else(|| LedgerError::group_not_found(name))
}

/// Add up balances, failing instead of wrapping when the total leaves the
/// representable range
pub(crate) fn total<I>(what: &str, amounts: I) -> LedgerResult<Money>
where
    I: IntoIterator<Item = Money>,
{
    Money::checked_sum(amounts)
        .ok_or_else(|| LedgerError::InvalidAmount(format!("{} overflows", what)))
}
