//! Persistence gateway contract
//!
//! Bookkeeping operations only see storage through [`LedgerGateway`]. Writes
//! happen inside a scope opened with `begin` and closed with `commit` or
//! `rollback`; [`atomically`] wraps that protocol around a closure.

use tracing::warn;

use crate::error::LedgerResult;
use crate::models::{Account, AccountId, Envelope, EnvelopeId, Group, GroupId, Money, Transaction};

/// `(id, name, balance)` projection of an account or envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceRow<I> {
    pub id: I,
    pub name: String,
    pub balance: Money,
}

/// `(id, name)` projection of a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRow {
    pub id: GroupId,
    pub name: String,
}

/// Read/update operations over the four ledger tables
///
/// Name lookups are case-insensitive. Inserting a duplicate name or updating
/// a name that does not exist fails with `LedgerError::Persistence`.
pub trait LedgerGateway {
    fn account_by_name(&self, name: &str) -> LedgerResult<Option<Account>>;

    fn envelope_by_name(&self, name: &str) -> LedgerResult<Option<Envelope>>;

    fn group_by_name(&self, name: &str) -> LedgerResult<Option<Group>>;

    fn insert_account(&self, account: Account) -> LedgerResult<()>;

    fn update_account_balance(&self, name: &str, balance: Money) -> LedgerResult<()>;

    fn insert_envelope(&self, envelope: Envelope) -> LedgerResult<()>;

    fn update_envelope_balance(&self, name: &str, balance: Money) -> LedgerResult<()>;

    fn insert_group(&self, group: Group) -> LedgerResult<()>;

    fn insert_transaction(&self, transaction: Transaction) -> LedgerResult<()>;

    fn list_accounts(&self) -> LedgerResult<Vec<BalanceRow<AccountId>>>;

    fn list_envelopes(&self) -> LedgerResult<Vec<BalanceRow<EnvelopeId>>>;

    fn list_groups(&self) -> LedgerResult<Vec<GroupRow>>;

    /// The transaction log in the order it was written
    fn list_transactions(&self) -> LedgerResult<Vec<Transaction>>;

    /// True when no table holds any rows
    fn is_empty(&self) -> LedgerResult<bool>;

    /// Open a write scope. Scopes do not nest.
    fn begin(&self) -> LedgerResult<()>;

    /// Make the scope's writes durable and close it
    ///
    /// If this fails, the implementation has already restored the state from
    /// before `begin` and closed the scope.
    fn commit(&self) -> LedgerResult<()>;

    /// Discard the scope's writes and close it
    fn rollback(&self) -> LedgerResult<()>;
}

/// Run `op` inside one gateway scope
///
/// Commits when `op` succeeds. Any error from `op` rolls the scope back and is
/// returned unchanged; a failed commit has already been rolled back by the
/// gateway.
pub fn atomically<G, T, F>(gateway: &G, op: F) -> LedgerResult<T>
where
    G: LedgerGateway + ?Sized,
    F: FnOnce(&G) -> LedgerResult<T>,
{
    gateway.begin()?;

    match op(gateway) {
        Ok(value) => {
            gateway.commit()?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = gateway.rollback() {
                warn!(error = %rollback_err, "rollback failed after aborted operation");
            }
            Err(err)
        }
    }
}
