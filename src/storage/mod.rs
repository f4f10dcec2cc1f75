//! Storage layer for the ledger
//!
//! Four JSON tables (accounts, envelopes, groups, transactions) held in
//! memory and written back atomically when a scope commits.

pub mod accounts;
pub mod envelopes;
pub mod file_io;
pub mod gateway;
pub mod groups;
pub mod init;
pub mod layout;
pub mod table;
pub mod transactions;

pub use accounts::AccountTable;
pub use envelopes::EnvelopeTable;
pub use gateway::{atomically, BalanceRow, GroupRow, LedgerGateway};
pub use groups::GroupTable;
pub use init::initialize_storage;
pub use layout::StorageLayout;
pub use transactions::TransactionTable;

use std::sync::{RwLock, RwLockWriteGuard};

use tracing::{debug, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, AccountId, Balance, Envelope, EnvelopeId, Group, Money, Transaction};

/// Table contents captured when a scope opens
struct Snapshot {
    accounts: Vec<Account>,
    envelopes: Vec<Envelope>,
    groups: Vec<Group>,
    transactions: Vec<Transaction>,
}

/// JSON-file implementation of [`LedgerGateway`]
pub struct Storage {
    layout: StorageLayout,
    pub accounts: AccountTable,
    pub envelopes: EnvelopeTable,
    pub groups: GroupTable,
    pub transactions: TransactionTable,
    scope: RwLock<Option<Snapshot>>,
}

impl Storage {
    /// Create a store over the given table layout. Nothing is read until
    /// [`Storage::load_all`].
    pub fn new(layout: StorageLayout) -> Self {
        Self {
            accounts: AccountTable::new(layout.accounts.clone()),
            envelopes: EnvelopeTable::new(layout.envelopes.clone()),
            groups: GroupTable::new(layout.groups.clone()),
            transactions: TransactionTable::new(layout.transactions.clone()),
            layout,
            scope: RwLock::new(None),
        }
    }

    /// Create a store and load every table from disk
    pub fn open(layout: StorageLayout) -> LedgerResult<Self> {
        let storage = Self::new(layout);
        storage.load_all()?;
        Ok(storage)
    }

    pub fn layout(&self) -> &StorageLayout {
        &self.layout
    }

    /// Load all tables from disk
    pub fn load_all(&self) -> LedgerResult<()> {
        self.accounts.load()?;
        self.envelopes.load()?;
        self.groups.load()?;
        self.transactions.load()?;
        debug!(
            accounts = self.accounts.len()?,
            envelopes = self.envelopes.len()?,
            transactions = self.transactions.len()?,
            "ledger tables loaded"
        );
        Ok(())
    }

    fn scope(&self) -> LedgerResult<RwLockWriteGuard<'_, Option<Snapshot>>> {
        self.scope
            .write()
            .map_err(|e| LedgerError::Persistence(format!("Failed to acquire scope lock: {}", e)))
    }

    fn require_scope(&self) -> LedgerResult<()> {
        if self.scope()?.is_none() {
            return Err(LedgerError::Persistence(
                "Write attempted outside of a scope".into(),
            ));
        }
        Ok(())
    }

    fn restore(&self, snapshot: &Snapshot) -> LedgerResult<()> {
        self.accounts.restore(snapshot.accounts.clone())?;
        self.envelopes.restore(snapshot.envelopes.clone())?;
        self.groups.restore(snapshot.groups.clone())?;
        self.transactions.restore(snapshot.transactions.clone())?;
        Ok(())
    }

    /// Write every table; on failure put back the files already replaced
    fn persist(&self, snapshot: &Snapshot) -> LedgerResult<()> {
        let saves: [(&dyn Fn() -> LedgerResult<()>, &dyn Fn() -> LedgerResult<()>); 4] = [
            (&|| self.accounts.save(), &|| self.accounts.save_rows(&snapshot.accounts)),
            (&|| self.envelopes.save(), &|| self.envelopes.save_rows(&snapshot.envelopes)),
            (&|| self.groups.save(), &|| self.groups.save_rows(&snapshot.groups)),
            (&|| self.transactions.save(), &|| {
                self.transactions.save_rows(&snapshot.transactions)
            }),
        ];

        for (index, (save, _)) in saves.iter().enumerate() {
            if let Err(err) = save() {
                for (_, revert) in saves.iter().take(index) {
                    if let Err(e) = revert() {
                        warn!(error = %e, "failed to restore table file after aborted commit");
                    }
                }
                return Err(err);
            }
        }

        Ok(())
    }
}

impl LedgerGateway for Storage {
    fn account_by_name(&self, name: &str) -> LedgerResult<Option<Account>> {
        self.accounts.find_by_name(name)
    }

    fn envelope_by_name(&self, name: &str) -> LedgerResult<Option<Envelope>> {
        self.envelopes.find_by_name(name)
    }

    fn group_by_name(&self, name: &str) -> LedgerResult<Option<Group>> {
        self.groups.find_by_name(name)
    }

    fn insert_account(&self, account: Account) -> LedgerResult<()> {
        self.require_scope()?;
        self.accounts.insert(account)
    }

    fn update_account_balance(&self, name: &str, balance: Money) -> LedgerResult<()> {
        self.require_scope()?;
        self.accounts
            .update_by_name(name, |account| account.set_balance(balance))
    }

    fn insert_envelope(&self, envelope: Envelope) -> LedgerResult<()> {
        self.require_scope()?;
        self.envelopes.insert(envelope)
    }

    fn update_envelope_balance(&self, name: &str, balance: Money) -> LedgerResult<()> {
        self.require_scope()?;
        self.envelopes
            .update_by_name(name, |envelope| envelope.set_balance(balance))
    }

    fn insert_group(&self, group: Group) -> LedgerResult<()> {
        self.require_scope()?;
        self.groups.insert(group)
    }

    fn insert_transaction(&self, transaction: Transaction) -> LedgerResult<()> {
        self.require_scope()?;
        self.transactions.insert(transaction)
    }

    fn list_accounts(&self) -> LedgerResult<Vec<BalanceRow<AccountId>>> {
        Ok(self
            .accounts
            .all()?
            .into_iter()
            .map(|a| BalanceRow {
                id: a.id,
                name: a.name,
                balance: a.balance,
            })
            .collect())
    }

    fn list_envelopes(&self) -> LedgerResult<Vec<BalanceRow<EnvelopeId>>> {
        Ok(self
            .envelopes
            .all()?
            .into_iter()
            .map(|e| BalanceRow {
                id: e.id,
                name: e.name,
                balance: e.balance,
            })
            .collect())
    }

    fn list_groups(&self) -> LedgerResult<Vec<GroupRow>> {
        Ok(self
            .groups
            .all()?
            .into_iter()
            .map(|g| GroupRow {
                id: g.id,
                name: g.name,
            })
            .collect())
    }

    fn list_transactions(&self) -> LedgerResult<Vec<Transaction>> {
        self.transactions.all()
    }

    fn is_empty(&self) -> LedgerResult<bool> {
        Ok(self.accounts.is_empty()?
            && self.envelopes.is_empty()?
            && self.groups.is_empty()?
            && self.transactions.is_empty()?)
    }

    fn begin(&self) -> LedgerResult<()> {
        let mut scope = self.scope()?;
        if scope.is_some() {
            return Err(LedgerError::Persistence(
                "A scope is already open".into(),
            ));
        }

        *scope = Some(Snapshot {
            accounts: self.accounts.snapshot()?,
            envelopes: self.envelopes.snapshot()?,
            groups: self.groups.snapshot()?,
            transactions: self.transactions.snapshot()?,
        });
        Ok(())
    }

    fn commit(&self) -> LedgerResult<()> {
        let snapshot = self
            .scope()?
            .take()
            .ok_or_else(|| LedgerError::Persistence("No open scope to commit".into()))?;

        if let Err(err) = self.persist(&snapshot) {
            warn!(error = %err, "commit failed, restoring previous ledger state");
            self.restore(&snapshot)?;
            return Err(err);
        }

        debug!("scope committed");
        Ok(())
    }

    fn rollback(&self) -> LedgerResult<()> {
        let snapshot = self
            .scope()?
            .take()
            .ok_or_else(|| LedgerError::Persistence("No open scope to roll back".into()))?;

        self.restore(&snapshot)?;
        debug!("scope rolled back");
        Ok(())
    }
}
