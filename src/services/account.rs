//! Account service
//!
//! Creating accounts, depositing into them and spending from them against
//! an envelope.

use chrono::NaiveDate;
use tracing::info;

use crate::config::Settings;
use crate::engine::{Movement, TransferEngine};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, AccountId, AccountType, Money};
use crate::storage::{atomically, BalanceRow, LedgerGateway};

use super::{require_account, require_envelope, total, BalanceChange, Posting};

/// Memo recorded on the deposit that seeds a new account
pub const STARTING_BALANCE_MEMO: &str = "Starting balance";

/// Service for account operations
pub struct AccountService<'a, G: ?Sized> {
    gateway: &'a G,
    engine: TransferEngine,
    pool: &'a str,
}

impl<'a, G: LedgerGateway + ?Sized> AccountService<'a, G> {
    /// Create a new account service
    pub fn new(gateway: &'a G, settings: &'a Settings) -> Self {
        Self {
            gateway,
            engine: TransferEngine::new(settings.overdraft_policy),
            pool: &settings.pool_envelope,
        }
    }

    /// Create a new account
    ///
    /// A nonzero starting balance is recorded as a deposit from the pool, so
    /// the money is immediately available to budget.
    pub fn create(
        &self,
        name: &str,
        account_type: AccountType,
        starting_balance: Money,
        date: NaiveDate,
    ) -> LedgerResult<Account> {
        let name = name.trim();

        if starting_balance.is_negative() {
            return Err(LedgerError::InvalidAmount(format!(
                "starting balance cannot be negative, got {}",
                starting_balance
            )));
        }

        let account = atomically(self.gateway, |g| {
            if g.account_by_name(name)?.is_some() {
                return Err(LedgerError::Duplicate {
                    entity_type: "Account",
                    identifier: name.to_string(),
                });
            }

            let mut account = Account::new(name, account_type, Money::zero());
            account
                .validate()
                .map_err(|e| LedgerError::Validation(e.to_string()))?;

            if starting_balance.is_zero() {
                g.insert_account(account.clone())?;
                return Ok(account);
            }

            let mut pool = require_envelope(g, self.pool)?;
            let txn = self.engine.deposit(
                &mut account,
                &mut pool,
                Movement::with_memo(starting_balance, date, STARTING_BALANCE_MEMO),
            )?;

            g.insert_account(account.clone())?;
            g.update_envelope_balance(&pool.name, pool.balance)?;
            g.insert_transaction(txn)?;
            Ok(account)
        })?;

        info!(
            account = %account.name,
            account_type = %account.account_type,
            balance = %account.balance,
            "account created"
        );
        Ok(account)
    }

    /// Put money into an account; the pool grows by the same amount
    pub fn deposit(
        &self,
        account_name: &str,
        amount: Money,
        memo: &str,
        date: NaiveDate,
    ) -> LedgerResult<Posting> {
        let posting = atomically(self.gateway, |g| {
            let mut account = require_account(g, account_name)?;
            let mut pool = require_envelope(g, self.pool)?;
            let (account_before, pool_before) = (account.balance, pool.balance);

            let txn = self.engine.deposit(
                &mut account,
                &mut pool,
                Movement::with_memo(amount, date, memo),
            )?;

            g.update_account_balance(&account.name, account.balance)?;
            g.update_envelope_balance(&pool.name, pool.balance)?;
            g.insert_transaction(txn.clone())?;

            Ok(Posting {
                transaction: txn,
                changes: [
                    BalanceChange::new(&account, account_before),
                    BalanceChange::new(&pool, pool_before),
                ],
            })
        })?;

        info!(account = account_name, amount = %amount, "deposit recorded");
        Ok(posting)
    }

    /// Spend from an account, charging the spending to an envelope
    pub fn withdraw(
        &self,
        account_name: &str,
        envelope_name: &str,
        amount: Money,
        memo: &str,
        date: NaiveDate,
    ) -> LedgerResult<Posting> {
        let posting = atomically(self.gateway, |g| {
            let mut account = require_account(g, account_name)?;
            let mut envelope = require_envelope(g, envelope_name)?;
            let (account_before, envelope_before) = (account.balance, envelope.balance);

            let txn = self.engine.withdraw(
                &mut account,
                &mut envelope,
                Movement::with_memo(amount, date, memo),
            )?;

            g.update_account_balance(&account.name, account.balance)?;
            g.update_envelope_balance(&envelope.name, envelope.balance)?;
            g.insert_transaction(txn.clone())?;

            Ok(Posting {
                transaction: txn,
                changes: [
                    BalanceChange::new(&account, account_before),
                    BalanceChange::new(&envelope, envelope_before),
                ],
            })
        })?;

        info!(
            account = account_name,
            envelope = envelope_name,
            amount = %amount,
            "withdrawal recorded"
        );
        Ok(posting)
    }

    /// Get an account by name (case-insensitive)
    pub fn get(&self, name: &str) -> LedgerResult<Account> {
        require_account(self.gateway, name)
    }

    /// All accounts in creation order
    pub fn list(&self) -> LedgerResult<Vec<BalanceRow<AccountId>>> {
        self.gateway.list_accounts()
    }

    /// Sum of all account balances
    pub fn total_balance(&self) -> LedgerResult<Money> {
        total("account total", self.list()?.iter().map(|row| row.balance))
    }
}
