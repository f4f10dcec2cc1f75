//! Ledger-wide totals
//!
//! The books balance when the pool plus every other envelope adds up to the
//! money held across all accounts.

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{names_match, Money};
use crate::storage::LedgerGateway;

use super::total;

/// Totals across the whole ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerSummary {
    pub accounts_total: Money,
    /// Unallocated money
    pub pool_balance: Money,
    /// Money budgeted into envelopes other than the pool
    pub allocated_total: Money,
    /// Accounts minus every envelope; zero when balanced
    pub discrepancy: Money,
    pub is_balanced: bool,
}

pub struct SummaryService<'a, G: ?Sized> {
    gateway: &'a G,
    pool: &'a str,
}

impl<'a, G: LedgerGateway + ?Sized> SummaryService<'a, G> {
    pub fn new(gateway: &'a G, settings: &'a Settings) -> Self {
        Self {
            gateway,
            pool: &settings.pool_envelope,
        }
    }

    pub fn summary(&self) -> LedgerResult<LedgerSummary> {
        let accounts = self.gateway.list_accounts()?;
        let accounts_total = total("account total", accounts.iter().map(|row| row.balance))?;

        let (pool, others): (Vec<_>, Vec<_>) = self
            .gateway
            .list_envelopes()?
            .into_iter()
            .partition(|row| names_match(&row.name, self.pool));

        let pool_balance = total("pool balance", pool.iter().map(|row| row.balance))?;
        let allocated_total = total("allocated total", others.iter().map(|row| row.balance))?;
        let discrepancy = accounts_total
            .checked_sub(pool_balance)
            .and_then(|rest| rest.checked_sub(allocated_total))
            .ok_or_else(|| LedgerError::InvalidAmount("ledger discrepancy overflows".into()))?;

        Ok(LedgerSummary {
            accounts_total,
            pool_balance,
            allocated_total,
            discrepancy,
            is_balanced: discrepancy.is_zero(),
        })
    }
}
