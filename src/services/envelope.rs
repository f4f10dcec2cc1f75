//! Envelope service
//!
//! Creating envelopes and moving budget between them. Funding an envelope is
//! a transfer out of the pool.

use chrono::NaiveDate;
use tracing::info;

use crate::config::Settings;
use crate::engine::{Movement, TransferEngine};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Envelope, EnvelopeId, Money};
use crate::storage::{atomically, BalanceRow, LedgerGateway};

use super::{require_envelope, require_group, BalanceChange, Posting};

/// Service for envelope operations
pub struct EnvelopeService<'a, G: ?Sized> {
    gateway: &'a G,
    engine: TransferEngine,
    pool: &'a str,
}

impl<'a, G: LedgerGateway + ?Sized> EnvelopeService<'a, G> {
    /// Create a new envelope service
    pub fn new(gateway: &'a G, settings: &'a Settings) -> Self {
        Self {
            gateway,
            engine: TransferEngine::new(settings.overdraft_policy),
            pool: &settings.pool_envelope,
        }
    }

    /// Name of the envelope holding unallocated money
    pub fn pool_name(&self) -> &str {
        self.pool
    }

    /// Create an empty envelope in an existing group
    pub fn create(&self, group: &str, name: &str) -> LedgerResult<Envelope> {
        let name = name.trim();

        let envelope = atomically(self.gateway, |g| {
            let group = require_group(g, group)?;

            if g.envelope_by_name(name)?.is_some() {
                return Err(LedgerError::Duplicate {
                    entity_type: "Envelope",
                    identifier: name.to_string(),
                });
            }

            let envelope = Envelope::new(group.name, name);
            envelope
                .validate()
                .map_err(|e| LedgerError::Validation(e.to_string()))?;

            g.insert_envelope(envelope.clone())?;
            Ok(envelope)
        })?;

        info!(envelope = %envelope.name, group = %envelope.group, "envelope created");
        Ok(envelope)
    }

    /// Move budget from one envelope to another
    pub fn transfer(
        &self,
        from: &str,
        to: &str,
        amount: Money,
        memo: &str,
        date: NaiveDate,
    ) -> LedgerResult<Posting> {
        let posting = atomically(self.gateway, |g| {
            let mut source = require_envelope(g, from)?;
            let mut target = require_envelope(g, to)?;
            let (source_before, target_before) = (source.balance, target.balance);

            let txn = self.engine.envelope_transfer(
                &mut source,
                &mut target,
                Movement::with_memo(amount, date, memo),
            )?;

            g.update_envelope_balance(&source.name, source.balance)?;
            g.update_envelope_balance(&target.name, target.balance)?;
            g.insert_transaction(txn.clone())?;

            Ok(Posting {
                transaction: txn,
                changes: [
                    BalanceChange::new(&source, source_before),
                    BalanceChange::new(&target, target_before),
                ],
            })
        })?;

        info!(from, to, amount = %amount, "envelope transfer recorded");
        Ok(posting)
    }

    /// Allocate unassigned money from the pool to an envelope
    pub fn fund(
        &self,
        envelope: &str,
        amount: Money,
        memo: &str,
        date: NaiveDate,
    ) -> LedgerResult<Posting> {
        self.transfer(self.pool, envelope, amount, memo, date)
    }

    /// Get an envelope by name (case-insensitive)
    pub fn get(&self, name: &str) -> LedgerResult<Envelope> {
        require_envelope(self.gateway, name)
    }

    /// All envelopes in creation order, the pool included
    pub fn list(&self) -> LedgerResult<Vec<BalanceRow<EnvelopeId>>> {
        self.gateway.list_envelopes()
    }
}
