//! Transaction log queries

use crate::error::LedgerResult;
use crate::models::Transaction;
use crate::storage::LedgerGateway;

/// Filter options for listing transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Only transactions touching this account or envelope
    pub holder: Option<String>,
    /// Keep only the most recent N
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holder(mut self, name: impl Into<String>) -> Self {
        self.holder = Some(name.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Read-only access to the transaction log
pub struct TransactionService<'a, G: ?Sized> {
    gateway: &'a G,
}

impl<'a, G: LedgerGateway + ?Sized> TransactionService<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Transactions in the order they were recorded, most recent last
    pub fn list(&self, filter: &TransactionFilter) -> LedgerResult<Vec<Transaction>> {
        let mut transactions = self.gateway.list_transactions()?;

        if let Some(holder) = &filter.holder {
            transactions.retain(|t| t.involves(holder));
        }

        if let Some(limit) = filter.limit {
            let skip = transactions.len().saturating_sub(limit);
            transactions.drain(..skip);
        }

        Ok(transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::AccountType;
    use crate::services::test_support::{create_test_storage, date, units};
    use crate::services::{AccountService, EnvelopeService};

    fn seeded() -> (tempfile::TempDir, crate::storage::Storage) {
        let (temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let accounts = AccountService::new(&storage, &settings);
        let envelopes = EnvelopeService::new(&storage, &settings);

        accounts
            .create("Checking", AccountType::Checking, units(100), date())
            .unwrap();
        accounts
            .create("Savings", AccountType::Savings, units(50), date())
            .unwrap();
        envelopes.create("Needs", "Groceries").unwrap();
        envelopes.fund("Groceries", units(40), "", date()).unwrap();
        accounts
            .withdraw("Checking", "Groceries", units(25), "", date())
            .unwrap();

        (temp_dir, storage)
    }

    #[test]
    fn test_list_all_in_order() {
        let (_temp_dir, storage) = seeded();
        let service = TransactionService::new(&storage);

        let txns = service.list(&TransactionFilter::new()).unwrap();
        let labels: Vec<_> = txns.iter().map(|t| t.kind.label()).collect();
        assert_eq!(labels, vec!["deposit", "deposit", "transfer", "withdrawal"]);
    }

    #[test]
    fn test_filter_by_holder() {
        let (_temp_dir, storage) = seeded();
        let service = TransactionService::new(&storage);

        let txns = service
            .list(&TransactionFilter::new().holder("groceries"))
            .unwrap();
        assert_eq!(txns.len(), 2);

        let txns = service.list(&TransactionFilter::new().holder("Savings")).unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].amount, units(50));
    }

    #[test]
    fn test_limit_keeps_most_recent() {
        let (_temp_dir, storage) = seeded();
        let service = TransactionService::new(&storage);

        let txns = service.list(&TransactionFilter::new().limit(1)).unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].kind.label(), "withdrawal");

        let txns = service.list(&TransactionFilter::new().limit(10)).unwrap();
        assert_eq!(txns.len(), 4);
    }
}
