//! Transactions table, stored in transactions.json
//!
//! Append-only: rows are inserted and never updated.

use crate::models::Transaction;

use super::table::{Row, Table};

pub type TransactionTable = Table<Transaction>;

impl Row for Transaction {
    const TABLE: &'static str = "transactions";

    fn unique_name(&self) -> Option<&str> {
        None
    }

    fn check(&self) -> Result<(), String> {
        self.validate().map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn transfer(units: i64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            TransactionKind::Transfer {
                from_envelope: "Income Pool".into(),
                to_envelope: "Rent".into(),
            },
            Money::from_units(units),
            "",
        )
    }

    #[test]
    fn test_repeated_rows_allowed() {
        let temp_dir = TempDir::new().unwrap();
        let table = TransactionTable::new(temp_dir.path().join("transactions.json"));

        table.insert(transfer(10)).unwrap();
        table.insert(transfer(10)).unwrap();
        assert_eq!(table.len().unwrap(), 2);
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let table = TransactionTable::new(temp_dir.path().join("transactions.json"));

        let result = table.insert(transfer(0));
        assert!(matches!(result, Err(LedgerError::Persistence(_))));
        assert!(table.is_empty().unwrap());
    }

    #[test]
    fn test_unknown_type_on_disk_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        std::fs::write(
            &path,
            r#"[{"id":"550e8400-e29b-41d4-a716-446655440000","date":"2025-02-01",
                "type":"refund","amount":100}]"#,
        )
        .unwrap();

        let table = TransactionTable::new(path);
        assert!(matches!(table.load(), Err(LedgerError::Persistence(_))));
    }
}
