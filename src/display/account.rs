//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use tabled::Tabled;

use crate::models::{Account, AccountId, Money};
use crate::storage::BalanceRow;

use super::render_table;

#[derive(Tabled)]
struct AccountLine {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Format a list of accounts with a total row
pub fn format_account_list(rows: &[BalanceRow<AccountId>], symbol: &str) -> String {
    if rows.is_empty() {
        return "No accounts found.".to_string();
    }

    let total = match Money::checked_sum(rows.iter().map(|row| row.balance)) {
        Some(total) => total.format_with_symbol(symbol),
        None => "overflow".to_string(),
    };

    let mut lines: Vec<AccountLine> = rows
        .iter()
        .map(|row| AccountLine {
            id: row.id.short(),
            name: row.name.clone(),
            balance: row.balance.format_with_symbol(symbol),
        })
        .collect();
    lines.push(AccountLine {
        id: String::new(),
        name: "TOTAL".to_string(),
        balance: total,
    });

    render_table(lines, &[2])
}

/// Format a single account's details
pub fn format_account_details(account: &Account, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.name));
    output.push_str(&format!("  Type:     {}\n", account.account_type));
    output.push_str(&format!("  ID:       {}\n", account.id));
    output.push_str(&format!(
        "  Balance:  {}\n",
        account.balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Created:  {}\n",
        account.created_at.format("%Y-%m-%d %H:%M")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountType;

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_account_list(&[], "$"), "No accounts found.");
    }

    #[test]
    fn test_format_account_list() {
        let rows = vec![
            BalanceRow {
                id: AccountId::new(),
                name: "Checking".into(),
                balance: Money::from_cents(12500),
            },
            BalanceRow {
                id: AccountId::new(),
                name: "Savings".into(),
                balance: Money::from_cents(5050),
            },
        ];

        let formatted = format_account_list(&rows, "$");
        assert!(formatted.contains("Checking"));
        assert!(formatted.contains("$125.00"));
        assert!(formatted.contains("TOTAL"));
        assert!(formatted.contains("$175.50"));
        assert!(formatted.contains("acc-"));
    }

    #[test]
    fn test_format_account_list_total_overflow() {
        let rows: Vec<BalanceRow<AccountId>> = ["Checking", "Savings"]
            .into_iter()
            .map(|name| BalanceRow {
                id: AccountId::new(),
                name: name.into(),
                balance: Money::from_cents(i64::MAX),
            })
            .collect();

        let formatted = format_account_list(&rows, "$");
        assert!(formatted.contains("TOTAL"));
        assert!(formatted.contains("overflow"));
    }

    #[test]
    fn test_format_account_details() {
        let account = Account::new("Checking", AccountType::Checking, Money::from_cents(-250));

        let formatted = format_account_details(&account, "€");
        assert!(formatted.contains("Account: Checking"));
        assert!(formatted.contains("Checking"));
        assert!(formatted.contains("-€2.50"));
    }
}
