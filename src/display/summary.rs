//! Ledger summary formatting

use crate::services::LedgerSummary;

pub fn format_summary(summary: &LedgerSummary, pool: &str, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Accounts total:     {:>12}\n",
        summary.accounts_total.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<20}{:>12}\n",
        format!("{}:", pool),
        summary.pool_balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Allocated:          {:>12}\n",
        summary.allocated_total.format_with_symbol(symbol)
    ));
    output.push('\n');

    if summary.is_balanced {
        output.push_str("Ledger is balanced.\n");
    } else {
        output.push_str(&format!(
            "Ledger is OUT OF BALANCE by {}\n",
            summary.discrepancy.format_with_symbol(symbol)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_format_balanced_summary() {
        let summary = LedgerSummary {
            accounts_total: Money::from_units(125),
            pool_balance: Money::from_units(110),
            allocated_total: Money::from_units(15),
            discrepancy: Money::zero(),
            is_balanced: true,
        };

        let formatted = format_summary(&summary, "Income Pool", "$");
        assert!(formatted.contains("Income Pool:"));
        assert!(formatted.contains("$125.00"));
        assert!(formatted.contains("Ledger is balanced."));
    }

    #[test]
    fn test_format_unbalanced_summary() {
        let summary = LedgerSummary {
            accounts_total: Money::from_units(10),
            pool_balance: Money::from_units(4),
            allocated_total: Money::zero(),
            discrepancy: Money::from_units(6),
            is_balanced: false,
        };

        let formatted = format_summary(&summary, "Income Pool", "$");
        assert!(formatted.contains("OUT OF BALANCE by $6.00"));
    }
}
