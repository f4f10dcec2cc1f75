//! Balance transfer engine
//!
//! Pure bookkeeping rules: given two balance holders and an amount, check the
//! movement, apply it, and describe it as a [`Transaction`]. Nothing here
//! touches storage; callers load the holders, run the engine and persist the
//! results.
//!
//! Every check happens before either balance is changed, so a rejected
//! movement leaves both holders exactly as they were.

use chrono::NaiveDate;

use crate::config::OverdraftPolicy;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{names_match, Balance, Money, Transaction, TransactionKind};

/// Amount, date and memo of one movement of money
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movement {
    pub amount: Money,
    pub date: NaiveDate,
    pub memo: String,
}

impl Movement {
    pub fn new(amount: Money, date: NaiveDate) -> Self {
        Self {
            amount,
            date,
            memo: String::new(),
        }
    }

    pub fn with_memo(amount: Money, date: NaiveDate, memo: impl Into<String>) -> Self {
        Self {
            amount,
            date,
            memo: memo.into(),
        }
    }
}

/// Applies deposits, withdrawals and envelope transfers to balance holders
#[derive(Debug, Clone, Copy, Default)]
pub struct TransferEngine {
    policy: OverdraftPolicy,
}

impl TransferEngine {
    pub fn new(policy: OverdraftPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> OverdraftPolicy {
        self.policy
    }

    /// Money enters `account`; the pool grows by the same amount so it stays
    /// fundable.
    pub fn deposit<A, P>(
        &self,
        account: &mut A,
        pool: &mut P,
        movement: Movement,
    ) -> LedgerResult<Transaction>
    where
        A: Balance + ?Sized,
        P: Balance + ?Sized,
    {
        let amount = check_amount(movement.amount)?;
        let account_after = credit(account, amount)?;
        let pool_after = credit(pool, amount)?;

        account.set_balance(account_after);
        pool.set_balance(pool_after);

        let kind = TransactionKind::Deposit {
            from_envelope: pool.name().to_string(),
            to_account: account.name().to_string(),
        };
        Ok(Transaction::new(movement.date, kind, amount, movement.memo))
    }

    /// Money leaves `account`, consuming the allocation in `envelope`.
    pub fn withdraw<A, E>(
        &self,
        account: &mut A,
        envelope: &mut E,
        movement: Movement,
    ) -> LedgerResult<Transaction>
    where
        A: Balance + ?Sized,
        E: Balance + ?Sized,
    {
        let amount = check_amount(movement.amount)?;
        let account_after = self.debit(account, amount)?;
        let envelope_after = self.debit(envelope, amount)?;

        account.set_balance(account_after);
        envelope.set_balance(envelope_after);

        let kind = TransactionKind::Withdrawal {
            from_account: account.name().to_string(),
            from_envelope: envelope.name().to_string(),
        };
        Ok(Transaction::new(movement.date, kind, amount, movement.memo))
    }

    /// Budget moves from one envelope to another. Funding an envelope is a
    /// transfer whose source is the pool.
    pub fn envelope_transfer<F, T>(
        &self,
        from: &mut F,
        to: &mut T,
        movement: Movement,
    ) -> LedgerResult<Transaction>
    where
        F: Balance + ?Sized,
        T: Balance + ?Sized,
    {
        let amount = check_amount(movement.amount)?;

        if names_match(from.name(), to.name()) {
            return Err(LedgerError::Validation(format!(
                "Cannot transfer from envelope '{}' to itself",
                from.name()
            )));
        }

        let from_after = self.debit(from, amount)?;
        let to_after = credit(to, amount)?;

        from.set_balance(from_after);
        to.set_balance(to_after);

        let kind = TransactionKind::Transfer {
            from_envelope: from.name().to_string(),
            to_envelope: to.name().to_string(),
        };
        Ok(Transaction::new(movement.date, kind, amount, movement.memo))
    }

    /// Balance of a source after removing `amount`, subject to the policy
    fn debit<H: Balance + ?Sized>(&self, holder: &H, amount: Money) -> LedgerResult<Money> {
        let after = holder.debited(amount).ok_or_else(|| overflow(holder))?;

        if after.is_negative() && !self.policy.allows_negative() {
            return Err(LedgerError::InsufficientFunds {
                holder: holder.name().to_string(),
                needed: amount,
                available: holder.balance(),
            });
        }

        Ok(after)
    }
}

fn check_amount(amount: Money) -> LedgerResult<Money> {
    if !amount.is_positive() {
        return Err(LedgerError::InvalidAmount(format!(
            "amount must be greater than zero, got {}",
            amount
        )));
    }
    Ok(amount)
}

fn credit<H: Balance + ?Sized>(holder: &H, amount: Money) -> LedgerResult<Money> {
    holder.credited(amount).ok_or_else(|| overflow(holder))
}

fn overflow<H: Balance + ?Sized>(holder: &H) -> LedgerError {
    LedgerError::InvalidAmount(format!(
        "{} '{}' balance would overflow",
        holder.holder_kind(),
        holder.name()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, AccountType, Envelope};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn movement(units: i64) -> Movement {
        Movement::new(Money::from_units(units), date())
    }

    fn checking(units: i64) -> Account {
        Account::new("Checking", AccountType::Checking, Money::from_units(units))
    }

    fn envelope(name: &str, units: i64) -> Envelope {
        let mut env = Envelope::new("Needs", name);
        env.balance = Money::from_units(units);
        env
    }

    #[test]
    fn test_deposit_grows_account_and_pool() {
        let engine = TransferEngine::default();
        let mut account = checking(100);
        let mut pool = envelope("Income Pool", 100);

        let txn = engine.deposit(&mut account, &mut pool, movement(50)).unwrap();

        assert_eq!(account.balance, Money::from_units(150));
        assert_eq!(pool.balance, Money::from_units(150));
        assert_eq!(txn.amount, Money::from_units(50));
        assert_eq!(
            txn.kind,
            TransactionKind::Deposit {
                from_envelope: "Income Pool".into(),
                to_account: "Checking".into(),
            }
        );
    }

    #[test]
    fn test_withdraw_shrinks_account_and_envelope() {
        let engine = TransferEngine::default();
        let mut account = checking(150);
        let mut groceries = envelope("Groceries", 40);

        let txn = engine
            .withdraw(
                &mut account,
                &mut groceries,
                Movement::with_memo(Money::from_units(25), date(), "Market"),
            )
            .unwrap();

        assert_eq!(account.balance, Money::from_units(125));
        assert_eq!(groceries.balance, Money::from_units(15));
        assert_eq!(txn.kind.label(), "withdrawal");
        assert_eq!(txn.memo, "Market");
        assert_eq!(txn.slots().from_account, Some("Checking"));
        assert_eq!(txn.slots().from_envelope, Some("Groceries"));
    }

    #[test]
    fn test_transfer_conserves_total() {
        let engine = TransferEngine::default();
        let mut pool = envelope("Income Pool", 150);
        let mut groceries = envelope("Groceries", 0);
        let total_before = pool.balance + groceries.balance;

        let txn = engine
            .envelope_transfer(&mut pool, &mut groceries, movement(40))
            .unwrap();

        assert_eq!(pool.balance, Money::from_units(110));
        assert_eq!(groceries.balance, Money::from_units(40));
        assert_eq!(pool.balance + groceries.balance, total_before);
        assert_eq!(txn.slots().to_envelope, Some("Groceries"));
    }

    #[test]
    fn test_rejects_non_positive_amounts() {
        let engine = TransferEngine::default();
        let mut account = checking(100);
        let mut pool = envelope("Income Pool", 100);

        for amount in [Money::zero(), Money::from_cents(-1)] {
            let result = engine.deposit(&mut account, &mut pool, Movement::new(amount, date()));
            assert!(matches!(result, Err(LedgerError::InvalidAmount(_))));
        }
        assert_eq!(account.balance, Money::from_units(100));
        assert_eq!(pool.balance, Money::from_units(100));
    }

    #[test]
    fn test_insufficient_envelope_leaves_both_unchanged() {
        let engine = TransferEngine::default();
        let mut account = checking(125);
        let mut groceries = envelope("Groceries", 15);

        let err = engine
            .withdraw(&mut account, &mut groceries, movement(100))
            .unwrap_err();

        match err {
            LedgerError::InsufficientFunds {
                holder,
                needed,
                available,
            } => {
                assert_eq!(holder, "Groceries");
                assert_eq!(needed, Money::from_units(100));
                assert_eq!(available, Money::from_units(15));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(account.balance, Money::from_units(125));
        assert_eq!(groceries.balance, Money::from_units(15));
    }

    #[test]
    fn test_account_checked_before_envelope() {
        let engine = TransferEngine::default();
        let mut account = checking(10);
        let mut groceries = envelope("Groceries", 5);

        let err = engine
            .withdraw(&mut account, &mut groceries, movement(20))
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::InsufficientFunds { ref holder, .. } if holder == "Checking"
        ));
    }

    #[test]
    fn test_allow_policy_permits_overdraft() {
        let engine = TransferEngine::new(OverdraftPolicy::Allow);
        let mut account = checking(10);
        let mut groceries = envelope("Groceries", 5);

        engine
            .withdraw(&mut account, &mut groceries, movement(20))
            .unwrap();

        assert_eq!(account.balance, Money::from_units(-10));
        assert_eq!(groceries.balance, Money::from_units(-15));
    }

    #[test]
    fn test_transfer_to_self_rejected() {
        let engine = TransferEngine::default();
        let mut a = envelope("Rent", 50);
        let mut b = envelope("rent", 50);

        let result = engine.envelope_transfer(&mut a, &mut b, movement(10));
        assert!(matches!(result, Err(LedgerError::Validation(_))));
        assert_eq!(a.balance, Money::from_units(50));
    }

    #[test]
    fn test_transfer_to_self_rejected_for_accented_names() {
        let engine = TransferEngine::default();
        let mut a = envelope("Épargne", 50);
        let mut b = envelope("ÉPARGNE", 50);

        let result = engine.envelope_transfer(&mut a, &mut b, movement(10));
        assert!(matches!(result, Err(LedgerError::Validation(_))));
        assert_eq!(b.balance, Money::from_units(50));
    }

    #[test]
    fn test_overflow_is_invalid_amount() {
        let engine = TransferEngine::default();
        let mut account = Account::new("Big", AccountType::Savings, Money::from_cents(i64::MAX));
        let mut pool = envelope("Income Pool", 0);

        let result = engine.deposit(&mut account, &mut pool, Movement::new(Money::from_cents(1), date()));
        assert!(matches!(result, Err(LedgerError::InvalidAmount(_))));
        assert_eq!(pool.balance, Money::zero());
    }
}
