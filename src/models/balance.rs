//! The balance-holder capability shared by accounts and envelopes

use super::money::Money;

/// Something with a name and a balance that money can move in and out of
///
/// The transfer engine only talks to this trait, so it never needs to know
/// whether it is debiting an account or an envelope.
pub trait Balance {
    /// Unique name of the holder within its table
    fn name(&self) -> &str;

    fn balance(&self) -> Money;

    fn set_balance(&mut self, balance: Money);

    /// Label used in messages ("Account", "Envelope")
    fn holder_kind(&self) -> &'static str;

    /// Balance after adding `amount`, or `None` on overflow
    fn credited(&self, amount: Money) -> Option<Money> {
        self.balance().checked_add(amount)
    }

    /// Balance after removing `amount`, or `None` on overflow
    fn debited(&self, amount: Money) -> Option<Money> {
        self.balance().checked_sub(amount)
    }
}
