//! Currency ledger: current balance plus all-time earnings.
//!
//! `debit` is the sole spending gate in the crate; every purchase goes
//! through it, so the current balance can never go negative.

use crate::amount::Sprinkles;

#[derive(Clone, Debug, Default)]
pub struct Ledger {
    current: Sprinkles,
    total: Sprinkles,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sprinkles available to spend.
    pub fn current(&self) -> &Sprinkles {
        &self.current
    }

    /// Sprinkles earned all-time. Never decreases.
    pub fn total(&self) -> &Sprinkles {
        &self.total
    }

    /// Add `amount` to both the current balance and the all-time total.
    pub fn credit(&mut self, amount: Sprinkles) {
        self.current += &amount;
        self.total += amount;
    }

    /// Spend `amount` if the current balance covers it. Returns whether the
    /// debit happened; on failure the ledger is unchanged.
    pub fn debit(&mut self, amount: &Sprinkles) -> bool {
        match self.current.checked_sub(amount) {
            Some(rest) => {
                self.current = rest;
                true
            }
            None => false,
        }
    }

    /// Overwrite both balances from a loaded snapshot.
    pub(crate) fn restore(&mut self, current: Sprinkles, total: Sprinkles) {
        self.current = current;
        self.total = total;
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// For any interleaving of credits and debits, the current balance
        /// stays non-negative and never exceeds the all-time total.
        #[test]
        fn prop_balance_invariants(ops in proptest::collection::vec((any::<bool>(), 0u64..10_000), 0..64)) {
            let mut ledger = Ledger::new();
            for (is_credit, amount) in ops {
                let amount = Sprinkles::from(amount);
                if is_credit {
                    ledger.credit(amount);
                } else {
                    let before = ledger.current().clone();
                    let ok = ledger.debit(&amount);
                    if !ok {
                        prop_assert_eq!(ledger.current(), &before);
                    }
                }
                prop_assert!(ledger.current() <= ledger.total());
            }
        }
    }
}
