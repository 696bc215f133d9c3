//! Generator production and pricing.
//!
//! A generator owns a single progress accumulator shared by all its units:
//! each elapsed tick adds `progress_per_tick`, and every time the total
//! crosses an integer boundary a cycle completes. Production is
//! `yield_per_cycle * owned_count` per completed cycle; the fractional
//! remainder stays in the accumulator, so accrual is exact over any tick
//! partitioning.

use crate::amount::Sprinkles;
use crate::catalog::{CatalogEntry, GeneratorId};
use crate::ledger::Ledger;

/// Outcome of a purchase attempt. A shortfall is normal control flow for a
/// clicker, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PurchaseResult {
    /// The purchase went through at the quoted price.
    Bought { paid: Sprinkles },
    /// The ledger balance did not cover the current price. No state changed.
    InsufficientFunds,
    /// No generator with the requested id exists.
    UnknownGenerator,
}

impl PurchaseResult {
    pub fn is_bought(&self) -> bool {
        matches!(self, PurchaseResult::Bought { .. })
    }
}

/// Runtime state of one purchasable generator.
#[derive(Clone, Debug)]
pub struct Generator {
    pub id: GeneratorId,
    pub name: String,
    pub description: String,
    /// Applied to the price after each purchase; >= 1 by catalog validation.
    pub price_multiplier: f64,
    /// Sprinkles per completed cycle, per owned unit.
    pub yield_per_cycle: u64,
    /// Fractional cycle progress per elapsed tick.
    pub progress_per_tick: f64,
    /// Units owned.
    pub owned_count: u64,
    /// Fractional cycle carry-over, in [0, 1).
    pub progress: f64,
    /// Cost of the next unit. Non-decreasing across purchases.
    pub current_price: Sprinkles,
    /// All-time production for display. Never decreases.
    pub lifetime_produced: Sprinkles,
}

impl Generator {
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            description: entry.description.clone(),
            price_multiplier: entry.price_multiplier,
            yield_per_cycle: entry.yield_per_cycle,
            progress_per_tick: entry.progress_per_tick,
            owned_count: 0,
            progress: 0.0,
            current_price: entry.base_price.clone(),
            lifetime_produced: Sprinkles::zero(),
        }
    }

    /// Advance this generator by `elapsed_ticks` and return the sprinkles
    /// produced. Unowned or permanently idle generators (zero yield, zero or
    /// negative progress rate) return zero without touching any state, as
    /// does `elapsed_ticks == 0`.
    pub fn advance(&mut self, elapsed_ticks: u64) -> Sprinkles {
        if elapsed_ticks == 0 || self.owned_count == 0 {
            return Sprinkles::zero();
        }
        if self.progress_per_tick <= 0.0 || self.yield_per_cycle == 0 {
            return Sprinkles::zero();
        }

        let total = self.progress + self.progress_per_tick * elapsed_ticks as f64;
        let completed = total.floor();
        self.progress = total - completed;
        if completed <= 0.0 {
            return Sprinkles::zero();
        }

        let produced = Sprinkles::from(self.yield_per_cycle)
            .times(self.owned_count)
            .times(completed as u64);
        self.lifetime_produced += &produced;
        produced
    }

    /// Buy one unit against the ledger. On success the owned count goes up
    /// and the price is re-derived by integer rounding — the price is never
    /// carried as a running float, so repeated purchases accumulate no drift.
    pub fn purchase(&mut self, ledger: &mut Ledger) -> PurchaseResult {
        if !ledger.debit(&self.current_price) {
            return PurchaseResult::InsufficientFunds;
        }
        let paid = self.current_price.clone();
        self.owned_count += 1;
        self.current_price = self.current_price.mul_decimal(self.price_multiplier);
        PurchaseResult::Bought { paid }
    }

    /// Cycles per minute, derived from the progress rate. This is the
    /// authoritative definition; nothing stores an independent copy.
    pub fn cycles_per_minute(&self, ticks_per_minute: u32) -> f64 {
        if self.progress_per_tick <= 0.0 {
            return 0.0;
        }
        f64::from(ticks_per_minute) * self.progress_per_tick
    }

    /// Estimated steady-state sprinkles per minute from this generator.
    ///
    /// An approximation for display only: it ignores the fractional carry in
    /// the accumulator, so it will not match `advance` tick-for-tick. Actual
    /// accrual always goes through `advance`.
    pub fn spm_estimate(&self, ticks_per_minute: u32) -> f64 {
        if self.yield_per_cycle == 0 || self.owned_count == 0 {
            return 0.0;
        }
        self.yield_per_cycle as f64
            * self.owned_count as f64
            * self.cycles_per_minute(ticks_per_minute)
    }

    /// This generator's share of a total throughput estimate, in [0, 100].
    pub fn percent_of_spm(&self, total_spm: f64, ticks_per_minute: u32) -> f64 {
        if total_spm <= 0.0 {
            return 0.0;
        }
        self.spm_estimate(ticks_per_minute) / total_spm * 100.0
    }
}
