//! The shop: every generator the player can own, keyed by id.
//!
//! The shop is the single owner of generator state. All accrual funnels
//! through [`Shop::tick`], which batches every generator's output into one
//! ledger credit per tick batch.

use std::cell::Cell;
use std::collections::BTreeMap;

use crate::amount::Sprinkles;
use crate::catalog::{Catalog, GeneratorId};
use crate::generator::{Generator, PurchaseResult};
use crate::ledger::Ledger;

#[derive(Clone, Debug)]
pub struct Shop {
    generators: BTreeMap<GeneratorId, Generator>,
    /// Memoized total throughput estimate. Cleared whenever an owned count
    /// changes, so a read after a purchase always sees the new value.
    cached_spm: Cell<Option<f64>>,
}

impl Shop {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let generators = catalog
            .entries()
            .iter()
            .map(|entry| (entry.id, Generator::from_entry(entry)))
            .collect();
        Self {
            generators,
            cached_spm: Cell::new(None),
        }
    }

    /// Generators in ascending id order.
    pub fn generators(&self) -> impl Iterator<Item = &Generator> {
        self.generators.values()
    }

    pub fn get(&self, id: GeneratorId) -> Option<&Generator> {
        self.generators.get(&id)
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Buy one unit of `id` against the ledger.
    pub fn buy(&mut self, id: GeneratorId, ledger: &mut Ledger) -> PurchaseResult {
        let Some(generator) = self.generators.get_mut(&id) else {
            return PurchaseResult::UnknownGenerator;
        };
        let result = generator.purchase(ledger);
        if result.is_bought() {
            self.cached_spm.set(None);
        }
        result
    }

    /// Advance every generator by `elapsed_ticks` and credit the combined
    /// output to the ledger in a single operation. Returns the amount
    /// credited.
    pub fn tick(&mut self, ledger: &mut Ledger, elapsed_ticks: u64) -> Sprinkles {
        if elapsed_ticks == 0 {
            return Sprinkles::zero();
        }
        let mut produced = Sprinkles::zero();
        for generator in self.generators.values_mut() {
            produced += generator.advance(elapsed_ticks);
        }
        if !produced.is_zero() {
            ledger.credit(produced.clone());
        }
        produced
    }

    /// Estimated total sprinkles per minute across all generators. Cached
    /// between ownership changes; display-only, see
    /// [`Generator::spm_estimate`].
    pub fn total_spm(&self, ticks_per_minute: u32) -> f64 {
        if let Some(cached) = self.cached_spm.get() {
            return cached;
        }
        let total = self
            .generators
            .values()
            .map(|g| g.spm_estimate(ticks_per_minute))
            .sum();
        self.cached_spm.set(Some(total));
        total
    }

    /// Overwrite one generator's persisted fields. Unknown ids are ignored
    /// so old saves survive catalog changes.
    pub(crate) fn restore_generator(&mut self, id: GeneratorId, count: u64, price: Sprinkles) {
        if let Some(generator) = self.generators.get_mut(&id) {
            generator.owned_count = count;
            generator.current_price = price;
        }
        self.cached_spm.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use crate::clock::TICKS_PER_MINUTE;

    fn entry(id: u64, price: u64, yield_per_cycle: u64, progress_per_tick: f64) -> CatalogEntry {
        CatalogEntry {
            id: GeneratorId(id),
            name: format!("gen {id}"),
            description: String::new(),
            base_price: Sprinkles::from(price),
            price_multiplier: 1.1,
            yield_per_cycle,
            progress_per_tick,
        }
    }

    fn two_generator_shop() -> Shop {
        let (catalog, errors) =
            Catalog::from_entries(vec![entry(1, 100, 5, 1.0), entry(2, 200, 7, 1.0)]);
        assert!(errors.is_empty());
        Shop::from_catalog(&catalog)
    }

    #[test]
    fn tick_batches_output_into_one_credit() {
        // Both generators complete exactly one cycle per tick: 5 + 7 = 12.
        let mut shop = two_generator_shop();
        let mut ledger = Ledger::new();
        ledger.credit(Sprinkles::from(300));
        assert!(shop.buy(GeneratorId(1), &mut ledger).is_bought());
        assert!(shop.buy(GeneratorId(2), &mut ledger).is_bought());
        let balance_after_buys = ledger.current().clone();

        let produced = shop.tick(&mut ledger, 1);
        assert_eq!(produced, Sprinkles::from(12));
        assert_eq!(ledger.current(), &(balance_after_buys + Sprinkles::from(12)));
    }

    #[test]
    fn tick_zero_ticks_is_a_noop() {
        let mut shop = two_generator_shop();
        let mut ledger = Ledger::new();
        assert!(shop.tick(&mut ledger, 0).is_zero());
        assert!(ledger.total().is_zero());
    }

    #[test]
    fn tick_with_nothing_owned_credits_nothing() {
        let mut shop = two_generator_shop();
        let mut ledger = Ledger::new();
        assert!(shop.tick(&mut ledger, 100).is_zero());
        assert!(ledger.total().is_zero());
    }

    #[test]
    fn buy_unknown_id() {
        let mut shop = two_generator_shop();
        let mut ledger = Ledger::new();
        ledger.credit(Sprinkles::from(1000));
        assert_eq!(
            shop.buy(GeneratorId(99), &mut ledger),
            PurchaseResult::UnknownGenerator
        );
        assert_eq!(ledger.current(), &Sprinkles::from(1000));
    }

    #[test]
    fn buy_insufficient_funds_leaves_shop_untouched() {
        let mut shop = two_generator_shop();
        let mut ledger = Ledger::new();
        ledger.credit(Sprinkles::from(10));
        assert_eq!(
            shop.buy(GeneratorId(1), &mut ledger),
            PurchaseResult::InsufficientFunds
        );
        assert_eq!(shop.get(GeneratorId(1)).unwrap().owned_count, 0);
        assert_eq!(ledger.current(), &Sprinkles::from(10));
    }

    #[test]
    fn total_spm_reflects_purchase_immediately() {
        let mut shop = two_generator_shop();
        let mut ledger = Ledger::new();
        ledger.credit(Sprinkles::from(1000));

        assert_eq!(shop.total_spm(TICKS_PER_MINUTE), 0.0);
        assert!(shop.buy(GeneratorId(1), &mut ledger).is_bought());
        // 5 yield * 1 owned * 600 cycles/min
        assert!((shop.total_spm(TICKS_PER_MINUTE) - 3000.0).abs() < 1e-6);
        assert!(shop.buy(GeneratorId(2), &mut ledger).is_bought());
        assert!((shop.total_spm(TICKS_PER_MINUTE) - 7200.0).abs() < 1e-6);
    }

    #[test]
    fn generators_iterate_in_id_order() {
        let shop = two_generator_shop();
        let ids: Vec<u64> = shop.generators().map(|g| g.id.0).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn restore_overwrites_count_and_price() {
        let mut shop = two_generator_shop();
        shop.restore_generator(GeneratorId(1), 4, Sprinkles::from(146));
        let g = shop.get(GeneratorId(1)).unwrap();
        assert_eq!(g.owned_count, 4);
        assert_eq!(g.current_price, Sprinkles::from(146));
        // unknown id is silently dropped
        shop.restore_generator(GeneratorId(42), 9, Sprinkles::from(1));
        assert!(shop.get(GeneratorId(42)).is_none());
    }
}
