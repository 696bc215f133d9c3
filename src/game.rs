//! Top-level game facade: one value owning the ledger, the shop, and the
//! clock, driven from the outside by animation frames and user actions.

use crate::amount::Sprinkles;
use crate::catalog::{Catalog, GeneratorId};
use crate::clock::{GameClock, TICKS_PER_MINUTE, TICKS_PER_SECOND};
use crate::generator::PurchaseResult;
use crate::ledger::Ledger;
use crate::shop::Shop;

/// Read-only snapshot of display figures, assembled on demand.
#[derive(Clone, Debug)]
pub struct StatsView {
    pub current: Sprinkles,
    pub total: Sprinkles,
    pub total_clicks: u64,
    pub session_ticks: u64,
    /// Wall-clock time since the session started, milliseconds.
    pub elapsed_ms: f64,
    /// Estimated sprinkles per minute. Display-only approximation.
    pub sprinkles_per_minute: f64,
}

pub struct Game {
    pub(crate) ledger: Ledger,
    pub(crate) shop: Shop,
    clock: GameClock,
    started_at_ms: Option<f64>,
    pub(crate) session_ticks: u64,
    pub(crate) total_clicks: u64,
    /// Sprinkles earned per manual click.
    pub sprinkles_per_click: u64,
}

impl Game {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            ledger: Ledger::new(),
            shop: Shop::from_catalog(catalog),
            clock: GameClock::new(TICKS_PER_SECOND),
            started_at_ms: None,
            session_ticks: 0,
            total_clicks: 0,
            sprinkles_per_click: 1,
        }
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Start the simulation. Accrual begins at `now_ms`; calling on a
    /// running game does nothing.
    pub fn start(&mut self, now_ms: f64) {
        if self.started_at_ms.is_none() {
            self.started_at_ms = Some(now_ms);
        }
        self.clock.start(now_ms);
    }

    /// Stop the clock. Time spent suspended is discarded, not accrued.
    pub fn suspend(&mut self) {
        self.clock.stop();
    }

    /// Resume after [`suspend`](Self::suspend). Accrual restarts from
    /// `now_ms`, so the suspended interval produces nothing.
    pub fn resume(&mut self, now_ms: f64) {
        self.clock.start(now_ms);
    }

    /// Drive the simulation from an animation frame. Converts wall-clock
    /// time into whole ticks and runs production for each of them in one
    /// batch. Returns the number of ticks processed.
    pub fn on_frame(&mut self, now_ms: f64) -> u64 {
        let ticks = self.clock.on_frame(now_ms);
        if ticks > 0 {
            self.session_ticks += ticks;
            self.shop.tick(&mut self.ledger, ticks);
        }
        ticks
    }

    /// Register a manual click and credit its yield.
    pub fn click(&mut self) {
        self.total_clicks += 1;
        self.ledger.credit(Sprinkles::from(self.sprinkles_per_click));
    }

    /// Credit sprinkles from outside the generator loop, e.g. a bonus.
    pub fn credit_manual(&mut self, amount: Sprinkles) {
        self.ledger.credit(amount);
    }

    pub fn buy(&mut self, id: GeneratorId) -> PurchaseResult {
        self.shop.buy(id, &mut self.ledger)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    pub fn stats(&self, now_ms: f64) -> StatsView {
        let elapsed_ms = match self.started_at_ms {
            Some(started) if now_ms > started => now_ms - started,
            _ => 0.0,
        };
        StatsView {
            current: self.ledger.current().clone(),
            total: self.ledger.total().clone(),
            total_clicks: self.total_clicks,
            session_ticks: self.session_ticks,
            elapsed_ms,
            sprinkles_per_minute: self.shop.total_spm(TICKS_PER_MINUTE),
        }
    }
}
