//! Sprinkle Factory — the simulation core of an incremental bakery game.
//!
//! The player banks sprinkles in a [`Ledger`], spends them on generators
//! from a [`Catalog`]-driven [`Shop`], and a fixed-timestep [`GameClock`]
//! turns wall-clock time into production ticks. [`Game`] ties the pieces
//! together into one value the UI drives with animation frames and clicks.
//!
//! Balances use arbitrary precision ([`Sprinkles`]), so late-game numbers
//! never saturate or lose cents. On wasm targets the [`save`] module
//! persists sessions to localStorage.

pub mod amount;
pub mod catalog;
pub mod clock;
pub mod error;
pub mod format;
pub mod game;
pub mod generator;
pub mod ledger;
pub mod save;
pub mod shop;

pub use amount::Sprinkles;
pub use catalog::{default_catalog, Catalog, CatalogEntry, GeneratorId};
pub use clock::{GameClock, TICKS_PER_MINUTE, TICKS_PER_SECOND};
pub use error::{CatalogError, SnapshotError};
pub use game::{Game, StatsView};
pub use generator::{Generator, PurchaseResult};
pub use ledger::Ledger;
pub use shop::Shop;
