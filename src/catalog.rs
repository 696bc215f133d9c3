//! Static generator definitions.
//!
//! The catalog is external input: a list of entries loaded once at startup,
//! either from JSON or from the built-in default set. The simulation never
//! mutates catalog identity fields; entries that fail validation are
//! excluded individually without failing the rest of the load.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::amount::Sprinkles;
use crate::clock::TICKS_PER_MINUTE;
use crate::error::CatalogError;

/// Stable unique identifier for a generator.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GeneratorId(pub u64);

impl fmt::Display for GeneratorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One static generator definition.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: GeneratorId,
    pub name: String,
    pub description: String,
    /// Cost of the first unit, in integer currency units.
    pub base_price: Sprinkles,
    /// Applied multiplicatively to the price after each purchase. Must be >= 1.
    pub price_multiplier: f64,
    /// Sprinkles produced per completed cycle, per owned unit.
    pub yield_per_cycle: u64,
    /// Fractional cycle progress added per elapsed tick. Values <= 0 are
    /// permitted but leave the generator permanently idle.
    pub progress_per_tick: f64,
}

impl CatalogEntry {
    fn validate(&self) -> Result<(), CatalogError> {
        if !self.price_multiplier.is_finite() {
            return Err(CatalogError::NonFiniteField {
                id: self.id,
                field: "price_multiplier",
            });
        }
        if self.price_multiplier < 1.0 {
            return Err(CatalogError::MultiplierBelowOne {
                id: self.id,
                multiplier: self.price_multiplier,
            });
        }
        if !self.progress_per_tick.is_finite() {
            return Err(CatalogError::NonFiniteField {
                id: self.id,
                field: "progress_per_tick",
            });
        }
        Ok(())
    }
}

/// An ordered, validated set of generator definitions.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from raw entries. Invalid or duplicate entries are
    /// excluded and reported; everything else loads.
    pub fn from_entries<I>(entries: I) -> (Self, Vec<CatalogError>)
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let mut catalog = Catalog::default();
        let mut rejected = Vec::new();
        for entry in entries {
            if catalog.entries.iter().any(|e| e.id == entry.id) {
                rejected.push(CatalogError::DuplicateId { id: entry.id });
                continue;
            }
            match entry.validate() {
                Ok(()) => catalog.entries.push(entry),
                Err(e) => rejected.push(e),
            }
        }
        catalog.entries.sort_by_key(|e| e.id);
        (catalog, rejected)
    }

    /// Parse a JSON array of entries, then validate as in `from_entries`.
    pub fn from_json(json: &str) -> Result<(Self, Vec<CatalogError>), serde_json::Error> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, id: GeneratorId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The built-in pastry catalog: 26 tiers from a rolling pin to godhood.
/// Prices are in cents; per-minute cycle rates are converted to per-tick
/// progress at the fixed tick rate.
pub fn default_catalog() -> Catalog {
    fn entry(
        id: u64,
        name: &str,
        description: &str,
        price_cents: u64,
        yield_per_cycle: u64,
        cycles_per_minute: f64,
    ) -> CatalogEntry {
        CatalogEntry {
            id: GeneratorId(id),
            name: name.into(),
            description: description.into(),
            base_price: Sprinkles::from(price_cents),
            price_multiplier: 1.1,
            yield_per_cycle,
            progress_per_tick: cycles_per_minute / f64::from(TICKS_PER_MINUTE),
        }
    }

    let entries = vec![
        entry(
            0,
            "Rolling Pin",
            "Start with basic dough rolling for simple pastries",
            2_499,
            1,
            1.0,
        ),
        entry(
            1,
            "Pastry Cutter Set",
            "Precise shapes for different pastries",
            3_250,
            1,
            0.75,
        ),
        entry(
            2,
            "Proofing Cabinet",
            "Better rise for breads and pastries",
            14_999,
            2,
            0.5,
        ),
        entry(
            3,
            "Pastry Laminator",
            "Perfect for croissants and other layered pastries",
            29_995,
            2,
            0.25,
        ),
        entry(
            4,
            "Steam Injection Oven",
            "Professional-quality crusts and textures",
            75_000,
            3,
            0.1,
        ),
        entry(
            5,
            "Decorating Station",
            "Fancy finishes and glazes",
            12_499,
            3,
            0.05,
        ),
        entry(
            6,
            "Artisanal Kitchen",
            "Small-batch specialty shop",
            129_900,
            4,
            0.01,
        ),
        entry(
            7,
            "Patisserie",
            "Hire expert pastry chefs for multiple production lines",
            450_000,
            5,
            0.005,
        ),
        entry(
            8,
            "Boulangerie Chain",
            "Open specialty shops across the city",
            1_200_000,
            6,
            0.002,
        ),
        entry(
            9,
            "Pastry Academy",
            "Train master bakers to improve quality and speed",
            2_500_000,
            7,
            0.001,
        ),
        entry(
            10,
            "Flash-Freezing Technology",
            "Preserve freshness for global shipping",
            3_850_000,
            8,
            0.0005,
        ),
        entry(
            11,
            "Mega Bakery Complex",
            "Industrial-scale production of all varieties",
            12_000_000,
            9,
            0.0001,
        ),
        entry(
            12,
            "Regional Distribution Centers",
            "Fresh baked goods delivered everywhere",
            25_000_000,
            10,
            0.00005,
        ),
        entry(
            13,
            "Pastry Skyscraper",
            "Vertical integration from grain silos to packaging",
            120_000_000,
            11,
            0.00001,
        ),
        entry(
            14,
            "Floating Bakery Islands",
            "Oceanic pastry production complexes",
            450_000_000,
            12,
            0.000_005,
        ),
        entry(
            15,
            "Stratospheric Ovens",
            "Harness the sun's direct heat for perfect baking",
            1_200_000_000,
            13,
            0.000_001,
        ),
        entry(
            16,
            "Molecular Pastry Assemblers",
            "Build pastries atom by atom",
            5_000_000_000,
            14,
            0.000_000_5,
        ),
        entry(
            17,
            "Flavor Dimension Gateway",
            "Import exotic tastes from alternate realities",
            25_000_000_000,
            15,
            0.000_000_1,
        ),
        entry(
            18,
            "Temporal Proofing Chambers",
            "Dough rises for centuries in minutes",
            100_000_000_000,
            16,
            0.000_000_05,
        ),
        entry(
            19,
            "Dough Terraforming",
            "Convert entire planets into giant pastry environments",
            1_000_000_000_000,
            17,
            0.000_000_01,
        ),
        entry(
            20,
            "Quantum Croissant Entanglement",
            "One bite affects all identical pastries across the multiverse",
            10_000_000_000_000,
            18,
            0.000_000_005,
        ),
        entry(
            21,
            "Yeast Sentience",
            "Self-evolving bread organisms that bake themselves",
            100_000_000_000_000,
            19,
            0.000_000_001,
        ),
        entry(
            22,
            "The Great British Bake Off Singularity",
            "Reality show contestants from across time compete to increase your production",
            1_000_000_000_000_000,
            20,
            0.000_000_000_5,
        ),
        entry(
            23,
            "Pastry Transcendence",
            "Elevate baked goods to a higher plane of existence",
            10_000_000_000_000_000,
            21,
            0.000_000_000_1,
        ),
        entry(
            24,
            "Universal Proving",
            "The expansion of the universe is actually just your dough rising",
            100_000_000_000_000_000,
            22,
            0.000_000_000_05,
        ),
        entry(
            25,
            "Baker's Godhood",
            "Reshape reality where physics follows the laws of patisserie instead",
            1_000_000_000_000_000_000,
            23,
            0.000_000_000_01,
        ),
    ];

    let (catalog, rejected) = Catalog::from_entries(entries);
    debug_assert!(rejected.is_empty());
    catalog
}
