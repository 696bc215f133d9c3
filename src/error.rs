//! Error types for catalog loading and snapshot restore.
//!
//! Nothing in the simulation loop itself is fallible: `advance` and `tick`
//! short-circuit degenerate inputs, and a failed purchase is an ordinary
//! [`PurchaseResult`](crate::generator::PurchaseResult), not an error.

use crate::catalog::GeneratorId;

/// A catalog entry that cannot be loaded. The offending entry is excluded;
/// the rest of the catalog still loads.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Price multipliers below 1 would make prices shrink across purchases.
    #[error("generator {id}: price multiplier {multiplier} is below 1")]
    MultiplierBelowOne { id: GeneratorId, multiplier: f64 },

    /// A NaN or infinite numeric field.
    #[error("generator {id}: {field} is not a finite number")]
    NonFiniteField { id: GeneratorId, field: &'static str },

    /// A second entry reusing an id already in the catalog.
    #[error("generator {id}: duplicate id")]
    DuplicateId { id: GeneratorId },
}

/// A persisted snapshot that cannot be restored. Recovery is always the
/// same: discard the snapshot and start from catalog defaults.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The JSON failed to parse, or a numeric field was malformed.
    #[error("snapshot does not parse: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The save predates the oldest format this build can migrate.
    #[error("snapshot version {saved} is older than minimum supported {min}")]
    UnsupportedVersion { saved: u32, min: u32 },
}
