//! Save/load for the sprinkle factory.
//!
//! ## Versioning policy
//!
//! - `SAVE_VERSION`: the current save format version. Increment when adding
//!   fields.
//! - `MIN_COMPATIBLE_VERSION`: the oldest version that can still be loaded.
//!   Leave it alone when only adding fields (missing fields fill in with
//!   defaults); bump it only on breaking changes such as removing a field or
//!   changing its meaning.
//!
//! Saves older than `MIN_COMPATIBLE_VERSION` are rejected and the caller
//! falls back to a fresh game. Balances are serialized as decimal strings so
//! they survive any magnitude; see [`Sprinkles`].

use serde::{Deserialize, Serialize};

use crate::amount::Sprinkles;
use crate::catalog::GeneratorId;
use crate::error::SnapshotError;
use crate::game::Game;

/// Save format version. Increment when adding fields.
pub const SAVE_VERSION: u32 = 1;

/// Oldest save version that can still be loaded. Saves at or above this
/// version load with defaults for any missing fields.
pub const MIN_COMPATIBLE_VERSION: u32 = 1;

/// localStorage key.
#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "sprinkle_factory_save";

/// Autosave interval in ticks. 10 ticks/sec x 30 sec = 300 ticks.
pub const AUTOSAVE_INTERVAL: u64 = 300;

/// Serialized save envelope. Transient state (the clock, the throughput
/// cache, progress accumulators) is not persisted; a loaded game resumes
/// with idle generators.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveData {
    pub version: u32,
    pub game: GameSave,
}

#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameSave {
    pub current: Sprinkles,
    pub total: Sprinkles,
    pub total_clicks: u64,
    pub session_ticks: u64,
    /// Per-generator persisted fields, keyed by catalog id.
    pub generators: Vec<GeneratorSave>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeneratorSave {
    pub id: GeneratorId,
    pub count: u64,
    pub price: Sprinkles,
}

/// Extract the persistable fields from a game.
pub fn extract_save(game: &Game) -> SaveData {
    SaveData {
        version: SAVE_VERSION,
        game: GameSave {
            current: game.ledger.current().clone(),
            total: game.ledger.total().clone(),
            total_clicks: game.total_clicks,
            session_ticks: game.session_ticks,
            generators: game
                .shop
                .generators()
                .filter(|g| g.owned_count > 0)
                .map(|g| GeneratorSave {
                    id: g.id,
                    count: g.owned_count,
                    price: g.current_price.clone(),
                })
                .collect(),
        },
    }
}

/// Parse a save envelope from JSON and check its version.
pub fn parse_save(json: &str) -> Result<SaveData, SnapshotError> {
    let save_data: SaveData = serde_json::from_str(json)?;
    if save_data.version < MIN_COMPATIBLE_VERSION {
        return Err(SnapshotError::UnsupportedVersion {
            saved: save_data.version,
            min: MIN_COMPATIBLE_VERSION,
        });
    }
    Ok(save_data)
}

/// Restore a save into a freshly constructed game. Generator ids the current
/// catalog no longer defines are skipped; generators missing from the save
/// keep their catalog defaults.
pub fn apply_save(game: &mut Game, save: &GameSave) {
    game.ledger.restore(save.current.clone(), save.total.clone());
    game.total_clicks = save.total_clicks;
    game.session_ticks = save.session_ticks;
    for g in &save.generators {
        game.shop.restore_generator(g.id, g.count, g.price.clone());
    }
}

/// Accessor for localStorage. WASM only.
#[cfg(target_arch = "wasm32")]
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Persist the game to localStorage. Failures are logged to the console and
/// otherwise ignored.
#[cfg(target_arch = "wasm32")]
pub fn save_game(game: &Game) {
    let save_data = extract_save(game);
    let json = match serde_json::to_string(&save_data) {
        Ok(j) => j,
        Err(e) => {
            web_sys::console::warn_1(
                &format!("sprinkle-factory: failed to serialize save: {e}").into(),
            );
            return;
        }
    };

    if let Some(storage) = get_storage() {
        if let Err(e) = storage.set_item(STORAGE_KEY, &json) {
            web_sys::console::warn_1(
                &format!("sprinkle-factory: failed to write localStorage: {e:?}").into(),
            );
        }
    }
}

/// Restore the game from localStorage. Returns false when there is no save,
/// or the stored data is corrupt or too old; corrupt data is removed so the
/// next session starts clean.
#[cfg(target_arch = "wasm32")]
pub fn load_game(game: &mut Game) -> bool {
    let storage = match get_storage() {
        Some(s) => s,
        None => return false,
    };

    let json = match storage.get_item(STORAGE_KEY) {
        Ok(Some(j)) => j,
        _ => return false,
    };

    let save_data = match parse_save(&json) {
        Ok(d) => d,
        Err(e) => {
            web_sys::console::warn_1(
                &format!("sprinkle-factory: discarding unreadable save: {e}").into(),
            );
            let _ = storage.remove_item(STORAGE_KEY);
            return false;
        }
    };

    apply_save(game, &save_data.game);
    true
}

/// Delete the stored save.
#[cfg(target_arch = "wasm32")]
#[allow(dead_code)]
pub fn delete_save() {
    if let Some(storage) = get_storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}
