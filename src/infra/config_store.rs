// ============================================================
// Layer 6 — Config File Store
// ============================================================
// Reads a BingoConfig from a JSON file. Keys left out of the
// file keep their default values; unknown keys are an error so
// typos don't silently fall back to defaults.

use std::{fs, path::Path};

use crate::application::config::BingoConfig;
use crate::domain::error::BingoError;

pub struct ConfigStore;

impl ConfigStore {
    pub fn load(path: &Path) -> Result<BingoConfig, BingoError> {
        let json = fs::read_to_string(path).map_err(|source| BingoError::ConfigUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let cfg = serde_json::from_str(&json).map_err(|source| BingoError::ConfigInvalid {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Loaded config from '{}'", path.display());
        Ok(cfg)
    }
}
