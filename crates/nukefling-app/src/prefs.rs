//! Persistent key-value preferences.
//!
//! The durable store behind the shot count, the total-score accumulator,
//! and the audio settings. One JSON file, loaded whole at startup and
//! rewritten on save.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

/// Shots already used in the interrupted session, reloaded on restart.
pub const KEY_SHOT_COUNT: &str = "ShotCount";
/// Running total of completed-level scores.
pub const KEY_TOTAL_SCORE: &str = "TotalScore";

const PREFS_FILE: &str = "prefs.json";

#[derive(Debug)]
pub struct PrefStore {
    path: PathBuf,
    values: HashMap<String, Value>,
}

impl PrefStore {
    /// Open the store under `dir`, loading existing values if present.
    /// A missing or unreadable file just means an empty store.
    pub fn open(dir: &Path) -> Self {
        let path = dir.join(PREFS_FILE);
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default();
        Self { path, values }
    }

    /// A store that never touches disk, for tests and throwaway sessions.
    pub fn in_memory() -> Self {
        Self {
            path: PathBuf::new(),
            values: HashMap::new(),
        }
    }

    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.values.get(key).and_then(Value::as_i64).unwrap_or(default)
    }

    pub fn set_int(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), Value::from(value));
    }

    pub fn get_float(&self, key: &str, default: f64) -> f64 {
        self.values.get(key).and_then(Value::as_f64).unwrap_or(default)
    }

    pub fn set_float(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_string(), Value::from(value));
    }

    /// Write the store back to disk. A no-op for in-memory stores.
    pub fn save(&self) -> Result<(), String> {
        if self.path.as_os_str().is_empty() {
            return Ok(());
        }
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create preferences directory: {e}"))?;
        }
        let json = serde_json::to_string_pretty(&self.values)
            .map_err(|e| format!("Failed to serialize preferences: {e}"))?;
        fs::write(&self.path, json).map_err(|e| format!("Failed to write preferences: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let prefs = PrefStore::in_memory();
        assert_eq!(prefs.get_int(KEY_SHOT_COUNT, 0), 0);
        assert_eq!(prefs.get_float("MasterVolume", 1.0), 1.0);
    }

    #[test]
    fn values_roundtrip_through_disk() {
        let dir = std::env::temp_dir().join("nukefling_test_prefs_roundtrip");
        let _ = fs::remove_dir_all(&dir);

        let mut prefs = PrefStore::open(&dir);
        prefs.set_int(KEY_SHOT_COUNT, 2);
        prefs.set_int(KEY_TOTAL_SCORE, 40_000);
        prefs.set_float("SFXVolume", 0.25);
        prefs.save().unwrap();

        let reloaded = PrefStore::open(&dir);
        assert_eq!(reloaded.get_int(KEY_SHOT_COUNT, 0), 2);
        assert_eq!(reloaded.get_int(KEY_TOTAL_SCORE, 0), 40_000);
        assert!((reloaded.get_float("SFXVolume", 1.0) - 0.25).abs() < 1e-9);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn corrupt_file_yields_an_empty_store() {
        let dir = std::env::temp_dir().join("nukefling_test_prefs_corrupt");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(PREFS_FILE), "not json at all").unwrap();

        let prefs = PrefStore::open(&dir);
        assert_eq!(prefs.get_int(KEY_SHOT_COUNT, 0), 0);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn in_memory_save_is_a_noop() {
        let mut prefs = PrefStore::in_memory();
        prefs.set_int(KEY_SHOT_COUNT, 1);
        assert!(prefs.save().is_ok());
    }
}
