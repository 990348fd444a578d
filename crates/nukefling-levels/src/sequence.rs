//! The level sequence: which scene follows which, and what music it plays.
//!
//! Scene names are matched forgivingly (exact, or either side carrying a
//! path prefix like `_Scenes/Level1`) so layout files and host scene tables
//! can disagree about prefixes without breaking progression.

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

/// One gameplay level in the sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelData {
    pub name: String,
    /// Scene loaded after completion. Empty means the sequence ends here.
    pub next_level: String,
    /// Music track index for this level.
    pub bgm_index: usize,
}

/// Ordered set of gameplay levels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LevelSequence {
    pub levels: Vec<LevelData>,
}

fn names_match(entry: &str, scene: &str) -> bool {
    entry == scene
        || entry.ends_with(&format!("/{scene}"))
        || scene.ends_with(&format!("/{entry}"))
}

impl LevelSequence {
    pub fn new(levels: Vec<LevelData>) -> Self {
        Self { levels }
    }

    pub fn find(&self, scene: &str) -> Option<&LevelData> {
        self.levels.iter().find(|l| names_match(&l.name, scene))
    }

    /// Whether the scene is a gameplay level (vs. menu/game-over scenes).
    pub fn is_gameplay_level(&self, scene: &str) -> bool {
        self.find(scene).is_some()
    }

    /// The scene to load after completing `scene`. `None` means the mapping
    /// is missing or empty, a configuration problem the caller should
    /// treat as "log and stay put" rather than a crash.
    pub fn next_after(&self, scene: &str) -> Option<&str> {
        match self.find(scene) {
            Some(level) if !level.next_level.is_empty() => Some(&level.next_level),
            Some(_) => {
                warn!("level '{scene}' has an empty next-level mapping");
                None
            }
            None => {
                warn!("no level sequence entry matches '{scene}'");
                None
            }
        }
    }

    pub fn bgm_for(&self, scene: &str) -> Option<usize> {
        self.find(scene).map(|l| l.bgm_index)
    }

    pub fn first(&self) -> Option<&LevelData> {
        self.levels.first()
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse level sequence: {e}"))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, String> {
        let json = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read level sequence file: {e}"))?;
        Self::from_json(&json)
    }
}

/// The shipped three-level campaign. The last level returns to the menu.
pub fn default_sequence() -> LevelSequence {
    LevelSequence::new(vec![
        LevelData {
            name: "Level1".to_string(),
            next_level: "Level2".to_string(),
            bgm_index: 1,
        },
        LevelData {
            name: "Level2".to_string(),
            next_level: "Level3".to_string(),
            bgm_index: 1,
        },
        LevelData {
            name: "Level3".to_string(),
            next_level: "MainMenu".to_string(),
            bgm_index: 2,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_forgiving_about_path_prefixes() {
        let seq = LevelSequence::new(vec![LevelData {
            name: "_Scenes/Level1".to_string(),
            next_level: "_Scenes/Level2".to_string(),
            bgm_index: 0,
        }]);
        assert!(seq.is_gameplay_level("Level1"));
        assert!(seq.is_gameplay_level("_Scenes/Level1"));
        assert!(!seq.is_gameplay_level("Level2"));
        assert_eq!(seq.next_after("Level1"), Some("_Scenes/Level2"));
    }

    #[test]
    fn missing_or_empty_mapping_yields_none() {
        let seq = LevelSequence::new(vec![LevelData {
            name: "Level9".to_string(),
            next_level: String::new(),
            bgm_index: 0,
        }]);
        assert_eq!(seq.next_after("Level9"), None);
        assert_eq!(seq.next_after("Nowhere"), None);
    }

    #[test]
    fn default_sequence_chains_back_to_menu() {
        let seq = default_sequence();
        assert_eq!(seq.first().unwrap().name, "Level1");
        assert_eq!(seq.next_after("Level2"), Some("Level3"));
        assert_eq!(seq.next_after("Level3"), Some("MainMenu"));
        assert!(!seq.is_gameplay_level("MainMenu"));
        assert!(!seq.is_gameplay_level("GameOver"));
    }

    #[test]
    fn sequence_roundtrips_through_json() {
        let seq = default_sequence();
        let json = serde_json::to_string(&seq).unwrap();
        let back = LevelSequence::from_json(&json).unwrap();
        assert_eq!(back.levels.len(), 3);
        assert_eq!(back.bgm_for("Level3"), Some(2));
    }
}
