//! Audio settings: volume sliders and the mute toggle, persisted in the
//! preference store and exposed as mixer decibel levels.

use crate::prefs::PrefStore;

pub const KEY_MASTER_VOLUME: &str = "MasterVolume";
pub const KEY_MUSIC_VOLUME: &str = "MusicVolume";
pub const KEY_SFX_VOLUME: &str = "SFXVolume";
pub const KEY_IS_MUTED: &str = "IsMuted";

/// Mixer floor, used for mute and for zero slider positions.
const MUTED_DB: f32 = -80.0;

/// Convert a linear slider value (0..1) to mixer decibels. Zero and
/// near-zero values clamp to the floor instead of taking log10(0).
pub fn linear_to_db(volume: f32) -> f32 {
    if volume > 1e-4 {
        volume.log10() * 20.0
    } else {
        MUTED_DB
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioSettings {
    pub master: f32,
    pub music: f32,
    pub sfx: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master: 1.0,
            music: 1.0,
            sfx: 1.0,
            muted: false,
        }
    }
}

impl AudioSettings {
    pub fn load(prefs: &PrefStore) -> Self {
        Self {
            master: prefs.get_float(KEY_MASTER_VOLUME, 1.0) as f32,
            music: prefs.get_float(KEY_MUSIC_VOLUME, 1.0) as f32,
            sfx: prefs.get_float(KEY_SFX_VOLUME, 1.0) as f32,
            muted: prefs.get_int(KEY_IS_MUTED, 0) == 1,
        }
    }

    pub fn store(&self, prefs: &mut PrefStore) {
        prefs.set_float(KEY_MASTER_VOLUME, self.master as f64);
        prefs.set_float(KEY_MUSIC_VOLUME, self.music as f64);
        prefs.set_float(KEY_SFX_VOLUME, self.sfx as f64);
        prefs.set_int(KEY_IS_MUTED, if self.muted { 1 } else { 0 });
    }

    /// Master channel level; mute overrides the slider.
    pub fn master_db(&self) -> f32 {
        if self.muted {
            MUTED_DB
        } else {
            linear_to_db(self.master)
        }
    }

    pub fn music_db(&self) -> f32 {
        linear_to_db(self.music)
    }

    pub fn sfx_db(&self) -> f32 {
        linear_to_db(self.sfx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unity_volume_is_zero_db() {
        assert!(linear_to_db(1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_volume_clamps_to_floor_instead_of_log_of_zero() {
        assert_eq!(linear_to_db(0.0), MUTED_DB);
        assert_eq!(linear_to_db(1e-6), MUTED_DB);
    }

    #[test]
    fn half_volume_is_about_minus_six_db() {
        let db = linear_to_db(0.5);
        assert!((db + 6.02).abs() < 0.05, "got {db}");
    }

    #[test]
    fn mute_overrides_master_slider() {
        let settings = AudioSettings {
            muted: true,
            ..Default::default()
        };
        assert_eq!(settings.master_db(), MUTED_DB);
        // Mute leaves the other channels at their slider levels.
        assert!(settings.music_db().abs() < 1e-6);
    }

    #[test]
    fn settings_roundtrip_through_prefs() {
        let mut prefs = PrefStore::in_memory();
        let settings = AudioSettings {
            master: 0.8,
            music: 0.3,
            sfx: 0.5,
            muted: true,
        };
        settings.store(&mut prefs);
        let loaded = AudioSettings::load(&prefs);
        assert!((loaded.master - 0.8).abs() < 1e-6);
        assert!((loaded.music - 0.3).abs() < 1e-6);
        assert!((loaded.sfx - 0.5).abs() < 1e-6);
        assert!(loaded.muted);
    }
}
