//! Collaborator sinks: the seams where the UI, audio, and scene frontends
//! attach to the director.
//!
//! The simulation never talks to these directly; the director translates
//! snapshots and events into sink calls. The console implementations make
//! headless runs observable.

use log::info;

use nukefling_core::events::AudioEvent;

/// HUD and completion-screen surface.
pub trait UiSink {
    fn update_shot_count(&mut self, current: u32, max: u32);
    fn update_timer(&mut self, secs: f32);
    fn show_level_complete(&mut self, score: u32);
}

/// Sound surface: effects and music by index.
pub trait AudioSink {
    fn play_sfx(&mut self, index: usize);
    fn play_bgm(&mut self, index: usize);
}

/// Scene loader surface: receives load-by-name requests on transitions.
pub trait SceneSink {
    fn load_scene(&mut self, name: &str);
}

/// Effect index table mapping simulation audio cues to sink indices.
/// Indices are per-project asset slots, configurable like everything else.
#[derive(Debug, Clone, Copy)]
pub struct SfxTable {
    pub tension: usize,
    pub launch: usize,
    pub opponent_death: usize,
    pub block_break: usize,
}

impl Default for SfxTable {
    fn default() -> Self {
        Self {
            tension: 0,
            launch: 1,
            opponent_death: 2,
            block_break: 3,
        }
    }
}

impl SfxTable {
    pub fn index_for(&self, event: &AudioEvent) -> usize {
        match event {
            AudioEvent::SlingTension => self.tension,
            AudioEvent::NukeLaunch => self.launch,
            AudioEvent::OpponentDeath { .. } => self.opponent_death,
            AudioEvent::BlockBreak { .. } => self.block_break,
        }
    }
}

/// Console HUD: logs the shot counter and completion screen, and the timer
/// once per whole second rather than every frame.
pub struct ConsoleUi {
    last_whole_secs: i64,
}

impl ConsoleUi {
    pub fn new() -> Self {
        Self { last_whole_secs: -1 }
    }
}

impl Default for ConsoleUi {
    fn default() -> Self {
        Self::new()
    }
}

impl UiSink for ConsoleUi {
    fn update_shot_count(&mut self, current: u32, max: u32) {
        info!("HUD: shots left {}", max.saturating_sub(current));
    }

    fn update_timer(&mut self, secs: f32) {
        let whole = secs as i64;
        if whole != self.last_whole_secs {
            self.last_whole_secs = whole;
            info!("HUD: time {:02}:{:02}", whole / 60, whole % 60);
        }
    }

    fn show_level_complete(&mut self, score: u32) {
        info!("HUD: level complete, score {score}");
    }
}

pub struct ConsoleAudio;

impl AudioSink for ConsoleAudio {
    fn play_sfx(&mut self, index: usize) {
        info!("AUDIO: sfx #{index}");
    }

    fn play_bgm(&mut self, index: usize) {
        info!("AUDIO: bgm #{index}");
    }
}

pub struct ConsoleScene;

impl SceneSink for ConsoleScene {
    fn load_scene(&mut self, name: &str) {
        info!("SCENE: loading '{name}'");
    }
}
