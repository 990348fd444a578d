//! The director: top-level game flow.
//!
//! Owns the simulation engine, the level sequence, the preference store,
//! and the collaborator sinks, and is itself owned by the frame loop.
//! Scene transitions, persistence, and sink dispatch all happen here;
//! nothing in this module is reachable as a global.

use log::{debug, error, info, warn};

use nukefling_core::commands::PlayerCommand;
use nukefling_core::constants::{
    DEFAULT_BASE_SCORE, DEFAULT_BGM_INDEX, DEFAULT_MAX_SHOTS, DT, GAME_OVER_INPUT_DELAY_SECS,
};
use nukefling_core::enums::{GamePhase, LevelState};
use nukefling_core::events::{GameEvent, ProgressEvent};
use nukefling_core::state::GameStateSnapshot;
use nukefling_levels::layout::{self, LevelLayout};
use nukefling_levels::sequence::{self, LevelSequence};
use nukefling_sim::{SimConfig, SimulationEngine};

use crate::prefs::{PrefStore, KEY_SHOT_COUNT, KEY_TOTAL_SCORE};
use crate::sinks::{AudioSink, SceneSink, SfxTable, UiSink};

pub const MAIN_MENU_SCENE: &str = "MainMenu";
pub const GAME_OVER_SCENE: &str = "GameOver";

/// Everything the host can ask of the director. `Player` commands pass
/// through to the engine; the rest drive scene flow.
#[derive(Debug, Clone)]
pub enum HostCommand {
    Player(PlayerCommand),
    StartGame,
    /// The continue button on the level-complete screen.
    Continue,
    /// Any key press on the game-over screen.
    AnyKey,
    ReturnToMenu,
    /// Handled by the frame loop, not the director.
    Quit,
}

pub struct DirectorConfig {
    pub max_shots: u32,
    pub base_score: u32,
    pub sequence: LevelSequence,
    pub layouts: Vec<LevelLayout>,
    pub sfx: SfxTable,
    pub default_bgm: usize,
}

impl Default for DirectorConfig {
    fn default() -> Self {
        Self {
            max_shots: DEFAULT_MAX_SHOTS,
            base_score: DEFAULT_BASE_SCORE,
            sequence: sequence::default_sequence(),
            layouts: layout::builtin_layouts(),
            sfx: SfxTable::default(),
            default_bgm: DEFAULT_BGM_INDEX,
        }
    }
}

pub struct Director {
    config: DirectorConfig,
    prefs: PrefStore,
    phase: GamePhase,
    current_scene: String,
    engine: Option<SimulationEngine>,
    ui: Option<Box<dyn UiSink + Send>>,
    audio: Option<Box<dyn AudioSink + Send>>,
    scene: Option<Box<dyn SceneSink + Send>>,
    game_over_secs: f32,
    can_restart: bool,
    last_snapshot: Option<GameStateSnapshot>,
}

impl Director {
    pub fn new(config: DirectorConfig, prefs: PrefStore) -> Self {
        Self {
            config,
            prefs,
            phase: GamePhase::MainMenu,
            current_scene: String::new(),
            engine: None,
            ui: None,
            audio: None,
            scene: None,
            game_over_secs: 0.0,
            can_restart: false,
            last_snapshot: None,
        }
    }

    /// Load the initial scene. Called once by the frame loop, after the
    /// sinks are attached.
    pub fn boot(&mut self) {
        self.load_scene(MAIN_MENU_SCENE);
    }

    pub fn set_ui_sink(&mut self, sink: Box<dyn UiSink + Send>) {
        self.ui = Some(sink);
    }

    pub fn set_audio_sink(&mut self, sink: Box<dyn AudioSink + Send>) {
        self.audio = Some(sink);
    }

    pub fn set_scene_sink(&mut self, sink: Box<dyn SceneSink + Send>) {
        self.scene = Some(sink);
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn current_scene(&self) -> &str {
        &self.current_scene
    }

    pub fn level_state(&self) -> Option<LevelState> {
        self.engine.as_ref().map(|e| e.level_state())
    }

    pub fn last_snapshot(&self) -> Option<&GameStateSnapshot> {
        self.last_snapshot.as_ref()
    }

    pub fn can_restart(&self) -> bool {
        self.can_restart
    }

    pub fn prefs(&self) -> &PrefStore {
        &self.prefs
    }

    pub fn engine(&self) -> Option<&SimulationEngine> {
        self.engine.as_ref()
    }

    pub fn handle_command(&mut self, command: HostCommand) {
        match command {
            HostCommand::Player(cmd) => {
                if let Some(engine) = &mut self.engine {
                    engine.queue_command(cmd);
                }
            }
            HostCommand::StartGame => {
                if self.phase != GamePhase::MainMenu {
                    return;
                }
                match self.config.sequence.first().map(|l| l.name.clone()) {
                    Some(first) => self.load_scene(&first),
                    None => warn!("level sequence is empty; cannot start a game"),
                }
            }
            HostCommand::Continue => {
                if self.level_state() == Some(LevelState::AwaitingCompletion) {
                    if let Some(engine) = &mut self.engine {
                        engine.confirm_advance();
                    }
                    self.proceed_to_next_level();
                }
            }
            HostCommand::AnyKey => {
                if self.phase != GamePhase::GameOver {
                    return;
                }
                if self.can_restart {
                    self.can_restart = false;
                    self.load_scene(MAIN_MENU_SCENE);
                } else {
                    debug!("input ignored during the game-over delay");
                }
            }
            HostCommand::ReturnToMenu => self.load_scene(MAIN_MENU_SCENE),
            HostCommand::Quit => {}
        }
    }

    /// Scene-loaded semantics: entering a different gameplay level resets
    /// the timer, reloading the same one does not, and non-gameplay scenes
    /// stop it (by dropping the engine). Per-scene music starts here.
    pub fn load_scene(&mut self, name: &str) {
        let is_gameplay = self.config.sequence.is_gameplay_level(name);

        // Misconfigured levels fail safe: log and stay where we are.
        let layout = if is_gameplay {
            match self.layout_for(name) {
                Some(layout) => Some(layout),
                None => {
                    error!(
                        "no layout found for level '{name}'; staying on '{}'",
                        self.current_scene
                    );
                    return;
                }
            }
        } else {
            None
        };

        if let Some(sink) = &mut self.scene {
            sink.load_scene(name);
        }

        if let Some(layout) = layout {
            let same_level = name == self.current_scene;
            if let Some(engine) = &mut self.engine {
                if same_level {
                    info!("reloading level '{name}'; timer keeps running");
                    engine.reload_level();
                } else {
                    info!("entering new level '{name}'; timer reset");
                    engine.start_level(layout);
                }
            } else {
                let persisted = self.prefs.get_int(KEY_SHOT_COUNT, 0).max(0) as u32;
                if persisted > 0 {
                    info!("resuming with {persisted} persisted shot(s) used");
                }
                let mut sim_config = SimConfig::for_layout(layout);
                sim_config.max_shots = self.config.max_shots;
                sim_config.base_score = self.config.base_score;
                sim_config.initial_shots_used = persisted;
                self.engine = Some(SimulationEngine::new(sim_config));
            }
            self.phase = GamePhase::Playing;

            if let (Some(engine), Some(ui)) = (&self.engine, &mut self.ui) {
                ui.update_shot_count(engine.progress().shots_used(), engine.progress().max_shots());
            }
        } else {
            self.engine = None;
            self.last_snapshot = None;
            if name == GAME_OVER_SCENE {
                self.phase = GamePhase::GameOver;
                self.game_over_secs = 0.0;
                self.can_restart = false;
                // A finished run starts the next one from a clean budget.
                self.prefs.set_int(KEY_SHOT_COUNT, 0);
                if let Err(e) = self.prefs.save() {
                    warn!("failed to persist preferences: {e}");
                }
            } else {
                self.phase = GamePhase::MainMenu;
            }
        }

        let bgm = self
            .config
            .sequence
            .bgm_for(name)
            .unwrap_or(self.config.default_bgm);
        if let Some(audio) = &mut self.audio {
            audio.play_bgm(bgm);
        }

        self.current_scene = name.to_string();
    }

    /// One frame. The frame loop calls this at the fixed tick rate.
    pub fn tick(&mut self) {
        match self.phase {
            GamePhase::Playing => self.tick_playing(),
            GamePhase::GameOver => {
                self.game_over_secs += DT;
                if !self.can_restart && self.game_over_secs >= GAME_OVER_INPUT_DELAY_SECS {
                    self.can_restart = true;
                    info!("game-over screen now accepts input");
                }
            }
            GamePhase::MainMenu => {}
        }
    }

    fn tick_playing(&mut self) {
        let Some(engine) = &mut self.engine else {
            return;
        };
        let snapshot = engine.tick();
        let events = engine.drain_events();

        if let Some(ui) = &mut self.ui {
            ui.update_timer(snapshot.hud.elapsed_secs);
        }
        for cue in &snapshot.audio_events {
            let index = self.config.sfx.index_for(cue);
            if let Some(audio) = &mut self.audio {
                audio.play_sfx(index);
            }
        }
        self.last_snapshot = Some(snapshot);

        for event in events {
            self.handle_game_event(event);
        }
    }

    fn handle_game_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::NukeSpent { reason } => {
                info!(
                    "shot resolved ({reason:?}); reloading '{}'",
                    self.current_scene
                );
                let scene = self.current_scene.clone();
                self.load_scene(&scene);
            }
            GameEvent::OpponentKilled { .. } | GameEvent::BlockBroken { .. } => {}
            GameEvent::Progress { event } => self.handle_progress_event(event),
        }
    }

    fn handle_progress_event(&mut self, event: ProgressEvent) {
        match event {
            ProgressEvent::ShotRecorded { used, max } => {
                self.prefs.set_int(KEY_SHOT_COUNT, used as i64);
                if let Err(e) = self.prefs.save() {
                    warn!("failed to persist shot count: {e}");
                }
                if let Some(ui) = &mut self.ui {
                    ui.update_shot_count(used, max);
                }
            }
            ProgressEvent::LevelComplete { score } => {
                let total = self.prefs.get_int(KEY_TOTAL_SCORE, 0) + score.final_score as i64;
                self.prefs.set_int(KEY_TOTAL_SCORE, total);
                if let Err(e) = self.prefs.save() {
                    warn!("failed to persist total score: {e}");
                }
                info!(
                    "level complete: time {:.2}s, shots {}, score {}",
                    score.elapsed_secs, score.shots_used, score.final_score
                );
                if let Some(ui) = &mut self.ui {
                    ui.show_level_complete(score.final_score);
                } else {
                    // Degrade rather than stall: without a completion screen
                    // there is nothing to wait on.
                    error!("no UI sink attached; proceeding to the next level directly");
                    if let Some(engine) = &mut self.engine {
                        engine.confirm_advance();
                    }
                    self.proceed_to_next_level();
                }
            }
            ProgressEvent::BudgetExhausted { used } => {
                info!("shot budget exhausted after {used} shot(s); game over");
                self.load_scene(GAME_OVER_SCENE);
            }
        }
    }

    fn proceed_to_next_level(&mut self) {
        self.prefs.set_int(KEY_SHOT_COUNT, 0);
        if let Err(e) = self.prefs.save() {
            warn!("failed to persist shot count: {e}");
        }

        let next = self
            .config
            .sequence
            .next_after(&self.current_scene)
            .map(str::to_string);
        match next {
            Some(next) => self.load_scene(&next),
            // Fail safe on a missing mapping: no transition beats a crash.
            None => warn!(
                "no next level mapped after '{}'; staying put",
                self.current_scene
            ),
        }
    }

    fn layout_for(&self, name: &str) -> Option<LevelLayout> {
        self.config.layouts.iter().find(|l| l.name == name).cloned()
    }
}
