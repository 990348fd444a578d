//! A seeded scripted player for headless runs.
//!
//! Solves the low ballistic arc onto the nearest opponent, presses
//! continue on the completion screen and any-key on the game-over screen,
//! and quits once it is back at the main menu.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use nukefling_core::commands::PlayerCommand;
use nukefling_core::constants::{GRAVITY, LAUNCH_FORCE_SCALE, MAX_DRAG_DISTANCE};
use nukefling_core::enums::{GamePhase, LevelState, NukePhase};

use crate::director::{Director, HostCommand};

pub struct Autopilot {
    rng: ChaCha8Rng,
    started: bool,
    pending_release: bool,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            started: false,
            pending_release: false,
        }
    }

    /// Decide the next commands from the director's visible state.
    pub fn drive(&mut self, director: &Director) -> Vec<HostCommand> {
        match director.phase() {
            GamePhase::MainMenu => {
                if self.started {
                    vec![HostCommand::Quit]
                } else {
                    self.started = true;
                    vec![HostCommand::StartGame]
                }
            }
            GamePhase::GameOver => {
                if director.can_restart() {
                    vec![HostCommand::AnyKey]
                } else {
                    Vec::new()
                }
            }
            GamePhase::Playing => self.drive_level(director),
        }
    }

    fn drive_level(&mut self, director: &Director) -> Vec<HostCommand> {
        if director.level_state() == Some(LevelState::AwaitingCompletion) {
            return vec![HostCommand::Continue];
        }
        if self.pending_release {
            self.pending_release = false;
            return vec![HostCommand::Player(PlayerCommand::Release)];
        }

        let Some(snapshot) = director.last_snapshot() else {
            return Vec::new();
        };
        let Some(nuke) = snapshot.nuke else {
            return Vec::new();
        };
        if nuke.phase != NukePhase::Held {
            return Vec::new();
        }
        let Some(target) = snapshot.opponents.first() else {
            return Vec::new();
        };

        // The held nuke sits at the sling anchor.
        let anchor = Vec2::new(nuke.x, nuke.y);
        let launch = self.solve_launch(anchor, Vec2::new(target.x, target.y));
        let drag = anchor - launch / LAUNCH_FORCE_SCALE;
        self.pending_release = true;
        vec![HostCommand::Player(PlayerCommand::DragTo {
            x: drag.x,
            y: drag.y,
        })]
    }

    /// Low-arc ballistic solution at a bit under full sling power, with a
    /// touch of seeded speed jitter so different seeds play differently.
    fn solve_launch(&mut self, anchor: Vec2, target: Vec2) -> Vec2 {
        let speed_cap = MAX_DRAG_DISTANCE * LAUNCH_FORCE_SCALE;
        let v = speed_cap * 0.95 * self.rng.gen_range(0.99..1.01);

        let delta = target - anchor;
        let sign = if delta.x >= 0.0 { 1.0 } else { -1.0 };
        let range = delta.x.abs();
        let rise = delta.y;

        let v2 = v * v;
        let disc = v2 * v2 - GRAVITY * (GRAVITY * range * range + 2.0 * rise * v2);
        if range < 1e-3 || disc < 0.0 {
            // Out of reach: lob at 45 degrees and hope.
            return Vec2::new(sign, 1.0).normalize() * speed_cap;
        }

        let tan_theta = (v2 - disc.sqrt()) / (GRAVITY * range);
        let theta = tan_theta.atan();
        Vec2::new(theta.cos() * sign, theta.sin()) * v
    }
}
