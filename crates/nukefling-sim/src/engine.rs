//! Simulation engine: owns the hecs world for the active level, processes
//! player commands, runs all systems, and produces `GameStateSnapshot`s.
//!
//! The engine also owns the level progress tracker and feeds it the
//! opponent count as the liveness probe, so the tracker itself never sees
//! the ECS world.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::{Entity, World};
use log::debug;

use nukefling_core::commands::PlayerCommand;
use nukefling_core::components::{Dead, Stuck, Velocity};
use nukefling_core::constants::{DEFAULT_BASE_SCORE, DEFAULT_MAX_SHOTS, DT};
use nukefling_core::enums::LevelState;
use nukefling_core::events::{AudioEvent, GameEvent};
use nukefling_core::state::GameStateSnapshot;
use nukefling_core::types::SimTime;
use nukefling_levels::{LevelLayout, LevelProgress};

use crate::systems;
use crate::systems::contacts::ContactOutcome;
use crate::world_setup;

/// Configuration for starting a play session.
pub struct SimConfig {
    pub max_shots: u32,
    pub base_score: u32,
    /// Shot count persisted from an interrupted session, if any.
    pub initial_shots_used: u32,
    pub layout: LevelLayout,
}

impl SimConfig {
    pub fn for_layout(layout: LevelLayout) -> Self {
        Self {
            max_shots: DEFAULT_MAX_SHOTS,
            base_score: DEFAULT_BASE_SCORE,
            initial_shots_used: 0,
            layout,
        }
    }
}

/// The simulation engine. One instance per play session.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    layout: LevelLayout,
    progress: LevelProgress,
    nuke: Entity,
    /// Sticky anchor: the block the nuke is glued to and the contact offset.
    stuck_to: Option<(Entity, Vec2)>,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    audio_events: Vec<AudioEvent>,
    game_events: Vec<GameEvent>,
}

impl SimulationEngine {
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let nuke = world_setup::spawn_level(&mut world, &config.layout);
        Self {
            world,
            time: SimTime::default(),
            progress: LevelProgress::resume(
                config.max_shots,
                config.base_score,
                config.initial_shots_used,
            ),
            layout: config.layout,
            nuke,
            stuck_to: None,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            game_events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Same-level reload after a spent shot: the world is rebuilt from the
    /// layout, the tracker keeps its counters and timer.
    pub fn reload_level(&mut self) {
        self.rebuild_world();
    }

    /// Move to a different level: rebuild the world and reset the tracker,
    /// including the timer.
    pub fn start_level(&mut self, layout: LevelLayout) {
        self.layout = layout;
        self.progress.reset(true);
        self.time = SimTime::default();
        self.rebuild_world();
    }

    /// Continue acknowledgement from the completion screen.
    pub fn confirm_advance(&mut self) {
        self.progress.confirm_advance();
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.progress.state() == LevelState::Running {
            self.run_systems();
            self.time.advance();
        }

        let world = &self.world;
        self.progress
            .tick(DT, || systems::liveness::count_opponents(world));
        for event in self.progress.drain_events() {
            self.game_events.push(GameEvent::Progress { event });
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build(&self.world, self.time, &self.progress, audio_events)
    }

    /// Take the discrete events raised since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.game_events)
    }

    pub fn level_state(&self) -> LevelState {
        self.progress.state()
    }

    pub fn progress(&self) -> &LevelProgress {
        &self.progress
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    fn rebuild_world(&mut self) {
        self.world = World::new();
        self.stuck_to = None;
        self.command_queue.clear();
        self.nuke = world_setup::spawn_level(&mut self.world, &self.layout);
    }

    fn process_commands(&mut self) {
        if self.progress.state() != LevelState::Running {
            // Shooting is disabled while a transition is pending.
            if !self.command_queue.is_empty() {
                debug!(
                    "discarding {} player command(s) outside Running",
                    self.command_queue.len()
                );
                self.command_queue.clear();
            }
            return;
        }

        while let Some(command) = self.command_queue.pop_front() {
            let cue = match command {
                PlayerCommand::DragTo { x, y } => {
                    systems::sling::drag_to(&mut self.world, self.nuke, Vec2::new(x, y))
                }
                PlayerCommand::Release => systems::sling::release(&mut self.world, self.nuke),
            };
            if let Some(cue) = cue {
                self.audio_events.push(cue);
            }
        }
    }

    fn run_systems(&mut self) {
        systems::mover::run(&mut self.world, DT);
        systems::ballistics::run(&mut self.world, DT);
        systems::mover::carry_stuck(&mut self.world, self.stuck_to, self.nuke);

        let outcome = systems::contacts::run(&mut self.world, self.nuke);
        self.apply_contacts(outcome);

        if let Some(reason) = systems::spent::run(&mut self.world, self.nuke, DT) {
            self.progress.record_shot();
            self.game_events.push(GameEvent::NukeSpent { reason });
        }

        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    fn apply_contacts(&mut self, outcome: ContactOutcome) {
        for (entity, pos) in outcome.killed_opponents {
            // The same opponent can show up from both the nuke pass and the
            // obstacle pass; mark and announce it once.
            if self.world.satisfies::<&Dead>(entity).unwrap_or(true) {
                continue;
            }
            let _ = self.world.insert_one(entity, Dead);
            self.audio_events
                .push(AudioEvent::OpponentDeath { x: pos.x, y: pos.y });
            self.game_events
                .push(GameEvent::OpponentKilled { x: pos.x, y: pos.y });
        }

        for (entity, pos) in outcome.broken_blocks {
            if self.world.satisfies::<&Dead>(entity).unwrap_or(true) {
                continue;
            }
            let _ = self.world.insert_one(entity, Dead);
            self.audio_events
                .push(AudioEvent::BlockBreak { x: pos.x, y: pos.y });
            self.game_events
                .push(GameEvent::BlockBroken { x: pos.x, y: pos.y });
        }

        if let Some((block, offset)) = outcome.stuck {
            if self.stuck_to.is_none() {
                self.stuck_to = Some((block, offset));
                if let Ok(velocity) = self.world.query_one_mut::<&mut Velocity>(self.nuke) {
                    velocity.0 = Vec2::ZERO;
                }
                let _ = self.world.insert_one(self.nuke, Stuck);
            }
        }
    }
}
