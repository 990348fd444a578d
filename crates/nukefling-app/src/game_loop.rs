//! The host frame loop.
//!
//! A background thread owns the director outright and ticks it at the
//! fixed rate; everything else talks to it through an mpsc command
//! channel. Headless runs drop the sleep pacing and bound the frame
//! count instead.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use nukefling_core::constants::TICK_RATE;

use crate::autopilot::Autopilot;
use crate::director::{Director, HostCommand};

pub struct LoopConfig {
    /// Sleep between frames to hold the tick rate in wall-clock time.
    pub realtime: bool,
    /// Stop after this many frames, if set.
    pub max_frames: Option<u64>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            realtime: true,
            max_frames: None,
        }
    }
}

pub struct GameLoopHandle {
    command_tx: Sender<HostCommand>,
    join: JoinHandle<()>,
}

impl GameLoopHandle {
    pub fn sender(&self) -> Sender<HostCommand> {
        self.command_tx.clone()
    }

    pub fn send(&self, command: HostCommand) {
        let _ = self.command_tx.send(command);
    }

    pub fn join(self) {
        let _ = self.join.join();
    }
}

/// Start the frame loop on a background thread. The optional autopilot is
/// polled each frame in place of real player input.
pub fn start(
    director: Director,
    autopilot: Option<Autopilot>,
    config: LoopConfig,
) -> GameLoopHandle {
    let (command_tx, command_rx) = mpsc::channel();
    let join = thread::spawn(move || run_loop(command_rx, director, autopilot, config));
    GameLoopHandle { command_tx, join }
}

fn run_loop(
    rx: Receiver<HostCommand>,
    mut director: Director,
    mut autopilot: Option<Autopilot>,
    config: LoopConfig,
) {
    director.boot();

    let tick_duration = Duration::from_secs_f64(1.0 / TICK_RATE as f64);
    let mut frame: u64 = 0;

    loop {
        let start = Instant::now();

        // Drain external commands first, then ask the autopilot.
        let mut quit = false;
        while let Ok(command) = rx.try_recv() {
            if matches!(command, HostCommand::Quit) {
                quit = true;
                break;
            }
            director.handle_command(command);
        }
        if !quit {
            if let Some(bot) = &mut autopilot {
                for command in bot.drive(&director) {
                    if matches!(command, HostCommand::Quit) {
                        quit = true;
                        break;
                    }
                    director.handle_command(command);
                }
            }
        }
        if quit {
            break;
        }

        director.tick();

        frame += 1;
        if config.max_frames.is_some_and(|max| frame >= max) {
            break;
        }

        if config.realtime {
            let elapsed = start.elapsed();
            if elapsed < tick_duration {
                thread::sleep(tick_duration - elapsed);
            }
        }
    }
}
