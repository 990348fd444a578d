//! Headless NUKEFLING: console sinks, a seeded autopilot, and the full
//! campaign from the main menu back to it.

use std::path::PathBuf;

use log::info;

use nukefling_app::autopilot::Autopilot;
use nukefling_app::director::{Director, DirectorConfig};
use nukefling_app::game_loop::{self, LoopConfig};
use nukefling_app::prefs::PrefStore;
use nukefling_app::settings::AudioSettings;
use nukefling_app::sinks::{ConsoleAudio, ConsoleScene, ConsoleUi};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42u64);
    let data_dir = std::env::var_os("NUKEFLING_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".nukefling"));

    let mut prefs = PrefStore::open(&data_dir);
    let settings = AudioSettings::load(&prefs);
    info!(
        "audio mixer: master {:.1} dB, music {:.1} dB, sfx {:.1} dB",
        settings.master_db(),
        settings.music_db(),
        settings.sfx_db()
    );
    settings.store(&mut prefs);

    let mut director = Director::new(DirectorConfig::default(), prefs);
    director.set_ui_sink(Box::new(ConsoleUi::new()));
    director.set_audio_sink(Box::new(ConsoleAudio));
    director.set_scene_sink(Box::new(ConsoleScene));

    info!("starting autopilot session (seed {seed})");
    let handle = game_loop::start(
        director,
        Some(Autopilot::new(seed)),
        LoopConfig {
            realtime: false,
            // Generous backstop; the autopilot quits at the menu long before.
            max_frames: Some(120_000),
        },
    );
    handle.join();
}
