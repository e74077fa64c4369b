//! Robo Runner entry point
//!
//! Headless driver: loads settings and the best score, runs one seeded
//! game to completion (autopilot by default), and reports the result.
//! Rendering front ends drive the same `sim` API off `snapshot()`.

use std::path::PathBuf;

use rand::Rng;

use robo_runner::highscores::BestScore;
use robo_runner::settings::Settings;
use robo_runner::sim::{GamePhase, GameState, TickInput, tick};

fn main() {
    env_logger::init();
    log::info!("Robo Runner (headless) starting...");

    let settings_path = PathBuf::from(Settings::FILE_NAME);
    let settings = Settings::load(&settings_path);

    let best_path = PathBuf::from(BestScore::FILE_NAME);
    let mut best = BestScore::load(&best_path);

    let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("Starting run with seed {}", seed);

    let mut state = GameState::new(seed, settings.world());
    state.set_autopilot(settings.autopilot);
    state.start();

    let input = TickInput::default();
    while state.phase == GamePhase::Running && state.time_ticks < settings.max_demo_ticks {
        tick(&mut state, &input);
    }

    match state.summary() {
        Some(summary) => {
            log::info!(
                "Run over: score {} after {} ticks (hit {:?})",
                summary.score,
                summary.ticks,
                summary.hit
            );
            if best.submit(summary.score) {
                log::info!("New best score!");
                best.save(&best_path);
            }
        }
        None => {
            log::info!(
                "Run still alive after {} ticks (score {}), stopping",
                state.time_ticks,
                state.display_score()
            );
        }
    }

    println!(
        "score {} | best {} | ticks {} | seed {}",
        state.display_score(),
        best.score,
        state.time_ticks,
        seed
    );
}
