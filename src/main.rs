//! Skate Run headless runner
//!
//! Drives the simulation with a simulated display refresh and the
//! autopilot standing in for the player. Runs back to back until the
//! requested number of frames has run, restarting after every game over.

use std::path::PathBuf;

use clap::Parser;

use skate_run::audio::LogAudio;
use skate_run::platform::{Clock, FixedStepClock, LogPresenter, route_event};
use skate_run::sim::{GameEvent, autopilot};
use skate_run::{FileHighScores, Game, Tuning};

#[derive(Parser, Debug)]
#[command(name = "skate-run")]
#[command(about = "Headless Skate Run driven by the autopilot")]
struct Options {
    /// JSON tuning file (defaults are used if it fails to load)
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Seed for track generation
    #[arg(long, default_value_t = 0x5ca7e)]
    seed: u64,
    /// Number of display refreshes to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u64,
    /// Where the best score is kept
    #[arg(long, default_value = "highscore.json")]
    highscores: PathBuf,
    /// Simulated display refresh rate in Hz
    #[arg(long, default_value_t = 60.0, value_parser = parse_fps)]
    fps: f64,
}

fn parse_fps(s: &str) -> Result<f64, String> {
    let fps: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if fps.is_finite() && fps > 0.0 {
        Ok(fps)
    } else {
        Err(format!("must be positive, got {s}"))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = Options::parse();
    let tuning = match &opts.tuning {
        Some(path) => Tuning::load_or_default(path),
        None => Tuning::default(),
    };
    log::info!(
        "Skate Run (headless) starting: seed {}, {} frames at {} Hz",
        opts.seed,
        opts.frames,
        opts.fps
    );

    let store = FileHighScores::new(&opts.highscores);
    let mut game = Game::with_seed(tuning, store, opts.seed)?;
    let mut clock = FixedStepClock::new(opts.fps);
    let mut presenter = LogPresenter::default();
    let mut audio = LogAudio;
    let mut runs = 0u32;
    let mut best = 0u64;

    for _ in 0..opts.frames {
        let now = clock.now();
        if !game.is_running() {
            runs += 1;
            game.tap();
        } else if autopilot::should_jump(game.session()) {
            game.tap();
        }
        game.update(now);

        for event in game.drain_events() {
            if let GameEvent::GameOver { score, .. } = event {
                best = best.max(score);
            }
            route_event(&event, &mut presenter, &mut audio);
        }
    }

    if game.is_running() {
        best = best.max(game.session().score.score);
    }
    log::info!("Finished {} run(s), best score {}", runs, best);
    Ok(())
}
