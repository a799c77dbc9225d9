//! Platform abstraction layer
//!
//! Handles what the simulation deliberately knows nothing about:
//! - Time (a monotonic timestamp per display refresh)
//! - Presentation (start prompt, score display, game over screen)
//! - Fan-out of simulation events to presentation and audio

use std::time::Instant;

use crate::audio::{AudioSink, SoundEffect};
use crate::format_score;
use crate::sim::GameEvent;

/// Monotonic frame timestamps in seconds
pub trait Clock {
    fn now(&mut self) -> f64;
}

/// Wall clock, measured from creation
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&mut self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Simulated display refresh: every call advances by one frame
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    time: f64,
    step: f64,
}

impl FixedStepClock {
    pub fn new(refresh_hz: f64) -> Self {
        Self {
            time: 0.0,
            step: 1.0 / refresh_hz,
        }
    }
}

impl Clock for FixedStepClock {
    fn now(&mut self) -> f64 {
        let t = self.time;
        self.time += self.step;
        t
    }
}

/// Menus and labels
pub trait Presenter {
    fn show_start_prompt(&mut self);
    fn show_scores(&mut self, score: u64, high_score: u64);
    fn show_game_over(&mut self, score: u64, new_record: bool);
}

/// Writes presentation to the log (headless runs)
#[derive(Debug, Default)]
pub struct LogPresenter {
    high_score: u64,
}

impl Presenter for LogPresenter {
    fn show_start_prompt(&mut self) {
        log::info!("Press to play");
    }

    fn show_scores(&mut self, score: u64, high_score: u64) {
        self.high_score = high_score;
        log::debug!("Score {} | Highscore {}", format_score(score), format_score(high_score));
    }

    fn show_game_over(&mut self, score: u64, new_record: bool) {
        if new_record {
            self.high_score = score;
        }
        log::info!(
            "Game Over! Scores:{} Highscore:{}{}",
            format_score(score),
            format_score(self.high_score),
            if new_record { " (new)" } else { "" }
        );
    }
}

/// Forward one simulation event to presentation and audio
pub fn route_event(event: &GameEvent, presenter: &mut dyn Presenter, audio: &mut dyn AudioSink) {
    if let Some(effect) = SoundEffect::for_event(event) {
        audio.play(effect);
    }
    match event {
        GameEvent::ShowStartPrompt => presenter.show_start_prompt(),
        GameEvent::GameStarted { high_score } => presenter.show_scores(0, *high_score),
        GameEvent::GameOver {
            score,
            high_score,
            new_record,
        } => {
            presenter.show_scores(*score, *high_score);
            presenter.show_game_over(*score, *new_record);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        sounds: Vec<SoundEffect>,
    }

    impl Presenter for Recorder {
        fn show_start_prompt(&mut self) {
            self.calls.push("prompt".into());
        }
        fn show_scores(&mut self, score: u64, high_score: u64) {
            self.calls.push(format!("scores {score} {high_score}"));
        }
        fn show_game_over(&mut self, score: u64, new_record: bool) {
            self.calls.push(format!("over {score} {new_record}"));
        }
    }

    impl AudioSink for Recorder {
        fn play(&mut self, effect: SoundEffect) {
            self.sounds.push(effect);
        }
    }

    #[test]
    fn test_fixed_step_clock() {
        let mut clock = FixedStepClock::new(60.0);
        assert_eq!(clock.now(), 0.0);
        assert!((clock.now() - 1.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_routes_game_over() {
        let mut presenter = Recorder::default();
        let mut audio = Recorder::default();
        let event = GameEvent::GameOver {
            score: 120,
            high_score: 120,
            new_record: true,
        };
        route_event(&event, &mut presenter, &mut audio);
        assert_eq!(presenter.calls, vec!["scores 120 120", "over 120 true"]);
        assert_eq!(audio.sounds, vec![SoundEffect::MusicStop]);
    }
}
