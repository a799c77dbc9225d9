//! Skate Run - An endless sidewalk skateboarding runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (skater physics, track generation, contacts, score)
//! - `game`: Session controller (start/game-over transitions, high score hand-off)
//! - `highscores`: Persisted best score
//! - `persistence`: JSON save/load helpers
//! - `tuning`: Data-driven game balance
//! - `platform`: Clock and presentation collaborators
//! - `audio`: Sound cue contract

pub mod audio;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use highscores::{FileHighScores, HighScoreStore, MemoryHighScores};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Frame duration the scroll and integration multipliers are normalized to
    pub const FRAME_DT: f64 = 1.0 / 60.0;

    /// Distance within which two boxes still count as touching
    pub const CONTACT_SLOP: f32 = 0.5;
}

/// Convert a wall-clock delta into a 60 Hz frame multiplier
#[inline]
pub fn frames_elapsed(elapsed_secs: f64) -> f32 {
    (elapsed_secs / consts::FRAME_DT) as f32
}

/// Format a score the way the HUD shows it (zero padded to four digits)
pub fn format_score(score: u64) -> String {
    format!("{:04}", score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_elapsed() {
        assert!((frames_elapsed(1.0 / 60.0) - 1.0).abs() < 1e-5);
        assert!((frames_elapsed(1.0 / 30.0) - 2.0).abs() < 1e-5);
        assert_eq!(frames_elapsed(0.0), 0.0);
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(7), "0007");
        assert_eq!(format_score(120), "0120");
        assert_eq!(format_score(123456), "123456");
    }
}
