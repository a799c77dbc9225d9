//! Score and difficulty
//!
//! Scroll speed ramps up every frame. Score ticks up once per interval of
//! real time by the current (floored) speed, so faster runs score faster
//! regardless of the display refresh rate.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub score: u64,
    /// Points scrolled per 60 Hz frame
    pub scroll_speed: f32,
    /// When score was last accrued (None until the first frame of a run)
    pub last_score_update: Option<f64>,
}

impl ScoreBoard {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            score: 0,
            scroll_speed: tuning.starting_scroll_speed,
            last_score_update: None,
        }
    }

    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }

    /// One frame of difficulty ramp
    pub fn ramp(&mut self, tuning: &Tuning) {
        self.scroll_speed += tuning.scroll_speed_increment;
    }

    /// Time-based accrual; returns points added
    pub fn accrue(&mut self, now: f64, tuning: &Tuning) -> u64 {
        let Some(last) = self.last_score_update else {
            self.last_score_update = Some(now);
            return 0;
        };
        if now - last <= tuning.score_interval {
            return 0;
        }
        let points = self.scroll_speed.max(0.0).floor() as u64;
        self.score += points;
        self.last_score_update = Some(now);
        points
    }

    /// Flat bonus outside the time cadence
    pub fn add_bonus(&mut self, points: u64) {
        self.score += points;
    }
}
