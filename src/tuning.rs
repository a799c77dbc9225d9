//! Data-driven game balance
//!
//! Every gameplay constant lives here so a run can be re-tuned from a JSON
//! file without recompiling. Missing fields fall back to the defaults.

use std::path::Path;

use anyhow::{Context, bail};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Gameplay tuning (sizes in points, velocities in points/second)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Scene ===
    /// Visible scene size
    pub viewport: Vec2,

    // === Track ===
    /// Size of one sidewalk brick
    pub brick_size: Vec2,
    /// Spacing between contiguous bricks
    pub seam_gap: f32,
    /// Vertical offset of the High elevation level (Low is 0)
    pub high_level_offset: f32,
    /// Upper bound (exclusive) of the per-brick random roll
    pub roll_range: u32,
    /// Rolls below this open a jump gap (with a gem above it)
    pub gap_chance: u32,
    /// Score the run must exceed before gaps appear
    pub gap_min_score: u64,
    /// Rolls below this (and not a gap) toggle the elevation level
    pub step_chance: u32,
    /// Score the run must exceed before steps appear
    pub step_min_score: u64,
    /// Gap width per unit of scroll speed
    pub gap_per_speed: f32,

    // === Gems ===
    pub gem_size: Vec2,
    /// Random extra height above the skater's head, drawn in [0, jitter)
    pub gem_height_jitter: u32,
    /// Score awarded per collected gem
    pub gem_bonus: u64,

    // === Skater ===
    pub skater_size: Vec2,
    /// Top of the low sidewalk; the skater starts standing on it
    pub ground_line: f32,
    /// Vertical speed lost per 60 Hz frame while airborne
    pub gravity: f32,
    /// Upward speed set by a jump
    pub jump_speed: f32,
    /// Landing faster than this (downward) throws sparks
    pub hard_landing_speed: f32,
    /// Rotation beyond this while grounded ends the run
    pub tip_over_degrees: f32,
    /// Angular velocity gained per frame of being shoved by a step
    pub side_impact_spin: f32,
    /// Angular velocity damping per second
    pub angular_damping: f32,
    /// Righting speed (rad/s) while grounded and not tipped over
    pub upright_rate: f32,

    // === Difficulty & score ===
    /// Scroll speed (points per frame) at the start of a run
    pub starting_scroll_speed: f32,
    /// Scroll speed added every frame while running
    pub scroll_speed_increment: f32,
    /// Seconds between time-based score accruals
    pub score_interval: f64,
    /// Wall-clock delta is clamped to this many seconds per frame
    pub max_frame_elapsed: f64,

    // === Demo ===
    /// How many frames of scrolling the autopilot looks ahead
    pub autopilot_lead_frames: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            viewport: Vec2::new(1334.0, 750.0),

            brick_size: Vec2::new(128.0, 64.0),
            seam_gap: 1.0,
            high_level_offset: 100.0,
            roll_range: 99,
            gap_chance: 2,
            gap_min_score: 5,
            step_chance: 4,
            step_min_score: 15,
            gap_per_speed: 20.0,

            gem_size: Vec2::new(32.0, 32.0),
            gem_height_jitter: 150,
            gem_bonus: 50,

            skater_size: Vec2::new(50.0, 80.0),
            ground_line: 64.0,
            gravity: 15.0,
            jump_speed: 650.0,
            hard_landing_speed: 100.0,
            tip_over_degrees: 85.0,
            side_impact_spin: 0.35,
            angular_damping: 1.0,
            upright_rate: 3.0,

            starting_scroll_speed: 5.0,
            scroll_speed_increment: 0.01,
            score_interval: 1.0,
            max_frame_elapsed: 0.1,

            autopilot_lead_frames: 14.0,
        }
    }
}

impl Tuning {
    /// Tip-over limit in radians
    pub fn tip_over_limit(&self) -> f32 {
        self.tip_over_degrees.to_radians()
    }

    /// Where the skater stands at the start of a run
    pub fn skater_start(&self) -> Vec2 {
        Vec2::new(
            self.viewport.x / 4.0,
            self.ground_line + self.skater_size.y / 2.0,
        )
    }

    /// Reject values that would stall track generation or break physics
    pub fn validate(&self) -> anyhow::Result<()> {
        let sizes = [
            ("viewport", self.viewport),
            ("brick_size", self.brick_size),
            ("gem_size", self.gem_size),
            ("skater_size", self.skater_size),
        ];
        for (name, size) in sizes {
            if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
                bail!("{name} must be positive and finite, got {size}");
            }
        }
        if self.roll_range == 0 {
            bail!("roll_range must be at least 1");
        }
        if !self.seam_gap.is_finite() || self.seam_gap < 0.0 {
            bail!("seam_gap must be non-negative, got {}", self.seam_gap);
        }
        let scalars = [
            ("high_level_offset", self.high_level_offset),
            ("gap_per_speed", self.gap_per_speed),
            ("ground_line", self.ground_line),
            ("gravity", self.gravity),
            ("jump_speed", self.jump_speed),
            ("starting_scroll_speed", self.starting_scroll_speed),
            ("scroll_speed_increment", self.scroll_speed_increment),
        ];
        for (name, value) in scalars {
            if !value.is_finite() || value < 0.0 {
                bail!("{name} must be non-negative and finite, got {value}");
            }
        }
        if self.score_interval <= 0.0 || self.max_frame_elapsed <= 0.0 {
            bail!("score_interval and max_frame_elapsed must be positive");
        }
        Ok(())
    }

    /// Load tuning from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let tuning: Tuning = crate::persistence::load_json(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?;
        tuning
            .validate()
            .with_context(|| format!("invalid tuning in {}", path.display()))?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Load tuning, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("{e:#}; using default tuning");
                Self::default()
            }
        }
    }
}
