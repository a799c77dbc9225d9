//! Skater physics model
//!
//! Vertical motion only: the track scrolls under the skater, so horizontal
//! position changes only when a raised step shoves the skater back.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::state::DeathCause;
use crate::consts::FRAME_DT;
use crate::tuning::Tuning;

/// What lies under the skater for the floor fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Support {
    /// Sidewalk under the skater: never sink below the ground line
    Floor,
    /// Over a gap (or already below the ground line): fall freely
    Gap,
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skater {
    /// Center position
    pub pos: Vec2,
    /// Velocity in points/second
    pub vel: Vec2,
    /// Counter-clockwise rotation in radians
    pub rotation: f32,
    /// Angular velocity in radians/second
    pub angular_vel: f32,
    pub size: Vec2,
    pub is_on_ground: bool,
    /// Ground line for the floor fallback (center y when standing on low sidewalk)
    pub minimum_y: f32,
    /// Upward speed set by a jump
    pub jump_speed: f32,
    /// Vertical velocity the floor fallback absorbed this step, if it caught
    /// the skater. The brick contact that begins with it consumes it.
    #[serde(skip)]
    pub touchdown_vy: Option<f32>,
}

impl Skater {
    pub fn new(tuning: &Tuning) -> Self {
        let start = tuning.skater_start();
        Self {
            pos: start,
            vel: Vec2::ZERO,
            rotation: 0.0,
            angular_vel: 0.0,
            size: tuning.skater_size,
            is_on_ground: true,
            minimum_y: start.y,
            jump_speed: tuning.jump_speed,
            touchdown_vy: None,
        }
    }

    /// Put the skater back at the start line, upright and at rest
    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Jump if standing on something. Returns false when the input is ignored.
    pub fn apply_jump_impulse(&mut self) -> bool {
        if !self.is_on_ground {
            return false;
        }
        self.vel.y = self.jump_speed;
        self.is_on_ground = false;
        true
    }

    /// Advance by `elapsed_frames` 60 Hz frames
    pub fn integrate(&mut self, elapsed_frames: f32, tuning: &Tuning, support: Support) {
        let dt = elapsed_frames * FRAME_DT as f32;
        self.touchdown_vy = None;

        if !self.is_on_ground {
            self.vel.y -= tuning.gravity * elapsed_frames;
            self.pos.y += self.vel.y * dt;

            if support == Support::Floor && self.pos.y < self.minimum_y {
                self.pos.y = self.minimum_y;
                self.touchdown_vy = Some(self.vel.y);
                self.vel = Vec2::ZERO;
                self.is_on_ground = true;
            }
        }

        self.rotation += self.angular_vel * dt;
        self.angular_vel /= 1.0 + tuning.angular_damping * dt;

        // Right ourselves while still on the wheels
        if self.is_on_ground && self.rotation.abs() <= tuning.tip_over_limit() {
            let step = tuning.upright_rate * dt;
            if self.rotation.abs() <= step {
                self.rotation = 0.0;
            } else {
                self.rotation -= step * self.rotation.signum();
            }
        }
    }

    /// Vertical velocity at the moment of touchdown, if this contact is one
    ///
    /// Taken at most once per step, so a landing across a seam between two
    /// bricks reports a single impact.
    pub fn take_impact_vy(&mut self) -> Option<f32> {
        match self.touchdown_vy.take() {
            Some(vy) => Some(vy),
            None if !self.is_on_ground => Some(self.vel.y),
            None => None,
        }
    }

    /// Touch down on a brick top; downward motion stops
    pub fn land(&mut self) {
        self.is_on_ground = true;
        self.vel.y = self.vel.y.max(0.0);
    }

    pub fn is_off_screen(&self) -> bool {
        self.pos.y < 0.0 || self.pos.x < 0.0
    }

    pub fn is_tipped_over(&self, limit: f32) -> bool {
        self.rotation.abs() > limit
    }

    /// Whether the run should end
    ///
    /// Falling or being shoved off screen is always fatal. Tipping over is
    /// only fatal once the skater is back on the ground.
    pub fn check_terminal_conditions(&self, tip_limit: f32) -> Option<DeathCause> {
        if self.is_off_screen() {
            Some(DeathCause::OffScreen)
        } else if self.is_tipped_over(tip_limit) && self.is_on_ground {
            Some(DeathCause::TippedOver)
        } else {
            None
        }
    }
}
