//! Infinite sidewalk generator
//!
//! Bricks scroll left every frame. Whatever scrolls off the left edge is
//! evicted, and new bricks are appended at the right until the frontier
//! reaches the edge of the viewport. Each new brick rolls for a hazard:
//!
//! 1. a jump gap (with a gem floating above it)
//! 2. an elevation toggle for the bricks that follow
//! 3. nothing, a plain contiguous brick
//!
//! The checks run in that order and only one applies per brick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::gems::GemField;
use super::random::RandomSource;
use super::state::{EntityIds, GameEvent};
use crate::consts::CONTACT_SLOP;
use crate::tuning::Tuning;

/// Height of newly generated sidewalk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickLevel {
    #[default]
    Low,
    High,
}

impl BrickLevel {
    pub fn toggled(self) -> Self {
        match self {
            BrickLevel::Low => BrickLevel::High,
            BrickLevel::High => BrickLevel::Low,
        }
    }

    /// Vertical offset applied to the brick center
    pub fn offset(self, tuning: &Tuning) -> f32 {
        match self {
            BrickLevel::Low => 0.0,
            BrickLevel::High => tuning.high_level_offset,
        }
    }
}

/// One sidewalk brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    /// Center position
    pub pos: Vec2,
    pub level: BrickLevel,
}

/// What a roll produced for the next brick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Widened gap with a gem above it
    Gap,
    /// Elevation toggles after this brick
    Step,
    /// Contiguous brick
    Plain,
}

impl Segment {
    /// Classify a roll, gap before step before plain
    pub fn from_roll(roll: u32, score: u64, tuning: &Tuning) -> Self {
        if roll < tuning.gap_chance && score > tuning.gap_min_score {
            Segment::Gap
        } else if roll < tuning.step_chance && score > tuning.step_min_score {
            Segment::Step
        } else {
            Segment::Plain
        }
    }
}

/// Everything a generation pass reads or spawns into besides the track
pub struct SpawnContext<'a> {
    pub score: u64,
    pub scroll_speed: f32,
    pub rng: &'a mut dyn RandomSource,
    pub ids: &'a mut EntityIds,
    pub gems: &'a mut GemField,
    pub events: &'a mut Vec<GameEvent>,
}

/// The scrolling sidewalk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Live bricks, left to right
    pub bricks: Vec<Brick>,
    /// Level used for the next generated brick
    pub level: BrickLevel,
    pub brick_size: Vec2,
}

impl Track {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            bricks: Vec::new(),
            level: BrickLevel::Low,
            brick_size: tuning.brick_size,
        }
    }

    /// Remove every brick and return to the low level
    pub fn reset(&mut self, events: &mut Vec<GameEvent>) {
        for brick in self.bricks.drain(..) {
            events.push(GameEvent::BrickRemoved { id: brick.id });
        }
        self.level = BrickLevel::Low;
    }

    pub fn bounds(&self, brick: &Brick) -> Aabb {
        Aabb::new(brick.pos, self.brick_size)
    }

    /// Center x of the rightmost brick (0 when empty)
    pub fn frontier(&self) -> f32 {
        self.bricks.iter().map(|b| b.pos.x).fold(0.0, f32::max)
    }

    /// True if some brick lies horizontally under `body`
    pub fn has_brick_under(&self, body: &Aabb) -> bool {
        self.bricks
            .iter()
            .any(|b| self.bounds(b).overlap_x(body) > CONTACT_SLOP)
    }

    /// Scroll left by `scroll` and regenerate up to the right edge
    pub fn advance(&mut self, scroll: f32, tuning: &Tuning, ctx: &mut SpawnContext<'_>) {
        let half_width = self.brick_size.x / 2.0;
        let mut frontier: f32 = 0.0;

        let events = &mut *ctx.events;
        self.bricks.retain_mut(|brick| {
            brick.pos.x -= scroll;
            if brick.pos.x + half_width < 0.0 {
                log::trace!("Brick {} evicted", brick.id);
                events.push(GameEvent::BrickRemoved { id: brick.id });
                false
            } else {
                frontier = frontier.max(brick.pos.x);
                true
            }
        });

        while frontier < tuning.viewport.x {
            let mut x = frontier + self.brick_size.x + tuning.seam_gap;
            let level = self.level;
            let y = self.brick_size.y / 2.0 + level.offset(tuning);

            let roll = ctx.rng.next_below(tuning.roll_range);
            match Segment::from_roll(roll, ctx.score, tuning) {
                Segment::Gap => {
                    let gap = tuning.gap_per_speed * ctx.scroll_speed;
                    x += gap;
                    let jitter = ctx.rng.next_below(tuning.gem_height_jitter.max(1)) as f32;
                    let gem_pos = Vec2::new(x - gap / 2.0, y + tuning.skater_size.y + jitter);
                    ctx.gems.spawn(gem_pos, ctx.ids, ctx.events);
                }
                Segment::Step => {
                    self.level = self.level.toggled();
                    log::debug!("Sidewalk steps to {:?}", self.level);
                }
                Segment::Plain => {}
            }

            let id = ctx.ids.next_id();
            let pos = Vec2::new(x, y);
            self.bricks.push(Brick { id, pos, level });
            ctx.events.push(GameEvent::BrickSpawned { id, pos });
            log::trace!("Brick {id} spawned at ({x:.0}, {y:.0})");
            frontier = x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::ScriptedRandom;

    struct Fixture {
        track: Track,
        gems: GemField,
        ids: EntityIds,
        events: Vec<GameEvent>,
        tuning: Tuning,
    }

    impl Fixture {
        fn new() -> Self {
            let tuning = Tuning::default();
            Self {
                track: Track::new(&tuning),
                gems: GemField::new(tuning.gem_size),
                ids: EntityIds::default(),
                events: Vec::new(),
                tuning,
            }
        }

        fn advance(&mut self, scroll: f32, score: u64, rng: &mut dyn RandomSource) {
            let mut ctx = SpawnContext {
                score,
                scroll_speed: 5.0,
                rng,
                ids: &mut self.ids,
                gems: &mut self.gems,
                events: &mut self.events,
            };
            self.track.advance(scroll, &self.tuning, &mut ctx);
        }
    }

    #[test]
    fn test_fills_viewport_from_empty() {
        let mut f = Fixture::new();
        f.advance(0.0, 0, &mut ScriptedRandom::default());
        assert!(f.track.frontier() >= f.tuning.viewport.x);
        // First brick sits one brick width plus a seam from the origin
        assert_eq!(f.track.bricks[0].pos.x, 129.0);
        assert_eq!(f.track.bricks[0].pos.y, 32.0);
        // Contiguous seams everywhere
        for pair in f.track.bricks.windows(2) {
            assert_eq!(pair[1].pos.x - pair[0].pos.x, 129.0);
        }
    }

    #[test]
    fn test_gap_roll_spawns_gem_over_gap() {
        let mut f = Fixture::new();
        // First brick rolls 1 (gap), gem jitter 40, rest plain
        f.advance(0.0, 10, &mut ScriptedRandom::new([1, 40]));

        let gap = 20.0 * 5.0;
        let first = &f.track.bricks[0];
        assert_eq!(first.pos.x, 129.0 + gap);
        assert_eq!(f.gems.len(), 1);
        let gem = &f.gems.gems[0];
        assert_eq!(gem.pos.x, 129.0 + gap / 2.0);
        assert_eq!(gem.pos.y, 32.0 + f.tuning.skater_size.y + 40.0);
    }

    #[test]
    fn test_step_roll_gated_by_score() {
        let mut f = Fixture::new();
        f.advance(0.0, 10, &mut ScriptedRandom::new([3]));
        assert_eq!(f.track.level, BrickLevel::Low);
        assert!(f.gems.is_empty());
        assert!(f.track.bricks.iter().all(|b| b.pos.y == 32.0));
        assert_eq!(f.track.bricks[0].pos.x, 129.0);
    }

    #[test]
    fn test_step_roll_raises_following_bricks() {
        let mut f = Fixture::new();
        f.advance(0.0, 16, &mut ScriptedRandom::new([3]));
        assert_eq!(f.track.level, BrickLevel::High);
        // The brick that rolled the step keeps the old height
        assert_eq!(f.track.bricks[0].pos.y, 32.0);
        assert_eq!(f.track.bricks[0].level, BrickLevel::Low);
        assert_eq!(f.track.bricks[1].pos.y, 132.0);
        assert_eq!(f.track.bricks[1].level, BrickLevel::High);
    }

    #[test]
    fn test_gap_roll_below_score_gate_is_plain() {
        let mut f = Fixture::new();
        // Roll 1 with score 3: both gates closed
        f.advance(0.0, 3, &mut ScriptedRandom::new([1]));
        assert!(f.gems.is_empty());
        assert_eq!(f.track.level, BrickLevel::Low);
    }

    #[test]
    fn test_scroll_evicts_and_regenerates() {
        let mut f = Fixture::new();
        f.advance(0.0, 0, &mut ScriptedRandom::default());
        let first_id = f.track.bricks[0].id;
        f.events.clear();

        f.advance(200.0, 0, &mut ScriptedRandom::default());
        assert!(f.track.bricks.iter().all(|b| b.id != first_id));
        assert!(f.events.contains(&GameEvent::BrickRemoved { id: first_id }));
        assert!(f.track.frontier() >= f.tuning.viewport.x);
    }

    #[test]
    fn test_reset_clears_bricks_and_level() {
        let mut f = Fixture::new();
        f.advance(0.0, 16, &mut ScriptedRandom::new([3]));
        let count = f.track.bricks.len();
        f.events.clear();
        f.track.reset(&mut f.events);
        assert!(f.track.bricks.is_empty());
        assert_eq!(f.track.level, BrickLevel::Low);
        assert_eq!(f.events.len(), count);
    }

    #[test]
    fn test_segment_order() {
        let tuning = Tuning::default();
        assert_eq!(Segment::from_roll(0, 100, &tuning), Segment::Gap);
        assert_eq!(Segment::from_roll(1, 6, &tuning), Segment::Gap);
        assert_eq!(Segment::from_roll(1, 5, &tuning), Segment::Plain);
        assert_eq!(Segment::from_roll(1, 16, &tuning), Segment::Gap);
        assert_eq!(Segment::from_roll(3, 16, &tuning), Segment::Step);
        assert_eq!(Segment::from_roll(3, 15, &tuning), Segment::Plain);
        assert_eq!(Segment::from_roll(4, 1000, &tuning), Segment::Plain);
    }
}
