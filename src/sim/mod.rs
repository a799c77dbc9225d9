//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time enters only as the timestamp passed to `tick`
//! - Randomness only through an injected `RandomSource`
//! - Stable iteration order (spawn order)
//! - No rendering, audio or storage dependencies

pub mod autopilot;
pub mod collision;
pub mod contact;
pub mod gems;
pub mod physics;
pub mod random;
pub mod score;
pub mod skater;
pub mod state;
pub mod tick;
pub mod track;

pub use collision::{Aabb, CollisionResult, box_box_collision};
pub use contact::{Body, ContactEvent, ContactTracker, resolve_contact};
pub use gems::{Gem, GemField};
pub use random::{RandomSource, ScriptedRandom, seeded};
pub use score::ScoreBoard;
pub use skater::{Skater, Support};
pub use state::{DeathCause, EntityIds, GameEvent, GamePhase, Session};
pub use tick::{TickInput, tick};
pub use track::{Brick, BrickLevel, Segment, SpawnContext, Track};
