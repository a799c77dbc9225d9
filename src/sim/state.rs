//! Session state and core simulation types
//!
//! One `Session` holds everything a single run mutates. It is reset in
//! place when a new run starts.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::contact::ContactTracker;
use super::gems::GemField;
use super::score::ScoreBoard;
use super::skater::Skater;
use super::track::Track;
use crate::tuning::Tuning;

/// Whether a run is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a start trigger (initial, and after game over)
    #[default]
    NotRunning,
    /// Active gameplay
    Running,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// Fell below or got pushed past the screen edge
    OffScreen,
    /// Rotated past the tip-over limit while on the ground
    TippedOver,
}

/// Notifications for the rendering, audio and presentation collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Show the "tap to play" prompt
    ShowStartPrompt,
    /// A run began; carries the stored best for display
    GameStarted { high_score: u64 },
    BrickSpawned { id: u32, pos: Vec2 },
    BrickRemoved { id: u32 },
    GemSpawned { id: u32, pos: Vec2 },
    GemRemoved { id: u32 },
    Jumped,
    /// Hard landing on a brick
    Sparks { pos: Vec2 },
    GemCollected { id: u32, score: u64 },
    /// The simulation detected a terminal condition
    Died { cause: DeathCause },
    /// Game over presentation with the final result
    GameOver {
        score: u64,
        high_score: u64,
        new_record: bool,
    },
}

/// Monotonic id allocator for bricks and gems
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityIds {
    next: u32,
}

impl Default for EntityIds {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl EntityIds {
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Complete state of one play-through
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub skater: Skater,
    pub track: Track,
    pub gems: GemField,
    pub score: ScoreBoard,
    /// Timestamp of the previous frame (None until the first frame of a run)
    pub last_update_time: Option<f64>,
    /// Frames simulated this run
    pub frame: u64,
    pub ids: EntityIds,
    /// Pairs in contact last frame
    #[serde(skip)]
    pub contacts: ContactTracker,
    /// Pending notifications, drained by the controller
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Session {
    /// `tuning` is trusted as given; `Game::new` and `Tuning::load` validate it
    pub fn new(tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::NotRunning,
            skater: Skater::new(&tuning),
            track: Track::new(&tuning),
            gems: GemField::new(tuning.gem_size),
            score: ScoreBoard::new(&tuning),
            last_update_time: None,
            frame: 0,
            ids: EntityIds::default(),
            contacts: ContactTracker::default(),
            events: Vec::new(),
            tuning,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Reset everything and enter Running
    pub fn start(&mut self) {
        self.skater.reset(&self.tuning);
        self.track.reset(&mut self.events);
        self.gems.clear(&mut self.events);
        self.score.reset(&self.tuning);
        self.contacts.clear();
        self.last_update_time = None;
        self.frame = 0;
        self.phase = GamePhase::Running;
    }

    /// Leave Running; further frames are no-ops
    pub fn end(&mut self, cause: DeathCause) {
        if !self.is_running() {
            return;
        }
        self.phase = GamePhase::NotRunning;
        self.events.push(GameEvent::Died { cause });
    }

    /// Jump input; ignored unless running and on the ground
    pub fn jump(&mut self) -> bool {
        if !self.is_running() || !self.skater.apply_jump_impulse() {
            return false;
        }
        self.events.push(GameEvent::Jumped);
        true
    }

    /// Take pending notifications
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
