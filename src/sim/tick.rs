//! Per-frame simulation update
//!
//! Order matters: the track and gems scroll before the skater moves, so
//! contacts are tested against this frame's positions.

use super::contact::resolve_contact;
use super::physics;
use super::random::RandomSource;
use super::state::Session;
use super::track::SpawnContext;
use crate::frames_elapsed;

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump requested since the last frame
    pub jump: bool,
}

/// Advance the session to timestamp `now` (seconds, monotonic)
///
/// No-op unless the session is running.
pub fn tick(session: &mut Session, input: &TickInput, now: f64, rng: &mut dyn RandomSource) {
    if !session.is_running() {
        return;
    }

    let elapsed = session
        .last_update_time
        .map(|last| (now - last).clamp(0.0, session.tuning.max_frame_elapsed))
        .unwrap_or(0.0);
    session.last_update_time = Some(now);
    session.frame += 1;

    session.score.ramp(&session.tuning);
    let elapsed_frames = frames_elapsed(elapsed);
    let scroll = session.score.scroll_speed * elapsed_frames;

    if input.jump {
        session.jump();
    }

    let mut ctx = SpawnContext {
        score: session.score.score,
        scroll_speed: session.score.scroll_speed,
        rng,
        ids: &mut session.ids,
        gems: &mut session.gems,
        events: &mut session.events,
    };
    session.track.advance(scroll, &session.tuning, &mut ctx);
    session.gems.advance(scroll, &mut session.events);
    session.score.accrue(now, &session.tuning);

    for contact in physics::step(session, elapsed_frames) {
        resolve_contact(session, &contact);
    }

    if let Some(cause) = session
        .skater
        .check_terminal_conditions(session.tuning.tip_over_limit())
    {
        log::info!(
            "Run over after {} frames: {:?}, score {}",
            session.frame,
            cause,
            session.score.score
        );
        session.end(cause);
    }
}
