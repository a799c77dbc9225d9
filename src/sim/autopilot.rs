//! Idle/demo mode - a simple bot that times jumps
//!
//! Looks a fixed number of frames ahead of the skater and jumps when the
//! sidewalk in that window has a gap or rises above the skater's feet.

use super::state::Session;
use crate::consts::CONTACT_SLOP;

/// Whether the bot would jump this frame
pub fn should_jump(session: &Session) -> bool {
    let skater = &session.skater;
    if !session.is_running() || !skater.is_on_ground {
        return false;
    }

    let tuning = &session.tuning;
    let body = skater.bounds();
    let feet = body.bottom();
    let reach = body.right() + session.score.scroll_speed * tuning.autopilot_lead_frames;

    let track = &session.track;
    let mut ahead = track
        .bricks
        .iter()
        .map(|b| track.bounds(b))
        .filter(|b| b.right() > body.right() && b.left() < reach);

    let Some(first) = ahead.next() else {
        // Nothing ahead within reach: a gap is coming
        return true;
    };
    if first.left() > body.right() + tuning.seam_gap + CONTACT_SLOP {
        return true;
    }

    let mut prev = first;
    for next in std::iter::once(first).chain(ahead) {
        let gap = next.left() - prev.right();
        if gap > tuning.seam_gap + CONTACT_SLOP || next.top() > feet + CONTACT_SLOP {
            return true;
        }
        prev = next;
    }
    // Sidewalk ends before the lookahead does
    prev.right() + tuning.seam_gap + CONTACT_SLOP < reach
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::track::{Brick, BrickLevel};
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn session_with(levels_and_gaps: &[(BrickLevel, f32)]) -> Session {
        let mut session = Session::new(Tuning::default());
        session.start();
        let width = session.track.brick_size.x;
        let mut x = session.skater.pos.x;
        for &(level, gap) in levels_and_gaps {
            x += gap;
            let id = session.ids.next_id();
            let y = session.track.brick_size.y / 2.0 + level.offset(&session.tuning);
            session.track.bricks.push(Brick {
                id,
                pos: Vec2::new(x, y),
                level,
            });
            x += width + 1.0;
        }
        session
    }

    #[test]
    fn test_flat_sidewalk_no_jump() {
        let session = session_with(&[(BrickLevel::Low, 0.0); 8]);
        assert!(!should_jump(&session));
    }

    #[test]
    fn test_gap_ahead_jumps() {
        let session = session_with(&[(BrickLevel::Low, 0.0), (BrickLevel::Low, 40.0)]);
        assert!(should_jump(&session));
    }

    #[test]
    fn test_step_ahead_jumps() {
        let session = session_with(&[(BrickLevel::Low, 0.0), (BrickLevel::High, 0.0)]);
        assert!(should_jump(&session));
    }

    #[test]
    fn test_airborne_never_jumps() {
        let mut session = session_with(&[(BrickLevel::Low, 0.0), (BrickLevel::Low, 40.0)]);
        session.skater.is_on_ground = false;
        assert!(!should_jump(&session));
    }
}
