//! Built-in physics world
//!
//! A small integrator standing in for a rigid-body engine. Each step it
//! moves the skater, keeps it out of solid bricks, works out whether it is
//! still standing on something, and reports which bodies started touching.

use glam::Vec2;

use super::collision::{Aabb, box_box_collision};
use super::contact::{Body, ContactEvent, SKATER_COLLISION_MASK, SKATER_CONTACT_MASK, category};
use super::skater::{Skater, Support};
use super::state::Session;
use super::track::Track;
use crate::consts::CONTACT_SLOP;

/// Floor fallback applies only above sidewalk and only from above the ground line
pub fn support_for(skater: &Skater, track: &Track) -> Support {
    if skater.pos.y >= skater.minimum_y - CONTACT_SLOP && track.has_brick_under(&skater.bounds()) {
        Support::Floor
    } else {
        Support::Gap
    }
}

/// Advance the skater and return contact-begin events for this step
pub fn step(session: &mut Session, elapsed_frames: f32) -> Vec<ContactEvent> {
    let support = support_for(&session.skater, &session.track);
    session
        .skater
        .integrate(elapsed_frames, &session.tuning, support);

    let bricks: Vec<(Body, Aabb)> = session
        .track
        .bricks
        .iter()
        .map(|b| (Body::brick(b.id), session.track.bounds(b)))
        .collect();

    let mut touching = Vec::new();
    let mut on_top = false;
    for (body, bounds) in bricks {
        let hit = box_box_collision(&session.skater.bounds(), &bounds, CONTACT_SLOP);
        if !hit.hit {
            continue;
        }
        if body.category & SKATER_CONTACT_MASK != 0 {
            touching.push(body);
        }
        if body.category & SKATER_COLLISION_MASK == 0 {
            continue;
        }
        on_top |= hit.is_top();
        push_out(
            &mut session.skater,
            hit.normal,
            hit.penetration,
            elapsed_frames,
            session.tuning.side_impact_spin,
        );
    }

    // Walked off a ledge or over a gap
    let at_floor = support == Support::Floor
        && (session.skater.pos.y - session.skater.minimum_y).abs() <= CONTACT_SLOP;
    if session.skater.is_on_ground && !on_top && !at_floor {
        session.skater.is_on_ground = false;
    }

    if SKATER_CONTACT_MASK & category::GEM != 0 {
        let skater_bounds = session.skater.bounds();
        touching.extend(
            session
                .gems
                .gems
                .iter()
                .filter(|g| session.gems.bounds(g).touches(&skater_bounds, 0.0))
                .map(|g| Body::gem(g.id)),
        );
    }

    session.contacts.update(touching)
}

/// Separate the skater from a solid box along the contact normal
fn push_out(skater: &mut Skater, normal: Vec2, penetration: f32, elapsed_frames: f32, spin: f32) {
    if penetration <= 0.0 {
        return;
    }
    skater.pos += normal * penetration;

    if normal.y < -0.5 {
        // Head bump
        skater.vel.y = skater.vel.y.min(0.0);
    } else if normal.x.abs() > 0.5 {
        // Shoved by a step: the board stops, the body keeps going
        skater.vel.x = 0.0;
        skater.angular_vel += spin * elapsed_frames * -normal.x;
    }
}
