//! Contact categories and the reactions to contact-begin events
//!
//! Geometry lives in the physics world; this module only knows which pairs
//! matter and what happens when they start touching.

use std::collections::HashSet;

use super::state::{GameEvent, Session};

/// Physics categories as bitmasks
pub mod category {
    pub const SKATER: u32 = 1 << 0;
    pub const BRICK: u32 = 1 << 1;
    pub const GEM: u32 = 1 << 2;
}

/// Categories the skater is physically blocked by
pub const SKATER_COLLISION_MASK: u32 = category::BRICK;
/// Categories the skater reports contacts with
pub const SKATER_CONTACT_MASK: u32 = category::BRICK | category::GEM;

/// A body taking part in a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Body {
    /// One of the `category` bits
    pub category: u32,
    /// Entity id (0 for the skater)
    pub id: u32,
}

impl Body {
    pub const SKATER: Body = Body {
        category: category::SKATER,
        id: 0,
    };

    pub fn brick(id: u32) -> Self {
        Self {
            category: category::BRICK,
            id,
        }
    }

    pub fn gem(id: u32) -> Self {
        Self {
            category: category::GEM,
            id,
        }
    }
}

/// Two bodies started touching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEvent {
    pub a: Body,
    pub b: Body,
}

impl ContactEvent {
    pub fn new(a: Body, b: Body) -> Self {
        Self { a, b }
    }

    /// The non-skater body, if the skater is one side of the pair
    pub fn other_than_skater(&self) -> Option<Body> {
        if self.a.category == category::SKATER {
            Some(self.b)
        } else if self.b.category == category::SKATER {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Turns per-frame touching sets into contact-begin events
#[derive(Debug, Clone, Default)]
pub struct ContactTracker {
    touching: HashSet<Body>,
}

impl ContactTracker {
    /// Record this frame's touching bodies; returns the ones that just began
    pub fn update(&mut self, now_touching: Vec<Body>) -> Vec<ContactEvent> {
        let began: Vec<ContactEvent> = now_touching
            .iter()
            .filter(|body| !self.touching.contains(*body))
            .map(|body| ContactEvent::new(Body::SKATER, *body))
            .collect();
        self.touching = now_touching.into_iter().collect();
        began
    }

    pub fn clear(&mut self) {
        self.touching.clear();
    }
}

/// Apply the game reaction to a contact-begin event
///
/// Order of `a`/`b` does not matter. Pairs without the skater, or with a
/// category the skater does not report, are ignored.
pub fn resolve_contact(session: &mut Session, contact: &ContactEvent) {
    let Some(other) = contact.other_than_skater() else {
        return;
    };
    if other.category & SKATER_CONTACT_MASK == 0 {
        return;
    }

    match other.category {
        category::BRICK => {
            let skater = &mut session.skater;
            let impact = skater.take_impact_vy();
            if let Some(vy) = impact.filter(|vy| *vy < -session.tuning.hard_landing_speed) {
                log::debug!("Hard landing at vy {:.0}", vy);
                session.events.push(GameEvent::Sparks { pos: skater.pos });
            }
            skater.land();
        }
        category::GEM => {
            if session.gems.collect(other.id, &mut session.events) {
                session.score.add_bonus(session.tuning.gem_bonus);
                log::debug!("Gem {} collected, score {}", other.id, session.score.score);
                session.events.push(GameEvent::GemCollected {
                    id: other.id,
                    score: session.score.score,
                });
            }
        }
        _ => {}
    }
}
