//! Bonus gems floating above track gaps

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::state::{EntityIds, GameEvent};

/// A collectible gem
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gem {
    pub id: u32,
    pub pos: Vec2,
}

/// All live gems, in spawn order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GemField {
    pub gems: Vec<Gem>,
    pub gem_size: Vec2,
}

impl GemField {
    pub fn new(gem_size: Vec2) -> Self {
        Self {
            gems: Vec::new(),
            gem_size,
        }
    }

    pub fn spawn(&mut self, pos: Vec2, ids: &mut EntityIds, events: &mut Vec<GameEvent>) -> u32 {
        let id = ids.next_id();
        self.gems.push(Gem { id, pos });
        events.push(GameEvent::GemSpawned { id, pos });
        log::debug!("Gem {id} spawned at ({:.0}, {:.0})", pos.x, pos.y);
        id
    }

    /// Scroll left with the track and retire gems past the left edge
    pub fn advance(&mut self, scroll: f32, events: &mut Vec<GameEvent>) {
        self.gems.retain_mut(|gem| {
            gem.pos.x -= scroll;
            if gem.pos.x < 0.0 {
                events.push(GameEvent::GemRemoved { id: gem.id });
                false
            } else {
                true
            }
        });
    }

    /// Remove a gem. Returns false if it was already gone.
    pub fn collect(&mut self, id: u32, events: &mut Vec<GameEvent>) -> bool {
        match self.gems.iter().position(|g| g.id == id) {
            Some(index) => {
                self.gems.remove(index);
                events.push(GameEvent::GemRemoved { id });
                true
            }
            None => false,
        }
    }

    /// Drop every gem (session reset)
    pub fn clear(&mut self, events: &mut Vec<GameEvent>) {
        for gem in self.gems.drain(..) {
            events.push(GameEvent::GemRemoved { id: gem.id });
        }
    }

    pub fn bounds(&self, gem: &Gem) -> Aabb {
        Aabb::new(gem.pos, self.gem_size)
    }

    pub fn len(&self) -> usize {
        self.gems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gems.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_with(xs: &[f32]) -> (GemField, EntityIds, Vec<GameEvent>) {
        let mut field = GemField::new(Vec2::splat(32.0));
        let mut ids = EntityIds::default();
        let mut events = Vec::new();
        for &x in xs {
            field.spawn(Vec2::new(x, 200.0), &mut ids, &mut events);
        }
        (field, ids, events)
    }

    #[test]
    fn test_advance_scrolls_and_retires() {
        let (mut field, _, mut events) = field_with(&[5.0, 300.0]);
        events.clear();
        field.advance(10.0, &mut events);
        assert_eq!(field.len(), 1);
        assert_eq!(field.gems[0].pos.x, 290.0);
        assert!(matches!(events.as_slice(), [GameEvent::GemRemoved { .. }]));
    }

    #[test]
    fn test_collect_is_idempotent() {
        let (mut field, _, mut events) = field_with(&[300.0]);
        let id = field.gems[0].id;
        assert!(field.collect(id, &mut events));
        assert!(!field.collect(id, &mut events));
        assert!(field.is_empty());
    }

    #[test]
    fn test_clear_reports_removals() {
        let (mut field, _, mut events) = field_with(&[100.0, 200.0, 300.0]);
        events.clear();
        field.clear(&mut events);
        assert!(field.is_empty());
        assert_eq!(events.len(), 3);
    }
}
