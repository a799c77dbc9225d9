//! Sound cues
//!
//! The simulation never plays audio; it raises events, and each event maps
//! to at most one fire-and-forget cue for whatever sink the platform has.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Skater pops a jump
    Jump,
    /// Hard landing with sparks
    Land,
    /// Gem collected
    Gem,
    /// Run ended
    Death,
    /// Background loop starts
    MusicStart,
    /// Background loop stops
    MusicStop,
}

impl SoundEffect {
    /// Cue for an event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Jumped => Some(SoundEffect::Jump),
            GameEvent::Sparks { .. } => Some(SoundEffect::Land),
            GameEvent::GemCollected { .. } => Some(SoundEffect::Gem),
            GameEvent::Died { .. } => Some(SoundEffect::Death),
            GameEvent::GameStarted { .. } => Some(SoundEffect::MusicStart),
            GameEvent::GameOver { .. } => Some(SoundEffect::MusicStop),
            _ => None,
        }
    }
}

/// Plays cues
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Discards every cue
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Logs cues instead of playing them (headless runs)
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("♪ {:?}", effect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::DeathCause;

    #[test]
    fn test_cues() {
        assert_eq!(SoundEffect::for_event(&GameEvent::Jumped), Some(SoundEffect::Jump));
        assert_eq!(
            SoundEffect::for_event(&GameEvent::Died {
                cause: DeathCause::OffScreen
            }),
            Some(SoundEffect::Death)
        );
        assert_eq!(SoundEffect::for_event(&GameEvent::BrickRemoved { id: 1 }), None);
    }
}
