//! Session controller
//!
//! Owns the session, the random source and the high score store, and
//! drives the NotRunning → Running → NotRunning cycle:
//! - a tap while idle starts a fresh run
//! - a tap while running is a jump request for the next frame
//! - when the simulation ends a run, the best score is settled here

use anyhow::Context;
use rand_pcg::Pcg32;

use crate::highscores::HighScoreStore;
use crate::sim::{GameEvent, RandomSource, Session, TickInput, seeded, tick};
use crate::tuning::Tuning;

pub struct Game<S: HighScoreStore, R: RandomSource = Pcg32> {
    session: Session,
    store: S,
    rng: R,
    input: TickInput,
}

impl<S: HighScoreStore> Game<S, Pcg32> {
    /// Game with a seeded PCG generator
    pub fn with_seed(tuning: Tuning, store: S, seed: u64) -> anyhow::Result<Self> {
        Self::new(tuning, store, seeded(seed))
    }
}

impl<S: HighScoreStore, R: RandomSource> Game<S, R> {
    /// Fails if `tuning` does not pass [`Tuning::validate`]
    pub fn new(tuning: Tuning, store: S, rng: R) -> anyhow::Result<Self> {
        tuning.validate().context("invalid tuning")?;
        let mut session = Session::new(tuning);
        session.events.push(GameEvent::ShowStartPrompt);
        Ok(Self {
            session,
            store,
            rng,
            input: TickInput::default(),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    /// The single player input
    pub fn tap(&mut self) {
        if self.session.is_running() {
            self.input.jump = true;
        } else {
            self.start_game();
        }
    }

    /// Reset the session and begin a run
    pub fn start_game(&mut self) {
        if self.session.is_running() {
            return;
        }
        self.session.start();
        self.input = TickInput::default();
        let high_score = self.read_high_score();
        log::info!("Run started (high score {})", high_score);
        self.session.events.push(GameEvent::GameStarted { high_score });
    }

    /// One display refresh at timestamp `now` (seconds)
    pub fn update(&mut self, now: f64) {
        if !self.session.is_running() {
            return;
        }
        // One-shot inputs are consumed by the frame that sees them
        let input = std::mem::take(&mut self.input);
        tick(&mut self.session, &input, now, &mut self.rng);

        if !self.session.is_running() {
            self.finish_run();
        }
    }

    /// Take pending notifications for the collaborators
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.session.drain_events()
    }

    fn finish_run(&mut self) {
        let score = self.session.score.score;
        let stored = self.read_high_score();
        let new_record = score > stored;
        if new_record {
            if let Err(e) = self.store.set_high_score(score) {
                log::warn!("Could not save high score {}: {:#}", score, e);
            }
        }
        log::info!(
            "Game over: score {} (best {}{})",
            score,
            stored.max(score),
            if new_record { ", new record" } else { "" }
        );
        self.session.events.push(GameEvent::GameOver {
            score,
            high_score: stored.max(score),
            new_record,
        });
    }

    fn read_high_score(&self) -> u64 {
        self.store.high_score().unwrap_or_else(|e| {
            log::warn!("Could not read high score, assuming 0: {:#}", e);
            0
        })
    }
}
