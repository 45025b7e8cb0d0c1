//! Two independent self-rearming clocks driven by one external time source.
//!
//! The animation clock fires at a fixed period. The game clock reads the
//! session's effective interval after every firing, so SpeedBoost takes hold
//! on the very next tick. Each clock is re-armed from the moment it fired,
//! never at a fixed rate, so a late poll never produces a burst of catch-up
//! ticks.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::entities::GamePhase;
use crate::session::GameSession;

#[derive(Clone, Copy, Debug)]
pub struct PeriodicTimer {
    next_due: Instant,
}

impl PeriodicTimer {
    /// A timer that is due immediately.
    pub fn due_at(when: Instant) -> Self {
        Self { next_due: when }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_due
    }

    pub fn rearm(&mut self, now: Instant, period: Duration) {
        self.next_due = now + period;
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }
}

/// Which clocks fired during one [`TickScheduler::run_due`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fired {
    pub animation: bool,
    pub game: bool,
}

impl Fired {
    pub fn any(&self) -> bool {
        self.animation || self.game
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TickScheduler {
    animation: PeriodicTimer,
    game: PeriodicTimer,
}

impl TickScheduler {
    /// Both clocks fire on the first poll at or after `now`.
    pub fn start(now: Instant) -> Self {
        Self {
            animation: PeriodicTimer::due_at(now),
            game: PeriodicTimer::due_at(now),
        }
    }

    /// Fire every clock that is due at `now`, each at most once, and re-arm it.
    /// The callbacks run to completion one after the other.
    pub fn run_due<R: Rng>(&mut self, now: Instant, session: &mut GameSession<R>) -> Fired {
        let mut fired = Fired::default();

        if self.animation.is_due(now) {
            session.animation_tick();
            self.animation
                .rearm(now, session.config().animation_interval());
            fired.animation = true;
        }

        if self.game.is_due(now) {
            let period = if session.phase() == GamePhase::Over {
                session.config().game_over_interval()
            } else {
                session.game_tick();
                session.effective_interval()
            };
            log::trace!("game tick, next in {:?}", period);
            self.game.rearm(now, period);
            fired.game = true;
        }

        fired
    }

    /// The earliest moment any clock wants to fire.
    pub fn next_deadline(&self) -> Instant {
        self.animation.next_due().min(self.game.next_due())
    }

    /// How long the caller may block (e.g. waiting for input) before polling.
    pub fn time_until_next(&self, now: Instant) -> Duration {
        self.next_deadline().saturating_duration_since(now)
    }

    pub fn animation_due(&self) -> Instant {
        self.animation.next_due()
    }

    pub fn game_due(&self) -> Instant {
        self.game.next_due()
    }
}
