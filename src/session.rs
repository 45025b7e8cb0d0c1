//! One running game plus its visual effects.
//!
//! The session is the only owner of the simulation state and the effect
//! system. The presentation layer talks to it through [`Command`]s and reads
//! it back through [`GameSession::snapshot`]; the scheduler drives its two
//! clocks.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::compute;
use crate::config::GameConfig;
use crate::effects::{AnimationPhases, EffectSystem};
use crate::entities::{Direction, GamePhase, GameState, Spawn};
use crate::view::Snapshot;

/// Player intent, already translated from keys or buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    TogglePause,
    Restart,
}

pub struct GameSession<R: Rng = StdRng> {
    state: GameState,
    effects: EffectSystem,
    animation_frame: u64,
    rng: R,
}

impl GameSession<StdRng> {
    /// A session seeded from OS entropy.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> GameSession<R> {
    pub fn with_rng(config: GameConfig, mut rng: R) -> Self {
        let state = compute::init_state(config, 0, &mut rng);
        Self::from_state(state, rng)
    }

    /// Resume from an existing game state with no live effects.
    pub fn from_state(state: GameState, rng: R) -> Self {
        Self {
            state,
            effects: EffectSystem::new(),
            animation_frame: 0,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn effects(&self) -> &EffectSystem {
        &self.effects
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn animation_frame(&self) -> u64 {
        self.animation_frame
    }

    pub fn config(&self) -> &GameConfig {
        &self.state.config
    }

    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Turn(direction) => {
                self.state = compute::set_direction(&self.state, direction);
            }
            Command::TogglePause => {
                self.state = compute::toggle_pause(&self.state);
            }
            Command::Restart => {
                let (state, spawns) = compute::restart(&self.state, &mut self.rng);
                self.state = state;
                // Old effects go away before the new-game burst is added.
                self.effects.clear();
                self.feed(spawns);
            }
        }
    }

    /// One game-clock firing.
    pub fn game_tick(&mut self) {
        let (state, spawns) = compute::step(&self.state, &mut self.rng);
        self.state = state;
        self.feed(spawns);
    }

    /// One animation-clock firing.
    pub fn animation_tick(&mut self) {
        self.effects.advance();
        self.animation_frame += 1;
    }

    pub fn effective_interval(&self) -> Duration {
        compute::effective_interval(&self.state)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(
            &self.state,
            &self.effects,
            AnimationPhases::at(self.animation_frame),
        )
    }

    fn feed(&mut self, spawns: Vec<Spawn>) {
        for spawn in spawns {
            self.effects.apply(&mut self.rng, spawn);
        }
    }
}
