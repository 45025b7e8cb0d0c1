//! Read-only picture of a session for the presentation layer.

use crate::effects::{AnimationPhases, EffectSystem};
use crate::entities::{GamePhase, GameState, Particle, Position, PowerUpKind, TextAnimation};

/// Everything a renderer needs for one animation frame.
#[derive(Clone, Debug)]
pub struct Snapshot<'a> {
    /// Head first.
    pub snake: Vec<Position>,
    pub food: Position,
    pub power_up: Option<(Position, PowerUpKind)>,
    pub phases: AnimationPhases,
    pub score: u32,
    pub high_score: u32,
    pub new_best: bool,
    pub phase: GamePhase,
    pub invincible: bool,
    pub particles: &'a [Particle],
    pub texts: &'a [TextAnimation],
    pub status: String,
    pub cols: i32,
    pub rows: i32,
    pub cell_size: f32,
}

impl<'a> Snapshot<'a> {
    pub fn new(state: &GameState, effects: &'a EffectSystem, phases: AnimationPhases) -> Self {
        Self {
            snake: state.snake.iter().copied().collect(),
            food: state.food,
            power_up: state.power_up.map(|p| (p.position, p.kind)),
            phases,
            score: state.score,
            high_score: state.high_score,
            new_best: state.is_new_best(),
            phase: state.phase,
            invincible: state.is_invincible(),
            particles: effects.particles(),
            texts: effects.texts(),
            status: status_line(state),
            cols: state.config.cols,
            rows: state.config.rows,
            cell_size: state.config.cell_size,
        }
    }
}

/// One-line status shown under the board.
pub fn status_line(state: &GameState) -> String {
    let seconds = |ticks: u32| ticks / state.config.ticks_per_second.max(1);
    match state.phase {
        GamePhase::Over => "Game Over! Press R to restart".to_string(),
        GamePhase::Paused => "PAUSED - Press SPACE to continue".to_string(),
        GamePhase::Running if state.is_invincible() => format!(
            "INVINCIBLE! ({}s left) • Press R to restart",
            seconds(state.invincible_ticks)
        ),
        GamePhase::Running if state.is_speed_boosted() => format!(
            "SPEED BOOST! ({}s left) • Press R to restart",
            seconds(state.speed_boost_ticks)
        ),
        GamePhase::Running => "Use WASD or Arrow Keys to move • Press R to restart".to_string(),
    }
}
