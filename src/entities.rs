//! All game entity types: pure data, no logic.

use std::collections::VecDeque;

use glam::Vec2;

use crate::config::GameConfig;

// ── Grid ──────────────────────────────────────────────────────────────────────

/// A board cell. `0 <= col < cols`, `0 <= row < rows` while the game is live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub col: i32,
    pub row: i32,
}

impl Position {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The neighbouring cell one step in `direction`, unbounded.
    pub fn stepped(self, direction: Direction) -> Self {
        let (dc, dr) = direction.delta();
        Self::new(self.col + dc, self.row + dr)
    }

    pub fn in_bounds(self, cols: i32, rows: i32) -> bool {
        (0..cols).contains(&self.col) && (0..rows).contains(&self.row)
    }

    /// Wrap both coordinates into `[0, cols) × [0, rows)`.
    pub fn wrapped(self, cols: i32, rows: i32) -> Self {
        Self::new(self.col.rem_euclid(cols), self.row.rem_euclid(rows))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector `(dcol, drow)`; rows grow downward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

// ── Colour ────────────────────────────────────────────────────────────────────

/// 24-bit colour, renderer-agnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn hex(value: u32) -> Self {
        Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// Multiply every channel by `factor` (clamped to `0.0..=1.0`).
    pub fn scaled(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Rgb(
            (self.0 as f32 * f) as u8,
            (self.1 as f32 * f) as u8,
            (self.2 as f32 * f) as u8,
        )
    }
}

// ── Power-ups ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Walls wrap and self-collision is ignored for `effect_ticks` ticks.
    Invincible,
    /// Halves the tick interval and doubles food points for `effect_ticks` ticks.
    SpeedBoost,
    /// Instant flat bonus on pickup. Never "active" over time.
    DoublePoints,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::Invincible,
        PowerUpKind::SpeedBoost,
        PowerUpKind::DoublePoints,
    ];
}

/// A power-up lying on the board, waiting to be picked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerUp {
    pub position: Position,
    pub kind: PowerUpKind,
    /// Game ticks until it disappears on its own.
    pub ticks_remaining: u32,
}

// ── Phase ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    Paused,
    Over,
}

// ── Visual effects ────────────────────────────────────────────────────────────

/// A decaying dot. Coordinates are screen units (`cell_size` per cell).
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Animation frames left; removed at zero.
    pub life: u32,
    pub color: Rgb,
    pub size: f32,
}

/// Floating label drifting upward, e.g. "+10".
#[derive(Clone, Debug)]
pub struct TextAnimation {
    pub text: String,
    pub pos: Vec2,
    pub vy: f32,
    pub life: u32,
    pub color: Rgb,
    pub base_size: f32,
}

/// A request from the game logic to the effect system. The game never reads
/// effects back.
#[derive(Clone, Debug, PartialEq)]
pub enum Spawn {
    Burst { at: Vec2, color: Rgb, count: usize },
    Text { text: String, at: Vec2, color: Rgb },
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything the simulation owns. Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Head first.
    pub snake: VecDeque<Position>,
    /// Direction used by the last step.
    pub direction: Direction,
    /// Direction the next step will use.
    pub pending_direction: Direction,
    pub food: Position,
    pub power_up: Option<PowerUp>,
    pub invincible_ticks: u32,
    pub speed_boost_ticks: u32,
    pub score: u32,
    /// Best score since process start; survives restarts.
    pub high_score: u32,
    /// High score when this game started.
    pub best_before: u32,
    pub phase: GamePhase,
    /// Steps taken in the current game.
    pub ticks: u64,
    pub config: GameConfig,
}

impl GameState {
    pub fn head(&self) -> Position {
        // The snake is never empty.
        self.snake[0]
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible_ticks > 0
    }

    /// This game beat every earlier one (a tie does not count).
    pub fn is_new_best(&self) -> bool {
        self.score > self.best_before
    }

    pub fn is_speed_boosted(&self) -> bool {
        self.speed_boost_ticks > 0
    }
}
