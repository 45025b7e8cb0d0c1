//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`. Visual effects are not touched here: functions that want
//! particles or labels return them as [`Spawn`] requests for the caller to
//! hand to the effect system.

use std::collections::VecDeque;
use std::time::Duration;

use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Direction, GamePhase, GameState, Position, PowerUp, PowerUpKind, Rgb, Spawn};
use crate::placement::random_free_cell;

// ── Effect palette ───────────────────────────────────────────────────────────

const FOOD_BURST: (Rgb, usize) = (Rgb::hex(0xff4444), 8);
const FOOD_TEXT: Rgb = Rgb::hex(0xffff00);
const CRASH_BURST: (Rgb, usize) = (Rgb::hex(0xff0000), 20);
const NEW_GAME_BURST: (Rgb, usize) = (Rgb::hex(0x00ff88), 15);

/// Pickup colour, particle count and label for each power-up.
pub fn pickup_effect(kind: PowerUpKind, config: &GameConfig) -> (Rgb, usize, String) {
    match kind {
        PowerUpKind::Invincible => (Rgb::hex(0xff00ff), 12, "INVINCIBLE!".to_string()),
        PowerUpKind::SpeedBoost => (Rgb::hex(0xffff00), 12, "SPEED BOOST!".to_string()),
        PowerUpKind::DoublePoints => (
            Rgb::hex(0x00ffff),
            15,
            format!("+{} BONUS!", config.bonus_points),
        ),
    }
}

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Screen-space centre of a cell.
pub fn cell_center(config: &GameConfig, cell: Position) -> Vec2 {
    let half = config.cell_size / 2.0;
    Vec2::new(
        cell.col as f32 * config.cell_size + half,
        cell.row as f32 * config.cell_size + half,
    )
}

pub fn board_center(config: &GameConfig) -> Vec2 {
    Vec2::new(
        config.cols as f32 * config.cell_size / 2.0,
        config.rows as f32 * config.cell_size / 2.0,
    )
}

fn burst(at: Vec2, (color, count): (Rgb, usize)) -> Spawn {
    Spawn::Burst { at, color, count }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh game: one-cell snake in the middle heading right.
/// `high_score` carries over from earlier games in this process.
pub fn init_state(config: GameConfig, high_score: u32, rng: &mut impl Rng) -> GameState {
    let start = config.start_cell();
    let food = random_free_cell(rng, config.cols, config.rows, &[start])
        .unwrap_or(start);
    GameState {
        snake: VecDeque::from([start]),
        direction: Direction::Right,
        pending_direction: Direction::Right,
        food,
        power_up: None,
        invincible_ticks: 0,
        speed_boost_ticks: 0,
        score: 0,
        high_score,
        best_before: high_score,
        phase: GamePhase::Running,
        ticks: 0,
        config,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Queue a turn for the next step. Ignored unless running, and ignored when it
/// would reverse the direction of the last step.
pub fn set_direction(state: &GameState, requested: Direction) -> GameState {
    if state.phase != GamePhase::Running || requested.is_opposite(state.direction) {
        return state.clone();
    }
    GameState {
        pending_direction: requested,
        ..state.clone()
    }
}

pub fn toggle_pause(state: &GameState) -> GameState {
    let phase = match state.phase {
        GamePhase::Running => GamePhase::Paused,
        GamePhase::Paused => GamePhase::Running,
        GamePhase::Over => return state.clone(),
    };
    log::info!("game {:?}", phase);
    GameState {
        phase,
        ..state.clone()
    }
}

/// Start over from any phase. The caller must drop all live effects before
/// applying the returned spawns.
pub fn restart(state: &GameState, rng: &mut impl Rng) -> (GameState, Vec<Spawn>) {
    let high_score = state.high_score.max(state.score);
    let next = init_state(state.config, high_score, rng);
    log::info!("new game (high score {})", high_score);

    let center = board_center(&state.config);
    let spawns = vec![
        burst(center, NEW_GAME_BURST),
        Spawn::Text {
            text: "NEW GAME!".to_string(),
            at: center,
            color: NEW_GAME_BURST.0,
        },
    ];
    (next, spawns)
}

// ── Clock ────────────────────────────────────────────────────────────────────

/// Current game-tick period: halved (with a floor) while SpeedBoost is active.
pub fn effective_interval(state: &GameState) -> Duration {
    let cfg = &state.config;
    if state.is_speed_boosted() {
        Duration::from_millis((cfg.base_interval_ms / 2).max(cfg.min_interval_ms))
    } else {
        cfg.base_interval()
    }
}

// ── Per-tick step (nearly pure, RNG is injected) ────────────────────────────

/// Advance the simulation by one game tick. A no-op unless running.
pub fn step(state: &GameState, rng: &mut impl Rng) -> (GameState, Vec<Spawn>) {
    if state.phase != GamePhase::Running {
        return (state.clone(), Vec::new());
    }

    let cfg = state.config;
    let mut next = state.clone();
    let mut spawns = Vec::new();
    next.direction = state.pending_direction;
    next.ticks += 1;

    // ── 1. Walls ─────────────────────────────────────────────────────────────
    let mut new_head = state.head().stepped(next.direction);
    if !new_head.in_bounds(cfg.cols, cfg.rows) {
        if !state.is_invincible() {
            return crash(next, spawns, "wall");
        }
        new_head = new_head.wrapped(cfg.cols, cfg.rows);
    }

    // ── 2. Self-collision ────────────────────────────────────────────────────
    if !state.is_invincible() && state.snake.contains(&new_head) {
        return crash(next, spawns, "self");
    }

    next.snake.push_front(new_head);

    // ── 3. Food ──────────────────────────────────────────────────────────────
    if new_head == state.food {
        let points = if state.is_speed_boosted() {
            cfg.food_points * 2
        } else {
            cfg.food_points
        };
        next.score += points;

        let at = cell_center(&cfg, state.food);
        spawns.push(burst(at, FOOD_BURST));
        spawns.push(Spawn::Text {
            text: format!("+{}", points),
            at,
            color: FOOD_TEXT,
        });

        let mut occupied: Vec<Position> = next.snake.iter().copied().collect();
        occupied.extend(next.power_up.map(|p| p.position));
        let mut food = random_free_cell(rng, cfg.cols, cfg.rows, &occupied);
        if food.is_none() && next.power_up.is_some() {
            // Only the power-up's cell is left: the food takes it over.
            let snake_cells = &occupied[..next.snake.len()];
            food = random_free_cell(rng, cfg.cols, cfg.rows, snake_cells);
            if food.is_some() {
                log::debug!("board crowded, food replaces the power-up");
                next.power_up = None;
            }
        }
        match food {
            Some(cell) => next.food = cell,
            None => {
                // Snake covers every cell: nothing left to eat.
                next.high_score = next.high_score.max(next.score);
                return crash(next, spawns, "board full");
            }
        }

        if rng.gen_bool(cfg.power_up_chance) {
            next.power_up = spawn_power_up(&next, rng).or(next.power_up);
        }
    } else {
        next.snake.pop_back();
    }

    // ── 4. Power-up pickup ───────────────────────────────────────────────────
    if let Some(power_up) = next.power_up.filter(|p| p.position == new_head) {
        let (color, count, label) = pickup_effect(power_up.kind, &cfg);
        match power_up.kind {
            PowerUpKind::Invincible => next.invincible_ticks = cfg.power_up_effect_ticks,
            PowerUpKind::SpeedBoost => next.speed_boost_ticks = cfg.power_up_effect_ticks,
            PowerUpKind::DoublePoints => next.score += cfg.bonus_points,
        }
        log::debug!("picked up {:?} at {:?}", power_up.kind, power_up.position);

        let at = cell_center(&cfg, power_up.position);
        spawns.push(Spawn::Burst { at, color, count });
        spawns.push(Spawn::Text { text: label, at, color });
        next.power_up = None;
    }

    // ── 5. Timers ────────────────────────────────────────────────────────────
    next.power_up = next.power_up.and_then(|p| {
        let ticks_remaining = p.ticks_remaining.saturating_sub(1);
        (ticks_remaining > 0).then_some(PowerUp { ticks_remaining, ..p })
    });
    next.invincible_ticks = next.invincible_ticks.saturating_sub(1);
    next.speed_boost_ticks = next.speed_boost_ticks.saturating_sub(1);

    next.high_score = next.high_score.max(next.score);
    (next, spawns)
}

fn spawn_power_up(state: &GameState, rng: &mut impl Rng) -> Option<PowerUp> {
    let cfg = &state.config;
    let mut occupied: Vec<Position> = state.snake.iter().copied().collect();
    occupied.push(state.food);
    let position = random_free_cell(rng, cfg.cols, cfg.rows, &occupied)?;
    let kind = *PowerUpKind::ALL.choose(rng)?;
    log::debug!("spawned {:?} at {:?}", kind, position);
    Some(PowerUp {
        position,
        kind,
        ticks_remaining: cfg.power_up_lifetime,
    })
}

/// End the game, with an explosion where the head was.
fn crash(mut state: GameState, mut spawns: Vec<Spawn>, cause: &str) -> (GameState, Vec<Spawn>) {
    state.phase = GamePhase::Over;
    spawns.push(burst(cell_center(&state.config, state.head()), CRASH_BURST));
    log::info!(
        "game over ({}) score={} length={}",
        cause,
        state.score,
        state.snake.len()
    );
    (state, spawns)
}
