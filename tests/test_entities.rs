use std::collections::VecDeque;

use snake_game::entities::*;
use snake_game::GameConfig;

#[test]
fn direction_opposites() {
    assert!(Direction::Up.is_opposite(Direction::Down));
    assert!(Direction::Down.is_opposite(Direction::Up));
    assert!(Direction::Left.is_opposite(Direction::Right));
    assert!(Direction::Right.is_opposite(Direction::Left));

    assert!(!Direction::Up.is_opposite(Direction::Left));
    assert!(!Direction::Right.is_opposite(Direction::Right));
}

#[test]
fn direction_delta_rows_grow_downward() {
    assert_eq!(Direction::Up.delta(), (0, -1));
    assert_eq!(Direction::Down.delta(), (0, 1));
    assert_eq!(Direction::Left.delta(), (-1, 0));
    assert_eq!(Direction::Right.delta(), (1, 0));
}

#[test]
fn position_stepped_and_bounds() {
    let p = Position::new(29, 0);
    assert_eq!(p.stepped(Direction::Right), Position::new(30, 0));
    assert!(!p.stepped(Direction::Right).in_bounds(30, 30));
    assert!(!p.stepped(Direction::Up).in_bounds(30, 30));
    assert!(p.in_bounds(30, 30));
}

#[test]
fn position_wraps_both_edges() {
    assert_eq!(Position::new(30, 5).wrapped(30, 30), Position::new(0, 5));
    assert_eq!(Position::new(-1, 5).wrapped(30, 30), Position::new(29, 5));
    assert_eq!(Position::new(4, -1).wrapped(30, 30), Position::new(4, 29));
    assert_eq!(Position::new(4, 30).wrapped(30, 30), Position::new(4, 0));
}

#[test]
fn rgb_hex_and_scale() {
    assert_eq!(Rgb::hex(0x00ff88), Rgb(0x00, 0xff, 0x88));
    assert_eq!(Rgb(200, 100, 0).scaled(0.5), Rgb(100, 50, 0));
    assert_eq!(Rgb(10, 10, 10).scaled(2.0), Rgb(10, 10, 10)); // clamped
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        snake: VecDeque::from([Position::new(15, 15)]),
        direction: Direction::Right,
        pending_direction: Direction::Right,
        food: Position::new(1, 1),
        power_up: None,
        invincible_ticks: 0,
        speed_boost_ticks: 0,
        score: 0,
        high_score: 0,
        best_before: 0,
        phase: GamePhase::Running,
        ticks: 0,
        config: GameConfig::default(),
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.snake.push_front(Position::new(16, 15));
    cloned.score = 999;

    assert_eq!(original.snake.len(), 1);
    assert_eq!(original.score, 0);
    assert_eq!(original.head(), Position::new(15, 15));
}
