use rand::rngs::StdRng;
use rand::SeedableRng;

use snake_game::entities::Position;
use snake_game::placement::random_free_cell;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn free_cell_is_in_bounds() {
    let mut rng = seeded_rng();
    for _ in 0..500 {
        let cell = random_free_cell(&mut rng, 7, 4, &[]).expect("board is empty");
        assert!(cell.in_bounds(7, 4));
    }
}

#[test]
fn free_cell_avoids_excluded() {
    let exclude: Vec<Position> = (0..5).map(|c| Position::new(c, 2)).collect();
    let mut rng = seeded_rng();
    for _ in 0..500 {
        let cell = random_free_cell(&mut rng, 5, 5, &exclude).expect("room left");
        assert!(!exclude.contains(&cell));
    }
}

#[test]
fn crowded_board_finds_last_cell() {
    let last = Position::new(2, 1);
    let exclude: Vec<Position> = (0..3)
        .flat_map(|row| (0..3).map(move |col| Position::new(col, row)))
        .filter(|&p| p != last)
        .collect();
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(random_free_cell(&mut rng, 3, 3, &exclude), Some(last));
    }
}

#[test]
fn full_board_has_no_cell() {
    let exclude = [Position::new(0, 0), Position::new(1, 0)];
    assert_eq!(random_free_cell(&mut seeded_rng(), 2, 1, &exclude), None);
}

#[test]
fn empty_board_has_no_cell() {
    assert_eq!(random_free_cell(&mut seeded_rng(), 0, 5, &[]), None);
}

#[test]
fn every_free_cell_is_reachable() {
    let mut seen = std::collections::HashSet::new();
    let mut rng = seeded_rng();
    for _ in 0..2000 {
        seen.extend(random_free_cell(&mut rng, 4, 4, &[Position::new(0, 0)]));
    }
    assert_eq!(seen.len(), 15);
}
