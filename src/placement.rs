//! Random placement of items on free board cells.

use rand::Rng;

use crate::entities::Position;

/// Pick a uniformly random cell that is not in `exclude`.
///
/// Rejection sampling first; if that keeps missing (a crowded board) the
/// free cells are enumerated and one is chosen directly. Returns `None` only
/// when every cell is excluded.
pub fn random_free_cell(
    rng: &mut impl Rng,
    cols: i32,
    rows: i32,
    exclude: &[Position],
) -> Option<Position> {
    if cols <= 0 || rows <= 0 {
        return None;
    }

    let attempts = (cols * rows) as usize * 4;
    for _ in 0..attempts {
        let cell = Position::new(rng.gen_range(0..cols), rng.gen_range(0..rows));
        if !exclude.contains(&cell) {
            return Some(cell);
        }
    }

    let free: Vec<Position> = (0..rows)
        .flat_map(|row| (0..cols).map(move |col| Position::new(col, row)))
        .filter(|cell| !exclude.contains(cell))
        .collect();
    if free.is_empty() {
        log::debug!("no free cell on a {}x{} board", cols, rows);
        return None;
    }
    Some(free[rng.gen_range(0..free.len())])
}
