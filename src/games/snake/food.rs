use std::collections::HashSet;

use crate::games::SessionRng;

use super::grid::GridSize;
use super::types::Point;

/// Samples uniformly over the grid until an unoccupied cell turns up or
/// `max_attempts` draws have been spent. On exhaustion the last sample is
/// returned even if occupied; a grid with no free cell is the host's call
/// to make, not a placement failure.
pub fn place_food(
    grid: GridSize,
    occupied: &HashSet<Point>,
    max_attempts: u32,
    rng: &mut SessionRng,
) -> Point {
    let mut attempts = 0;

    loop {
        let candidate = Point::new(
            rng.random_range(0..grid.width),
            rng.random_range(0..grid.height),
        );
        attempts += 1;

        if !occupied.contains(&candidate) || attempts >= max_attempts {
            return candidate;
        }
    }
}
