use super::types::{Direction, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    pub width: i32,
    pub height: i32,
}

impl GridSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Point) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }

    /// Re-enters from the opposite edge. A single wrap step per axis is
    /// enough: per-tick displacement is always exactly one cell.
    pub fn wrap(&self, position: Point) -> Point {
        let mut wrapped = position;

        if wrapped.x < 0 {
            wrapped.x = self.width - 1;
        } else if wrapped.x >= self.width {
            wrapped.x = 0;
        }

        if wrapped.y < 0 {
            wrapped.y = self.height - 1;
        } else if wrapped.y >= self.height {
            wrapped.y = 0;
        }

        wrapped
    }

    pub fn step(&self, from: Point, direction: Direction) -> Point {
        let (dx, dy) = direction.vector();
        self.wrap(Point::new(from.x + dx, from.y + dy))
    }
}
