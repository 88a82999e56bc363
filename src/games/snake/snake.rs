use std::collections::{HashSet, VecDeque};

use super::grid::GridSize;
use super::types::{Direction, MoveOutcome, MoveRecord, Point, SnakeState};

/// Single-snake aggregate: head, travel direction, buffered direction
/// change and the bounded move history that makes up the body. Mutated
/// only through `request_direction` and `advance`, both no-ops once dead.
#[derive(Clone, Debug)]
pub struct Snake {
    head: Point,
    direction: Direction,
    pending_direction: Option<Direction>,
    body_length: usize,
    history: VecDeque<MoveRecord>,
    state: SnakeState,
}

impl Snake {
    pub fn new(start_position: Point, start_direction: Direction) -> Self {
        Self {
            head: start_position,
            direction: start_direction,
            pending_direction: None,
            body_length: 0,
            history: VecDeque::new(),
            state: SnakeState::Alive,
        }
    }

    pub fn head(&self) -> Point {
        self.head
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn body_length(&self) -> usize {
        self.body_length
    }

    pub fn state(&self) -> SnakeState {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state == SnakeState::Alive
    }

    /// Retained body records, newest first.
    pub fn body(&self) -> &VecDeque<MoveRecord> {
        &self.history
    }

    /// Reversals are judged against the direction in effect before any
    /// buffered change applies; a rejected request leaves an earlier
    /// accepted one in place.
    pub fn request_direction(&mut self, direction: Direction) {
        if !self.is_alive() {
            return;
        }
        if direction.is_opposite(&self.direction) {
            return;
        }

        self.pending_direction = Some(direction);
    }

    /// One tick: apply the buffered direction, record the vacated head
    /// cell, step and wrap, grow on food, trim the history, then check the
    /// new head against the retained cells. The trim runs before the
    /// collision check, so a cell freed this very tick is safe to enter;
    /// eating never cancels a same-tick collision, `Died` wins that tick.
    pub fn advance(&mut self, grid: GridSize, food_position: Point) -> Option<MoveOutcome> {
        if !self.is_alive() {
            return None;
        }

        if let Some(pending) = self.pending_direction.take() {
            self.direction = pending;
        }

        let previous_direction = self
            .history
            .front()
            .map_or(self.direction, |record| record.current_direction);
        self.history.push_front(MoveRecord {
            position: self.head,
            current_direction: self.direction,
            previous_direction,
        });

        self.head = grid.step(self.head, self.direction);

        let ate = self.head == food_position;
        if ate {
            self.body_length += 1;
        }

        self.history.truncate(self.body_length);

        if self.history.iter().any(|record| record.position == self.head) {
            self.state = SnakeState::Dead;
            return Some(MoveOutcome::Died { position: self.head });
        }

        if ate {
            return Some(MoveOutcome::AteFood {
                position: self.head,
                occupied_positions: self.occupied_positions(),
            });
        }

        Some(MoveOutcome::Moved {
            position: self.head,
            direction: self.direction,
        })
    }

    pub fn occupied_positions(&self) -> HashSet<Point> {
        let mut positions: HashSet<Point> =
            self.history.iter().map(|record| record.position).collect();
        positions.insert(self.head);
        positions
    }
}
