use crate::games::SessionRng;
use crate::log;

use super::food::place_food;
use super::grid::GridSize;
use super::score::ScoreBoard;
use super::settings::SnakeSessionSettings;
use super::snake::Snake;
use super::types::{Direction, MoveOutcome, Point};

/// The snake, the current food cell and the score, advanced one tick at a
/// time. Eating feeds the score and triggers a replacement placement;
/// death latches the game over.
#[derive(Debug)]
pub struct GameState {
    snake: Snake,
    food: Point,
    score: ScoreBoard,
    grid: GridSize,
    score_per_food: u32,
    max_food_spawn_attempts: u32,
}

impl GameState {
    pub fn new(settings: &SnakeSessionSettings, high_score: u32, rng: &mut SessionRng) -> Self {
        let snake = Snake::new(settings.start_position, settings.start_direction);
        let food = place_food(
            settings.grid,
            &snake.occupied_positions(),
            settings.max_food_spawn_attempts,
            rng,
        );
        log!("food spawned at ({}, {})", food.x, food.y);

        Self {
            snake,
            food,
            score: ScoreBoard::new(high_score),
            grid: settings.grid,
            score_per_food: settings.score_per_food,
            max_food_spawn_attempts: settings.max_food_spawn_attempts,
        }
    }

    pub fn request_direction(&mut self, direction: Direction) {
        self.snake.request_direction(direction);
    }

    /// One tick. `None` once the snake is dead; ticking a finished session
    /// is an expected idle state, not an error.
    pub fn update(&mut self, rng: &mut SessionRng) -> Option<MoveOutcome> {
        let outcome = self.snake.advance(self.grid, self.food)?;

        match &outcome {
            MoveOutcome::AteFood {
                position,
                occupied_positions,
            } => {
                self.score.on_food_eaten(self.score_per_food);
                log!(
                    "snake ate food at ({}, {}), score: {}",
                    position.x,
                    position.y,
                    self.score.current()
                );

                self.food = place_food(
                    self.grid,
                    occupied_positions,
                    self.max_food_spawn_attempts,
                    rng,
                );
                log!("food spawned at ({}, {})", self.food.x, self.food.y);
            }
            MoveOutcome::Died { position } => {
                log!("snake died at ({}, {})", position.x, position.y);
            }
            MoveOutcome::Moved { .. } => {}
        }

        Some(outcome)
    }

    pub fn is_game_over(&self) -> bool {
        !self.snake.is_alive()
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings(width: i32, height: i32) -> SnakeSessionSettings {
        SnakeSessionSettings {
            grid: GridSize::new(width, height),
            start_position: Point::new(width / 2, height / 2),
            start_direction: Direction::Right,
            score_per_food: 10,
            max_food_spawn_attempts: 1000,
            move_interval: std::time::Duration::from_millis(200),
            enable_sounds: false,
        }
    }

    #[test]
    fn test_initial_food_is_off_the_snake() {
        for seed in 0..50 {
            let mut rng = SessionRng::new(seed);
            let state = GameState::new(&test_settings(5, 5), 0, &mut rng);

            assert!(!state.snake().occupied_positions().contains(&state.food()));
            assert!(state.grid().contains(state.food()));
        }
    }

    #[test]
    fn test_update_moves_the_snake() {
        let mut rng = SessionRng::new(1);
        let mut state = GameState::new(&test_settings(9, 9), 0, &mut rng);

        let before = state.snake().head();
        let outcome = state.update(&mut rng);

        assert!(outcome.is_some());
        assert_ne!(state.snake().head(), before);
    }

    #[test]
    fn test_eating_scores_and_respawns_food() {
        let mut rng = SessionRng::new(3);
        let mut state = GameState::new(&test_settings(9, 9), 0, &mut rng);

        // March the snake straight onto the food cell.
        let food = state.food();
        let mut ate = false;
        for _ in 0..64 {
            let head = state.snake().head();
            let direction = if head.x != food.x {
                if food.x > head.x { Direction::Right } else { Direction::Left }
            } else if food.y > head.y {
                Direction::Up
            } else {
                Direction::Down
            };
            state.request_direction(direction);

            match state.update(&mut rng) {
                Some(MoveOutcome::AteFood { position, .. }) => {
                    assert_eq!(position, food);
                    ate = true;
                    break;
                }
                Some(_) => {}
                None => panic!("snake died while walking to food"),
            }
        }

        assert!(ate);
        assert_eq!(state.score().current(), 10);
        assert_eq!(state.snake().body_length(), 1);
        assert_ne!(state.food(), food);
        assert!(!state.snake().occupied_positions().contains(&state.food()));
    }

    #[test]
    fn test_game_over_latches_and_updates_become_inert() {
        // 1x1 grid: the first tick wraps the head back onto its own record.
        let mut rng = SessionRng::new(7);
        let mut settings = test_settings(1, 1);
        settings.start_position = Point::new(0, 0);
        let mut state = GameState::new(&settings, 0, &mut rng);

        let outcome = state.update(&mut rng);
        assert!(matches!(outcome, Some(MoveOutcome::Died { .. })));
        assert!(state.is_game_over());

        let head = state.snake().head();
        state.request_direction(Direction::Up);
        assert_eq!(state.update(&mut rng), None);
        assert_eq!(state.snake().head(), head);
    }

    #[test]
    fn test_died_tick_does_not_score() {
        let mut rng = SessionRng::new(7);
        let mut settings = test_settings(1, 1);
        settings.start_position = Point::new(0, 0);
        let mut state = GameState::new(&settings, 0, &mut rng);

        state.update(&mut rng);

        assert_eq!(state.score().current(), 0);
    }
}
