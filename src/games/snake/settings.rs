use std::time::Duration;

use crate::config::GameConfig;

use super::grid::GridSize;
use super::types::{Direction, Point};

/// Per-session knobs, derived from `GameConfig` once at session start.
#[derive(Clone, Debug)]
pub struct SnakeSessionSettings {
    pub grid: GridSize,
    pub start_position: Point,
    pub start_direction: Direction,
    pub score_per_food: u32,
    pub max_food_spawn_attempts: u32,
    pub move_interval: Duration,
    pub enable_sounds: bool,
}

impl From<&GameConfig> for SnakeSessionSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            grid: GridSize::new(config.grid_width, config.grid_height),
            start_position: Point::new(config.start_x, config.start_y),
            start_direction: config.start_direction,
            score_per_food: config.score_per_food,
            max_food_spawn_attempts: config.max_food_spawn_attempts,
            move_interval: Duration::from_millis(config.move_interval_ms),
            enable_sounds: config.enable_sounds,
        }
    }
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}
