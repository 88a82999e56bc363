use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::games::snake::Direction;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_yaml_ng::Error),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(reason) => write!(f, "Invalid config: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_yaml_ng::Error> for ConfigError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Session-start configuration. Hosts load it from a YAML file; a missing
/// file means defaults, a present but invalid one is an error, never a
/// silent fallback.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    pub start_x: i32,
    pub start_y: i32,
    pub start_direction: Direction,
    pub move_interval_ms: u64,
    pub score_per_food: u32,
    pub max_food_spawn_attempts: u32,
    #[serde(default = "default_enable_sounds")]
    pub enable_sounds: bool,
}

fn default_enable_sounds() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            start_x: 10,
            start_y: 10,
            start_direction: Direction::Right,
            move_interval_ms: 200,
            score_per_food: 10,
            max_food_spawn_attempts: 1000,
            enable_sounds: true,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::load_from_str(&content),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_yaml_ng::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width < 1 || self.grid_height < 1 {
            return Err(ConfigError::Invalid(
                "grid dimensions must be at least 1x1".to_string(),
            ));
        }
        if !(0..self.grid_width).contains(&self.start_x)
            || !(0..self.grid_height).contains(&self.start_y)
        {
            return Err(ConfigError::Invalid(
                "start position must lie inside the grid".to_string(),
            ));
        }
        if self.move_interval_ms < 50 || self.move_interval_ms > 5000 {
            return Err(ConfigError::Invalid(
                "move_interval_ms must be between 50 and 5000".to_string(),
            ));
        }
        if self.score_per_food == 0 {
            return Err(ConfigError::Invalid(
                "score_per_food must be greater than 0".to_string(),
            ));
        }
        if self.max_food_spawn_attempts == 0 {
            return Err(ConfigError::Invalid(
                "max_food_spawn_attempts must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
