pub mod config;
pub mod games;
pub mod logger;
pub mod persistence;

pub use config::{ConfigError, GameConfig};
pub use games::SessionRng;
pub use games::snake::{
    Direction, GameBroadcaster, GameOverSummary, GameState, GridSize, MoveOutcome, MoveRecord,
    Point, ScoreBoard, Snake, SnakeSession, SnakeSessionSettings, SnakeSessionState, SnakeState,
    SoundClip, SoundSink, StateUpdate,
};
pub use persistence::{PersistenceError, ScoreData, ScoreStore};
