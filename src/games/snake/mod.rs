mod food;
mod game_state;
mod grid;
mod score;
mod session;
mod settings;
mod snake;
mod types;

pub use food::place_food;
pub use game_state::GameState;
pub use grid::GridSize;
pub use score::ScoreBoard;
pub use session::{
    GameBroadcaster, GameOverSummary, SnakeSession, SnakeSessionState, SoundClip, SoundSink,
    StateUpdate,
};
pub use settings::SnakeSessionSettings;
pub use snake::Snake;
pub use types::{Direction, MoveOutcome, MoveRecord, Point, SnakeState};
