use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::interval;

use crate::games::SessionRng;
use crate::log;
use crate::persistence::{ScoreData, ScoreStore};

use super::game_state::GameState;
use super::settings::SnakeSessionSettings;
use super::types::{Direction, MoveOutcome, MoveRecord, Point};

pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, update: StateUpdate) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, summary: GameOverSummary) -> impl Future<Output = ()> + Send;
}

/// Consulted only when sounds are enabled in the session settings.
pub trait SoundSink: Send + Sync + Clone + 'static {
    fn play(&self, clip: SoundClip);
}

impl SoundSink for () {
    fn play(&self, _clip: SoundClip) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundClip {
    SnakeEat,
    SnakeDie,
}

#[derive(Clone, Debug)]
pub struct StateUpdate {
    pub tick: u64,
    pub outcome: MoveOutcome,
    pub head: Point,
    pub body: Vec<MoveRecord>,
    pub food: Point,
    pub score: u32,
    pub high_score: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOverSummary {
    pub ticks: u64,
    pub score: u32,
    pub high_score: u32,
    pub new_high_score: bool,
}

#[derive(Clone)]
pub struct SnakeSessionState {
    pub game_state: Arc<Mutex<GameState>>,
    pub tick: Arc<Mutex<u64>>,
    pub rng: Arc<Mutex<SessionRng>>,
    pub tick_interval: Duration,
    pub enable_sounds: bool,
    pub score_store: Option<ScoreStore>,
}

impl SnakeSessionState {
    pub fn create(
        settings: &SnakeSessionSettings,
        seed: u64,
        score_store: Option<ScoreStore>,
    ) -> Self {
        let mut rng = SessionRng::new(seed);

        let high_score = match &score_store {
            Some(store) => match store.load() {
                Ok(data) => data.high_score,
                Err(e) => {
                    log!("failed to load high score, starting from 0: {}", e);
                    0
                }
            },
            None => 0,
        };

        let game_state = GameState::new(settings, high_score, &mut rng);
        log!("session created with seed {}", seed);

        Self {
            game_state: Arc::new(Mutex::new(game_state)),
            tick: Arc::new(Mutex::new(0u64)),
            rng: Arc::new(Mutex::new(rng)),
            tick_interval: settings.move_interval,
            enable_sounds: settings.enable_sounds,
            score_store,
        }
    }
}

pub struct SnakeSession;

impl SnakeSession {
    /// Drives the session at the configured cadence until the snake dies,
    /// then persists the high score and reports the summary.
    pub async fn run(
        state: SnakeSessionState,
        broadcaster: impl GameBroadcaster,
        sounds: impl SoundSink,
    ) -> GameOverSummary {
        let mut tick_interval_timer = interval(state.tick_interval);

        loop {
            tick_interval_timer.tick().await;

            let mut game_state = state.game_state.lock().await;
            let mut rng = state.rng.lock().await;
            let outcome = game_state.update(&mut rng);
            drop(rng);

            let Some(outcome) = outcome else {
                // Session was already over; host kept ticking us.
                break;
            };

            let mut tick_value = state.tick.lock().await;
            *tick_value += 1;
            let current_tick = *tick_value;
            drop(tick_value);

            if state.enable_sounds {
                match &outcome {
                    MoveOutcome::AteFood { .. } => sounds.play(SoundClip::SnakeEat),
                    MoveOutcome::Died { .. } => sounds.play(SoundClip::SnakeDie),
                    MoveOutcome::Moved { .. } => {}
                }
            }

            let update = build_state_update(&game_state, current_tick, outcome);
            let game_over = game_state.is_game_over();
            drop(game_state);

            broadcaster.broadcast_state(update).await;

            if game_over {
                break;
            }
        }

        let summary = build_game_over_summary(&state).await;
        log!(
            "game over after {} ticks, score {} (high {})",
            summary.ticks,
            summary.score,
            summary.high_score
        );

        if let Some(store) = &state.score_store
            && let Err(e) = store.save(&ScoreData {
                high_score: summary.high_score,
            })
        {
            log!("failed to save high score: {}", e);
        }

        broadcaster.broadcast_game_over(summary.clone()).await;
        summary
    }

    /// Safe to call from any task while `run` is ticking; the aggregate
    /// mutex serializes the two.
    pub async fn handle_direction(state: &SnakeSessionState, direction: Direction) {
        let mut game_state = state.game_state.lock().await;
        game_state.request_direction(direction);
    }
}

fn build_state_update(state: &GameState, tick: u64, outcome: MoveOutcome) -> StateUpdate {
    let snake = state.snake();

    StateUpdate {
        tick,
        outcome,
        head: snake.head(),
        body: snake.body().iter().copied().collect(),
        food: state.food(),
        score: state.score().current(),
        high_score: state.score().high(),
    }
}

async fn build_game_over_summary(state: &SnakeSessionState) -> GameOverSummary {
    let game_state = state.game_state.lock().await;
    let ticks = *state.tick.lock().await;
    let score = game_state.score();

    GameOverSummary {
        ticks,
        score: score.current(),
        high_score: score.high(),
        new_high_score: score.is_new_high_score(),
    }
}
