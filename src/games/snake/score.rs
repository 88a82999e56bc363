/// Session score plus the high-score watermark. `high` is seeded from
/// storage at session start; the accumulator never touches storage itself.
#[derive(Clone, Debug)]
pub struct ScoreBoard {
    current: u32,
    high: u32,
    new_high_score: bool,
}

impl ScoreBoard {
    pub fn new(persisted_high: u32) -> Self {
        Self {
            current: 0,
            high: persisted_high,
            new_high_score: false,
        }
    }

    pub fn on_food_eaten(&mut self, score_per_food: u32) {
        self.current += score_per_food;
        if self.current > self.high {
            self.high = self.current;
            self.new_high_score = true;
        }
    }

    /// New session, same watermark.
    pub fn reset(&mut self) {
        self.current = 0;
        self.new_high_score = false;
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn high(&self) -> u32 {
        self.high
    }

    /// Sticky for the session once `current` first exceeds the high score
    /// loaded at session start.
    pub fn is_new_high_score(&self) -> bool {
        self.new_high_score
    }
}
