use std::time::Duration;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{ConfigError, GameConfig, MIN_TICK_INTERVAL_MS};
use crate::food::Food;
use crate::grid::GridSize;
use crate::input::{Direction, GameInput};
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
    Victory,
}

/// Complete mutable game state for one session.
///
/// Owns the snake, the food, the score, and the RNG; the host loop only
/// drives `tick`/`apply_input` and reads state for rendering. There is
/// no shared or global state, so two sessions never interfere.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub speed_level: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    bounds: GridSize,
    initial_speed: u32,
    speed_increment: u32,
    rng: StdRng,
}

impl GameState {
    /// Creates a session from a validated configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let snake = Snake::new(config.grid.center(), Direction::Right);
        let food = Food::spawn(&mut rng, config.grid, &snake)
            .expect("a validated grid always has a free cell beside a one-cell snake");

        Ok(Self {
            snake,
            food,
            score: 0,
            speed_level: config.initial_speed,
            tick_count: 0,
            status: GameStatus::Playing,
            bounds: config.grid,
            initial_speed: config.initial_speed,
            speed_increment: config.speed_increment,
            rng,
        })
    }

    /// Returns the grid bounds this session runs on.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Advances the simulation by one gameplay tick.
    ///
    /// Does nothing while paused or after the run has ended, so the host
    /// loop can keep calling it unconditionally.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        self.tick_count += 1;
        self.snake.advance(self.bounds);

        if self.snake.head_overlaps_body() {
            self.status = GameStatus::GameOver;
            info!(
                "game over: self-collision at tick {} with score {}",
                self.tick_count, self.score
            );
            return;
        }

        if self.snake.head() == self.food.position {
            self.score += 1;
            self.snake.grow();
            self.speed_level += self.speed_increment;

            if self.snake.full_length() >= self.bounds.total_cells() {
                self.status = GameStatus::Victory;
                info!("victory: board filled with score {}", self.score);
                return;
            }

            match Food::spawn(&mut self.rng, self.bounds, &self.snake) {
                Some(food) => self.food = food,
                // No free cell left means the board is effectively won.
                None => self.status = GameStatus::Victory,
            }
        }
    }

    /// Applies one external input event.
    ///
    /// `Quit` is deliberately not handled here: it is a terminal signal
    /// for the host loop, not a state transition.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                if self.status == GameStatus::Playing {
                    self.snake.set_pending_direction(direction);
                }
            }
            GameInput::Pause => match self.status {
                GameStatus::Playing => self.pause(),
                GameStatus::Paused => self.resume(),
                GameStatus::GameOver | GameStatus::Victory => {}
            },
            GameInput::Confirm => match self.status {
                GameStatus::GameOver | GameStatus::Victory => self.reset(),
                GameStatus::Paused => self.resume(),
                GameStatus::Playing => {}
            },
            GameInput::Quit => {}
        }
    }

    /// Suspends the simulation. Idempotent: pausing twice equals once.
    pub fn pause(&mut self) {
        if self.status == GameStatus::Playing {
            self.status = GameStatus::Paused;
        }
    }

    /// Resumes a paused simulation. Idempotent.
    pub fn resume(&mut self) {
        if self.status == GameStatus::Paused {
            self.status = GameStatus::Playing;
        }
    }

    /// Starts a new logical run within the same session.
    ///
    /// Reset contract: one-cell body at the grid center facing right,
    /// score zero, speed back to the configured initial value, food
    /// respawned from the session RNG, and play resumes immediately.
    pub fn reset(&mut self) {
        self.snake = Snake::new(self.bounds.center(), Direction::Right);
        self.food = Food::spawn(&mut self.rng, self.bounds, &self.snake)
            .expect("a validated grid always has a free cell beside a one-cell snake");
        self.score = 0;
        self.speed_level = self.initial_speed;
        self.tick_count = 0;
        self.status = GameStatus::Playing;
        info!("session reset");
    }

    /// Returns the wall-clock interval between ticks for the current
    /// speed level, interpreted as logical ticks per second and clamped
    /// to a playable floor.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        let interval_ms = (1000 / u64::from(self.speed_level.max(1))).max(MIN_TICK_INTERVAL_MS);
        Duration::from_millis(interval_ms)
    }

    /// Returns true when the session sits on the initial start screen.
    #[must_use]
    pub fn is_start_screen(&self) -> bool {
        self.status == GameStatus::Paused && self.tick_count == 0 && self.score == 0
    }
}
