//! Game State Definitions
//!
//! The single aggregate a session mutates every frame, plus the read-only
//! view handed to renderers.

use serde::{Serialize, Deserialize};
use tracing::info;

use crate::config::GameConfig;
use crate::core::grid::{Cell, PlayArea};
use crate::core::rng::DeterministicRng;
use crate::core::hash::{StateHash, compute_state_hash};
use crate::error::{GameError, SpawnError};
use crate::game::direction::{Direction, Turn};
use crate::game::events::{CollisionKind, GameEvent, GameEventData};
use crate::game::input::PendingInput;
use crate::game::snake::Snake;
use crate::game::spawn::{respawn_food, spawn_obstacles};

/// Complete state of one game session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Session configuration (validated)
    pub config: GameConfig,

    /// Cells the snake may occupy, derived from `config`
    pub play_area: PlayArea,

    /// RNG seed (for verification)
    pub rng_seed: u64,

    /// Session-owned RNG state
    #[serde(skip)]
    pub rng: DeterministicRng,

    /// The snake
    pub snake: Snake,

    /// Food cell, if any is on the grid
    pub food: Option<Cell>,

    /// Obstacle cells, static until the next reset
    pub obstacles: Vec<Cell>,

    /// Frames since the last reset
    pub frame_count: u32,

    /// Frames per logical step
    pub speed: u32,

    /// Score threshold for a speed-up
    pub speed_increment: u32,

    /// Current score
    pub score: u32,

    /// Terminal flag; only a reset clears it
    pub game_over: bool,

    /// Why the game ended
    pub game_over_cause: Option<CollisionKind>,

    /// Intents waiting for the next logical step
    pub pending_input: PendingInput,

    /// Events generated this frame (cleared each frame)
    #[serde(skip)]
    pub pending_events: Vec<GameEvent>,
}

impl GameState {
    /// Validate `config`, seed the RNG and set up a fresh game.
    pub fn new(config: GameConfig, rng_seed: u64) -> Result<Self, GameError> {
        config.validate()?;

        let snake = Snake::new(config.starting_snake.iter().copied(), config.starting_direction);
        let mut state = Self {
            play_area: config.play_area(),
            rng_seed,
            rng: DeterministicRng::new(rng_seed),
            snake,
            food: None,
            obstacles: Vec::new(),
            frame_count: 0,
            speed: config.initial_speed,
            speed_increment: config.speed_increment,
            score: 0,
            game_over: false,
            game_over_cause: None,
            pending_input: PendingInput::default(),
            pending_events: Vec::new(),
            config,
        };

        state.reset()?;
        Ok(state)
    }

    /// Reinitialize snake, food, obstacles, score and speed in place.
    ///
    /// The RNG is not reseeded, so a session with restarts is still a pure
    /// function of seed and inputs.
    pub fn reset(&mut self) -> Result<(), SpawnError> {
        self.snake = Snake::new(
            self.config.starting_snake.iter().copied(),
            self.config.starting_direction,
        );
        self.frame_count = 0;
        self.score = 0;
        self.game_over = false;
        self.game_over_cause = None;
        self.speed = self.config.initial_speed;
        self.speed_increment = self.config.speed_increment;
        self.food = None;
        self.obstacles.clear();
        self.pending_input.clear();

        // Food first: obstacles must avoid it
        let food = respawn_food(self)?;
        self.push_event(GameEvent::food_spawned(self.frame_count, food));

        spawn_obstacles(self)?;
        self.push_event(GameEvent::new(
            self.frame_count,
            GameEventData::ObstaclesSpawned { cells: self.obstacles.len() },
        ));

        Ok(())
    }

    /// Mark the game as over.
    pub fn end_game(&mut self, cause: CollisionKind) {
        if self.game_over {
            return;
        }

        self.game_over = true;
        self.game_over_cause = Some(cause);
        info!(?cause, score = self.score, frame = self.frame_count, "game over");
        self.push_event(GameEvent::game_over(self.frame_count, cause, self.score));
    }

    /// Snake segments, head first.
    pub fn segments(&self) -> impl Iterator<Item = Cell> + '_ {
        self.snake.segments.iter().copied()
    }

    /// Food cell, if present.
    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    /// Obstacle cells.
    pub fn obstacles(&self) -> &[Cell] {
        &self.obstacles
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Frames per logical step.
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Has the game ended?
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Current heading.
    pub fn direction(&self) -> Direction {
        self.snake.direction
    }

    /// Owned copy of everything a renderer draws.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            frame: self.frame_count,
            segments: self.segments().collect(),
            length: self.snake.length,
            direction: self.snake.direction,
            food: self.food,
            obstacles: self.obstacles.clone(),
            score: self.score,
            speed: self.speed,
            game_over: self.game_over,
            game_over_cause: self.game_over_cause,
            play_area: self.play_area,
        }
    }

    /// Compute hash of current state for verification.
    pub fn compute_hash(&self) -> StateHash {
        compute_state_hash(self.frame_count, self.rng_seed, |hasher| {
            // Snake
            hasher.update_u32(self.snake.segments.len() as u32);
            for segment in &self.snake.segments {
                hasher.update_cell(*segment);
            }
            hasher.update_u32(self.snake.length as u32);
            hasher.update_u8(self.snake.direction as u8);

            // Food and obstacles
            hasher.update_opt_cell(self.food);
            hasher.update_u32(self.obstacles.len() as u32);
            for obstacle in &self.obstacles {
                hasher.update_cell(*obstacle);
            }

            // Progress
            hasher.update_u32(self.score);
            hasher.update_u32(self.speed);
            hasher.update_bool(self.game_over);
            hasher.update_u8(match self.game_over_cause {
                None => 0,
                Some(CollisionKind::Border) => 1,
                Some(CollisionKind::SelfCollision) => 2,
                Some(CollisionKind::Obstacle) => 3,
            });

            // Latched intents
            hasher.update_u8(match self.pending_input.turn {
                None => 0,
                Some(Turn::Clockwise) => 1,
                Some(Turn::AntiClockwise) => 2,
            });
            hasher.update_bool(self.pending_input.restart);

            // RNG position
            let [s0, s1] = self.rng.state();
            hasher.update_u64(s0);
            hasher.update_u64(s1);
        })
    }

    /// Take pending events (consumes them).
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Push a game event.
    pub fn push_event(&mut self, event: GameEvent) {
        self.pending_events.push(event);
    }
}

/// Read-only view of a game for renderers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Frames since the last reset
    pub frame: u32,
    /// Snake cells, head first
    pub segments: Vec<Cell>,
    /// Target snake length
    pub length: usize,
    /// Current heading
    pub direction: Direction,
    /// Food cell, absent while none is placed
    pub food: Option<Cell>,
    /// Obstacle cells
    pub obstacles: Vec<Cell>,
    /// Current score
    pub score: u32,
    /// Frames per logical step
    pub speed: u32,
    /// Terminal flag
    pub game_over: bool,
    /// Why the game ended
    pub game_over_cause: Option<CollisionKind>,
    /// Playable rectangle
    pub play_area: PlayArea,
}

// =============================================================================
// TESTS
// =============================================================================
