//! Game Configuration
//!
//! Every tunable of a session. Defaults reproduce the classic 640x480
//! layout; a JSON file may override any subset of fields.

use std::path::Path;
use serde::{Serialize, Deserialize};

use crate::core::grid::{Cell, PlayArea};
use crate::error::ConfigError;
use crate::game::direction::Direction;

/// How obstacles are shaped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObstacleStyle {
    /// Square blocks of 1x1, 2x2 or 3x3 cells, drawn by `block_size_weights`
    #[default]
    Blocks,
    /// Always a single cell
    SingleCells,
}

/// Configuration for a game session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Screen width in pixels
    pub screen_width: i32,
    /// Screen height in pixels
    pub screen_height: i32,
    /// Border thickness in pixels
    pub border_width: i32,
    /// Header (score bar) height in pixels
    pub header_height: i32,
    /// Side of one grid cell in pixels
    pub cell_size: i32,

    /// Starting snake, head first
    pub starting_snake: Vec<Cell>,
    /// Starting heading
    pub starting_direction: Direction,

    /// Frames per logical step at the start of a game
    pub initial_speed: u32,
    /// Fastest allowed speed (frames per step)
    pub min_speed: u32,
    /// Score threshold: speed drops by one each time the score crosses a multiple
    pub speed_increment: u32,
    /// Points for eating food
    pub food_reward: u32,

    /// Obstacles placed on reset
    pub obstacle_count: u32,
    /// Obstacle shape variant
    pub obstacle_style: ObstacleStyle,
    /// Relative weights for 1x1, 2x2 and 3x3 blocks
    pub block_size_weights: [u32; 3],

    /// Food is respawned every this many frames, eaten or not
    pub food_refresh_interval: u32,
    /// Cells kept free of food along each border
    pub food_margin: i32,
    /// Placement attempts before a spawner reports saturation
    pub max_spawn_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            border_width: 10,
            header_height: 40,
            cell_size: 10,
            starting_snake: vec![Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)],
            starting_direction: Direction::Right,
            initial_speed: 5,
            min_speed: 2,
            speed_increment: 10,
            food_reward: 10,
            obstacle_count: 10,
            obstacle_style: ObstacleStyle::Blocks,
            block_size_weights: [40, 30, 30],
            food_refresh_interval: 500,
            food_margin: 1,
            max_spawn_attempts: 10_000,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Cells the snake may occupy.
    pub fn play_area(&self) -> PlayArea {
        PlayArea::from_screen(
            self.screen_width,
            self.screen_height,
            self.border_width,
            self.header_height,
            self.cell_size,
        )
    }

    /// Cells food may spawn on.
    pub fn food_area(&self) -> PlayArea {
        self.play_area().shrink(self.food_margin)
    }

    /// Check every constraint the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(msg: impl Into<String>) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid(msg.into()))
        }

        if self.cell_size <= 0 {
            return invalid("cell_size must be positive");
        }
        if self.screen_width <= 0 || self.screen_height <= 0 {
            return invalid("screen dimensions must be positive");
        }
        if self.border_width < 0 || self.header_height < 0 {
            return invalid("border_width and header_height must not be negative");
        }

        let area = self.play_area();
        if area.is_empty() {
            return invalid("play area holds no cells");
        }

        if self.starting_snake.is_empty() {
            return invalid("starting_snake needs at least one segment");
        }
        for (i, cell) in self.starting_snake.iter().enumerate() {
            if !area.contains(*cell) {
                return invalid(format!("starting_snake segment {} at {} is outside the play area", i, cell));
            }
            if self.starting_snake[..i].contains(cell) {
                return invalid(format!("starting_snake repeats cell {}", cell));
            }
        }
        for pair in self.starting_snake.windows(2) {
            if !pair[0].is_adjacent(pair[1]) {
                return invalid(format!("starting_snake is not contiguous between {} and {}", pair[0], pair[1]));
            }
        }

        if self.min_speed == 0 {
            return invalid("min_speed must be at least 1");
        }
        if self.initial_speed < self.min_speed {
            return invalid("initial_speed must not be below min_speed");
        }
        if self.speed_increment == 0 {
            return invalid("speed_increment must be positive");
        }
        if self.food_refresh_interval == 0 {
            return invalid("food_refresh_interval must be positive");
        }
        if self.max_spawn_attempts == 0 {
            return invalid("max_spawn_attempts must be positive");
        }
        if self.food_margin < 0 {
            return invalid("food_margin must not be negative");
        }
        if self.food_area().is_empty() {
            return invalid("food_margin leaves no cells for food");
        }
        if self.obstacle_style == ObstacleStyle::Blocks
            && self.block_size_weights.iter().all(|w| *w == 0)
        {
            return invalid("block_size_weights must not all be zero");
        }

        Ok(())
    }
}
