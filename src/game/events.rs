//! Game Events
//!
//! Events generated during simulation. A renderer can use them for effects
//! and sounds; the headless runner logs them.

use serde::{Serialize, Deserialize};

use crate::core::grid::Cell;

/// What ended the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CollisionKind {
    /// Head left the playable rectangle
    Border = 0,
    /// Head ran into the body
    SelfCollision = 1,
    /// Head sits on an obstacle
    Obstacle = 2,
}

/// Game event data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEventData {
    /// Snake ate the food
    FoodEaten {
        cell: Cell,
        new_length: usize,
        new_score: u32,
    },

    /// New food placed (after eating or on reset)
    FoodSpawned { cell: Cell },

    /// Food moved by the periodic refresh
    FoodRefreshed { cell: Cell },

    /// Obstacles placed for the session
    ObstaclesSpawned { cells: usize },

    /// Step interval changed
    SpeedChanged { old_speed: u32, new_speed: u32 },

    /// Game ended
    GameOver {
        cause: CollisionKind,
        final_score: u32,
    },

    /// Game restarted after game over
    Restarted,
}

/// A game event stamped with the frame it happened on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Frame when event occurred
    pub frame: u32,

    /// Event data
    pub data: GameEventData,
}

impl GameEvent {
    /// Create a new event.
    pub fn new(frame: u32, data: GameEventData) -> Self {
        Self { frame, data }
    }

    /// Create food eaten event.
    pub fn food_eaten(frame: u32, cell: Cell, new_length: usize, new_score: u32) -> Self {
        Self::new(frame, GameEventData::FoodEaten { cell, new_length, new_score })
    }

    /// Create food spawned event.
    pub fn food_spawned(frame: u32, cell: Cell) -> Self {
        Self::new(frame, GameEventData::FoodSpawned { cell })
    }

    /// Create food refreshed event.
    pub fn food_refreshed(frame: u32, cell: Cell) -> Self {
        Self::new(frame, GameEventData::FoodRefreshed { cell })
    }

    /// Create speed changed event.
    pub fn speed_changed(frame: u32, old_speed: u32, new_speed: u32) -> Self {
        Self::new(frame, GameEventData::SpeedChanged { old_speed, new_speed })
    }

    /// Create game over event.
    pub fn game_over(frame: u32, cause: CollisionKind, final_score: u32) -> Self {
        Self::new(frame, GameEventData::GameOver { cause, final_score })
    }

    /// Is this the end of a game?
    pub fn is_game_over(&self) -> bool {
        matches!(self.data, GameEventData::GameOver { .. })
    }
}
