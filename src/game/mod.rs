//! Game Logic Module
//!
//! All game simulation code. Deterministic given a seed and an input stream.
//!
//! ## Module Structure
//!
//! - `direction`: Heading cycle and turns
//! - `snake`: Snake body and movement
//! - `input`: Input intents, latching, recording
//! - `state`: Game state aggregate and renderer snapshot
//! - `tick`: Per-frame update loop
//! - `collision`: Border, food, self and obstacle checks
//! - `spawn`: Food and obstacle placement
//! - `events`: Game events for renderers and logs

pub mod direction;
pub mod snake;
pub mod input;
pub mod state;
pub mod tick;
pub mod collision;
pub mod spawn;
pub mod events;

// Re-export key types
pub use direction::{Direction, Turn};
pub use snake::{Snake, move_snake};
pub use input::{InputFrame, InputRecording, PendingInput};
pub use state::{GameState, GameSnapshot};
pub use tick::{TickResult, tick, replay_game};
pub use events::{CollisionKind, GameEvent, GameEventData};
