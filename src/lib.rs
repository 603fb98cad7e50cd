//! # Snake Engine
//!
//! Deterministic state engine for a grid Snake game. Rendering and input
//! polling belong to the host; this crate owns the rules.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       SNAKE ENGINE                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── grid.rs     - Cells and the playable rectangle          │
//! │  ├── rng.rs      - Deterministic Xorshift128+ PRNG           │
//! │  └── hash.rs     - State hashing for replay verification     │
//! │                                                              │
//! │  game/           - Game logic (deterministic)                │
//! │  ├── direction.rs- Heading cycle and turns                   │
//! │  ├── snake.rs    - Body queue and movement                   │
//! │  ├── input.rs    - Input intents and recording               │
//! │  ├── state.rs    - Game state and renderer snapshot          │
//! │  ├── tick.rs     - Frame-gated update loop                   │
//! │  ├── collision.rs- Collision checks                          │
//! │  ├── spawn.rs    - Food and obstacle placement               │
//! │  └── events.rs   - Game events                               │
//! │                                                              │
//! │  config.rs       - Tunables, JSON loading, validation        │
//! │  error.rs        - Error types                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! Given the same config, seed and input stream, a session produces the
//! same states and the same [`GameState::compute_hash`] on every platform:
//! - Integer grid arithmetic only
//! - One RNG per session, never reseeded on restart
//! - No system time dependencies
//!
//! ## Example
//!
//! ```
//! use snake_engine::{GameConfig, GameState, InputFrame, Turn, tick};
//!
//! let mut state = GameState::new(GameConfig::default(), 42).unwrap();
//! tick(&mut state, InputFrame::with_turn(Turn::Clockwise)).unwrap();
//! for _ in 0..4 {
//!     tick(&mut state, InputFrame::new()).unwrap();
//! }
//! assert_eq!(state.segments().next(), Some(snake_engine::Cell::new(5, 6)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod error;
pub mod game;

// Re-export commonly used types
pub use config::{GameConfig, ObstacleStyle};
pub use crate::core::grid::{Cell, PlayArea};
pub use crate::core::rng::DeterministicRng;
pub use error::{ConfigError, GameError, SpawnError};
pub use game::direction::{Direction, Turn};
pub use game::input::{InputFrame, InputRecording};
pub use game::state::{GameState, GameSnapshot};
pub use game::tick::{tick, replay_game, TickResult};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Frame rate the host is expected to call `tick` at (Hz)
pub const FRAME_RATE: u32 = 60;
