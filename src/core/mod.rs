//! Core deterministic primitives.
//!
//! Grid geometry, the session RNG and state hashing. Nothing in here
//! knows about snakes or food.

pub mod grid;
pub mod rng;
pub mod hash;

// Re-export core types
pub use grid::{Cell, PlayArea};
pub use rng::DeterministicRng;
pub use hash::{StateHash, StateHasher, compute_state_hash};
