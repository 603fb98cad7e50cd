//! Error Types
//!
//! Gameplay failure is not an error: collisions only set the game-over flag.
//! These enums cover the two things that can actually go wrong.

use std::path::PathBuf;

/// What a spawner was trying to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnEntity {
    /// The food cell.
    Food,
    /// An obstacle block.
    Obstacle,
}

impl std::fmt::Display for SpawnEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpawnEntity::Food => f.write_str("food"),
            SpawnEntity::Obstacle => f.write_str("obstacle"),
        }
    }
}

/// Spawner errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpawnError {
    /// No free placement found within the attempt budget.
    #[error("no free cell for {entity} after {attempts} attempts (grid saturated)")]
    GridSaturated {
        /// What was being placed
        entity: SpawnEntity,
        /// Attempts made before giving up
        attempts: u32,
    },
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Config content is not valid JSON for `GameConfig`.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config parsed but violates a constraint.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Errors from creating or replaying a session.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Bad configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A spawner could not place food or obstacles.
    #[error(transparent)]
    Spawn(#[from] SpawnError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_error_message() {
        let err = SpawnError::GridSaturated {
            entity: SpawnEntity::Food,
            attempts: 42,
        };
        assert_eq!(
            err.to_string(),
            "no free cell for food after 42 attempts (grid saturated)"
        );
    }

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::Invalid("cell_size must be positive".into());
        assert_eq!(err.to_string(), "invalid config: cell_size must be positive");
    }
}
