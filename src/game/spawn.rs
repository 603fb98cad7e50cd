//! Food and Obstacle Spawning
//!
//! Rejection sampling on the session RNG. Every loop is bounded by
//! `max_spawn_attempts`; running out means the grid is saturated.

use tracing::{debug, warn};

use crate::config::ObstacleStyle;
use crate::core::grid::{Cell, PlayArea};
use crate::core::rng::DeterministicRng;
use crate::error::{SpawnEntity, SpawnError};
use crate::game::snake::Snake;
use crate::game::state::GameState;

/// Block side lengths matching `GameConfig::block_size_weights`.
pub const BLOCK_SIZES: [i32; 3] = [1, 2, 3];

/// Pick a free food cell.
///
/// Uniform over `area`; rejects cells on the snake or an obstacle.
pub fn pick_food_cell(
    rng: &mut DeterministicRng,
    area: &PlayArea,
    snake: &Snake,
    obstacles: &[Cell],
    max_attempts: u32,
) -> Result<Cell, SpawnError> {
    for _ in 0..max_attempts {
        let cell = rng.random_cell(area);

        if snake.occupies(cell) || obstacles.contains(&cell) {
            continue;
        }

        return Ok(cell);
    }

    Err(SpawnError::GridSaturated {
        entity: SpawnEntity::Food,
        attempts: max_attempts,
    })
}

/// Draw a block side length for one obstacle.
pub fn random_block_size(rng: &mut DeterministicRng, style: ObstacleStyle, weights: &[u32; 3]) -> i32 {
    match style {
        ObstacleStyle::SingleCells => 1,
        ObstacleStyle::Blocks => rng
            .weighted_index(weights)
            .map(|idx| BLOCK_SIZES[idx])
            .unwrap_or(1),
    }
}

/// Cells of a `size` x `size` block with top-left corner `origin`.
pub fn block_cells(origin: Cell, size: i32) -> impl Iterator<Item = Cell> {
    (0..size).flat_map(move |dx| (0..size).map(move |dy| origin.offset(dx, dy)))
}

/// Place one obstacle block of side `size`.
///
/// The whole block must fit `area` and avoid the snake, the food and
/// `placed` obstacles. A block wider than the area shrinks until it fits.
pub fn pick_obstacle_block(
    rng: &mut DeterministicRng,
    area: &PlayArea,
    size: i32,
    snake: &Snake,
    food: Option<Cell>,
    placed: &[Cell],
    max_attempts: u32,
) -> Result<Vec<Cell>, SpawnError> {
    let size = size.min(area.width()).min(area.height()).max(1);

    // Top-left corners that keep the block inside
    let corners = PlayArea {
        min_x: area.min_x,
        min_y: area.min_y,
        max_x: area.max_x - size + 1,
        max_y: area.max_y - size + 1,
    };

    for _ in 0..max_attempts {
        let origin = rng.random_cell(&corners);

        let collides = block_cells(origin, size).any(|cell| {
            Some(cell) == food || snake.occupies(cell) || placed.contains(&cell)
        });
        if collides {
            continue;
        }

        return Ok(block_cells(origin, size).collect());
    }

    Err(SpawnError::GridSaturated {
        entity: SpawnEntity::Obstacle,
        attempts: max_attempts,
    })
}

/// Place food on a free cell and store it in `state.food`.
///
/// On saturation the food is left empty.
pub fn respawn_food(state: &mut GameState) -> Result<Cell, SpawnError> {
    let area = state.config.food_area();

    match pick_food_cell(
        &mut state.rng,
        &area,
        &state.snake,
        &state.obstacles,
        state.config.max_spawn_attempts,
    ) {
        Ok(cell) => {
            state.food = Some(cell);
            debug!(x = cell.x, y = cell.y, "spawned food");
            Ok(cell)
        }
        Err(err) => {
            state.food = None;
            warn!(%err, "food spawn failed");
            Err(err)
        }
    }
}

/// Replace all obstacles with `config.obstacle_count` fresh blocks.
pub fn spawn_obstacles(state: &mut GameState) -> Result<(), SpawnError> {
    state.obstacles.clear();

    for _ in 0..state.config.obstacle_count {
        let size = random_block_size(
            &mut state.rng,
            state.config.obstacle_style,
            &state.config.block_size_weights,
        );

        let block = match pick_obstacle_block(
            &mut state.rng,
            &state.play_area,
            size,
            &state.snake,
            state.food,
            &state.obstacles,
            state.config.max_spawn_attempts,
        ) {
            Ok(block) => block,
            Err(err) => {
                warn!(%err, placed = state.obstacles.len(), "obstacle spawn failed");
                return Err(err);
            }
        };

        debug!(x = block[0].x, y = block[0].y, size, "spawned obstacle");
        state.obstacles.extend(block);
    }

    Ok(())
}
