//! Collision Detection
//!
//! Grid collision checks for one logical step, evaluated in a fixed order:
//! border, food, self, obstacle.

use crate::core::grid::{Cell, PlayArea};
use crate::game::snake::Snake;
use crate::game::state::GameState;

/// Outcome of checking a prospective head position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Head would leave the play area
    Border,
    /// Head reaches the food
    Food,
    /// Head would enter the body
    SelfCollision,
    /// Head currently sits on an obstacle
    Obstacle,
    /// Nothing in the way
    Move,
}

/// Is `cell` outside the playable rectangle?
#[inline]
pub fn hits_border(area: &PlayArea, cell: Cell) -> bool {
    !area.contains(cell)
}

/// Is `cell` the food?
#[inline]
pub fn hits_food(food: Option<Cell>, cell: Cell) -> bool {
    food == Some(cell)
}

/// Does `cell` land on any segment other than the head?
#[inline]
pub fn hits_self(snake: &Snake, cell: Cell) -> bool {
    snake.body_occupies(cell)
}

/// Is `cell` an obstacle?
#[inline]
pub fn hits_obstacle(obstacles: &[Cell], cell: Cell) -> bool {
    obstacles.contains(&cell)
}

/// Classify the step towards `next_head`.
///
/// Border, food and self checks use the prospective head; the obstacle
/// check uses the current head, so entering an obstacle ends the game on
/// the following step.
pub fn check_step(state: &GameState, next_head: Cell) -> StepOutcome {
    if hits_border(&state.play_area, next_head) {
        return StepOutcome::Border;
    }

    if hits_food(state.food, next_head) {
        return StepOutcome::Food;
    }

    if hits_self(&state.snake, next_head) {
        return StepOutcome::SelfCollision;
    }

    if hits_obstacle(&state.obstacles, state.snake.head()) {
        return StepOutcome::Obstacle;
    }

    StepOutcome::Move
}
