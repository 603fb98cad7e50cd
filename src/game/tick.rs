//! Frame Update Loop
//!
//! `tick` runs once per rendered frame. The game logic only advances on
//! frames where `frame_count % speed == 0`, which decouples animation rate
//! from game speed.

use tracing::info;

use crate::config::GameConfig;
use crate::core::grid::Cell;
use crate::error::{GameError, SpawnError};
use crate::game::collision::{check_step, StepOutcome};
use crate::game::events::{CollisionKind, GameEvent, GameEventData};
use crate::game::input::{InputFrame, InputRecording};
use crate::game::snake::move_snake;
use crate::game::spawn::respawn_food;
use crate::game::state::GameState;

/// Result of a frame.
#[derive(Debug, Default)]
pub struct TickResult {
    /// Events generated this frame
    pub events: Vec<GameEvent>,
    /// Whether a logical step ran
    pub stepped: bool,
    /// Whether the game ended this frame
    pub game_ended: bool,
}

/// Run one frame.
///
/// # Arguments
///
/// * `state` - The game state (will be mutated)
/// * `input` - Intents observed this frame; latched until the next step
///
/// Spawner saturation aborts the frame with an error; the state stays
/// consistent (food may be absent) and the frame's events are discarded.
pub fn tick(state: &mut GameState, input: InputFrame) -> Result<TickResult, SpawnError> {
    match run_frame(state, input) {
        Ok(stepped) => {
            let events = state.take_events();
            let game_ended = events.iter().any(GameEvent::is_game_over);
            Ok(TickResult { events, stepped, game_ended })
        }
        Err(err) => {
            state.pending_events.clear();
            Err(err)
        }
    }
}

/// Frame body; returns whether a logical step ran.
fn run_frame(state: &mut GameState, input: InputFrame) -> Result<bool, SpawnError> {
    // 0. Advance frame counter and latch intents
    state.frame_count += 1;
    state.pending_input.latch(input);

    // 1. Logical step on every `speed`-th frame
    let stepped = state.frame_count % state.speed == 0;
    if stepped {
        logical_step(state)?;
    }

    // 2. Periodic food refresh, independent of the step gate.
    //    A restart above resets frame_count to 0; skip that frame.
    if !state.game_over
        && state.frame_count > 0
        && state.frame_count % state.config.food_refresh_interval == 0
    {
        let cell = respawn_food(state)?;
        state.push_event(GameEvent::food_refreshed(state.frame_count, cell));
    }

    Ok(stepped)
}

/// One game-logic step.
fn logical_step(state: &mut GameState) -> Result<(), SpawnError> {
    // 1. Game over: only a restart does anything
    if state.game_over {
        if state.pending_input.take_restart() {
            info!(final_score = state.score, "restarting");
            state.push_event(GameEvent::new(state.frame_count, GameEventData::Restarted));
            state.reset()?;
        }
        state.pending_input.take_turn();
        return Ok(());
    }

    // Restart is meaningless while playing
    state.pending_input.take_restart();

    // 2. Apply pending turn (direction only)
    if let Some(turn) = state.pending_input.take_turn() {
        state.snake.turn(turn);
    }

    // 3. Prospective head, nothing mutated yet
    let next_head = state.snake.next_head();

    // 4-8. Collisions, then move
    match check_step(state, next_head) {
        StepOutcome::Border => state.end_game(CollisionKind::Border),
        StepOutcome::Food => eat_food(state, next_head)?,
        StepOutcome::SelfCollision => state.end_game(CollisionKind::SelfCollision),
        StepOutcome::Obstacle => state.end_game(CollisionKind::Obstacle),
        StepOutcome::Move => move_snake(&mut state.snake),
    }

    Ok(())
}

/// Grow onto the food, score, speed up, and place new food.
fn eat_food(state: &mut GameState, cell: Cell) -> Result<(), SpawnError> {
    state.snake.grow(cell);
    state.food = None;

    let old_score = state.score;
    state.score += state.config.food_reward;
    state.push_event(GameEvent::food_eaten(
        state.frame_count,
        cell,
        state.snake.length,
        state.score,
    ));

    apply_speed_up(state, old_score);

    let food = respawn_food(state)?;
    state.push_event(GameEvent::food_spawned(state.frame_count, food));

    Ok(())
}

/// Lower `speed` by one for every multiple of `speed_increment` the score
/// crossed, never below `min_speed`.
fn apply_speed_up(state: &mut GameState, old_score: u32) {
    let crossed = state.score / state.speed_increment - old_score / state.speed_increment;
    if crossed == 0 {
        return;
    }

    let old_speed = state.speed;
    let new_speed = old_speed.saturating_sub(crossed).max(state.config.min_speed);
    if new_speed == old_speed {
        return;
    }

    state.speed = new_speed;
    info!(old_speed, new_speed, score = state.score, "speed up");
    state.push_event(GameEvent::speed_changed(state.frame_count, old_speed, new_speed));
}

/// Replay a session from recorded inputs.
///
/// Returns the final state and every event produced along the way.
pub fn replay_game(
    config: GameConfig,
    recording: &InputRecording,
) -> Result<(GameState, Vec<GameEvent>), GameError> {
    let mut state = GameState::new(config, recording.rng_seed)?;
    let mut all_events = state.take_events();

    for (_, input) in recording.replay_iter() {
        let result = tick(&mut state, input)?;
        all_events.extend(result.events);
    }

    Ok((state, all_events))
}
