//! Snake Engine headless runner
//!
//! Plays a seeded session with a simple autopilot, then replays the
//! recorded inputs and checks that the final state hashes match.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use snake_engine::{
    FRAME_RATE, VERSION,
    GameConfig, GameState, InputFrame, InputRecording, Turn,
    game::{
        collision::{hits_border, hits_obstacle, hits_self},
        events::GameEventData,
        tick::{tick, replay_game},
    },
};

#[derive(Parser)]
#[command(name = "snake-engine", version, about = "Headless Snake session with replay verification")]
struct Args {
    /// RNG seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 3000)]
    frames: u32,

    /// JSON config file overriding the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the final snapshot as JSON
    #[arg(long)]
    snapshot: bool,

    /// Debug-level logging
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Snake Engine v{}", VERSION);

    let config = match &args.config {
        Some(path) => GameConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("RNG Seed: {}", seed);
    info!(
        "Frames: {} ({} seconds at {} Hz)",
        args.frames,
        args.frames / FRAME_RATE,
        FRAME_RATE
    );

    run_session(config, seed, &args)
}

/// Play, record, replay and compare.
fn run_session(config: GameConfig, seed: u64, args: &Args) -> anyhow::Result<()> {
    info!("=== Starting Session ===");

    let mut state = GameState::new(config.clone(), seed).context("creating game")?;
    let mut recording = InputRecording::new(seed);
    let mut games_played = 1u32;
    let mut best_score = 0u32;

    for event in state.take_events() {
        debug!(?event, "setup");
    }

    for frame in 1..=args.frames {
        let input = autopilot(&state);
        recording.record(frame, input);

        let result = tick(&mut state, input)
            .with_context(|| format!("frame {}", frame))?;

        for event in &result.events {
            match &event.data {
                GameEventData::GameOver { cause, final_score } => {
                    info!("Game {} over: {:?}, score {}", games_played, cause, final_score);
                    best_score = best_score.max(*final_score);
                }
                GameEventData::Restarted => {
                    games_played += 1;
                }
                _ => debug!(?event, "event"),
            }
        }
    }
    best_score = best_score.max(state.score());

    info!("=== Session Results ===");
    info!("Games played: {}", games_played);
    info!("Best score: {}", best_score);
    info!(
        "Current game: score {}, length {}, speed {}, over: {}",
        state.score(),
        state.snake.length,
        state.speed(),
        state.is_game_over()
    );
    info!("Recorded inputs: {}", recording.input_count());

    let hash = state.compute_hash();
    info!("Final State Hash: {}", hex::encode(hash));

    // Verify determinism by replaying
    info!("=== Verifying Determinism ===");
    let (replayed, _) = replay_game(config, &recording).context("replaying session")?;
    let replay_hash = replayed.compute_hash();
    info!("Replay State Hash: {}", hex::encode(replay_hash));

    if hash != replay_hash {
        bail!("determinism failure: replay hash differs");
    }
    info!("DETERMINISM VERIFIED: Hashes match!");

    if args.snapshot {
        let json = serde_json::to_string_pretty(&state.snapshot())
            .context("serializing snapshot")?;
        println!("{}", json);
    }

    Ok(())
}

/// Pick the safest turn, preferring ones that close in on the food.
///
/// Restarts immediately after a game over.
fn autopilot(state: &GameState) -> InputFrame {
    if state.is_game_over() {
        return InputFrame::restart();
    }

    let head = state.snake.head();
    let direction = state.snake.direction;
    let target = state.food();

    let best = [None, Some(Turn::Clockwise), Some(Turn::AntiClockwise)]
        .into_iter()
        .filter_map(|turn| {
            let heading = turn.map_or(direction, |t| direction.turned(t));
            let (dx, dy) = heading.delta();
            let next = head.offset(dx, dy);

            let blocked = hits_border(&state.play_area, next)
                || hits_self(&state.snake, next)
                || hits_obstacle(state.obstacles(), next);
            if blocked {
                return None;
            }

            let distance = target.map_or(0, |food| next.manhattan(food));
            Some((turn, distance))
        })
        .min_by_key(|(_, distance)| *distance)
        .and_then(|(turn, _)| turn);

    match best {
        Some(turn) => InputFrame::with_turn(turn),
        None => InputFrame::new(),
    }
}
