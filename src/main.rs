//! Snake Arena entry point
//!
//! Headless native host: runs one match with a simple wall-avoiding autopilot
//! at a fixed frame rate, logs events, and prints the final snapshot as JSON.
//!
//! Usage: `snake-arena [seed] [single|two] [classic|shaped]`

use snake_arena::sim::{
    Direction, GameEvent, GamePhase, Grid, Match, Mode, PlayerId, Snake, TickInput,
};
use snake_arena::{MatchConfig, ObstacleStyle};

/// Host frame time (seconds)
const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up after this much simulated time
const MAX_SECONDS: f32 = 300.0;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(42);
    let mode = match args.next().as_deref() {
        Some("single") | Some("1") => Mode::Single,
        _ => Mode::TwoPlayer,
    };
    let style = args
        .next()
        .and_then(|s| ObstacleStyle::from_str(&s))
        .unwrap_or_default();

    log::info!(
        "Snake Arena (native) starting: seed {}, {:?}, {} obstacles",
        seed,
        mode,
        style.as_str()
    );

    let mut game = match Match::with_config(MatchConfig::from_preset(style), seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid match config: {}", e);
            std::process::exit(1);
        }
    };
    game.start_match(mode);

    let mut elapsed = 0.0;
    while game.phase() == GamePhase::Playing && elapsed < MAX_SECONDS {
        let input = TickInput::pair(
            autopilot(&game, PlayerId::One),
            autopilot(&game, PlayerId::Two),
        );
        for event in game.update(FRAME_DT, &input) {
            log_event(&event);
        }
        elapsed += FRAME_DT;
    }

    if game.phase() == GamePhase::Playing {
        log::info!("Time limit reached after {:.0}s", elapsed);
        game.request_exit();
    }

    match serde_json::to_string_pretty(&game.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The core is embedded by a host page; nothing to run here
}

/// Keep heading unless the next cell is fatal, then take the first safe turn
fn autopilot<R: snake_arena::sim::RandomSource>(
    game: &Match<R>,
    player: PlayerId,
) -> Option<Direction> {
    let snake = game.snake(player).filter(|s| s.is_alive())?;
    let grid = game.grid();
    let heading = snake.next_heading();
    if is_safe(game, &grid, snake, heading) {
        return None;
    }
    Direction::ALL
        .into_iter()
        .filter(|d| !d.is_opposite(snake.heading()))
        .find(|&d| is_safe(game, &grid, snake, d))
}

fn is_safe<R: snake_arena::sim::RandomSource>(
    game: &Match<R>,
    grid: &Grid,
    snake: &Snake,
    dir: Direction,
) -> bool {
    let next = snake.head() + dir.delta();
    grid.in_bounds(next)
        && !game.obstacles().iter().any(|o| o.contains(next))
        && !game
            .snakes()
            .iter()
            .filter(|s| s.is_alive())
            .any(|s| s.occupies(next))
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::SnakeDied { player, collision } => {
            log::info!("{:?} died: {:?}", player, collision)
        }
        GameEvent::MatchOver { outcome } => log::info!("Match over: {:?}", outcome),
        other => log::debug!("{:?}", other),
    }
}
