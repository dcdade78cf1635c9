//! Match state and lifecycle
//!
//! One [`Match`] owns everything a game needs: snakes, food, the power-up,
//! obstacles, the shared timers and the RNG. The host owns the `Match` and
//! drives it through the transition methods here and `update` in `tick`.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::CollisionKind;
use super::grid::{Direction, Grid, Position};
use super::obstacle::{Obstacle, ObstacleField};
use super::placement::{self, Blockers};
use super::powerup::{EffectClock, PowerUp, PowerUpKind};
use super::rng::{self, RandomSource};
use super::snake::Snake;
use crate::consts::MIN_SNAKE_LENGTH;
use crate::error::ConfigResult;
use crate::highscores::HighScores;
use crate::settings::MatchConfig;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the host to start a match
    Menu,
    /// Active gameplay
    Playing,
    /// Match finished, waiting for restart or return to menu
    GameOver,
    /// Exit requested; terminal
    Exited,
}

/// Number of players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Single,
    TwoPlayer,
}

/// Player slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PlayerId::One),
            1 => Some(PlayerId::Two),
            _ => None,
        }
    }
}

/// Result of a finished two-player match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Winner(PlayerId),
    Tie,
}

/// Things that happened during one `update`, in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    FoodEaten {
        player: PlayerId,
        points: u32,
    },
    PowerUpCollected {
        player: PlayerId,
        kind: PowerUpKind,
    },
    /// A shield took the hit; the snake lost one segment
    ShieldAbsorbed {
        player: PlayerId,
        collision: CollisionKind,
    },
    SnakeDied {
        player: PlayerId,
        collision: CollisionKind,
    },
    ObstacleSpawned {
        cells: Vec<Position>,
    },
    ObstaclesExpired {
        count: usize,
    },
    /// The shared power-up timer ran out and every effect was cleared
    EffectsExpired,
    /// A finished score beat this mode's personal best
    NewPersonalBest {
        player: PlayerId,
        score: u32,
    },
    /// `outcome` is only set in two-player matches
    MatchOver {
        outcome: Option<Outcome>,
    },
}

/// Read-only view of a match for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub mode: Mode,
    pub grid: Grid,
    pub snakes: Vec<Snake>,
    pub obstacles: Vec<Obstacle>,
    pub food: Option<Position>,
    pub power_up: Option<PowerUp>,
    pub move_interval: f32,
    pub outcome: Option<Outcome>,
    /// Personal best in the current mode
    pub best_score: Option<u32>,
}

/// A snake match
pub struct Match<R: RandomSource = Pcg32> {
    pub(crate) config: MatchConfig,
    pub(crate) grid: Grid,
    pub(crate) rng: R,
    pub(crate) phase: GamePhase,
    pub(crate) mode: Mode,
    /// One snake per player, indexed by `PlayerId::index`
    pub(crate) snakes: Vec<Snake>,
    pub(crate) food: Option<Position>,
    pub(crate) power_up: Option<PowerUp>,
    pub(crate) obstacles: ObstacleField,
    /// Shared move interval and effect expiry
    pub(crate) clock: EffectClock,
    /// Seconds since the last movement tick
    pub(crate) move_timer: f32,
    /// Seconds since the last periodic obstacle spawn
    pub(crate) obstacle_timer: f32,
    /// Movement ticks resolved this match
    pub(crate) time_ticks: u64,
    pub(crate) outcome: Option<Outcome>,
    pub(crate) high_scores: HighScores,
    pub(crate) matches_played: u32,
}

impl Match {
    /// Default rules with a seeded RNG
    pub fn new(seed: u64) -> Self {
        Self::build(MatchConfig::default(), rng::seeded(seed))
    }

    pub fn with_config(config: MatchConfig, seed: u64) -> ConfigResult<Self> {
        Self::with_rng(config, rng::seeded(seed))
    }
}

impl<R: RandomSource> Match<R> {
    /// Validate `config` and create a match in the menu, drawing from `rng`
    pub fn with_rng(config: MatchConfig, rng: R) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    fn build(config: MatchConfig, rng: R) -> Self {
        let clock = EffectClock::new(config.move_interval);
        Self {
            config,
            grid: Grid::default(),
            rng,
            phase: GamePhase::Menu,
            mode: Mode::Single,
            snakes: Vec::new(),
            food: None,
            power_up: None,
            obstacles: ObstacleField::new(),
            clock,
            move_timer: 0.0,
            obstacle_timer: 0.0,
            time_ticks: 0,
            outcome: None,
            high_scores: HighScores::new(),
            matches_played: 0,
        }
    }

    // === Transitions ===

    /// Menu -> Playing. Ignored in any other phase.
    pub fn start_match(&mut self, mode: Mode) -> bool {
        if self.phase != GamePhase::Menu {
            log::debug!("start_match ignored in {:?}", self.phase);
            return false;
        }
        self.mode = mode;
        self.reset_board();
        true
    }

    /// GameOver -> Playing with the same mode. Ignored in any other phase.
    pub fn restart_match(&mut self) -> bool {
        if self.phase != GamePhase::GameOver {
            log::debug!("restart_match ignored in {:?}", self.phase);
            return false;
        }
        self.reset_board();
        true
    }

    /// GameOver -> Menu. Ignored in any other phase.
    pub fn return_to_menu(&mut self) -> bool {
        if self.phase != GamePhase::GameOver {
            log::debug!("return_to_menu ignored in {:?}", self.phase);
            return false;
        }
        self.phase = GamePhase::Menu;
        true
    }

    /// Any phase -> Exited. The host should shut down once it sees `Exited`.
    pub fn request_exit(&mut self) -> bool {
        if self.phase == GamePhase::Exited {
            return false;
        }
        log::info!("Exit requested from {:?}", self.phase);
        self.phase = GamePhase::Exited;
        true
    }

    /// Fresh snakes, items, obstacles and timers; keeps the high score table
    fn reset_board(&mut self) {
        let Grid { width, height } = self.grid;
        let mid_y = height / 2;

        self.snakes = match self.mode {
            Mode::Single => vec![Snake::new(
                Position::new(width / 2, mid_y),
                Direction::Right,
                MIN_SNAKE_LENGTH,
            )],
            // Each snake centered in its half, heading away from the other
            Mode::TwoPlayer => vec![
                Snake::new(
                    Position::new(width / 4, mid_y),
                    Direction::Left,
                    MIN_SNAKE_LENGTH,
                ),
                Snake::new(
                    Position::new(width / 2 + width / 4, mid_y),
                    Direction::Right,
                    MIN_SNAKE_LENGTH,
                ),
            ],
        };

        self.obstacles.clear();
        self.clock = EffectClock::new(self.config.move_interval);
        self.move_timer = 0.0;
        self.obstacle_timer = 0.0;
        self.time_ticks = 0;
        self.outcome = None;
        self.food = None;
        self.power_up = None;

        self.relocate_food();
        self.relocate_power_up();

        let blockers = Blockers::new(self.snakes.iter())
            .with_items(self.food, self.power_up.map(|p| p.pos));
        let placed = self
            .obstacles
            .spawn_batch(&self.grid, &self.config, &mut self.rng, &blockers);

        self.matches_played += 1;
        self.phase = GamePhase::Playing;
        log::info!(
            "Match {} started ({:?}, {} obstacles)",
            self.matches_played,
            self.mode,
            placed
        );
    }

    /// Move the food to a free cell; stays put if the board is full
    pub(crate) fn relocate_food(&mut self) {
        let blockers = Blockers::new(self.snakes.iter());
        if let Some(pos) = placement::place_food(&self.grid, &mut self.rng, &blockers, &self.obstacles)
        {
            self.food = Some(pos);
        }
    }

    /// Move the power-up to a free cell and give it a new kind
    pub(crate) fn relocate_power_up(&mut self) {
        let blockers = Blockers::new(self.snakes.iter()).with_items(self.food, None);
        let pos =
            placement::place_power_up(&self.grid, &mut self.rng, &blockers, &self.obstacles);
        let kind = PowerUpKind::pick(&self.config.powerups, &mut self.rng);
        match (pos, self.power_up) {
            (Some(pos), _) => self.power_up = Some(PowerUp { pos, kind }),
            (None, Some(current)) => self.power_up = Some(PowerUp { kind, ..current }),
            (None, None) => {}
        }
    }

    // === Accessors ===

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// `None` for player two in a single-player match, and before the first match
    pub fn snake(&self, player: PlayerId) -> Option<&Snake> {
        self.snakes.get(player.index())
    }

    pub fn snakes(&self) -> &[Snake] {
        &self.snakes
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        self.obstacles.obstacles()
    }

    /// `None` only in the menu (or if the board was full when it had to move)
    pub fn food(&self) -> Option<Position> {
        self.food
    }

    pub fn power_up(&self) -> Option<PowerUp> {
        self.power_up
    }

    pub fn move_interval(&self) -> f32 {
        self.clock.move_interval()
    }

    /// Seconds left on the shared effect timer, if any effect is active
    pub fn effect_time_remaining(&self) -> Option<f32> {
        self.clock.remaining()
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Winner of a finished two-player match
    pub fn winner(&self) -> Option<Outcome> {
        if self.phase == GamePhase::GameOver {
            self.outcome
        } else {
            None
        }
    }

    /// Personal best in the current mode for this run
    pub fn best_score(&self) -> Option<u32> {
        self.high_scores.best(self.mode).map(|best| best.score)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            mode: self.mode,
            grid: self.grid,
            snakes: self.snakes.clone(),
            obstacles: self.obstacles.obstacles().to_vec(),
            food: self.food,
            power_up: self.power_up,
            move_interval: self.clock.move_interval(),
            outcome: self.winner(),
            best_score: self.best_score(),
        }
    }
}
