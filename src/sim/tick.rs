//! Per-frame update and movement resolution
//!
//! `update` advances every timer by the same elapsed time, then runs at most
//! one movement tick when the move accumulator reaches the current interval.
//! A movement tick advances every living snake first, then resolves each one
//! in player order: fatal collisions, then food, then the power-up.

use super::collision::{self, CollisionKind};
use super::grid::Direction;
use super::placement::Blockers;
use super::powerup::PowerUpKind;
use super::rng::RandomSource;
use super::snake::Advance;
use super::state::{GameEvent, GamePhase, Match, Mode, Outcome, PlayerId};
use crate::consts::{FOOD_POINTS, MIN_SNAKE_LENGTH};

/// Directional intent per player for one update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Indexed by `PlayerId::index`; `None` keeps the current heading
    pub players: [Option<Direction>; 2],
}

impl TickInput {
    pub fn single(dir: Option<Direction>) -> Self {
        Self {
            players: [dir, None],
        }
    }

    pub fn pair(one: Option<Direction>, two: Option<Direction>) -> Self {
        Self {
            players: [one, two],
        }
    }

    pub fn intent(&self, player: PlayerId) -> Option<Direction> {
        self.players[player.index()]
    }
}

impl<R: RandomSource> Match<R> {
    /// Advance the match by `dt` seconds.
    ///
    /// Does nothing outside `Playing`. Returns the events produced, in order.
    pub fn update(&mut self, dt: f32, input: &TickInput) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase != GamePhase::Playing {
            return events;
        }

        for (i, snake) in self.snakes.iter_mut().enumerate() {
            let intent = PlayerId::from_index(i).and_then(|player| input.intent(player));
            if let Some(dir) = intent {
                if snake.is_alive() {
                    snake.steer(dir);
                }
            }
        }

        let expired = self.obstacles.tick(dt, self.config.obstacle_fade_window);
        if expired > 0 {
            log::debug!("{} obstacle(s) expired", expired);
            events.push(GameEvent::ObstaclesExpired { count: expired });
        }

        if self.clock.tick(dt) {
            self.expire_effects();
            events.push(GameEvent::EffectsExpired);
        }

        self.obstacle_timer += dt;
        if self.obstacle_timer >= self.config.obstacle_spawn_interval {
            self.obstacle_timer = 0.0;
            self.spawn_obstacle(&mut events);
        }

        self.move_timer += dt;
        if self.move_timer >= self.clock.move_interval() {
            self.move_timer = 0.0;
            self.resolve_movement(&mut events);
            self.check_match_over(&mut events);
        }

        events
    }

    /// Clear every snake's effects and move/re-roll the power-up
    fn expire_effects(&mut self) {
        for snake in &mut self.snakes {
            snake.effects.clear();
        }
        self.relocate_power_up();
        log::debug!("Power-up effects expired");
    }

    fn spawn_obstacle(&mut self, events: &mut Vec<GameEvent>) {
        let blockers = Blockers::new(self.snakes.iter())
            .with_items(self.food, self.power_up.map(|p| p.pos));
        if let Some(idx) =
            self.obstacles
                .try_spawn_one(&self.grid, &self.config, &mut self.rng, &blockers)
        {
            let cells = self.obstacles.obstacles()[idx].cells.clone();
            events.push(GameEvent::ObstacleSpawned { cells });
        }
    }

    /// One movement tick
    fn resolve_movement(&mut self, events: &mut Vec<GameEvent>) {
        self.time_ticks += 1;

        let alive_at_start: Vec<bool> = self.snakes.iter().map(|s| s.is_alive()).collect();
        let moves: Vec<Option<Advance>> = self
            .snakes
            .iter_mut()
            .map(|s| s.is_alive().then(|| s.advance()))
            .collect();

        let mut food_eaten = false;
        let mut power_up_taken = false;

        for (i, step) in moves.into_iter().enumerate() {
            let Some(step) = step else {
                continue;
            };
            let Some(player) = PlayerId::from_index(i) else {
                continue;
            };

            // The other snake counts if it was alive when the tick began,
            // even if it died earlier in this pass
            let collision = {
                let opponent = match self.mode {
                    Mode::TwoPlayer => {
                        let j = 1 - i;
                        alive_at_start
                            .get(j)
                            .copied()
                            .unwrap_or(false)
                            .then(|| &self.snakes[j])
                    }
                    Mode::Single => None,
                };
                collision::detect(&self.grid, &self.snakes[i], opponent, &self.obstacles)
            };

            if let Some(kind) = collision {
                self.resolve_collision(player, step, kind, events);
                continue;
            }

            food_eaten |= self.check_food(player, events);
            power_up_taken |= self.check_power_up(player, events);
        }

        // Items move once every snake has settled, so a later shield retreat
        // can't pull a body back over a freshly placed item
        if food_eaten {
            self.relocate_food();
        }
        if power_up_taken {
            self.relocate_power_up();
        }
    }

    /// Absorb the hit with a shield if possible, otherwise the snake dies
    fn resolve_collision(
        &mut self,
        player: PlayerId,
        step: Advance,
        kind: CollisionKind,
        events: &mut Vec<GameEvent>,
    ) {
        let snake = &mut self.snakes[player.index()];

        // The shield costs a segment, so a minimum-length snake can't use it
        if snake.effects.shield && snake.len() > MIN_SNAKE_LENGTH {
            snake.retreat(step);
            snake.shrink();
            snake.effects.shield = false;
            log::debug!("{:?} shield absorbed {:?} collision", player, kind);
            events.push(GameEvent::ShieldAbsorbed {
                player,
                collision: kind,
            });
            return;
        }

        snake.alive = false;
        log::debug!(
            "{:?} died ({:?}) with score {}",
            player,
            kind,
            snake.score
        );
        events.push(GameEvent::SnakeDied {
            player,
            collision: kind,
        });
    }

    fn check_food(&mut self, player: PlayerId, events: &mut Vec<GameEvent>) -> bool {
        let snake = &mut self.snakes[player.index()];
        if self.food != Some(snake.head()) {
            return false;
        }

        let points = if snake.effects.double_points {
            FOOD_POINTS * 2
        } else {
            FOOD_POINTS
        };
        snake.score += points;
        snake.grow();
        events.push(GameEvent::FoodEaten { player, points });
        true
    }

    fn check_power_up(&mut self, player: PlayerId, events: &mut Vec<GameEvent>) -> bool {
        let Some(power_up) = self.power_up else {
            return false;
        };
        let snake = &mut self.snakes[player.index()];
        if power_up.pos != snake.head() {
            return false;
        }

        match power_up.kind {
            PowerUpKind::Speed => self.clock.scale_interval(self.config.speed_factor),
            PowerUpKind::Slow => self.clock.scale_interval(self.config.slow_factor),
            PowerUpKind::Shield => snake.effects.shield = true,
            PowerUpKind::DoublePoints => snake.effects.double_points = true,
        }
        self.clock.restart(self.config.powerup_duration);
        log::debug!("{:?} collected {:?}", player, power_up.kind);
        events.push(GameEvent::PowerUpCollected {
            player,
            kind: power_up.kind,
        });
        true
    }

    /// Single player ends when the snake dies; two-player when both have
    fn check_match_over(&mut self, events: &mut Vec<GameEvent>) {
        if self.snakes.iter().any(|s| s.is_alive()) {
            return;
        }

        self.outcome = match self.mode {
            Mode::Single => None,
            Mode::TwoPlayer => {
                let one = self.snakes[0].score;
                let two = self.snakes[1].score;
                Some(match one.cmp(&two) {
                    std::cmp::Ordering::Greater => Outcome::Winner(PlayerId::One),
                    std::cmp::Ordering::Less => Outcome::Winner(PlayerId::Two),
                    std::cmp::Ordering::Equal => Outcome::Tie,
                })
            }
        };
        self.phase = GamePhase::GameOver;

        for (i, snake) in self.snakes.iter().enumerate() {
            let Some(player) = PlayerId::from_index(i) else {
                continue;
            };
            if self
                .high_scores
                .record(self.mode, snake.score, self.matches_played)
            {
                log::info!("{:?} set a new {:?} best: {}", player, self.mode, snake.score);
                events.push(GameEvent::NewPersonalBest {
                    player,
                    score: snake.score,
                });
            }
        }

        log::info!(
            "Match {} over after {} ticks: {:?}",
            self.matches_played,
            self.time_ticks,
            self.outcome
        );
        events.push(GameEvent::MatchOver {
            outcome: self.outcome,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MatchConfig;
    use crate::sim::grid::Position;
    use crate::sim::obstacle::{Obstacle, ObstacleShape};
    use crate::sim::powerup::PowerUp;
    use crate::sim::rng::ScriptedSource;
    use crate::sim::snake::Snake;
    use glam::IVec2;

    const DT: f32 = 0.15;

    fn p(x: i32, y: i32) -> Position {
        IVec2::new(x, y)
    }

    /// A started match with an empty board and items parked in the corner
    fn clear_match(mode: Mode) -> Match<ScriptedSource> {
        let mut game = Match::with_rng(
            MatchConfig::default(),
            ScriptedSource::new(vec![7, 3, 11, 5, 2, 13, 1, 17]),
        )
        .expect("valid config");
        game.start_match(mode);
        game.obstacles.clear();
        game.food = Some(p(0, 0));
        game.power_up = Some(PowerUp {
            pos: p(39, 29),
            kind: PowerUpKind::Shield,
        });
        game
    }

    fn wall_at(game: &mut Match<ScriptedSource>, cell: Position) {
        game.obstacles
            .insert(Obstacle::new(ObstacleShape::Single, cell, 100.0));
    }

    #[test]
    fn test_single_step_moves_head() {
        let mut game = clear_match(Mode::Single);
        game.snakes[0] = Snake::new(p(5, 5), Direction::Right, 3);

        let events = game.update(DT, &TickInput::single(Some(Direction::Right)));

        let snake = game.snake(PlayerId::One).expect("player one");
        assert_eq!(snake.segments(), &[p(6, 5), p(5, 5), p(4, 5)]);
        assert_eq!(snake.len(), 3);
        assert!(events.is_empty());
        assert_eq!(game.time_ticks(), 1);
    }

    #[test]
    fn test_move_waits_for_interval() {
        let mut game = clear_match(Mode::Single);
        game.snakes[0] = Snake::new(p(5, 5), Direction::Right, 3);

        game.update(0.1, &TickInput::default());
        assert_eq!(game.snakes[0].head(), p(5, 5));
        game.update(0.1, &TickInput::default());
        assert_eq!(game.snakes[0].head(), p(6, 5));
        // Accumulator resets to zero rather than carrying the remainder
        game.update(0.1, &TickInput::default());
        assert_eq!(game.snakes[0].head(), p(6, 5));
    }

    #[test]
    fn test_reverse_intent_is_ignored() {
        let mut game = clear_match(Mode::Single);
        game.snakes[0] = Snake::new(p(5, 5), Direction::Right, 3);

        game.update(DT, &TickInput::single(Some(Direction::Left)));
        assert_eq!(game.snakes[0].head(), p(6, 5));
        assert!(game.snakes[0].is_alive());
    }

    #[test]
    fn test_quick_turns_cannot_reverse() {
        let mut game = clear_match(Mode::Single);
        game.snakes[0] = Snake::new(p(5, 5), Direction::Right, 3);

        // Up then Left within one movement interval: Left is still checked
        // against Right, so it is dropped and Up stays queued
        game.update(0.06, &TickInput::single(Some(Direction::Up)));
        game.update(0.06, &TickInput::single(Some(Direction::Left)));
        game.update(0.06, &TickInput::default());
        assert_eq!(game.snakes[0].head(), p(5, 4));
        assert!(game.snakes[0].is_alive());
    }

    #[test]
    fn test_wall_kills() {
        let mut game = clear_match(Mode::Single);
        game.snakes[0] = Snake::new(p(0, 5), Direction::Left, 3);

        let events = game.update(DT, &TickInput::default());

        assert!(!game.snakes[0].is_alive());
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(
            events,
            vec![
                GameEvent::SnakeDied {
                    player: PlayerId::One,
                    collision: CollisionKind::Boundary,
                },
                GameEvent::MatchOver { outcome: None },
            ]
        );
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_shield_absorbs_obstacle_hit() {
        let mut game = clear_match(Mode::Single);
        game.snakes[0] = Snake::new(p(5, 5), Direction::Right, 5);
        game.snakes[0].effects.shield = true;
        wall_at(&mut game, p(6, 5));

        let events = game.update(DT, &TickInput::default());

        let snake = &game.snakes[0];
        assert!(snake.is_alive());
        assert!(!snake.has_shield());
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), p(5, 5));
        assert!(game.grid.in_bounds(snake.head()));
        assert_eq!(
            events,
            vec![GameEvent::ShieldAbsorbed {
                player: PlayerId::One,
                collision: CollisionKind::Obstacle,
            }]
        );
        assert_eq!(game.phase(), GamePhase::Playing);

        // Second hit with the shield gone is fatal
        game.update(DT, &TickInput::default());
        assert!(!game.snakes[0].is_alive());
        assert_eq!(game.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_shield_cannot_save_minimum_length_snake() {
        let mut game = clear_match(Mode::Single);
        game.snakes[0] = Snake::new(p(39, 5), Direction::Right, 3);
        game.snakes[0].effects.shield = true;

        let events = game.update(DT, &TickInput::default());

        assert!(!game.snakes[0].is_alive());
        assert_eq!(game.snakes[0].head(), p(40, 5));
        assert!(matches!(
            events[0],
            GameEvent::SnakeDied {
                collision: CollisionKind::Boundary,
                ..
            }
        ));
    }

    #[test]
    fn test_shield_saves_snake_that_just_ate() {
        let mut game = clear_match(Mode::Single);
        game.snakes[0] = Snake::new(p(5, 5), Direction::Right, 3);
        game.snakes[0].effects.shield = true;
        game.food = Some(p(6, 5));
        wall_at(&mut game, p(7, 5));

        game.update(DT, &TickInput::default());
        assert_eq!(game.snakes[0].score(), 1);
        assert_eq!(game.snakes[0].len(), 4);

        let events = game.update(DT, &TickInput::default());

        let snake = &game.snakes[0];
        assert!(snake.is_alive());
        assert!(!snake.has_shield());
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), p(6, 5));
        assert_eq!(
            events,
            vec![GameEvent::ShieldAbsorbed {
                player: PlayerId::One,
                collision: CollisionKind::Obstacle,
            }]
        );
    }

    #[test]
    fn test_self_collision() {
        let mut game = clear_match(Mode::Single);
        game.snakes[0] = Snake::new(p(5, 5), Direction::Right, 5);

        game.update(DT, &TickInput::single(Some(Direction::Down)));
        game.update(DT, &TickInput::single(Some(Direction::Left)));
        let events = game.update(DT, &TickInput::single(Some(Direction::Up)));

        assert!(!game.snakes[0].is_alive());
        assert!(matches!(
            events[0],
            GameEvent::SnakeDied {
                collision: CollisionKind::SelfBody,
                ..
            }
        ));
    }

    #[test]
    fn test_food_scores_and_grows() {
        let mut game = clear_match(Mode::Single);
        game.snakes[0] = Snake::new(p(5, 5), Direction::Right, 3);
        game.food = Some(p(6, 5));

        let events = game.update(DT, &TickInput::default());

        let snake = &game.snakes[0];
        assert_eq!(snake.score(), 1);
        assert_eq!(snake.len(), 4);
        assert_eq!(
            events,
            vec![GameEvent::FoodEaten {
                player: PlayerId::One,
                points: 1,
            }]
        );
        let food = game.food().expect("food relocated");
        assert_ne!(food, p(6, 5));
        assert!(!snake.occupies(food));

        game.update(DT, &TickInput::default());
        assert_eq!(game.snakes[0].len(), 4);
    }

    #[test]
    fn test_double_points() {
        let mut game = clear_match(Mode::Single);
        game.snakes[0] = Snake::new(p(5, 5), Direction::Right, 3);
        game.snakes[0].effects.double_points = true;
        game.food = Some(p(6, 5));

        game.update(DT, &TickInput::default());
        assert_eq!(game.snakes[0].score(), 2);
    }

    #[test]
    fn test_speed_power_up_then_expiry() {
        let mut game = clear_match(Mode::Single);
        game.snakes[0] = Snake::new(p(5, 5), Direction::Right, 3);
        game.snakes[0].effects.double_points = true;
        game.power_up = Some(PowerUp {
            pos: p(6, 5),
            kind: PowerUpKind::Speed,
        });

        let events = game.update(DT, &TickInput::default());
        assert!(events.contains(&GameEvent::PowerUpCollected {
            player: PlayerId::One,
            kind: PowerUpKind::Speed,
        }));
        assert_eq!(game.move_interval(), 0.075);
        assert_eq!(game.effect_time_remaining(), Some(5.0));
        assert_ne!(game.power_up().map(|p| p.pos), Some(p(6, 5)));

        // Let the shared timer run out without moving far
        game.snakes[0] = Snake::new(p(5, 5), Direction::Down, 3);
        game.snakes[0].effects = crate::sim::powerup::SnakeEffects {
            shield: true,
            double_points: true,
        };
        let events = game.update(5.0, &TickInput::default());
        assert!(events.contains(&GameEvent::EffectsExpired));
        assert_eq!(game.move_interval(), 0.15);
        assert!(!game.snakes[0].has_shield());
        assert!(!game.snakes[0].double_points());
        assert_eq!(game.effect_time_remaining(), None);
    }

    #[test]
    fn test_expiry_clears_effects_for_both_players() {
        let mut game = clear_match(Mode::TwoPlayer);
        game.snakes[0] = Snake::new(p(5, 5), Direction::Right, 3);
        game.snakes[0].effects.shield = true;
        game.snakes[1] = Snake::new(p(5, 20), Direction::Right, 3);
        game.snakes[1].effects.double_points = true;
        game.clock.scale_interval(game.config.speed_factor);
        game.clock.restart(0.1);

        let events = game.update(DT, &TickInput::default());

        let expired = events
            .iter()
            .filter(|e| **e == GameEvent::EffectsExpired)
            .count();
        assert_eq!(expired, 1);
        assert!(!game.snakes[0].has_shield());
        assert!(!game.snakes[1].double_points());
        assert!(game.snakes.iter().all(|s| !s.effects().any()));
        assert_eq!(game.move_interval(), 0.15);
        assert_eq!(game.effect_time_remaining(), None);
    }

    #[test]
    fn test_shield_and_slow_pickups() {
        let mut game = clear_match(Mode::TwoPlayer);
        game.snakes[0] = Snake::new(p(5, 5), Direction::Right, 3);
        game.snakes[1] = Snake::new(p(5, 20), Direction::Right, 3);
        game.power_up = Some(PowerUp {
            pos: p(6, 5),
            kind: PowerUpKind::Shield,
        });

        game.update(DT, &TickInput::default());
        assert!(game.snakes[0].has_shield());
        assert!(!game.snakes[1].has_shield());

        game.power_up = Some(PowerUp {
            pos: p(7, 20),
            kind: PowerUpKind::Slow,
        });
        game.update(DT, &TickInput::default());
        assert!((game.move_interval() - 0.225).abs() < 1e-6);
        // Player two's pickup restarted the one shared timer
        assert_eq!(game.effect_time_remaining(), Some(5.0));
    }

    #[test]
    fn test_head_on_opponent_body() {
        let mut game = clear_match(Mode::TwoPlayer);
        // A moves down into (10,10), which B's body still covers after B moves
        game.snakes[0] = Snake::new(p(10, 9), Direction::Down, 3);
        game.snakes[1] = Snake::new(p(12, 10), Direction::Right, 4);

        let events = game.update(DT, &TickInput::default());

        assert!(!game.snakes[0].is_alive());
        assert!(game.snakes[1].is_alive());
        assert_eq!(game.snakes[1].head(), p(13, 10));
        assert_eq!(
            events,
            vec![GameEvent::SnakeDied {
                player: PlayerId::One,
                collision: CollisionKind::Opponent,
            }]
        );
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_two_player_ends_when_both_dead() {
        let mut game = clear_match(Mode::TwoPlayer);
        game.snakes[0] = Snake::new(p(0, 5), Direction::Left, 3);
        game.snakes[0].score = 4;
        game.snakes[1] = Snake::new(p(20, 20), Direction::Right, 3);
        game.snakes[1].score = 2;

        game.update(DT, &TickInput::default());
        assert!(!game.snakes[0].is_alive());
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.winner(), None);

        // Dead snakes ignore input and stay put
        game.snakes[1] = Snake::new(p(39, 20), Direction::Right, 3);
        game.snakes[1].score = 2;
        let events = game.update(DT, &TickInput::pair(Some(Direction::Up), None));
        assert_eq!(game.snakes[0].head(), p(-1, 5));
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.winner(), Some(Outcome::Winner(PlayerId::One)));
        assert_eq!(
            events.last(),
            Some(&GameEvent::MatchOver {
                outcome: Some(Outcome::Winner(PlayerId::One)),
            })
        );
        assert!(events.contains(&GameEvent::NewPersonalBest {
            player: PlayerId::One,
            score: 4,
        }));
        assert_eq!(game.best_score(), Some(4));
    }

    #[test]
    fn test_mutual_head_on_is_tie_without_shields() {
        let mut game = clear_match(Mode::TwoPlayer);
        game.snakes[0] = Snake::new(p(10, 10), Direction::Right, 3);
        game.snakes[1] = Snake::new(p(12, 10), Direction::Left, 3);

        game.update(DT, &TickInput::default());

        assert!(!game.snakes[0].is_alive());
        assert!(!game.snakes[1].is_alive());
        assert_eq!(game.winner(), Some(Outcome::Tie));
    }

    #[test]
    fn test_mutual_head_on_shield_resolves_in_player_order() {
        let mut game = clear_match(Mode::TwoPlayer);
        game.snakes[0] = Snake::new(p(10, 10), Direction::Right, 5);
        game.snakes[0].effects.shield = true;
        game.snakes[1] = Snake::new(p(12, 10), Direction::Left, 3);

        game.update(DT, &TickInput::default());

        // Player one backs off before player two is checked, so both survive
        assert!(game.snakes[0].is_alive());
        assert_eq!(game.snakes[0].len(), 4);
        assert!(game.snakes[1].is_alive());
        assert_eq!(game.snakes[1].head(), p(11, 10));

        // Swap who holds the shield: player one dies first and its body
        // still blocks, so player two spends its shield
        let mut game = clear_match(Mode::TwoPlayer);
        game.snakes[0] = Snake::new(p(10, 10), Direction::Right, 3);
        game.snakes[1] = Snake::new(p(12, 10), Direction::Left, 5);
        game.snakes[1].effects.shield = true;

        game.update(DT, &TickInput::default());

        assert!(!game.snakes[0].is_alive());
        assert!(game.snakes[1].is_alive());
        assert!(!game.snakes[1].has_shield());
        assert_eq!(game.snakes[1].len(), 4);
    }

    #[test]
    fn test_obstacles_expire_and_respawn() {
        let mut game = clear_match(Mode::Single);
        game.snakes[0] = Snake::new(p(20, 15), Direction::Right, 3);
        game.obstacles
            .insert(Obstacle::new(ObstacleShape::Single, p(1, 28), 0.1));

        // Keep the snake from walking anywhere during the long update
        game.move_timer = f32::MIN;
        let events = game.update(5.0, &TickInput::default());

        assert!(events.contains(&GameEvent::ObstaclesExpired { count: 1 }));
        assert!(
            events
                .iter()
                .any(|e| matches!(e, GameEvent::ObstacleSpawned { .. }))
        );
        assert_eq!(game.obstacle_timer, 0.0);
    }

    #[test]
    fn test_update_outside_playing_is_noop() {
        let mut game = Match::new(5);
        assert!(game.update(1.0, &TickInput::default()).is_empty());
        assert_eq!(game.phase(), GamePhase::Menu);
    }

    #[test]
    fn test_restart_and_menu() {
        let mut game = clear_match(Mode::Single);
        game.snakes[0] = Snake::new(p(0, 5), Direction::Left, 3);
        game.snakes[0].score = 3;
        game.update(DT, &TickInput::default());
        assert_eq!(game.phase(), GamePhase::GameOver);

        assert!(game.restart_match());
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.snakes[0].score(), 0);
        assert!(game.snakes[0].is_alive());
        assert_eq!(game.move_interval(), 0.15);
        assert_eq!(game.best_score(), Some(3));

        game.snakes[0] = Snake::new(p(0, 5), Direction::Left, 3);
        game.obstacles.clear();
        game.update(DT, &TickInput::default());
        assert!(game.return_to_menu());
        assert_eq!(game.phase(), GamePhase::Menu);
        assert!(game.start_match(Mode::TwoPlayer));
        assert_eq!(game.snakes().len(), 2);
    }
}
