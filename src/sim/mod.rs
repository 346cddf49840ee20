//! Presentation-agnostic game core.
//!
//! The simulation advances in fixed ticks: input is applied atomically, then
//! physics, spawning, scoring and collisions run in a fixed order. Rendering
//! and audio live entirely outside; each tick returns the cues they need.

mod config;
mod entity;
mod spawn;

use serde::{Deserialize, Serialize};
use strum::Display;

pub use crate::sim::config::SimConfig;
pub use crate::sim::entity::{Character, Ground, Obstacle, PipePair, Rect};
use crate::sim::spawn::Spawner;

/// Lifecycle of a session. Physics only runs while `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum GamePhase {
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// Input sampled once per tick and applied before the physics phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimInput {
    pub flap: bool,
    pub pause: bool,
    pub restart: bool,
}

/// Fire-and-forget cues for the renderer/audio collaborators. `Hit` is the
/// ground/ceiling terminal cue, `Crash` the pipe/obstacle one; the phase
/// transition behind them is identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum SimEvent {
    Flap,
    Score,
    Hit,
    Crash,
}

pub struct Simulation {
    config: SimConfig,
    phase: GamePhase,
    character: Character,
    pipes: Vec<PipePair>,
    obstacles: Vec<Obstacle>,
    ground: Ground,
    spawner: Spawner,
    score: u32,
    ticks: u64,
}

impl Simulation {
    pub fn new(config: SimConfig, seed: Option<u64>) -> Self {
        let character = Character::new(&config);
        let ground = Ground::new(&config);
        let spawner = Spawner::new(&config, seed);
        Simulation {
            config,
            phase: GamePhase::Menu,
            character,
            pipes: Vec::new(),
            obstacles: Vec::new(),
            ground,
            spawner,
            score: 0,
            ticks: 0,
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// Order within a tick: input, character physics, entity movement and
    /// spawning, scoring against the updated positions, then collisions.
    /// Scoring before collision means a pipe cleared and a crash into the
    /// next one can both happen on the same tick.
    pub fn tick(&mut self, input: &SimInput) -> Vec<SimEvent> {
        let mut events = Vec::new();

        if input.flap {
            match self.phase {
                GamePhase::Menu => {
                    self.phase = GamePhase::Playing;
                    self.character.flap(&self.config);
                    events.push(SimEvent::Flap);
                },
                GamePhase::Playing => {
                    self.character.flap(&self.config);
                    events.push(SimEvent::Flap);
                },
                // The original restarts on flap from the game-over screen too.
                GamePhase::GameOver => self.restart(),
                GamePhase::Paused => {},
            }
        }
        if input.pause {
            match self.phase {
                GamePhase::Playing => self.phase = GamePhase::Paused,
                GamePhase::Paused => self.phase = GamePhase::Playing,
                _ => {},
            }
        }
        if input.restart && self.phase == GamePhase::GameOver {
            self.restart();
        }

        if self.phase != GamePhase::Playing {
            return events;
        }
        self.ticks += 1;

        self.character.update(&self.config);

        for pipe in self.pipes.iter_mut() {
            pipe.advance(self.config.pipe_speed);
        }
        self.pipes.retain(|pipe| !pipe.is_off_screen());

        for obstacle in self.obstacles.iter_mut() {
            obstacle.advance(self.config.obstacle_speed);
        }
        self.obstacles.retain(|obstacle| !obstacle.is_off_screen());

        if let Some((pipe, obstacle)) = self.spawner.tick(&self.config) {
            self.pipes.push(pipe);
            if let Some(obstacle) = obstacle {
                self.obstacles.push(obstacle);
            }
        }

        self.ground.scroll(self.config.pipe_speed);

        let character_rect = self.character.rect();

        for pipe in self.pipes.iter_mut() {
            if !pipe.passed && character_rect.x > pipe.right() {
                pipe.passed = true;
                self.score += 1;
                events.push(SimEvent::Score);
            }
        }

        let blocked = self.pipes.iter().any(|pipe| pipe.collides(&character_rect))
            || self.obstacles.iter().any(|obstacle| character_rect.intersects(&obstacle.rect()));
        let grounded = character_rect.intersects(&self.ground.rect()) || self.character.y < 0.0;

        if blocked {
            events.push(SimEvent::Crash);
            self.phase = GamePhase::GameOver;
        } else if grounded {
            events.push(SimEvent::Hit);
            self.phase = GamePhase::GameOver;
        }

        events
    }

    /// Begins a fresh run: entities and score reset, the high score (owned by
    /// the caller) is untouched.
    fn restart(&mut self) {
        self.character = Character::new(&self.config);
        self.pipes.clear();
        self.obstacles.clear();
        self.spawner.reset();
        self.score = 0;
        self.ticks = 0;
        self.phase = GamePhase::Playing;
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn pipes(&self) -> &[PipePair] {
        &self.pipes
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn ground(&self) -> &Ground {
        &self.ground
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FLAP: SimInput = SimInput { flap: true, pause: false, restart: false };
    const PAUSE: SimInput = SimInput { flap: false, pause: true, restart: false };
    const RESTART: SimInput = SimInput { flap: false, pause: false, restart: true };
    const IDLE: SimInput = SimInput { flap: false, pause: false, restart: false };

    fn playing_sim() -> Simulation {
        let mut sim = Simulation::new(SimConfig::default(), Some(42));
        sim.tick(&FLAP);
        assert_eq!(sim.phase(), GamePhase::Playing);
        sim
    }

    #[test]
    fn test_menu_transitions_to_playing_on_flap() {
        let mut sim = Simulation::new(SimConfig::default(), Some(1));
        assert_eq!(sim.phase(), GamePhase::Menu);
        let events = sim.tick(&IDLE);
        assert_eq!(sim.phase(), GamePhase::Menu);
        assert!(events.is_empty());
        let events = sim.tick(&FLAP);
        assert_eq!(sim.phase(), GamePhase::Playing);
        assert_eq!(events, vec![SimEvent::Flap]);
    }

    #[test]
    fn test_no_physics_outside_playing() {
        let mut sim = Simulation::new(SimConfig::default(), Some(1));
        let start_y = sim.character().y;
        sim.tick(&IDLE);
        assert_eq!(sim.character().y, start_y);

        let mut sim = playing_sim();
        sim.tick(&PAUSE);
        assert_eq!(sim.phase(), GamePhase::Paused);
        let y = sim.character().y;
        let ticks = sim.ticks();
        sim.tick(&IDLE);
        assert_eq!(sim.character().y, y);
        assert_eq!(sim.ticks(), ticks);
        sim.tick(&PAUSE);
        assert_eq!(sim.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_score_increments_once_per_pipe() {
        let mut sim = playing_sim();
        // A pipe just ahead of the character, gap wide open around its
        // post-flap glide (the character rect spans roughly 218..266 while
        // the pipe is still alongside).
        let pipe = PipePair::new(10.0, 190.0, &sim.config);
        sim.pipes.push(pipe);

        let mut score_events = 0;
        for _ in 0..20 {
            let events = sim.tick(&IDLE);
            score_events += events.iter().filter(|e| **e == SimEvent::Score).count();
            if sim.phase() == GamePhase::GameOver {
                panic!("run ended unexpectedly");
            }
        }
        assert_eq!(score_events, 1);
        assert_eq!(sim.score(), 1);
        assert!(sim.pipes[0].passed);
    }

    #[test]
    fn test_scoring_boundary_is_strict() {
        let mut sim = playing_sim();
        // After one advance the pipe's right edge sits exactly at the
        // character's left edge; strictly-past means no score yet.
        let x = sim.character().x - sim.config.pipe_width + sim.config.pipe_speed;
        sim.pipes.push(PipePair::new(x, 220.0, &sim.config));
        let events = sim.tick(&IDLE);
        assert!(!events.contains(&SimEvent::Score));
        let events = sim.tick(&IDLE);
        assert!(events.contains(&SimEvent::Score));
    }

    #[test]
    fn test_obstacle_collision_ends_the_run_same_tick() {
        let mut sim = playing_sim();
        let character = sim.character().rect();
        let obstacle = Obstacle::new(character.x, character.y, &sim.config);
        sim.obstacles.push(obstacle);
        let events = sim.tick(&IDLE);
        assert!(events.contains(&SimEvent::Crash));
        assert_eq!(sim.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_pipe_collision_ends_the_run() {
        let mut sim = playing_sim();
        // Gap far below the character so the upper region covers it.
        let pipe = PipePair::new(sim.character().x, 390.0, &sim.config);
        sim.pipes.push(pipe);
        let events = sim.tick(&IDLE);
        assert!(events.contains(&SimEvent::Crash));
        assert_eq!(sim.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_ceiling_breach_ends_the_run() {
        let mut config = SimConfig::default();
        config.flap_velocity = -600.0;
        let mut sim = Simulation::new(config, Some(3));
        // Physics runs on the transition tick, so the breach is immediate.
        let events = sim.tick(&FLAP);
        assert!(events.contains(&SimEvent::Hit));
        assert_eq!(sim.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_falling_into_the_ground_ends_the_run() {
        let mut sim = playing_sim();
        let mut last_events = Vec::new();
        for _ in 0..200 {
            last_events = sim.tick(&IDLE);
            if sim.phase() == GamePhase::GameOver {
                break;
            }
            // While still airborne the character must stay above the ground.
            assert!(sim.character().rect().bottom() <= sim.config.play_height);
        }
        assert_eq!(sim.phase(), GamePhase::GameOver);
        assert_eq!(last_events, vec![SimEvent::Hit]);
    }

    #[test]
    fn test_restart_resets_everything_but_keeps_ticking() {
        let mut sim = playing_sim();
        sim.pipes.push(PipePair::new(10.0, 150.0, &sim.config));
        sim.obstacles.push(Obstacle::new(200.0, 100.0, &sim.config));
        sim.score = 5;
        sim.phase = GamePhase::GameOver;

        sim.tick(&RESTART);
        assert_eq!(sim.phase(), GamePhase::Playing);
        assert_eq!(sim.score(), 0);
        assert!(sim.pipes.is_empty());
        assert!(sim.obstacles.is_empty());
        assert_eq!(sim.character().x, sim.config.character_start_x);
        assert_eq!(sim.character().y, sim.config.character_start_y);
        assert_eq!(sim.character().velocity, 0.0);
    }

    #[test]
    fn test_flap_restarts_from_game_over() {
        let mut sim = playing_sim();
        sim.phase = GamePhase::GameOver;
        sim.tick(&FLAP);
        assert_eq!(sim.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_pipes_spawn_on_cadence_and_get_pruned() {
        let mut config = SimConfig::default();
        // Disable obstacles and widen the gap so no spawn can end the run.
        config.obstacle_spawn_chance = 0.0;
        config.pipe_gap = 300.0;
        let mut sim = Simulation::new(config, Some(9));
        sim.phase = GamePhase::Playing;

        for _ in 0..100 {
            // Keep the character alive in the middle of the play area.
            sim.character.y = sim.config.character_start_y;
            sim.character.velocity = 0.0;
            sim.tick(&IDLE);
        }
        assert_eq!(sim.pipes.len(), 1);
        assert_eq!(sim.pipes[0].x, sim.config.play_width);

        for _ in 0..170 {
            sim.character.y = sim.config.character_start_y;
            sim.character.velocity = 0.0;
            sim.tick(&IDLE);
        }
        // Tick 270: the first pipe (off-screen at 100+170) is gone, the
        // second (spawned at 200) is still crossing.
        assert_eq!(sim.pipes.len(), 1);
        assert!(sim.pipes[0].x < sim.config.play_width);
    }
}
