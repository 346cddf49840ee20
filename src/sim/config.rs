use serde::{Deserialize, Serialize};

/// Every tunable of the simulation, fixed at construction time.
///
/// Defaults reproduce the original 288x512 desktop playfield. All distances
/// are in play-area units, all rates are per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub play_width: f32,
    pub play_height: f32,
    pub ground_height: f32,

    pub character_width: f32,
    pub character_height: f32,
    pub character_start_x: f32,
    pub character_start_y: f32,
    pub gravity: f32,
    pub flap_velocity: f32,
    pub max_fall_speed: f32,

    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub pipe_speed: f32,
    /// Horizontal distance between consecutive pipe spawns.
    pub pipe_spawn_distance: f32,
    pub min_gap_offset: f32,

    pub obstacle_width: f32,
    pub obstacle_height: f32,
    pub obstacle_speed: f32,
    /// Chance of an obstacle appearing alongside each pipe spawn.
    pub obstacle_spawn_chance: f64,
    /// Obstacles keep this margin from the ceiling and the ground top.
    pub obstacle_margin: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        let play_width = 288.0;
        let play_height = 512.0;
        SimConfig {
            play_width,
            play_height,
            ground_height: 112.0,
            character_width: 34.0,
            character_height: 24.0,
            character_start_x: 50.0,
            character_start_y: play_height / 2.0,
            gravity: 0.5,
            flap_velocity: -8.0,
            max_fall_speed: 10.0,
            pipe_width: 52.0,
            pipe_gap: 100.0,
            pipe_speed: 2.0,
            pipe_spawn_distance: 200.0,
            min_gap_offset: 50.0,
            obstacle_width: 40.0,
            obstacle_height: 40.0,
            obstacle_speed: 2.0,
            obstacle_spawn_chance: 0.3,
            obstacle_margin: 50.0,
        }
    }
}

impl SimConfig {
    /// Largest gap offset that still leaves the bottom pipe clear of the ground.
    pub fn max_gap_offset(&self) -> f32 {
        self.play_height - self.pipe_gap - self.ground_height
    }

    /// Number of ticks between pipe spawns.
    pub fn pipe_spawn_interval(&self) -> u32 {
        (self.pipe_spawn_distance / self.pipe_speed) as u32
    }

    /// Top of the ground strip, i.e. the bottom of the playable band.
    pub fn ground_top(&self) -> f32 {
        self.play_height - self.ground_height
    }
}
