use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::sim::config::SimConfig;
use crate::sim::entity::{Obstacle, PipePair};

/// Procedural generation policy: pipes on a fixed tick cadence, obstacles as
/// an independent draw on each pipe-spawn event.
#[derive(Debug)]
pub struct Spawner {
    counter: u32,
    interval: u32,
    rng: StdRng,
}

impl Spawner {
    pub fn new(config: &SimConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Spawner { counter: 0, interval: config.pipe_spawn_interval(), rng }
    }

    /// Advances the cadence by one tick. Returns the freshly spawned pipe
    /// (and possibly an obstacle) when the cadence fires.
    pub fn tick(&mut self, config: &SimConfig) -> Option<(PipePair, Option<Obstacle>)> {
        self.counter += 1;
        if self.counter < self.interval {
            return None;
        }
        self.counter = 0;

        let gap_offset = self.rng.gen_range(config.min_gap_offset..=config.max_gap_offset());
        let pipe = PipePair::new(config.play_width, gap_offset, config);

        let obstacle = if self.rng.gen_bool(config.obstacle_spawn_chance) {
            let min_y = config.obstacle_margin;
            let max_y = config.ground_top() - config.obstacle_height - config.obstacle_margin;
            let y = self.rng.gen_range(min_y..=max_y);
            Some(Obstacle::new(config.play_width, y, config))
        } else {
            None
        };

        Some((pipe, obstacle))
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }
}
