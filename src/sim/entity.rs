use serde::{Deserialize, Serialize};

use crate::sim::config::SimConfig;

/// Axis-aligned box in play-area units. The origin is the top-left corner of
/// the playfield; y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict AABB overlap; touching edges do not collide.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right() && self.right() > other.x && self.y < other.bottom() && self.bottom() > other.y
    }
}

/// The player-controlled character. X is fixed for the whole run; gravity and
/// flaps only move it vertically.
#[derive(Debug, Clone)]
pub struct Character {
    pub x: f32,
    pub y: f32,
    pub velocity: f32,
    width: f32,
    height: f32,
}

impl Character {
    pub fn new(config: &SimConfig) -> Self {
        Character {
            x: config.character_start_x,
            y: config.character_start_y,
            velocity: 0.0,
            width: config.character_width,
            height: config.character_height,
        }
    }

    /// Assigns the flap velocity outright. Deliberately not additive: repeated
    /// flaps cannot build up unbounded upward speed, so only the downward side
    /// ever needs clamping.
    pub fn flap(&mut self, config: &SimConfig) {
        self.velocity = config.flap_velocity;
    }

    pub fn update(&mut self, config: &SimConfig) {
        self.velocity += config.gravity;
        if self.velocity > config.max_fall_speed {
            self.velocity = config.max_fall_speed;
        }
        self.y += self.velocity;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A pair of pipes with a gap between them. The gap offset is chosen once at
/// spawn; `passed` latches after the character clears the pair.
#[derive(Debug, Clone)]
pub struct PipePair {
    pub x: f32,
    pub gap_offset: f32,
    pub passed: bool,
    width: f32,
    gap: f32,
    play_height: f32,
}

impl PipePair {
    pub fn new(x: f32, gap_offset: f32, config: &SimConfig) -> Self {
        PipePair {
            x,
            gap_offset,
            passed: false,
            width: config.pipe_width,
            gap: config.pipe_gap,
            play_height: config.play_height,
        }
    }

    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Region above the gap, from the ceiling down to the gap offset.
    pub fn upper_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.gap_offset)
    }

    /// Region below the gap, down to the bottom of the play area.
    pub fn lower_rect(&self) -> Rect {
        let top = self.gap_offset + self.gap;
        Rect::new(self.x, top, self.width, self.play_height - top)
    }

    /// Fully scrolled past the left edge and safe to remove.
    pub fn is_off_screen(&self) -> bool {
        self.right() <= 0.0
    }

    pub fn collides(&self, rect: &Rect) -> bool {
        rect.intersects(&self.upper_rect()) || rect.intersects(&self.lower_rect())
    }
}

/// A free-floating obstacle with a single collision box.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    width: f32,
    height: f32,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, config: &SimConfig) -> Self {
        Obstacle { x, y, width: config.obstacle_width, height: config.obstacle_height }
    }

    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_off_screen(&self) -> bool {
        self.x + self.width <= 0.0
    }
}

/// The scrolling ground strip. Two tiles leapfrog each other for the visual
/// scroll; the collision boundary is a fixed rectangle at the ground line.
#[derive(Debug, Clone)]
pub struct Ground {
    pub offsets: [f32; 2],
    width: f32,
    height: f32,
    top: f32,
}

impl Ground {
    pub fn new(config: &SimConfig) -> Self {
        Ground {
            offsets: [0.0, config.play_width],
            width: config.play_width,
            height: config.ground_height,
            top: config.ground_top(),
        }
    }

    pub fn scroll(&mut self, speed: f32) {
        for offset in self.offsets.iter_mut() {
            *offset -= speed;
            if *offset <= -self.width {
                *offset += 2.0 * self.width;
            }
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0.0, self.top, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn config() -> SimConfig {
        SimConfig::default()
    }

    #[test]
    fn test_rect_intersection_is_strict() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(9.0, 9.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&touching));
        assert!(!touching.intersects(&a));
    }

    #[test]
    fn test_gravity_clamps_at_exactly_twenty_ticks() {
        // Start at rest under the default 0.5 gravity and 10.0 fall cap: the
        // twentieth tick lands exactly on the cap, not past it.
        let config = config();
        let mut character = Character::new(&config);
        for _ in 0..19 {
            character.update(&config);
        }
        assert_eq!(character.velocity, 9.5);
        character.update(&config);
        assert_eq!(character.velocity, 10.0);
        character.update(&config);
        assert_eq!(character.velocity, 10.0);
    }

    #[test]
    fn test_flap_assigns_rather_than_adds() {
        let config = config();
        let mut character = Character::new(&config);
        character.velocity = 25.0;
        character.flap(&config);
        assert_eq!(character.velocity, config.flap_velocity);
        // Flapping again while already rising must not compound.
        character.flap(&config);
        assert_eq!(character.velocity, config.flap_velocity);
    }

    #[test]
    fn test_upward_speed_is_never_clamped() {
        let mut config = config();
        config.flap_velocity = -50.0;
        let mut character = Character::new(&config);
        character.flap(&config);
        character.update(&config);
        assert_eq!(character.velocity, -49.5);
    }

    #[test]
    fn test_pipe_regions_leave_exactly_the_gap() {
        let config = config();
        let pipe = PipePair::new(100.0, 150.0, &config);
        let upper = pipe.upper_rect();
        let lower = pipe.lower_rect();
        assert_eq!(upper.bottom(), 150.0);
        assert_eq!(lower.y, 150.0 + config.pipe_gap);
        assert_eq!(lower.y - upper.bottom(), config.pipe_gap);
        assert!(!upper.intersects(&lower));
        // Together they span the full play height outside the gap.
        assert_eq!(upper.height + lower.height, config.play_height - config.pipe_gap);
    }

    #[test]
    fn test_pipe_off_screen_at_tick_170() {
        // Spawned at the right edge (x=288, width 52, speed 2.0) a pipe
        // becomes removable at tick ceil((288+52)/2) = 170.
        let config = config();
        let mut pipe = PipePair::new(config.play_width, 150.0, &config);
        for tick in 1..=170u32 {
            pipe.advance(config.pipe_speed);
            if tick < 170 {
                assert!(!pipe.is_off_screen(), "pipe left too early at tick {tick}");
            }
        }
        assert!(pipe.is_off_screen());
    }

    #[test]
    fn test_ground_tiles_wrap_around() {
        let config = config();
        let mut ground = Ground::new(&config);
        let ticks = (2.0 * config.play_width / config.pipe_speed) as u32 + 1;
        for _ in 0..ticks {
            ground.scroll(config.pipe_speed);
            for offset in ground.offsets {
                assert!(offset > -config.play_width && offset <= 2.0 * config.play_width);
            }
        }
        // The collision line never moves.
        assert_eq!(ground.rect(), Rect::new(0.0, 400.0, 288.0, 112.0));
    }
}
