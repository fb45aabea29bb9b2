use glam::Vec2;

use crate::config::Config;
use crate::court::Court;
use crate::params::Params;
use crate::resources::GameRng;

/// Court side a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component; x is fixed by the court, only y moves
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Ball component - position, heading, and who last sent it left
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Magnitude of `vel`, kept exact through every deflection
    pub speed: f32,
    /// True when the ball was last sent toward the left side
    pub shooter: bool,
}

impl Ball {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            speed: 0.0,
            shooter: false,
        }
    }

    /// Set velocity, rederiving the shooter flag from the new heading
    pub fn set_velocity(&mut self, vel: Vec2) {
        self.vel = vel;
        self.shooter = vel.x < 0.0;
    }

    /// Place the ball at its spawn and draw a fresh serve
    pub fn serve(&mut self, court: &Court, config: &Config, rng: &mut GameRng) {
        self.pos = court.ball_spawn();
        self.speed = config.ball_start_speed;
        let dir = serve_direction(rng);
        self.set_velocity(dir * self.speed);
    }
}

/// Random serve heading: mostly horizontal, never near-vertical
pub(crate) fn serve_direction(rng: &mut GameRng) -> Vec2 {
    use rand::Rng;

    let mut vx = rng.0.gen_range(-Params::SERVE_VX_RANGE..=Params::SERVE_VX_RANGE) as f32;
    let vy = rng.0.gen_range(-Params::SERVE_VY_RANGE..=Params::SERVE_VY_RANGE) as f32;

    // A weak horizontal draw would serve almost straight up or down
    if vx.abs() < Params::SERVE_MIN_VX {
        vx = if rng.0.gen_bool(0.5) {
            Params::SERVE_MIN_VX
        } else {
            -Params::SERVE_MIN_VX
        };
    }

    Vec2::new(vx, vy).normalize_or_zero()
}
