use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::Params;

/// Reasons a tuning file can be rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Runtime tuning; defaults mirror `Params`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_start_speed: f32,
    pub left_hit_speedup: f32,
    pub right_hit_speedup: f32,
    pub ai_gain_divisor: f32,
    /// Nudge the AI's aim by the player paddle's height
    pub ai_player_bias: bool,
    /// Beep on every paddle or wall impact
    pub impact_beeps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_start_speed: Params::BALL_START_SPEED,
            left_hit_speedup: Params::LEFT_HIT_SPEEDUP,
            right_hit_speedup: Params::RIGHT_HIT_SPEEDUP,
            ai_gain_divisor: Params::AI_GAIN_DIVISOR,
            ai_player_bias: true,
            impact_beeps: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON tuning file; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_start_speed", self.ball_start_speed),
            ("ai_gain_divisor", self.ai_gain_divisor),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("left_hit_speedup", self.left_hit_speedup),
            ("right_hit_speedup", self.right_hit_speedup),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be non-negative and finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}
