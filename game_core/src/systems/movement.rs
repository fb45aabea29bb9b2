use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::court::Court;
use crate::host::{BodyId, Mover};
use crate::params::Params;
use crate::resources::{ControlState, Time};

use super::scene_view;

/// Vertical speed the player's held buttons ask for; down wins when both
/// are held
pub fn player_move(controls: &ControlState, config: &Config) -> f32 {
    if controls.left_down {
        config.paddle_speed
    } else if controls.left_up {
        -config.paddle_speed
    } else {
        0.0
    }
}

/// Remap the player paddle's height into the AI's aim bias
pub fn ai_bias(player_y: f32) -> f32 {
    let t = (player_y - Params::AI_BIAS_IN_MIN) / (Params::AI_BIAS_IN_MAX - Params::AI_BIAS_IN_MIN);
    Params::AI_BIAS_OUT_MIN + (Params::AI_BIAS_OUT_MAX - Params::AI_BIAS_OUT_MIN) * t
}

/// Per-second tracking shift toward the target, clamped so the AI cannot
/// outrun a paddle
pub fn ai_track(target_y: f32, paddle_y: f32, ball_speed: f32, config: &Config) -> f32 {
    let mut shift = (target_y - paddle_y) * (ball_speed / config.ai_gain_divisor);
    if shift.abs() > config.paddle_speed {
        // Sign-preserving clamp, not proportional scaling
        shift = config.paddle_speed * shift.signum();
    }
    shift
}

/// Move the player's paddle from its held controls
pub fn move_player_paddle(
    world: &mut World,
    time: &Time,
    court: &Court,
    config: &Config,
    controls: &ControlState,
    mover: &dyn Mover,
) {
    let scene = match scene_view(world, court) {
        Some(scene) => scene,
        None => return,
    };

    let dy = player_move(controls, config);
    if dy == 0.0 {
        return;
    }

    let moved = mover.move_and_collide(&scene, BodyId::LeftPaddle, Vec2::new(0.0, dy) * time.dt);
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Left {
            paddle.y = moved.position.y;
        }
    }
}

/// Steer the AI paddle toward the ball
pub fn move_ai_paddle(
    world: &mut World,
    time: &Time,
    court: &Court,
    config: &Config,
    mover: &dyn Mover,
) {
    let scene = match scene_view(world, court) {
        Some(scene) => scene,
        None => return,
    };
    let ball_speed = {
        let mut ball_query = world.query::<&Ball>();
        match ball_query.iter().next() {
            Some((_e, ball)) => ball.speed,
            None => return,
        }
    };

    let target = if config.ai_player_bias {
        scene.ball.y + ai_bias(scene.left_paddle.y)
    } else {
        scene.ball.y
    };
    let dy = ai_track(target, scene.right_paddle.y, ball_speed, config);

    let moved = mover.move_and_collide(&scene, BodyId::RightPaddle, Vec2::new(0.0, dy) * time.dt);
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Right {
            paddle.y = moved.position.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::court::CourtMover;
    use crate::{create_ball, create_paddle, GameRng};

    fn setup_world() -> (World, Court, Config, CourtMover) {
        let court = Court::default();
        let config = Config::new();
        let mut world = World::new();
        let mut rng = GameRng::new(1);
        create_paddle(&mut world, &court, Side::Left);
        create_paddle(&mut world, &court, Side::Right);
        create_ball(&mut world, &court, &config, &mut rng);
        let mover = CourtMover::new(court.clone(), &config);
        (world, court, config, mover)
    }

    fn paddle_y(world: &World, side: Side) -> f32 {
        let mut y = f32::NAN;
        for (_e, paddle) in world.query::<&Paddle>().iter() {
            if paddle.side == side {
                y = paddle.y;
            }
        }
        y
    }

    #[test]
    fn test_player_move_up_only() {
        let config = Config::new();
        let mut controls = ControlState::new();
        controls.left_up = true;
        assert_eq!(player_move(&controls, &config), -config.paddle_speed);
    }

    #[test]
    fn test_player_move_down_wins_over_up() {
        let config = Config::new();
        let mut controls = ControlState::new();
        controls.left_up = true;
        controls.left_down = true;
        assert_eq!(
            player_move(&controls, &config),
            config.paddle_speed,
            "Down overrides up when both are held"
        );
    }

    #[test]
    fn test_player_move_idle_is_zero() {
        let config = Config::new();
        let controls = ControlState::new();
        assert_eq!(player_move(&controls, &config), 0.0);
    }

    #[test]
    fn test_ai_bias_endpoints() {
        assert!((ai_bias(18.0) - (-20.0)).abs() < 1e-4, "Lowest paddle maps to -20");
        assert!((ai_bias(342.0) - 20.0).abs() < 1e-4, "Highest paddle maps to +20");
        assert!(ai_bias(180.0).abs() < 1e-4, "Center paddle maps to zero bias");
    }

    #[test]
    fn test_ai_track_scales_with_ball_speed() {
        let config = Config::new();
        let slow = ai_track(200.0, 190.0, 80.0, &config);
        let fast = ai_track(200.0, 190.0, 150.0, &config);
        assert_eq!(slow, 80.0, "10 units off at gain 8 moves 80/s");
        assert_eq!(fast, 150.0, "Faster ball tracks harder");
    }

    #[test]
    fn test_ai_track_clamps_and_keeps_sign() {
        let config = Config::new();
        assert_eq!(ai_track(1000.0, 0.0, 300.0, &config), config.paddle_speed);
        assert_eq!(
            ai_track(0.0, 1000.0, 300.0, &config),
            -config.paddle_speed,
            "Clamp must preserve direction"
        );
    }

    #[test]
    fn test_player_paddle_moves_down() {
        let (mut world, court, config, mover) = setup_world();
        let mut controls = ControlState::new();
        controls.left_down = true;
        let time = Time::new(0.0166, 0.0);
        let before = paddle_y(&world, Side::Left);

        move_player_paddle(&mut world, &time, &court, &config, &controls, &mover);

        let expected = before + config.paddle_speed * time.dt;
        assert!(
            (paddle_y(&world, Side::Left) - expected).abs() < 1e-4,
            "Paddle should move a full speed step down"
        );
    }

    #[test]
    fn test_player_paddle_ignores_right_flags() {
        let (mut world, court, config, mover) = setup_world();
        let mut controls = ControlState::new();
        controls.right_down = true;
        let time = Time::new(0.0166, 0.0);
        let before = paddle_y(&world, Side::Left);

        move_player_paddle(&mut world, &time, &court, &config, &controls, &mover);

        assert_eq!(paddle_y(&world, Side::Left), before);
    }

    #[test]
    fn test_ai_paddle_chases_ball() {
        let (mut world, court, config, mover) = setup_world();
        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.pos.y = 60.0;
        }
        let time = Time::new(0.0166, 0.0);
        let before = paddle_y(&world, Side::Right);

        move_ai_paddle(&mut world, &time, &court, &config, &mover);

        assert!(
            paddle_y(&world, Side::Right) < before,
            "AI should move up toward a high ball"
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn ai_step_never_exceeds_paddle_speed(
                ball_y in 0.0f32..360.0,
                paddle_y in 18.0f32..342.0,
                player_y in 18.0f32..342.0,
                ball_speed in 0.0f32..2000.0,
            ) {
                let config = Config::new();
                let target = ball_y + ai_bias(player_y);
                let shift = ai_track(target, paddle_y, ball_speed, &config);
                prop_assert!(
                    shift.abs() <= config.paddle_speed + 1e-3,
                    "per-second shift {shift} exceeds the paddle speed"
                );
            }
        }
    }
}
