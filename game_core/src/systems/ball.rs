use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Side};
use crate::config::Config;
use crate::court::Court;
use crate::host::{BodyId, Mover, Surface};
use crate::resources::{Events, Time};

use super::scene_view;

/// Reflect a velocity about a unit surface normal
#[inline]
fn reflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Direction a paddle imparts: from the paddle center through the ball.
/// The paddle aims the ball; this is deliberately not a reflection.
fn deflect_direction(ball_pos: Vec2, paddle_pos: Vec2, side: Side) -> Vec2 {
    match (ball_pos - paddle_pos).try_normalize() {
        Some(dir) => dir,
        // Coincident centers: aim straight back into the court
        None => match side {
            Side::Left => Vec2::X,
            Side::Right => Vec2::NEG_X,
        },
    }
}

/// Advance the ball through the mover and resolve the reported contact
pub fn move_ball(
    world: &mut World,
    time: &Time,
    court: &Court,
    config: &Config,
    mover: &dyn Mover,
    events: &mut Events,
) {
    let scene = match scene_view(world, court) {
        Some(scene) => scene,
        None => return,
    };
    let (vel, speed) = {
        let mut ball_query = world.query::<&Ball>();
        match ball_query.iter().next() {
            Some((_e, ball)) => (ball.vel, ball.speed),
            None => return,
        }
    };

    let moved = mover.move_and_collide(&scene, BodyId::Ball, vel * time.dt);

    let mut new_vel = vel;
    let mut new_speed = speed;
    let mut deflected = false;

    if let Some(contact) = moved.contact {
        deflected = true;
        match contact.surface {
            Surface::LeftPaddle => {
                new_speed = speed + config.left_hit_speedup;
                new_vel =
                    deflect_direction(moved.position, scene.left_paddle, Side::Left) * new_speed;
                events.ball_hit_paddle = true;
            }
            Surface::RightPaddle => {
                new_speed = speed + config.right_hit_speedup;
                new_vel =
                    deflect_direction(moved.position, scene.right_paddle, Side::Right) * new_speed;
                events.ball_hit_paddle = true;
            }
            Surface::Other => {
                // Only an approaching ball reflects; renormalize to kill
                // floating-point drift
                if vel.dot(contact.normal) < 0.0 {
                    new_vel = reflect(vel, contact.normal).normalize_or_zero() * speed;
                }
                events.ball_hit_wall = true;
            }
        }
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = moved.position;
        if deflected {
            ball.speed = new_speed;
            ball.set_velocity(new_vel);
        }
    }
}
