use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::court::Court;
use crate::host::SceneView;

pub mod ball;
pub mod input;
pub mod movement;
pub mod round;

pub use ball::*;
pub use input::*;
pub use movement::*;
pub use round::*;

/// Snapshot body positions for a mover call; None until the world holds a
/// ball and both paddles
pub(crate) fn scene_view(world: &World, court: &Court) -> Option<SceneView> {
    let ball = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| ball.pos)
    }?;

    let mut left_paddle = None;
    let mut right_paddle = None;
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        let pos = Vec2::new(court.paddle_x(paddle.side), paddle.y);
        match paddle.side {
            Side::Left => left_paddle = Some(pos),
            Side::Right => right_paddle = Some(pos),
        }
    }

    Some(SceneView {
        ball,
        left_paddle: left_paddle?,
        right_paddle: right_paddle?,
    })
}
