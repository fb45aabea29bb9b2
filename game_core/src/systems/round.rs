use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::court::Court;
use crate::host::Viewport;
use crate::match_state::MatchState;
use crate::resources::{ControlState, Events, GameRng};

/// End the rally once the ball leaves the screen: credit the side that did
/// not hit it last, then put the court back for the next serve
#[allow(clippy::too_many_arguments)]
pub fn check_round(
    world: &mut World,
    court: &Court,
    config: &Config,
    screen: &dyn Viewport,
    match_state: &mut MatchState,
    controls: &mut ControlState,
    events: &mut Events,
    rng: &mut GameRng,
) {
    if !match_state.is_active() {
        return;
    }

    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos, ball.shooter))
    };
    let (ball_pos, shooter) = match ball_data {
        Some(data) => data,
        None => return,
    };

    if screen.is_on_screen(ball_pos) {
        return;
    }

    // The shooter sent the ball left, so a lost ball on that path is the
    // right side's point
    let scorer = if shooter { Side::Right } else { Side::Left };
    match_state.end_round(scorer);
    match scorer {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }
    log::debug!(
        "round to {:?}, score {}-{}",
        scorer,
        match_state.score.left,
        match_state.score.right
    );

    // Atomic reset: positions, serve, and held input all go back at once
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = court.paddle_spawn(paddle.side).y;
    }
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.serve(court, config, rng);
    }
    controls.clear();
}
