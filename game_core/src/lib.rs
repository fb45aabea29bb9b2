//! Deterministic two-paddle volley simulation.
//!
//! The core owns ball, paddle, and match state; physics, visibility, text,
//! and audio are host collaborators behind the traits in [`host`]. Drive it
//! by pushing input edges into an [`InputQueue`] and calling [`step`] once
//! per frame.

pub mod components;
pub mod config;
pub mod court;
pub mod host;
pub mod match_state;
pub mod params;
pub mod presentation;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use court::*;
pub use host::*;
pub use match_state::*;
pub use params::*;
pub use presentation::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run the deterministic paddle-volley simulation
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    court: &Court,
    config: &Config,
    match_state: &mut MatchState,
    controls: &mut ControlState,
    input_queue: &mut InputQueue,
    events: &mut Events,
    rng: &mut GameRng,
    mover: &dyn Mover,
    screen: &dyn Viewport,
) {
    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(Params::MAX_DT);

    // Events accumulate across micro-steps; hosts read them once per call
    events.clear();

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 1. Route input edges (start trigger while idle, held controls in play)
        route_inputs(input_queue, controls, match_state, events);

        if match_state.is_active() {
            // 2. Move the player paddle from held controls
            move_player_paddle(world, &step_time, court, config, controls, mover);

            // 3. Move the AI paddle toward the ball
            move_ai_paddle(world, &step_time, court, config, mover);

            // 4. Move the ball and resolve contacts
            move_ball(world, &step_time, court, config, mover, events);

            // 5. End the round once the ball leaves the screen
            check_round(
                world, court, config, screen, match_state, controls, events, rng,
            );
        }
    }

    // Update time
    time.now += clamped_dt;
}

/// Helper to create a paddle entity at its spawn point
pub fn create_paddle(world: &mut World, court: &Court, side: Side) -> hecs::Entity {
    world.spawn((Paddle::new(side, court.paddle_spawn(side).y),))
}

/// Helper to create the ball entity, already served for the first rally
pub fn create_ball(
    world: &mut World,
    court: &Court,
    config: &Config,
    rng: &mut GameRng,
) -> hecs::Entity {
    let mut ball = Ball::new(court.ball_spawn());
    ball.serve(court, config, rng);
    world.spawn((ball,))
}
