use game_core::{Ball, InputAction, InputQueue, MatchState, Paddle, Side};
use hecs::World;

/// Tracking margin before the bot bothers to move
const DEADZONE: f32 = 12.0;

/// Scripted player for the left paddle. Emits the same press and release
/// edges a human on the keys would, so the whole input path gets exercised.
#[derive(Debug, Default)]
pub struct InputBot {
    holding_up: bool,
    holding_down: bool,
}

impl InputBot {
    pub fn drive(&mut self, world: &World, match_state: &MatchState, queue: &mut InputQueue) {
        if !match_state.is_active() {
            if self.holding_up {
                queue.push(InputAction::LeftUp, false);
                self.holding_up = false;
            }
            if self.holding_down {
                queue.push(InputAction::LeftDown, false);
                self.holding_down = false;
            }
            // Tap the start control to begin the next round
            queue.push(InputAction::Start, true);
            queue.push(InputAction::Start, false);
            return;
        }

        let ball_y = world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_entity, ball)| ball.pos.y);
        let paddle_y = world
            .query::<&Paddle>()
            .iter()
            .find(|(_entity, paddle)| paddle.side == Side::Left)
            .map(|(_entity, paddle)| paddle.y);
        let (ball_y, paddle_y) = match (ball_y, paddle_y) {
            (Some(ball_y), Some(paddle_y)) => (ball_y, paddle_y),
            _ => return,
        };

        let want_up = ball_y < paddle_y - DEADZONE;
        let want_down = ball_y > paddle_y + DEADZONE;

        if want_up != self.holding_up {
            queue.push(InputAction::LeftUp, want_up);
            self.holding_up = want_up;
        }
        if want_down != self.holding_down {
            queue.push(InputAction::LeftDown, want_down);
            self.holding_down = want_down;
        }
    }
}
