use crate::match_state::MatchState;
use crate::resources::{ControlState, Events, InputAction, InputQueue};

/// Route queued host input edges into the held-control state and the start
/// trigger
pub fn route_inputs(
    queue: &mut InputQueue,
    controls: &mut ControlState,
    match_state: &mut MatchState,
    events: &mut Events,
) {
    for event in queue.drain() {
        if match_state.is_active() {
            match event.action {
                InputAction::LeftUp => controls.left_up = event.pressed,
                InputAction::LeftDown => controls.left_down = event.pressed,
                InputAction::RightUp => controls.right_up = event.pressed,
                InputAction::RightDown => controls.right_down = event.pressed,
                // Start only matters while idle
                InputAction::Start => {}
            }
        } else if event.action == InputAction::Start && !event.pressed && match_state.start() {
            // The rally begins on the release edge
            events.match_started = true;
            log::debug!("rally started");
        }
    }
}
