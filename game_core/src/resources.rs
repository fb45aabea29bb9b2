/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Match score; counts only climb, there is no winning threshold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Logical controls the host can report edges for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Start,
}

/// One press or release edge from the host
#[derive(Debug, Clone, Copy)]
pub struct InputEvent {
    pub action: InputAction,
    pub pressed: bool,
}

/// Host input edges awaiting routing
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: InputAction, pressed: bool) {
        self.events.push(InputEvent { action, pressed });
    }

    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Held-button state the input router maintains between edges
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlState {
    pub left_up: bool,
    pub left_down: bool,
    // Routed for completeness; ignored while the right paddle is AI-driven
    pub right_up: bool,
    pub right_down: bool,
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub match_started: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub left_scored: bool,
    pub right_scored: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
