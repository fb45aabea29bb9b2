/// Default tuning for the volley game
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const COURT_WIDTH: f32 = 640.0;
    pub const COURT_HEIGHT: f32 = 360.0;
    pub const PADDLE_INSET: f32 = 20.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 36.0;
    pub const PADDLE_SPEED: f32 = 150.0; // units per second

    // Ball
    pub const BALL_RADIUS: f32 = 5.0;
    pub const BALL_START_SPEED: f32 = 80.0;
    pub const LEFT_HIT_SPEEDUP: f32 = 10.0; // added on a left-paddle hit
    pub const RIGHT_HIT_SPEEDUP: f32 = 25.0; // the right side hits harder

    // Serve draw (integer velocity components before normalization)
    pub const SERVE_VX_RANGE: i32 = 100;
    pub const SERVE_VY_RANGE: i32 = 50;
    pub const SERVE_MIN_VX: f32 = 5.0; // floor that rules out near-vertical serves

    // AI paddle
    pub const AI_GAIN_DIVISOR: f32 = 10.0; // tracking gain = ball speed / this
    // Player paddle travel range remapped into the AI aim bias
    pub const AI_BIAS_IN_MIN: f32 = 18.0;
    pub const AI_BIAS_IN_MAX: f32 = 342.0;
    pub const AI_BIAS_OUT_MIN: f32 = -20.0;
    pub const AI_BIAS_OUT_MAX: f32 = 20.0;

    // Sound cue indices: 0..IMPACT_SOUND_COUNT are beeps, ROUND_SOUND ends a rally
    pub const IMPACT_SOUND_COUNT: usize = 4;
    pub const ROUND_SOUND: usize = 4;

    // Physics
    pub const FIXED_DT: f32 = 0.0166; // ~60 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
