/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen (logical pixels, origin top-left, y down)
    pub const SCREEN_WIDTH: f32 = 320.0;
    pub const SCREEN_HEIGHT: f32 = 240.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 5.0;
    pub const PADDLE_HEIGHT: f32 = 30.0;
    pub const PADDLE_INSET: f32 = 5.0; // gap between paddle and screen edge
    pub const PADDLE_SPEED: f32 = 4.0; // pixels per tick

    // Ball
    pub const BALL_WIDTH: f32 = 4.0;
    pub const BALL_SPEED_INITIAL: f32 = 1.0;
    pub const BALL_SPEED_STEP: f32 = 0.5; // added on every paddle hit
    pub const BALL_SPEED_MAX: f32 = 5.0;
    pub const SERVE_SPREAD: f32 = 3.0; // max |vy| on serve
    pub const DEFLECT_SPREAD: f32 = 1.0 / 3.0; // max vy change on paddle hit

    // Input
    pub const DEAD_ZONE: f32 = 0.3;

    // Loop
    pub const TICK_RATE: u32 = 60;

    // Window
    pub const WINDOW_WIDTH: u32 = 640;
    pub const WINDOW_HEIGHT: u32 = 480;

    // Sound
    pub const SAMPLE_RATE: u32 = 44_100;
    pub const SOUND_DURATION: f64 = 0.04; // seconds
    pub const SOUND_VOLUME: f64 = 0.25; // fraction of full scale
}
