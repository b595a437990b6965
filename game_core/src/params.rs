/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_INSET: f32 = 40.0; // Distance of paddle center from its side wall

    // Ball
    pub const BALL_SIZE: f32 = 10.0;
    pub const SERVE_SPEED: f32 = 200.0; // Speed right after a serve
    pub const SERVE_DRAW: f32 = 300.0; // Magnitude of the random serve components
    pub const HIT_SPEEDUP: f32 = 1.05; // Multiply speed on paddle hit (classic rules)
    pub const HIT_JITTER: f32 = 300.0; // Width of the random vertical kick on paddle hit

    // Score
    pub const CHAR_PIXEL: f32 = 10.0;
    pub const SCORE_TOP: f32 = 20.0;
}
