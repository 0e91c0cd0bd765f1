//! Retro Pong - the classic two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Match simulation (paddles, ball, scoring, game phases)
//! - `frame`: Animation-frame driver (delta time, update/render, stop flag)
//! - `game`: A running session (match, keyboard, HUD counters)
//! - `renderer`: Drawing surface trait and WebGPU quad renderer
//! - `scene`: Paints a match onto a drawing surface
//! - `platform`: Keyboard to key-state mapping
//! - `settings`: Player preferences and tuning

pub mod frame;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use frame::{Frame, FrameClock, GameLoop, LoopControl};
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Play area dimensions (16:9, NES-like proportions scaled up)
    pub const CANVAS_WIDTH: f32 = 1280.0;
    pub const CANVAS_HEIGHT: f32 = 720.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 200.0;
    /// Distance between a paddle and its side wall
    pub const PADDLE_MARGIN: f32 = 30.0;
    /// Paddle speed in pixels/s
    pub const PADDLE_MAX_SPEED: f32 = 1000.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 20.0;
    /// Horizontal speed multiplier applied on every paddle hit
    pub const BALL_SPEEDUP: f32 = 1.03;
    /// Vertical speed range after a paddle hit (pixels/s)
    pub const BALL_DEFLECT_MIN_DY: f32 = 30.0;
    pub const BALL_DEFLECT_MAX_DY: f32 = 450.0;
    /// Serve speed ranges (pixels/s)
    pub const SERVE_SPEED_X: (f32, f32) = (420.0, 600.0);
    pub const SERVE_SPEED_Y: (f32, f32) = (-150.0, 150.0);

    /// First to this many points wins
    pub const WIN_SCORE: u32 = 10;

    /// Largest frame delta fed to the match (browsers stall hidden tabs)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// HUD text sizes (pixels, cap height)
    pub const SCORE_FONT_SIZE: f32 = 60.0;
    pub const MESSAGE_FONT_SIZE: f32 = 20.0;
}
