//! Paddle entity
//!
//! A vertical bar that moves up and down inside the play area. Movement is
//! expressed as an intent (`move_up`/`move_down`/`stop`) that `update`
//! resolves into a clamped, dt-scaled position change.

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::state::GamePhase;
use crate::consts::PADDLE_MAX_SPEED;
use crate::renderer::{Surface, colors};

/// Raw key-state flags for one human-controlled paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
}

/// A player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub half_height: f32,
    /// Bottom edge of the play area
    pub play_area_height: f32,
    /// Vertical velocity (pixels/s, negative is up)
    pub dy: f32,
    pub max_speed: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, play_area_height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            half_height: height / 2.0,
            play_area_height,
            dy: 0.0,
            max_speed: PADDLE_MAX_SPEED,
        }
    }

    /// Override the default top speed
    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self
    }

    pub fn move_up(&mut self) {
        self.dy = -self.max_speed;
    }

    pub fn move_down(&mut self) {
        self.dy = self.max_speed;
    }

    pub fn stop(&mut self) {
        self.dy = 0.0;
    }

    /// Lowest `y` the paddle may occupy
    pub fn max_y(&self) -> f32 {
        self.play_area_height - self.height
    }

    /// Vertical center of the paddle
    pub fn center_y(&self) -> f32 {
        self.y + self.half_height
    }

    /// Apply the current velocity for `dt` seconds.
    ///
    /// Moving up clamps against the top edge, anything else against the
    /// bottom edge (the paddle's `y` is its top, so the bound is
    /// `play_area_height - height`).
    pub fn update(&mut self, dt: f32) {
        if self.dy < 0.0 {
            self.y = (self.y + self.dy * dt).max(0.0);
        } else {
            self.y = (self.y + self.dy * dt).min(self.max_y());
        }
    }

    /// Human control: up wins over down, neither means stop
    pub fn apply_player_input(&mut self, keys: KeyState) {
        if keys.up {
            self.move_up();
        } else if keys.down {
            self.move_down();
        } else {
            self.stop();
        }
    }

    /// Computer control: chase the ball while it is live
    pub fn apply_ai(&mut self, ball: &Ball, phase: GamePhase) {
        // Hold still while the ball is parked, otherwise the paddle jitters
        // around the centered ball
        if matches!(phase, GamePhase::Start | GamePhase::Serve) {
            self.stop();
            return;
        }

        let center = self.center_y();
        if ball.y() < center {
            self.move_up();
        } else if ball.y() + ball.height() > center {
            self.move_down();
        } else {
            self.stop();
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.set_fill_color(colors::FOREGROUND);
        surface.fill_rect(self.x, self.y, self.width, self.height);
    }
}
