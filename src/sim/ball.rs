//! Ball entity

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::paddle::Paddle;
use super::state::Side;
use crate::renderer::{Surface, colors};

/// The ball (an axis-aligned square)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Velocity in pixels/s
    pub vel: Vec2,
}

impl Ball {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
            vel: Vec2::ZERO,
        }
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Park the ball in the middle of the play area
    pub fn reset(&mut self, area_width: f32, area_height: f32) {
        self.pos = Vec2::new(area_width, area_height) / 2.0 - self.size / 2.0;
        self.vel = Vec2::ZERO;
    }

    /// Launch toward `receiver` with a random speed picked from the given ranges
    pub fn serve_toward(
        &mut self,
        receiver: Side,
        speed_x: (f32, f32),
        speed_y: (f32, f32),
        rng: &mut impl Rng,
    ) {
        let dx = random_in(rng, speed_x);
        self.vel.x = match receiver {
            Side::Left => -dx,
            Side::Right => dx,
        };
        self.vel.y = random_in(rng, speed_y);
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// AABB overlap with a paddle. Touching edges do not count.
    pub fn collides(&self, paddle: &Paddle) -> bool {
        !(self.pos.x >= paddle.x + paddle.width
            || paddle.x >= self.pos.x + self.size.x
            || self.pos.y >= paddle.y + paddle.height
            || paddle.y >= self.pos.y + self.size.y)
    }

    /// True when the step that started at `prev_x` carried the ball's leading
    /// edge across the paddle's facing side while level with it.
    pub fn crossed_face(&self, paddle: &Paddle, prev_x: f32) -> bool {
        let level = self.pos.y < paddle.y + paddle.height && paddle.y < self.pos.y + self.size.y;
        if !level {
            return false;
        }
        if self.vel.x < 0.0 {
            let face = paddle.x + paddle.width;
            prev_x >= face && self.pos.x < face
        } else if self.vel.x > 0.0 {
            let face = paddle.x;
            prev_x + self.size.x <= face && self.pos.x + self.size.x > face
        } else {
            false
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.set_fill_color(colors::FOREGROUND);
        surface.fill_rect(self.pos.x, self.pos.y, self.size.x, self.size.y);
    }
}

/// Uniform sample from `[lo, hi]`; a collapsed range yields `lo`
pub(crate) fn random_in(rng: &mut impl Rng, (lo, hi): (f32, f32)) -> f32 {
    if hi > lo { rng.random_range(lo..=hi) } else { lo }
}
