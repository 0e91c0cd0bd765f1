//! Ball collision response
//!
//! Everything is axis-aligned: the ball bounces off the top and bottom walls
//! and reverses horizontally off paddles.

use rand::Rng;

use super::ball::{Ball, random_in};
use super::paddle::Paddle;
use crate::consts::{BALL_DEFLECT_MAX_DY, BALL_DEFLECT_MIN_DY, BALL_SPEEDUP};

/// Send the ball back the way it came after hitting `paddle`.
///
/// The ball is moved just outside the paddle face it struck, its horizontal
/// speed grows by `BALL_SPEEDUP` and its vertical speed is re-rolled while
/// keeping its direction.
pub fn deflect_off_paddle(ball: &mut Ball, paddle: &Paddle, rng: &mut impl Rng) {
    let moving_left = ball.vel.x < 0.0;
    ball.vel.x = -ball.vel.x * BALL_SPEEDUP;

    if moving_left {
        ball.pos.x = paddle.x + paddle.width;
    } else {
        ball.pos.x = paddle.x - ball.size.x;
    }

    let dy = random_in(rng, (BALL_DEFLECT_MIN_DY, BALL_DEFLECT_MAX_DY));
    ball.vel.y = if ball.vel.y < 0.0 { -dy } else { dy };
}

/// Keep the ball between the top and bottom edges. Returns true on a bounce.
pub fn bounce_off_walls(ball: &mut Ball, play_area_height: f32) -> bool {
    if ball.pos.y <= 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = -ball.vel.y;
        true
    } else if ball.pos.y >= play_area_height - ball.size.y {
        ball.pos.y = play_area_height - ball.size.y;
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}
