//! Match state and core simulation types
//!
//! A `Match` owns everything one game of Pong needs: both paddles, the ball,
//! the scores and the current phase. Nothing here is global.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::paddle::Paddle;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first confirm
    Start,
    /// Ball parked in the middle, waiting for the server to confirm
    Serve,
    /// Ball in motion
    Play,
    /// Someone reached the winning score
    Victory,
}

/// Which end of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// 1-based player number shown on screen
    pub fn player_number(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }
}

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Control {
    Human,
    #[default]
    Ai,
}

/// One game of Pong
///
/// Serializes without its RNG; `from_json` re-seeds it from `seed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    /// Seed the RNG was created from
    pub seed: u64,
    pub phase: GamePhase,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub left_score: u32,
    pub right_score: u32,
    /// Side that serves next
    pub serving: Side,
    pub winner: Option<Side>,
    /// The left paddle is always human
    pub right_control: Control,
    pub win_score: u32,
    pub serve_speed_x: (f32, f32),
    pub serve_speed_y: (f32, f32),
    #[serde(skip, default = "unseeded_rng")]
    pub(crate) rng: Pcg32,
}

/// Placeholder until `Match::reseed` runs
fn unseeded_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

impl Match {
    /// Create a match on the title screen
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let paddle_y = (CANVAS_HEIGHT - PADDLE_HEIGHT) / 2.0;
        let left = Paddle::new(
            PADDLE_MARGIN,
            paddle_y,
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
            CANVAS_HEIGHT,
        )
        .with_max_speed(settings.paddle_speed);
        let right = Paddle::new(
            CANVAS_WIDTH - PADDLE_MARGIN - PADDLE_WIDTH,
            paddle_y,
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
            CANVAS_HEIGHT,
        )
        .with_max_speed(settings.paddle_speed);

        let mut ball = Ball::new(0.0, 0.0, BALL_SIZE, BALL_SIZE);
        ball.reset(CANVAS_WIDTH, CANVAS_HEIGHT);

        Self {
            seed,
            phase: GamePhase::Start,
            left,
            right,
            ball,
            left_score: 0,
            right_score: 0,
            serving: Side::Left,
            winner: None,
            right_control: settings.right_control,
            win_score: settings.win_score,
            serve_speed_x: settings.serve_speed_x,
            serve_speed_y: settings.serve_speed_y,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Restore a match saved with `to_json`
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut game: Match = serde_json::from_str(json)?;
        game.reseed();
        Ok(game)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Restart the RNG from `seed`
    pub fn reseed(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_score,
            Side::Right => self.right_score,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Award a point. Returns the new score for that side.
    pub fn add_point(&mut self, side: Side) -> u32 {
        let score = match side {
            Side::Left => &mut self.left_score,
            Side::Right => &mut self.right_score,
        };
        *score += 1;
        *score
    }

    /// Zero the scores and clear the winner for a rematch
    pub fn reset_scores(&mut self) {
        self.left_score = 0;
        self.right_score = 0;
        self.winner = None;
    }

    /// Put the ball back in the middle of the court
    pub fn reset_ball(&mut self) {
        self.ball.reset(CANVAS_WIDTH, CANVAS_HEIGHT);
    }

    /// Launch the ball away from the serving side
    pub fn serve(&mut self) {
        let receiver = self.serving.opponent();
        self.ball.serve_toward(
            receiver,
            self.serve_speed_x,
            self.serve_speed_y,
            &mut self.rng,
        );
    }
}
