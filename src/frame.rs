//! Animation-frame driver
//!
//! The platform calls `GameLoop::frame` once per display refresh with a
//! millisecond timestamp. Each call computes the delta time since the
//! previous call, updates the game, renders it, and tells the caller whether
//! to schedule another frame.

use crate::renderer::Surface;

/// Something the loop can advance and draw
pub trait Frame {
    /// Advance by `dt` seconds. Returning `Stop` ends the loop after this
    /// frame is drawn.
    fn update(&mut self, dt: f32) -> LoopControl;

    /// Draw the current state. Must not change game state.
    fn render(&self, surface: &mut dyn Surface);
}

/// Whether the platform should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Converts frame timestamps (ms) into delta times (s)
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_time_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds elapsed since the previous call (the first call measures from 0).
    ///
    /// Backwards or huge jumps are passed through unchanged.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = ((now_ms - self.last_time_ms) / 1000.0) as f32;
        self.last_time_ms = now_ms;
        dt
    }

    pub fn last_time_ms(&self) -> f64 {
        self.last_time_ms
    }
}

/// Runs `update` then `render` once per frame until stopped
#[derive(Debug)]
pub struct GameLoop<G> {
    game: G,
    clock: FrameClock,
    stopped: bool,
}

impl<G: Frame> GameLoop<G> {
    pub fn new(game: G) -> Self {
        Self {
            game,
            clock: FrameClock::new(),
            stopped: false,
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    /// Request that no further frames run
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Run one frame at timestamp `now_ms`
    pub fn frame(&mut self, now_ms: f64, surface: &mut dyn Surface) -> LoopControl {
        if self.stopped {
            return LoopControl::Stop;
        }

        let dt = self.clock.tick(now_ms);
        let control = self.game.update(dt);
        self.game.render(surface);

        if control == LoopControl::Stop {
            self.stopped = true;
        }
        control
    }
}
