//! A running game: match state, keyboard and HUD counters
//!
//! Implements `Frame` so the animation-frame driver can advance and draw it.

use crate::consts::MAX_FRAME_DT;
use crate::frame::{Frame, LoopControl};
use crate::platform::Keyboard;
use crate::renderer::Surface;
use crate::scene;
use crate::settings::Settings;
use crate::sim::{GameEvent, Match, tick};

const FPS_WINDOW: usize = 60;

/// Rolling frames-per-second estimate over the last 60 frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f32; FPS_WINDOW],
    frame_index: usize,
    filled: usize,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            filled: 0,
        }
    }
}

impl FpsCounter {
    pub fn record(&mut self, dt: f32) {
        self.frame_times[self.frame_index] = dt;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.filled = (self.filled + 1).min(FPS_WINDOW);
    }

    pub fn fps(&self) -> u32 {
        let total: f32 = self.frame_times[..self.filled].iter().sum();
        if total > 0.0 {
            (self.filled as f32 / total).round() as u32
        } else {
            0
        }
    }
}

/// Game instance holding all per-session state
#[derive(Debug, Clone)]
pub struct Game {
    pub state: Match,
    pub keyboard: Keyboard,
    pub settings: Settings,
    fps: FpsCounter,
    /// Events from the most recent update
    last_events: Vec<GameEvent>,
    /// End the loop when a match is won instead of offering a rematch
    stop_after_match: bool,
}

impl Game {
    pub fn new(settings: Settings, seed: u64) -> Self {
        Self {
            state: Match::new(&settings, seed),
            keyboard: Keyboard::new(),
            settings,
            fps: FpsCounter::default(),
            last_events: Vec::new(),
            stop_after_match: false,
        }
    }

    /// Stop the game loop once someone wins
    pub fn stop_after_match(mut self) -> Self {
        self.stop_after_match = true;
        self
    }

    /// Start over with a fresh match
    pub fn restart(&mut self, seed: u64) {
        self.state = Match::new(&self.settings, seed);
        self.keyboard = Keyboard::new();
        log::info!("Game restarted with seed: {}", seed);
    }

    pub fn last_events(&self) -> &[GameEvent] {
        &self.last_events
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }
}

impl Frame for Game {
    fn update(&mut self, dt: f32) -> LoopControl {
        self.fps.record(dt);

        // The first frame and throttled background tabs report huge gaps
        let dt = dt.min(MAX_FRAME_DT);
        let input = self.keyboard.take_input();
        self.last_events = tick(&mut self.state, &input, dt);

        for event in &self.last_events {
            log::trace!("{:?}", event);
        }

        let won = self
            .last_events
            .iter()
            .any(|e| matches!(e, GameEvent::Victory(_)));
        if won && self.stop_after_match {
            LoopControl::Stop
        } else {
            LoopControl::Continue
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        scene::draw(&self.state, surface);
        if self.settings.show_fps {
            scene::draw_fps(self.fps(), surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::GameLoop;
    use crate::sim::Side;
    use glam::Vec2;
    use crate::renderer::QuadBatch;
    use crate::sim::GamePhase;

    #[test]
    fn test_fps_counter() {
        let mut fps = FpsCounter::default();
        assert_eq!(fps.fps(), 0);
        for _ in 0..120 {
            fps.record(1.0 / 60.0);
        }
        assert_eq!(fps.fps(), 60);
    }

    #[test]
    fn test_enter_key_drives_phases() {
        let mut game = Game::new(Settings::default(), 7);
        game.keyboard.key_down("Enter");
        game.update(0.016);
        assert_eq!(game.state.phase, GamePhase::Serve);

        // Held Enter does not fire again
        game.update(0.016);
        assert_eq!(game.state.phase, GamePhase::Serve);

        game.keyboard.key_up("Enter");
        game.keyboard.key_down("Enter");
        game.update(0.016);
        assert_eq!(game.state.phase, GamePhase::Play);
    }

    #[test]
    fn test_large_gap_is_clamped() {
        let mut game = Game::new(Settings::default(), 7);
        game.keyboard.key_down("s");
        // Five seconds would normally slam the paddle to the bottom
        game.update(5.0);
        assert!((game.state.left.y - (260.0 + 1000.0 * MAX_FRAME_DT)).abs() < 0.001);
    }

    #[test]
    fn test_runs_under_game_loop() {
        let mut game_loop = GameLoop::new(Game::new(Settings::default(), 7));
        let mut batch = QuadBatch::new(1280.0, 720.0);

        game_loop.game_mut().keyboard.key_down("Enter");
        assert_eq!(game_loop.frame(16.0, &mut batch), LoopControl::Continue);
        assert_eq!(game_loop.game().state.phase, GamePhase::Serve);
        assert!(batch.vertex_count() > 0);
    }

    #[test]
    fn test_restart_resets_match() {
        let mut game = Game::new(Settings::default(), 7);
        game.state.left_score = 4;
        game.keyboard.key_down("w");
        game.restart(8);
        assert_eq!(game.state.left_score, 0);
        assert_eq!(game.state.seed, 8);
        assert!(!game.keyboard.left.up);
    }

    fn one_point_from_victory() -> Game {
        let mut game = Game::new(Settings::default(), 7);
        game.state.phase = GamePhase::Play;
        game.state.left_score = game.state.win_score - 1;
        game.state.ball.pos = Vec2::new(1285.0, 300.0);
        game.state.ball.vel = Vec2::new(400.0, 0.0);
        game
    }

    #[test]
    fn test_victory_stops_loop_when_asked() {
        let mut game_loop = GameLoop::new(one_point_from_victory().stop_after_match());
        let mut batch = QuadBatch::new(1280.0, 720.0);

        assert_eq!(game_loop.frame(16.0, &mut batch), LoopControl::Stop);
        assert!(game_loop.is_stopped());
        assert_eq!(game_loop.game().state.winner, Some(Side::Left));
    }

    #[test]
    fn test_victory_keeps_running_by_default() {
        let mut game_loop = GameLoop::new(one_point_from_victory());
        let mut batch = QuadBatch::new(1280.0, 720.0);

        assert_eq!(game_loop.frame(16.0, &mut batch), LoopControl::Continue);
        assert_eq!(game_loop.game().state.phase, GamePhase::Victory);
    }
}
