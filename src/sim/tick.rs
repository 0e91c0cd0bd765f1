//! Per-frame simulation step
//!
//! Resolves input into paddle intents, moves the paddles and then the ball,
//! handles collisions and scoring, and drives the phase machine:
//!
//! Start --confirm--> Serve --confirm--> Play --point--> Serve
//!                                         \--winning point--> Victory --confirm--> Serve

use super::collision::{bounce_off_walls, deflect_off_paddle};
use super::paddle::KeyState;
use super::state::{Control, GamePhase, Match, Side};
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left paddle keys (always human)
    pub left: KeyState,
    /// Right paddle keys (ignored when the AI plays that side)
    pub right: KeyState,
    /// Enter pressed since the last frame
    pub confirm: bool,
}

/// Things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PhaseChanged(GamePhase),
    PaddleHit(Side),
    WallHit,
    Scored(Side),
    Victory(Side),
}

/// Advance a match by `dt` seconds
pub fn tick(game: &mut Match, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.confirm {
        confirm(game, &mut events);
    }

    game.left.apply_player_input(input.left);
    match game.right_control {
        Control::Human => game.right.apply_player_input(input.right),
        Control::Ai => game.right.apply_ai(&game.ball, game.phase),
    }
    game.left.update(dt);
    game.right.update(dt);

    // Collisions see the moved ball, so no drawn frame overlaps a paddle
    if game.phase == GamePhase::Play {
        let prev_x = game.ball.x();
        game.ball.update(dt);
        resolve_ball(game, prev_x, &mut events);
    }

    events
}

fn set_phase(game: &mut Match, phase: GamePhase, events: &mut Vec<GameEvent>) {
    if game.phase != phase {
        log::debug!("Phase {:?} -> {:?}", game.phase, phase);
        game.phase = phase;
        events.push(GameEvent::PhaseChanged(phase));
    }
}

fn confirm(game: &mut Match, events: &mut Vec<GameEvent>) {
    match game.phase {
        GamePhase::Start => set_phase(game, GamePhase::Serve, events),
        GamePhase::Serve => {
            game.serve();
            set_phase(game, GamePhase::Play, events);
        }
        GamePhase::Victory => {
            // Loser of the last match already holds the serve
            game.reset_scores();
            game.reset_ball();
            set_phase(game, GamePhase::Serve, events);
        }
        GamePhase::Play => {}
    }
}

/// Collisions and scoring for a live ball that just moved from `prev_x`
fn resolve_ball(game: &mut Match, prev_x: f32, events: &mut Vec<GameEvent>) {
    for side in [Side::Left, Side::Right] {
        let paddle = game.paddle(side);
        if game.ball.collides(paddle) || game.ball.crossed_face(paddle, prev_x) {
            let paddle = game.paddle(side).clone();
            deflect_off_paddle(&mut game.ball, &paddle, &mut game.rng);
            events.push(GameEvent::PaddleHit(side));
        }
    }

    if bounce_off_walls(&mut game.ball, CANVAS_HEIGHT) {
        events.push(GameEvent::WallHit);
    }

    let scorer = if game.ball.x() + game.ball.width() < 0.0 {
        Some(Side::Right)
    } else if game.ball.x() > CANVAS_WIDTH {
        Some(Side::Left)
    } else {
        None
    };

    if let Some(scorer) = scorer {
        point_scored(game, scorer, events);
    }
}

fn point_scored(game: &mut Match, scorer: Side, events: &mut Vec<GameEvent>) {
    let score = game.add_point(scorer);
    events.push(GameEvent::Scored(scorer));
    log::info!(
        "Player {} scores ({} - {})",
        scorer.player_number(),
        game.left_score,
        game.right_score
    );

    // The side that conceded serves next
    game.serving = scorer.opponent();
    game.reset_ball();

    if score >= game.win_score {
        game.winner = Some(scorer);
        events.push(GameEvent::Victory(scorer));
        log::info!("Player {} wins", scorer.player_number());
        set_phase(game, GamePhase::Victory, events);
    } else {
        set_phase(game, GamePhase::Serve, events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_FRAME_DT;
    use crate::settings::Settings;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn confirm_input() -> TickInput {
        TickInput {
            confirm: true,
            ..Default::default()
        }
    }

    fn new_match() -> Match {
        Match::new(&Settings::default(), 12345)
    }

    #[test]
    fn test_start_to_serve_to_play() {
        let mut game = new_match();
        assert_eq!(game.phase, GamePhase::Start);

        // Nothing happens without confirm
        tick(&mut game, &TickInput::default(), DT);
        assert_eq!(game.phase, GamePhase::Start);

        let events = tick(&mut game, &confirm_input(), DT);
        assert_eq!(game.phase, GamePhase::Serve);
        assert_eq!(events, vec![GameEvent::PhaseChanged(GamePhase::Serve)]);
        assert_eq!(game.ball.vel, Vec2::ZERO);

        tick(&mut game, &confirm_input(), DT);
        assert_eq!(game.phase, GamePhase::Play);
        // Left serves, so the ball heads right
        assert!(game.ball.vel.x > 0.0);
    }

    #[test]
    fn test_confirm_ignored_during_play() {
        let mut game = new_match();
        game.phase = GamePhase::Play;
        game.ball.vel = Vec2::new(100.0, 0.0);
        let events = tick(&mut game, &confirm_input(), DT);
        assert_eq!(game.phase, GamePhase::Play);
        assert!(events.is_empty());
    }

    #[test]
    fn test_ball_parked_outside_play() {
        let mut game = new_match();
        game.phase = GamePhase::Serve;
        game.ball.vel = Vec2::new(500.0, 0.0);
        let before = game.ball.pos;
        tick(&mut game, &TickInput::default(), DT);
        assert_eq!(game.ball.pos, before);
    }

    #[test]
    fn test_left_paddle_follows_keys() {
        let mut game = new_match();
        let input = TickInput {
            left: KeyState { up: true, down: false },
            ..Default::default()
        };
        tick(&mut game, &input, 0.1);
        assert!((game.left.y - 160.0).abs() < 0.001);
    }

    #[test]
    fn test_ai_right_paddle_waits_during_serve() {
        let mut game = new_match();
        game.phase = GamePhase::Serve;
        game.ball.pos.y = 0.0;
        let before = game.right.y;
        tick(&mut game, &TickInput::default(), 0.1);
        assert_eq!(game.right.y, before);
    }

    #[test]
    fn test_ai_right_paddle_chases_in_play() {
        let mut game = new_match();
        game.phase = GamePhase::Play;
        game.ball.pos = Vec2::new(600.0, 50.0);
        game.ball.vel = Vec2::new(100.0, 0.0);
        let before = game.right.y;
        tick(&mut game, &TickInput::default(), 0.1);
        assert!(game.right.y < before);
    }

    #[test]
    fn test_human_right_paddle_ignores_ball() {
        let mut settings = Settings::default();
        settings.right_control = Control::Human;
        let mut game = Match::new(&settings, 1);
        game.phase = GamePhase::Play;
        game.ball.pos = Vec2::new(600.0, 50.0);
        game.ball.vel = Vec2::new(100.0, 0.0);
        let before = game.right.y;

        tick(&mut game, &TickInput::default(), 0.1);
        assert_eq!(game.right.y, before);

        let input = TickInput {
            right: KeyState { up: false, down: true },
            ..Default::default()
        };
        tick(&mut game, &input, 0.1);
        assert!(game.right.y > before);
    }

    #[test]
    fn test_paddle_hit_reverses_ball() {
        let mut game = new_match();
        game.phase = GamePhase::Play;
        game.ball.pos = Vec2::new(45.0, 300.0);
        game.ball.vel = Vec2::new(-400.0, 0.0);

        let events = tick(&mut game, &TickInput::default(), DT);
        assert!(events.contains(&GameEvent::PaddleHit(Side::Left)));
        assert!(game.ball.vel.x > 0.0);
    }

    #[test]
    fn test_slow_frame_cannot_tunnel_through_paddle() {
        let mut game = new_match();
        game.phase = GamePhase::Play;
        // Clear of the paddle face, then one capped frame carries it 60 px
        game.ball.pos = Vec2::new(55.0, 300.0);
        game.ball.vel = Vec2::new(-600.0, 0.0);

        let events = tick(&mut game, &TickInput::default(), MAX_FRAME_DT);
        assert!(events.contains(&GameEvent::PaddleHit(Side::Left)));
        assert!(game.ball.vel.x > 0.0);
        assert_eq!(game.ball.x(), game.left.x + game.left.width);
        assert_eq!(game.right_score, 0);
    }

    #[test]
    fn test_drawn_ball_never_overlaps_paddle() {
        let mut game = new_match();
        game.phase = GamePhase::Play;
        game.ball.pos = Vec2::new(1205.0, 300.0);
        game.ball.vel = Vec2::new(400.0, 0.0);

        let events = tick(&mut game, &TickInput::default(), DT);
        assert!(events.contains(&GameEvent::PaddleHit(Side::Right)));
        assert!(!game.ball.collides(&game.right));
    }

    #[test]
    fn test_ball_exit_left_scores_for_right() {
        let mut game = new_match();
        game.phase = GamePhase::Play;
        game.ball.pos = Vec2::new(-25.0, 300.0);
        game.ball.vel = Vec2::new(-400.0, 0.0);

        let events = tick(&mut game, &TickInput::default(), DT);
        assert!(events.contains(&GameEvent::Scored(Side::Right)));
        assert_eq!(game.right_score, 1);
        assert_eq!(game.serving, Side::Left);
        assert_eq!(game.phase, GamePhase::Serve);
        assert_eq!(game.ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_ball_exit_right_scores_for_left() {
        let mut game = new_match();
        game.phase = GamePhase::Play;
        game.ball.pos = Vec2::new(1285.0, 300.0);
        game.ball.vel = Vec2::new(400.0, 0.0);

        tick(&mut game, &TickInput::default(), DT);
        assert_eq!(game.left_score, 1);
        assert_eq!(game.serving, Side::Right);

        // Right serves toward the left
        tick(&mut game, &confirm_input(), DT);
        assert!(game.ball.vel.x < 0.0);
    }

    #[test]
    fn test_victory_and_rematch() {
        let mut game = new_match();
        game.phase = GamePhase::Play;
        game.left_score = game.win_score - 1;
        game.ball.pos = Vec2::new(1285.0, 300.0);
        game.ball.vel = Vec2::new(400.0, 0.0);

        let events = tick(&mut game, &TickInput::default(), DT);
        assert!(events.contains(&GameEvent::Victory(Side::Left)));
        assert_eq!(game.phase, GamePhase::Victory);
        assert_eq!(game.winner, Some(Side::Left));
        assert_eq!(game.serving, Side::Right);

        tick(&mut game, &confirm_input(), DT);
        assert_eq!(game.phase, GamePhase::Serve);
        assert_eq!((game.left_score, game.right_score), (0, 0));
        assert!(game.winner.is_none());
        assert_eq!(game.serving, Side::Right);
    }

    #[test]
    fn test_ball_stays_on_court_vertically() {
        let mut game = new_match();
        tick(&mut game, &confirm_input(), DT);
        tick(&mut game, &confirm_input(), DT);

        for _ in 0..5000 {
            tick(&mut game, &TickInput::default(), DT);
            if game.phase == GamePhase::Play {
                // One frame of travel past the wall at most
                let slack = game.ball.vel.y.abs() * DT;
                assert!(game.ball.y() >= -slack);
                assert!(game.ball.y() + game.ball.height() <= CANVAS_HEIGHT + slack);
            } else if game.phase == GamePhase::Serve {
                tick(&mut game, &confirm_input(), DT);
            }
        }
    }

    #[test]
    fn test_determinism() {
        let mut a = new_match();
        let mut b = new_match();

        let inputs = [
            confirm_input(),
            confirm_input(),
            TickInput {
                left: KeyState { up: true, down: false },
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..200 {
            for input in &inputs {
                tick(&mut a, input, DT);
                tick(&mut b, input, DT);
            }
        }

        assert_eq!(a.ball, b.ball);
        assert_eq!(a.left, b.left);
        assert_eq!(a.right, b.right);
        assert_eq!((a.left_score, a.right_score), (b.left_score, b.right_score));
    }
}
