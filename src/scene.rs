//! Paints a match onto a drawing surface

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, MESSAGE_FONT_SIZE, SCORE_FONT_SIZE};
use crate::renderer::{Surface, TextAlign, colors};
use crate::sim::{GamePhase, Match, Side};

/// Baseline of the two message lines
const MESSAGE_TOP: f32 = 40.0;
const MESSAGE_GAP: f32 = 30.0;
/// Baseline of the score digits
const SCORE_BASELINE: f32 = 75.0;

/// Headline and prompt for the current phase
pub fn phase_message(game: &Match) -> Option<(String, String)> {
    match game.phase {
        GamePhase::Start => Some((
            "Welcome to Pong!".to_string(),
            "Press Enter to begin!".to_string(),
        )),
        GamePhase::Serve => Some((
            format!("Player {}'s serve!", game.serving.player_number()),
            "Press Enter to serve!".to_string(),
        )),
        GamePhase::Victory => {
            let winner = game.winner.unwrap_or(game.serving.opponent());
            Some((
                format!("Player {} wins!", winner.player_number()),
                "Press Enter to restart!".to_string(),
            ))
        }
        GamePhase::Play => None,
    }
}

/// Draw a full frame: background, scores, phase message, paddles and ball
pub fn draw(game: &Match, surface: &mut dyn Surface) {
    surface.clear(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);

    surface.set_fill_color(colors::FOREGROUND);
    surface.set_text_align(TextAlign::Center);

    if let Some((headline, prompt)) = phase_message(game) {
        surface.set_font_size(MESSAGE_FONT_SIZE);
        surface.fill_text(&headline, CANVAS_WIDTH / 2.0, MESSAGE_TOP);
        surface.fill_text(&prompt, CANVAS_WIDTH / 2.0, MESSAGE_TOP + MESSAGE_GAP);
    }

    surface.set_font_size(SCORE_FONT_SIZE);
    surface.fill_text(
        &game.score(Side::Left).to_string(),
        CANVAS_WIDTH * 0.25,
        SCORE_BASELINE,
    );
    surface.fill_text(
        &game.score(Side::Right).to_string(),
        CANVAS_WIDTH * 0.75,
        SCORE_BASELINE,
    );

    game.left.render(surface);
    game.ball.render(surface);
    game.right.render(surface);
}

/// Small FPS readout in the top-left corner
pub fn draw_fps(fps: u32, surface: &mut dyn Surface) {
    surface.set_fill_color(colors::FOREGROUND);
    surface.set_text_align(TextAlign::Left);
    surface.set_font_size(MESSAGE_FONT_SIZE);
    surface.fill_text(&format!("FPS: {}", fps), 10.0, 10.0 + MESSAGE_FONT_SIZE);
}
