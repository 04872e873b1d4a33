//! Frame painting.
//!
//! Drawing goes through the [`Surface`] trait so the same code paints the
//! browser canvas and the recording fake used in tests.

use crate::consts;
use crate::game::GameState;

/// 2d drawing primitives in surface pixels, top-left origin.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn set_fill(&self, color: &str);
    fn set_font(&self, font: &str);
    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64);
    fn fill_text(&self, text: &str, x: f64, y: f64);
    /// Advance width of `text` in the current font.
    fn measure_text(&self, text: &str) -> f64;
}

pub fn render(state: &GameState, surface: &dyn Surface) {
    draw_frame(state, surface);

    let sq = &state.square;
    surface.set_fill(consts::SQUARE_COLOR);
    surface.fill_rect(sq.x, sq.y, sq.width, sq.height);

    // Score centered horizontally by measured width; vertical position is a
    // fixed baseline offset.
    let score = state.score.to_string();
    surface.set_fill(consts::TEXT_COLOR);
    surface.set_font(consts::SCORE_FONT);
    let text_w = surface.measure_text(&score);
    surface.fill_text(
        &score,
        sq.x + (sq.width - text_w) / 2.0,
        sq.y + consts::SCORE_BASELINE,
    );
}

/// Background, bordered panel, header bar, title and fps readout.
fn draw_frame(state: &GameState, surface: &dyn Surface) {
    let (w, h) = (surface.width(), surface.height());
    let b = consts::BORDER;

    surface.set_fill(consts::BORDER_COLOR);
    surface.fill_rect(0.0, 0.0, w, h);
    surface.set_fill(consts::PANEL_COLOR);
    surface.fill_rect(b, b, w - 2.0 * b, h - 2.0 * b);

    surface.set_fill(consts::HEADER_COLOR);
    surface.fill_rect(0.0, 0.0, w, consts::HEADER_HEIGHT);

    surface.set_fill(consts::TEXT_COLOR);
    surface.set_font(consts::TITLE_FONT);
    surface.fill_text(consts::TITLE, 10.0, 30.0);

    surface.set_fill(consts::TEXT_COLOR);
    surface.set_font(consts::FPS_FONT);
    surface.fill_text(&format!("Fps: {}", state.fps.fps), 13.0, 50.0);
}
