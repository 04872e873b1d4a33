//! Bouncing Square core crate.
//!
//! A 100px square bounces around a canvas; clicking it scores a point, makes
//! it 10% faster and throws it somewhere else. The simulation, pointer
//! handling and drawing are plain Rust over [`game::GameState`] so they run
//! and test natively; `web` adapts them to the browser canvas.

use wasm_bindgen::prelude::*;

pub mod frame;
pub mod game;
pub mod random;
pub mod render;
pub mod web;

pub use frame::{FrameScheduler, Game};
pub use game::{Dir, FpsCounter, GameState, Level, Square};
pub use random::{PcgSource, RandomSource};
pub use render::Surface;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    console_log::init_with_level(log::Level::Info).ok();
}

/// Tuning values. Sizes are surface pixels, times are seconds.
pub mod consts {
    pub const DEFAULT_CANVAS_ID: &str = "viewport";
    pub const DEFAULT_CANVAS_WIDTH: u32 = 800;
    pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;

    /// Frame border around the level.
    pub const BORDER: f64 = 1.0;
    /// Header strip above the level (the top border sits inside it).
    pub const HEADER_HEIGHT: f64 = 65.0;

    pub const SQUARE_SIZE: f64 = 100.0;
    pub const INITIAL_SPEED: f64 = 200.0;
    /// Speed multiplier per hit. No upper bound.
    pub const SPEED_GROWTH: f64 = 1.1;

    pub const FPS_WINDOW: f64 = 0.25;

    pub const TITLE: &str = "HTML5 Canvas Bouncing Square - Rembound.com";
    pub const TITLE_FONT: &str = "24px Verdana";
    pub const FPS_FONT: &str = "12px Verdana";
    pub const SCORE_FONT: &str = "38px Verdana";
    /// Baseline of the score text below the square's top edge.
    pub const SCORE_BASELINE: f64 = 65.0;

    pub const BORDER_COLOR: &str = "#d0d0d0";
    pub const PANEL_COLOR: &str = "#e8eaec";
    pub const HEADER_COLOR: &str = "#303030";
    pub const SQUARE_COLOR: &str = "#ff8080";
    pub const TEXT_COLOR: &str = "#ffffff";
}

// -----------------------------------------------------------------------------
// Unified entrypoint
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_game() -> Result<web::GameHandle, JsValue> {
    web::start(consts::DEFAULT_CANVAS_ID)
}
