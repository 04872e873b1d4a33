//! Browser glue: canvas lookup, the `requestAnimationFrame` scheduler, and
//! mouse listeners feeding the pointer handler.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent, window};

use crate::consts;
use crate::frame::{self, FrameScheduler, Game};
use crate::game::GameState;
use crate::game::input::{ClientRect, Point, PointerEvent, client_to_surface};
use crate::random::{self, PcgSource};
use crate::render::Surface;

/// Canvas 2d context plus its element (for the pixel size).
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }
    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }
    fn set_fill(&self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }
    fn set_font(&self, font: &str) {
        self.ctx.set_font(font);
    }
    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.fill_rect(x, y, w, h);
    }
    fn fill_text(&self, text: &str, x: f64, y: f64) {
        self.ctx.fill_text(text, x, y).ok();
    }
    fn measure_text(&self, text: &str) -> f64 {
        self.ctx
            .measure_text(text)
            .map(|m| m.width())
            .unwrap_or(0.0)
    }
}

/// Schedules frames with `window.requestAnimationFrame`.
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    fn schedule_next(&self, callback: Box<dyn FnOnce(f64)>) {
        let cb = Closure::once_into_js(move |ts: f64| callback(ts));
        if let Some(w) = window() {
            if let Err(e) = w.request_animation_frame(cb.unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {e:?}");
            }
        }
    }
}

type SharedGame = Rc<RefCell<Game<PcgSource>>>;

/// Handle returned to JS; keeps the running game reachable for inspection.
#[wasm_bindgen]
pub struct GameHandle {
    game: SharedGame,
}

#[wasm_bindgen]
impl GameHandle {
    pub fn score(&self) -> u32 {
        self.game.borrow().state.score
    }

    pub fn speed(&self) -> f64 {
        self.game.borrow().state.square.speed
    }

    pub fn fps(&self) -> u32 {
        self.game.borrow().state.fps.fps
    }
}

#[cfg(feature = "serde_json")]
#[wasm_bindgen]
impl GameHandle {
    /// Current state as JSON (debug aid).
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.game.borrow().state)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

pub fn start(canvas_id: &str) -> Result<GameHandle, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas = find_or_create_canvas(&doc, canvas_id)?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    let surface = Rc::new(CanvasSurface {
        canvas: canvas.clone(),
        ctx,
    });
    let state = GameState::for_surface(surface.width(), surface.height());
    let seed = random::entropy_seed();
    log::info!(
        "canvas {}x{}, level {:?}, seed {}",
        surface.width(),
        surface.height(),
        state.level,
        seed
    );
    let game: SharedGame = Rc::new(RefCell::new(Game::new(state, PcgSource::seeded(seed))));

    listen(&canvas, "mousemove", &game, PointerEvent::Move)?;
    listen(&canvas, "mousedown", &game, PointerEvent::Down)?;
    listen(&canvas, "mouseup", &game, PointerEvent::Up)?;
    listen(&canvas, "mouseout", &game, PointerEvent::Out)?;

    // First frame runs immediately at t=0; rAF takes over from there.
    frame::run_frame(Rc::new(RafScheduler), game.clone(), surface, 0.0);
    Ok(GameHandle { game })
}

fn find_or_create_canvas(doc: &Document, id: &str) -> Result<HtmlCanvasElement, JsValue> {
    if let Some(el) = doc.get_element_by_id(id) {
        return el.dyn_into().map_err(|_| JsValue::from_str("element is not a canvas"));
    }
    log::info!("no #{id} canvas, creating one");
    let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
    c.set_id(id);
    c.set_width(consts::DEFAULT_CANVAS_WIDTH);
    c.set_height(consts::DEFAULT_CANVAS_HEIGHT);
    doc.body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&c)?;
    Ok(c)
}

/// Wire a mouse event on the canvas through to the game as `kind(pos)`.
fn listen(
    canvas: &HtmlCanvasElement,
    event: &str,
    game: &SharedGame,
    kind: fn(Point) -> PointerEvent,
) -> Result<(), JsValue> {
    let target = canvas.clone();
    let game = game.clone();
    let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
        let r = target.get_bounding_client_rect();
        let rect = ClientRect {
            left: r.left(),
            top: r.top(),
            right: r.right(),
            bottom: r.bottom(),
        };
        let pos = client_to_surface(
            evt.client_x() as f64,
            evt.client_y() as f64,
            rect,
            target.width() as f64,
            target.height() as f64,
        );
        game.borrow_mut().pointer(kind(pos));
    }) as Box<dyn FnMut(_)>);
    canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
