//! Pointer handling: hit-testing clicks against the square.

use super::{Dir, GameState, Level};
use crate::consts;
use crate::random::RandomSource;

/// Position in surface pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Raw pointer events delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Move(Point),
    Down(Point),
    Up(Point),
    Out(Point),
}

/// Bounding rectangle of the surface element in client (window) pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClientRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Map a client-space position to surface pixels, accounting for any CSS
/// scaling of the element.
pub fn client_to_surface(
    client_x: f64,
    client_y: f64,
    rect: ClientRect,
    surface_width: f64,
    surface_height: f64,
) -> Point {
    Point {
        x: ((client_x - rect.left) / (rect.right - rect.left) * surface_width).round(),
        y: ((client_y - rect.top) / (rect.bottom - rect.top) * surface_height).round(),
    }
}

/// Dispatch a pointer event. Only `Down` changes state; returns whether it hit.
pub fn handle_pointer(state: &mut GameState, event: PointerEvent, rng: &mut dyn RandomSource) -> bool {
    match event {
        PointerEvent::Down(pos) => on_pointer_down(state, pos, rng),
        PointerEvent::Move(_) | PointerEvent::Up(_) | PointerEvent::Out(_) => false,
    }
}

/// Score a hit if `pos` lies inside the square: bump the score, speed the
/// square up, and drop it somewhere random heading in a random direction.
pub fn on_pointer_down(state: &mut GameState, pos: Point, rng: &mut dyn RandomSource) -> bool {
    if !state.square.contains(pos.x, pos.y) {
        return false;
    }

    state.score += 1;
    let sq = &mut state.square;
    sq.speed *= consts::SPEED_GROWTH;
    sq.x = random_coord(rng, state.level.x, state.level.width - sq.width);
    sq.y = random_coord(rng, state.level.y, state.level.height - sq.height);
    sq.xdir = random_dir(rng);
    sq.ydir = random_dir(rng);

    log::debug!(
        "hit #{} -> ({}, {}) speed {:.1}",
        state.score,
        sq.x,
        sq.y,
        sq.speed
    );
    true
}

/// Integer pixel in `[lo, lo + span)`.
fn random_coord(rng: &mut dyn RandomSource, lo: f64, span: f64) -> f64 {
    (lo + rng.next_float() * span).floor().max(lo)
}

fn random_dir(rng: &mut dyn RandomSource) -> Dir {
    if rng.next_int(2) == 0 { Dir::Neg } else { Dir::Pos }
}

/// Playable range for the square's top-left corner within `level`.
pub fn placement_bounds(level: &Level, width: f64, height: f64) -> (f64, f64, f64, f64) {
    (
        level.x,
        level.right() - width,
        level.y,
        level.bottom() - height,
    )
}
