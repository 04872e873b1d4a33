//! Game state for the bouncing square.
//!
//! Everything the frame loop touches lives in [`GameState`]: the immutable
//! level rectangle, the moving square, the score and the fps window. The
//! simulator (`sim`), the pointer handler (`input`) and the renderer all take
//! it explicitly; there is no module-level state.

use crate::consts;

pub mod input;
pub mod sim;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Playable rectangle inside the surface (border and header carved out).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Level {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Level {
    /// Level for a surface of the given pixel size: 1px border on every side
    /// and a header strip across the top.
    pub fn for_surface(surface_width: f64, surface_height: f64) -> Self {
        Self {
            x: consts::BORDER,
            y: consts::HEADER_HEIGHT,
            width: surface_width - 2.0 * consts::BORDER,
            height: surface_height - consts::HEADER_HEIGHT - consts::BORDER,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Travel direction along one axis. Only the two unit signs exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Dir {
    Neg,
    Pos,
}

impl Dir {
    pub fn sign(self) -> f64 {
        match self {
            Dir::Neg => -1.0,
            Dir::Pos => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Square {
    pub x: f64, // top-left
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub xdir: Dir,
    pub ydir: Dir,
    pub speed: f64, // px per second
}

impl Square {
    /// Half-open containment test: the left/top edges are inside, the
    /// right/bottom edges are not.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// Rolling frames-per-second window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FpsCounter {
    pub accumulated: f64, // seconds in the current window
    pub frames: u32,
    pub fps: u32, // last computed value
}

impl FpsCounter {
    /// Count one frame of `dt` seconds; closes the window once it exceeds
    /// [`consts::FPS_WINDOW`].
    pub fn tick(&mut self, dt: f64) {
        self.accumulated += dt;
        self.frames += 1;
        if self.accumulated > consts::FPS_WINDOW {
            self.fps = (self.frames as f64 / self.accumulated).round() as u32;
            self.accumulated = 0.0;
            self.frames = 0;
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GameState {
    pub level: Level,
    pub square: Square,
    pub score: u32,
    pub fps: FpsCounter,
}

impl GameState {
    /// Fresh game: square centered in the level heading down-right at the
    /// initial speed, score zero.
    pub fn new(level: Level) -> Self {
        let width = consts::SQUARE_SIZE;
        let height = consts::SQUARE_SIZE;
        let square = Square {
            x: level.x + (level.width - width) / 2.0,
            y: level.y + (level.height - height) / 2.0,
            width,
            height,
            xdir: Dir::Pos,
            ydir: Dir::Pos,
            speed: consts::INITIAL_SPEED,
        };
        Self {
            level,
            square,
            score: 0,
            fps: FpsCounter::default(),
        }
    }

    pub fn for_surface(surface_width: f64, surface_height: f64) -> Self {
        Self::new(Level::for_surface(surface_width, surface_height))
    }
}
