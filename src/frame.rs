//! Frame loop: one simulate + render pair per scheduled frame.

use std::cell::RefCell;
use std::rc::Rc;

use crate::game::input::{self, PointerEvent};
use crate::game::{GameState, sim};
use crate::random::RandomSource;
use crate::render::{self, Surface};

/// Host hook that calls back once on the next display refresh with a
/// millisecond timestamp.
pub trait FrameScheduler {
    fn schedule_next(&self, callback: Box<dyn FnOnce(f64)>);
}

/// Game state plus the bits the loop needs between frames.
pub struct Game<R> {
    pub state: GameState,
    rng: R,
    last_frame_ms: f64,
}

impl<R: RandomSource> Game<R> {
    pub fn new(state: GameState, rng: R) -> Self {
        Self {
            state,
            rng,
            last_frame_ms: 0.0,
        }
    }

    /// Advance to timestamp `now_ms` and paint.
    pub fn frame(&mut self, now_ms: f64, surface: &dyn Surface) {
        let dt = (now_ms - self.last_frame_ms) / 1000.0;
        self.last_frame_ms = now_ms;
        sim::update(&mut self.state, dt);
        render::render(&self.state, surface);
    }

    pub fn pointer(&mut self, event: PointerEvent) -> bool {
        input::handle_pointer(&mut self.state, event, &mut self.rng)
    }
}

/// Run one frame at `now_ms`, re-registering with `scheduler` first so the
/// loop keeps going for as long as the host keeps calling back.
pub fn run_frame<S, R, F>(scheduler: Rc<S>, game: Rc<RefCell<Game<R>>>, surface: Rc<F>, now_ms: f64)
where
    S: FrameScheduler + 'static,
    R: RandomSource + 'static,
    F: Surface + 'static,
{
    {
        let (s, g, f) = (scheduler.clone(), game.clone(), surface.clone());
        scheduler.schedule_next(Box::new(move |ts| run_frame(s, g, f, ts)));
    }
    game.borrow_mut().frame(now_ms, &*surface);
}
