//! Time-based movement and edge reflection.

use super::{Dir, GameState};

/// Advance the game by `dt` seconds.
///
/// dt is trusted: it is not clamped, so a very long frame (e.g. a tab that
/// was in the background) can carry the square past both edges in one step.
pub fn update(state: &mut GameState, dt: f64) {
    state.fps.tick(dt);

    let sq = &mut state.square;
    sq.x += dt * sq.speed * sq.xdir.sign();
    sq.y += dt * sq.speed * sq.ydir.sign();

    let lvl = state.level;
    // Left / right edges
    if sq.x <= lvl.x {
        sq.xdir = Dir::Pos;
        sq.x = lvl.x;
    } else if sq.x + sq.width >= lvl.right() {
        sq.xdir = Dir::Neg;
        sq.x = lvl.right() - sq.width;
    }
    // Top / bottom edges
    if sq.y <= lvl.y {
        sq.ydir = Dir::Pos;
        sq.y = lvl.y;
    } else if sq.y + sq.height >= lvl.bottom() {
        sq.ydir = Dir::Neg;
        sq.y = lvl.bottom() - sq.height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::for_surface(800.0, 600.0)
    }

    #[test]
    fn moves_by_speed_times_dt() {
        let mut st = state();
        let (x0, y0) = (st.square.x, st.square.y);
        update(&mut st, 0.5);
        assert_eq!(st.square.x, x0 + 100.0);
        assert_eq!(st.square.y, y0 + 100.0);
        assert_eq!(st.square.xdir, Dir::Pos);
        assert_eq!(st.square.ydir, Dir::Pos);
    }

    #[test]
    fn one_second_from_center_on_800x600() {
        // center is (350, 282)
        let mut st = state();
        update(&mut st, 1.0);
        assert_eq!(st.square.x, 550.0);
        assert_eq!(st.square.y, 482.0);
        assert_eq!(st.square.xdir, Dir::Pos);
        assert_eq!(st.square.ydir, Dir::Pos);
        // another half second overshoots the bottom (582 + 100 > 599)
        update(&mut st, 0.5);
        assert_eq!(st.square.x, 650.0);
        assert_eq!(st.square.y, 499.0);
        assert_eq!(st.square.ydir, Dir::Neg);
    }

    #[test]
    fn left_edge_reflects_and_clamps_exactly() {
        let mut st = state();
        st.square.x = st.level.x + 2.0;
        st.square.xdir = Dir::Neg;
        update(&mut st, 0.1);
        assert_eq!(st.square.x, st.level.x);
        assert_eq!(st.square.xdir, Dir::Pos);
    }

    #[test]
    fn right_edge_reflects() {
        let mut st = state();
        st.square.x = st.level.right() - st.square.width - 1.0;
        update(&mut st, 0.1);
        assert_eq!(st.square.x, st.level.right() - st.square.width);
        assert_eq!(st.square.xdir, Dir::Neg);
    }

    #[test]
    fn top_edge_reflects() {
        let mut st = state();
        st.square.y = st.level.y + 1.0;
        st.square.ydir = Dir::Neg;
        update(&mut st, 0.05);
        assert_eq!(st.square.y, st.level.y);
        assert_eq!(st.square.ydir, Dir::Pos);
    }

    #[test]
    fn touching_edge_with_zero_dt_still_reflects() {
        let mut st = state();
        st.square.x = st.level.x;
        st.square.xdir = Dir::Neg;
        update(&mut st, 0.0);
        assert_eq!(st.square.x, st.level.x);
        assert_eq!(st.square.xdir, Dir::Pos);
    }

    #[test]
    fn update_counts_frames() {
        let mut st = state();
        update(&mut st, 0.01);
        update(&mut st, 0.01);
        assert_eq!(st.fps.frames, 2);
    }
}
