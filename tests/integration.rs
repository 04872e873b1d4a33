// Integration tests (native) for the `bouncing-square` crate.
// These tests avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host.

use bouncing_square::game::input::{self, Point, PointerEvent};
use bouncing_square::game::sim;
use bouncing_square::{Dir, GameState, Level, PcgSource, RandomSource};

fn inside(st: &GameState) -> Point {
    Point {
        x: st.square.x + st.square.width / 2.0,
        y: st.square.y + st.square.height / 2.0,
    }
}

// Level and square layout on the default 800x600 canvas.
#[test]
fn default_canvas_layout() {
    let st = GameState::for_surface(800.0, 600.0);
    assert_eq!(
        st.level,
        Level {
            x: 1.0,
            y: 65.0,
            width: 798.0,
            height: 534.0
        }
    );
    assert_eq!((st.square.x, st.square.y), (350.0, 282.0));
}

// A short session: bounce around, click a few times, keep everything in range.
#[test]
fn play_session_keeps_invariants() {
    let mut st = GameState::for_surface(800.0, 600.0);
    let mut rng = PcgSource::seeded(2024);
    let mut last_score = 0;
    let mut last_speed = st.square.speed;
    for frame in 0..600 {
        sim::update(&mut st, 1.0 / 60.0);
        if frame % 50 == 0 {
            let p = inside(&st);
            assert!(input::handle_pointer(&mut st, PointerEvent::Down(p), &mut rng));
        } else if frame % 7 == 0 {
            // miss: header strip is never part of the square
            let p = Point { x: 5.0, y: 5.0 };
            assert!(!input::handle_pointer(&mut st, PointerEvent::Down(p), &mut rng));
        }
        assert!(st.score >= last_score);
        assert!(st.square.speed >= last_speed);
        last_score = st.score;
        last_speed = st.square.speed;

        let sq = st.square;
        assert!(sq.x >= st.level.x && sq.x + sq.width <= st.level.right());
        assert!(sq.y >= st.level.y && sq.y + sq.height <= st.level.bottom());
    }
    assert_eq!(st.score, 12);
    let expected = 200.0 * 1.1f64.powi(12);
    assert!((st.square.speed - expected).abs() < 1e-6);
}

// Relocation after a hit always lands on an integer pixel inside the level.
#[test]
fn hit_relocation_is_integer_and_in_bounds() {
    let mut rng = PcgSource::seeded(5);
    for _ in 0..200 {
        let mut st = GameState::for_surface(800.0, 600.0);
        let p = inside(&st);
        assert!(input::on_pointer_down(&mut st, p, &mut rng));
        let (min_x, max_x, min_y, max_y) =
            input::placement_bounds(&st.level, st.square.width, st.square.height);
        assert!(st.square.x >= min_x && st.square.x <= max_x);
        assert!(st.square.y >= min_y && st.square.y <= max_y);
        assert_eq!(st.square.x, st.square.x.floor());
        assert_eq!(st.square.y, st.square.y.floor());
        assert!(matches!(st.square.xdir, Dir::Neg | Dir::Pos));
    }
}

// Both directions show up over many hits.
#[test]
fn hit_directions_cover_both_signs() {
    let mut rng = PcgSource::seeded(11);
    let mut seen_neg = false;
    let mut seen_pos = false;
    for _ in 0..64 {
        let mut st = GameState::for_surface(800.0, 600.0);
        let p = inside(&st);
        input::on_pointer_down(&mut st, p, &mut rng);
        for d in [st.square.xdir, st.square.ydir] {
            match d {
                Dir::Neg => seen_neg = true,
                Dir::Pos => seen_pos = true,
            }
        }
    }
    assert!(seen_neg && seen_pos);
}

// The PCG source honours its bound for arbitrary values.
#[test]
fn pcg_next_int_bounds() {
    let mut rng = PcgSource::seeded(0);
    for bound in [1, 2, 3, 10, 698] {
        for _ in 0..50 {
            assert!(rng.next_int(bound) < bound);
        }
    }
}
