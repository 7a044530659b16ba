use artloom::params::Params;
use artloom::patterns::PatternKind;
use artloom::scene::Scene;
use artloom::symmetry::Kaleidoscope;

fn test_params(pattern: &str, seed: &str) -> Params {
    Params {
        pattern: pattern.to_string(),
        seed: seed.to_string(),
        symmetry: 6,
        particles: 800,
        speed: 1.6,
        line_width: 1.2,
        palette: "neon".to_string(),
        animate: false,
    }
}

#[test]
fn kaleidoscope_emits_two_n_copies() {
    for n in [1u32, 2, 6, 9] {
        let sym = Kaleidoscope::new(n, 100.0, 80.0);
        let mut count = 0;
        sym.for_each_point(10.0, 20.0, |_, _| count += 1);
        assert_eq!(count, 2 * n, "symmetry {n} should fan out into {}", 2 * n);

        let mut seg_count = 0;
        sym.for_each_segment(10.0, 20.0, 30.0, 40.0, |_, _, _, _| seg_count += 1);
        assert_eq!(seg_count, 2 * n);
    }
}

#[test]
fn symmetry_one_is_identity_plus_mirror() {
    let sym = Kaleidoscope::new(1, 100.0, 80.0);
    let mut pts = Vec::new();
    sym.for_each_point(10.0, 20.0, |x, y| pts.push((x, y)));
    assert_eq!(pts.len(), 2);
    assert!((pts[0].0 - 10.0).abs() < 1e-4 && (pts[0].1 - 20.0).abs() < 1e-4);
    // Mirror through the center (50, 40).
    assert!((pts[1].0 - 90.0).abs() < 1e-4 && (pts[1].1 - 60.0).abs() < 1e-4);
}

#[test]
fn symmetry_zero_is_clamped_to_one() {
    let sym = Kaleidoscope::new(0, 100.0, 80.0);
    let mut count = 0;
    sym.for_each_point(10.0, 20.0, |_, _| count += 1);
    assert_eq!(count, 2);
}

#[test]
fn identical_params_render_identical_pixels() {
    for kind in PatternKind::all() {
        let mut a = Scene::new(96, 64, test_params(kind.key(), "12345"));
        let mut b = Scene::new(96, 64, test_params(kind.key(), "12345"));
        for frame in 0..3 {
            a.render_frame(frame as f32);
            b.render_frame(frame as f32);
        }
        assert_eq!(
            a.canvas().pixels(),
            b.canvas().pixels(),
            "pattern {} diverged across identical sessions",
            kind.key()
        );
    }
}

#[test]
fn unknown_pattern_key_draws_orbits() {
    let mut known = Scene::new(96, 64, test_params("orbits", "777"));
    let mut bogus = Scene::new(96, 64, test_params("bogus", "777"));
    known.render_frame(0.0);
    bogus.render_frame(0.0);
    assert_eq!(known.canvas().pixels(), bogus.canvas().pixels());
}

#[test]
fn every_pattern_puts_ink_on_the_canvas() {
    for kind in PatternKind::all() {
        let mut scene = Scene::new(96, 64, test_params(kind.key(), "ink"));
        scene.render_frame(1.0);
        let lit = scene
            .canvas()
            .pixels()
            .chunks_exact(4)
            .any(|px| px[0] > 0 || px[1] > 0 || px[2] > 0);
        assert!(lit, "pattern {} left the canvas black", kind.key());
    }
}

#[test]
fn frames_accumulate_without_clearing() {
    let mut scene = Scene::new(96, 64, test_params("orbits", "trails"));
    scene.render_frame(0.0);
    let lit_after_one: usize = scene
        .canvas()
        .pixels()
        .chunks_exact(4)
        .filter(|px| px[0] > 0 || px[1] > 0 || px[2] > 0)
        .count();
    for frame in 1..30 {
        scene.render_frame(frame as f32);
    }
    let lit_after_many: usize = scene
        .canvas()
        .pixels()
        .chunks_exact(4)
        .filter(|px| px[0] > 0 || px[1] > 0 || px[2] > 0)
        .count();
    assert!(
        lit_after_many >= lit_after_one,
        "trails should accumulate, not reset ({lit_after_one} -> {lit_after_many})"
    );
}

#[test]
fn flow_field_particles_stay_in_bounds() {
    let mut params = test_params("flowfield", "wrap-check");
    params.particles = 200;
    params.speed = 5.0;
    let mut scene = Scene::new(64, 48, params);
    for frame in 0..40 {
        scene.render_frame(frame as f32);
    }
    for &(x, y) in scene.flowfield().positions() {
        assert!((0.0..64.0).contains(&x), "x = {x} escaped [0, 64)");
        assert!((0.0..48.0).contains(&y), "y = {y} escaped [0, 48)");
    }
}

#[test]
fn boundary_params_do_not_panic() {
    for kind in PatternKind::all() {
        let mut params = test_params(kind.key(), "edge");
        params.symmetry = 1;
        params.particles = 0;
        params.line_width = 0.1;
        let mut scene = Scene::new(8, 8, params);
        scene.render_frame(0.0);
        scene.render_frame(100.0);
    }
}

#[test]
fn tiny_canvas_does_not_panic() {
    for kind in PatternKind::all() {
        let mut scene = Scene::new(1, 1, test_params(kind.key(), "tiny"));
        scene.render_frame(0.0);
        assert_eq!(scene.canvas().width(), 1);
        assert_eq!(scene.canvas().height(), 1);
    }
}

#[test]
fn stop_makes_tick_a_no_op() {
    use std::time::{Duration, Instant};

    let mut scene = Scene::new(64, 48, test_params("orbits", "halt"));
    let t0 = Instant::now();
    scene.start();
    assert!(scene.running());
    scene.tick(t0);
    scene.stop();
    assert!(!scene.running());

    let before = scene.canvas().pixels().to_vec();
    scene.tick(t0 + Duration::from_millis(500));
    assert_eq!(scene.canvas().pixels(), &before[..]);
}

#[test]
fn start_replaces_a_running_loop() {
    let mut scene = Scene::new(32, 32, test_params("orbits", "restart"));
    scene.start();
    scene.start();
    assert!(scene.running());
    scene.stop();
    assert!(!scene.running());
}

#[test]
fn render_once_stops_the_loop() {
    let mut scene = Scene::new(32, 32, test_params("orbits", "once"));
    scene.start();
    scene.render_once();
    assert!(!scene.running());
}

#[test]
fn resize_clears_and_reshapes_the_surface() {
    let mut scene = Scene::new(64, 48, test_params("tiles", "resize"));
    scene.render_frame(0.0);
    scene.resize(40, 30);
    assert_eq!(scene.canvas().width(), 40);
    assert_eq!(scene.canvas().height(), 30);
    let black = scene
        .canvas()
        .pixels()
        .chunks_exact(4)
        .all(|px| px[0] == 0 && px[1] == 0 && px[2] == 0 && px[3] == 255);
    assert!(black, "resize should clear to opaque black");

    // Rendering after the resize must pick up the new dimensions.
    scene.render_frame(1.0);
    assert_eq!(scene.canvas().pixels().len(), 40 * 30 * 4);
}

#[test]
fn pattern_kind_cycles_through_all_keys() {
    let mut kind = PatternKind::Orbits;
    let mut seen = Vec::new();
    for _ in 0..PatternKind::all().len() {
        seen.push(kind.key());
        kind = kind.next(true);
    }
    assert_eq!(kind, PatternKind::Orbits);
    assert_eq!(seen, ["orbits", "flowfield", "tiles"]);
    assert_eq!(PatternKind::Tiles.next(true), PatternKind::Orbits);
    assert_eq!(PatternKind::Orbits.next(false), PatternKind::Tiles);
    assert_eq!(PatternKind::from_key("nope"), None);
}
