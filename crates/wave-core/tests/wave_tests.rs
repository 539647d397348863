// Host-side tests for the wave path renderer.

use std::f64::consts::PI;
use wave_core::{DisplaySettings, LayerKind, WaveOptions, WaveShape};

fn main_options() -> WaveOptions {
    LayerKind::Main.options(&DisplaySettings::default())
}

#[test]
fn path_is_closed_and_has_one_curve_per_point() {
    for points in 1..=10u32 {
        let shape = WaveShape::new(WaveOptions { points, ..main_options() }, false);
        let d = shape.path(1200.0, 400.0);
        assert!(d.starts_with("M 0.00 "), "{d}");
        assert!(d.ends_with(" L 1200.00 400.00 L 0 400.00 Z"), "{d}");
        assert_eq!(d.matches(" C ").count(), points as usize);
    }
}

#[test]
fn paused_wave_does_not_move() {
    let mut shape = WaveShape::new(main_options(), true);
    let before = shape.path(600.0, 300.0);
    for _ in 0..30 {
        shape.advance(1.0 / 60.0);
    }
    assert_eq!(shape.step(), 0.0);
    assert_eq!(shape.path(600.0, 300.0), before);
}

#[test]
fn running_wave_moves_and_resumes_from_same_phase() {
    let mut shape = WaveShape::new(main_options(), false);
    let start = shape.path(600.0, 300.0);
    shape.advance(0.1);
    let moved = shape.path(600.0, 300.0);
    assert_ne!(start, moved);

    shape.set_paused(true);
    shape.advance(0.1);
    assert_eq!(shape.path(600.0, 300.0), moved);

    shape.set_paused(false);
    shape.advance(0.1);
    assert!((shape.step() - 0.2 * PI).abs() < 1e-9);
}

#[test]
fn changing_options_keeps_phase() {
    let mut shape = WaveShape::new(main_options(), false);
    shape.advance(0.2);
    let step = shape.step();
    shape.set_options(WaveOptions {
        amplitude: 100.0,
        ..main_options()
    });
    assert_eq!(shape.step(), step);
    assert_eq!(shape.options().amplitude, 100.0);
}

#[test]
fn zero_speed_wave_is_flat_at_height() {
    let mut shape = WaveShape::new(
        WaveOptions {
            speed: 0.0,
            ..main_options()
        },
        false,
    );
    shape.advance(1.0);
    assert!(shape.sample_points(500.0).iter().all(|p| p.y == 200.0));
}

#[test]
fn phase_advances_pi_per_second() {
    // one second of 60 fps frames at the default speed
    let mut shape = WaveShape::new(main_options(), false);
    for _ in 0..60 {
        shape.advance(1.0 / 60.0);
    }
    assert!((shape.step() - PI).abs() < 1e-9, "step={}", shape.step());

    // sin(step * speed) repeats every 2π / speed seconds: 10 s at speed 0.2
    let period_sec = 2.0 * PI / (PI * main_options().speed);
    assert!((period_sec - 10.0).abs() < 1e-9);
}
