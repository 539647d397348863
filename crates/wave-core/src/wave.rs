//! Geometry of a single animated wave.
//!
//! The wave is sampled at `points + 1` evenly spaced columns. Each sample
//! oscillates with a phase derived from its column index and a running step
//! counter, and the samples are joined by a smoothed cubic chain that is then
//! closed down to the bottom of the box so it can be filled.

use crate::constants::{WAVE_MAX_FRAME_GAP_SEC, WAVE_PHASE_PER_SEC, WAVE_SEED_SCALE};
use crate::layers::WaveOptions;
use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug)]
pub struct WaveShape {
    options: WaveOptions,
    paused: bool,
    step: f64,
}

impl WaveShape {
    pub fn new(options: WaveOptions, paused: bool) -> Self {
        Self {
            options,
            paused,
            step: 0.0,
        }
    }

    pub fn options(&self) -> &WaveOptions {
        &self.options
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Swap in new options without resetting the animation phase.
    pub fn set_options(&mut self, options: WaveOptions) {
        self.options = options;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Advance the phase by wall-clock time. Gaps longer than a quarter
    /// second (hidden tab, debugger) count as a single short frame.
    pub fn advance(&mut self, dt_sec: f64) {
        if self.paused || !dt_sec.is_finite() || dt_sec <= 0.0 {
            return;
        }
        self.step += dt_sec.min(WAVE_MAX_FRAME_GAP_SEC) * WAVE_PHASE_PER_SEC;
    }

    pub fn sample_points(&self, width: f64) -> Vec<Point> {
        let o = &self.options;
        let n = o.points.max(1);
        (0..=n)
            .map(|i| {
                let phase_index = f64::from(i + i % n);
                let seed = (self.step + phase_index) * o.speed * WAVE_SEED_SCALE;
                let wave = (seed / WAVE_SEED_SCALE).sin();
                Point {
                    x: f64::from(i) / f64::from(n) * width,
                    y: wave * (wave * o.amplitude) + o.height,
                }
            })
            .collect()
    }

    /// SVG path data for a box of `width` x `box_height` pixels.
    pub fn path(&self, width: f64, box_height: f64) -> String {
        build_path(&self.sample_points(width), width, box_height)
    }
}

fn build_path(points: &[Point], width: f64, box_height: f64) -> String {
    let mut d = String::with_capacity(32 * (points.len() + 2));
    let (first, second) = match points {
        [a, b, ..] => (*a, *b),
        _ => return d,
    };
    _ = write!(d, "M {:.2} {:.2}", first.x, first.y);

    let cubic = |d: &mut String, ctrl: Point, to: Point| {
        _ = write!(
            d,
            " C {:.2} {:.2} {:.2} {:.2} {:.2} {:.2}",
            ctrl.x, ctrl.y, ctrl.x, ctrl.y, to.x, to.y
        );
    };

    let mut ctrl = Point {
        x: (second.x - first.x) / 2.0,
        y: (second.y - first.y) + first.y + (second.y - first.y),
    };
    cubic(&mut d, ctrl, second);
    for i in 1..points.len() - 1 {
        // reflect the previous control point through the current sample
        ctrl = Point {
            x: (points[i].x - ctrl.x) + points[i].x,
            y: (points[i].y - ctrl.y) + points[i].y,
        };
        cubic(&mut d, ctrl, points[i + 1]);
    }
    _ = write!(d, " L {width:.2} {box_height:.2} L 0 {box_height:.2} Z");
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(points: u32) -> WaveOptions {
        WaveOptions {
            height: 20.0,
            amplitude: 30.0,
            speed: 0.15,
            points,
        }
    }

    #[test]
    fn samples_span_the_full_width() {
        let shape = WaveShape::new(opts(4), false);
        let pts = shape.sample_points(800.0);
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0].x, 0.0);
        assert_eq!(pts[4].x, 800.0);
        assert!(pts.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn samples_stay_between_height_and_height_plus_amplitude() {
        let mut shape = WaveShape::new(opts(6), false);
        for _ in 0..50 {
            shape.advance(1.0 / 60.0);
            for p in shape.sample_points(400.0) {
                assert!(p.y >= 20.0 - 1e-9 && p.y <= 50.0 + 1e-9, "y={}", p.y);
            }
        }
    }

    #[test]
    fn zero_points_is_treated_as_one() {
        let shape = WaveShape::new(opts(0), false);
        assert_eq!(shape.sample_points(100.0).len(), 2);
    }

    #[test]
    fn long_gaps_are_capped() {
        let mut shape = WaveShape::new(opts(3), false);
        shape.advance(10.0);
        let capped = WAVE_MAX_FRAME_GAP_SEC * WAVE_PHASE_PER_SEC;
        assert!((shape.step() - capped).abs() < 1e-9);
        shape.advance(-1.0);
        shape.advance(f64::NAN);
        assert!((shape.step() - capped).abs() < 1e-9);
    }

    #[test]
    fn degenerate_point_list_yields_empty_path() {
        assert!(build_path(&[Point { x: 0.0, y: 0.0 }], 10.0, 10.0).is_empty());
    }
}
