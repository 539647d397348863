//! User-adjustable display settings and the actions that replace them.
//!
//! `DisplaySettings` is a plain value. Every control in the header maps to
//! exactly one [`Action`]; [`DisplaySettings::reduce`] returns the next value
//! and the caller re-renders from it. Numeric inputs are clamped to the same
//! ranges the slider widgets enforce so programmatic callers cannot push the
//! settings outside them.

use crate::color::HexColor;
use crate::constants::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    pub amplitude: f64,
    pub speed: f64,
    pub points: u32,
    pub height: f64,
    pub color: HexColor,
    pub paused: bool,
    pub reversed: bool,
    pub show_second_layer: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            amplitude: DEFAULT_AMPLITUDE,
            speed: DEFAULT_SPEED,
            points: DEFAULT_POINTS,
            height: DEFAULT_HEIGHT,
            color: HexColor::default(),
            paused: false,
            reversed: false,
            show_second_layer: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    SetAmplitude(f64),
    SetSpeed(f64),
    SetPoints(u32),
    SetHeight(f64),
    SetColor(HexColor),
    TogglePaused,
    ToggleReversed,
    SetShowSecondLayer(bool),
}

impl DisplaySettings {
    /// Apply one action, replacing exactly the field it names.
    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::SetAmplitude(v) => Self {
                amplitude: clamp_finite(v, AMPLITUDE_RANGE, self.amplitude),
                ..self
            },
            Action::SetSpeed(v) => Self {
                speed: snap_speed(clamp_finite(v, SPEED_RANGE, self.speed)),
                ..self
            },
            Action::SetPoints(v) => Self {
                points: v.clamp(POINTS_RANGE.0, POINTS_RANGE.1),
                ..self
            },
            Action::SetHeight(v) => Self {
                height: clamp_finite(v, HEIGHT_RANGE, self.height),
                ..self
            },
            Action::SetColor(color) => Self { color, ..self },
            Action::TogglePaused => Self {
                paused: !self.paused,
                ..self
            },
            Action::ToggleReversed => Self {
                reversed: !self.reversed,
                ..self
            },
            Action::SetShowSecondLayer(show) => Self {
                show_second_layer: show,
                ..self
            },
        }
    }
}

fn clamp_finite(v: f64, (lo, hi): (f64, f64), previous: f64) -> f64 {
    if v.is_finite() {
        v.clamp(lo, hi)
    } else {
        log::warn!("[settings] ignoring non-finite input {v}");
        previous
    }
}

// Slider step is 0.01; round so 0.1 + 0.2 style drift never leaks into layers.
fn snap_speed(v: f64) -> f64 {
    let steps_per_unit = (1.0 / SPEED_STEP).round();
    (v * steps_per_unit).round() / steps_per_unit
}
