//! Mapping between header controls and settings actions.

use crate::constants::*;
use crate::settings::{Action, DisplaySettings};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slider {
    Amplitude,
    Speed,
    Points,
    Height,
}

impl Slider {
    pub const ALL: [Slider; 4] = [
        Slider::Amplitude,
        Slider::Speed,
        Slider::Points,
        Slider::Height,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Slider::Amplitude => "Amplitude",
            Slider::Speed => "Speed",
            Slider::Points => "Points",
            Slider::Height => "Height",
        }
    }

    /// `(min, max, step)` as the range input expects them.
    pub fn bounds(self) -> (f64, f64, f64) {
        match self {
            Slider::Amplitude => (AMPLITUDE_RANGE.0, AMPLITUDE_RANGE.1, 1.0),
            Slider::Speed => (SPEED_RANGE.0, SPEED_RANGE.1, SPEED_STEP),
            Slider::Points => (f64::from(POINTS_RANGE.0), f64::from(POINTS_RANGE.1), 1.0),
            Slider::Height => (HEIGHT_RANGE.0, HEIGHT_RANGE.1, 1.0),
        }
    }

    pub fn value(self, s: &DisplaySettings) -> f64 {
        match self {
            Slider::Amplitude => s.amplitude,
            Slider::Speed => s.speed,
            Slider::Points => f64::from(s.points),
            Slider::Height => s.height,
        }
    }

    /// Turn a raw `valueAsNumber` into an action. Empty or garbled input
    /// (NaN) produces no action.
    pub fn action(self, raw: f64) -> Option<Action> {
        if !raw.is_finite() {
            return None;
        }
        Some(match self {
            Slider::Amplitude => Action::SetAmplitude(raw),
            Slider::Speed => Action::SetSpeed(raw),
            // negative values saturate to 0 and the reducer lifts them to 1
            Slider::Points => Action::SetPoints(raw.round() as u32),
            Slider::Height => Action::SetHeight(raw),
        })
    }
}

pub fn pause_button_label(paused: bool) -> &'static str {
    if paused {
        "Play"
    } else {
        "Pause"
    }
}

pub fn reverse_button_label(reversed: bool) -> &'static str {
    if reversed {
        "Normal"
    } else {
        "Reverse"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_bounds_match_settings_ranges() {
        assert_eq!(Slider::Amplitude.bounds(), (0.0, 120.0, 1.0));
        assert_eq!(Slider::Speed.bounds(), (0.0, 1.0, 0.01));
        assert_eq!(Slider::Points.bounds(), (1.0, 10.0, 1.0));
        assert_eq!(Slider::Height.bounds(), (40.0, 400.0, 1.0));
    }

    #[test]
    fn slider_round_trips_through_reducer() {
        let s = DisplaySettings::default();
        for slider in Slider::ALL {
            let (min, max, _) = slider.bounds();
            for raw in [min, max] {
                let next = s.reduce(slider.action(raw).expect("finite input"));
                assert_eq!(slider.value(&next), raw, "{:?}", slider);
            }
        }
    }

    #[test]
    fn garbled_input_is_dropped() {
        assert_eq!(Slider::Height.action(f64::NAN), None);
        assert_eq!(Slider::Points.action(4.4), Some(Action::SetPoints(4)));
    }

    #[test]
    fn button_labels_describe_next_state() {
        assert_eq!(pause_button_label(false), "Pause");
        assert_eq!(pause_button_label(true), "Play");
        assert_eq!(reverse_button_label(false), "Reverse");
        assert_eq!(reverse_button_label(true), "Normal");
    }
}
