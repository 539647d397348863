use crate::color::HexColor;
use crate::constants::{GRADIENT_MAIN_ID, GRADIENT_SOFT_ID};

/// The two shared gradient fills a wave layer can reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fill {
    Main,
    Soft,
}

/// One `<stop>` of a vertical linear gradient.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientStop {
    pub offset_percent: u8,
    pub color: HexColor,
    pub opacity: f32,
}

impl Fill {
    pub const ALL: [Fill; 2] = [Fill::Main, Fill::Soft];

    pub fn id(self) -> &'static str {
        match self {
            Fill::Main => GRADIENT_MAIN_ID,
            Fill::Soft => GRADIENT_SOFT_ID,
        }
    }

    /// Paint reference for an SVG `fill` attribute.
    pub fn url(self) -> String {
        format!("url(#{})", self.id())
    }

    /// Stops top to bottom; the deepest stop takes the user's color.
    pub fn stops(self, deep: HexColor) -> Vec<GradientStop> {
        let stop = |offset_percent, color, opacity| GradientStop {
            offset_percent,
            color,
            opacity,
        };
        match self {
            Fill::Main => vec![
                stop(0, HexColor::rgb(0xdf, 0xf8, 0xff), 0.98),
                stop(55, HexColor::rgb(0x7e, 0xc8, 0xff), 0.92),
                stop(100, deep, 0.9),
            ],
            Fill::Soft => vec![
                stop(0, HexColor::rgb(0x7e, 0xc8, 0xff), 0.18),
                stop(100, deep, 0.06),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_reference_fixed_ids() {
        assert_eq!(Fill::Main.url(), "url(#waveGradientMain)");
        assert_eq!(Fill::Soft.url(), "url(#waveGradientSoft)");
    }

    #[test]
    fn deepest_stop_follows_chosen_color() {
        let red = HexColor::rgb(255, 0, 0);
        for fill in Fill::ALL {
            let stops = fill.stops(red);
            let last = stops.last().map(|s| (s.offset_percent, s.color));
            assert_eq!(last, Some((100, red)));
            assert!(stops.windows(2).all(|w| w[0].offset_percent < w[1].offset_percent));
        }
    }
}
