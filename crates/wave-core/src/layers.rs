//! Derives the rendered wave layers from the current settings.
//!
//! The main layer uses the settings as-is. The soft background layer and the
//! optional depth layer scale amplitude, speed and point count with fixed
//! factors and floors so the stack never collapses into a flat line.

use crate::constants::*;
use crate::fill::Fill;
use crate::settings::DisplaySettings;
use smallvec::SmallVec;

/// Options understood by the wave renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveOptions {
    pub height: f64,
    pub amplitude: f64,
    pub speed: f64,
    pub points: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Soft,
    Main,
    Depth,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerStyle {
    pub z_index: i32,
    pub opacity: Option<f64>,
    pub flipped: bool,
}

impl LayerStyle {
    /// Inline CSS for the layer's host element.
    pub fn css(&self) -> String {
        let mut css = format!(
            "position:absolute;bottom:0;left:0;width:{LAYER_WIDTH_PERCENT}%;height:{WAVE_BOX_HEIGHT_PX}px;transform:{};z-index:{};",
            if self.flipped { "scaleX(-1)" } else { "none" },
            self.z_index
        );
        if let Some(o) = self.opacity {
            css.push_str(&format!("opacity:{o};"));
        }
        css
    }
}

/// Everything a wave layer adapter needs to render one wave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerSpec {
    pub kind: LayerKind,
    pub fill: Fill,
    pub options: WaveOptions,
    pub paused: bool,
    pub style: LayerStyle,
}

pub type LayerStack = SmallVec<[LayerSpec; 3]>;

impl LayerKind {
    pub fn fill(self) -> Fill {
        match self {
            LayerKind::Main => Fill::Main,
            LayerKind::Soft | LayerKind::Depth => Fill::Soft,
        }
    }

    fn z_index(self) -> i32 {
        match self {
            LayerKind::Soft => SOFT_Z_INDEX,
            LayerKind::Main => MAIN_Z_INDEX,
            LayerKind::Depth => DEPTH_Z_INDEX,
        }
    }

    fn opacity(self) -> Option<f64> {
        match self {
            LayerKind::Main => Some(MAIN_OPACITY),
            _ => None,
        }
    }

    pub fn options(self, s: &DisplaySettings) -> WaveOptions {
        let base = WaveOptions {
            height: s.height,
            amplitude: s.amplitude,
            speed: s.speed,
            points: s.points,
        };
        match self {
            LayerKind::Main => base,
            LayerKind::Soft => WaveOptions {
                amplitude: (s.amplitude * SOFT_AMPLITUDE_FACTOR).max(SOFT_AMPLITUDE_FLOOR),
                speed: (s.speed * SOFT_SPEED_FACTOR).max(SOFT_SPEED_FLOOR),
                points: offset_points(s.points, SOFT_POINTS_OFFSET),
                ..base
            },
            LayerKind::Depth => WaveOptions {
                amplitude: (s.amplitude * DEPTH_AMPLITUDE_FACTOR).max(DEPTH_AMPLITUDE_FLOOR),
                speed: (s.speed * DEPTH_SPEED_FACTOR).max(DEPTH_SPEED_FLOOR),
                points: offset_points(s.points, DEPTH_POINTS_OFFSET),
                ..base
            },
        }
    }

    pub fn spec(self, s: &DisplaySettings) -> LayerSpec {
        LayerSpec {
            kind: self,
            fill: self.fill(),
            options: self.options(s),
            paused: s.paused,
            style: LayerStyle {
                z_index: self.z_index(),
                opacity: self.opacity(),
                flipped: s.reversed,
            },
        }
    }
}

fn offset_points(points: u32, offset: i64) -> u32 {
    let shifted = (i64::from(points) + offset).max(i64::from(DERIVED_POINTS_FLOOR));
    u32::try_from(shifted).unwrap_or(u32::MAX)
}

/// Layers in document order: soft, main, then depth when enabled.
pub fn compose_layers(s: &DisplaySettings) -> LayerStack {
    [LayerKind::Soft, LayerKind::Main, LayerKind::Depth]
        .into_iter()
        .filter(|kind| *kind != LayerKind::Depth || s.show_second_layer)
        .map(|kind| kind.spec(s))
        .collect()
}
