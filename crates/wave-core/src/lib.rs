pub mod color;
pub mod constants;
pub mod controls;
pub mod fill;
pub mod layers;
pub mod settings;
pub mod wave;

pub use color::{ColorError, HexColor};
pub use controls::{pause_button_label, reverse_button_label, Slider};
pub use fill::{Fill, GradientStop};
pub use layers::{compose_layers, LayerKind, LayerSpec, LayerStack, LayerStyle, WaveOptions};
pub use settings::{Action, DisplaySettings};
pub use wave::{Point, WaveShape};
