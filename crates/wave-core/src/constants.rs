// Shared tuning constants for settings, layers and the wave renderer.

// Defaults applied at mount
pub const DEFAULT_AMPLITUDE: f64 = 40.0;
pub const DEFAULT_SPEED: f64 = 0.2;
pub const DEFAULT_POINTS: u32 = 3;
pub const DEFAULT_HEIGHT: f64 = 200.0;
pub const DEFAULT_COLOR: &str = "#1277b0";

// Control ranges (inclusive)
pub const AMPLITUDE_RANGE: (f64, f64) = (0.0, 120.0);
pub const SPEED_RANGE: (f64, f64) = (0.0, 1.0);
pub const SPEED_STEP: f64 = 0.01;
pub const POINTS_RANGE: (u32, u32) = (1, 10);
pub const HEIGHT_RANGE: (f64, f64) = (40.0, 400.0);

// Soft background layer: scaled down, slower, busier
pub const SOFT_AMPLITUDE_FACTOR: f64 = 0.45;
pub const SOFT_AMPLITUDE_FLOOR: f64 = 8.0;
pub const SOFT_SPEED_FACTOR: f64 = 0.6;
pub const SOFT_SPEED_FLOOR: f64 = 0.02;
pub const SOFT_POINTS_OFFSET: i64 = 2;

// Depth layer: flatter, faster, fewer points
pub const DEPTH_AMPLITUDE_FACTOR: f64 = 0.3;
pub const DEPTH_AMPLITUDE_FLOOR: f64 = 6.0;
pub const DEPTH_SPEED_FACTOR: f64 = 1.4;
pub const DEPTH_SPEED_FLOOR: f64 = 0.01;
pub const DEPTH_POINTS_OFFSET: i64 = -1;

// Every derived layer keeps at least this many points
pub const DERIVED_POINTS_FLOOR: u32 = 2;

// Layer stacking
pub const SOFT_Z_INDEX: i32 = 2;
pub const DEPTH_Z_INDEX: i32 = 3;
pub const MAIN_Z_INDEX: i32 = 5;
pub const MAIN_OPACITY: f64 = 0.96;
pub const LAYER_WIDTH_PERCENT: u32 = 200;

// Gradient fills
pub const GRADIENT_MAIN_ID: &str = "waveGradientMain";
pub const GRADIENT_SOFT_ID: &str = "waveGradientSoft";

// Wave renderer
pub const WAVE_SEED_SCALE: f64 = 100.0; // seed is scaled up then back down inside sin()
pub const WAVE_PHASE_PER_SEC: f64 = std::f64::consts::PI; // step units per second of wall clock
pub const WAVE_MAX_FRAME_GAP_SEC: f64 = 0.25; // a backgrounded tab must not jump the wave

// Each wave layer draws into a box this tall, anchored to the bottom of the
// hero. Must exceed the largest height plus the largest amplitude.
pub const WAVE_BOX_HEIGHT_PX: u32 = 540;
