use std::f32::consts::PI;

// Shared tuning constants for the web simulation and its renderers.
// `WebConfig::default()` is assembled from these.

// Layout
pub const RING_COUNT: usize = 12;
pub const SCATTER_COUNT: usize = 8;
pub const RING_SPREAD: f32 = 0.4; // ring radius as a fraction of min(width, height)
pub const HUB_RADIUS: f32 = 3.0;
pub const RING_POINT_RADIUS: f32 = 2.0;
pub const SCATTER_POINT_RADIUS: f32 = 1.5;
pub const RING_SPEED_SPAN: f32 = 0.5; // initial velocity components in ±span/2
pub const SCATTER_SPEED_SPAN: f32 = 0.3;

// Physics
pub const ATTRACTION_RADIUS: f32 = 100.0;
pub const ATTRACTION_STRENGTH: f32 = 0.001;
pub const MAX_SPEED: f32 = 1.0; // units per tick

// Edges
pub const HUB_EDGE_OPACITY: f32 = 0.4;
pub const LINK_DISTANCE: f32 = 200.0;
pub const LINK_OPACITY: f32 = 0.3;
pub const EDGE_LINE_WIDTH: f32 = 1.0;

// Wave curve
pub const WAVE_AMPLITUDE: f32 = 15.0;
pub const WAVE_TIME_FREQUENCY: f32 = 2.0;
pub const WAVE_SPATIAL_PHASE: f32 = 4.0 * PI; // phase advance from A to B
pub const WAVE_SEGMENT_LENGTH: f32 = 20.0;
pub const WAVE_MIN_SEGMENTS: usize = 10;

// Decorative arcs
pub const ARC_COUNT: usize = 5;
pub const ARC_BASE_RADIUS: f32 = 100.0;
pub const ARC_RADIUS_SWING: f32 = 30.0;
pub const ARC_SPIN: f32 = 0.5;
pub const ARC_PHASE_STEP: f32 = PI / 2.5;
pub const ARC_SWEEP: f32 = 1.5 * PI; // 270°
pub const ARC_ALPHA_BASE: f32 = 0.1;
pub const ARC_ALPHA_SWING: f32 = 0.1;
pub const ARC_LINE_WIDTH: f32 = 2.0;

// Palette
pub const EDGE_COLOR: [u8; 3] = [0x00, 0xb4, 0xd8];
pub const HUB_COLOR: [u8; 3] = [0x90, 0xe0, 0xef];
pub const SATELLITE_COLOR: [u8; 3] = [0x00, 0xb4, 0xd8];
pub const HUB_GLOW: f32 = 10.0;
pub const SATELLITE_GLOW: f32 = 5.0;
