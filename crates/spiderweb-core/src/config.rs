//! Tunable parameters for the web animation.
//!
//! Every field defaults to the matching value in `constants.rs`. Hosts that
//! want a denser or calmer web can override individual groups and run
//! [`WebConfig::validate`] (the [`crate::Animator`] constructor does this).

use crate::constants::*;
use crate::paint::Rgb;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("max speed must be finite and positive, got {0}")]
    MaxSpeed(f32),
    #[error("attraction radius must be finite and positive, got {0}")]
    AttractionRadius(f32),
    #[error("link distance must be finite and positive, got {0}")]
    LinkDistance(f32),
    #[error("wave segment length must be finite and positive, got {0}")]
    SegmentLength(f32),
    #[error("wave curves need at least one segment")]
    NoSegments,
}

/// How the point set is seeded on every rebuild.
#[derive(Clone, Debug)]
pub struct LayoutParams {
    pub ring_count: usize,
    pub scatter_count: usize,
    pub ring_spread: f32,
    pub hub_radius: f32,
    pub ring_point_radius: f32,
    pub scatter_point_radius: f32,
    pub ring_speed_span: f32,
    pub scatter_speed_span: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            ring_count: RING_COUNT,
            scatter_count: SCATTER_COUNT,
            ring_spread: RING_SPREAD,
            hub_radius: HUB_RADIUS,
            ring_point_radius: RING_POINT_RADIUS,
            scatter_point_radius: SCATTER_POINT_RADIUS,
            ring_speed_span: RING_SPEED_SPAN,
            scatter_speed_span: SCATTER_SPEED_SPAN,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PhysicsParams {
    pub attraction_radius: f32,
    pub attraction_strength: f32,
    pub max_speed: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            attraction_radius: ATTRACTION_RADIUS,
            attraction_strength: ATTRACTION_STRENGTH,
            max_speed: MAX_SPEED,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EdgeParams {
    pub hub_opacity: f32,
    pub link_distance: f32,
    pub link_opacity: f32,
    pub line_width: f32,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            hub_opacity: HUB_EDGE_OPACITY,
            link_distance: LINK_DISTANCE,
            link_opacity: LINK_OPACITY,
            line_width: EDGE_LINE_WIDTH,
        }
    }
}

/// Shape of the perpendicular ripple applied to every edge.
#[derive(Clone, Debug)]
pub struct WaveParams {
    pub amplitude: f32,
    pub time_frequency: f32,
    pub spatial_phase: f32,
    pub segment_length: f32,
    pub min_segments: usize,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            amplitude: WAVE_AMPLITUDE,
            time_frequency: WAVE_TIME_FREQUENCY,
            spatial_phase: WAVE_SPATIAL_PHASE,
            segment_length: WAVE_SEGMENT_LENGTH,
            min_segments: WAVE_MIN_SEGMENTS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ArcParams {
    pub count: usize,
    pub base_radius: f32,
    pub radius_swing: f32,
    pub spin: f32,
    pub phase_step: f32,
    pub sweep: f32,
    pub alpha_base: f32,
    pub alpha_swing: f32,
    pub line_width: f32,
}

impl Default for ArcParams {
    fn default() -> Self {
        Self {
            count: ARC_COUNT,
            base_radius: ARC_BASE_RADIUS,
            radius_swing: ARC_RADIUS_SWING,
            spin: ARC_SPIN,
            phase_step: ARC_PHASE_STEP,
            sweep: ARC_SWEEP,
            alpha_base: ARC_ALPHA_BASE,
            alpha_swing: ARC_ALPHA_SWING,
            line_width: ARC_LINE_WIDTH,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Palette {
    pub edge: Rgb,
    pub hub: Rgb,
    pub satellite: Rgb,
    pub hub_glow: f32,
    pub satellite_glow: f32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            edge: Rgb::from(EDGE_COLOR),
            hub: Rgb::from(HUB_COLOR),
            satellite: Rgb::from(SATELLITE_COLOR),
            hub_glow: HUB_GLOW,
            satellite_glow: SATELLITE_GLOW,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct WebConfig {
    pub layout: LayoutParams,
    pub physics: PhysicsParams,
    pub edges: EdgeParams,
    pub wave: WaveParams,
    pub arcs: ArcParams,
    pub palette: Palette,
}

impl WebConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.physics.max_speed) {
            return Err(ConfigError::MaxSpeed(self.physics.max_speed));
        }
        if !positive(self.physics.attraction_radius) {
            return Err(ConfigError::AttractionRadius(self.physics.attraction_radius));
        }
        if !positive(self.edges.link_distance) {
            return Err(ConfigError::LinkDistance(self.edges.link_distance));
        }
        if !positive(self.wave.segment_length) {
            return Err(ConfigError::SegmentLength(self.wave.segment_length));
        }
        if self.wave.min_segments == 0 {
            return Err(ConfigError::NoSegments);
        }
        Ok(())
    }
}
