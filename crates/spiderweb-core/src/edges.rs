//! Edge selection and wave-curve geometry.
//!
//! Nothing here is stored between frames: edges are recomputed from the
//! current positions every tick with a plain O(n²) pair scan.

use crate::config::{ArcParams, EdgeParams, WaveParams, WebConfig};
use crate::paint::{Painter, Stroke};
use crate::points::{Point, Surface};
use glam::Vec2;
use smallvec::SmallVec;

/// Polyline for one rendered edge. Short edges fit inline.
pub type Curve = SmallVec<[Vec2; 32]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    Hub,
    Proximity,
}

/// A pair of point indices to connect, with its stroke opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub opacity: f32,
    pub kind: EdgeKind,
}

/// One spoke from the hub to every satellite, at a fixed opacity.
pub fn hub_edges(points: &[Point], params: &EdgeParams) -> Vec<Edge> {
    let Some(hub) = points.iter().position(Point::is_hub) else {
        return Vec::new();
    };
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.is_hub())
        .map(|(i, _)| Edge {
            from: hub,
            to: i,
            opacity: params.hub_opacity,
            kind: EdgeKind::Hub,
        })
        .collect()
}

/// Opacity for a satellite pair `distance` apart, or `None` when the pair is
/// at or beyond the link distance and must not be drawn at all.
#[inline]
pub fn link_opacity(distance: f32, params: &EdgeParams) -> Option<f32> {
    (distance < params.link_distance)
        .then(|| (1.0 - distance / params.link_distance).max(0.0) * params.link_opacity)
}

/// Every unordered satellite pair closer than the link distance, each once.
pub fn proximity_edges(points: &[Point], params: &EdgeParams) -> Vec<Edge> {
    let mut out = Vec::new();
    for (i, a) in points.iter().enumerate() {
        if a.is_hub() {
            continue;
        }
        for (j, b) in points.iter().enumerate().skip(i + 1) {
            if b.is_hub() {
                continue;
            }
            if let Some(opacity) = link_opacity(a.position.distance(b.position), params) {
                out.push(Edge {
                    from: i,
                    to: j,
                    opacity,
                    kind: EdgeKind::Proximity,
                });
            }
        }
    }
    out
}

/// Subdivide A→B and push interior samples sideways by
/// `sin(time * f + t * phase) * amplitude * (1 - t)`.
///
/// The first sample is exactly `a` and the last exactly `b`. Coincident
/// endpoints have no perpendicular, so the curve collapses onto the point.
pub fn wave_curve(a: Vec2, b: Vec2, time: f32, wave: &WaveParams) -> Curve {
    let delta = b - a;
    let length = delta.length();
    let segments = ((length / wave.segment_length).floor() as usize).max(wave.min_segments);
    let normal = delta.perp().normalize_or_zero();

    let mut curve = Curve::with_capacity(segments + 1);
    curve.push(a);
    for i in 1..segments {
        let t = i as f32 / segments as f32;
        let offset = (time * wave.time_frequency + t * wave.spatial_phase).sin()
            * wave.amplitude
            * (1.0 - t);
        curve.push(a + delta * t + normal * offset);
    }
    curve.push(b);
    curve
}

/// Background ornament: an open arc whose radius, angle and alpha breathe
/// with time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecorativeArc {
    pub center: Vec2,
    pub radius: f32,
    pub start: f32,
    pub end: f32,
    pub alpha: f32,
}

pub fn decorative_arcs(surface: Surface, time: f32, params: &ArcParams) -> Vec<DecorativeArc> {
    if params.count == 0 {
        return Vec::new();
    }
    let slot = surface.width / params.count as f32;
    (0..params.count)
        .map(|i| {
            let phase = time + i as f32;
            let start = time * params.spin + i as f32 * params.phase_step;
            DecorativeArc {
                center: Vec2::new(slot * i as f32 + slot * 0.5, surface.height * 0.5),
                radius: params.base_radius + phase.sin() * params.radius_swing,
                start,
                end: start + params.sweep,
                alpha: params.alpha_base + phase.sin() * params.alpha_swing,
            }
        })
        .collect()
}

/// Draw hub spokes, proximity links and the decorative arcs.
pub fn render<P: Painter + ?Sized>(
    points: &[Point],
    surface: Surface,
    time: f32,
    config: &WebConfig,
    painter: &mut P,
) {
    let stroke = |opacity: f32| Stroke {
        color: config.palette.edge,
        alpha: opacity,
        width: config.edges.line_width,
    };

    let hub = hub_edges(points, &config.edges);
    let links = proximity_edges(points, &config.edges);
    for edge in hub.iter().chain(links.iter()) {
        let curve = wave_curve(
            points[edge.from].position,
            points[edge.to].position,
            time,
            &config.wave,
        );
        painter.stroke_polyline(&curve, stroke(edge.opacity));
    }

    for arc in decorative_arcs(surface, time, &config.arcs) {
        painter.stroke_arc(
            arc.center,
            arc.radius,
            arc.start,
            arc.end,
            Stroke {
                color: config.palette.edge,
                alpha: arc.alpha,
                width: config.arcs.line_width,
            },
        );
    }
}
