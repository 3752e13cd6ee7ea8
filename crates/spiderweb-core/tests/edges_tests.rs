// Host-side tests for edge selection, wave curves and the edge renderer.

use glam::Vec2;
use spiderweb_core::edges::{
    decorative_arcs, hub_edges, link_opacity, proximity_edges, render, wave_curve, EdgeKind,
};
use spiderweb_core::{
    ArcParams, DrawCommand, EdgeParams, Point, PointRole, Recorder, Surface, WaveParams,
    WebConfig,
};
use std::collections::HashSet;
use std::f32::consts::PI;

fn point(x: f32, y: f32, role: PointRole) -> Point {
    Point {
        position: Vec2::new(x, y),
        velocity: Vec2::ZERO,
        radius: 2.0,
        role,
    }
}

fn sample_points() -> Vec<Point> {
    vec![
        point(300.0, 300.0, PointRole::Hub),
        point(0.0, 0.0, PointRole::Satellite),
        point(150.0, 0.0, PointRole::Satellite),   // 150 from #1
        point(0.0, 199.9, PointRole::Satellite),   // 199.9 from #1
        point(0.0, -200.0, PointRole::Satellite),  // exactly 200 from #1
        point(600.0, 600.0, PointRole::Satellite), // far from everything
    ]
}

#[test]
fn hub_edges_reach_every_satellite_once() {
    let points = sample_points();
    let params = EdgeParams::default();
    let edges = hub_edges(&points, &params);
    assert_eq!(edges.len(), points.len() - 1);
    for e in &edges {
        assert_eq!(e.from, 0);
        assert_ne!(e.to, 0);
        assert_eq!(e.kind, EdgeKind::Hub);
        assert_eq!(e.opacity, 0.4);
    }
}

#[test]
fn hub_edges_follow_role_not_index() {
    let mut points = sample_points();
    points.swap(0, 3);
    let edges = hub_edges(&points, &EdgeParams::default());
    assert!(edges.iter().all(|e| e.from == 3 && e.to != 3));
}

#[test]
fn proximity_edges_use_a_hard_cutoff() {
    let points = sample_points();
    let params = EdgeParams::default();
    let edges = proximity_edges(&points, &params);

    let has = |a: usize, b: usize| edges.iter().any(|e| e.from == a && e.to == b);
    assert!(has(1, 2), "150 apart should link");
    assert!(has(1, 3), "199.9 apart should link");
    assert!(!has(1, 4), "exactly 200 apart must not link");
    assert!(edges.iter().all(|e| e.from != 5 && e.to != 5));
}

#[test]
fn proximity_opacity_matches_distance() {
    let points = sample_points();
    let params = EdgeParams::default();
    for e in proximity_edges(&points, &params) {
        let d = points[e.from].position.distance(points[e.to].position);
        let expected = (1.0 - d / 200.0).max(0.0) * 0.3;
        assert_eq!(e.opacity, expected);
        assert_eq!(e.kind, EdgeKind::Proximity);
    }
    assert_eq!(link_opacity(0.0, &params), Some(0.3));
    assert_eq!(link_opacity(100.0, &params), Some(0.15));
    assert_eq!(link_opacity(200.0, &params), None);
    assert_eq!(link_opacity(350.0, &params), None);
}

#[test]
fn proximity_pairs_are_unique_and_skip_self_and_hub() {
    let points: Vec<Point> = std::iter::once(point(50.0, 50.0, PointRole::Hub))
        .chain((0..10).map(|i| point(10.0 * i as f32, 5.0 * i as f32, PointRole::Satellite)))
        .collect();
    let edges = proximity_edges(&points, &EdgeParams::default());

    let mut seen = HashSet::new();
    for e in &edges {
        assert_ne!(e.from, e.to);
        assert!(!points[e.from].is_hub() && !points[e.to].is_hub());
        let key = (e.from.min(e.to), e.from.max(e.to));
        assert!(seen.insert(key), "pair {key:?} produced twice");
    }
    // All ten satellites are within 200 of each other.
    assert_eq!(edges.len(), 10 * 9 / 2);
}

#[test]
fn wave_curve_starts_and_ends_on_endpoints() {
    let wave = WaveParams::default();
    let cases = [
        (Vec2::new(0.0, 0.0), Vec2::new(400.0, 0.0)),
        (Vec2::new(12.5, 80.0), Vec2::new(-33.0, 241.0)),
        (Vec2::new(300.0, 300.0), Vec2::new(301.0, 299.0)),
    ];
    for (a, b) in cases {
        for time in [0.0, 0.37, 12.0, 1234.5] {
            let curve = wave_curve(a, b, time, &wave);
            assert_eq!(curve[0], a);
            let last = *curve.last().unwrap();
            assert!(last.distance(b) < 1e-4, "curve ended at {last:?}, expected {b:?}");
        }
    }
}

#[test]
fn wave_curve_segment_count_scales_with_length() {
    let wave = WaveParams::default();
    // Short edges get the minimum of 10 segments.
    let short = wave_curve(Vec2::ZERO, Vec2::new(100.0, 0.0), 0.0, &wave);
    assert_eq!(short.len(), 11);
    // 400 / 20 = 20 segments.
    let long = wave_curve(Vec2::ZERO, Vec2::new(400.0, 0.0), 0.0, &wave);
    assert_eq!(long.len(), 21);
}

#[test]
fn wave_curve_displaces_perpendicular_with_decay() {
    let wave = WaveParams::default();
    let time = 0.8;
    let curve = wave_curve(Vec2::ZERO, Vec2::new(400.0, 0.0), time, &wave);
    let segments = curve.len() - 1;
    for (i, p) in curve.iter().enumerate().take(segments).skip(1) {
        let t = i as f32 / segments as f32;
        let expected = (time * 2.0 + t * 4.0 * PI).sin() * 15.0 * (1.0 - t);
        assert!((p.x - 400.0 * t).abs() < 1e-3, "sample {i} drifted along the edge");
        assert!((p.y - expected).abs() < 1e-3, "sample {i}: {} vs {expected}", p.y);
    }
}

#[test]
fn wave_curve_changes_over_time() {
    let wave = WaveParams::default();
    let a = Vec2::new(10.0, 10.0);
    let b = Vec2::new(210.0, 90.0);
    let c0 = wave_curve(a, b, 0.0, &wave);
    let c1 = wave_curve(a, b, 0.5, &wave);
    assert_eq!(c0.len(), c1.len());
    assert!(c0.iter().zip(c1.iter()).any(|(p, q)| p.distance(*q) > 0.1));
}

#[test]
fn wave_curve_with_coincident_endpoints_stays_finite() {
    let p = Vec2::new(42.0, 17.0);
    let curve = wave_curve(p, p, 3.0, &WaveParams::default());
    assert_eq!(curve.len(), 11);
    assert!(curve.iter().all(|q| *q == p));
}

#[test]
fn decorative_arcs_are_spread_across_width() {
    let surface = Surface::new(1000.0, 400.0);
    let params = ArcParams::default();
    for time in [0.0, 1.5, 42.0] {
        let arcs = decorative_arcs(surface, time, &params);
        assert_eq!(arcs.len(), 5);
        for (i, arc) in arcs.iter().enumerate() {
            assert!((arc.center.x - (100.0 + 200.0 * i as f32)).abs() < 1e-3);
            assert_eq!(arc.center.y, 200.0);
            assert!((arc.end - arc.start - 1.5 * PI).abs() < 1e-4);
            assert!(arc.radius >= 70.0 - 1e-3 && arc.radius <= 130.0 + 1e-3);
            assert!(arc.alpha >= -1e-6 && arc.alpha <= 0.2 + 1e-6);
        }
    }
}

#[test]
fn render_draws_every_edge_and_the_arcs() {
    let points = sample_points();
    let config = WebConfig::default();
    let mut rec = Recorder::new();
    render(&points, Surface::new(800.0, 600.0), 1.0, &config, &mut rec);

    let hub = hub_edges(&points, &config.edges).len();
    let links = proximity_edges(&points, &config.edges).len();
    assert_eq!(rec.polylines().count(), hub + links);
    assert_eq!(rec.arcs().count(), 5);

    for (_, stroke) in rec.polylines() {
        assert_eq!(stroke.color, config.palette.edge);
        assert_eq!(stroke.width, 1.0);
    }
    let hub_strokes = rec.polylines().filter(|(_, s)| s.alpha == 0.4).count();
    assert_eq!(hub_strokes, hub);
    for cmd in rec.arcs() {
        match cmd {
            DrawCommand::Arc { stroke, .. } => assert_eq!(stroke.width, 2.0),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
