//! Particle storage and seeding.

use crate::config::LayoutParams;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointRole {
    /// Fixed centre of the web. Never moves.
    Hub,
    Satellite,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub role: PointRole,
}

impl Point {
    #[inline]
    pub fn is_hub(&self) -> bool {
        self.role == PointRole::Hub
    }
}

/// Drawable rectangle in device pixels. Points live in `[0, width] x [0, height]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self::new(width as f32, height as f32)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

/// Latest pointer sample. Overwritten by host events, read once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub over_surface: bool,
}

impl PointerState {
    pub fn moved(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
        self.over_surface = true;
    }

    pub fn left(&mut self) {
        self.over_surface = false;
    }
}

#[derive(Clone, Debug, Default)]
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub(crate) fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn hub(&self) -> Option<&Point> {
        self.points.iter().find(|p| p.is_hub())
    }

    pub fn satellites(&self) -> impl Iterator<Item = &Point> {
        self.points.iter().filter(|p| !p.is_hub())
    }

    /// Throw away every point and seed a fresh set for `surface`: the hub at the
    /// centre, a ring of satellites around it, then uniformly scattered ones.
    pub fn rebuild<R: Rng + ?Sized>(
        &mut self,
        surface: Surface,
        layout: &LayoutParams,
        rng: &mut R,
    ) {
        let center = surface.center();
        self.points.clear();
        self.points.reserve(1 + layout.ring_count + layout.scatter_count);

        self.points.push(Point {
            position: center,
            velocity: Vec2::ZERO,
            radius: layout.hub_radius,
            role: PointRole::Hub,
        });

        let ring_r = surface.width.min(surface.height) * layout.ring_spread;
        for i in 0..layout.ring_count {
            let angle = i as f32 / layout.ring_count as f32 * TAU;
            let position = center + Vec2::new(angle.cos(), angle.sin()) * ring_r;
            self.points.push(Point {
                position,
                velocity: jitter(rng, layout.ring_speed_span),
                radius: layout.ring_point_radius,
                role: PointRole::Satellite,
            });
        }

        for _ in 0..layout.scatter_count {
            let position = Vec2::new(
                rng.gen::<f32>() * surface.width,
                rng.gen::<f32>() * surface.height,
            );
            self.points.push(Point {
                position,
                velocity: jitter(rng, layout.scatter_speed_span),
                radius: layout.scatter_point_radius,
                role: PointRole::Satellite,
            });
        }

        log::debug!(
            "[points] rebuilt {} points for {}x{}",
            self.points.len(),
            surface.width,
            surface.height
        );
    }
}

// Each component uniform in [-span/2, span/2).
fn jitter<R: Rng + ?Sized>(rng: &mut R, span: f32) -> Vec2 {
    Vec2::new(
        (rng.gen::<f32>() - 0.5) * span,
        (rng.gen::<f32>() - 0.5) * span,
    )
}
