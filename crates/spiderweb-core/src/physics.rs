//! Per-tick kinematics for satellites.
//!
//! Forces here are cosmetic. Velocities are in pixels per tick and the step is
//! plain Euler with no time scaling, so motion speed follows the display
//! refresh rate.

use crate::config::PhysicsParams;
use crate::points::{Point, PointerState, Surface};
use glam::Vec2;

/// Advance every satellite by one tick. The hub is skipped entirely.
pub fn step(
    points: &mut [Point],
    surface: Surface,
    pointer: &PointerState,
    params: &PhysicsParams,
) {
    for p in points.iter_mut().filter(|p| !p.is_hub()) {
        p.position += p.velocity;
        reflect_and_clamp(p, surface);
        if pointer.over_surface {
            p.velocity += attraction(p.position, pointer.position, params);
        }
        p.velocity = clamp_speed(p.velocity, params.max_speed);
    }
}

// Flip the velocity component that left the range and pin the coordinate to
// the boundary it crossed.
#[inline]
fn reflect_and_clamp(p: &mut Point, surface: Surface) {
    if p.position.x < 0.0 || p.position.x > surface.width {
        p.velocity.x = -p.velocity.x;
        p.position.x = p.position.x.clamp(0.0, surface.width);
    }
    if p.position.y < 0.0 || p.position.y > surface.height {
        p.velocity.y = -p.velocity.y;
        p.position.y = p.position.y.clamp(0.0, surface.height);
    }
}

/// Velocity nudge toward the pointer. Falls off linearly to zero at
/// `attraction_radius`; zero at or beyond it.
#[inline]
pub fn attraction(position: Vec2, pointer: Vec2, params: &PhysicsParams) -> Vec2 {
    let delta = pointer - position;
    let distance = delta.length();
    if distance >= params.attraction_radius {
        return Vec2::ZERO;
    }
    let falloff = (params.attraction_radius - distance) / params.attraction_radius;
    delta * falloff * params.attraction_strength
}

/// Rescale to `max_speed` when faster, keeping direction. The result never
/// measures above `max_speed`, even after f32 rounding.
#[inline]
pub fn clamp_speed(velocity: Vec2, max_speed: f32) -> Vec2 {
    let speed = velocity.length();
    if speed <= max_speed {
        return velocity;
    }
    let mut scaled = velocity * (max_speed / speed);
    while scaled.length() > max_speed {
        scaled *= 1.0 - f32::EPSILON;
    }
    scaled
}
