//! Drawing abstraction over the host surface.
//!
//! The renderers only ever talk to a [`Painter`]. The web front-end backs it
//! with a `CanvasRenderingContext2d`; tests use [`Recorder`] to capture the
//! exact calls made during a frame.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Self(c[0], c[1], c[2])
    }
}

impl Rgb {
    /// `#rrggbb`
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// `rgba(r, g, b, a)` with alpha clamped to \[0, 1\].
    pub fn rgba(self, alpha: f32) -> String {
        let a = if alpha.is_finite() {
            alpha.clamp(0.0, 1.0)
        } else {
            0.0
        };
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub alpha: f32,
    pub width: f32,
}

/// Solid disc fill with a soft glow of `glow` pixels around it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fill {
    pub color: Rgb,
    pub glow: f32,
}

pub trait Painter {
    fn clear(&mut self, width: f32, height: f32);
    fn stroke_polyline(&mut self, points: &[Vec2], stroke: Stroke);
    fn stroke_arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, stroke: Stroke);
    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Fill);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    Polyline {
        points: Vec<Vec2>,
        stroke: Stroke,
    },
    Arc {
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
        stroke: Stroke,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Fill,
    },
}

/// Painter that just remembers what it was asked to draw.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn polylines(&self) -> impl Iterator<Item = (&[Vec2], &Stroke)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polyline { points, stroke } => Some((points.as_slice(), stroke)),
            _ => None,
        })
    }

    pub fn arcs(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Arc { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, &Fill)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle {
                center,
                radius,
                fill,
            } => Some((*center, *radius, fill)),
            _ => None,
        })
    }
}

impl Painter for Recorder {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn stroke_polyline(&mut self, points: &[Vec2], stroke: Stroke) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            stroke,
        });
    }

    fn stroke_arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, stroke: Stroke) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start,
            end,
            stroke,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Fill) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill,
        });
    }
}
