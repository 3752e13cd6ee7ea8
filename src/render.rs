use glam::Vec2;
use spiderweb_core::{Fill, Painter, Stroke};
use std::f64::consts::TAU;
use web_sys as web;

/// [`Painter`] backed by a 2D canvas context.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    #[inline]
    fn apply_stroke(&self, stroke: Stroke) {
        self.ctx.set_stroke_style_str(&stroke.color.rgba(stroke.alpha));
        self.ctx.set_line_width(stroke.width as f64);
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn stroke_polyline(&mut self, points: &[Vec2], stroke: Stroke) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.apply_stroke(stroke);
        self.ctx.stroke();
    }

    fn stroke_arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, stroke: Stroke) {
        // Canvas throws on negative radii.
        if radius.is_nan() || radius <= 0.0 {
            return;
        }
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            start as f64,
            end as f64,
        ) {
            log::warn!("arc error: {:?}", e);
            return;
        }
        self.apply_stroke(stroke);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Fill) {
        if radius.is_nan() || radius <= 0.0 {
            return;
        }
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        let color = fill.color.hex();
        self.ctx.set_fill_style_str(&color);
        self.ctx.set_shadow_blur(fill.glow as f64);
        self.ctx.set_shadow_color(&color);
        self.ctx.fill();
        self.ctx.set_shadow_blur(0.0);
    }
}
