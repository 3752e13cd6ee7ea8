use crate::config::Palette;
use crate::paint::{Fill, Painter};
use crate::points::{Point, PointRole};

#[inline]
pub fn fill_for(role: PointRole, palette: &Palette) -> Fill {
    match role {
        PointRole::Hub => Fill {
            color: palette.hub,
            glow: palette.hub_glow,
        },
        PointRole::Satellite => Fill {
            color: palette.satellite,
            glow: palette.satellite_glow,
        },
    }
}

/// One glowing disc per point, drawn over the edges.
pub fn render<P: Painter + ?Sized>(points: &[Point], palette: &Palette, painter: &mut P) {
    for p in points {
        painter.fill_circle(p.position, p.radius, fill_for(p.role, palette));
    }
}
