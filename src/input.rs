use glam::Vec2;
use web_sys as web;

/// Map a client-space position to canvas backing-store pixels.
///
/// `rect_origin`/`rect_size` are the canvas's CSS box, `backing` its
/// `width`/`height` attributes. A collapsed box maps 1:1 from its origin.
#[inline]
pub fn client_to_backing_px(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    backing: Vec2,
) -> Vec2 {
    let local = client - rect_origin;
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return local;
    }
    local / rect_size * backing
}

#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_backing_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}
