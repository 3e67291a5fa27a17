use super::{Rect, Vec2, Viewport};

/// Maps a pointer position (device pixels, viewport-relative) into rendering space.
///
/// `canvas_rect` is where the canvas sits on screen; `canvas` is its pixel size.
/// The Y axis is flipped because device Y grows downward.
///
/// No clamping: a pointer slightly outside the canvas maps outside `[-1, 1]`,
/// so drags that leave the canvas edge still register.
#[inline]
pub fn to_render_space(client: Vec2, canvas_rect: Rect, canvas: Viewport) -> Vec2 {
    let local = client - canvas_rect.origin;
    let (half_w, half_h) = canvas.half();

    Vec2::new((local.x - half_w) / half_w, (half_h - local.y) / half_h)
}
