//! Mesh generators.
//!
//! Pure functions producing rendering-space vertex lists. Triangle lists are
//! flat: every three consecutive vertices form one triangle.

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::coords::Vec2;

/// Smallest segment/point count a generator will use.
pub const MIN_SEGMENTS: usize = 3;

/// Largest segment/point count a generator will use.
pub const MAX_SEGMENTS: usize = 1024;

/// Inner star radius as a fraction of the outer radius.
pub const STAR_INNER_RATIO: f32 = 0.45;

/// Floors a user-supplied segment or point count at [`MIN_SEGMENTS`] and
/// caps it at [`MAX_SEGMENTS`].
///
/// Zero and negative counts are valid input and simply produce the minimum.
#[inline]
pub fn effective_count(n: i32) -> usize {
    usize::try_from(n).map_or(MIN_SEGMENTS, |n| n.clamp(MIN_SEGMENTS, MAX_SEGMENTS))
}

/// Point at fraction `t` of a full turn around `center`, starting on +X.
#[inline]
pub fn point_on_circle(center: Vec2, radius: f32, t: f32) -> Vec2 {
    center + Vec2::polar(t * TAU, radius)
}

/// Vertices of a regular polygon approximating a circle.
pub fn regular_ring(center: Vec2, radius: f32, segments: i32) -> Vec<Vec2> {
    let n = effective_count(segments);
    (0..n)
        .map(|i| point_on_circle(center, radius, i as f32 / n as f32))
        .collect()
}

/// Star outline: `2p` vertices alternating between `outer` and `inner` radius,
/// starting at angle `-π/2` so one tip lies on the vertical axis.
pub fn star_ring(center: Vec2, outer: f32, inner: f32, points: i32) -> Vec<Vec2> {
    let n = effective_count(points) * 2;
    let step = TAU / n as f32;

    (0..n)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            center + Vec2::polar(-FRAC_PI_2 + step * i as f32, radius)
        })
        .collect()
}

/// Triangle fan around `center`: one triangle per ring edge, closing back on `ring[0]`.
pub fn fan(center: Vec2, ring: &[Vec2]) -> Vec<Vec2> {
    let n = ring.len();
    let mut out = Vec::with_capacity(n * 3);
    for i in 0..n {
        out.push(center);
        out.push(ring[i]);
        out.push(ring[(i + 1) % n]);
    }
    out
}

/// Filled circle as `max(3, segments)` fan triangles.
pub fn circle_fan(center: Vec2, radius: f32, segments: i32) -> Vec<Vec2> {
    fan(center, &regular_ring(center, radius, segments))
}

/// Filled star as `2 * max(3, points)` fan triangles.
pub fn star_fan(center: Vec2, outer: f32, points: i32) -> Vec<Vec2> {
    fan(center, &star_ring(center, outer, outer * STAR_INNER_RATIO, points))
}

/// Upward-pointing triangle with apex `d` above `center` and base `d` below it.
#[inline]
pub fn isoceles(center: Vec2, d: f32) -> [Vec2; 3] {
    [
        Vec2::new(center.x, center.y + d),
        Vec2::new(center.x - d, center.y - d),
        Vec2::new(center.x + d, center.y - d),
    ]
}

/// Axis-aligned square around `center` as two triangles.
///
/// Half extents are separate so a square in pixels stays square on a
/// non-square canvas.
pub fn point_quad(center: Vec2, half_w: f32, half_h: f32) -> [Vec2; 6] {
    let (x0, x1) = (center.x - half_w, center.x + half_w);
    let (y0, y1) = (center.y - half_h, center.y + half_h);
    [
        Vec2::new(x0, y0),
        Vec2::new(x1, y0),
        Vec2::new(x1, y1),
        Vec2::new(x0, y0),
        Vec2::new(x1, y1),
        Vec2::new(x0, y1),
    ]
}

/// Interleaves vertices as `x, y` pairs for upload.
pub fn flatten(vertices: &[Vec2]) -> Vec<f32> {
    vertices.iter().flat_map(|v| [v.x, v.y]).collect()
}
