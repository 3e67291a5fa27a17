use std::fmt;

use crate::coords::Vec2;
use crate::paint::Color;

/// Failure of a single draw call.
///
/// A failed draw affects only that draw; callers log it and carry on.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawError {
    /// The transient vertex buffer could not be allocated.
    BufferAllocation { bytes: u64 },
    /// Nothing to upload.
    EmptyGeometry,
    /// Vertex data does not hold `triangles * 6` floats.
    VertexCountMismatch { floats: usize, triangles: usize },
    /// The backend has no pipeline to draw with.
    PipelineUnavailable,
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawError::BufferAllocation { bytes } => {
                write!(f, "failed to allocate a {bytes}-byte vertex buffer")
            }
            DrawError::EmptyGeometry => write!(f, "draw call has no vertices"),
            DrawError::VertexCountMismatch { floats, triangles } => write!(
                f,
                "{floats} floats cannot describe {triangles} triangles (expected {})",
                triangles * 6
            ),
            DrawError::PipelineUnavailable => write!(f, "no render pipeline available"),
        }
    }
}

impl std::error::Error for DrawError {}

/// Boundary to the graphics backend.
///
/// One call to [`upload_and_draw_triangles`](Self::upload_and_draw_triangles)
/// or [`draw_single_point`](Self::draw_single_point) is one independent draw:
/// it owns its vertex data for the duration of the call and shares no state
/// with other draws apart from the current color and point size.
///
/// Coordinates are in rendering space (`[-1, 1]`, +Y up).
pub trait Rasterizer {
    /// Clears the frame buffer to the background color.
    fn clear_frame(&mut self);

    /// Sets the fill color for subsequent triangle draws.
    fn set_uniform_color(&mut self, color: Color);

    /// Sets the point size in device pixels for subsequent point draws.
    fn set_point_size(&mut self, size: f32);

    /// Uploads `vertices` (interleaved `x, y`) and draws `triangle_count` triangles.
    fn upload_and_draw_triangles(
        &mut self,
        vertices: &[f32],
        triangle_count: usize,
    ) -> Result<(), DrawError>;

    /// Draws one point as a screen-space square of `size` device pixels.
    fn draw_single_point(&mut self, position: Vec2, color: Color, size: f32)
        -> Result<(), DrawError>;
}

/// Checks that `vertices` holds exactly `triangle_count` triangles.
pub fn check_triangle_data(vertices: &[f32], triangle_count: usize) -> Result<(), DrawError> {
    if triangle_count == 0 || vertices.is_empty() {
        return Err(DrawError::EmptyGeometry);
    }
    if vertices.len() != triangle_count * 6 {
        return Err(DrawError::VertexCountMismatch {
            floats: vertices.len(),
            triangles: triangle_count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_data_must_match_count() {
        assert_eq!(check_triangle_data(&[0.0; 6], 1), Ok(()));
        assert_eq!(check_triangle_data(&[0.0; 18], 3), Ok(()));
        assert_eq!(
            check_triangle_data(&[0.0; 7], 1),
            Err(DrawError::VertexCountMismatch { floats: 7, triangles: 1 })
        );
    }

    #[test]
    fn empty_draws_are_rejected() {
        assert_eq!(check_triangle_data(&[], 0), Err(DrawError::EmptyGeometry));
        assert_eq!(check_triangle_data(&[0.0; 6], 0), Err(DrawError::EmptyGeometry));
    }

    #[test]
    fn errors_render_readable_messages() {
        let msg = DrawError::BufferAllocation { bytes: 96 }.to_string();
        assert_eq!(msg, "failed to allocate a 96-byte vertex buffer");
    }
}
