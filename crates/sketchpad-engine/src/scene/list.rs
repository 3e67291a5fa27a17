use crate::render::{DrawError, Rasterizer};

use super::illustration::TriangleRecord;
use super::mesh::flatten;
use super::shape::{expand, DEFAULT_HALF_EXTENT};
use super::{Primitive, Shape};

/// Outcome of one full-scene render.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct RenderReport {
    /// Draw calls that succeeded.
    pub draws: usize,
    /// Draw calls the rasterizer rejected.
    pub skipped: usize,
}

impl RenderReport {
    fn record(&mut self, what: &str, index: usize, result: Result<(), DrawError>) {
        match result {
            Ok(()) => self.draws += 1,
            Err(err) => {
                log::warn!("skipping {what} #{index}: {err}");
                self.skipped += 1;
            }
        }
    }
}

/// Retained canvas contents.
///
/// Two independent ordered lists:
/// - placed shapes, drawn in insertion order (later shapes on top)
/// - illustration triangles, drawn after all placed shapes
///
/// Nothing is ever mutated in place; shapes leave the scene only when a
/// list is cleared.
#[derive(Debug, Clone)]
pub struct Scene {
    placed: Vec<Shape>,
    illustration: Vec<TriangleRecord>,
    half_extent: f32,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self::with_half_extent(DEFAULT_HALF_EXTENT)
    }

    /// Creates an empty scene that converts pixel sizes with `half_extent`.
    ///
    /// A half extent that is not a positive finite number is replaced by
    /// [`DEFAULT_HALF_EXTENT`].
    #[inline]
    pub fn with_half_extent(half_extent: f32) -> Self {
        let mut scene = Self {
            placed: Vec::new(),
            illustration: Vec::new(),
            half_extent: DEFAULT_HALF_EXTENT,
        };
        scene.set_half_extent(half_extent);
        scene
    }

    #[inline]
    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }

    /// Changes the pixel → rendering-space scale used by future renders.
    ///
    /// Zero, negative and non-finite values would divide shape sizes into
    /// non-finite vertices; they are rejected and the current value is kept.
    pub fn set_half_extent(&mut self, half_extent: f32) {
        if !(half_extent.is_finite() && half_extent > 0.0) {
            log::warn!("ignoring invalid half extent {half_extent}");
            return;
        }
        self.half_extent = half_extent;
    }

    /// Placed shapes in draw order.
    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.placed
    }

    /// Illustration triangles in draw order.
    #[inline]
    pub fn illustration(&self) -> &[TriangleRecord] {
        &self.illustration
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty() && self.illustration.is_empty()
    }

    /// Appends a shape on top of everything placed so far.
    #[inline]
    pub fn add_shape(&mut self, shape: Shape) {
        self.placed.push(shape);
    }

    /// Removes all placed shapes. The illustration is kept.
    #[inline]
    pub fn clear_interactive(&mut self) {
        self.placed.clear();
    }

    /// Removes the illustration. Placed shapes are kept.
    #[inline]
    pub fn clear_illustration(&mut self) {
        self.illustration.clear();
    }

    /// Removes both placed shapes and the illustration.
    #[inline]
    pub fn clear(&mut self) {
        self.clear_interactive();
        self.clear_illustration();
    }

    /// Replaces the illustration wholesale.
    pub fn load_illustration(&mut self, triangles: impl IntoIterator<Item = TriangleRecord>) {
        self.illustration.clear();
        self.illustration.extend(triangles);
    }

    /// Clears the frame and redraws everything in order.
    ///
    /// Every shape is re-expanded on each call. A draw the rasterizer rejects
    /// is logged and skipped; the pass always runs to the end.
    pub fn render<R>(&self, rasterizer: &mut R) -> RenderReport
    where
        R: Rasterizer + ?Sized,
    {
        rasterizer.clear_frame();

        let mut report = RenderReport::default();

        for (index, shape) in self.placed.iter().enumerate() {
            let primitive = expand(shape, self.half_extent);
            report.record(shape.kind().name(), index, draw_primitive(rasterizer, &primitive));
        }

        for (index, tri) in self.illustration.iter().enumerate() {
            rasterizer.set_uniform_color(tri.color);
            let result = rasterizer.upload_and_draw_triangles(&flatten(&tri.vertices), 1);
            report.record("illustration triangle", index, result);
        }

        log::trace!("scene rendered: {report:?}");
        report
    }
}

/// Issues the draw calls for one primitive.
pub fn draw_primitive<R>(rasterizer: &mut R, primitive: &Primitive) -> Result<(), DrawError>
where
    R: Rasterizer + ?Sized,
{
    match primitive {
        Primitive::Point { position, color, size } => {
            rasterizer.set_uniform_color(*color);
            rasterizer.set_point_size(*size);
            rasterizer.draw_single_point(*position, *color, *size)
        }
        Primitive::Triangles { vertices, color } => {
            rasterizer.set_uniform_color(*color);
            rasterizer.upload_and_draw_triangles(&flatten(vertices), primitive.triangle_count())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::illustration::cat_face;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear,
        Color(Color),
        PointSize(f32),
        Triangles { vertices: Vec<f32>, count: usize },
        Point { position: Vec2, color: Color, size: f32 },
    }

    /// Records every call; fails the draws whose (0-based) index is listed.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
        draw_index: usize,
        fail_draws: Vec<usize>,
    }

    impl Recorder {
        fn failing(fail_draws: &[usize]) -> Self {
            Self { fail_draws: fail_draws.to_vec(), ..Self::default() }
        }

        fn next_draw(&mut self) -> Result<(), DrawError> {
            let index = self.draw_index;
            self.draw_index += 1;
            if self.fail_draws.contains(&index) {
                Err(DrawError::BufferAllocation { bytes: 0 })
            } else {
                Ok(())
            }
        }

        fn draws(&self) -> Vec<&Call> {
            self.calls
                .iter()
                .filter(|c| matches!(c, Call::Triangles { .. } | Call::Point { .. }))
                .collect()
        }
    }

    impl Rasterizer for Recorder {
        fn clear_frame(&mut self) {
            self.calls.push(Call::Clear);
        }

        fn set_uniform_color(&mut self, color: Color) {
            self.calls.push(Call::Color(color));
        }

        fn set_point_size(&mut self, size: f32) {
            self.calls.push(Call::PointSize(size));
        }

        fn upload_and_draw_triangles(
            &mut self,
            vertices: &[f32],
            triangle_count: usize,
        ) -> Result<(), DrawError> {
            self.next_draw()?;
            self.calls.push(Call::Triangles { vertices: vertices.to_vec(), count: triangle_count });
            Ok(())
        }

        fn draw_single_point(
            &mut self,
            position: Vec2,
            color: Color,
            size: f32,
        ) -> Result<(), DrawError> {
            self.next_draw()?;
            self.calls.push(Call::Point { position, color, size });
            Ok(())
        }
    }

    const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    // ── mutation ──────────────────────────────────────────────────────────

    #[test]
    fn add_shape_appends_without_dedup() {
        let mut scene = Scene::new();
        let s = Shape::point(Vec2::zero(), RED, 5.0);
        scene.add_shape(s);
        scene.add_shape(s);
        assert_eq!(scene.shapes(), &[s, s]);
    }

    #[test]
    fn clear_interactive_keeps_illustration() {
        let mut scene = Scene::new();
        scene.add_shape(Shape::point(Vec2::zero(), RED, 5.0));
        scene.load_illustration(cat_face());

        scene.clear_interactive();
        assert!(scene.shapes().is_empty());
        assert_eq!(scene.illustration().len(), 25);
    }

    #[test]
    fn clear_illustration_keeps_shapes() {
        let mut scene = Scene::new();
        scene.add_shape(Shape::point(Vec2::zero(), RED, 5.0));
        scene.load_illustration(cat_face());

        scene.clear_illustration();
        assert_eq!(scene.shapes().len(), 1);
        assert!(scene.illustration().is_empty());
    }

    #[test]
    fn clear_empties_both_lists() {
        let mut scene = Scene::new();
        scene.add_shape(Shape::point(Vec2::zero(), RED, 5.0));
        scene.load_illustration(cat_face());

        scene.clear();
        assert!(scene.is_empty());
    }

    #[test]
    fn load_illustration_replaces_previous() {
        let mut scene = Scene::new();
        scene.load_illustration(cat_face());
        scene.load_illustration(cat_face());
        assert_eq!(scene.illustration().len(), 25);

        let single = TriangleRecord::new([Vec2::zero(); 3], BLUE);
        scene.load_illustration([single]);
        assert_eq!(scene.illustration(), &[single]);
    }

    // ── render ────────────────────────────────────────────────────────────

    #[test]
    fn empty_scene_only_clears() {
        let mut scene = Scene::new();
        scene.add_shape(Shape::circle(Vec2::zero(), RED, 5.0, 8));
        scene.load_illustration(cat_face());
        scene.clear();

        let mut r = Recorder::default();
        let report = scene.render(&mut r);
        assert_eq!(r.calls, vec![Call::Clear]);
        assert_eq!(report, RenderReport::default());
    }

    #[test]
    fn point_renders_single_point_with_exact_parameters() {
        let mut scene = Scene::new();
        scene.add_shape(Shape::point(Vec2::zero(), Color::new(1.0, 0.0, 0.0, 1.0), 20.0));

        let mut r = Recorder::default();
        scene.render(&mut r);

        assert_eq!(r.calls[0], Call::Clear);
        assert_eq!(
            r.draws(),
            vec![&Call::Point { position: Vec2::zero(), color: RED, size: 20.0 }]
        );
        assert!(r.calls.contains(&Call::PointSize(20.0)));
    }

    #[test]
    fn triangle_renders_flattened_vertices() {
        let mut scene = Scene::new();
        scene.add_shape(Shape::triangle(Vec2::zero(), BLUE, 40.0));

        let mut r = Recorder::default();
        scene.render(&mut r);

        assert_eq!(
            r.calls,
            vec![
                Call::Clear,
                Call::Color(BLUE),
                Call::Triangles { vertices: vec![0.0, 0.2, -0.2, -0.2, 0.2, -0.2], count: 1 },
            ]
        );
    }

    #[test]
    fn shapes_draw_in_insertion_order_then_illustration() {
        let mut scene = Scene::new();
        scene.load_illustration(cat_face());
        scene.add_shape(Shape::circle(Vec2::zero(), RED, 10.0, 6));
        scene.add_shape(Shape::star(Vec2::zero(), BLUE, 10.0, 5));

        let mut r = Recorder::default();
        let report = scene.render(&mut r);

        assert_eq!(report, RenderReport { draws: 27, skipped: 0 });
        let draws = r.draws();
        assert!(matches!(draws[0], Call::Triangles { count: 6, .. }));
        assert!(matches!(draws[1], Call::Triangles { count: 10, .. }));
        for (draw, tri) in draws[2..].iter().zip(cat_face()) {
            assert_eq!(*draw, &Call::Triangles { vertices: flatten(&tri.vertices), count: 1 });
        }
    }

    #[test]
    fn color_is_set_before_each_draw() {
        let mut scene = Scene::new();
        scene.add_shape(Shape::triangle(Vec2::zero(), RED, 10.0));
        scene.add_shape(Shape::triangle(Vec2::zero(), BLUE, 10.0));

        let mut r = Recorder::default();
        scene.render(&mut r);

        let colors: Vec<_> = r
            .calls
            .iter()
            .filter_map(|c| if let Call::Color(c) = c { Some(*c) } else { None })
            .collect();
        assert_eq!(colors, vec![RED, BLUE]);
    }

    #[test]
    fn failed_draw_is_skipped_and_rendering_continues() {
        let mut scene = Scene::new();
        for i in 0..4 {
            scene.add_shape(Shape::point(Vec2::new(i as f32 * 0.1, 0.0), RED, 3.0));
        }
        scene.load_illustration(cat_face());

        let mut r = Recorder::failing(&[1, 10]);
        let report = scene.render(&mut r);

        assert_eq!(report, RenderReport { draws: 27, skipped: 2 });
        assert_eq!(r.draws().len(), 27);
        assert!(matches!(r.draws()[1], Call::Point { position, .. } if position.x == 0.2));
    }

    #[test]
    fn render_uses_scene_half_extent() {
        let mut scene = Scene::with_half_extent(100.0);
        scene.add_shape(Shape::triangle(Vec2::zero(), RED, 10.0));

        let mut r = Recorder::default();
        scene.render(&mut r);
        assert!(matches!(
            r.draws()[0],
            Call::Triangles { vertices, .. } if vertices[1] == 0.1
        ));
    }

    #[test]
    fn invalid_half_extent_is_rejected() {
        let mut scene = Scene::with_half_extent(0.0);
        assert_eq!(scene.half_extent(), DEFAULT_HALF_EXTENT);

        scene.set_half_extent(150.0);
        for bad in [0.0, -10.0, f32::NAN, f32::INFINITY] {
            scene.set_half_extent(bad);
            assert_eq!(scene.half_extent(), 150.0);
        }

        scene.add_shape(Shape::circle(Vec2::zero(), RED, 30.0, 8));
        let mut r = Recorder::default();
        scene.render(&mut r);
        assert!(matches!(
            r.draws()[0],
            Call::Triangles { vertices, .. } if vertices.iter().all(|v| v.is_finite())
        ));
    }

    #[test]
    fn huge_point_count_is_capped() {
        let mut scene = Scene::new();
        scene.add_shape(Shape::star(Vec2::zero(), RED, 30.0, i32::MAX));

        let mut r = Recorder::default();
        let report = scene.render(&mut r);
        assert_eq!(report, RenderReport { draws: 1, skipped: 0 });
        assert!(matches!(
            r.draws()[0],
            Call::Triangles { count, .. } if *count == 2 * crate::scene::mesh::MAX_SEGMENTS
        ));
    }

    #[test]
    fn render_does_not_consume_the_scene() {
        let mut scene = Scene::new();
        scene.add_shape(Shape::star(Vec2::zero(), RED, 10.0, 5));

        let mut first = Recorder::default();
        let mut second = Recorder::default();
        scene.render(&mut first);
        scene.render(&mut second);
        assert_eq!(first.calls, second.calls);
    }
}
