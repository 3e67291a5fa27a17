use sketchpad_engine::coords::{to_render_space, Rect, Vec2, Viewport};
use sketchpad_engine::core::{App, AppControl, FrameCtx};
use sketchpad_engine::input::{
    InputEvent, KeyState, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};
use sketchpad_engine::render::FillPipeline;
use sketchpad_engine::scene::{Scene, SceneCommand};

use crate::config::CanvasConfig;
use crate::controls::{BrushControls, KeyAction};

/// Drawing host: turns pointer and key input into scene commands and
/// redraws the scene every frame.
pub struct SketchApp {
    canvas: CanvasConfig,
    controls: BrushControls,
    scene: Scene,
    pipeline: FillPipeline,

    /// Left button went down on the canvas and has not been released yet.
    drawing: bool,
}

impl SketchApp {
    pub fn new(canvas: CanvasConfig) -> Self {
        let pipeline = FillPipeline::new(canvas.background);
        Self {
            canvas,
            controls: BrushControls::default(),
            scene: Scene::new(),
            pipeline,
            drawing: false,
        }
    }

    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Places one shape with the current brush at a window-relative position.
    fn place(&mut self, x: f32, y: f32, canvas_rect: Rect, viewport: Viewport) {
        let position = to_render_space(Vec2::new(x, y), canvas_rect, viewport);
        let shape = self.controls.settings().place(position);
        self.scene.apply(SceneCommand::AddShape(shape));
    }

    /// Folds one input event into the brush or the scene.
    fn handle_event(&mut self, ev: &InputEvent, canvas_rect: Rect, viewport: Viewport) -> AppControl {
        match ev {
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state,
                position,
                ..
            }) => match (state, position) {
                (MouseButtonState::Pressed, Some((x, y))) => {
                    if canvas_rect.contains(Vec2::new(*x, *y)) {
                        self.drawing = true;
                        self.place(*x, *y, canvas_rect, viewport);
                    }
                }
                (MouseButtonState::Pressed, None) => {}
                (MouseButtonState::Released, _) => self.drawing = false,
            },

            // One shape per move event while dragging.
            InputEvent::PointerMoved(PointerMoveEvent { x, y }) if self.drawing => {
                self.place(*x, *y, canvas_rect, viewport);
            }

            // The release may be lost once the pointer is gone; end the stroke here.
            InputEvent::PointerLeft | InputEvent::Focused(false) => self.drawing = false,

            InputEvent::Key { key, state: KeyState::Pressed, modifiers, .. } => {
                match self.controls.handle_key(*key, *modifiers) {
                    KeyAction::Scene(cmd) => self.scene.apply(cmd),
                    KeyAction::Exit => return AppControl::Exit,
                    KeyAction::Brush | KeyAction::Ignored => {}
                }
            }

            _ => {}
        }

        AppControl::Continue
    }
}

impl App for SketchApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let viewport = ctx.window.viewport();
        let canvas_rect = ctx.window.canvas_rect();

        self.scene.set_half_extent(self.canvas.half_extent_for(viewport));

        // ── Input ─────────────────────────────────────────────────────────
        for ev in &ctx.input_frame.events {
            if self.handle_event(ev, canvas_rect, viewport) == AppControl::Exit {
                log::info!("exit requested");
                return AppControl::Exit;
            }
        }

        // ── Render ────────────────────────────────────────────────────────
        let scene = &self.scene;
        let pipeline = &mut self.pipeline;

        ctx.render(|rctx, target| {
            let mut raster = pipeline.begin(rctx, target);
            let report = scene.render(&mut raster);
            if report.skipped > 0 {
                log::debug!(
                    "frame drawn with {} of {} draws skipped",
                    report.skipped,
                    report.draws + report.skipped
                );
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketchpad_engine::input::{Key, Modifiers};
    use sketchpad_engine::scene::{Shape, ShapeKind};

    const VP: Viewport = Viewport::new(400.0, 400.0);
    const RECT: Rect = Rect::new(0.0, 0.0, 400.0, 400.0);

    fn button(state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state,
            position: Some((x, y)),
            modifiers: Modifiers::default(),
        })
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    fn key(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            modifiers: Modifiers::default(),
            repeat: false,
        }
    }

    fn feed(app: &mut SketchApp, events: &[InputEvent]) -> AppControl {
        for ev in events {
            if app.handle_event(ev, RECT, VP) == AppControl::Exit {
                return AppControl::Exit;
            }
        }
        AppControl::Continue
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn click_places_mapped_shape_with_current_brush() {
        let mut app = SketchApp::new(CanvasConfig::default());

        feed(&mut app, &[key(Key::Digit2), button(MouseButtonState::Pressed, 300.0, 100.0)]);

        let shapes = app.scene().shapes();
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].kind(), ShapeKind::Triangle);
        assert_eq!(shapes[0].position(), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn drag_places_one_shape_per_move() {
        let mut app = SketchApp::new(CanvasConfig::default());

        feed(&mut app, &[
            moved(10.0, 10.0),
            button(MouseButtonState::Pressed, 200.0, 200.0),
            moved(210.0, 200.0),
            moved(220.0, 200.0),
            button(MouseButtonState::Released, 220.0, 200.0),
            moved(230.0, 200.0),
        ]);

        assert_eq!(app.scene().shapes().len(), 3);
        assert_eq!(app.scene().shapes()[0].position(), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn leaving_the_window_ends_the_stroke() {
        let mut app = SketchApp::new(CanvasConfig::default());

        feed(&mut app, &[
            button(MouseButtonState::Pressed, 200.0, 200.0),
            InputEvent::PointerLeft,
            moved(100.0, 100.0),
            moved(110.0, 100.0),
        ]);

        assert_eq!(app.scene().shapes().len(), 1);
    }

    #[test]
    fn release_without_position_ends_the_stroke() {
        let mut app = SketchApp::new(CanvasConfig::default());

        feed(&mut app, &[
            button(MouseButtonState::Pressed, 200.0, 200.0),
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Released,
                position: None,
                modifiers: Modifiers::default(),
            }),
            moved(100.0, 100.0),
        ]);

        assert_eq!(app.scene().shapes().len(), 1);
    }

    #[test]
    fn press_outside_canvas_is_ignored() {
        let mut app = SketchApp::new(CanvasConfig::default());

        feed(&mut app, &[
            button(MouseButtonState::Pressed, -5.0, 20.0),
            moved(20.0, 20.0),
        ]);

        assert!(app.scene().is_empty());
    }

    #[test]
    fn later_brush_changes_do_not_touch_placed_shapes() {
        let mut app = SketchApp::new(CanvasConfig::default());

        feed(&mut app, &[
            button(MouseButtonState::Pressed, 200.0, 200.0),
            button(MouseButtonState::Released, 200.0, 200.0),
            key(Key::ArrowUp),
            key(Key::Digit4),
        ]);

        let placed: Shape = app.scene().shapes()[0];
        assert_eq!(placed.kind(), ShapeKind::Point);
        assert_eq!(placed.size(), 10.0);
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn clear_and_illustration_keys_drive_scene() {
        let mut app = SketchApp::new(CanvasConfig::default());

        feed(&mut app, &[button(MouseButtonState::Pressed, 1.0, 1.0), key(Key::P)]);
        assert_eq!(app.scene().shapes().len(), 1);
        assert_eq!(app.scene().illustration().len(), 25);

        feed(&mut app, &[key(Key::C)]);
        assert!(app.scene().is_empty());
    }

    #[test]
    fn escape_exits() {
        let mut app = SketchApp::new(CanvasConfig::default());
        assert_eq!(feed(&mut app, &[key(Key::Escape)]), AppControl::Exit);
    }
}
