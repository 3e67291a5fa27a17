/// What the frame loop should do after `begin_frame` fails.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; the next redraw may succeed.
    Reconfigured,
    /// Transient failure; drop this frame.
    SkipFrame,
    /// Out of memory; stop the runtime.
    Fatal,
}
