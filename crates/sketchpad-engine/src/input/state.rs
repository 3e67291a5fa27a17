use super::frame::InputFrame;
use super::types::{InputEvent, Modifiers, PointerButtonEvent, PointerMoveEvent};

/// What the runtime needs to remember between window events.
///
/// winit reports pointer buttons and keys without a position or modifier
/// state, so both are tracked here and attached to the translated events.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,

    /// Pointer position in logical pixels; `None` while outside the window.
    pub pointer_pos: Option<(f32, f32)>,
}

impl InputState {
    /// Folds `ev` into the tracked state and queues it on `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = *m,

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => self.pointer_pos = None,

            InputEvent::Key { modifiers, .. } => self.modifiers = *modifiers,

            InputEvent::PointerButton(PointerButtonEvent { position, modifiers, .. }) => {
                if position.is_some() {
                    self.pointer_pos = *position;
                }
                self.modifiers = *modifiers;
            }

            InputEvent::Focused(_) => {}
        }

        frame.push_event(ev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, KeyState, MouseButton, MouseButtonState};

    fn left(state: MouseButtonState, position: Option<(f32, f32)>) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state,
            position,
            modifiers: Modifiers::default(),
        })
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn button_press_records_position() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, left(MouseButtonState::Pressed, Some((10.0, 20.0))));

        assert_eq!(state.pointer_pos, Some((10.0, 20.0)));
        assert_eq!(frame.events.len(), 1);
    }

    #[test]
    fn release_outside_window_is_queued_and_keeps_pointer_unknown() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, left(MouseButtonState::Pressed, Some((5.0, 5.0))));
        state.apply_event(&mut frame, InputEvent::PointerLeft);
        state.apply_event(&mut frame, left(MouseButtonState::Released, None));

        assert_eq!(state.pointer_pos, None);
        assert_eq!(frame.events.len(), 3);
        assert_eq!(frame.events[2], left(MouseButtonState::Released, None));
    }

    // ── keys / modifiers ──────────────────────────────────────────────────

    #[test]
    fn key_events_carry_latest_modifiers() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        let shift = Modifiers { shift: true, ..Default::default() };

        state.apply_event(&mut frame, InputEvent::Key {
            key: Key::R,
            state: KeyState::Pressed,
            modifiers: shift,
            repeat: false,
        });

        assert_eq!(state.modifiers, shift);

        frame.clear();
        assert!(frame.events.is_empty());
    }
}
