use std::collections::HashSet;

use glam::Vec2;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState, PointerButtonEvent};

/// Current input state for the window.
///
/// Holds "is down" information and the current pointer position.
/// Per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,

    pub focused: bool,

    /// Pointer position in logical pixels; `None` while outside the window.
    pub pointer_pos: Option<Vec2>,

    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies an input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // The release for anything held now goes to another window.
                    for button in self.buttons_down.drain() {
                        frame.buttons_released.insert(button);
                    }
                    for key in self.keys_down.drain() {
                        frame.keys_released.insert(key);
                    }
                    frame.focus_lost = true;
                }
            }

            InputEvent::PointerMoved(p) => {
                self.pointer_pos = Some(*p);
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key {
                key,
                state,
                modifiers,
                ..
            } => {
                self.modifiers = *modifiers;
                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(*key) {
                            frame.keys_pressed.insert(*key);
                        }
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(key) {
                            frame.keys_released.insert(*key);
                        }
                    }
                }
            }

            InputEvent::PointerButton(PointerButtonEvent {
                button,
                state,
                position,
                modifiers,
            }) => {
                self.pointer_pos = Some(*position);
                self.modifiers = *modifiers;
                match state {
                    MouseButtonState::Pressed => {
                        if self.buttons_down.insert(*button) {
                            frame.buttons_pressed.insert(*button);
                        }
                    }
                    MouseButtonState::Released => {
                        if self.buttons_down.remove(button) {
                            frame.buttons_released.insert(*button);
                        }
                    }
                }
            }
        }

        frame.push_event(ev);
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(button: MouseButton, state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state,
            position: Vec2::new(x, y),
            modifiers: Modifiers::default(),
        })
    }

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key {
            key,
            state,
            modifiers: Modifiers::default(),
            repeat: false,
        }
    }

    // ── buttons ───────────────────────────────────────────────────────────

    #[test]
    fn press_and_release_record_transitions_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, button(MouseButton::Left, MouseButtonState::Pressed, 5.0, 6.0));
        // Duplicate press from the platform is not a new transition.
        state.apply_event(&mut frame, button(MouseButton::Left, MouseButtonState::Pressed, 5.0, 6.0));
        assert!(state.button_down(MouseButton::Left));
        assert_eq!(frame.buttons_pressed.len(), 1);
        assert_eq!(state.pointer_pos, Some(Vec2::new(5.0, 6.0)));
        assert_eq!(frame.events.len(), 2);

        frame.clear();
        state.apply_event(&mut frame, button(MouseButton::Left, MouseButtonState::Released, 5.0, 6.0));
        assert!(!state.button_down(MouseButton::Left));
        assert!(frame.buttons_released.contains(&MouseButton::Left));
        assert!(frame.buttons_pressed.is_empty());
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, button(MouseButton::Right, MouseButtonState::Released, 0.0, 0.0));
        assert!(frame.buttons_released.is_empty());
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn pointer_leave_clears_position() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::PointerMoved(Vec2::new(10.0, 20.0)));
        assert_eq!(state.pointer_pos, Some(Vec2::new(10.0, 20.0)));
        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
    }

    // ── focus ─────────────────────────────────────────────────────────────

    #[test]
    fn focus_loss_releases_everything_held() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::Focused(true));
        state.apply_event(&mut frame, button(MouseButton::Right, MouseButtonState::Pressed, 1.0, 1.0));
        state.apply_event(&mut frame, key(Key::Escape, KeyState::Pressed));
        frame.clear();

        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(!state.focused);
        assert!(frame.focus_lost);
        assert!(state.buttons_down.is_empty());
        assert!(state.keys_down.is_empty());
        assert!(frame.buttons_released.contains(&MouseButton::Right));
        assert!(frame.keys_released.contains(&Key::Escape));

        frame.clear();
        assert!(!frame.focus_lost);
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn key_press_is_reported_once_per_hold() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, key(Key::Character('r'), KeyState::Pressed));
        assert!(frame.key_pressed(Key::Character('r')));

        frame.clear();
        state.apply_event(&mut frame, key(Key::Character('r'), KeyState::Pressed));
        assert!(!frame.key_pressed(Key::Character('r')));
        assert!(state.keys_down.contains(&Key::Character('r')));
    }
}
