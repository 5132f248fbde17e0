//! Input subsystem.
//!
//! Public types are platform-agnostic. The runtime translates winit events
//! through [`platform::translate_window_event`] and feeds them to
//! [`InputState::apply_event`].

mod frame;
pub mod platform;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState, PointerButtonEvent};
