// crates/engine_shared/src/input_types.rs
//! Platform-facing input vocabulary shared by hosts and game code.
//!
//! Key codes, element states and mouse buttons are winit's own types, so a
//! winit host never has to translate them. `InputEvent` is the compact,
//! serializable event shape used by queues, tests and recordings.

use serde::{Deserialize, Serialize};
use winit::event::{Event, WindowEvent};
use winit::keyboard::PhysicalKey;

pub use winit::event::{ElementState, MouseButton};
pub use winit::keyboard::KeyCode;

/// Edge-triggered state of a key for the current frame.
///
/// `Idle` means "no change this frame", which is not the same thing as an
/// explicit release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum KeyEdge {
    #[default]
    Idle,
    JustPressed,
    JustReleased,
}

impl KeyEdge {
    pub fn is_idle(self) -> bool {
        self == KeyEdge::Idle
    }

    pub fn is_just_pressed(self) -> bool {
        self == KeyEdge::JustPressed
    }

    pub fn is_just_released(self) -> bool {
        self == KeyEdge::JustReleased
    }
}

/// A physical key changing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyTransition {
    pub code: KeyCode,
    pub state: ElementState,
}

impl KeyTransition {
    pub fn pressed(code: KeyCode) -> Self {
        Self {
            code,
            state: ElementState::Pressed,
        }
    }

    pub fn released(code: KeyCode) -> Self {
        Self {
            code,
            state: ElementState::Released,
        }
    }
}

/// Anything a frame can drain from the platform layer.
///
/// The only thing the pump needs to know about an event is whether it is a
/// physical key transition; every other event is handed to pattern bindings
/// untouched.
pub trait PlatformEvent {
    /// The key transition carried by this event, if any.
    fn key_transition(&self) -> Option<KeyTransition>;

    /// Builds the event a platform would deliver for `transition`.
    ///
    /// Event types that cannot be synthesized (raw winit events) return `None`,
    /// which also opts them out of key/pattern overlap detection.
    fn from_key_transition(_transition: KeyTransition) -> Option<Self>
    where
        Self: Sized,
    {
        None
    }
}

/// Compact host-translated input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    Quit,
    Resized { width: u32, height: u32 },
    Focused(bool),
    MouseMoved { x: f64, y: f64 },
    MouseButton { button: MouseButton, state: ElementState },
}

impl InputEvent {
    /// Translate a winit window event. Returns `None` for events this layer
    /// does not track (IME, touch, redraw, keys without a physical code, ...).
    pub fn from_window_event(event: &WindowEvent) -> Option<Self> {
        match event {
            WindowEvent::CloseRequested => Some(InputEvent::Quit),
            WindowEvent::Resized(size) => Some(InputEvent::Resized {
                width: size.width,
                height: size.height,
            }),
            WindowEvent::Focused(focused) => Some(InputEvent::Focused(*focused)),
            WindowEvent::CursorMoved { position, .. } => Some(InputEvent::MouseMoved {
                x: position.x,
                y: position.y,
            }),
            WindowEvent::MouseInput { state, button, .. } => Some(InputEvent::MouseButton {
                button: *button,
                state: *state,
            }),
            WindowEvent::KeyboardInput { .. } => event
                .key_transition()
                .and_then(InputEvent::from_key_transition),
            _ => None,
        }
    }
}

impl PlatformEvent for InputEvent {
    fn key_transition(&self) -> Option<KeyTransition> {
        match *self {
            InputEvent::KeyDown(code) => Some(KeyTransition::pressed(code)),
            InputEvent::KeyUp(code) => Some(KeyTransition::released(code)),
            _ => None,
        }
    }

    fn from_key_transition(transition: KeyTransition) -> Option<Self> {
        Some(match transition.state {
            ElementState::Pressed => InputEvent::KeyDown(transition.code),
            ElementState::Released => InputEvent::KeyUp(transition.code),
        })
    }
}

impl PlatformEvent for WindowEvent {
    fn key_transition(&self) -> Option<KeyTransition> {
        match self {
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => Some(KeyTransition {
                    code,
                    state: event.state,
                }),
                _ => None,
            },
            _ => None,
        }
    }
}

impl<T> PlatformEvent for Event<T> {
    fn key_transition(&self) -> Option<KeyTransition> {
        match self {
            Event::WindowEvent { event, .. } => event.key_transition(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::{PhysicalPosition, PhysicalSize};
    use winit::event::DeviceId;

    #[test]
    fn key_edge_defaults_to_idle() {
        let edge = KeyEdge::default();
        assert!(edge.is_idle());
        assert!(!edge.is_just_pressed());
        assert!(!edge.is_just_released());
    }

    #[test]
    fn input_event_exposes_key_transitions() {
        assert_eq!(
            InputEvent::KeyDown(KeyCode::Escape).key_transition(),
            Some(KeyTransition::pressed(KeyCode::Escape))
        );
        assert_eq!(
            InputEvent::KeyUp(KeyCode::KeyW).key_transition(),
            Some(KeyTransition::released(KeyCode::KeyW))
        );
        assert_eq!(InputEvent::Quit.key_transition(), None);
        assert_eq!(InputEvent::Focused(false).key_transition(), None);
    }

    #[test]
    fn input_event_synthesizes_key_events() {
        assert_eq!(
            InputEvent::from_key_transition(KeyTransition::pressed(KeyCode::Space)),
            Some(InputEvent::KeyDown(KeyCode::Space))
        );
        assert_eq!(
            InputEvent::from_key_transition(KeyTransition::released(KeyCode::Space)),
            Some(InputEvent::KeyUp(KeyCode::Space))
        );
    }

    #[test]
    fn raw_winit_events_cannot_be_synthesized() {
        assert!(WindowEvent::from_key_transition(KeyTransition::pressed(KeyCode::KeyA)).is_none());
        assert!(WindowEvent::CloseRequested.key_transition().is_none());
    }

    #[test]
    fn translates_window_events() {
        assert_eq!(
            InputEvent::from_window_event(&WindowEvent::CloseRequested),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            InputEvent::from_window_event(&WindowEvent::Resized(PhysicalSize::new(640, 480))),
            Some(InputEvent::Resized {
                width: 640,
                height: 480
            })
        );
        assert_eq!(
            InputEvent::from_window_event(&WindowEvent::Focused(false)),
            Some(InputEvent::Focused(false))
        );
        assert_eq!(InputEvent::from_window_event(&WindowEvent::RedrawRequested), None);
    }

    #[test]
    fn translates_mouse_events() {
        // SAFETY: dummy device ids are only compared, never dereferenced.
        let device_id = unsafe { DeviceId::dummy() };

        let moved = WindowEvent::CursorMoved {
            device_id,
            position: PhysicalPosition::new(12.5, 40.0),
        };
        assert_eq!(
            InputEvent::from_window_event(&moved),
            Some(InputEvent::MouseMoved { x: 12.5, y: 40.0 })
        );

        let clicked = WindowEvent::MouseInput {
            device_id,
            state: ElementState::Pressed,
            button: MouseButton::Left,
        };
        assert_eq!(
            InputEvent::from_window_event(&clicked),
            Some(InputEvent::MouseButton {
                button: MouseButton::Left,
                state: ElementState::Pressed
            })
        );
    }
}
