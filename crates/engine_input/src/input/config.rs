// crates/engine_input/src/input/config.rs

use engine_shared::{InputEvent, KeyCode};

use super::registry::InputLayout;
use crate::error::Result;

crate::input_state! {
    /// Canonical controls most games start from: WASD movement, jump,
    /// pause, and the window-level catch-alls.
    pub struct DefaultControls for InputEvent {
        now: DefaultControlsNow,
        keys {
            move_up: KeyCode::KeyW,
            move_down: KeyCode::KeyS,
            move_left: KeyCode::KeyA,
            move_right: KeyCode::KeyD,
            jump: KeyCode::Space,
            escape: KeyCode::Escape,
        }
        patterns {
            quit: InputEvent::Quit,
            focus_lost: InputEvent::Focused(false),
            resized: InputEvent::Resized { .. },
        }
    }
}

/// Centralized defaults for input configuration.
pub struct InputDefaults;

impl InputDefaults {
    pub fn controls() -> DefaultControls {
        DefaultControls::new()
    }

    /// The same bindings as [`DefaultControls`], assembled at init time so
    /// they can be extended or remapped before building.
    pub fn layout() -> Result<InputLayout<InputEvent>> {
        InputLayout::builder()
            .bind_key("move_up", KeyCode::KeyW)
            .bind_key("move_down", KeyCode::KeyS)
            .bind_key("move_left", KeyCode::KeyA)
            .bind_key("move_right", KeyCode::KeyD)
            .bind_key("jump", KeyCode::Space)
            .bind_key("escape", KeyCode::Escape)
            .bind_pattern_named("quit", "quit")
            .bind_pattern_named("focus_lost", "focus_lost")
            .bind_pattern_named("resized", "resized")
            .build()
    }
}
