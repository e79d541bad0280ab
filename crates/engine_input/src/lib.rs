// crates/engine_input/src/lib.rs
//! Per-frame keyboard and event state for a game loop.
//!
//! [`input_state!`] turns a list of key bindings and event patterns into a
//! held-key struct plus an edge snapshot that `pump` refreshes once per frame.
//! [`InputLayout`] and [`DynamicInputState`] offer the same contract for
//! bindings assembled at init time.

pub mod error;
pub mod input;

pub use engine_shared::input_types::{
    ElementState, InputEvent, KeyCode, KeyEdge, KeyTransition, MouseButton, PlatformEvent,
};
pub use error::{ConfigError, RecordingError, Result};
pub use input::{
    ConfigHazard, DefaultControls, DefaultControlsNow, DynamicInputState, EventQueue, EventSource,
    FrameState, InputDefaults, InputLayout, InputPoller, InputRecording, IterSource, LayoutBuilder,
    PumpStats,
};
