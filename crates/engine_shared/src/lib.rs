// crates/engine_shared/src/lib.rs

pub mod input_types;

pub use input_types::{
    ElementState, InputEvent, KeyCode, KeyEdge, KeyTransition, MouseButton, PlatformEvent,
};
