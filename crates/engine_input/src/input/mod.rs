// crates/engine_input/src/input/mod.rs
pub mod config;
pub mod dynamic;
pub mod generate;
pub mod hazard;
pub mod poller;
pub mod pump;
pub mod recording;
pub mod registry;
pub mod source;

// Re-export core types to keep the API at `crate::input::*`
pub use config::{DefaultControls, DefaultControlsNow, InputDefaults};
pub use dynamic::{DynamicInputState, EdgeSnapshot, NowView};
pub use hazard::ConfigHazard;
pub use poller::InputPoller;
pub use pump::{pump_frame, FrameState, PumpStats};
pub use recording::InputRecording;
pub use registry::{named_pattern, parse_key_code, InputLayout, LayoutBuilder, PatternMatcher, Slot};
pub use source::{EventQueue, EventSource, IterSource};
