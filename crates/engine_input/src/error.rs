// crates/engine_input/src/error.rs

use thiserror::Error;

/// Result alias for layout construction.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Problems detected while assembling an input layout.
///
/// `input_state!` reports the same mistakes as compile errors; these values
/// only come out of the init-time `LayoutBuilder`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("alias `{0}` is declared more than once")]
    DuplicateAlias(String),

    #[error("alias `{0}` is not a valid identifier")]
    InvalidAlias(String),

    #[error("unknown key code `{name}` for alias `{alias}`")]
    UnknownKeyCode { alias: String, name: String },

    #[error("invalid event pattern `{pattern}` for alias `{alias}`")]
    InvalidPattern { alias: String, pattern: String },
}

/// Failures while encoding or decoding an input recording.
#[derive(Debug, Error)]
pub enum RecordingError {
    #[error("failed to encode input recording: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode input recording: {0}")]
    Decode(#[source] bincode::Error),
}
