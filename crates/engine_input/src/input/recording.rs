// crates/engine_input/src/input/recording.rs

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::source::{EventQueue, EventSource};
use crate::error::RecordingError;

/// Per-frame event capture for deterministic replay.
///
/// Each entry is exactly what one `pump` drained, in arrival order. Pumping
/// the frames back into a fresh state reproduces the recorded run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputRecording<E> {
    frames: Vec<Vec<E>>,
}

impl<E> InputRecording<E> {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn record_frame<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = E>,
    {
        self.frames.push(events.into_iter().collect());
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame(&self, index: usize) -> Option<&[E]> {
        self.frames.get(index).map(Vec::as_slice)
    }

    /// Consume the recording, one queue per recorded frame.
    pub fn into_frames(self) -> impl Iterator<Item = EventQueue<E>> {
        self.frames.into_iter().map(EventQueue::from_iter)
    }
}

impl<E: Clone> InputRecording<E> {
    /// Drain `source`, remember what came out, and hand it back as this
    /// frame's queue.
    pub fn capture<S>(&mut self, source: &mut S) -> EventQueue<E>
    where
        S: EventSource<E> + ?Sized,
    {
        let mut events = Vec::new();
        while let Some(event) = source.poll_event() {
            events.push(event);
        }
        let queue = events.iter().cloned().collect();
        self.frames.push(events);
        queue
    }

    pub fn frames(&self) -> impl Iterator<Item = EventQueue<E>> + '_ {
        self.frames.iter().map(|events| events.iter().cloned().collect())
    }
}

impl<E: Serialize> InputRecording<E> {
    pub fn to_bytes(&self) -> Result<Vec<u8>, RecordingError> {
        bincode::serialize(self).map_err(RecordingError::Encode)
    }
}

impl<E: DeserializeOwned> InputRecording<E> {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordingError> {
        bincode::deserialize(bytes).map_err(RecordingError::Decode)
    }
}

impl<E> Default for InputRecording<E> {
    fn default() -> Self {
        Self::new()
    }
}
