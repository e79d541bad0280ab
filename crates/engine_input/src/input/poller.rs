// crates/engine_input/src/input/poller.rs

use engine_shared::InputEvent;
use winit::event::{Event, WindowEvent};

use super::source::{EventQueue, EventSource};

/// Low-level collector between winit and the frame pump.
/// Translates window events as they arrive and holds them until the next
/// `pump`, so raw device state stays out of the game loop.
#[derive(Debug, Default)]
pub struct InputPoller {
    queue: EventQueue<InputEvent>,
    ignored: usize,
}

impl InputPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a single winit WindowEvent. Returns false when the event is not
    /// something the input layer tracks.
    pub fn handle_event(&mut self, event: &WindowEvent) -> bool {
        match InputEvent::from_window_event(event) {
            Some(input_event) => {
                self.queue.push(input_event);
                true
            }
            None => {
                self.ignored += 1;
                false
            }
        }
    }

    /// Same as `handle_event`, for the top-level loop event.
    pub fn handle_platform_event<T>(&mut self, event: &Event<T>) -> bool {
        match event {
            Event::WindowEvent { event, .. } => self.handle_event(event),
            _ => false,
        }
    }

    /// Queue an already-translated event (scripted input, replays).
    pub fn push(&mut self, event: InputEvent) {
        self.queue.push(event);
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Window events dropped since the poller was created.
    pub fn ignored(&self) -> usize {
        self.ignored
    }
}

impl EventSource<InputEvent> for InputPoller {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.queue.poll_event()
    }
}
