// crates/engine_input/src/input/pump.rs

use engine_shared::{ElementState, KeyEdge, KeyTransition, PlatformEvent};

use super::source::EventSource;

/// Storage that a frame pump can drive.
///
/// Implemented by every `input_state!` type and by `DynamicInputState`, so
/// both share one drain algorithm.
pub trait FrameState {
    type Event: PlatformEvent;

    /// Reset the edge snapshot to its zero value.
    fn begin_frame(&mut self);

    /// Apply a transition to every binding whose source key matches.
    /// Returns false when no binding uses `transition.code`.
    fn apply_key(&mut self, transition: KeyTransition) -> bool;

    /// Flag every pattern binding that matches `event`.
    /// Returns false when none matched.
    fn apply_patterns(&mut self, event: &Self::Event) -> bool;
}

/// Counters for a single pump call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PumpStats {
    pub drained: usize,
    pub key_events: usize,
    pub pattern_events: usize,
    pub discarded: usize,
}

/// Update one key binding's level and edge state.
///
/// A press on a key that is already held is a platform repeat and leaves both
/// values untouched. A release always lands.
pub fn apply_transition(alias: &str, held: &mut bool, edge: &mut KeyEdge, state: ElementState) {
    match state {
        ElementState::Pressed => {
            if *held {
                return;
            }
            *held = true;
            *edge = KeyEdge::JustPressed;
        }
        ElementState::Released => {
            *held = false;
            *edge = KeyEdge::JustReleased;
        }
    }
    tracing::trace!(binding = alias, edge = ?*edge, "key transition");
}

/// Run one frame: zero the edge snapshot, then drain `source` in FIFO order.
///
/// Bound key transitions take precedence; anything else is offered to the
/// pattern bindings, and events nobody claims are dropped.
pub fn pump_frame<S, Src>(state: &mut S, source: &mut Src) -> PumpStats
where
    S: FrameState + ?Sized,
    Src: EventSource<S::Event> + ?Sized,
{
    state.begin_frame();

    let mut stats = PumpStats::default();
    while let Some(event) = source.poll_event() {
        stats.drained += 1;

        if let Some(transition) = event.key_transition() {
            if state.apply_key(transition) {
                stats.key_events += 1;
                continue;
            }
        }

        if state.apply_patterns(&event) {
            stats.pattern_events += 1;
        } else {
            stats.discarded += 1;
        }
    }

    if stats.drained > 0 {
        tracing::trace!(
            drained = stats.drained,
            keys = stats.key_events,
            patterns = stats.pattern_events,
            discarded = stats.discarded,
            "input frame pumped"
        );
    }

    stats
}
