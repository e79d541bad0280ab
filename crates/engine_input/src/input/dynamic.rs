// crates/engine_input/src/input/dynamic.rs

use engine_shared::{KeyEdge, KeyTransition, PlatformEvent};

use super::pump::{self, FrameState};
use super::registry::{InputLayout, Slot};
use super::source::EventSource;

/// Edge snapshot of a runtime layout, indexed by binding position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EdgeSnapshot {
    keys: Vec<KeyEdge>,
    patterns: Vec<bool>,
}

impl EdgeSnapshot {
    fn zeroed(keys: usize, patterns: usize) -> Self {
        Self {
            keys: vec![KeyEdge::Idle; keys],
            patterns: vec![false; patterns],
        }
    }

    fn reset(&mut self) {
        self.keys.fill(KeyEdge::Idle);
        self.patterns.fill(false);
    }

    pub fn key_edges(&self) -> &[KeyEdge] {
        &self.keys
    }

    pub fn pattern_hits(&self) -> &[bool] {
        &self.patterns
    }

    pub fn is_idle(&self) -> bool {
        self.keys.iter().all(|edge| edge.is_idle()) && !self.patterns.iter().any(|hit| *hit)
    }
}

/// Alias-addressed view of the current frame's edges.
pub struct NowView<'a, E> {
    layout: &'a InputLayout<E>,
    snapshot: &'a EdgeSnapshot,
}

impl<'a, E> NowView<'a, E> {
    pub fn key(&self, alias: &str) -> Option<KeyEdge> {
        match self.layout.slot(alias)? {
            Slot::Key(index) => self.snapshot.keys.get(index).copied(),
            Slot::Pattern(_) => None,
        }
    }

    pub fn pattern(&self, alias: &str) -> Option<bool> {
        match self.layout.slot(alias)? {
            Slot::Pattern(index) => self.snapshot.patterns.get(index).copied(),
            Slot::Key(_) => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.snapshot.is_idle()
    }

    pub fn snapshot(&self) -> &'a EdgeSnapshot {
        self.snapshot
    }
}

/// Input state driven by an [`InputLayout`] assembled at init time.
///
/// Same contract as an `input_state!` type, with lookups by alias instead of
/// fields.
pub struct DynamicInputState<E> {
    layout: InputLayout<E>,
    held: Vec<bool>,
    now: EdgeSnapshot,
}

impl<E> Clone for DynamicInputState<E> {
    fn clone(&self) -> Self {
        Self {
            layout: self.layout.clone(),
            held: self.held.clone(),
            now: self.now.clone(),
        }
    }
}

impl<E: PlatformEvent> DynamicInputState<E> {
    pub fn new(layout: InputLayout<E>) -> Self {
        let held = vec![false; layout.key_count()];
        let now = EdgeSnapshot::zeroed(layout.key_count(), layout.pattern_count());
        Self { layout, held, now }
    }

    pub fn layout(&self) -> &InputLayout<E> {
        &self.layout
    }

    /// Held flag for a key alias; `None` for unknown or pattern aliases.
    pub fn held(&self, alias: &str) -> Option<bool> {
        match self.layout.slot(alias)? {
            Slot::Key(index) => self.held.get(index).copied(),
            Slot::Pattern(_) => None,
        }
    }

    pub fn held_flags(&self) -> &[bool] {
        &self.held
    }

    pub fn held_count(&self) -> usize {
        self.held.iter().filter(|held| **held).count()
    }

    pub fn now(&self) -> NowView<'_, E> {
        NowView {
            layout: &self.layout,
            snapshot: &self.now,
        }
    }

    /// Drain everything `source` has queued for this frame.
    pub fn pump<S>(&mut self, source: &mut S)
    where
        S: EventSource<E> + ?Sized,
    {
        pump::pump_frame(self, source);
    }
}

impl<E: PlatformEvent> FrameState for DynamicInputState<E> {
    type Event = E;

    fn begin_frame(&mut self) {
        self.now.reset();
    }

    fn apply_key(&mut self, transition: KeyTransition) -> bool {
        let mut bound = false;
        for (index, (alias, code)) in self.layout.key_bindings().iter().enumerate() {
            if *code == transition.code {
                pump::apply_transition(
                    alias,
                    &mut self.held[index],
                    &mut self.now.keys[index],
                    transition.state,
                );
                bound = true;
            }
        }
        bound
    }

    fn apply_patterns(&mut self, event: &E) -> bool {
        let mut matched = false;
        for (index, (_, matcher)) in self.layout.patterns().iter().enumerate() {
            if matcher(event) {
                self.now.patterns[index] = true;
                matched = true;
            }
        }
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::source::EventQueue;
    use engine_shared::{InputEvent, KeyCode};

    fn layout() -> InputLayout<InputEvent> {
        InputLayout::builder()
            .bind_key("escape", KeyCode::Escape)
            .bind_pattern_named("quit", "quit")
            .build()
            .expect("layout is valid")
    }

    #[test]
    fn lookups_reject_wrong_kind_of_alias() {
        let state = DynamicInputState::new(layout());
        assert_eq!(state.held("escape"), Some(false));
        assert_eq!(state.held("quit"), None);
        assert_eq!(state.now().key("quit"), None);
        assert_eq!(state.now().pattern("escape"), None);
        assert_eq!(state.now().pattern("missing"), None);
    }

    #[test]
    fn reset_reuses_snapshot_shape() {
        let mut state = DynamicInputState::new(layout());
        let mut queue: EventQueue<InputEvent> =
            [InputEvent::KeyDown(KeyCode::Escape), InputEvent::Quit].into_iter().collect();
        state.pump(&mut queue);
        assert!(!state.now().is_idle());

        state.pump(&mut EventQueue::<InputEvent>::new());
        let snapshot = state.now().snapshot();
        assert_eq!(snapshot.key_edges(), &[KeyEdge::Idle]);
        assert_eq!(snapshot.pattern_hits(), &[false]);
        assert_eq!(state.held_count(), 1);
    }
}
