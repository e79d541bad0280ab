// crates/engine_input/src/input/registry.rs

use std::collections::HashMap;

use engine_shared::{ElementState, InputEvent, KeyCode, PlatformEvent};
use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::IntoDeserializer;
use serde::Deserialize;

use super::hazard::{self, ConfigHazard};
use crate::error::{ConfigError, Result};

/// Predicate used by a runtime pattern binding.
pub type PatternMatcher<E> = fn(&E) -> bool;

/// Where an alias lives inside a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Key(usize),
    Pattern(usize),
}

/// Init-time equivalent of an `input_state!` declaration.
pub struct InputLayout<E> {
    keys: Vec<(String, KeyCode)>,
    patterns: Vec<(String, PatternMatcher<E>)>,
    name_to_slot: HashMap<String, Slot>,
}

impl<E> Clone for InputLayout<E> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
            patterns: self.patterns.clone(),
            name_to_slot: self.name_to_slot.clone(),
        }
    }
}

impl<E> InputLayout<E> {
    pub fn builder() -> LayoutBuilder<E> {
        LayoutBuilder::new()
    }

    pub fn slot(&self, alias: &str) -> Option<Slot> {
        self.name_to_slot.get(alias).copied()
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn key_bindings(&self) -> &[(String, KeyCode)] {
        &self.keys
    }

    pub fn key_aliases(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|(alias, _)| alias.as_str())
    }

    pub fn pattern_aliases(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|(alias, _)| alias.as_str())
    }

    pub(crate) fn patterns(&self) -> &[(String, PatternMatcher<E>)] {
        &self.patterns
    }

    /// Aliases of every pattern binding that `event` satisfies.
    pub fn matching_patterns(&self, event: &E) -> Vec<&str> {
        self.patterns
            .iter()
            .filter(|(_, matcher)| matcher(event))
            .map(|(alias, _)| alias.as_str())
            .collect()
    }
}

impl<E: PlatformEvent> InputLayout<E> {
    pub fn hazards(&self) -> Vec<ConfigHazard> {
        hazard::scan::<E, _, _, _>(&self.keys, |event: &E| self.matching_patterns(event))
    }
}

/// Collects bindings and validates them; the first mistake wins.
pub struct LayoutBuilder<E> {
    keys: Vec<(String, KeyCode)>,
    patterns: Vec<(String, PatternMatcher<E>)>,
    name_to_slot: HashMap<String, Slot>,
    error: Option<ConfigError>,
}

impl<E> LayoutBuilder<E> {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            patterns: Vec::new(),
            name_to_slot: HashMap::new(),
            error: None,
        }
    }

    pub fn bind_key(mut self, alias: &str, code: KeyCode) -> Self {
        if self.claim(alias, Slot::Key(self.keys.len())) {
            self.keys.push((alias.to_string(), code));
        }
        self
    }

    /// Bind a key by its winit name, e.g. `"KeyW"` or `"Escape"`.
    pub fn bind_key_named(self, alias: &str, name: &str) -> Self {
        match parse_key_code(name) {
            Some(code) => self.bind_key(alias, code),
            None => self.fail(ConfigError::UnknownKeyCode {
                alias: alias.to_string(),
                name: name.to_string(),
            }),
        }
    }

    pub fn bind_pattern(mut self, alias: &str, matcher: PatternMatcher<E>) -> Self {
        if self.claim(alias, Slot::Pattern(self.patterns.len())) {
            self.patterns.push((alias.to_string(), matcher));
        }
        self
    }

    pub fn build(self) -> Result<InputLayout<E>>
    where
        E: PlatformEvent,
    {
        if let Some(error) = self.error {
            return Err(error);
        }

        let layout = InputLayout {
            keys: self.keys,
            patterns: self.patterns,
            name_to_slot: self.name_to_slot,
        };
        tracing::debug!(
            keys = layout.key_count(),
            patterns = layout.pattern_count(),
            "input layout built"
        );
        hazard::report("InputLayout", &layout.hazards());
        Ok(layout)
    }

    fn claim(&mut self, alias: &str, slot: Slot) -> bool {
        if self.error.is_some() {
            return false;
        }
        if !is_identifier(alias) {
            self.error = Some(ConfigError::InvalidAlias(alias.to_string()));
            return false;
        }
        if self.name_to_slot.contains_key(alias) {
            self.error = Some(ConfigError::DuplicateAlias(alias.to_string()));
            return false;
        }
        self.name_to_slot.insert(alias.to_string(), slot);
        true
    }

    fn fail(mut self, error: ConfigError) -> Self {
        if self.error.is_none() {
            self.error = Some(error);
        }
        self
    }
}

impl<E> Default for LayoutBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutBuilder<InputEvent> {
    /// Bind one of the named `InputEvent` catch-alls (see [`named_pattern`]).
    pub fn bind_pattern_named(self, alias: &str, pattern: &str) -> Self {
        match named_pattern(pattern) {
            Some(matcher) => self.bind_pattern(alias, matcher),
            None => self.fail(ConfigError::InvalidPattern {
                alias: alias.to_string(),
                pattern: pattern.to_string(),
            }),
        }
    }
}

/// Resolve a catch-all pattern over `InputEvent` by name.
///
/// Known names: `quit`, `resized`, `focus_gained`, `focus_lost`,
/// `mouse_moved`, `mouse_button`, `mouse_pressed`, `any_key_down`,
/// `any_key_up`.
pub fn named_pattern(name: &str) -> Option<PatternMatcher<InputEvent>> {
    let matcher: PatternMatcher<InputEvent> = match name {
        "quit" => |event: &InputEvent| matches!(event, InputEvent::Quit),
        "resized" => |event: &InputEvent| matches!(event, InputEvent::Resized { .. }),
        "focus_gained" => |event: &InputEvent| matches!(event, InputEvent::Focused(true)),
        "focus_lost" => |event: &InputEvent| matches!(event, InputEvent::Focused(false)),
        "mouse_moved" => |event: &InputEvent| matches!(event, InputEvent::MouseMoved { .. }),
        "mouse_button" => |event: &InputEvent| matches!(event, InputEvent::MouseButton { .. }),
        "mouse_pressed" => |event: &InputEvent| {
            matches!(
                event,
                InputEvent::MouseButton {
                    state: ElementState::Pressed,
                    ..
                }
            )
        },
        "any_key_down" => |event: &InputEvent| matches!(event, InputEvent::KeyDown(_)),
        "any_key_up" => |event: &InputEvent| matches!(event, InputEvent::KeyUp(_)),
        _ => return None,
    };
    Some(matcher)
}

/// Look up a winit key code by its variant name.
pub fn parse_key_code(name: &str) -> Option<KeyCode> {
    let deserializer: StrDeserializer<'_, ValueError> = name.into_deserializer();
    KeyCode::deserialize(deserializer).ok()
}

fn is_identifier(alias: &str) -> bool {
    let mut chars = alias.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
