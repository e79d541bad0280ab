// crates/engine_input/src/input/hazard.rs

use std::fmt;

use engine_shared::{ElementState, KeyCode, KeyTransition, PlatformEvent};

/// A bound key whose events would also satisfy a pattern binding.
///
/// Key bindings are checked first, so the pattern never sees these events.
/// Reported, never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigHazard {
    pub key_alias: String,
    pub key: KeyCode,
    pub pattern_alias: String,
    pub state: ElementState,
}

impl fmt::Display for ConfigHazard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "key `{}` ({:?}) overlaps pattern `{}` on {:?}",
            self.key_alias, self.key, self.pattern_alias, self.state
        )
    }
}

/// Synthesize the press and release of every bound key and collect the
/// patterns that would match them.
///
/// Event types that cannot synthesize key events yield no hazards.
pub fn scan<E, K, P, F>(keys: &[(K, KeyCode)], mut matching: F) -> Vec<ConfigHazard>
where
    E: PlatformEvent,
    K: AsRef<str>,
    P: AsRef<str>,
    F: FnMut(&E) -> Vec<P>,
{
    let mut hazards = Vec::new();

    for (alias, code) in keys {
        for transition in [KeyTransition::pressed(*code), KeyTransition::released(*code)] {
            let Some(event) = E::from_key_transition(transition) else {
                continue;
            };
            for pattern in matching(&event) {
                hazards.push(ConfigHazard {
                    key_alias: alias.as_ref().to_string(),
                    key: *code,
                    pattern_alias: pattern.as_ref().to_string(),
                    state: transition.state,
                });
            }
        }
    }

    hazards
}

/// Log each hazard once at warn level.
pub fn report(owner: &str, hazards: &[ConfigHazard]) {
    for hazard in hazards {
        tracing::warn!(layout = owner, "input binding hazard: {}", hazard);
    }
}
