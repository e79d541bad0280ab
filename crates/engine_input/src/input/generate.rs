// crates/engine_input/src/input/generate.rs
//! Compile-time generation of per-frame input state.

/// Generate a level-state type and its per-frame edge snapshot from a list of
/// named key bindings and named event patterns.
///
/// ```
/// use engine_input::{input_state, EventQueue, InputEvent, KeyCode, KeyEdge};
///
/// input_state! {
///     /// Menu controls.
///     pub struct MenuInput for InputEvent {
///         now: MenuNow,
///         keys {
///             escape: KeyCode::Escape,
///             confirm: KeyCode::Enter,
///         }
///         patterns {
///             quit: InputEvent::Quit,
///         }
///     }
/// }
///
/// let mut input = MenuInput::new();
/// let mut queue: EventQueue<InputEvent> = [InputEvent::KeyDown(KeyCode::Escape)].into_iter().collect();
/// input.pump(&mut queue);
///
/// assert!(input.escape);
/// assert_eq!(input.now.escape, KeyEdge::JustPressed);
/// assert!(!input.now.quit);
/// ```
///
/// Generated items:
/// - the state struct: one `pub bool` per key (held) plus `pub now`;
/// - the snapshot struct: one `pub KeyEdge` per key, one `pub bool` per pattern;
/// - `pump(&mut source)`, which zeroes `now` and drains `source` once;
/// - introspection helpers (`key_bindings`, `matching_patterns`, `held_keys`,
///   `configuration_hazards`, ...).
///
/// Key codes are arbitrary expressions comparable to `KeyCode`; patterns are
/// ordinary Rust patterns over the event type. Bound keys are checked before
/// patterns, and every pattern that matches an event is flagged.
///
/// Configuration mistakes are compile errors. An alias used twice:
///
/// ```compile_fail
/// use engine_input::{input_state, InputEvent, KeyCode};
///
/// input_state! {
///     struct Twice for InputEvent {
///         now: TwiceNow,
///         keys { quit: KeyCode::Escape }
///         patterns { quit: InputEvent::Quit }
///     }
/// }
/// ```
///
/// An unknown key code:
///
/// ```compile_fail
/// use engine_input::{input_state, InputEvent, KeyCode};
///
/// input_state! {
///     struct Typo for InputEvent {
///         now: TypoNow,
///         keys { escape: KeyCode::Esc }
///         patterns {}
///     }
/// }
/// ```
///
/// A pattern that does not fit the event type:
///
/// ```compile_fail
/// use engine_input::{input_state, InputEvent};
///
/// input_state! {
///     struct Broken for InputEvent {
///         now: BrokenNow,
///         keys {}
///         patterns { quit: InputEvent::Quitting }
///     }
/// }
/// ```
///
/// `now` is reserved for the snapshot field:
///
/// ```compile_fail
/// use engine_input::{input_state, InputEvent, KeyCode};
///
/// input_state! {
///     struct Clash for InputEvent {
///         now: ClashNow,
///         keys { now: KeyCode::KeyN }
///         patterns {}
///     }
/// }
/// ```
#[macro_export]
macro_rules! input_state {
    (
        $(#[$meta:meta])*
        $vis:vis struct $State:ident for $Event:ty {
            now: $Now:ident,
            keys {
                $( $(#[$key_meta:meta])* $key:ident : $code:expr ),* $(,)?
            }
            patterns {
                $( $(#[$pattern_meta:meta])* $pattern:ident : $pat:pat ),* $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Default)]
        $vis struct $State {
            $( $(#[$key_meta])* pub $key: bool, )*
            /// Transitions seen during the most recent `pump`.
            pub now: $Now,
        }

        #[doc = concat!("Per-frame edge snapshot of [`", stringify!($State), "`].")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        $vis struct $Now {
            $( pub $key: $crate::KeyEdge, )*
            $( $(#[$pattern_meta])* pub $pattern: bool, )*
        }

        impl $Now {
            pub const KEY_ALIASES: &'static [&'static str] = &[$(stringify!($key)),*];
            pub const PATTERN_ALIASES: &'static [&'static str] = &[$(stringify!($pattern)),*];

            /// True when nothing happened this frame.
            pub fn is_idle(&self) -> bool {
                true $(&& self.$key.is_idle())* $(&& !self.$pattern)*
            }

            pub fn key_edges(&self) -> ::std::vec::Vec<(&'static str, $crate::KeyEdge)> {
                ::std::vec![$((stringify!($key), self.$key)),*]
            }

            pub fn pattern_hits(&self) -> ::std::vec::Vec<(&'static str, bool)> {
                ::std::vec![$((stringify!($pattern), self.$pattern)),*]
            }
        }

        impl $State {
            /// All keys unheld, nothing pressed this frame. Overlapping
            /// key/pattern bindings are logged as warnings.
            pub fn new() -> Self {
                $crate::input::hazard::report(stringify!($State), &Self::configuration_hazards());
                Self::default()
            }

            /// Drain everything `source` has queued for this frame.
            pub fn pump<S>(&mut self, source: &mut S)
            where
                S: $crate::EventSource<$Event> + ?Sized,
            {
                $crate::input::pump::pump_frame(self, source);
            }

            pub fn key_bindings() -> ::std::vec::Vec<(&'static str, $crate::KeyCode)> {
                ::std::vec![$((stringify!($key), $code)),*]
            }

            /// Aliases of every pattern binding that `event` satisfies.
            #[allow(unused_variables, unused_mut)]
            pub fn matching_patterns(event: &$Event) -> ::std::vec::Vec<&'static str> {
                let mut hits = ::std::vec::Vec::new();
                $(
                    if ::core::matches!(event, $pat) {
                        hits.push(stringify!($pattern));
                    }
                )*
                hits
            }

            pub fn held_keys(&self) -> ::std::vec::Vec<(&'static str, bool)> {
                ::std::vec![$((stringify!($key), self.$key)),*]
            }

            pub fn held_count(&self) -> usize {
                0 $(+ usize::from(self.$key))*
            }

            pub fn configuration_hazards() -> ::std::vec::Vec<$crate::ConfigHazard> {
                $crate::input::hazard::scan::<$Event, _, _, _>(
                    &Self::key_bindings(),
                    Self::matching_patterns,
                )
            }
        }

        impl $crate::FrameState for $State {
            type Event = $Event;

            fn begin_frame(&mut self) {
                self.now = $Now::default();
            }

            #[allow(unused_variables, unused_mut)]
            fn apply_key(&mut self, transition: $crate::KeyTransition) -> bool {
                let mut bound = false;
                $(
                    if transition.code == $code {
                        $crate::input::pump::apply_transition(
                            stringify!($key),
                            &mut self.$key,
                            &mut self.now.$key,
                            transition.state,
                        );
                        bound = true;
                    }
                )*
                bound
            }

            #[allow(unused_variables, unused_mut)]
            fn apply_patterns(&mut self, event: &$Event) -> bool {
                let mut matched = false;
                $(
                    if ::core::matches!(event, $pat) {
                        self.now.$pattern = true;
                        matched = true;
                    }
                )*
                matched
            }
        }
    };
}
