// determinism.rs - property tests over random frame sequences

use engine_input::{
    DefaultControls, DynamicInputState, EventQueue, InputDefaults, InputEvent, InputRecording,
    KeyCode, KeyEdge,
};
use proptest::prelude::*;

fn event_strategy() -> impl Strategy<Value = InputEvent> {
    prop::sample::select(vec![
        InputEvent::KeyDown(KeyCode::KeyW),
        InputEvent::KeyUp(KeyCode::KeyW),
        InputEvent::KeyDown(KeyCode::Space),
        InputEvent::KeyUp(KeyCode::Space),
        InputEvent::KeyDown(KeyCode::Escape),
        InputEvent::KeyUp(KeyCode::Escape),
        // Not bound by the default controls.
        InputEvent::KeyDown(KeyCode::KeyQ),
        InputEvent::Quit,
        InputEvent::Focused(false),
        InputEvent::Focused(true),
        InputEvent::Resized {
            width: 320,
            height: 240,
        },
    ])
}

fn frames_strategy() -> impl Strategy<Value = Vec<Vec<InputEvent>>> {
    prop::collection::vec(prop::collection::vec(event_strategy(), 0..6), 0..16)
}

fn run(frames: &[Vec<InputEvent>]) -> Vec<DefaultControls> {
    let mut controls = DefaultControls::new();
    frames
        .iter()
        .map(|events| {
            let mut queue: EventQueue<InputEvent> = events.iter().cloned().collect();
            controls.pump(&mut queue);
            controls.clone()
        })
        .collect()
}

fn code_of(alias: &str) -> KeyCode {
    DefaultControls::key_bindings()
        .into_iter()
        .find(|(name, _)| *name == alias)
        .map(|(_, code)| code)
        .unwrap_or_else(|| panic!("unknown alias {alias}"))
}

proptest! {
    #[test]
    fn same_sequence_same_state(frames in frames_strategy()) {
        prop_assert_eq!(run(&frames), run(&frames));
    }

    #[test]
    fn generated_and_runtime_layouts_agree(frames in frames_strategy()) {
        let mut generated = DefaultControls::new();
        let mut dynamic = DynamicInputState::new(InputDefaults::layout().expect("defaults are valid"));

        for events in &frames {
            generated.pump(&mut events.iter().cloned().collect::<EventQueue<_>>());
            dynamic.pump(&mut events.iter().cloned().collect::<EventQueue<_>>());

            let held: Vec<bool> = generated.held_keys().into_iter().map(|(_, held)| held).collect();
            prop_assert_eq!(held.as_slice(), dynamic.held_flags());

            let edges: Vec<KeyEdge> = generated.now.key_edges().into_iter().map(|(_, edge)| edge).collect();
            prop_assert_eq!(edges.as_slice(), dynamic.now().snapshot().key_edges());

            let hits: Vec<bool> = generated.now.pattern_hits().into_iter().map(|(_, hit)| hit).collect();
            prop_assert_eq!(hits.as_slice(), dynamic.now().snapshot().pattern_hits());
        }
    }

    #[test]
    fn edges_agree_with_held_flags(frames in frames_strategy()) {
        let mut previous = DefaultControls::new();

        for (events, state) in frames.iter().zip(run(&frames)) {
            for ((alias, edge), (_, held)) in state.now.key_edges().into_iter().zip(state.held_keys()) {
                let code = code_of(alias);
                let was_held = previous
                    .held_keys()
                    .into_iter()
                    .find(|(name, _)| *name == alias)
                    .map(|(_, held)| held)
                    .unwrap_or(false);
                let pressed = events.contains(&InputEvent::KeyDown(code));
                let released = events.contains(&InputEvent::KeyUp(code));

                match edge {
                    KeyEdge::JustPressed => {
                        prop_assert!(held);
                        prop_assert!(pressed);
                    }
                    KeyEdge::JustReleased => {
                        prop_assert!(!held);
                        prop_assert!(released);
                    }
                    KeyEdge::Idle => {
                        prop_assert!(!released);
                        prop_assert_eq!(held, was_held);
                    }
                }
                // A key held across the whole frame never re-reports a press.
                if was_held && !released {
                    prop_assert_ne!(edge, KeyEdge::JustPressed);
                }
            }

            prop_assert_eq!(state.now.quit, events.contains(&InputEvent::Quit));
            prop_assert_eq!(state.now.focus_lost, events.contains(&InputEvent::Focused(false)));
            previous = state;
        }
    }

    #[test]
    fn replayed_recording_reproduces_run(frames in frames_strategy()) {
        let mut recording = InputRecording::new();
        let mut live = DefaultControls::new();
        for events in &frames {
            let mut source: EventQueue<InputEvent> = events.iter().cloned().collect();
            let mut captured = recording.capture(&mut source);
            live.pump(&mut captured);
        }

        let bytes = recording.to_bytes().expect("recording encodes");
        let decoded = InputRecording::<InputEvent>::from_bytes(&bytes).expect("recording decodes");
        prop_assert_eq!(&decoded, &recording);

        let mut replayed = DefaultControls::new();
        for mut queue in decoded.into_frames() {
            replayed.pump(&mut queue);
        }
        prop_assert_eq!(replayed, live);
    }
}
