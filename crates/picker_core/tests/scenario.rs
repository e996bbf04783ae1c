use std::sync::Once;

use picker_core::{update, AppState, Character, Effect, Msg, DEFAULT_DEBOUNCE};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn seeded_catalog() -> Vec<Character> {
    ["Rick Sanchez", "Morty Smith", "Summer Smith", "Beth Smith", "Jerry Smith"]
        .iter()
        .enumerate()
        .map(|(index, name)| Character {
            id: index as u64 + 1,
            name: name.to_string(),
            image: format!(
                "https://rickandmortyapi.com/api/character/avatar/{}.jpeg",
                index + 1
            ),
            episode: vec!["https://rickandmortyapi.com/api/episode/1".to_string()],
        })
        .collect()
}

#[test]
fn typing_then_failing_keeps_seeded_list_and_notifies_once() {
    init_logging();
    let state = AppState::new(seeded_catalog(), DEFAULT_DEBOUNCE);
    assert!(!state.view().rows().is_empty());

    let mut state = state;
    let mut pending_timer = None;
    for text in ["r", "ri", "ric", "rick"] {
        let (next, effects) = update(state, Msg::FilterEdited(text.to_string()));
        state = next;
        for effect in effects {
            match effect {
                Effect::CancelTimer { token } => {
                    assert_eq!(pending_timer.take(), Some(token));
                }
                Effect::StartTimer { token, delay } => {
                    assert_eq!(delay, DEFAULT_DEBOUNCE);
                    pending_timer = Some(token);
                }
                other => panic!("unexpected effect {other:?}"),
            }
        }
    }

    let token = pending_timer.expect("one live timer");
    let (state, effects) = update(state, Msg::DebounceElapsed(token));
    let searches: Vec<_> = effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Search { dispatch, name } => Some((*dispatch, name.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(searches, vec![(1, Some("rick".to_string()))]);

    let (state, effects) = update(
        state,
        Msg::SearchFailed {
            dispatch: 1,
            message: "upstream unavailable".to_string(),
        },
    );
    let notifications = effects
        .iter()
        .filter(|effect| matches!(effect, Effect::Notify { .. }))
        .count();
    assert_eq!(notifications, 1);

    let view = state.view();
    assert_eq!(view.rows().len(), 5);
    assert_eq!(
        view.notification.map(|n| n.message),
        Some("upstream unavailable, please try again.".to_string())
    );
}
