use std::sync::Once;
use std::time::Duration;

use picker_core::{
    update, AppState, Character, CharacterId, DispatchId, Effect, Focus, ListView, Msg,
    RequestState, SKELETON_ROWS,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn character(id: CharacterId, name: &str) -> Character {
    Character {
        id,
        name: name.to_string(),
        image: format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
        episode: vec![format!("https://rickandmortyapi.com/api/episode/{id}")],
    }
}

/// Type `text` and let its debounce timer elapse; returns the issued dispatch.
fn search(state: AppState, text: &str) -> (AppState, DispatchId) {
    let (state, effects) = update(state, Msg::FilterEdited(text.to_string()));
    let token = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::StartTimer { token, .. } => Some(*token),
            _ => None,
        })
        .expect("start timer");
    let (state, effects) = update(state, Msg::DebounceElapsed(token));
    let dispatch = match effects.as_slice() {
        [Effect::Search { dispatch, .. }] => *dispatch,
        other => panic!("expected a single search effect, got {other:?}"),
    };
    (state, dispatch)
}

fn names(state: &AppState) -> Vec<&str> {
    state.characters().iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn pending_request_shows_skeleton_not_stale_rows() {
    init_logging();
    let state = AppState::new(vec![character(1, "Rick Sanchez")], Duration::from_millis(10));
    let (state, dispatch) = search(state, "morty");

    assert_eq!(state.request(), RequestState::Pending { dispatch });
    assert_eq!(
        state.view().list,
        ListView::Skeleton {
            rows: SKELETON_ROWS
        }
    );
    assert_eq!(names(&state), vec!["Rick Sanchez"]);
}

#[test]
fn success_replaces_results() {
    init_logging();
    let state = AppState::new(vec![character(1, "Rick Sanchez")], Duration::from_millis(10));
    let (state, dispatch) = search(state, "morty");

    let (state, _effects) = update(
        state,
        Msg::SearchSucceeded {
            dispatch,
            characters: vec![character(2, "Morty Smith"), character(14, "Alien Morty")],
        },
    );

    assert_eq!(state.request(), RequestState::Resolved);
    assert_eq!(names(&state), vec!["Morty Smith", "Alien Morty"]);
    assert_eq!(state.view().rows().len(), 2);
}

#[test]
fn newest_dispatch_wins_when_older_resolves_last() {
    init_logging();
    let state = AppState::new(vec![character(1, "Rick Sanchez")], Duration::from_millis(10));
    let (state, first) = search(state, "sum");
    let (state, second) = search(state, "summer");
    assert!(second > first);

    let (state, _) = update(
        state,
        Msg::SearchSucceeded {
            dispatch: second,
            characters: vec![character(3, "Summer Smith")],
        },
    );
    let (state, effects) = update(
        state,
        Msg::SearchSucceeded {
            dispatch: first,
            characters: vec![character(3, "Summer Smith"), character(99, "Sumo Wrestler")],
        },
    );

    assert!(effects.is_empty());
    assert_eq!(names(&state), vec!["Summer Smith"]);
    assert_eq!(state.request(), RequestState::Resolved);
}

#[test]
fn stale_response_does_not_end_pending_state() {
    init_logging();
    let state = AppState::new(Vec::new(), Duration::from_millis(10));
    let (state, first) = search(state, "be");
    let (state, second) = search(state, "beth");

    let (state, _) = update(
        state,
        Msg::SearchSucceeded {
            dispatch: first,
            characters: vec![character(4, "Beth Smith")],
        },
    );

    assert_eq!(state.request(), RequestState::Pending { dispatch: second });
    assert!(state.characters().is_empty());
}

#[test]
fn failure_keeps_results_and_raises_notification() {
    init_logging();
    let state = AppState::new(vec![character(1, "Rick Sanchez")], Duration::from_millis(10));
    let (state, dispatch) = search(state, "rick");

    let (state, effects) = update(
        state,
        Msg::SearchFailed {
            dispatch,
            message: "network error".to_string(),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::Notify {
            title: "Error".to_string(),
            message: "network error, please try again.".to_string(),
        }]
    );
    assert_eq!(state.request(), RequestState::Failed);
    assert_eq!(names(&state), vec!["Rick Sanchez"]);
    let view = state.view();
    let notification = view.notification.as_ref().expect("notification");
    assert_eq!(notification.message, "network error, please try again.");
    assert_eq!(view.rows().len(), 1);
}

#[test]
fn stale_failure_is_silent() {
    init_logging();
    let state = AppState::new(Vec::new(), Duration::from_millis(10));
    let (state, first) = search(state, "jer");
    let (state, second) = search(state, "jerry");

    let (state, _) = update(
        state,
        Msg::SearchSucceeded {
            dispatch: second,
            characters: vec![character(5, "Jerry Smith")],
        },
    );
    let (state, effects) = update(
        state,
        Msg::SearchFailed {
            dispatch: first,
            message: "timeout".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert!(state.notification().is_none());
    assert_eq!(state.request(), RequestState::Resolved);
}

#[test]
fn notification_can_be_dismissed() {
    init_logging();
    let state = AppState::new(Vec::new(), Duration::from_millis(10));
    let (state, dispatch) = search(state, "x");
    let (state, _) = update(
        state,
        Msg::SearchFailed {
            dispatch,
            message: "boom".to_string(),
        },
    );
    assert!(state.notification().is_some());

    let (state, effects) = update(state, Msg::NotificationDismissed);

    assert!(effects.is_empty());
    assert!(state.notification().is_none());
}

#[test]
fn first_success_restores_input_focus_once() {
    init_logging();
    let state = AppState::new(vec![character(1, "Rick Sanchez")], Duration::from_millis(10));
    let (state, dispatch) = search(state, "rick");
    let (state, _) = update(state, Msg::FocusToggled);
    assert_eq!(state.focus(), Focus::List);

    let (state, effects) = update(
        state,
        Msg::SearchSucceeded {
            dispatch,
            characters: vec![character(1, "Rick Sanchez")],
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.focus(), Focus::Input);

    let (state, dispatch) = search(state, "ricky");
    let (state, _) = update(state, Msg::FocusToggled);
    let (state, effects) = update(
        state,
        Msg::SearchSucceeded {
            dispatch,
            characters: Vec::new(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.focus(), Focus::List);
}

#[test]
fn unrequested_dispatch_id_is_ignored() {
    init_logging();
    let state = AppState::new(vec![character(1, "Rick Sanchez")], Duration::from_millis(10));

    let (state, effects) = update(
        state,
        Msg::SearchSucceeded {
            dispatch: 0,
            characters: Vec::new(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(names(&state), vec!["Rick Sanchez"]);
}
