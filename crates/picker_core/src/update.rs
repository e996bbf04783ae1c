use engine_logging::{engine_debug, engine_info, engine_trace};

use crate::{AppState, Effect, FinishOutcome, Focus, Msg};

const ERROR_TITLE: &str = "Error";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FilterEdited(text) => {
            state.set_filter(text);
            state.set_focus(Focus::Input);
            let timer = state.debouncer_mut().schedule();
            engine_trace!(
                "debounce timer {} started, cancels {:?}",
                timer.started,
                timer.cancelled
            );
            let mut effects = Vec::with_capacity(2);
            if let Some(token) = timer.cancelled {
                effects.push(Effect::CancelTimer { token });
            }
            effects.push(Effect::StartTimer {
                token: timer.started,
                delay: timer.delay,
            });
            effects
        }
        Msg::DebounceElapsed(token) => {
            if !state.debouncer_mut().fire(token) {
                return (state, Vec::new());
            }
            if state.filter().trim().is_empty() {
                return (state, Vec::new());
            }
            let name = state.filter().to_string();
            let dispatch = state.begin_dispatch();
            engine_info!("dispatch {} search name={:?}", dispatch, name);
            vec![Effect::Search {
                dispatch,
                name: Some(name),
            }]
        }
        Msg::SearchSucceeded {
            dispatch,
            characters,
        } => {
            if !state.is_latest_dispatch(dispatch) {
                engine_debug!("discarding stale results of dispatch {}", dispatch);
                return (state, Vec::new());
            }
            engine_debug!("dispatch {} resolved with {} rows", dispatch, characters.len());
            if state.accept_results(characters) {
                state.set_focus(Focus::Input);
            }
            Vec::new()
        }
        Msg::SearchFailed { dispatch, message } => {
            if !state.is_latest_dispatch(dispatch) {
                engine_debug!("discarding stale failure of dispatch {}: {}", dispatch, message);
                return (state, Vec::new());
            }
            let notification =
                state.record_failure(ERROR_TITLE, format!("{message}, please try again."));
            vec![Effect::Notify {
                title: notification.title,
                message: notification.message,
            }]
        }
        Msg::ToggleSelection { id } => {
            if let Some(character) = state.find_character(id).cloned() {
                state.selection_mut().toggle(&character);
                state.mark_dirty();
            } else if state.selection_mut().remove(id) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SetChecked { id, checked } => {
            let changed = match state.find_character(id).cloned() {
                Some(character) => state.selection_mut().set(&character, checked),
                None if !checked => state.selection_mut().remove(id),
                None => false,
            };
            if changed {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ToggleHighlighted => {
            if let Some(character) = state.highlighted_character().cloned() {
                state.selection_mut().toggle(&character);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CursorMoved(delta) => {
            state.move_cursor(delta);
            Vec::new()
        }
        Msg::FocusToggled => {
            let next = match state.focus() {
                Focus::Input => Focus::List,
                Focus::List => Focus::Input,
            };
            state.set_focus(next);
            Vec::new()
        }
        Msg::NotificationDismissed => {
            state.dismiss_notification();
            Vec::new()
        }
        Msg::Confirmed => {
            let selection = state.selection().snapshot();
            engine_info!("selection confirmed with {} entries", selection.len());
            vec![Effect::Finish {
                outcome: FinishOutcome::Confirmed(selection),
            }]
        }
        Msg::Cancelled => vec![Effect::Finish {
            outcome: FinishOutcome::Cancelled,
        }],
    };

    (state, effects)
}
