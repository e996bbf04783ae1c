//! Picker core: pure selector state machine and view-model helpers.
mod character;
mod debounce;
mod effect;
mod highlight;
mod msg;
mod selection;
mod state;
mod update;
mod view_model;

pub use character::{episode_label, Character, CharacterId};
pub use debounce::{Debouncer, Rescheduled, TimerToken};
pub use effect::{Effect, FinishOutcome};
pub use highlight::{highlight_segments, Highlighter, Segment};
pub use msg::Msg;
pub use selection::{SelectedCharacter, SelectionSet};
pub use state::{
    AppState, DispatchId, DispatchSequencer, Focus, Notification, RequestState, DEFAULT_DEBOUNCE,
    EMPTY_LIST_TEXT, SKELETON_ROWS,
};
pub use update::update;
pub use view_model::{AppViewModel, CharacterRowView, ListView, NotificationView};
