use crate::{Character, CharacterId, DispatchId, TimerToken};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search input (full current text).
    FilterEdited(String),
    /// A debounce timer scheduled through `Effect::StartTimer` elapsed.
    DebounceElapsed(TimerToken),
    /// Gateway answered a dispatch.
    SearchSucceeded {
        dispatch: DispatchId,
        characters: Vec<Character>,
    },
    /// Gateway failed a dispatch.
    SearchFailed { dispatch: DispatchId, message: String },
    /// Row activation: flip membership of a character.
    ToggleSelection { id: CharacterId },
    /// Checkbox change for a character.
    SetChecked { id: CharacterId, checked: bool },
    /// Flip membership of the row under the cursor.
    ToggleHighlighted,
    /// Move the list cursor by a signed number of rows.
    CursorMoved(i32),
    /// Switch focus between the input and the list.
    FocusToggled,
    /// User dismissed the toast, or it timed out.
    NotificationDismissed,
    /// User accepted the current selection.
    Confirmed,
    /// User left without accepting.
    Cancelled,
}
