use std::time::Duration;

use crate::debounce::Debouncer;
use crate::highlight::Highlighter;
use crate::selection::SelectionSet;
use crate::view_model::{AppViewModel, CharacterRowView, ListView, NotificationView};
use crate::{Character, CharacterId};

pub type DispatchId = u64;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);
pub const SKELETON_ROWS: usize = 4;
pub const EMPTY_LIST_TEXT: &str = "No Characters found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending {
        dispatch: DispatchId,
    },
    Resolved,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub message: String,
}

/// Issues dispatch ids and answers whether a response is still the newest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchSequencer {
    latest: DispatchId,
}

impl DispatchSequencer {
    pub fn issue(&mut self) -> DispatchId {
        self.latest += 1;
        self.latest
    }

    pub fn latest(&self) -> Option<DispatchId> {
        (self.latest > 0).then_some(self.latest)
    }

    pub fn is_latest(&self, dispatch: DispatchId) -> bool {
        self.latest > 0 && dispatch == self.latest
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    filter: String,
    characters: Vec<Character>,
    selection: SelectionSet,
    request: RequestState,
    sequencer: DispatchSequencer,
    debouncer: Debouncer,
    cursor: usize,
    focus: Focus,
    awaiting_first_success: bool,
    notification: Option<Notification>,
    notifications_raised: u64,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_DEBOUNCE)
    }
}

impl AppState {
    /// Selector mounted with the initial-load results.
    pub fn new(seed: Vec<Character>, debounce: Duration) -> Self {
        Self {
            filter: String::new(),
            characters: seed,
            selection: SelectionSet::new(),
            request: RequestState::Idle,
            sequencer: DispatchSequencer::default(),
            debouncer: Debouncer::new(debounce),
            cursor: 0,
            focus: Focus::Input,
            awaiting_first_success: true,
            notification: None,
            notifications_raised: 0,
            dirty: true,
        }
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn request(&self) -> RequestState {
        self.request
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.request, RequestState::Pending { .. })
    }

    /// Returns whether a redraw is needed and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let list = if self.is_pending() {
            ListView::Skeleton {
                rows: SKELETON_ROWS,
            }
        } else if self.characters.is_empty() {
            ListView::Empty {
                text: EMPTY_LIST_TEXT.to_string(),
            }
        } else {
            let highlighter = Highlighter::new(&self.filter);
            ListView::Rows(
                self.characters
                    .iter()
                    .enumerate()
                    .map(|(index, character)| CharacterRowView {
                        id: character.id,
                        segments: highlighter.segments(&character.name),
                        image: character.image.clone(),
                        episode_label: character.episode_label(),
                        checked: self.selection.contains(character.id),
                        highlighted: index == self.cursor,
                    })
                    .collect(),
            )
        };

        AppViewModel {
            filter: self.filter.clone(),
            list,
            selected: self.selection.snapshot(),
            focus: self.focus,
            request: self.request,
            notification: self.notification.as_ref().map(|n| NotificationView {
                id: n.id,
                title: n.title.clone(),
                message: n.message.clone(),
            }),
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn debouncer_mut(&mut self) -> &mut Debouncer {
        &mut self.debouncer
    }

    pub(crate) fn set_filter(&mut self, filter: String) {
        if self.filter != filter {
            self.filter = filter;
            self.mark_dirty();
        }
    }

    pub(crate) fn begin_dispatch(&mut self) -> DispatchId {
        let dispatch = self.sequencer.issue();
        self.request = RequestState::Pending { dispatch };
        self.mark_dirty();
        dispatch
    }

    pub(crate) fn is_latest_dispatch(&self, dispatch: DispatchId) -> bool {
        self.sequencer.is_latest(dispatch)
    }

    /// Returns true on the first accepted success since mount.
    pub(crate) fn accept_results(&mut self, characters: Vec<Character>) -> bool {
        self.characters = characters;
        self.request = RequestState::Resolved;
        self.cursor = self.cursor.min(self.characters.len().saturating_sub(1));
        self.mark_dirty();
        std::mem::take(&mut self.awaiting_first_success)
    }

    pub(crate) fn record_failure(&mut self, title: &str, message: String) -> Notification {
        self.request = RequestState::Failed;
        self.notifications_raised += 1;
        let notification = Notification {
            id: self.notifications_raised,
            title: title.to_string(),
            message,
        };
        self.notification = Some(notification.clone());
        self.mark_dirty();
        notification
    }

    pub(crate) fn dismiss_notification(&mut self) {
        if self.notification.take().is_some() {
            self.mark_dirty();
        }
    }

    pub(crate) fn find_character(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|character| character.id == id)
    }

    pub(crate) fn selection_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection
    }

    /// Row under the cursor, when the list is showing rows.
    pub(crate) fn highlighted_character(&self) -> Option<&Character> {
        if self.is_pending() {
            return None;
        }
        self.characters.get(self.cursor)
    }

    pub(crate) fn move_cursor(&mut self, delta: i32) {
        if self.characters.is_empty() || self.is_pending() {
            return;
        }
        let last = self.characters.len() - 1;
        let next = if delta.is_negative() {
            self.cursor.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            self.cursor.saturating_add(delta as usize).min(last)
        };
        if next != self.cursor {
            self.cursor = next;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            self.focus = focus;
            self.mark_dirty();
        }
    }
}
