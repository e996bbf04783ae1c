use crate::{CharacterId, Focus, RequestState, Segment, SelectedCharacter};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub filter: String,
    pub list: ListView,
    /// Selection chips, in id order.
    pub selected: Vec<SelectedCharacter>,
    pub focus: Focus,
    pub request: RequestState,
    pub notification: Option<NotificationView>,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn rows(&self) -> &[CharacterRowView] {
        match &self.list {
            ListView::Rows(rows) => rows,
            ListView::Skeleton { .. } | ListView::Empty { .. } => &[],
        }
    }

    pub fn highlighted_row(&self) -> Option<&CharacterRowView> {
        self.rows().iter().find(|row| row.highlighted)
    }

    pub fn last_chip(&self) -> Option<&SelectedCharacter> {
        self.selected.last()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// Fixed-size placeholder shown while a search is pending.
    Skeleton { rows: usize },
    Empty { text: String },
    Rows(Vec<CharacterRowView>),
}

impl Default for ListView {
    fn default() -> Self {
        ListView::Rows(Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRowView {
    pub id: CharacterId,
    pub segments: Vec<Segment>,
    pub image: String,
    pub episode_label: String,
    pub checked: bool,
    pub highlighted: bool,
}

impl CharacterRowView {
    pub fn name(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub id: u64,
    pub title: String,
    pub message: String,
}
