use std::collections::BTreeMap;

use crate::{Character, CharacterId};

/// A selected entry; the name is kept for chips and for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedCharacter {
    pub id: CharacterId,
    pub name: String,
}

/// Selected characters keyed by catalog id, independent of the result list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSet {
    entries: BTreeMap<CharacterId, String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: CharacterId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether the character is selected afterwards.
    pub fn toggle(&mut self, character: &Character) -> bool {
        if self.entries.remove(&character.id).is_some() {
            false
        } else {
            self.entries.insert(character.id, character.name.clone());
            true
        }
    }

    /// Returns true when membership changed.
    pub fn set(&mut self, character: &Character, checked: bool) -> bool {
        if checked {
            self.entries
                .insert(character.id, character.name.clone())
                .is_none()
        } else {
            self.entries.remove(&character.id).is_some()
        }
    }

    pub fn remove(&mut self, id: CharacterId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// Selected entries in id order.
    pub fn snapshot(&self) -> Vec<SelectedCharacter> {
        self.entries
            .iter()
            .map(|(id, name)| SelectedCharacter {
                id: *id,
                name: name.clone(),
            })
            .collect()
    }
}
