pub type CharacterId = u64;

/// A catalog entry as returned by the last accepted search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub image: String,
    pub episode: Vec<String>,
}

impl Character {
    pub fn episode_count(&self) -> usize {
        self.episode.len()
    }

    pub fn episode_label(&self) -> String {
        episode_label(self.episode_count())
    }
}

/// Singular only for exactly one; zero reads as plural.
pub fn episode_label(count: usize) -> String {
    if count == 1 {
        "1 episode".to_string()
    } else {
        format!("{count} episodes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn episode_label_pluralizes_everything_but_one() {
        assert_eq!(episode_label(0), "0 episodes");
        assert_eq!(episode_label(1), "1 episode");
        assert_eq!(episode_label(2), "2 episodes");
        assert_eq!(episode_label(51), "51 episodes");
    }
}
