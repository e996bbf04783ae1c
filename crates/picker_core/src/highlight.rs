use regex::{Regex, RegexBuilder};

/// A run of a display name, marked when it matches the filter term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: false,
        }
    }

    fn matched(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: true,
        }
    }
}

/// Case-insensitive literal matcher for one filter term, compiled once and
/// applied to every row of a view.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    /// A blank term builds a highlighter that marks nothing.
    pub fn new(term: &str) -> Self {
        if term.trim().is_empty() {
            return Self { pattern: None };
        }
        let pattern = match RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                engine_logging::engine_warn!("highlight pattern rejected for {:?}: {}", term, err);
                None
            }
        };
        Self { pattern }
    }

    /// Split `text` into segments, marking every non-overlapping match.
    pub fn segments(&self, text: &str) -> Vec<Segment> {
        let Some(pattern) = &self.pattern else {
            return vec![Segment::plain(text)];
        };

        let mut segments = Vec::new();
        let mut cursor = 0;
        for found in pattern.find_iter(text) {
            if found.start() > cursor {
                segments.push(Segment::plain(&text[cursor..found.start()]));
            }
            segments.push(Segment::matched(found.as_str()));
            cursor = found.end();
        }
        if cursor < text.len() {
            segments.push(Segment::plain(&text[cursor..]));
        }
        if segments.is_empty() {
            segments.push(Segment::plain(text));
        }
        segments
    }
}

/// One-off form of [`Highlighter::segments`].
pub fn highlight_segments(text: &str, term: &str) -> Vec<Segment> {
    Highlighter::new(term).segments(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched_parts(segments: &[Segment]) -> Vec<&str> {
        segments
            .iter()
            .filter(|segment| segment.matched)
            .map(|segment| segment.text.as_str())
            .collect()
    }

    #[test]
    fn marks_case_insensitive_matches() {
        for term in ["mer", "Mer", "MER"] {
            let segments = highlight_segments("Summer Smith", term);
            assert_eq!(
                segments,
                vec![
                    Segment::plain("Sum"),
                    Segment::matched("mer"),
                    Segment::plain(" Smith"),
                ],
                "term {term:?}"
            );
        }
    }

    #[test]
    fn marks_every_occurrence_without_overlap() {
        let segments = highlight_segments("Rick Sanchez and Rick", "rick");
        assert_eq!(matched_parts(&segments), vec!["Rick", "Rick"]);

        let segments = highlight_segments("aaaa", "aa");
        assert_eq!(matched_parts(&segments), vec!["aa", "aa"]);
    }

    #[test]
    fn blank_term_marks_nothing() {
        assert_eq!(
            highlight_segments("Morty Smith", "   "),
            vec![Segment::plain("Morty Smith")]
        );
        assert_eq!(
            highlight_segments("Morty Smith", ""),
            vec![Segment::plain("Morty Smith")]
        );
    }

    #[test]
    fn term_is_literal_text() {
        let segments = highlight_segments("Mr. Poopybutthole", "r.");
        assert_eq!(matched_parts(&segments), vec!["r."]);

        let segments = highlight_segments("Birdperson", "(bird");
        assert_eq!(segments, vec![Segment::plain("Birdperson")]);
    }

    #[test]
    fn whole_name_match_is_single_segment() {
        assert_eq!(
            highlight_segments("Beth", "BETH"),
            vec![Segment::matched("Beth")]
        );
    }

    #[test]
    fn one_highlighter_serves_many_rows() {
        let highlighter = Highlighter::new("smith");

        assert_eq!(
            highlighter.segments("Morty Smith"),
            vec![Segment::plain("Morty "), Segment::matched("Smith")]
        );
        assert_eq!(
            highlighter.segments("Beth Smith"),
            vec![Segment::plain("Beth "), Segment::matched("Smith")]
        );
        assert_eq!(
            highlighter.segments("Birdperson"),
            vec![Segment::plain("Birdperson")]
        );
        assert_eq!(highlighter.segments(""), vec![Segment::plain("")]);
    }
}
