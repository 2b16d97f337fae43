// crates/geotext-core/src/candidates.rs
//! Candidate phrases cut from normalized text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Capitalized word runs, used when fuzzy generation is off.
static CAPITALIZED_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z][a-z]*(?:[ '-][A-Z][a-z]*)*").unwrap());

/// A phrase proposed for lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// As it appears in the normalized text.
    pub text: String,
    /// Lower-cased copy for the full-name tables.
    pub lower: String,
    /// Byte offset of the first occurrence in the normalized text.
    pub position: usize,
}

impl Candidate {
    fn new(text: &str, position: usize) -> Self {
        Self {
            text: text.to_string(),
            lower: text.to_lowercase(),
            position,
        }
    }

    pub fn word_count(&self) -> usize {
        crate::text::word_count(&self.text)
    }
}

/// Every run of `L` consecutive words for each `L` in `lengths`, in the
/// order given, left to right. Repeated phrases are yielded once, at their
/// first position.
///
/// ```rust
/// use geotext_core::candidates::sliding_windows;
///
/// let found: Vec<_> = sliding_windows("New York is big", &[2, 1])
///     .into_iter()
///     .map(|c| c.text)
///     .collect();
/// assert_eq!(found, ["New York", "York is", "is big", "New", "York", "is", "big"]);
/// ```
pub fn sliding_windows(normalized: &str, lengths: &[usize]) -> Vec<Candidate> {
    let words: Vec<(usize, &str)> = word_spans(normalized).collect();
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for &len in lengths {
        if len == 0 || len > words.len() {
            continue;
        }
        for window in words.windows(len) {
            let (start, _) = window[0];
            let (last_start, last) = window[len - 1];
            let phrase = &normalized[start..last_start + last.len()];
            if seen.insert(phrase) {
                out.push(Candidate::new(phrase, start));
            }
        }
    }
    out
}

/// Runs of capitalized words (`"Rio De Janeiro"`, `"Berlin"`). All-caps
/// tokens get no special treatment: `"LA"` yields `"L"` and `"A"`.
pub fn capitalized_runs(normalized: &str) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    CAPITALIZED_RUN
        .find_iter(normalized)
        .filter(|m| seen.insert(m.as_str()))
        .map(|m| Candidate::new(m.as_str(), m.start()))
        .collect()
}

/// Dispatches on the generation mode.
pub fn generate(normalized: &str, lengths: &[usize], fuzzy: bool) -> Vec<Candidate> {
    if fuzzy {
        sliding_windows(normalized, lengths)
    } else {
        capitalized_runs(normalized)
    }
}

/// `(byte offset, word)` for every space-separated word.
fn word_spans(s: &str) -> impl Iterator<Item = (usize, &str)> {
    s.split(' ')
        .scan(0, |offset, w| {
            let start = *offset;
            *offset += w.len() + 1;
            Some((start, w))
        })
        .filter(|(_, w)| !w.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(cands: &[Candidate]) -> Vec<&str> {
        cands.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn windows_cover_every_length_independently() {
        let c = sliding_windows("a b c", &[3, 2, 1]);
        assert_eq!(texts(&c), ["a b c", "a b", "b c", "a", "b", "c"]);
    }

    #[test]
    fn lengths_longer_than_text_are_skipped() {
        let c = sliding_windows("Paris", &[4, 1]);
        assert_eq!(texts(&c), ["Paris"]);
        assert!(sliding_windows("", &[1]).is_empty());
        assert!(sliding_windows("Paris", &[]).is_empty());
    }

    #[test]
    fn repeated_phrases_keep_first_position() {
        let c = sliding_windows("York and York", &[1]);
        assert_eq!(texts(&c), ["York", "and"]);
        assert_eq!(c[0].position, 0);
        assert_eq!(c[1].position, 5);
    }

    #[test]
    fn positions_are_byte_offsets() {
        let c = sliding_windows("I live in Washington DC", &[2]);
        let dc = c.iter().find(|c| c.text == "Washington DC").unwrap();
        assert_eq!(dc.position, 10);
        assert_eq!(dc.lower, "washington dc");
        assert_eq!(dc.word_count(), 2);
    }

    #[test]
    fn capitalized_runs_group_adjacent_capitals() {
        let c = capitalized_runs("He flew from Rio De Janeiro to Berlin");
        assert_eq!(texts(&c), ["He", "Rio De Janeiro", "Berlin"]);
    }

    #[test]
    fn all_caps_tokens_fall_apart() {
        let c = capitalized_runs("It is sunny in LA CA");
        assert_eq!(texts(&c), ["It", "L", "A C", "A"]);
    }

    #[test]
    fn mode_switch() {
        assert_eq!(generate("new York", &[1], true).len(), 2);
        assert_eq!(texts(&generate("new York", &[1], false)), ["York"]);
    }
}
