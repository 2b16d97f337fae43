// crates/geotext-core/src/text.rs
//! Text folding and normalization shared by the builder and the resolver.
//!
//! Two forms matter:
//! - **normalized text**: what candidates are cut from. Case is kept because
//!   abbreviation tables are case-sensitive.
//! - **canonical keys**: the lower-case search form stored on every place.
//!
//! Both forms separate words by a single space, so a lower-cased candidate
//! can be compared to a canonical key byte for byte.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w]+").unwrap());
static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

const CITY_SUFFIX: &str = " city";

/// Drops a trailing ` city` (any case): `"New York City"` -> `"New York"`.
pub fn strip_city_suffix(name: &str) -> &str {
    let cut = name.len().saturating_sub(CITY_SUFFIX.len());
    match name.get(cut..) {
        Some(tail) if cut > 0 && tail.eq_ignore_ascii_case(CITY_SUFFIX) => &name[..cut],
        _ => name,
    }
}

/// Canonical search form of a place name.
///
/// ASCII-folds, strips a trailing ` city`, lower-cases, deletes dots and
/// turns every other run of non-alphanumeric characters into one space.
///
/// ```rust
/// use geotext_core::text::canonicalize;
///
/// assert_eq!(canonicalize("Washington, D.C."), "washington dc");
/// assert_eq!(canonicalize("New York City"), "new york");
/// assert_eq!(canonicalize("Île-de-France"), "ile de france");
/// ```
pub fn canonicalize(name: &str) -> String {
    let folded = deunicode::deunicode(name);
    let lower = strip_city_suffix(folded.trim()).to_lowercase().replace('.', "");
    NON_ALNUM.replace_all(&lower, " ").trim().to_string()
}

/// Normalizes free text before candidates are cut from it.
///
/// ASCII-folds, removes acronym dots (`U.S.` -> `US`; a dot followed by two
/// letters is kept as a word break), then collapses all remaining symbols
/// and whitespace into single spaces. Case is preserved.
pub fn normalize_text(text: &str) -> String {
    let folded = deunicode::deunicode(text);
    let undotted = strip_acronym_dots(&folded);
    NON_WORD.replace_all(&undotted, " ").trim().to_string()
}

fn strip_acronym_dots(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    for (i, &ch) in chars.iter().enumerate() {
        if ch == '.' {
            let next_two_letters = chars
                .get(i + 1..i + 3)
                .is_some_and(|pair| pair.iter().all(|c| c.is_ascii_alphabetic()));
            if !next_two_letters {
                continue;
            }
        }
        out.push(ch);
    }
    out
}

/// Number of whitespace-separated words in a phrase.
pub fn word_count(phrase: &str) -> usize {
    phrase.split_whitespace().count()
}

/// Whole-word containment between canonical keys: `needle` occurs in
/// `haystack` as a contiguous run of complete words.
///
/// ```rust
/// use geotext_core::text::contains_words;
///
/// assert!(contains_words("new york", "york"));
/// assert!(!contains_words("yorkshire", "york"));
/// ```
pub fn contains_words(haystack: &str, needle: &str) -> bool {
    let hay: Vec<&str> = haystack.split_whitespace().collect();
    let pin: Vec<&str> = needle.split_whitespace().collect();
    if pin.is_empty() || pin.len() > hay.len() {
        return false;
    }
    hay.windows(pin.len()).any(|w| w == pin.as_slice())
}
