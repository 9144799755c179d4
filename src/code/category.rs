//! Category prefix derivation
//!
//! Maps a top-level category folder name to a stable 3-letter prefix.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Short words that count as significant despite their length.
const SHORT_ACRONYMS: &[&str] = &["CIA", "CIAS", "PES", "GLT", "GLTM"];

const FALLBACK_PREFIX: &str = "TMP";
const PREFIX_LEN: usize = 3;

/// Strip diacritics, uppercase, and keep only ASCII alphanumerics and whitespace.
fn normalize_category(name: &str) -> String {
    let stripped: String = name.nfd().filter(|c| !is_combining_mark(*c)).collect();
    stripped
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

fn pad_prefix(raw: &str) -> String {
    let mut prefix: String = raw.chars().take(PREFIX_LEN).collect();
    while prefix.chars().count() < PREFIX_LEN {
        prefix.push('X');
    }
    prefix
}

fn initials<'a>(words: impl Iterator<Item = &'a str>) -> String {
    words
        .take(PREFIX_LEN)
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Derive the 3-character prefix for a category name.
///
/// Pure and deterministic: the same name always yields the same prefix.
pub fn category_prefix(name: &str) -> String {
    let normalized = normalize_category(name);
    let words: Vec<&str> = normalized.split_whitespace().collect();

    let raw = match words.as_slice() {
        [] => FALLBACK_PREFIX.to_string(),
        [word] => word.to_string(),
        _ => {
            let significant: Vec<&str> = words
                .iter()
                .copied()
                .filter(|word| word.len() >= 3 || SHORT_ACRONYMS.contains(word))
                .collect();
            match significant.as_slice() {
                [] => initials(words.iter().copied()),
                [word] => word.to_string(),
                _ => initials(significant.iter().copied()),
            }
        }
    };

    pad_prefix(&raw)
}
