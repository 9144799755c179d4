//! Folder Name Parsing
//!
//! Entry folders follow the convention `"<digits> - [<V|A|P>] <Title>"` or
//! `"[<V|A|P>] <Title>"`. Parsing never fails: absent parts come back as `None`.

use crate::types::Status;
use regex::Regex;
use std::sync::OnceLock;

/// Metadata extracted from a folder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub sequence_number: Option<u64>,
    pub status: Option<Status>,
    pub cleaned_name: String,
}

fn number_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([0-9]+)\s*-\s*").expect("number prefix pattern"))
}

fn status_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([VAP])\]").expect("status pattern"))
}

fn status_with_space_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[[VAP]\]\s*").expect("status strip pattern"))
}

fn accepted_patterns() -> &'static [Regex; 2] {
    static RES: OnceLock<[Regex; 2]> = OnceLock::new();
    RES.get_or_init(|| {
        [
            Regex::new(r"^[0-9]+\s*-\s*\[.\]\s*.+").expect("numbered entry pattern"),
            Regex::new(r"^\[.\]\s*.+").expect("status-only entry pattern"),
        ]
    })
}

/// Leading sequence number (`"001 - ..."` -> 1).
pub fn sequence_number(name: &str) -> Option<u64> {
    number_prefix_re()
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}

/// First `[V]`, `[A]` or `[P]` marker anywhere in the name.
pub fn status(name: &str) -> Option<Status> {
    status_re()
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().chars().next())
        .and_then(Status::from_letter)
}

/// Name with the number prefix and the status marker removed.
pub fn clean_name(name: &str) -> String {
    let without_number = number_prefix_re().replace(name, "");
    let without_status = status_with_space_re().replace(&without_number, "");
    without_status.trim().to_string()
}

/// Parse every metadata field out of a folder name.
pub fn parse_folder_name(name: &str) -> ParsedName {
    ParsedName {
        sequence_number: sequence_number(name),
        status: status(name),
        cleaned_name: clean_name(name),
    }
}

/// Whether a folder name follows one of the two accepted entry patterns.
///
/// Only names passing this check are visible to search.
pub fn is_entry_name_valid(name: &str) -> bool {
    accepted_patterns().iter().any(|re| re.is_match(name))
}
