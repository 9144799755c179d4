//! Code assignment
//!
//! Each entry gets `<category prefix><3-digit number>`. The number comes from
//! the leading digits of the entry folder name or, failing that, from a 32-bit
//! rolling hash of the name. Collisions are resolved by appending a letter
//! suffix (A to Z) and then a numeric suffix, within a fixed attempt budget.

use crate::catalog::CatalogEntry;
use crate::code::category::category_prefix;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, error, info, warn};

/// Total candidates tried for one colliding code.
pub const MAX_CODE_ATTEMPTS: usize = 100;

const LETTER_SUFFIXES: usize = 26;
const SAMPLE_CODES: usize = 3;

/// Result of assigning a code to one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CodeOutcome {
    /// The base code was free.
    Assigned { code: String },
    /// The base code was taken; an alternate was chosen.
    Suffixed { base: String, code: String },
    /// Every alternate was taken; the entry has no code.
    Exhausted { base: String },
    /// The path has fewer than two segments below the root.
    Unresolvable,
}

impl CodeOutcome {
    pub fn code(&self) -> Option<&str> {
        match self {
            CodeOutcome::Assigned { code } | CodeOutcome::Suffixed { code, .. } => Some(code),
            CodeOutcome::Exhausted { .. } | CodeOutcome::Unresolvable => None,
        }
    }
}

/// Per-category summary of assigned codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub prefix: String,
    pub count: usize,
    pub sample_codes: Vec<String>,
}

/// Entries with codes plus what happened to each of them.
#[derive(Debug, Clone, Serialize)]
pub struct CodeAssignmentReport {
    pub entries: Vec<CatalogEntry>,
    pub outcomes: Vec<CodeOutcome>,
    /// Category name -> stats, sorted by name
    pub categories: BTreeMap<String, CategoryStats>,
}

impl CodeAssignmentReport {
    pub fn assigned_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.code().is_some()).count()
    }

    pub fn duplicate_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, CodeOutcome::Suffixed { .. }))
            .count()
    }

    pub fn unassigned_count(&self) -> usize {
        self.outcomes.len() - self.assigned_count()
    }
}

/// Number part of a code for an entry folder name.
///
/// Leading digits are zero-padded to three places; other names hash into 1..=999.
pub fn folder_number(folder_name: &str) -> String {
    let digits: String = folder_name
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if !digits.is_empty() {
        return format!("{:0>3}", digits);
    }
    let hash = folder_name
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)));
    let number = i64::from(hash).abs() % 999 + 1;
    format!("{:03}", number)
}

/// `n`-th alternate for a colliding base code, `n` starting at 1.
fn alternate_code(base: &str, attempt: usize) -> String {
    if attempt <= LETTER_SUFFIXES {
        let letter = char::from(b'A' + (attempt - 1) as u8);
        format!("{}{}", base, letter)
    } else {
        format!("{}{}", base, attempt - LETTER_SUFFIXES)
    }
}

/// Assigns unique codes to entries in input order.
pub struct CodeAssigner {
    root_name: String,
}

impl CodeAssigner {
    /// `root_name` is the scan root segment dropped from entry paths.
    pub fn new(root_name: impl Into<String>) -> Self {
        CodeAssigner {
            root_name: root_name.into(),
        }
    }

    fn category_and_folder<'a>(&self, full_path: &'a str) -> Option<(&'a str, &'a str)> {
        let mut parts = full_path
            .split('/')
            .filter(|part| !part.is_empty() && *part != self.root_name);
        let category = parts.next()?;
        let folder = parts.next()?;
        Some((category, folder))
    }

    /// Base code (before collision handling) for an entry path.
    pub fn base_code(&self, full_path: &str) -> Option<String> {
        self.category_and_folder(full_path)
            .map(|(category, folder)| format!("{}{}", category_prefix(category), folder_number(folder)))
    }

    /// Assign codes to every entry.
    pub fn assign(&self, entries: Vec<CatalogEntry>) -> CodeAssignmentReport {
        info!(total = entries.len(), "Assigning entry codes");
        // code -> full path of the entry holding it
        let mut taken: HashMap<String, String> = HashMap::new();
        let mut categories: BTreeMap<String, CategoryStats> = BTreeMap::new();
        let mut outcomes = Vec::with_capacity(entries.len());
        let mut assigned = Vec::with_capacity(entries.len());

        for mut entry in entries {
            let Some((category, folder)) = self.category_and_folder(&entry.full_path) else {
                warn!(path = %entry.full_path, "Cannot derive code from path");
                outcomes.push(CodeOutcome::Unresolvable);
                assigned.push(entry);
                continue;
            };
            let category = category.to_string();
            let prefix = category_prefix(&category);
            let base = format!("{}{}", prefix, folder_number(folder));

            let outcome = if let Some(holder) = taken.get(&base) {
                warn!(
                    code = %base,
                    previous = %holder,
                    current = %entry.full_path,
                    "Duplicate code detected"
                );
                match (1..MAX_CODE_ATTEMPTS)
                    .map(|attempt| alternate_code(&base, attempt))
                    .find(|candidate| !taken.contains_key(candidate))
                {
                    Some(code) => {
                        info!(code = %code, "Using alternate code");
                        CodeOutcome::Suffixed { base, code }
                    }
                    None => {
                        error!(code = %base, path = %entry.full_path, "Too many duplicates, entry left without code");
                        CodeOutcome::Exhausted { base }
                    }
                }
            } else {
                CodeOutcome::Assigned { code: base }
            };

            entry.category = category.clone();
            if let Some(code) = outcome.code() {
                debug!(code = %code, path = %entry.full_path, "Assigned code");
                taken.insert(code.to_string(), entry.full_path.clone());
                entry.code = Some(code.to_string());

                let stats = categories.entry(category).or_insert_with(|| CategoryStats {
                    prefix,
                    count: 0,
                    sample_codes: Vec::new(),
                });
                stats.count += 1;
                if stats.sample_codes.len() < SAMPLE_CODES {
                    stats.sample_codes.push(code.to_string());
                }
            }

            outcomes.push(outcome);
            assigned.push(entry);
        }

        info!(
            assigned = taken.len(),
            categories = categories.len(),
            "Code assignment finished"
        );
        CodeAssignmentReport {
            entries: assigned,
            outcomes,
            categories,
        }
    }
}
