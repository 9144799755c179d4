//! PDF content classification and the content filter.
//!
//! Part files are classified by keywords in their path. Rules are ordered:
//! full score first, then winds (so "sax tenor" is not read as a voice), then
//! choir, then strings.

use crate::catalog::SubfolderNode;
use serde::{Deserialize, Serialize};

/// Kind of musical content a PDF holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    #[serde(rename = "grade")]
    FullScore,
    #[serde(rename = "sopros")]
    Winds,
    #[serde(rename = "coro")]
    Choir,
    #[serde(rename = "cordas")]
    Strings,
    #[serde(rename = "outros")]
    Other,
}

const FULL_SCORE_KEYWORDS: &[&str] = &["grade", "partitura completa", "full score"];

const WIND_KEYWORDS: &[&str] = &[
    "sax", "flauta", "flute", "clarinet", "trombone", "trompete", "trumpet", "tuba", "oboé",
    "oboe", "fagote", "bassoon", "trompa", "horn", "bombardino", "eufônio", "euphonium", "sopro",
    "wind",
];

const CHOIR_KEYWORDS: &[&str] = &["coro", "choir", "vocal", "voz", "melodia", "melody"];

const STRING_KEYWORDS: &[&str] = &[
    "violino",
    "violin",
    "cello",
    "violoncelo",
    "contrabaixo",
    "double bass",
    "baixo elétrico",
    "bass",
    "cordas",
    "string",
];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

fn is_choir(name: &str) -> bool {
    let not_sax = !name.contains("sax");
    contains_any(name, CHOIR_KEYWORDS)
        || (name.contains("soprano") && not_sax)
        || (name.contains("contralto") && not_sax)
        || (name.contains("tenor") && not_sax)
        || (name.contains("baixo")
            && !name.contains("contrabaixo")
            && !name.contains("baixo elétrico"))
}

fn is_strings(name: &str) -> bool {
    contains_any(name, STRING_KEYWORDS) || (name.contains("viola") && !name.contains("violão"))
}

impl ContentKind {
    /// Classify a PDF path by its (lowercased) name.
    pub fn classify(pdf_path: &str) -> Self {
        let name = pdf_path.to_lowercase();
        if name.is_empty() {
            ContentKind::Other
        } else if contains_any(&name, FULL_SCORE_KEYWORDS) {
            ContentKind::FullScore
        } else if contains_any(&name, WIND_KEYWORDS) {
            ContentKind::Winds
        } else if is_choir(&name) {
            ContentKind::Choir
        } else if is_strings(&name) {
            ContentKind::Strings
        } else {
            ContentKind::Other
        }
    }
}

/// Which content kinds are shown. `all` overrides the individual flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentFilter {
    pub all: bool,
    pub choir: bool,
    pub full_score: bool,
    pub winds: bool,
    pub strings: bool,
}

impl Default for ContentFilter {
    fn default() -> Self {
        ContentFilter {
            all: true,
            choir: true,
            full_score: true,
            winds: true,
            strings: true,
        }
    }
}

impl ContentFilter {
    /// Filter showing only the given kinds.
    pub fn only(kinds: &[ContentKind]) -> Self {
        ContentFilter {
            all: false,
            choir: kinds.contains(&ContentKind::Choir),
            full_score: kinds.contains(&ContentKind::FullScore),
            winds: kinds.contains(&ContentKind::Winds),
            strings: kinds.contains(&ContentKind::Strings),
        }
    }

    fn any_individual(&self) -> bool {
        self.choir || self.full_score || self.winds || self.strings
    }

    fn allows_kind(&self, kind: ContentKind) -> bool {
        match kind {
            ContentKind::FullScore => self.full_score,
            ContentKind::Winds => self.winds,
            ContentKind::Choir => self.choir,
            ContentKind::Strings => self.strings,
            ContentKind::Other => self.any_individual(),
        }
    }

    /// Whether one file passes. Non-PDF files always pass.
    pub fn allows(&self, path: &str) -> bool {
        if !path.to_lowercase().ends_with(".pdf") || self.all {
            return true;
        }
        self.allows_kind(ContentKind::classify(path))
    }

    /// Files passing the filter, in order.
    pub fn filter_files<'a>(&self, files: &'a [String]) -> Vec<&'a str> {
        if !self.all && !self.any_individual() {
            return Vec::new();
        }
        files
            .iter()
            .map(String::as_str)
            .filter(|path| self.allows(path))
            .collect()
    }

    /// Subfolder trees pruned to the files passing the filter.
    pub fn filter_subfolders(&self, subfolders: &[SubfolderNode]) -> Vec<SubfolderNode> {
        subfolders
            .iter()
            .filter_map(|subfolder| {
                let pdf_files: Vec<String> = self
                    .filter_files(&subfolder.pdf_files)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                let children = self.filter_subfolders(&subfolder.children);
                if pdf_files.is_empty() && children.is_empty() {
                    return None;
                }
                Some(SubfolderNode {
                    name: subfolder.name.clone(),
                    path: subfolder.path.clone(),
                    total_file_count: pdf_files.len(),
                    pdf_files,
                    children,
                })
            })
            .collect()
    }
}
