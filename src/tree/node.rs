//! Folder node types and file classification

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Extensions dropped during scanning.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "mid", "midi", "m4a", "aac", "ogg"];

/// How a scanned file is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Audio,
    Other,
}

impl FileKind {
    /// Classify a file name by extension, case-insensitively.
    pub fn classify(file_name: &str) -> Self {
        let extension = Path::new(file_name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase());
        match extension.as_deref() {
            Some("pdf") => FileKind::Pdf,
            Some(ext) if AUDIO_EXTENSIONS.contains(&ext) => FileKind::Audio,
            _ => FileKind::Other,
        }
    }
}

/// One scanned directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderNode {
    /// POSIX path starting with the scan root's own name
    pub relative_path: String,
    pub name: String,
    pub subdirectories: BTreeMap<String, FolderNode>,
    pub pdf_files: Vec<String>,
    pub other_files: Vec<String>,
}

impl FolderNode {
    pub fn new(name: impl Into<String>, relative_path: impl Into<String>) -> Self {
        FolderNode {
            relative_path: relative_path.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn has_pdfs(&self) -> bool {
        !self.pdf_files.is_empty()
    }

    /// PDFs in this folder and every descendant.
    pub fn total_pdf_count(&self) -> usize {
        self.pdf_files.len()
            + self
                .subdirectories
                .values()
                .map(FolderNode::total_pdf_count)
                .sum::<usize>()
    }

    /// Number of folders in this subtree, including this one.
    pub fn folder_count(&self) -> usize {
        1 + self
            .subdirectories
            .values()
            .map(FolderNode::folder_count)
            .sum::<usize>()
    }
}
