//! Catalog entry types

use crate::types::Status;
use serde::{Deserialize, Serialize};

/// One louvor: a folder holding sheet-music PDFs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default)]
    pub classification: String,
    #[serde(default)]
    pub category: String,
    pub sequence_number: Option<u64>,
    pub status: Option<Status>,
    pub full_path: String,
    pub pdf_files: Vec<String>,
    pub subfolders: Vec<SubfolderNode>,
    pub has_subfolders: bool,
    pub total_file_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl CatalogEntry {
    /// Path segments below the scan root (the root's own name excluded).
    pub fn segments_below_root(&self) -> Vec<&str> {
        self.full_path
            .split(['/', '\\'])
            .filter(|part| !part.is_empty())
            .skip(1)
            .collect()
    }

    /// Depth of the entry folder below the scan root (root = 0).
    pub fn depth(&self) -> usize {
        self.segments_below_root().len()
    }

    /// The entry folder's own name as found on disk.
    pub fn folder_name(&self) -> &str {
        self.full_path
            .rsplit(['/', '\\'])
            .find(|part| !part.is_empty())
            .unwrap_or("")
    }

    /// Every PDF path in this entry and its subfolders, depth-first.
    pub fn all_pdf_files(&self) -> Vec<&str> {
        let mut files: Vec<&str> = self.pdf_files.iter().map(String::as_str).collect();
        for subfolder in &self.subfolders {
            subfolder.collect_pdf_files(&mut files);
        }
        files
    }
}

/// Nested PDF container inside an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubfolderNode {
    pub name: String,
    pub path: String,
    pub pdf_files: Vec<String>,
    /// PDFs directly inside this subfolder
    pub total_file_count: usize,
    pub children: Vec<SubfolderNode>,
}

impl SubfolderNode {
    /// Kept only when it holds a PDF or has a kept child.
    pub fn is_empty(&self) -> bool {
        self.total_file_count == 0 && self.children.is_empty()
    }

    fn collect_pdf_files<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.extend(self.pdf_files.iter().map(String::as_str));
        for child in &self.children {
            child.collect_pdf_files(out);
        }
    }
}
