//! Catalog extraction
//!
//! Turns the scanned [`FolderNode`] tree into the flat, pre-ordered list of
//! [`CatalogEntry`] values. A folder becomes an entry when it directly holds a
//! PDF and is not an organizational (instrument/section) folder. Naming-pattern
//! validation is a separate pass: it warns about malformed depth-2 names but
//! never removes entries; search applies the same check on its own.

use crate::catalog::entry::{CatalogEntry, SubfolderNode};
use crate::naming::{is_entry_name_valid, parse_folder_name};
use crate::tree::FolderNode;
use crate::types::join_posix;
use serde::Serialize;
use tracing::{debug, warn};

/// Instrument and grouping folders that never become entries.
pub const ORGANIZATIONAL_FOLDERS: &[&str] = &[
    "Cordas",
    "Madeiras",
    "Metais",
    "VOZES MIDI",
    "Percussão",
    "Teclado",
    "Baixo",
    "Guitarra",
    "Violão",
    "Bateria",
    "Cordas-Madeiras- Metais",
    "Instrumentos",
    "Vozes",
    "Partituras",
];

/// Depth below the scan root at which entry folders are expected.
pub const ENTRY_DEPTH: usize = 2;

pub fn is_organizational(name: &str) -> bool {
    ORGANIZATIONAL_FOLDERS.contains(&name)
}

/// Extract every entry from the tree in depth-first pre-order.
///
/// The scan root itself is never an entry.
pub fn extract_entries(root: &FolderNode) -> Vec<CatalogEntry> {
    let mut entries = Vec::new();
    for child in root.subdirectories.values() {
        collect_entries(child, &mut entries);
    }
    debug!(count = entries.len(), "Extracted catalog entries");
    entries
}

fn collect_entries(node: &FolderNode, out: &mut Vec<CatalogEntry>) {
    if node.has_pdfs() && !is_organizational(&node.name) {
        out.push(build_entry(node));
    }
    for child in node.subdirectories.values() {
        collect_entries(child, out);
    }
}

fn build_entry(node: &FolderNode) -> CatalogEntry {
    let parsed = parse_folder_name(&node.name);
    let subfolders = map_subfolders(node, &node.relative_path);
    CatalogEntry {
        name: parsed.cleaned_name,
        classification: String::new(),
        category: String::new(),
        sequence_number: parsed.sequence_number,
        status: parsed.status,
        full_path: node.relative_path.clone(),
        pdf_files: node
            .pdf_files
            .iter()
            .map(|pdf| join_posix(&node.relative_path, pdf))
            .collect(),
        has_subfolders: !subfolders.is_empty(),
        subfolders,
        total_file_count: node.total_pdf_count(),
        code: None,
    }
}

fn map_subfolders(node: &FolderNode, parent_path: &str) -> Vec<SubfolderNode> {
    node.subdirectories
        .iter()
        .map(|(name, child)| {
            let path = join_posix(parent_path, name);
            SubfolderNode {
                name: name.clone(),
                pdf_files: child
                    .pdf_files
                    .iter()
                    .map(|pdf| join_posix(&path, pdf))
                    .collect(),
                total_file_count: child.pdf_files.len(),
                children: map_subfolders(child, &path),
                path,
            }
        })
        .filter(|subfolder| !subfolder.is_empty())
        .collect()
}

/// A depth-2 folder with PDFs whose name search will not accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamingWarning {
    pub path: String,
    pub name: String,
}

/// Report depth-2 folders holding PDFs with a malformed name.
///
/// Warnings are logged; the extracted entries are left untouched.
pub fn validate_naming_patterns(root: &FolderNode) -> Vec<NamingWarning> {
    let mut warnings = Vec::new();
    validate_level(root, 0, &mut warnings);
    warnings
}

fn validate_level(node: &FolderNode, depth: usize, out: &mut Vec<NamingWarning>) {
    if depth == ENTRY_DEPTH && node.has_pdfs() && !is_entry_name_valid(&node.name) {
        warn!(
            path = %node.relative_path,
            "Invalid entry name, folder will not appear in search; expected \"001 - [P] Name\" or \"[P] Name\""
        );
        out.push(NamingWarning {
            path: node.relative_path.clone(),
            name: node.name.clone(),
        });
    }
    for child in node.subdirectories.values() {
        validate_level(child, depth + 1, out);
    }
}
