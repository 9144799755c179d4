//! Filesystem scanner
//!
//! Walks the scan root depth-first and mirrors it as a [`FolderNode`] tree.
//! Listings are sorted by file name so repeated scans of an unchanged tree
//! produce identical output. Symlinks are followed and classified by their
//! target. An unreadable directory, a dangling link or a link back to an
//! ancestor is logged and skipped; only a missing root aborts the scan.

use crate::error::CatalogError;
use crate::tree::node::{FileKind, FolderNode};
use crate::types::join_posix;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Counters collected during one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub folders: usize,
    pub pdf_files: usize,
    pub other_files: usize,
    pub audio_skipped: usize,
    pub unreadable: usize,
}

/// Recursive, synchronous directory scanner.
pub struct FolderScanner {
    root: PathBuf,
}

impl FolderScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FolderScanner { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Name used as the first segment of every relative path.
    pub fn root_name(&self) -> String {
        root_name_of(&self.root)
    }

    /// Scan the root into a folder tree.
    pub fn scan(&self) -> Result<FolderNode, CatalogError> {
        self.scan_with_stats().map(|(tree, _)| tree)
    }

    /// Scan the root, also returning scan counters.
    pub fn scan_with_stats(&self) -> Result<(FolderNode, ScanStats), CatalogError> {
        if !self.root.is_dir() {
            return Err(CatalogError::RootNotFound(self.root.clone()));
        }
        let root_name = self.root_name();
        info!(root = %self.root.display(), "Scanning folder tree");
        let mut stats = ScanStats::default();
        let mut ancestors = vec![canonical(&self.root)];
        let tree = scan_directory(&self.root, &root_name, &root_name, &mut ancestors, &mut stats);
        info!(
            folders = stats.folders,
            pdf_files = stats.pdf_files,
            audio_skipped = stats.audio_skipped,
            unreadable = stats.unreadable,
            "Scan finished"
        );
        Ok((tree, stats))
    }
}

fn canonical(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn root_name_of(root: &Path) -> String {
    canonical(root)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn scan_directory(
    dir: &Path,
    name: &str,
    relative_path: &str,
    ancestors: &mut Vec<PathBuf>,
    stats: &mut ScanStats,
) -> FolderNode {
    let mut node = FolderNode::new(name, relative_path);
    stats.folders += 1;

    let listing = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for item in listing {
        let entry = match item {
            Ok(entry) => entry,
            Err(e) => {
                // A failure on the directory itself ends its listing; per-entry
                // failures (dangling links, loops) only skip that entry.
                stats.unreadable += 1;
                warn!(path = %dir.display(), error = %e, "Failed to read directory entry");
                if e.depth() == 0 {
                    break;
                }
                continue;
            }
        };

        let file_name = entry.file_name().to_string_lossy().into_owned();
        let file_type = entry.file_type();

        if file_type.is_dir() {
            let target = canonical(entry.path());
            if ancestors.contains(&target) {
                stats.unreadable += 1;
                warn!(path = %entry.path().display(), "Skipping link back to an ancestor folder");
                continue;
            }
            if entry.path_is_symlink() {
                debug!(path = %entry.path().display(), target = %target.display(), "Following folder link");
            }
            let child_path = join_posix(relative_path, &file_name);
            ancestors.push(target);
            let child = scan_directory(entry.path(), &file_name, &child_path, ancestors, stats);
            ancestors.pop();
            node.subdirectories.insert(file_name, child);
        } else {
            match FileKind::classify(&file_name) {
                FileKind::Pdf => {
                    stats.pdf_files += 1;
                    node.pdf_files.push(file_name);
                }
                FileKind::Audio => {
                    stats.audio_skipped += 1;
                    info!(file = %file_name, "Ignoring audio file");
                }
                FileKind::Other => {
                    stats.other_files += 1;
                    node.other_files.push(file_name);
                }
            }
        }
    }

    node
}
