//! Scanned folder tree: node types and the filesystem scanner.

pub mod node;
pub mod scanner;

pub use node::{FileKind, FolderNode};
pub use scanner::FolderScanner;
