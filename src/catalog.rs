//! Catalog domain: entry model, extraction from the scanned tree, and output files.

pub mod entry;
pub mod extract;
pub mod writer;

pub use entry::{CatalogEntry, SubfolderNode};
pub use extract::{extract_entries, validate_naming_patterns, NamingWarning, ORGANIZATIONAL_FOLDERS};
pub use writer::{CatalogWriter, OutputSettings, VersionStamp, WriteReport};
