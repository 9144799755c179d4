//! Louvores: Deterministic Sheet-Music Catalog Builder
//!
//! Scans a folder tree of sheet-music PDFs, infers catalog metadata from the
//! folder naming convention, assigns every entry a stable short code,
//! and writes the data files a static browser UI loads.

pub mod browse;
pub mod catalog;
pub mod code;
pub mod config;
pub mod error;
pub mod logging;
pub mod naming;
pub mod pipeline;
pub mod tooling;
pub mod tree;
pub mod types;
