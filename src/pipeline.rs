//! Catalog build pipeline
//!
//! One synchronous pass per run: scan the folder tree, extract entries,
//! validate entry names, assign codes, and optionally write the output files.

use crate::catalog::{
    extract_entries, validate_naming_patterns, CatalogEntry, CatalogWriter, NamingWarning,
    OutputSettings, WriteReport,
};
use crate::code::{CodeAssigner, CodeAssignmentReport};
use crate::error::CatalogError;
use crate::tree::scanner::ScanStats;
use crate::tree::{FolderNode, FolderScanner};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Everything built in memory for one scan.
#[derive(Debug, Clone)]
pub struct BuiltCatalog {
    pub structure: FolderNode,
    pub scan_stats: ScanStats,
    pub naming_warnings: Vec<NamingWarning>,
    pub codes: CodeAssignmentReport,
}

impl BuiltCatalog {
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.codes.entries
    }
}

/// A built catalog plus the files written for it.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub catalog: BuiltCatalog,
    pub written: WriteReport,
    pub duration_ms: u128,
}

/// Scan -> extract -> validate -> assign -> write.
pub struct CatalogPipeline {
    scan_root: PathBuf,
    out_dir: PathBuf,
    settings: OutputSettings,
}

impl CatalogPipeline {
    pub fn new(scan_root: impl Into<PathBuf>, out_dir: impl Into<PathBuf>, settings: OutputSettings) -> Self {
        CatalogPipeline {
            scan_root: scan_root.into(),
            out_dir: out_dir.into(),
            settings,
        }
    }

    pub fn scan_root(&self) -> &std::path::Path {
        &self.scan_root
    }

    /// Build the catalog in memory without writing anything.
    pub fn build(&self) -> Result<BuiltCatalog, CatalogError> {
        let scanner = FolderScanner::new(&self.scan_root);
        let (structure, scan_stats) = scanner.scan_with_stats()?;
        let entries = extract_entries(&structure);
        let naming_warnings = validate_naming_patterns(&structure);
        info!(
            entries = entries.len(),
            naming_warnings = naming_warnings.len(),
            "Mapping finished"
        );
        let codes = CodeAssigner::new(structure.name.clone()).assign(entries);
        Ok(BuiltCatalog {
            structure,
            scan_stats,
            naming_warnings,
            codes,
        })
    }

    /// Build the catalog and write every output file.
    pub fn run(&self) -> Result<BuildReport, CatalogError> {
        let started = Instant::now();
        let catalog = self.build()?;
        let writer = CatalogWriter::new(&self.out_dir, self.settings.clone());
        let written = writer.write(catalog.entries(), &catalog.structure)?;
        let duration_ms = started.elapsed().as_millis();
        info!(
            total = catalog.entries().len(),
            version = %written.stamp.current_version,
            duration_ms = duration_ms as u64,
            "Catalog build completed"
        );
        Ok(BuildReport {
            catalog,
            written,
            duration_ms,
        })
    }
}
