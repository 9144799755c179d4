//! Human-readable output for CLI commands.

use crate::browse::CodeLookup;
use crate::catalog::{CatalogEntry, NamingWarning};
use crate::code::CodeOutcome;
use crate::pipeline::{BuildReport, BuiltCatalog};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn entries_table(entries: &[&CatalogEntry]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Code", "Number", "Status", "Name", "PDFs"]);
    for entry in entries {
        table.add_row(vec![
            entry.code.clone().unwrap_or_else(|| "-".to_string()),
            entry
                .sequence_number
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
            entry
                .status
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string()),
            entry.name.clone(),
            entry.total_file_count.to_string(),
        ]);
    }
    table
}

fn warnings_table(warnings: &[NamingWarning]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Folder", "Path"]);
    for warning in warnings {
        table.add_row(vec![warning.name.clone(), warning.path.clone()]);
    }
    table
}

/// Summary printed after a build.
pub fn format_build_text(report: &BuildReport) -> String {
    let catalog = &report.catalog;
    let stamp = &report.written.stamp;
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Catalog Build")));
    out.push_str(&format!("  Root: {}\n", catalog.structure.relative_path));
    out.push_str(&format!("  Folders scanned: {}\n", catalog.scan_stats.folders));
    out.push_str(&format!("  Audio files ignored: {}\n", catalog.scan_stats.audio_skipped));
    out.push_str(&format!("  Total louvores: {}\n", catalog.entries().len()));
    out.push_str(&format!("  Version: {}\n", stamp.current_version));
    out.push_str(&format!("  Duration: {} ms\n\n", report.duration_ms));

    out.push_str(&format!("{}\n\n", format_section_heading("Categories")));
    if catalog.codes.categories.is_empty() {
        out.push_str("No categories found.\n\n");
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Category", "Prefix", "Louvores", "Examples"]);
        for (category, stats) in &catalog.codes.categories {
            let mut examples = stats.sample_codes.join(", ");
            if stats.count > stats.sample_codes.len() {
                examples.push_str("...");
            }
            table.add_row(vec![
                category.clone(),
                stats.prefix.clone(),
                stats.count.to_string(),
                examples,
            ]);
        }
        out.push_str(&format!("{}\n\n", table));
    }

    out.push_str(&format_issues_text(catalog));

    out.push_str(&format!("{}\n\n", format_section_heading("Files")));
    out.push_str(&format!("  {}\n", report.written.catalog_script.display()));
    out.push_str(&format!("  {}\n", report.written.version_file.display()));
    out.push_str(&format!("  {}\n", report.written.mapping_file.display()));
    out
}

/// Naming warnings and code problems.
pub fn format_issues_text(catalog: &BuiltCatalog) -> String {
    let mut out = String::new();
    let duplicates = catalog.codes.duplicate_count();
    let unassigned = catalog.codes.unassigned_count();
    if catalog.naming_warnings.is_empty() && duplicates == 0 && unassigned == 0 {
        out.push_str("No issues found.\n\n");
        return out;
    }
    if !catalog.naming_warnings.is_empty() {
        out.push_str(&format!(
            "{}\n\n",
            format_section_heading("Folders hidden from search")
        ));
        out.push_str(&format!("{}\n", warnings_table(&catalog.naming_warnings)));
        out.push_str("  Valid patterns: \"001 - [P] Name\" or \"[P] Name\"\n\n");
    }
    if duplicates > 0 || unassigned > 0 {
        out.push_str(&format!("{}\n\n", format_section_heading("Code issues")));
        for (entry, outcome) in catalog.entries().iter().zip(&catalog.codes.outcomes) {
            match outcome {
                CodeOutcome::Suffixed { base, code } => out.push_str(&format!(
                    "  duplicate {} -> {}: {}\n",
                    base, code, entry.full_path
                )),
                CodeOutcome::Exhausted { base } => out.push_str(&format!(
                    "  no code (too many duplicates of {}): {}\n",
                    base, entry.full_path
                )),
                CodeOutcome::Unresolvable => {
                    out.push_str(&format!("  no code (path too short): {}\n", entry.full_path))
                }
                CodeOutcome::Assigned { .. } => {}
            }
        }
        out.push('\n');
    }
    out
}

/// Search results as a table.
pub fn format_search_text(query: &str, results: &[&CatalogEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Search")));
    if results.is_empty() {
        out.push_str(&format!("No louvores found for \"{}\".\n", query));
        return out;
    }
    out.push_str(&format!("{}\n\n", entries_table(results)));
    out.push_str(&format!("Total: {} louvores.\n", results.len()));
    out
}

/// Code lookup results as a table plus the missing codes.
pub fn format_lookup_text(lookup: &CodeLookup<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Playlist")));
    if lookup.found.is_empty() {
        out.push_str("No louvores found for the given codes.\n");
    } else {
        out.push_str(&format!("{}\n\n", entries_table(&lookup.found)));
    }
    if !lookup.missing.is_empty() {
        out.push_str(&format!("Codes not found: {}\n", lookup.missing.join(", ")));
    }
    out
}
