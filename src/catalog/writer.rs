//! Catalog output files
//!
//! Writes the browser catalog script, the version stamp used for cache-busting,
//! and the raw mapping dump. The content hash depends only on the serialized
//! entries, so an unchanged tree always produces the same version suffix.

use crate::catalog::entry::CatalogEntry;
use crate::error::CatalogError;
use crate::tree::FolderNode;
use crate::types::ContentHash;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Digest bytes kept for the content hash (8 hex characters).
const CONTENT_HASH_BYTES: usize = 4;

/// Output file names and the browser global receiving the entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Output directory, relative to the workspace root
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_catalog_script")]
    pub catalog_script: String,
    #[serde(default = "default_version_file")]
    pub version_file: String,
    #[serde(default = "default_mapping_file")]
    pub mapping_file: String,
    #[serde(default = "default_global_name")]
    pub global_name: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_catalog_script() -> String {
    "assets2-louvores.js".to_string()
}

fn default_version_file() -> String {
    "assets2-version.json".to_string()
}

fn default_mapping_file() -> String {
    "assets2-mapping.json".to_string()
}

fn default_global_name() -> String {
    "louvoresAssets2ComCodigos".to_string()
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            catalog_script: default_catalog_script(),
            version_file: default_version_file(),
            mapping_file: default_mapping_file(),
            global_name: default_global_name(),
        }
    }
}

/// Contents of the version stamp file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionStamp {
    pub current_version: String,
    pub content_hash: ContentHash,
    pub total_louvores: usize,
    pub generated_at: String,
    pub filename: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScriptMeta<'a> {
    version: &'a str,
    generated_at: &'a str,
    total_louvores: usize,
    content_hash: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MappingDump<'a> {
    structure: &'a FolderNode,
    louvores: &'a [CatalogEntry],
    generated_at: &'a str,
}

/// Paths written and the stamp they carry.
#[derive(Debug, Clone, Serialize)]
pub struct WriteReport {
    pub catalog_script: PathBuf,
    pub version_file: PathBuf,
    pub mapping_file: PathBuf,
    pub stamp: VersionStamp,
}

/// Canonical JSON for a list of entries.
pub fn canonical_json(entries: &[CatalogEntry]) -> Result<String, CatalogError> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// First 8 hex characters of the BLAKE3 digest of the canonical JSON.
pub fn content_hash(entries: &[CatalogEntry]) -> Result<ContentHash, CatalogError> {
    canonical_json(entries).map(|json| hash_json(&json))
}

fn hash_json(json: &str) -> ContentHash {
    let digest = blake3::hash(json.as_bytes());
    hex::encode(&digest.as_bytes()[..CONTENT_HASH_BYTES])
}

/// `YYYYMMDD.<hash>` for a generation time.
pub fn version_string(generated_at: &DateTime<Utc>, hash: &str) -> String {
    format!("{}.{}", generated_at.format("%Y%m%d"), hash)
}

/// Writes the three catalog output files into one directory.
pub struct CatalogWriter {
    out_dir: PathBuf,
    settings: OutputSettings,
}

impl CatalogWriter {
    /// `out_dir` is `settings.dir` already resolved against the workspace.
    pub fn new(out_dir: impl Into<PathBuf>, settings: OutputSettings) -> Self {
        CatalogWriter {
            out_dir: out_dir.into(),
            settings,
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Write all outputs stamped with the current time.
    pub fn write(
        &self,
        entries: &[CatalogEntry],
        structure: &FolderNode,
    ) -> Result<WriteReport, CatalogError> {
        self.write_at(entries, structure, Utc::now())
    }

    /// Write all outputs stamped with `generated_at`.
    pub fn write_at(
        &self,
        entries: &[CatalogEntry],
        structure: &FolderNode,
        generated_at: DateTime<Utc>,
    ) -> Result<WriteReport, CatalogError> {
        fs::create_dir_all(&self.out_dir).map_err(|e| CatalogError::io(&self.out_dir, e))?;

        let entries_json = canonical_json(entries)?;
        let hash = hash_json(&entries_json);
        let version = version_string(&generated_at, &hash);
        let timestamp = generated_at.to_rfc3339_opts(SecondsFormat::Millis, true);

        let stamp = VersionStamp {
            current_version: version.clone(),
            content_hash: hash.clone(),
            total_louvores: entries.len(),
            generated_at: timestamp.clone(),
            filename: format!("{}?v={}", self.settings.catalog_script, version),
        };

        let script = self.render_script(&entries_json, &stamp)?;
        let catalog_script = self.out_dir.join(&self.settings.catalog_script);
        write_file(&catalog_script, &script)?;
        info!(path = %catalog_script.display(), version = %version, "Catalog script written");

        let version_file = self.out_dir.join(&self.settings.version_file);
        write_file(&version_file, &serde_json::to_string_pretty(&stamp)?)?;
        info!(path = %version_file.display(), "Version stamp written");

        let mapping = MappingDump {
            structure,
            louvores: entries,
            generated_at: &timestamp,
        };
        let mapping_file = self.out_dir.join(&self.settings.mapping_file);
        write_file(&mapping_file, &serde_json::to_string_pretty(&mapping)?)?;
        info!(path = %mapping_file.display(), "Mapping dump written");

        Ok(WriteReport {
            catalog_script,
            version_file,
            mapping_file,
            stamp,
        })
    }

    fn render_script(&self, entries_json: &str, stamp: &VersionStamp) -> Result<String, CatalogError> {
        let global = &self.settings.global_name;
        let meta = ScriptMeta {
            version: &stamp.current_version,
            generated_at: &stamp.generated_at,
            total_louvores: stamp.total_louvores,
            content_hash: &stamp.content_hash,
        };
        let mut out = String::new();
        out.push_str("// Louvores catalog generated from the assets folder tree\n");
        out.push_str(&format!("// Generated at: {}\n", stamp.generated_at));
        out.push_str(&format!("// Version: {}\n", stamp.current_version));
        out.push_str(&format!("// Total louvores: {}\n\n", stamp.total_louvores));
        out.push_str(&format!("window.{} = {};\n\n", global, entries_json));
        out.push_str(&format!(
            "window.{}Meta = {};\n",
            global,
            serde_json::to_string_pretty(&meta)?
        ));
        Ok(out)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), CatalogError> {
    fs::write(path, contents).map_err(|e| CatalogError::io(path, e))
}
