use louvores::config::CatalogConfig;
use louvores::error::CatalogError;
use louvores::tooling::{CliContext, Commands};
use serde_json::Value;
use std::fs;

use crate::integration::support::Fixture;

fn context(fixture: &Fixture) -> CliContext {
    fixture
        .file("Louvores Coletânea (PES)/055 - [V] Santo/Grade.pdf")
        .file("Louvores Coletânea (PES)/056 - [A] Aleluia/Coro.pdf")
        .file("Diversos/[P] Hino Livre/Coro.pdf");
    CliContext::with_config(fixture.workspace().to_path_buf(), CatalogConfig::default())
}

fn json(output: &str) -> Value {
    serde_json::from_str(output).unwrap()
}

#[test]
fn build_json_reports_stamp_and_files() {
    let fixture = Fixture::new();
    let ctx = context(&fixture);
    let out = json(
        &ctx.execute(&Commands::Build {
            format: "json".to_string(),
        })
        .unwrap(),
    );
    assert_eq!(out["total"], 3);
    assert_eq!(out["version"]["totalLouvores"], 3);
    assert_eq!(out["duplicates"], 0);
    assert_eq!(out["unassigned"], 0);
    assert!(out["categories"]["Louvores Coletânea (PES)"].is_object());
    assert!(fixture.workspace().join("assets2-louvores.js").is_file());
    assert!(fixture.workspace().join("assets2-version.json").is_file());
}

#[test]
fn build_text_mentions_version() {
    let fixture = Fixture::new();
    let ctx = context(&fixture);
    let out = ctx
        .execute(&Commands::Build {
            format: "text".to_string(),
        })
        .unwrap();
    let stamp: Value = serde_json::from_str(
        &fs::read_to_string(fixture.workspace().join("assets2-version.json")).unwrap(),
    )
    .unwrap();
    assert!(out.contains(stamp["currentVersion"].as_str().unwrap()));
}

#[test]
fn validate_json_flags_malformed_names() {
    let fixture = Fixture::new();
    fixture.file("Diversos/Sem Padrao/x.pdf");
    let ctx = context(&fixture);
    let out = json(
        &ctx.execute(&Commands::Validate {
            format: "json".to_string(),
        })
        .unwrap(),
    );
    assert_eq!(out["valid"], false);
    assert_eq!(out["naming_warnings"][0]["path"], "assets2/Diversos/Sem Padrao");
    // validate never writes
    assert!(!fixture.workspace().join("assets2-louvores.js").exists());
}

#[test]
fn search_json_returns_matching_entries() {
    let fixture = Fixture::new();
    let ctx = context(&fixture);
    let out = json(
        &ctx.execute(&Commands::Search {
            query: "aleluia".to_string(),
            format: "json".to_string(),
        })
        .unwrap(),
    );
    let results = out.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["code"], "LCP056");
    assert_eq!(results[0]["status"], "A");
}

#[test]
fn codes_json_resolves_and_builds_share_link() {
    let fixture = Fixture::new();
    let ctx = context(&fixture);
    let out = json(
        &ctx.execute(&Commands::Codes {
            codes: "lcp055_santo,XYZ999,bad".to_string(),
            share_base: Some("https://example.org/index.html".to_string()),
            name: "Culto".to_string(),
            timestamp: String::new(),
            format: "json".to_string(),
        })
        .unwrap(),
    );
    assert_eq!(out["found"].as_array().unwrap().len(), 1);
    assert_eq!(out["found"][0]["name"], "Santo");
    assert_eq!(out["missing"][0], "XYZ999");
    assert_eq!(
        out["share_url"],
        "https://example.org/index.html?codes=LCP055_SANTO%2CXYZ999&playlist=Culto"
    );
}

#[test]
fn invalid_share_base_is_an_error() {
    let fixture = Fixture::new();
    let ctx = context(&fixture);
    let result = ctx.execute(&Commands::Codes {
        codes: "LCP055".to_string(),
        share_base: Some("not a url".to_string()),
        name: String::new(),
        timestamp: String::new(),
        format: "text".to_string(),
    });
    assert!(matches!(result, Err(CatalogError::ConfigError(_))));
}

#[test]
fn missing_scan_root_fails_every_command() {
    let fixture = Fixture::new();
    let mut config = CatalogConfig::default();
    config.scan.root = "nowhere".into();
    let ctx = CliContext::with_config(fixture.workspace().to_path_buf(), config);
    let result = ctx.execute(&Commands::Search {
        query: "x".to_string(),
        format: "text".to_string(),
    });
    assert!(matches!(result, Err(CatalogError::RootNotFound(_))));
}

#[test]
fn workspace_config_file_is_honored() {
    let fixture = Fixture::new();
    fixture.file("Cat/001 - [V] Hino/a.pdf");
    fs::write(
        fixture.workspace().join("louvores.toml"),
        "[output]\ndir = \"public\"\nversion_file = \"stamp.json\"\n",
    )
    .unwrap();
    let ctx = CliContext::new(fixture.workspace().to_path_buf(), None).unwrap();
    ctx.execute(&Commands::Build {
        format: "json".to_string(),
    })
    .unwrap();
    assert!(fixture.workspace().join("public/stamp.json").is_file());
}
