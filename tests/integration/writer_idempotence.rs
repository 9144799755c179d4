use louvores::catalog::writer::content_hash;
use louvores::catalog::OutputSettings;
use louvores::pipeline::CatalogPipeline;
use serde_json::Value;
use std::fs;

use crate::integration::support::Fixture;

fn read_stamp(fixture: &Fixture) -> Value {
    serde_json::from_str(
        &fs::read_to_string(fixture.workspace().join("out/assets2-version.json")).unwrap(),
    )
    .unwrap()
}

#[test]
fn unchanged_tree_keeps_content_hash() {
    let fixture = Fixture::new();
    fixture
        .file("Cat/001 - [V] Hino/a.pdf")
        .file("Cat/002 - [P] Outro/b.pdf");
    let pipeline = CatalogPipeline::new(
        fixture.root(),
        fixture.workspace().join("out"),
        OutputSettings::default(),
    );

    let first = pipeline.run().unwrap();
    let first_stamp = read_stamp(&fixture);
    let second = pipeline.run().unwrap();
    let second_stamp = read_stamp(&fixture);

    assert_eq!(first.written.stamp.content_hash, second.written.stamp.content_hash);
    assert_eq!(first_stamp["contentHash"], second_stamp["contentHash"]);
    assert_eq!(second_stamp["totalLouvores"], 2);
    assert_eq!(
        first.written.stamp.content_hash,
        content_hash(first.catalog.entries()).unwrap()
    );
    let hash = second_stamp["contentHash"].as_str().unwrap();
    assert_eq!(hash.len(), 8);
    assert!(second_stamp["currentVersion"].as_str().unwrap().ends_with(hash));
}

#[test]
fn adding_a_pdf_changes_content_hash() {
    let fixture = Fixture::new();
    fixture.file("Cat/001 - [V] Hino/a.pdf");
    let pipeline = CatalogPipeline::new(
        fixture.root(),
        fixture.workspace().join("out"),
        OutputSettings::default(),
    );
    let before = pipeline.run().unwrap().written.stamp.content_hash;
    fixture.file("Cat/001 - [V] Hino/b.pdf");
    let after = pipeline.run().unwrap().written.stamp.content_hash;
    assert_ne!(before, after);
}

#[test]
fn catalog_script_exposes_entries_and_meta() {
    let fixture = Fixture::new();
    fixture.file("Cat/001 - [V] Hino/a.pdf");
    let settings = OutputSettings::default();
    let global = settings.global_name.clone();
    CatalogPipeline::new(fixture.root(), fixture.workspace().join("out"), settings)
        .run()
        .unwrap();

    let script = fs::read_to_string(fixture.workspace().join("out/assets2-louvores.js")).unwrap();
    assert!(script.contains(&format!("window.{} = ", global)));
    assert!(script.contains(&format!("window.{}Meta = ", global)));
    assert!(script.contains("\"code\": \"CAT001\""));
}
