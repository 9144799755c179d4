use louvores::catalog::OutputSettings;
use louvores::code::CodeOutcome;
use louvores::pipeline::CatalogPipeline;
use louvores::error::CatalogError;
use louvores::types::Status;

use crate::integration::support::Fixture;

fn pipeline(fixture: &Fixture) -> CatalogPipeline {
    CatalogPipeline::new(
        fixture.root(),
        fixture.workspace().join("out"),
        OutputSettings::default(),
    )
}

#[test]
fn two_songs_in_one_category_get_sequential_codes() {
    let fixture = Fixture::new();
    fixture
        .file("CategoryA/001 - [V] Song One/score.pdf")
        .file("CategoryA/002 - [A] Song Two/score.pdf");

    let catalog = pipeline(&fixture).build().unwrap();
    let entries = catalog.entries();
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].name, "Song One");
    assert_eq!(entries[0].sequence_number, Some(1));
    assert_eq!(entries[0].status, Some(Status::Complete));
    assert_eq!(entries[0].code.as_deref(), Some("CAT001"));
    assert_eq!(entries[0].category, "CategoryA");
    assert_eq!(entries[0].full_path, "assets2/CategoryA/001 - [V] Song One");

    assert_eq!(entries[1].status, Some(Status::Incomplete));
    assert_eq!(entries[1].code.as_deref(), Some("CAT002"));
    assert!(catalog.naming_warnings.is_empty());
}

#[test]
fn organizational_folder_pdfs_are_invisible() {
    let fixture = Fixture::new();
    fixture.file("CategoryB/Cordas/violino.pdf");

    let catalog = pipeline(&fixture).build().unwrap();
    assert!(catalog.entries().is_empty());
    // still present in the scanned structure
    assert_eq!(
        catalog.structure.subdirectories["CategoryB"].subdirectories["Cordas"].pdf_files,
        vec!["violino.pdf"]
    );
}

#[test]
fn nested_subfolder_counts_toward_total() {
    let fixture = Fixture::new();
    fixture
        .file("Hinos/010 - [V] Grande Hino/Grade.pdf")
        .file("Hinos/010 - [V] Grade Hino/Coro.pdf")
        .file("Hinos/010 - [V] Grade Hino/Grade.pdf")
        .file("Hinos/010 - [V] Grade Hino/Sopros/Flauta.pdf")
        .dir("Hinos/010 - [V] Grade Hino/Vazia");

    let catalog = pipeline(&fixture).build().unwrap();
    let entry = catalog
        .entries()
        .iter()
        .find(|e| e.name == "Grade Hino")
        .unwrap();
    assert_eq!(entry.total_file_count, 3);
    assert!(entry.has_subfolders);
    assert_eq!(entry.subfolders.len(), 1);
    assert_eq!(entry.subfolders[0].name, "Sopros");
    assert_eq!(
        entry.pdf_files,
        vec![
            "assets2/Hinos/010 - [V] Grade Hino/Coro.pdf",
            "assets2/Hinos/010 - [V] Grade Hino/Grade.pdf",
        ]
    );
}

#[test]
fn colliding_codes_get_suffix_letters() {
    let fixture = Fixture::new();
    fixture
        .file("Category/001 - [V] First/a.pdf")
        .file("Catalog/001 - [V] Second/a.pdf");

    let catalog = pipeline(&fixture).build().unwrap();
    let codes: Vec<_> = catalog
        .entries()
        .iter()
        .map(|e| e.code.clone().unwrap())
        .collect();
    // "Catalog" sorts before "Category"
    assert_eq!(codes, vec!["CAT001", "CAT001A"]);
    assert_eq!(catalog.codes.duplicate_count(), 1);
    assert!(matches!(
        &catalog.codes.outcomes[1],
        CodeOutcome::Suffixed { base, code } if base == "CAT001" && code == "CAT001A"
    ));
}

#[test]
fn audio_files_are_dropped() {
    let fixture = Fixture::new();
    fixture
        .file("Cat/[V] Hino/score.pdf")
        .file("Cat/[V] Hino/playback.mp3")
        .file("Cat/[V] Hino/guide.MID")
        .file("Cat/[V] Hino/cover.png");

    let catalog = pipeline(&fixture).build().unwrap();
    let node = &catalog.structure.subdirectories["Cat"].subdirectories["[V] Hino"];
    assert_eq!(node.pdf_files, vec!["score.pdf"]);
    assert_eq!(node.other_files, vec!["cover.png"]);
    assert_eq!(catalog.scan_stats.audio_skipped, 2);
}

#[test]
fn malformed_depth_two_names_are_warned_but_kept() {
    let fixture = Fixture::new();
    fixture
        .file("Cat/Hino Sem Padrao/score.pdf")
        .file("Cat/[P] Hino Com Padrao/score.pdf");

    let catalog = pipeline(&fixture).build().unwrap();
    assert_eq!(catalog.entries().len(), 2);
    assert_eq!(catalog.naming_warnings.len(), 1);
    assert_eq!(catalog.naming_warnings[0].path, "assets2/Cat/Hino Sem Padrao");
}

#[test]
fn missing_root_is_fatal() {
    let fixture = Fixture::new();
    let pipeline = CatalogPipeline::new(
        fixture.workspace().join("missing"),
        fixture.workspace().join("out"),
        OutputSettings::default(),
    );
    assert!(matches!(pipeline.run(), Err(CatalogError::RootNotFound(_))));
    assert!(!fixture.workspace().join("out").exists());
}

#[test]
fn run_writes_all_three_files() {
    let fixture = Fixture::new();
    fixture.file("Cat/001 - [V] Hino/score.pdf");

    let report = pipeline(&fixture).run().unwrap();
    assert!(report.written.catalog_script.is_file());
    assert!(report.written.version_file.is_file());
    assert!(report.written.mapping_file.is_file());
    assert_eq!(report.written.stamp.total_louvores, 1);
}
