use louvores::catalog::CatalogEntry;
use louvores::code::{category_prefix, folder_number, CodeAssigner};
use louvores::naming::{clean_name, parse_folder_name, sequence_number};
use proptest::prelude::*;
use std::collections::HashSet;

fn entry(category: &str, folder: &str) -> CatalogEntry {
    CatalogEntry {
        name: folder.to_string(),
        classification: String::new(),
        category: String::new(),
        sequence_number: None,
        status: None,
        full_path: format!("assets2/{}/{}", category, folder),
        pdf_files: vec![format!("assets2/{}/{}/a.pdf", category, folder)],
        subfolders: vec![],
        has_subfolders: false,
        total_file_count: 1,
        code: None,
    }
}

proptest! {
    #[test]
    fn prefix_is_three_uppercase_alphanumerics(name in "\\PC{0,40}") {
        let prefix = category_prefix(&name);
        prop_assert_eq!(prefix.len(), 3);
        prop_assert!(prefix.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        prop_assert_eq!(category_prefix(&name), prefix);
    }

    #[test]
    fn alphabetic_names_give_letter_prefixes(name in "[A-Za-z]{1,12}( [A-Za-z]{1,12}){0,3}") {
        let prefix = category_prefix(&name);
        prop_assert!(prefix.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn folder_number_has_at_least_three_digits(name in "\\PC{0,30}") {
        let number = folder_number(&name);
        prop_assert!(number.len() >= 3);
        prop_assert!(number.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn numbered_names_parse(number in 0u32..100_000, status in "[VAP]", title in "[A-Za-z][A-Za-z ]{0,20}[A-Za-z]") {
        let folder = format!("{:03} - [{}] {}", number, status, title);
        let parsed = parse_folder_name(&folder);
        prop_assert_eq!(parsed.sequence_number, Some(u64::from(number)));
        prop_assert!(parsed.status.is_some());
        prop_assert_eq!(parsed.cleaned_name, title.clone());
        prop_assert_eq!(sequence_number(&title), None);
    }

    #[test]
    fn clean_name_is_trimmed(name in "\\PC{0,40}") {
        let cleaned = clean_name(&name);
        prop_assert_eq!(cleaned.trim(), cleaned.as_str());
    }

    #[test]
    fn assigned_codes_are_unique(folders in prop::collection::vec("[0-9]{1,3} - \\[V\\] [a-z]{1,6}", 1..60)) {
        let entries: Vec<_> = folders
            .iter()
            .enumerate()
            .map(|(i, folder)| entry(if i % 2 == 0 { "Category" } else { "Catalog" }, folder))
            .collect();
        let report = CodeAssigner::new("assets2").assign(entries);
        let codes: Vec<_> = report.entries.iter().filter_map(|e| e.code.clone()).collect();
        let unique: HashSet<_> = codes.iter().collect();
        prop_assert_eq!(unique.len(), codes.len());
        prop_assert_eq!(codes.len(), report.assigned_count());
    }
}
