use super::*;
use crate::test_utils::archive_with;

static TWO_CATEGORIES: &[DdpCategory] = &[
    DdpCategory {
        id: "first",
        filetype: DdpFiletype::Csv,
        language: Language::En,
        known_files: &["A.csv", "B.csv"],
    },
    DdpCategory {
        id: "second",
        filetype: DdpFiletype::Csv,
        language: Language::En,
        known_files: &["B.csv", "C.csv", "D.txt"],
    },
];

// Covers: unreadable container
#[test]
fn test_garbage_bytes_are_bad_archive() {
    let archive = DdpArchive::from_bytes("junk.zip", b"definitely not a zip".to_vec());
    let result = validate(&archive);
    assert_eq!(result.status, ValidationStatus::BadArchive);
    assert!(result.category.is_none());
    assert_eq!(result.status.code(), 1);
    assert_eq!(result.status.message(), "Bad zipfile");
}

#[test]
fn test_empty_bytes_are_bad_archive() {
    let archive = DdpArchive::from_bytes("empty.zip", Vec::new());
    assert_eq!(validate(&archive), ValidationResult::bad_archive());
}

// Covers: readable container with known files
#[test]
fn test_netflix_export_is_recognized() {
    let archive = archive_with(&[
        ("netflix-report/CONTENT_INTERACTION/ViewingActivity.csv", "Profile Name\n"),
        ("netflix-report/CONTENT_INTERACTION/Ratings.csv", "Profile Name\n"),
        ("netflix-report/Cover sheet.pdf", "%PDF"),
    ]);
    let result = validate(&archive);
    assert_eq!(result.status, ValidationStatus::Valid);
    assert_eq!(result.category.map(|c| c.id), Some("csv"));
    assert!(result.is_recognized());
}

// Covers: readable but unrecognized container
#[test]
fn test_unknown_files_are_valid_but_unrecognized() {
    let archive = archive_with(&[("photos/holiday.jpg", "jpeg"), ("notes.csv", "a,b\n")]);
    let result = validate(&archive);
    assert_eq!(result.status, ValidationStatus::Valid);
    assert!(result.category.is_none());
}

#[test]
fn test_extension_filter_is_exact() {
    // Known base name, but the extension is not an accepted one
    let archive = archive_with(&[("Ratings.CSV", "x"), ("ViewingActivity.json", "{}")]);
    assert!(validate(&archive).category.is_none());
}

#[test]
fn test_largest_overlap_wins() {
    let archive = archive_with(&[("B.csv", ""), ("C.csv", ""), ("D.txt", "")]);
    let result = validate_against(&archive, TWO_CATEGORIES);
    assert_eq!(result.category.map(|c| c.id), Some("second"));
}

#[test]
fn test_tie_goes_to_first_declared_category() {
    let observed: HashSet<String> = ["A.csv", "C.csv"].iter().map(|s| s.to_string()).collect();
    let category = infer_category(&observed, TWO_CATEGORIES);
    assert_eq!(category.map(|c| c.id), Some("first"));
}

#[test]
fn test_only_single_category_overlap() {
    let observed: HashSet<String> = ["D.txt".to_string()].into_iter().collect();
    assert_eq!(infer_category(&observed, TWO_CATEGORIES).map(|c| c.id), Some("second"));
    assert!(infer_category(&HashSet::new(), TWO_CATEGORIES).is_none());
}
