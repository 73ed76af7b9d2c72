use super::*;
use crate::test_utils::archive_with;

#[test]
fn test_profiles_are_sorted_and_deduplicated() {
    let archive = archive_with(&[(
        "ViewingActivity.csv",
        "Profile Name,Title\nb,x\na,y\na,z\nc,w\n",
    )]);
    let scan = extract_profiles(&archive, "ViewingActivity.csv");
    assert!(scan.error.is_none());
    assert_eq!(scan.to_vec(), vec!["a", "b", "c"]);
}

#[test]
fn test_missing_entry_yields_no_profiles() {
    let archive = archive_with(&[("Ratings.csv", "Profile Name\nbob\n")]);
    let scan = extract_profiles(&archive, "ViewingActivity.csv");
    assert!(scan.profiles.is_empty());
    assert!(matches!(
        scan.error,
        Some(ExtractError::Archive(crate::types::ArchiveError::MissingEntry(_)))
    ));
}

#[test]
fn test_malformed_entry_yields_no_profiles() {
    let archive = archive_with(&[("ViewingActivity.csv", "a,b\n1,2,3,4\n")]);
    let scan = extract_profiles(&archive, "ViewingActivity.csv");
    assert!(scan.profiles.is_empty());
    assert!(scan.error.is_some());
}

#[test]
fn test_header_only_file_has_zero_profiles_without_error() {
    let archive = archive_with(&[("ViewingActivity.csv", "Profile Name,Title\n")]);
    let scan = extract_profiles(&archive, "ViewingActivity.csv");
    assert!(scan.profiles.is_empty());
    assert!(scan.error.is_none());
}

#[test]
fn test_unreadable_archive_yields_no_profiles() {
    let archive = DdpArchive::from_bytes("bad.zip", vec![1, 2, 3]);
    let scan = extract_profiles(&archive, "ViewingActivity.csv");
    assert!(scan.profiles.is_empty());
    assert!(scan.error.is_some());
}
