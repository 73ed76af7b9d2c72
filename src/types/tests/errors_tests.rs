use super::*;

#[test]
fn test_extract_error_serializes_as_display_string() {
    let err = ExtractError::MissingColumn("Title".to_string());
    let serialized = serde_json::to_string(&err).unwrap();
    assert_eq!(serialized, "\"Column not found: Title\"");
}

#[test]
fn test_archive_error_wraps_into_extract_error() {
    let err: ExtractError = ArchiveError::MissingEntry("Ratings.csv".to_string()).into();
    match &err {
        ExtractError::Archive(ArchiveError::MissingEntry(name)) => assert_eq!(name, "Ratings.csv"),
        other => panic!("Expected ExtractError::Archive, got {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "Archive error: Entry not found in archive: Ratings.csv"
    );
}

#[test]
fn test_io_error_converts_to_archive_error() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err = ArchiveError::from(io);
    assert!(matches!(err, ArchiveError::Io(_)));
    assert!(err.to_string().contains("gone"));
}
