use super::*;
use crate::test_utils::{init_logger, zip_bytes};
use std::io::Write;

#[test]
fn test_read_entry_matches_base_name_in_nested_folder() {
    let archive = DdpArchive::from_bytes(
        "nested.zip",
        zip_bytes(&[("MY_NETFLIX/CONTENT_INTERACTION/Ratings.csv", "Profile Name\nbob\n")]),
    );
    let content = archive.read_entry("Ratings.csv").unwrap();
    assert_eq!(content, b"Profile Name\nbob\n");
}

#[test]
fn test_read_entry_missing_is_reported() {
    let archive = DdpArchive::from_bytes("a.zip", zip_bytes(&[("Other.csv", "x")]));
    let err = archive.read_entry("Ratings.csv").unwrap_err();
    assert!(matches!(err, ArchiveError::MissingEntry(name) if name == "Ratings.csv"));
}

#[test]
fn test_read_entry_reads_large_compressed_entry_fully() {
    init_logger();
    let body = "bob,2023-01-01 20:00:00,00:30:00\n".repeat(50_000);

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);
    writer.start_file("ViewingActivity.csv", options).unwrap();
    writer.write_all(body.as_bytes()).unwrap();
    let bytes = writer.finish().unwrap().into_inner();
    assert!(bytes.len() < body.len());

    let archive = DdpArchive::from_bytes("big.zip", bytes);
    let content = archive.read_entry("ViewingActivity.csv").unwrap();
    assert_eq!(content.len(), body.len());
}

#[test]
fn test_entry_names_on_garbage_is_container_error() {
    let archive = DdpArchive::from_bytes("junk.zip", b"not a zip".to_vec());
    assert!(matches!(archive.entry_names(), Err(ArchiveError::Container(_))));
}
