use crate::services::ddp::DdpArchive;
use std::io::{Cursor, Write};
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Build a zip in memory with the given entries.
pub fn zip_bytes(files: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        zip::write::SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for (entry_name, content) in files {
        writer.start_file(entry_name.to_string(), options).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

pub fn archive_with(files: &[(&str, &str)]) -> DdpArchive {
    init_logger();
    DdpArchive::from_bytes("test.zip", zip_bytes(files))
}

pub const VIEWING_HEADER: &str =
    "Profile Name,Start Time,Duration,Attributes,Title,Supplemental Video Type,Device Type,Bookmark,Latest Bookmark,Country";

pub const RATINGS_HEADER: &str =
    "Profile Name,Title Name,Rating Type,Star Value,Thumbs Value,Device Model,Event Utc Ts,Region View Date";

/// One viewing activity row with the columns the pipeline reads.
pub fn viewing_row(profile: &str, start: &str, duration: &str, title: &str, kind: &str) -> String {
    format!("{profile},{start},{duration},,{title},{kind},TV,0:10:00,0:10:00,NL (Netherlands)")
}

pub fn rating_row(profile: &str, title: &str, thumbs: &str, ts: &str) -> String {
    format!("{profile},{title},thumb,,{thumbs},TV,{ts},2023-01-01")
}

pub fn csv(header: &str, rows: &[String]) -> String {
    let mut out = String::from(header);
    for row in rows {
        out.push('\n');
        out.push_str(row);
    }
    out.push('\n');
    out
}

/// Write a zip with the given entries into `dir`.
pub fn write_zip(dir: &std::path::Path, name: &str, files: &[(&str, &str)]) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, zip_bytes(files)).unwrap();
    path
}
