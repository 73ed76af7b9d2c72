use crate::types::ArchiveError;
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

/// Read-only handle over a donated zip container, kept in memory for the
/// lifetime of one session.
#[derive(Debug, Clone)]
pub struct DdpArchive {
    label: String,
    bytes: Vec<u8>,
}

impl DdpArchive {
    pub fn from_path(path: &Path) -> Result<Self, ArchiveError> {
        let bytes = fs::read(path)?;
        Ok(Self {
            label: path.display().to_string(),
            bytes,
        })
    }

    pub fn from_bytes(label: &str, bytes: Vec<u8>) -> Self {
        Self {
            label: label.to_string(),
            bytes,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    fn open(&self) -> Result<zip::ZipArchive<Cursor<&[u8]>>, ArchiveError> {
        Ok(zip::ZipArchive::new(Cursor::new(self.bytes.as_slice()))?)
    }

    /// Full entry names (including directories) in container order.
    pub fn entry_names(&self) -> Result<Vec<String>, ArchiveError> {
        let archive = self.open()?;
        Ok(archive.file_names().map(str::to_string).collect())
    }

    /// Bytes of the first entry whose base name equals `file_name`.
    pub fn read_entry(&self, file_name: &str) -> Result<Vec<u8>, ArchiveError> {
        let mut archive = self.open()?;

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;
            if entry.is_dir() {
                continue;
            }
            let matches = Path::new(entry.name())
                .file_name()
                .is_some_and(|name| name == file_name);
            if matches {
                let mut content = Vec::new();
                entry.read_to_end(&mut content)?;
                log::debug!("Read {} ({} bytes) from {}", file_name, content.len(), self.label);
                return Ok(content);
            }
        }

        Err(ArchiveError::MissingEntry(file_name.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/archive_tests.rs"]
mod tests;
