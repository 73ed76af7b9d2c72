use serde::Serialize;
use thiserror::Error;

/// Failure to open or read the donated archive container.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Bad zipfile: {0}")]
    Container(#[from] zip::result::ZipError),
    #[error("Entry not found in archive: {0}")]
    MissingEntry(String),
}

/// Why a single file could not be turned into (part of) a table.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Archive error: {0}")]
    Archive(#[from] ArchiveError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Entry is not valid UTF-8: {0}")]
    Undecodable(String),
    #[error("File has no header row: {0}")]
    EmptyFile(String),
    #[error("Column not found: {0}")]
    MissingColumn(String),
}

impl Serialize for ExtractError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
