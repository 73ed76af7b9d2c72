//! Data download package handling: recognise the archive, find its
//! profiles, and turn raw files into reviewable tables.

pub mod archive;
pub mod netflix;
pub mod pipeline;
pub mod profiles;
pub mod table;
pub mod validator;
pub mod visualization;

pub use archive::DdpArchive;
pub use pipeline::{Extraction, ExtractionOutcome, Stage, TablePipeline};
pub use profiles::{extract_profiles, ProfileId, ProfileScan};
pub use table::{Cell, Table};
pub use validator::{validate, DdpCategory, ValidationResult, ValidationStatus};
pub use visualization::Visualization;
