//! Recognises which data download package an archive is.
//!
//! The container is only opened here; whether it matches a category is
//! decided purely by the base names of its document and tabular entries.

use super::archive::DdpArchive;
use std::collections::HashSet;
use std::path::Path;

/// Entry extensions taken into account when matching categories.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["txt", "csv", "pdf"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DdpFiletype {
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DdpCategory {
    pub id: &'static str,
    pub filetype: DdpFiletype,
    pub language: Language,
    pub known_files: &'static [&'static str],
}

/// Known package layouts, in tie-break priority order.
pub static DDP_CATEGORIES: &[DdpCategory] = &[DdpCategory {
    id: "csv",
    filetype: DdpFiletype::Csv,
    language: Language::En,
    known_files: &[
        "MyList.csv",
        "ViewingActivity.csv",
        "SearchHistory.csv",
        "IndicatedPreferences.csv",
        "PlaybackRelatedEvents.csv",
        "InteractiveTitles.csv",
        "Ratings.csv",
        "GamePlaySession.txt",
        "IpAddressesLogin.csv",
        "IpAddressesAccountCreation.txt",
        "IpAddressesStreaming.csv",
        "Additional Information.pdf",
        "MessagesSentByNetflix.csv",
        "SocialMediaConnections.txt",
        "AccountDetails.csv",
        "ProductCancellationSurvey.txt",
        "CSContact.csv",
        "ChatTranscripts.csv",
        "Cover sheet.pdf",
        "Devices.csv",
        "ParentalControlsRestrictedTitles.txt",
        "AvatarHistory.csv",
        "Profiles.csv",
        "Clickstream.csv",
        "BillingHistory.csv",
    ],
}];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    Valid,
    BadArchive,
}

impl ValidationStatus {
    pub fn code(self) -> u8 {
        match self {
            Self::Valid => 0,
            Self::BadArchive => 1,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Valid => "Valid zip",
            Self::BadArchive => "Bad zipfile",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub status: ValidationStatus,
    pub category: Option<&'static DdpCategory>,
}

impl ValidationResult {
    pub fn bad_archive() -> Self {
        Self {
            status: ValidationStatus::BadArchive,
            category: None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        self.category.is_some()
    }
}

/// Classify `archive` against the built-in categories.
pub fn validate(archive: &DdpArchive) -> ValidationResult {
    validate_against(archive, DDP_CATEGORIES)
}

pub fn validate_against(
    archive: &DdpArchive,
    categories: &'static [DdpCategory],
) -> ValidationResult {
    let names = match archive.entry_names() {
        Ok(names) => names,
        Err(e) => {
            log::error!("Cannot open {}: {e}", archive.label());
            return ValidationResult::bad_archive();
        }
    };

    let observed: HashSet<String> = names
        .iter()
        .map(Path::new)
        .filter(|p| {
            p.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext))
        })
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
        .inspect(|name| log::debug!("Found: {name} in zip"))
        .map(str::to_string)
        .collect();

    ValidationResult {
        status: ValidationStatus::Valid,
        category: infer_category(&observed, categories),
    }
}

/// Category with the largest non-zero overlap; ties keep the earliest one.
pub fn infer_category(
    observed: &HashSet<String>,
    categories: &'static [DdpCategory],
) -> Option<&'static DdpCategory> {
    let mut best: Option<(&'static DdpCategory, usize)> = None;

    for category in categories {
        let overlap = category
            .known_files
            .iter()
            .filter(|f| observed.contains(**f))
            .count();
        if overlap > 0 && best.map_or(true, |(_, score)| overlap > score) {
            best = Some((category, overlap));
        }
    }

    match best {
        Some((category, score)) => {
            log::info!("Detected DDP category: {} ({score} known files)", category.id);
            Some(category)
        }
        None => {
            log::info!("No known DDP category detected");
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/validator_tests.rs"]
mod tests;
