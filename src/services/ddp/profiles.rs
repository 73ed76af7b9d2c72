use super::archive::DdpArchive;
use super::table::Table;
use crate::types::ExtractError;
use std::collections::BTreeSet;

/// Opaque profile identifier, verbatim from a file's first column.
pub type ProfileId = String;

/// Outcome of scanning one file for profiles.
///
/// A failed scan carries no profiles; callers treat it exactly like a file
/// that genuinely lists none, the error is kept for diagnostics only.
#[derive(Debug, Default)]
pub struct ProfileScan {
    pub profiles: BTreeSet<ProfileId>,
    pub error: Option<ExtractError>,
}

impl ProfileScan {
    /// Profiles in ascending order.
    pub fn to_vec(&self) -> Vec<ProfileId> {
        self.profiles.iter().cloned().collect()
    }
}

/// Distinct first-column values of `file_name`, sorted ascending.
pub fn extract_profiles(archive: &DdpArchive, file_name: &str) -> ProfileScan {
    match read_profiles(archive, file_name) {
        Ok(profiles) => ProfileScan {
            profiles,
            error: None,
        },
        Err(e) => {
            log::error!("Cannot extract profiles from {file_name}: {e}");
            ProfileScan {
                profiles: BTreeSet::new(),
                error: Some(e),
            }
        }
    }
}

fn read_profiles(archive: &DdpArchive, file_name: &str) -> Result<BTreeSet<ProfileId>, ExtractError> {
    let bytes = archive.read_entry(file_name)?;
    let table = Table::from_csv(file_name, &bytes)?;
    Ok(profiles_in(&table))
}

pub fn profiles_in(table: &Table) -> BTreeSet<ProfileId> {
    table.first_column().map(str::to_string).collect()
}

#[cfg(test)]
#[path = "tests/profiles_tests.rs"]
mod tests;
