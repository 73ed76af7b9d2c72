//! Per-table extraction pipeline.
//!
//! locate entry -> parse -> keep selected profile -> project -> exclude ->
//! rename -> derive -> sort. Read and parse failures yield an empty table;
//! a failure in a later stage yields the table as it stood before that stage.

use super::archive::DdpArchive;
use super::table::{Cell, Table};
use crate::types::ExtractError;
use std::collections::HashMap;
use std::fmt;

/// Drop rows whose `column` holds one of `values`. Applied before renaming.
#[derive(Debug, Clone, Copy)]
pub struct Exclusion {
    pub column: &'static str,
    pub values: &'static [&'static str],
}

/// Recompute every cell of `column` (a post-rename name).
#[derive(Debug, Clone, Copy)]
pub struct Derivation {
    pub column: &'static str,
    pub derive: fn(&Cell) -> Cell,
}

#[derive(Debug, Clone)]
pub struct TablePipeline {
    pub source: &'static str,
    pub keep: &'static [&'static str],
    pub renames: &'static [(&'static str, &'static str)],
    pub exclude: Option<Exclusion>,
    pub derive: Option<Derivation>,
    pub sort_by: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Project,
    Exclude,
    Derive,
    Sort,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Project => "project",
            Stage::Exclude => "exclude",
            Stage::Derive => "derive",
            Stage::Sort => "sort",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub enum ExtractionOutcome {
    /// Every configured stage ran.
    Complete,
    /// The file parsed but holds no rows for the selected profile.
    NoRows,
    /// The entry is missing or could not be parsed.
    Unreadable(ExtractError),
    /// A transformation stage failed; the table is the last good state.
    Interrupted { stage: Stage, error: ExtractError },
}

#[derive(Debug)]
pub struct Extraction {
    pub table: Table,
    pub outcome: ExtractionOutcome,
}

impl TablePipeline {
    pub fn run(&self, archive: &DdpArchive, profile: &str) -> Extraction {
        let table = match self.read(archive) {
            Ok(table) => table,
            Err(e) => {
                log::error!("Cannot read {}: {e}", self.source);
                return Extraction {
                    table: Table::empty(self.source),
                    outcome: ExtractionOutcome::Unreadable(e),
                };
            }
        };

        let mut table = table.keep_first_column_eq(profile);
        if table.is_empty() {
            log::info!("No rows for the selected profile in {}", self.source);
            return Extraction {
                table,
                outcome: ExtractionOutcome::NoRows,
            };
        }

        let outcome = match self.transform(&mut table) {
            Ok(()) => ExtractionOutcome::Complete,
            Err((stage, error)) => {
                log::error!("Data extraction error in {} ({stage}): {error}", self.source);
                ExtractionOutcome::Interrupted { stage, error }
            }
        };
        Extraction { table, outcome }
    }

    fn read(&self, archive: &DdpArchive) -> Result<Table, ExtractError> {
        let bytes = archive.read_entry(self.source)?;
        Table::from_csv(self.source, &bytes)
    }

    fn transform(&self, table: &mut Table) -> Result<(), (Stage, ExtractError)> {
        *table = table.select(self.keep).map_err(|e| (Stage::Project, e))?;

        if let Some(exclusion) = self.exclude {
            *table = table
                .exclude(exclusion.column, exclusion.values)
                .map_err(|e| (Stage::Exclude, e))?;
        }

        let renames: HashMap<&str, &str> = self.renames.iter().copied().collect();
        *table = table.rename(&renames);

        if let Some(derivation) = self.derive {
            *table = table
                .map_column(derivation.column, derivation.derive)
                .map_err(|e| (Stage::Derive, e))?;
        }

        if let Some(column) = self.sort_by {
            *table = table.sort_by(column).map_err(|e| (Stage::Sort, e))?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
