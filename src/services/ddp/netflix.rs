//! Netflix-specific tables: ratings and viewing activity.

use super::archive::DdpArchive;
use super::pipeline::{Derivation, Exclusion, Extraction, TablePipeline};
use super::table::Cell;
use super::visualization::{DateFormat, TimeChart, Visualization, WordCloud};
use crate::types::{ConsentTable, Translatable};

pub const RATINGS_FILE: &str = "Ratings.csv";
pub const VIEWING_ACTIVITY_FILE: &str = "ViewingActivity.csv";

/// Supplemental video types that are not real viewing.
pub const EXCLUDED_VIDEO_TYPES: &[&str] = &["TEASER_TRAILER", "HOOK", "TRAILER", "CINEMAGRAPH"];

pub const RATINGS: TablePipeline = TablePipeline {
    source: RATINGS_FILE,
    keep: &["Title Name", "Thumbs Value", "Event Utc Ts"],
    renames: &[
        ("Title Name", "Title"),
        ("Thumbs Value", "ThumbsUpCount"),
        ("Event Utc Ts", "DateTime"),
    ],
    exclude: None,
    derive: None,
    sort_by: None,
};

pub const VIEWING_ACTIVITY: TablePipeline = TablePipeline {
    source: VIEWING_ACTIVITY_FILE,
    keep: &["Start Time", "Duration", "Title", "Supplemental Video Type"],
    renames: &[
        ("Start Time", "StartTime"),
        ("Title", "Title"),
        ("Supplemental Video Type", "SupplementalInfo"),
        ("Duration", "HoursWatched"),
    ],
    exclude: Some(Exclusion {
        column: "Supplemental Video Type",
        values: EXCLUDED_VIDEO_TYPES,
    }),
    derive: Some(Derivation {
        column: "HoursWatched",
        derive: hours_watched,
    }),
    sort_by: Some("StartTime"),
};

/// `"H:MM:SS"` to fractional hours rounded to three decimals.
/// Anything that is not three integer fields gives `0.0`.
pub fn duration_to_hours(duration: &str) -> f64 {
    let parts: Vec<&str> = duration.split(':').collect();
    let &[h, m, s] = parts.as_slice() else {
        return 0.0;
    };

    let parse = |v: &str| v.trim().parse::<i128>().ok();
    let seconds = match (parse(h), parse(m), parse(s)) {
        (Some(h), Some(m), Some(s)) => h
            .checked_mul(3600)
            .zip(m.checked_mul(60))
            .and_then(|(h, m)| h.checked_add(m))
            .and_then(|hm| hm.checked_add(s)),
        _ => None,
    };
    match seconds {
        Some(seconds) => round_to_millis(seconds as f64 / 3600.0),
        None => 0.0,
    }
}

/// Round on the exact binary value, ties to even: `0.0075` is stored
/// below the tie and becomes `0.007`.
fn round_to_millis(value: f64) -> f64 {
    format!("{value:.3}").parse().unwrap_or(0.0)
}

fn hours_watched(cell: &Cell) -> Cell {
    Cell::Number(cell.as_text().map_or(0.0, duration_to_hours))
}

pub fn ratings(archive: &DdpArchive, profile: &str) -> Extraction {
    RATINGS.run(archive, profile)
}

pub fn viewing_activity(archive: &DdpArchive, profile: &str) -> Extraction {
    VIEWING_ACTIVITY.run(archive, profile)
}

/// All non-empty consent tables for `profile`: ratings first, then viewing activity.
pub fn consent_tables(archive: &DdpArchive, profile: &str) -> Vec<ConsentTable> {
    extract_all(archive, profile)
        .into_iter()
        .filter_map(|(id, extraction)| consent_table(id, extraction))
        .collect()
}

/// Wrap an extraction for review; empty tables are never offered.
pub fn consent_table(id: TableId, extraction: Extraction) -> Option<ConsentTable> {
    if extraction.table.is_empty() {
        return None;
    }
    Some(match id {
        TableId::Ratings => ratings_consent(extraction),
        TableId::Viewings => viewings_consent(extraction),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableId {
    Ratings,
    Viewings,
}

/// Raw extraction results, in presentation order.
pub fn extract_all(archive: &DdpArchive, profile: &str) -> Vec<(TableId, Extraction)> {
    vec![
        (TableId::Ratings, ratings(archive, profile)),
        (TableId::Viewings, viewing_activity(archive, profile)),
    ]
}

fn ratings_consent(extraction: Extraction) -> ConsentTable {
    let wordcloud = Visualization::Wordcloud(WordCloud {
        title: Translatable::new(
            "Titles rated by thumbs value",
            "Gekeken titels, grootte is gebaseerd op het aantal duimpjes omhoog",
        ),
        text_column: "Title".to_string(),
        value_column: "ThumbsUpCount".to_string(),
    });

    ConsentTable {
        id: "netflix_rating".to_string(),
        title: Translatable::new("Your ratings on Netflix", "Uw beoordelingen op Netflix"),
        table: extraction.table,
        description: Translatable::new(
            "Click 'Show Table' to view these ratings per row.",
            "Klik op ‘Tabel tonen’ om deze beoordelingen per rij te bekijken.",
        ),
        visualizations: vec![wordcloud],
    }
}

fn viewings_consent(extraction: Extraction) -> ConsentTable {
    let per_month = TimeChart::summed(
        Translatable::new(
            "Total hours watched per month of the year",
            "Totaal aantal uren gekeken per maand van het jaar",
        ),
        "StartTime",
        DateFormat::Month,
        Some("Month"),
        "HoursWatched",
    );
    let per_hour = TimeChart::summed(
        Translatable::new(
            "Total hours watched by hour of the day",
            "Totaal aantal uur gekeken op uur van de dag",
        ),
        "StartTime",
        DateFormat::HourCycle,
        None,
        "HoursWatched",
    );

    ConsentTable {
        id: "netflix_viewings".to_string(),
        title: Translatable::new("What you watched", "Wanneer kijkt u Netflix"),
        table: extraction.table,
        description: Translatable::new(
            "This table shows what titles you watched when and for how long.",
            "Klik op ‘Tabel tonen’ om voor elke keer dat u iets op Netflix heeft gekeken te zien welke serie of film dit was, wanneer u dit heeft gekeken en hoe lang.",
        ),
        visualizations: vec![Visualization::Area(per_month), Visualization::Bar(per_hour)],
    }
}

#[cfg(test)]
#[path = "tests/netflix_tests.rs"]
mod tests;
