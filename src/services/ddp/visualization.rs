//! Chart hints carried alongside consent tables. The host renders them.

use crate::types::Translatable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Visualization {
    Wordcloud(WordCloud),
    Area(TimeChart),
    Bar(TimeChart),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordCloud {
    pub title: Translatable,
    pub text_column: String,
    pub value_column: String,
}

/// Values aggregated over time buckets of a date column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeChart {
    pub title: Translatable,
    pub group: TimeGroup,
    pub values: Vec<AggregatedColumn>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeGroup {
    pub column: String,
    pub date_format: DateFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    Month,
    HourCycle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedColumn {
    pub column: String,
    pub aggregate: Aggregate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregate {
    Sum,
}

impl TimeChart {
    /// Sum `value_column` per `format` bucket of `date_column`.
    pub fn summed(
        title: Translatable,
        date_column: &str,
        format: DateFormat,
        label: Option<&str>,
        value_column: &str,
    ) -> Self {
        Self {
            title,
            group: TimeGroup {
                column: date_column.to_string(),
                date_format: format,
                label: label.map(str::to_string),
            },
            values: vec![AggregatedColumn {
                column: value_column.to_string(),
                aggregate: Aggregate::Sum,
            }],
        }
    }
}
