//! Command/response vocabulary exchanged with the presentation host.

use super::translatable::Translatable;
use crate::services::ddp::table::Table;
use crate::services::ddp::visualization::Visualization;
use serde::{Deserialize, Serialize};

/// Emitted by the flow controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    RenderPage(Page),
    Donate { key: String, json_string: String },
    Exit { code: i32, info: String },
}

impl Command {
    /// Whether the host must answer this command with a user response.
    pub fn expects_response(&self) -> bool {
        match self {
            Command::RenderPage(page) => !matches!(page.body, PageBody::EndPage),
            _ => false,
        }
    }
}

/// Supplied by the host in reply to the last prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Response {
    StringPayload(String),
    BooleanTrue,
    BooleanFalse,
    JsonPayload(String),
    NoPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Translatable>,
    pub body: PageBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageBody {
    FilePrompt {
        description: Translatable,
        accepted_media_types: String,
    },
    ConfirmPrompt {
        text: Translatable,
        confirm_label: Translatable,
        cancel_label: Translatable,
    },
    RadioSelect {
        title: Translatable,
        description: Translatable,
        options: Vec<RadioItem>,
    },
    ConsentForm {
        tables: Vec<ConsentTable>,
        description: Translatable,
        meta_tables: Vec<ConsentTable>,
    },
    Questionnaire {
        questions: Vec<Question>,
        description: Translatable,
    },
    EndPage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioItem {
    pub id: usize,
    pub value: String,
}

/// A reviewable table offered to the data subject before donation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsentTable {
    pub id: String,
    pub title: Translatable,
    pub table: Table,
    pub description: Translatable,
    pub visualizations: Vec<Visualization>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Question {
    MultipleChoice {
        id: u32,
        question: Translatable,
        choices: Vec<Translatable>,
    },
    Open {
        id: u32,
        question: Translatable,
    },
}

impl Question {
    pub fn id(&self) -> u32 {
        match self {
            Question::MultipleChoice { id, .. } | Question::Open { id, .. } => *id,
        }
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
