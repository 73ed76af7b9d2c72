use crate::services::ddp::{DdpArchive, ProfileId, ValidationResult};
use crate::types::ConsentTable;
use serde::{Deserialize, Serialize};

/// Position of the donation flow. `AwaitFile` is initial, `Done` terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowState {
    AwaitFile,
    Validating,
    RetryInvalid,
    SelectingProfile,
    RetryNoProfile,
    Extracting,
    ReviewConsent,
    QuestionnaireHappy,
    QuestionnaireSad,
    Done,
}

/// The prompt whose answer the controller is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    File,
    Retry,
    Profile,
    Consent,
    Questionnaire { donated: bool },
}

/// Telemetry status donated at the end of each branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStatus {
    Donated,
    SkipFileSelection,
    SkipRetryFlow,
    SkipReviewConsent,
}

impl FlowStatus {
    pub fn code(self) -> &'static str {
        match self {
            Self::Donated => "DONATED",
            Self::SkipFileSelection => "SKIP_FILE_SELECTION",
            Self::SkipRetryFlow => "SKIP_RETRY_FLOW",
            Self::SkipReviewConsent => "SKIP_REVIEW_CONSENT",
        }
    }

    pub fn key_suffix(self) -> &'static str {
        match self {
            Self::Donated => "DONATED",
            Self::SkipFileSelection => "SKIP-FILE-SELECTION",
            Self::SkipRetryFlow => "SKIP-RETRY-FLOW",
            Self::SkipReviewConsent => "SKIP-REVIEW-CONSENT",
        }
    }
}

/// Everything accumulated during one run of the flow.
#[derive(Debug, Default)]
pub struct Session {
    pub payload: Option<String>,
    pub archive: Option<DdpArchive>,
    pub validation: Option<ValidationResult>,
    pub candidates: Vec<ProfileId>,
    pub selected_profile: Option<ProfileId>,
    pub consent_tables: Vec<ConsentTable>,
    pub answers: Option<String>,
}

impl Session {
    /// Forget the current file before prompting for another one.
    pub fn reset_file(&mut self) {
        *self = Self::default();
    }
}
