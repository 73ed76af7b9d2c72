//! The donation flow as a resumable state machine.
//!
//! The host calls [`FlowController::resume`] with its answer to the previous
//! command and gets the next command back. Commands that need no answer
//! (donations, exit) are acknowledged with any response, conventionally
//! [`Response::NoPayload`]. Internal failures never escape: an unreadable
//! archive, a missing file or a broken table all end up in the retry or
//! empty-result branches.

use super::prompts;
use super::session_log::SessionLog;
use super::state::{FlowState, FlowStatus, Prompt, Session};
use crate::services::config::FlowConfig;
use crate::services::ddp::netflix;
use crate::services::ddp::{
    extract_profiles, validate, DdpArchive, ExtractionOutcome, ProfileScan, ValidationResult,
};
use crate::types::{Command, ConsentTable, Response};
use std::collections::VecDeque;
use std::path::Path;

struct Queued {
    command: Command,
    awaits: Option<Prompt>,
}

pub struct FlowController {
    config: FlowConfig,
    log: SessionLog,
    state: FlowState,
    session: Session,
    outbox: VecDeque<Queued>,
    awaiting: Option<Prompt>,
    closed: bool,
}

impl FlowController {
    pub fn new(config: FlowConfig, log: SessionLog) -> Self {
        let mut controller = Self {
            config,
            log,
            state: FlowState::AwaitFile,
            session: Session::default(),
            outbox: VecDeque::new(),
            awaiting: None,
            closed: false,
        };
        controller.log.info("Starting the donation flow");
        controller.push_logs();
        controller
    }

    /// Feed the answer to the last command and get the next one.
    /// Returns `None` once the end page has been emitted.
    pub fn resume(&mut self, response: Response) -> Option<Command> {
        match self.awaiting.take() {
            Some(prompt) => self.answer(prompt, response),
            None if response != Response::NoPayload => {
                log::debug!("Ignoring {response:?}: last command expected no answer");
            }
            None => {}
        }

        loop {
            if let Some(queued) = self.outbox.pop_front() {
                self.awaiting = queued.awaits;
                return Some(queued.command);
            }
            if self.closed {
                return None;
            }
            self.advance();
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn awaiting(&self) -> Option<Prompt> {
        self.awaiting
    }

    pub fn is_finished(&self) -> bool {
        self.closed && self.outbox.is_empty()
    }

    pub fn validation(&self) -> Option<&ValidationResult> {
        self.session.validation.as_ref()
    }

    pub fn profile_candidates(&self) -> &[String] {
        &self.session.candidates
    }

    pub fn selected_profile(&self) -> Option<&str> {
        self.session.selected_profile.as_deref()
    }

    pub fn consent_tables(&self) -> &[ConsentTable] {
        &self.session.consent_tables
    }

    pub fn questionnaire_answers(&self) -> Option<&str> {
        self.session.answers.as_deref()
    }

    pub fn session_log(&self) -> &SessionLog {
        &self.log
    }

    /// Run the non-interactive work of the current state and queue its commands.
    fn advance(&mut self) {
        let platform = self.config.platform.clone();
        match self.state {
            FlowState::AwaitFile => {
                self.log.info(format!("Prompt for file for {platform}"));
                self.push_logs();
                let prompt = prompts::file_prompt(&platform, &self.config.accepted_media_types);
                self.push_prompt(prompt, Prompt::File);
            }
            FlowState::Validating => self.validate_payload(),
            FlowState::RetryInvalid => {
                self.log.info(format!(
                    "Not a valid {platform} zip; No payload; prompt retry_confirmation"
                ));
                self.push_logs();
                self.push_prompt(prompts::retry_confirmation(&platform), Prompt::Retry);
            }
            FlowState::SelectingProfile => self.select_profile(),
            FlowState::RetryNoProfile => {
                self.log
                    .info("Selected user is empty after selection, enter retry flow");
                self.push_logs();
                self.push_prompt(prompts::retry_confirmation(&platform), Prompt::Retry);
            }
            FlowState::Extracting => self.extract_tables(),
            FlowState::ReviewConsent => {
                self.log.info(format!("Prompt consent; {platform}"));
                self.push_logs();
                let form = prompts::consent_form(&platform, self.session.consent_tables.clone());
                self.push_prompt(form, Prompt::Consent);
            }
            FlowState::QuestionnaireHappy => {
                let page = prompts::questionnaire(&platform, true);
                self.push_prompt(page, Prompt::Questionnaire { donated: true });
            }
            FlowState::QuestionnaireSad => {
                let page = prompts::questionnaire(&platform, false);
                self.push_prompt(page, Prompt::Questionnaire { donated: false });
            }
            FlowState::Done => {
                self.push(Command::Exit {
                    code: 0,
                    info: "Success".to_string(),
                });
                self.push(prompts::end_page());
                self.closed = true;
            }
        }
    }

    fn answer(&mut self, prompt: Prompt, response: Response) {
        let platform = self.config.platform.clone();
        match (prompt, response) {
            (Prompt::File, Response::StringPayload(path)) => {
                self.session.payload = Some(path);
                self.state = FlowState::Validating;
            }
            (Prompt::File, _) => {
                self.log.info("Skipped at file selection ending flow");
                self.finish_with(FlowStatus::SkipFileSelection);
            }
            (Prompt::Retry, Response::BooleanTrue) => {
                self.log.info("Retry requested; prompt for a new file");
                self.session.reset_file();
                self.state = FlowState::AwaitFile;
            }
            (Prompt::Retry, _) => {
                self.log.info("Skipped during retry ending flow");
                self.finish_with(FlowStatus::SkipRetryFlow);
            }
            (Prompt::Profile, Response::StringPayload(profile)) if !profile.is_empty() => {
                if !self.session.candidates.contains(&profile) {
                    self.log
                        .warn("Selected profile is not one of the offered options");
                }
                self.session.selected_profile = Some(profile);
                self.state = FlowState::Extracting;
            }
            (Prompt::Profile, _) => {
                self.log.info("User skipped during user selection");
                self.state = FlowState::RetryNoProfile;
            }
            (Prompt::Consent, Response::JsonPayload(payload)) => {
                self.log.info(format!("Data donated; {platform}"));
                self.push_donation(&platform, payload);
                self.push_logs();
                self.push_status(FlowStatus::Donated);
                self.state = FlowState::QuestionnaireHappy;
            }
            (Prompt::Consent, _) => {
                self.log.info(format!("Skipped after reviewing consent: {platform}"));
                self.push_logs();
                self.push_status(FlowStatus::SkipReviewConsent);
                self.state = FlowState::QuestionnaireSad;
            }
            (Prompt::Questionnaire { donated }, Response::JsonPayload(answers)) => {
                let key = if donated {
                    "questionnaire-donation"
                } else {
                    "questionnaire-no-donation"
                };
                self.push_donation(key, answers.clone());
                self.session.answers = Some(answers);
                self.state = FlowState::Done;
            }
            (Prompt::Questionnaire { .. }, _) => {
                self.log.info(format!("Skipped questionnaire: {platform}"));
                self.push_logs();
                self.state = FlowState::Done;
            }
        }
    }

    fn validate_payload(&mut self) {
        let result = match self.session.payload.clone() {
            Some(path) => match DdpArchive::from_path(Path::new(&path)) {
                Ok(archive) => {
                    let result = validate(&archive);
                    self.session.archive = Some(archive);
                    result
                }
                Err(e) => {
                    self.log.error(format!("Cannot read selected file: {e}"));
                    ValidationResult::bad_archive()
                }
            },
            None => ValidationResult::bad_archive(),
        };

        self.log.info(format!(
            "Validation: {} ({})",
            result.status.message(),
            result.status.code()
        ));
        self.session.validation = Some(result);

        if result.is_recognized() {
            self.log.info(format!("Payload for {}", self.config.platform));
            self.push_logs();
            self.state = FlowState::SelectingProfile;
        } else {
            self.state = FlowState::RetryInvalid;
        }
    }

    fn select_profile(&mut self) {
        let scan = match &self.session.archive {
            Some(archive) => extract_profiles(archive, &self.config.profile_file),
            None => ProfileScan::default(),
        };
        if let Some(e) = &scan.error {
            self.log.error(format!("Cannot extract users: {e}"));
        }

        let mut profiles = scan.to_vec();
        match profiles.len() {
            0 => {
                self.log.info("No users could be found in DDP");
                self.state = FlowState::RetryNoProfile;
            }
            1 => {
                self.session.selected_profile = profiles.pop();
                self.state = FlowState::Extracting;
            }
            n => {
                self.log.info(format!("Found {n} profiles; prompt profile selection"));
                self.push_logs();
                let page = prompts::profile_selection(&self.config.platform, &profiles);
                self.session.candidates = profiles;
                self.push_prompt(page, Prompt::Profile);
            }
        }
    }

    fn extract_tables(&mut self) {
        let extractions = match (&self.session.archive, &self.session.selected_profile) {
            (Some(archive), Some(profile)) => netflix::extract_all(archive, profile),
            _ => Vec::new(),
        };

        for (id, extraction) in extractions {
            let source = extraction.table.name.clone();
            match &extraction.outcome {
                ExtractionOutcome::Complete => self.log.info(format!(
                    "Extracted {} rows from {source}",
                    extraction.table.len()
                )),
                ExtractionOutcome::NoRows => {
                    self.log.info(format!("No rows for selected user in {source}"))
                }
                ExtractionOutcome::Unreadable(e) => {
                    self.log.error(format!("Cannot read {source}: {e}"))
                }
                ExtractionOutcome::Interrupted { stage, error } => self
                    .log
                    .error(format!("Data extraction error in {source} ({stage}): {error}")),
            }
            if let Some(table) = netflix::consent_table(id, extraction) {
                self.session.consent_tables.push(table);
            }
        }
        self.state = FlowState::ReviewConsent;
    }

    fn finish_with(&mut self, status: FlowStatus) {
        self.push_logs();
        self.push_status(status);
        self.state = FlowState::Done;
    }

    fn push(&mut self, command: Command) {
        self.outbox.push_back(Queued {
            command,
            awaits: None,
        });
    }

    fn push_prompt(&mut self, command: Command, prompt: Prompt) {
        self.outbox.push_back(Queued {
            command,
            awaits: Some(prompt),
        });
    }

    fn push_donation(&mut self, suffix: &str, json_string: String) {
        let key = format!("{}-{suffix}", self.config.session_id);
        self.push(Command::Donate { key, json_string });
    }

    /// Full snapshot of the session log, never a delta.
    fn push_logs(&mut self) {
        let json_string = self.log.snapshot_json();
        self.push_donation("tracking", json_string);
    }

    fn push_status(&mut self, status: FlowStatus) {
        let json_string = serde_json::json!({ "status": status.code() }).to_string();
        self.push_donation(status.key_suffix(), json_string);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
