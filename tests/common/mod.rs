#![allow(dead_code)]

use ddpflow_lib::services::config::FlowConfig;
use ddpflow_lib::services::flow::{FlowController, SessionLog};
use ddpflow_lib::types::{Command, Response};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

pub const VIEWING_HEADER: &str =
    "Profile Name,Start Time,Duration,Attributes,Title,Supplemental Video Type,Device Type,Bookmark,Latest Bookmark,Country";

pub const RATINGS_HEADER: &str =
    "Profile Name,Title Name,Rating Type,Star Value,Thumbs Value,Device Model,Event Utc Ts,Region View Date";

pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

pub fn new_controller(session_id: &str) -> FlowController {
    init_logger();
    let config = FlowConfig {
        session_id: session_id.to_string(),
        ..FlowConfig::default()
    };
    FlowController::new(config, SessionLog::new(ddpflow_lib::SESSION_LOG_TARGET))
}

/// Write a zip archive to `dir/name` with the given text entries.
pub fn write_ddp(dir: &Path, name: &str, files: &[(&str, String)]) -> PathBuf {
    let path = dir.join(name);
    let file = std::fs::File::create(&path).expect("Failed to create zip");
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);

    for (entry_name, content) in files {
        writer.start_file(entry_name.to_string(), options).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
    path
}

pub fn viewing_csv(rows: &[(&str, &str, &str, &str, &str)]) -> String {
    let mut out = format!("{VIEWING_HEADER}\n");
    for (profile, start, duration, title, kind) in rows {
        out.push_str(&format!(
            "{profile},{start},{duration},,{title},{kind},TV,0:10:00,0:10:00,NL (Netherlands)\n"
        ));
    }
    out
}

pub fn ratings_csv(rows: &[(&str, &str, &str, &str)]) -> String {
    let mut out = format!("{RATINGS_HEADER}\n");
    for (profile, title, thumbs, ts) in rows {
        out.push_str(&format!("{profile},{title},thumb,,{thumbs},TV,{ts},2023-01-01\n"));
    }
    out
}

/// Plays the host: answers each prompt with the next scripted response.
/// Once the script runs out every further prompt is skipped.
pub struct Host {
    script: Vec<Response>,
    pub transcript: Vec<Command>,
}

impl Host {
    pub fn new(script: Vec<Response>) -> Self {
        Self {
            script: script.into_iter().rev().collect(),
            transcript: Vec::new(),
        }
    }

    pub fn run(&mut self, controller: &mut FlowController) {
        let mut response = Response::NoPayload;
        while let Some(command) = controller.resume(response) {
            response = if command.expects_response() {
                self.script.pop().unwrap_or(Response::NoPayload)
            } else {
                Response::NoPayload
            };
            self.transcript.push(command);
        }
    }

    pub fn donation(&self, key: &str) -> Option<&str> {
        self.transcript.iter().find_map(|c| match c {
            Command::Donate { key: k, json_string } if k == key => Some(json_string.as_str()),
            _ => None,
        })
    }

    pub fn donation_keys(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|c| match c {
                Command::Donate { key, .. } => Some(key.as_str()),
                _ => None,
            })
            .collect()
    }
}

pub fn path_payload(path: &Path) -> Response {
    Response::StringPayload(path.to_string_lossy().into_owned())
}
