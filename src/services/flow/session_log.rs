//! Session-scoped diagnostic log shipped to the host as full snapshots.

use log::Level;

/// Sent in place of an empty snapshot.
pub const NO_LOGS: &str = "no logs";

#[derive(Debug, Clone)]
pub struct SessionLog {
    target: String,
    lines: Vec<String>,
}

impl SessionLog {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
            lines: Vec::new(),
        }
    }

    pub fn info(&mut self, message: impl AsRef<str>) {
        self.record(Level::Info, message.as_ref());
    }

    pub fn warn(&mut self, message: impl AsRef<str>) {
        self.record(Level::Warn, message.as_ref());
    }

    pub fn error(&mut self, message: impl AsRef<str>) {
        self.record(Level::Error, message.as_ref());
    }

    /// Append one formatted line and forward it to the `log` facade.
    pub fn record(&mut self, level: Level, message: &str) {
        log::log!(target: self.target.as_str(), level, "{message}");
        let ts = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%z");
        self.lines
            .push(format!("{ts} --- {} --- {level} --- {message}", self.target));
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Every line recorded so far, or the `no logs` sentinel.
    pub fn snapshot(&self) -> Vec<String> {
        if self.lines.is_empty() {
            vec![NO_LOGS.to_string()]
        } else {
            self.lines.clone()
        }
    }

    pub fn snapshot_json(&self) -> String {
        serde_json::Value::from(self.snapshot()).to_string()
    }
}

#[cfg(test)]
#[path = "tests/session_log_tests.rs"]
mod tests;
