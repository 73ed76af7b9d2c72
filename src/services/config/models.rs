use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FlowConfig {
    /// Prefix for every donation key of this session.
    pub session_id: String,
    pub platform: String,
    pub accepted_media_types: String,
    /// Entry whose first column lists the profiles.
    pub profile_file: String,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            platform: "Netflix".into(),
            accepted_media_types: "application/zip, text/plain".into(),
            profile_file: "ViewingActivity.csv".into(),
        }
    }
}
