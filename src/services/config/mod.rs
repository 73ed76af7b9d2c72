pub mod models;

pub use models::*;

pub const ENV_SESSION_ID: &str = "DDP_SESSION_ID";
pub const ENV_PLATFORM: &str = "DDP_PLATFORM";
pub const ENV_ACCEPTED_MEDIA_TYPES: &str = "DDP_ACCEPTED_MEDIA_TYPES";
pub const ENV_PROFILE_FILE: &str = "DDP_PROFILE_FILE";

impl FlowConfig {
    /// Defaults overridden by `DDP_*` variables, after loading an optional `.env`.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env loaded: {e}");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = non_empty(ENV_SESSION_ID) {
            config.session_id = v;
        }
        if let Some(v) = non_empty(ENV_PLATFORM) {
            config.platform = v;
        }
        if let Some(v) = non_empty(ENV_ACCEPTED_MEDIA_TYPES) {
            config.accepted_media_types = v;
        }
        if let Some(v) = non_empty(ENV_PROFILE_FILE) {
            config.profile_file = v;
        }
        config
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
