pub mod commands;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

/// Logger target used for session log lines.
pub const SESSION_LOG_TARGET: &str = "script";
