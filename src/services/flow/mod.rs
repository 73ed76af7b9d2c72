//! Interactive donation flow driven through the command/response protocol.

pub mod controller;
pub mod prompts;
pub mod session_log;
pub mod state;

pub use controller::FlowController;
pub use session_log::{SessionLog, NO_LOGS};
pub use state::{FlowState, FlowStatus, Prompt, Session};
