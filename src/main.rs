use ddpflow_lib::commands::stdio_host;
use ddpflow_lib::services::config::FlowConfig;
use ddpflow_lib::services::flow::{FlowController, SessionLog};
use std::io;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = FlowConfig::from_env();
    log::info!("Session {} for {}", config.session_id, config.platform);

    let log = SessionLog::new(ddpflow_lib::SESSION_LOG_TARGET);
    let mut controller = FlowController::new(config, log);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let written = stdio_host::run_session(&mut controller, stdin.lock(), &mut stdout)?;

    log::info!("Flow finished after {written} commands");
    Ok(())
}
