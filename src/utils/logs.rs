use crate::core::domain::Configuration;

// Installs the process-wide subscriber. Returns false when one is already installed.
pub fn setup_tracing(config: &Configuration) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(config.max_level())
        // disable printing the name of the module in every log line.
        .with_target(false)
        // ANSI color codes garble collected log lines.
        .with_ansi(false)
        // the log collector stamps ingestion time.
        .without_time()
        .json()
        .try_init()
        .is_ok()
}
