use tracing::Level;

pub fn setup_tracing(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // stdout belongs to the interactive menu, logs go to stderr.
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
