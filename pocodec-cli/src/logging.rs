use tracing_subscriber::fmt;

/// Installs the stderr log subscriber. Without `--verbose` nothing is logged.
pub fn init(verbose: bool) {
    if !verbose {
        return;
    }
    let installed = fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .try_init();
    if let Err(e) = installed {
        eprintln!("Error initializing logging: {}", e);
    }
}
