use tracing_subscriber::{fmt, EnvFilter};

/// Default filter for a verbosity level; `RUST_LOG` takes precedence.
pub fn default_filter(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "spindle=error";
    }
    match verbosity {
        0 => "spindle=info",
        1 => "spindle=debug",
        _ => "spindle=trace",
    }
}

pub fn initialize_logger(verbosity: u8, quiet: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity, quiet)));

    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global logger: {}", e);
    }
}
