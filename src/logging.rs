use colored::Colorize;
use tracing_subscriber::{fmt, EnvFilter};

fn default_directive(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

/// Install the stderr subscriber. `RUST_LOG` overrides the level picked from `debug`.
pub fn init(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();
}

/// Print a fatal message in red on stderr.
pub fn log_err(msg: &str) {
    eprintln!("{}", msg.red());
}
