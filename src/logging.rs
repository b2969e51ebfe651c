use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Open the log file for appending, creating it if needed
pub fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Log to stdout and to `log_file`.
///
/// Both outputs carry a timestamp, level, and target per line. `RUST_LOG`
/// adds to the default directives.
pub fn init_logging(log_file: &Path) -> io::Result<()> {
    let file = Arc::new(open_log_file(log_file)?);

    let filter = EnvFilter::from_default_env()
        .add_directive("ratebot=info".parse().map_err(io::Error::other)?)
        .add_directive("serenity=warn".parse().map_err(io::Error::other)?);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(fmt::layer().with_ansi(false).with_target(true).with_writer(file))
        .init();

    Ok(())
}
