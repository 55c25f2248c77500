use std::fs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Directory that receives the rolling log files.
const LOG_DIR: &str = "logs";

/// Initializes logging with a console layer and a daily-rolling JSON file layer.
pub fn init_logging() {
    let _ = fs::create_dir_all(LOG_DIR);

    let file_appender = tracing_appender::rolling::daily(LOG_DIR, "carta_vini.log");
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer().json().with_writer(non_blocking_writer);
    let console_layer = fmt::layer().with_target(false).with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("carta_vini=info".parse().unwrap()))
        .with(file_layer)
        .with(console_layer)
        .init();

    // The guard must outlive main so buffered logs are flushed on exit.
    std::mem::forget(guard);
}
