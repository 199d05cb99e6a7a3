//! Log setup for the binary.
//!
//! Stdout carries the host protocol, so logs go to the file named by
//! `VCS_GUTTER_LOG` or, failing that, to stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_ENV: &str = "VCS_GUTTER_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let log_file = std::env::var_os(LOG_FILE_ENV).and_then(|path| {
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!(
                    "vcs-gutter: cannot open log file {:?} ({}), logging to stderr",
                    path, e
                );
                None
            }
        }
    });

    let _ = match log_file {
        Some(file) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };
}
