//! Utility functions for the CLI.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable overriding the `-v` log level (`EnvFilter` syntax).
pub const LOG_ENV: &str = "OXIVLC_LOG";

/// Install the stderr log subscriber.
///
/// `OXIVLC_LOG` wins over the verbosity flag when it parses.
pub fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

/// Default output name: the source's base name with `extension`.
///
/// i.e. `dir/notes.txt` + `vlc` -> `notes.vlc`
pub fn generate_file_name(source: &Path, extension: &str) -> PathBuf {
    let mut name = source
        .file_stem()
        .unwrap_or(source.as_os_str())
        .to_os_string();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// Summary of one pack/unpack run.
#[derive(Debug, Serialize)]
pub struct Report {
    pub operation: &'static str,
    pub method: &'static str,
    pub source: String,
    pub destination: String,
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub ratio: f64,
}

impl Report {
    pub fn new(
        operation: &'static str,
        source: &Path,
        destination: &Path,
        input_bytes: usize,
        output_bytes: usize,
    ) -> Self {
        let ratio = if input_bytes > 0 {
            output_bytes as f64 / input_bytes as f64
        } else {
            0.0
        };

        Self {
            operation,
            method: "vlc",
            source: source.display().to_string(),
            destination: destination.display().to_string(),
            input_bytes,
            output_bytes,
            ratio,
        }
    }

    /// Print as one line of text, or as JSON.
    pub fn print(&self, json: bool) -> Result<(), serde_json::Error> {
        if json {
            println!("{}", serde_json::to_string(self)?);
        } else {
            println!(
                "{} {} -> {} ({} -> {} bytes, {:.1}%)",
                self.operation,
                self.source,
                self.destination,
                self.input_bytes,
                self.output_bytes,
                self.ratio * 100.0
            );
        }
        Ok(())
    }
}
