use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::error;

/// Where fatal messages go before the process exits: always stderr, and the log file too
/// when one is configured.
#[derive(Debug, Default)]
pub struct FatalReporter {
    log: Option<PathBuf>,
}

impl FatalReporter {
    pub fn new(log: Option<PathBuf>) -> Self {
        FatalReporter { log }
    }

    pub fn log(&self) -> Option<&Path> {
        self.log.as_deref()
    }

    /// Fill in a log file only if none was set yet.
    pub fn or_log(self, log: Option<PathBuf>) -> Self {
        FatalReporter {
            log: self.log.or(log),
        }
    }

    pub fn format(message: &str) -> String {
        format!("\n\nFatal error: {}\n", message)
    }

    ///
    /// Write the fatal message to `stderr` and append it to the log file.
    ///
    /// # Arguments
    /// - stderr: the terminal-side sink
    /// - message: what went wrong, without the "Fatal error" prefix
    pub fn report<W: Write>(&self, stderr: &mut W, message: &str) -> io::Result<()> {
        let formatted = FatalReporter::format(message);
        stderr.write_all(formatted.as_bytes())?;
        stderr.flush()?;

        if let Some(log) = &self.log {
            let mut file = OpenOptions::new().create(true).append(true).open(log)?;
            file.write_all(formatted.as_bytes())?;
        }

        Ok(())
    }

    pub fn fatal(&self, message: &str) {
        if let Err(e) = self.report(&mut io::stderr().lock(), message) {
            error!("Could not record fatal error: {}", e);
        }
    }
}
