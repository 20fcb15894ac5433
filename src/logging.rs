//! Diagnostic logging
//!
//! The TUI owns the terminal, so log output only ever goes to a file.

use anyhow::{Context, Result, anyhow};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

/// Install a global subscriber writing to `path`; without a path, logging
/// stays disabled
///
/// # Errors
///
/// Returns an error if the file cannot be created or a subscriber is already
/// installed.
pub fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .try_init()
        .map_err(|err| anyhow!(err))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_is_a_no_op() {
        assert!(init_logging(None).is_ok());
    }

    #[test]
    fn writes_to_file() {
        let path = std::env::temp_dir().join(format!("wordle_awareness_{}.log", std::process::id()));
        init_logging(Some(&path)).unwrap();
        tracing::info!("hello from the test");

        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert!(content.contains("logging started"));
    }

    #[test]
    fn unwritable_path_fails() {
        assert!(init_logging(Some(Path::new("/nonexistent/dir/log.txt"))).is_err());
    }
}
