//! File-backed tracing. The terminal belongs to the UI, so log lines never
//! go to stdout or stderr.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a global subscriber writing to `path` (appending).
///
/// Returns `Ok(false)` when `path` is `None` or a subscriber is already set;
/// the game then runs without logging.
pub fn init(path: Option<&Path>) -> Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_no_subscriber() {
        assert!(!init(None).unwrap());
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = std::env::temp_dir().join(format!("chartguessr-log-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        // A directory cannot be opened for appending.
        assert!(init(Some(dir.as_path())).is_err());
        let _ = fs::remove_dir_all(&dir);
    }
}
