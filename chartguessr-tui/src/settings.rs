//! Locating and loading the game config.
//!
//! Lookup order: explicit `--config` path, then
//! `<config_dir>/chartguessr/config.toml`, then built-in defaults. An
//! explicit path must exist; the default location is optional.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use chartguessr_core::GameConfig;

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("chartguessr").join("config.toml"))
}

pub fn resolve(explicit: Option<&Path>) -> Result<GameConfig> {
    if let Some(path) = explicit {
        return GameConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()));
    }
    match default_config_path() {
        Some(path) if path.is_file() => GameConfig::from_file(&path)
            .with_context(|| format!("loading config {}", path.display())),
        _ => {
            debug!("no config file, using defaults");
            Ok(GameConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn temp_file(contents: &str) -> PathBuf {
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "chartguessr-settings-{}-{n}.toml",
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn explicit_file_is_loaded() {
        let path = temp_file("seed = 42\n[animation]\nstagger_ms = 5\n");
        let config = resolve(Some(path.as_path())).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.animation.stagger_ms, 5);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("chartguessr-does-not-exist.toml");
        let err = resolve(Some(path.as_path())).unwrap_err();
        assert!(format!("{err:#}").contains("chartguessr-does-not-exist"));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let path = temp_file("[generator]\nseed_close_min = 200.0\nseed_close_max = 100.0\n");
        assert!(resolve(Some(path.as_path())).is_err());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn default_path_ends_in_app_dir() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("chartguessr/config.toml"));
        }
    }
}
