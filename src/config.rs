//! Where settings and logs live.

use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "folio";
const CONFIG_DIR_ENV: &str = "FOLIO_CONFIG_DIR";

/// Settings file (eframe storage)
pub const SETTINGS_FILE: &str = "folio.json";
/// Default log file for `--log` without a path
pub const LOG_FILE: &str = "folio.log";

/// Files whose presence in the working directory makes it the config dir
const LOCAL_MARKERS: [&str; 2] = [SETTINGS_FILE, LOG_FILE];

/// Overrides for the default application paths
#[derive(Debug, Clone, Default)]
pub struct PathConfig {
    /// Custom config directory (from CLI or ENV)
    pub config_dir: Option<PathBuf>,
}

impl PathConfig {
    /// Priority: CLI args → ENV var (FOLIO_CONFIG_DIR) → None (use defaults)
    pub fn from_env_and_cli(cli_dir: Option<PathBuf>) -> Self {
        let config_dir = cli_dir.or_else(|| {
            std::env::var(CONFIG_DIR_ENV)
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        });
        Self { config_dir }
    }
}

/// Path to a configuration file.
///
/// Priority:
/// 1. CLI `--config-dir`
/// 2. `FOLIO_CONFIG_DIR`
/// 3. Working directory if `folio.json` or `folio.log` is already there
/// 4. Platform config directory (`~/.config/folio` on Linux)
pub fn config_file(name: &str, config: &PathConfig) -> PathBuf {
    config_dir(config).join(name)
}

/// Path to a data file (logs). Same priority, platform data dir last.
pub fn data_file(name: &str, config: &PathConfig) -> PathBuf {
    data_dir(config).join(name)
}

/// Create config and data directories if missing.
pub fn ensure_dirs(config: &PathConfig) -> Result<()> {
    let config_dir = config_dir(config);
    let data_dir = data_dir(config);

    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create config directory: {}", config_dir.display()))?;
    if data_dir != config_dir {
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    }
    debug!("Config dir: {}, data dir: {}", config_dir.display(), data_dir.display());
    Ok(())
}

fn has_local_files(dir: &Path) -> bool {
    LOCAL_MARKERS.iter().any(|f| dir.join(f).exists())
}

fn resolve_dir(config: &PathConfig, cwd: Option<&Path>, platform: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = &config.config_dir {
        return dir.clone();
    }
    if let Some(cwd) = cwd
        && has_local_files(cwd)
    {
        return cwd.to_path_buf();
    }
    platform
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn config_dir(config: &PathConfig) -> PathBuf {
    let cwd = std::env::current_dir().ok();
    resolve_dir(config, cwd.as_deref(), dirs_next::config_dir())
}

fn data_dir(config: &PathConfig) -> PathBuf {
    let cwd = std::env::current_dir().ok();
    resolve_dir(config, cwd.as_deref(), dirs_next::data_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_custom_dir_wins() {
        let config = PathConfig {
            config_dir: Some(PathBuf::from("/custom")),
        };
        assert_eq!(config_file("folio.json", &config), PathBuf::from("/custom/folio.json"));
        assert_eq!(data_file("folio.log", &config), PathBuf::from("/custom/folio.log"));
    }

    #[test]
    fn test_cli_overrides_env() {
        let config = PathConfig::from_env_and_cli(Some(PathBuf::from("/from/cli")));
        assert_eq!(config.config_dir, Some(PathBuf::from("/from/cli")));
    }

    #[test]
    fn test_platform_default() {
        let config = PathConfig::default();
        let dir = resolve_dir(&config, None, Some(PathBuf::from("/home/u/.config")));
        assert_eq!(dir, PathBuf::from("/home/u/.config/folio"));
        assert_eq!(resolve_dir(&config, None, None), PathBuf::from("."));
    }

    #[test]
    fn test_local_files_priority() {
        let temp = std::env::temp_dir().join(format!("folio_test_local_{}", std::process::id()));
        let _ = fs::create_dir_all(&temp);
        let config = PathConfig::default();
        let platform = Some(PathBuf::from("/platform"));

        assert_eq!(resolve_dir(&config, Some(&temp), platform.clone()), PathBuf::from("/platform/folio"));

        fs::write(temp.join(LOG_FILE), "").unwrap();
        assert_eq!(resolve_dir(&config, Some(&temp), platform), temp);

        let _ = fs::remove_dir_all(&temp);
    }

    #[test]
    fn test_ensure_dirs_creates() {
        let temp = std::env::temp_dir().join(format!("folio_test_dirs_{}", std::process::id()));
        let _ = fs::remove_dir_all(&temp);
        let config = PathConfig {
            config_dir: Some(temp.join("nested")),
        };
        ensure_dirs(&config).unwrap();
        assert!(temp.join("nested").is_dir());
        let _ = fs::remove_dir_all(&temp);
    }
}
