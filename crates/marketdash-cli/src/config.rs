use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV: &str = "MARKETDASH_CONFIG";

/// Resolve the config file location based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. MARKETDASH_CONFIG environment variable (with tilde expansion)
/// 3. `<config dir>/marketdash/config.toml`
pub fn resolve_config_path(explicit: Option<&Path>, env: Option<OsString>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(expand_tilde(&path.to_string_lossy()));
    }

    if let Some(env_path) = env.filter(|p| !p.is_empty()) {
        return Some(expand_tilde(&env_path.to_string_lossy()));
    }

    dirs::config_dir().map(|dir| dir.join("marketdash").join("config.toml"))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Log file for the interactive dashboard, which cannot log to the terminal
    #[serde(default)]
    pub file: Option<String>,
}

impl LoggingConfig {
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file.as_deref().map(expand_tilde)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_route: String,
    pub apply_search_filter: bool,
    pub tick_rate_ms: u64,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_route: "/".to_string(),
            apply_search_filter: true,
            tick_rate_ms: 250,
            logging: LoggingConfig::default(),
        }
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Missing(PathBuf),
    /// No config directory on this platform
    Unresolved,
}

impl ConfigSource {
    /// Logged by the caller once a subscriber is installed
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => tracing::debug!(path = %path.display(), "loaded config"),
            ConfigSource::Missing(path) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults")
            }
            ConfigSource::Unresolved => tracing::debug!("no config directory, using defaults"),
        }
    }
}

impl Config {
    /// Load from the resolved location; defaults when nothing is there
    pub fn load(explicit: Option<&Path>) -> Result<(Self, ConfigSource)> {
        let Some(path) = resolve_config_path(explicit, std::env::var_os(CONFIG_ENV)) else {
            return Ok((Self::default(), ConfigSource::Unresolved));
        };
        if !path.exists() {
            return Ok((Self::default(), ConfigSource::Missing(path)));
        }
        let config = Self::load_from(&path)?;
        Ok((config, ConfigSource::File(path)))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_route, "/");
        assert!(config.apply_search_filter);
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "default_route = \"/forecasting\"\n\n[logging]\nfile = \"/tmp/marketdash.log\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_route, "/forecasting");
        assert!(config.apply_search_filter);
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(
            config.logging.file_path(),
            Some(PathBuf::from("/tmp/marketdash.log"))
        );
    }

    #[test]
    fn test_invalid_toml_names_the_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        std::fs::write(&path, "apply_search_filter = \"maybe\"").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.toml"));
    }

    #[test]
    fn test_load_reports_its_source() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");

        let (config, source) = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(source, ConfigSource::Missing(path.clone()));

        std::fs::write(&path, "tick_rate_ms = 100\n").unwrap();
        let (config, source) = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(source, ConfigSource::File(path));
    }

    #[test]
    fn test_resolution_order() {
        let explicit = PathBuf::from("/etc/md.toml");
        assert_eq!(
            resolve_config_path(Some(&explicit), Some(OsString::from("/env/md.toml"))),
            Some(explicit.clone())
        );
        assert_eq!(
            resolve_config_path(None, Some(OsString::from("/env/md.toml"))),
            Some(PathBuf::from("/env/md.toml"))
        );

        let fallback = resolve_config_path(None, Some(OsString::new()));
        if let Some(path) = fallback {
            assert!(path.ends_with("marketdash/config.toml"));
        }
    }

    #[test]
    fn test_tick_rate_has_a_floor() {
        let config = Config {
            tick_rate_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(10));
    }
}
