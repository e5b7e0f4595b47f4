//! Settings file and per-user directories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Overrides the settings file location.
pub const CONFIG_ENV: &str = "DOCKVIEW_CONFIG";

const APP_DIR: &str = "dockview";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Engine URL (`unix://...`, `tcp://...`, `http://...`). Falls back to `DOCKER_HOST` and
    /// the platform default socket.
    pub docker_host: Option<String>,
    /// Upper bound on connecting to the engine and listing containers.
    pub timeout_secs: u64,
    /// Include stopped containers.
    pub all: bool,
    pub enable_mouse: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            docker_host: None,
            timeout_secs: 10,
            all: false,
            enable_mouse: true,
        }
    }
}

impl Settings {
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read settings {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "invalid settings {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

/// Loads settings from `$DOCKVIEW_CONFIG` or the per-user config directory.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    load_settings_from(explicit, default_settings_path())
}

/// An explicit path must exist and parse. The default location is optional, and
/// a broken file there only costs a warning.
pub fn load_settings_from(
    explicit: Option<PathBuf>,
    fallback: Option<PathBuf>,
) -> Result<Settings, ConfigError> {
    if let Some(path) = explicit {
        return Settings::load_from(&path);
    }

    let Some(path) = fallback.filter(|p| p.exists()) else {
        return Ok(Settings::default());
    };
    match Settings::load_from(&path) {
        Ok(settings) => Ok(settings),
        Err(err) => {
            tracing::warn!(error = %err, "ignoring settings file");
            Ok(Settings::default())
        }
    }
}

pub fn default_settings_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_cache_dir()
        .map(|dir| dir.join(APP_DIR).join("logs"))
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Cannot determine log directory",
            )
        })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

fn get_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Application Support"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".config"));
    }

    #[cfg(target_os = "windows")]
    {
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/config.rs"]
mod tests;
