//! Registrar store location.
//!
//! The store path is resolved through a priority chain so both binaries
//! agree on which store they read:
//!
//! 1. `--database` on the command line
//! 2. the `REGISTRAR_DB` environment variable
//! 3. `database.path` in `~/.config/registrar/settings.toml`
//! 4. `reg.sqlite` in the current directory

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable naming the store.
pub const DATABASE_ENV: &str = "REGISTRAR_DB";

/// Store used when nothing else is configured.
pub const DEFAULT_DATABASE: &str = "reg.sqlite";

/// Where the resolved store path came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseSource {
    CliFlag,
    EnvVar(&'static str),
    ConfigFile(PathBuf),
    Default,
}

impl fmt::Display for DatabaseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CliFlag => write!(f, "--database"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile(path) => write!(f, "{}", path.display()),
            Self::Default => write!(f, "default"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SettingsFile {
    database: Option<DatabaseSettings>,
}

#[derive(Debug, Deserialize)]
struct DatabaseSettings {
    path: Option<PathBuf>,
}

/// Canonical path to the settings file: `~/.config/registrar/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("registrar").join("settings.toml")
}

/// Resolve the store path from the flag, environment, and settings file.
pub fn resolve_database_path(cli_override: Option<PathBuf>) -> (PathBuf, DatabaseSource) {
    let resolved = resolve_from(
        cli_override,
        std::env::var(DATABASE_ENV).ok(),
        &settings_path(),
    );
    log::debug!("Using registrar store {} (from {})", resolved.0.display(), resolved.1);
    resolved
}

fn resolve_from(
    cli_override: Option<PathBuf>,
    env_value: Option<String>,
    settings: &Path,
) -> (PathBuf, DatabaseSource) {
    if let Some(path) = cli_override {
        return (path, DatabaseSource::CliFlag);
    }
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return (PathBuf::from(value), DatabaseSource::EnvVar(DATABASE_ENV));
    }
    if let Some(path) = load_database_setting(settings) {
        return (path, DatabaseSource::ConfigFile(settings.to_path_buf()));
    }
    (PathBuf::from(DEFAULT_DATABASE), DatabaseSource::Default)
}

/// Read `database.path` from a settings file, if set.
fn load_database_setting(settings: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let parsed: SettingsFile = match toml::from_str(&contents) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::debug!("Ignoring unreadable settings file {}: {}", settings.display(), e);
            return None;
        }
    };
    parsed
        .database?
        .path
        .filter(|p| !p.as_os_str().is_empty())
}
