use std::{
    env,
    path::{Path, PathBuf},
};

use super::schema::Settings;
use crate::error::{Error, Result};

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file and then environment
/// variables (prefix `CADENCE__`), falling back to struct defaults.
impl Settings {
    /// Load settings from the resolved config path and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(resolve_config_path().as_deref())
    }

    /// Load settings from `path` (when given; a missing file is fine) and the environment.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("CADENCE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.transport.volume) {
            return Err(Error::InvalidSettings(
                "transport.volume must be within 0.0..=1.0".to_string(),
            ));
        }
        if self.transport.volume_step.is_nan() || self.transport.volume_step <= 0.0 {
            return Err(Error::InvalidSettings(
                "transport.volume_step must be > 0".to_string(),
            ));
        }
        if self.ui.tick_ms == 0 {
            return Err(Error::InvalidSettings("ui.tick_ms must be >= 1".to_string()));
        }
        Ok(())
    }

    /// Render these settings as a TOML document.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Resolve the config path from `CADENCE_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("CADENCE_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/cadence/config.toml`
/// or `~/.config/cadence/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("cadence").join("config.toml"))
}
