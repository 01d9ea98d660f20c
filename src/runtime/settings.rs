use log::warn;

use crate::cli::Cli;
use crate::config::{self, Settings};

/// Load settings for this run, then apply command-line overrides.
///
/// Config is optional; load or validation failures fall back to defaults.
pub fn load_settings(cli: &Cli) -> Settings {
    let path = cli.config.clone().or_else(config::resolve_config_path);

    let mut settings = match Settings::load_from(path.as_deref()) {
        Ok(s) => match s.validate() {
            Ok(()) => s,
            Err(e) => {
                warn!("invalid config, using defaults: {e}");
                Settings::default()
            }
        },
        Err(e) => {
            warn!("failed to load config, using defaults: {e}");
            Settings::default()
        }
    };

    cli.apply_overrides(&mut settings);
    settings
}
