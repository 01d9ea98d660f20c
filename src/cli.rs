use clap::Parser;
use std::path::PathBuf;

use crate::config::{RepeatModeSetting, Settings};

#[derive(Debug, Parser)]
#[command(name = "cadence")]
#[command(version)]
#[command(about = "Terminal music player with shuffle and repeat")]
pub struct Cli {
    /// Folder to open on startup (defaults to the working directory)
    pub dir: Option<PathBuf>,

    /// Path to the config TOML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start with shuffle on
    #[arg(short, long)]
    pub shuffle: bool,

    /// Start with this repeat mode
    #[arg(short, long, value_enum)]
    pub repeat: Option<RepeatModeSetting>,

    /// Seed for the shuffle order
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub dump_config: bool,
}

impl Cli {
    /// Apply command-line overrides on top of loaded settings.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if self.shuffle {
            settings.playback.shuffle = true;
        }
        if let Some(repeat) = self.repeat {
            settings.playback.repeat = repeat;
        }
        if self.seed.is_some() {
            settings.playback.seed = self.seed;
        }
    }
}
