//! CLI argument parsing with preset support

use crate::config::{CheckConfig, CheckConfigBuilder, CheckPreset};
use crate::core::dsp::WindowType;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::debug;
use std::path::PathBuf;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "mdctcheckr")]
#[command(about = "Check MDCT time-domain alias cancellation on seeded random signals")]
#[command(version)]
pub struct Args {
    /// Preset (quick, standard, thorough)
    #[arg(short, long, value_parser = parse_preset)]
    pub preset: Option<CheckPreset>,

    /// JSON configuration file
    #[arg(short, long, env = "MDCTCHECKR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Frame length in samples (multiple of 4)
    #[arg(short = 'n', long)]
    pub frame_len: Option<usize>,

    /// Random signal length per trial
    #[arg(short = 'l', long)]
    pub signal_len: Option<usize>,

    /// Position of the first frame in the signal
    #[arg(long)]
    pub start: Option<usize>,

    /// Number of trials
    #[arg(short, long)]
    pub trials: Option<usize>,

    /// Seed of the first trial
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Window (rect, sine, vorbis, kbd, kbd:<alpha>)
    #[arg(short, long, value_parser = parse_window)]
    pub window: Option<WindowType>,

    /// Maximum relative residual
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Run trials on one thread
    #[arg(long)]
    pub no_parallel: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// List available presets and exit
    #[arg(long)]
    pub list_presets: bool,
}

fn parse_preset(name: &str) -> Result<CheckPreset, String> {
    CheckPreset::from_name(name).ok_or_else(|| format!("Unknown preset: {}", name))
}

fn parse_window(name: &str) -> Result<WindowType, String> {
    WindowType::from_name(name).ok_or_else(|| format!("Unknown window: {}", name))
}

impl Args {
    /// Resolve the effective configuration.
    ///
    /// Base: `--config` file, else the default config file if it exists,
    /// else the chosen preset (Standard when none). An explicit `--preset`
    /// replaces a file-based base. Individual flags override last.
    pub fn to_config(&self) -> Result<CheckConfig> {
        let base = match (&self.preset, self.config_path()) {
            (Some(preset), _) => CheckConfig::from_preset(*preset),
            (None, Some(path)) => {
                debug!("loading config from {}", path.display());
                CheckConfig::load(&path)?
            }
            (None, None) => CheckConfig::default(),
        };

        let mut builder = CheckConfigBuilder::from_config(base);
        if let Some(frame_len) = self.frame_len {
            builder = builder.frame_len(frame_len);
        }
        if let Some(signal_len) = self.signal_len {
            builder = builder.signal_len(signal_len);
        }
        if let Some(start) = self.start {
            builder = builder.start(start);
        }
        if let Some(trials) = self.trials {
            builder = builder.trials(trials);
        }
        if let Some(seed) = self.seed {
            builder = builder.seed(seed);
        }
        if let Some(window) = self.window {
            builder = builder.window(window);
        }
        if let Some(tolerance) = self.tolerance {
            builder = builder.tolerance(tolerance);
        }
        if self.no_parallel {
            builder = builder.parallel(false);
        }

        builder.build().context("Invalid check configuration")
    }

    fn config_path(&self) -> Option<PathBuf> {
        self.config
            .clone()
            .or_else(|| CheckConfig::default_path().filter(|path| path.is_file()))
    }
}

/// Print available presets
pub fn print_presets() {
    println!("Available check presets:\n");

    for preset in CheckPreset::all() {
        let config = CheckConfig::from_preset(preset);
        println!("  {} - {}", preset.name(), preset.description());
        println!(
            "    Frame: {}  Signal: {}  Trials: {}  Window: {}",
            config.frame_len,
            config.signal_len,
            config.trials,
            config.window.name()
        );
        println!("    Tolerance: {:.0e}", config.tolerance);
        println!();
    }
}
