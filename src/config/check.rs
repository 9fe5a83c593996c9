// src/config/check.rs
//
// Presets and builder for the alias-cancellation check

use crate::core::dsp::WindowType;
use crate::error::{MdctError, MdctResult};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Preset check configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckPreset {
    /// One small frame, one trial
    Quick,
    /// 100-sample frames over a 1000-sample random signal
    Standard,
    /// Codec-sized frames, sine window, many trials
    Thorough,
    /// User-defined settings
    Custom,
}

impl CheckPreset {
    pub fn all() -> Vec<Self> {
        vec![Self::Quick, Self::Standard, Self::Thorough]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "quick" => Some(Self::Quick),
            "standard" | "default" => Some(Self::Standard),
            "thorough" => Some(Self::Thorough),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::Standard => "standard",
            Self::Thorough => "thorough",
            Self::Custom => "custom",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Quick => "Single 16-sample frame pair",
            Self::Standard => "100-sample frames over 1000 random samples",
            Self::Thorough => "2048-sample sine-windowed frames, 64 trials",
            Self::Custom => "User-defined settings",
        }
    }
}

/// Complete check configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Preset this was derived from
    pub preset: CheckPreset,
    /// Frame length `N` (multiple of 4)
    pub frame_len: usize,
    /// Length of each random test signal
    pub signal_len: usize,
    /// Position of the first frame inside the signal
    pub start: usize,
    /// Number of seeded trials
    pub trials: usize,
    /// Seed of the first trial; trial `i` uses `seed + i`
    pub seed: u64,
    /// Maximum residual relative to the reference overlap norm
    pub tolerance: f64,
    /// Analysis/synthesis window
    pub window: WindowType,
    /// Run trials on the rayon pool
    pub parallel: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self::from_preset(CheckPreset::Standard)
    }
}

impl CheckConfig {
    pub fn from_preset(preset: CheckPreset) -> Self {
        match preset {
            CheckPreset::Quick => Self::quick(),
            CheckPreset::Standard | CheckPreset::Custom => Self {
                preset,
                ..Self::standard()
            },
            CheckPreset::Thorough => Self::thorough(),
        }
    }

    fn quick() -> Self {
        Self {
            preset: CheckPreset::Quick,
            frame_len: 16,
            signal_len: 64,
            trials: 1,
            ..Self::standard()
        }
    }

    fn standard() -> Self {
        Self {
            preset: CheckPreset::Standard,
            frame_len: 100,
            signal_len: 1000,
            start: 0,
            trials: 8,
            seed: 0,
            tolerance: 1e-8,
            window: WindowType::Rectangular,
            parallel: true,
        }
    }

    fn thorough() -> Self {
        Self {
            preset: CheckPreset::Thorough,
            frame_len: 2048,
            signal_len: 16384,
            trials: 64,
            window: WindowType::Sine,
            ..Self::standard()
        }
    }

    /// Hop between the two checked frames (`N/2`)
    pub fn hop(&self) -> usize {
        self.frame_len / 2
    }

    /// Samples the two overlapping frames need starting at `start`, or
    /// `None` when that count does not fit in a `usize`
    pub fn required_signal_len(&self) -> Option<usize> {
        self.start
            .checked_add(self.frame_len)?
            .checked_add(self.hop())
    }

    /// Whether both configurations check the same transform; seed and
    /// threading do not change what is checked
    fn same_check(&self, other: &Self) -> bool {
        self.frame_len == other.frame_len
            && self.signal_len == other.signal_len
            && self.start == other.start
            && self.trials == other.trials
            && self.tolerance == other.tolerance
            && self.window == other.window
    }

    pub fn validate(&self) -> MdctResult<()> {
        if self.frame_len == 0 || self.frame_len % 4 != 0 {
            return Err(MdctError::InvalidFrameLength {
                len: self.frame_len,
                required: 4,
            });
        }
        let required = self.required_signal_len().ok_or_else(|| {
            MdctError::InvalidConfig(format!(
                "start {} with frame_len {} is out of range",
                self.start, self.frame_len
            ))
        })?;
        if self.signal_len < required {
            return Err(MdctError::InvalidConfig(format!(
                "signal_len {} too short: two frames of {} from {} need {}",
                self.signal_len, self.frame_len, self.start, required
            )));
        }
        if self.trials == 0 {
            return Err(MdctError::InvalidConfig("trials must be at least 1".into()));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(MdctError::InvalidConfig(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if let WindowType::KaiserBesselDerived(alpha) = self.window {
            if !alpha.is_finite() || alpha < 0.0 {
                return Err(MdctError::InvalidConfig(format!(
                    "kbd alpha must be non-negative, got {}",
                    alpha
                )));
            }
        }
        Ok(())
    }

    /// Load a JSON configuration file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Parse a JSON configuration.
    ///
    /// Missing fields take the values of the named preset (Standard when
    /// none is named). A file that changes the check away from its preset
    /// is labelled Custom.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let file: ConfigFile = serde_json::from_str(text)?;
        Ok(file.into_config())
    }

    /// `<config dir>/mdctcheckr/config.json`, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mdctcheckr").join("config.json"))
    }
}

/// On-disk form of [`CheckConfig`]: every field optional, unknown keys rejected
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    preset: Option<CheckPreset>,
    frame_len: Option<usize>,
    signal_len: Option<usize>,
    start: Option<usize>,
    trials: Option<usize>,
    seed: Option<u64>,
    tolerance: Option<f64>,
    window: Option<WindowType>,
    parallel: Option<bool>,
}

impl ConfigFile {
    fn into_config(self) -> CheckConfig {
        let base = CheckConfig::from_preset(self.preset.unwrap_or(CheckPreset::Standard));
        let mut config = CheckConfig {
            preset: base.preset,
            frame_len: self.frame_len.unwrap_or(base.frame_len),
            signal_len: self.signal_len.unwrap_or(base.signal_len),
            start: self.start.unwrap_or(base.start),
            trials: self.trials.unwrap_or(base.trials),
            seed: self.seed.unwrap_or(base.seed),
            tolerance: self.tolerance.unwrap_or(base.tolerance),
            window: self.window.unwrap_or(base.window),
            parallel: self.parallel.unwrap_or(base.parallel),
        };
        if !config.same_check(&base) {
            config.preset = CheckPreset::Custom;
        }
        config
    }
}

/// Builder for custom check configurations
#[derive(Debug, Clone, Default)]
pub struct CheckConfigBuilder {
    config: CheckConfig,
}

impl CheckConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_preset(preset: CheckPreset) -> Self {
        Self {
            config: CheckConfig::from_preset(preset),
        }
    }

    pub fn from_config(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn frame_len(mut self, frame_len: usize) -> Self {
        self.config.frame_len = frame_len;
        self.customized()
    }

    pub fn signal_len(mut self, signal_len: usize) -> Self {
        self.config.signal_len = signal_len;
        self.customized()
    }

    pub fn start(mut self, start: usize) -> Self {
        self.config.start = start;
        self.customized()
    }

    pub fn trials(mut self, trials: usize) -> Self {
        self.config.trials = trials;
        self.customized()
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self.customized()
    }

    pub fn window(mut self, window: WindowType) -> Self {
        self.config.window = window;
        self.customized()
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    fn customized(mut self) -> Self {
        self.config.preset = CheckPreset::Custom;
        self
    }

    pub fn build(self) -> MdctResult<CheckConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
