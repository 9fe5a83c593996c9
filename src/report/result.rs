//! Result types for alias-cancellation checks

use crate::config::CheckConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of one seeded trial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    pub trial: usize,
    pub seed: u64,
    /// `‖overlap - gain·x‖` over the shared half frame
    pub residual: f64,
    /// `‖gain·x‖` over the same samples
    pub reference_norm: f64,
    pub relative_residual: f64,
    /// Largest single-sample error in the overlap
    pub max_error: f64,
    pub passed: bool,
}

/// Overall verdict for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckVerdict {
    /// Every trial reconstructed within tolerance
    Pass,
    /// At least one trial exceeded the tolerance
    Fail,
}

impl CheckVerdict {
    pub fn symbol(&self) -> &'static str {
        match self {
            CheckVerdict::Pass => "✓",
            CheckVerdict::Fail => "✗",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CheckVerdict::Pass => "Aliasing cancels",
            CheckVerdict::Fail => "Reconstruction error above tolerance",
        }
    }
}

/// Complete report for a check run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TdacReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub config: CheckConfig,
    pub verdict: CheckVerdict,
    pub max_relative_residual: f64,
    pub mean_relative_residual: f64,
    pub trials: Vec<TrialResult>,
}

impl TdacReport {
    pub fn new(config: CheckConfig, trials: Vec<TrialResult>) -> Self {
        let max_relative_residual = trials
            .iter()
            .map(|t| t.relative_residual)
            .fold(0.0f64, f64::max);
        let mean_relative_residual = if trials.is_empty() {
            0.0
        } else {
            trials.iter().map(|t| t.relative_residual).sum::<f64>() / trials.len() as f64
        };
        let verdict = if trials.iter().all(|t| t.passed) {
            CheckVerdict::Pass
        } else {
            CheckVerdict::Fail
        };

        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            config,
            verdict,
            max_relative_residual,
            mean_relative_residual,
            trials,
        }
    }

    pub fn passed(&self) -> bool {
        self.verdict == CheckVerdict::Pass
    }

    /// Trials that exceeded the tolerance
    pub fn failures(&self) -> impl Iterator<Item = &TrialResult> {
        self.trials.iter().filter(|t| !t.passed)
    }
}
