// src/core/tdac.rs
//
// Time-domain alias cancellation check: transform two half-overlapping
// frames, invert both, and compare the summed overlap with the input.

use crate::config::CheckConfig;
use crate::core::dsp::{create_window, stats, WindowType};
use crate::core::mdct::Mdct;
use crate::error::{MdctError, MdctResult};
use crate::report::{TdacReport, TrialResult};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Error measures over the shared half frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapResidual {
    pub residual: f64,
    pub reference_norm: f64,
    pub max_error: f64,
}

impl OverlapResidual {
    pub fn relative(&self) -> f64 {
        stats::relative_error(self.residual, self.reference_norm)
    }
}

/// `‖Z1[M..N] + Z2[0..M] - 2·x[start+M .. start+N]‖` for unwindowed frames
/// of length `N` at `start` and `start + N/2`
pub fn tdac_residual(signal: &[f64], frame_len: usize, start: usize) -> MdctResult<f64> {
    let mdct = Mdct::new(frame_len)?;
    let window = create_window(frame_len, WindowType::Rectangular);
    let gain = WindowType::Rectangular.overlap_gain();
    let overlap = overlap_residual(&mdct, &window, gain, signal, start)?;
    Ok(overlap.residual)
}

fn overlap_residual(
    mdct: &Mdct,
    window: &[f64],
    gain: f64,
    signal: &[f64],
    start: usize,
) -> MdctResult<OverlapResidual> {
    let n = mdct.frame_len();
    let m = mdct.coefficient_count();
    let needed = start.checked_add(n + m).ok_or(MdctError::LengthMismatch {
        expected: usize::MAX,
        actual: signal.len(),
    })?;
    if signal.len() < needed {
        return Err(MdctError::LengthMismatch {
            expected: needed,
            actual: signal.len(),
        });
    }

    let roundtrip = |offset: usize| -> MdctResult<Vec<f64>> {
        let frame: Vec<f64> = signal[offset..offset + n]
            .iter()
            .zip(window)
            .map(|(s, w)| s * w)
            .collect();
        let mut block = mdct.inverse(&mdct.forward(&frame)?)?;
        for (s, w) in block.iter_mut().zip(window) {
            *s *= w;
        }
        Ok(block)
    };

    let first = roundtrip(start)?;
    let second = roundtrip(start + m)?;

    let overlap: Vec<f64> = first[m..]
        .iter()
        .zip(&second[..m])
        .map(|(a, b)| a + b)
        .collect();
    let reference: Vec<f64> = signal[start + m..start + n]
        .iter()
        .map(|s| gain * s)
        .collect();
    let error: Vec<f64> = overlap.iter().zip(&reference).map(|(a, b)| a - b).collect();

    Ok(OverlapResidual {
        residual: stats::l2_norm(&error),
        reference_norm: stats::l2_norm(&reference),
        max_error: stats::peak_amplitude(&error),
    })
}

/// Uniform `[0, 1)` samples from a seeded generator
pub fn random_signal(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen::<f64>()).collect()
}

/// Batch of seeded alias-cancellation trials
#[derive(Debug, Clone)]
pub struct TdacCheck {
    config: CheckConfig,
    mdct: Mdct,
    window: Vec<f64>,
}

impl TdacCheck {
    pub fn new(config: CheckConfig) -> MdctResult<Self> {
        config.validate()?;
        Ok(Self {
            mdct: Mdct::new(config.frame_len)?,
            window: create_window(config.frame_len, config.window),
            config,
        })
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Run one trial on a fresh random signal
    pub fn run_trial(&self, trial: usize) -> MdctResult<TrialResult> {
        let seed = self.config.seed.wrapping_add(trial as u64);
        let signal = random_signal(self.config.signal_len, seed);
        let overlap = overlap_residual(
            &self.mdct,
            &self.window,
            self.config.window.overlap_gain(),
            &signal,
            self.config.start,
        )?;

        let relative_residual = overlap.relative();
        let passed = relative_residual <= self.config.tolerance;
        debug!(
            "trial {} (seed {}): residual {:.3e}, relative {:.3e}",
            trial, seed, overlap.residual, relative_residual
        );
        if !passed {
            warn!(
                "trial {} (seed {}) exceeds tolerance: {:.3e} > {:.3e}",
                trial, seed, relative_residual, self.config.tolerance
            );
        }

        Ok(TrialResult {
            trial,
            seed,
            residual: overlap.residual,
            reference_norm: overlap.reference_norm,
            relative_residual,
            max_error: overlap.max_error,
            passed,
        })
    }

    pub fn run(&self) -> MdctResult<TdacReport> {
        self.run_with(|_| {})
    }

    /// Run every trial, calling `on_trial` as each one finishes
    pub fn run_with<F>(&self, on_trial: F) -> MdctResult<TdacReport>
    where
        F: Fn(&TrialResult) + Sync + Send,
    {
        info!(
            "running {} trial(s): frame {}, signal {}, window {}",
            self.config.trials,
            self.config.frame_len,
            self.config.signal_len,
            self.config.window.name()
        );

        let run_one = |trial: usize| -> MdctResult<TrialResult> {
            let result = self.run_trial(trial)?;
            on_trial(&result);
            Ok(result)
        };

        let trials = if self.config.parallel {
            (0..self.config.trials)
                .into_par_iter()
                .map(run_one)
                .collect::<MdctResult<Vec<_>>>()?
        } else {
            (0..self.config.trials)
                .map(run_one)
                .collect::<MdctResult<Vec<_>>>()?
        };

        let report = TdacReport::new(self.config.clone(), trials);
        info!(
            "{:?}: max relative residual {:.3e}",
            report.verdict, report.max_relative_residual
        );
        Ok(report)
    }
}
