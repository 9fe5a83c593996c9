// src/core/lapped.rs
//
// Streaming MDCT analysis/synthesis with 50% overlapping frames.

use crate::core::dsp::{create_window, WindowType};
use crate::core::mdct::Mdct;
use crate::error::{ensure_finite, MdctError, MdctResult};
use log::debug;
use rayon::prelude::*;

/// Windowed lapped transform over whole signals.
///
/// The signal is padded with half a frame of zeros on the left and enough
/// on the right for every sample to fall inside two frames. Frames advance
/// by `N/2`; each one is transformed independently, so analysis and
/// synthesis run on the rayon pool.
#[derive(Debug, Clone)]
pub struct LappedTransform {
    mdct: Mdct,
    window_type: WindowType,
    window: Vec<f64>,
}

impl LappedTransform {
    pub fn new(frame_len: usize, window_type: WindowType) -> MdctResult<Self> {
        let mdct = Mdct::new(frame_len)?;
        Ok(Self {
            window: create_window(frame_len, window_type),
            window_type,
            mdct,
        })
    }

    pub fn frame_len(&self) -> usize {
        self.mdct.frame_len()
    }

    /// Frame advance (`N/2`), also the coefficient count per frame
    pub fn hop(&self) -> usize {
        self.mdct.coefficient_count()
    }

    pub fn window_type(&self) -> WindowType {
        self.window_type
    }

    /// Number of frames `analyze` produces for `signal_len` samples
    pub fn frame_count(&self, signal_len: usize) -> usize {
        let hop = self.hop();
        (signal_len + 2 * hop).div_ceil(hop) - 1
    }

    /// Split `signal` into windowed frames and transform each one
    pub fn analyze(&self, signal: &[f64]) -> MdctResult<Vec<Vec<f64>>> {
        ensure_finite(signal)?;

        let hop = self.hop();
        let frames = self.frame_count(signal.len());
        let mut padded = vec![0.0; (frames + 1) * hop];
        padded[hop..hop + signal.len()].copy_from_slice(signal);

        debug!(
            "analyze: {} samples into {} frames of {} ({})",
            signal.len(),
            frames,
            self.frame_len(),
            self.window_type.name()
        );

        (0..frames)
            .into_par_iter()
            .map(|i| {
                let start = i * hop;
                let frame: Vec<f64> = padded[start..start + self.frame_len()]
                    .iter()
                    .zip(&self.window)
                    .map(|(s, w)| s * w)
                    .collect();
                self.mdct.forward(&frame)
            })
            .collect()
    }

    /// Inverse-transform frames, window and overlap-add them back into
    /// `signal_len` samples
    pub fn synthesize(&self, frames: &[Vec<f64>], signal_len: usize) -> MdctResult<Vec<f64>> {
        let hop = self.hop();
        let capacity = frames.len().saturating_sub(1) * hop;
        if signal_len > capacity {
            return Err(MdctError::LengthMismatch {
                expected: capacity,
                actual: signal_len,
            });
        }

        let blocks = frames
            .par_iter()
            .map(|coefficients| -> MdctResult<Vec<f64>> {
                let mut block = self.mdct.inverse(coefficients)?;
                for (s, w) in block.iter_mut().zip(&self.window) {
                    *s *= w;
                }
                Ok(block)
            })
            .collect::<MdctResult<Vec<_>>>()?;

        let mut output = vec![0.0; (frames.len() + 1) * hop];
        for (i, block) in blocks.iter().enumerate() {
            let start = i * hop;
            for (out, s) in output[start..start + block.len()].iter_mut().zip(block) {
                *out += s;
            }
        }

        let gain = self.window_type.overlap_gain();
        Ok(output[hop..hop + signal_len]
            .iter()
            .map(|s| s / gain)
            .collect())
    }
}
