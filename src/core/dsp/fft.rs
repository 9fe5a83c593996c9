//! Planned complex FFT used by the MDCT kernels

use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

/// Forward complex FFT of a fixed size.
///
/// The transform is unnormalized (no 1/N factor), which is what the MDCT
/// scaling constants assume. The plan is shared behind an `Arc`, so one
/// processor can be used from several threads at once.
#[derive(Clone)]
pub struct FftProcessor {
    fft: Arc<dyn Fft<f64>>,
    fft_size: usize,
}

impl FftProcessor {
    pub fn new(fft_size: usize) -> Self {
        let mut planner = FftPlanner::new();
        Self::with_planner(&mut planner, fft_size)
    }

    /// Build from an existing planner so plans are reused across sizes
    pub fn with_planner(planner: &mut FftPlanner<f64>, fft_size: usize) -> Self {
        Self {
            fft: planner.plan_fft_forward(fft_size),
            fft_size,
        }
    }

    /// In-place forward FFT of `buffer` (length must equal `fft_size`)
    pub fn process(&self, buffer: &mut [Complex<f64>]) {
        debug_assert_eq!(buffer.len(), self.fft_size);
        if self.fft_size == 0 {
            return;
        }
        self.fft.process(buffer);
    }

    pub fn fft_size(&self) -> usize {
        self.fft_size
    }
}

impl std::fmt::Debug for FftProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FftProcessor")
            .field("fft_size", &self.fft_size)
            .finish()
    }
}
