//! FFT-based MDCT/IMDCT (type IV, TDAC compliant)
//!
//! A frame of `N` samples (`N` a multiple of 4) maps to `N/2` coefficients.
//! The inverse maps `N/2` coefficients back to `N` aliased samples; summing
//! the overlapping halves of adjacent 50%-overlapped frames cancels the
//! aliasing and returns twice the input.
//!
//! Both directions reduce to a length `N/4` complex FFT wrapped in pre and
//! post twiddle multiplications, so the cost is O(N log N).
//!
//! Scaling matches these closed forms:
//!
//! ```text
//! X[k] = 1/√N · Σ x[n] cos(2π/N · (n + 1/2 + N/4) · (k + 1/2))
//! y[n] = 4/√N · Σ X[k] cos(2π/N · (n + 1/2 + N/4) · (k + 1/2))
//! ```

pub mod reference;
pub mod stages;

use crate::core::dsp::FftProcessor;
use crate::error::{ensure_finite, MdctError, MdctResult};
use num_complex::Complex;

/// Planned transform for one frame length.
///
/// Holds the FFT plan and twiddle table; forward and inverse share both,
/// since each runs an `N/4`-point FFT with `exp(-i·2π·(t + 1/8)/N)` twiddles.
#[derive(Debug, Clone)]
pub struct Mdct {
    frame_len: usize,
    fft: FftProcessor,
    twiddle: Vec<Complex<f64>>,
}

impl Mdct {
    /// Plan a transform for `frame_len` time samples
    pub fn new(frame_len: usize) -> MdctResult<Self> {
        if frame_len == 0 || frame_len % 4 != 0 {
            return Err(MdctError::InvalidFrameLength {
                len: frame_len,
                required: 4,
            });
        }

        let n4 = frame_len / 4;
        Ok(Self {
            frame_len,
            fft: FftProcessor::new(n4),
            twiddle: stages::twiddles(n4, frame_len),
        })
    }

    /// Time samples per frame (`N`)
    pub fn frame_len(&self) -> usize {
        self.frame_len
    }

    /// Coefficients per frame (`N/2`)
    pub fn coefficient_count(&self) -> usize {
        self.frame_len / 2
    }

    /// Forward MDCT of one frame
    pub fn forward(&self, frame: &[f64]) -> MdctResult<Vec<f64>> {
        let mut coefficients = vec![0.0; self.coefficient_count()];
        self.forward_into(frame, &mut coefficients)?;
        Ok(coefficients)
    }

    /// Forward MDCT into a caller buffer of `N/2` values
    pub fn forward_into(&self, frame: &[f64], coefficients: &mut [f64]) -> MdctResult<()> {
        check_len(self.frame_len, frame.len())?;
        check_len(self.coefficient_count(), coefficients.len())?;
        ensure_finite(frame)?;

        let n = self.frame_len as f64;
        let mut rot = vec![0.0; self.frame_len];
        let mut folded = vec![Complex::new(0.0, 0.0); self.fft.fft_size()];

        stages::rotate_and_negate(frame, &mut rot);
        stages::fold(&rot, &mut folded);
        stages::apply_twiddle(&mut folded, &self.twiddle, 0.5);
        self.fft.process(&mut folded);
        stages::apply_twiddle(&mut folded, &self.twiddle, 2.0 / n.sqrt());
        stages::scatter(&folded, coefficients);

        Ok(())
    }

    /// Inverse MDCT of `N/2` coefficients into `N` aliased samples
    pub fn inverse(&self, coefficients: &[f64]) -> MdctResult<Vec<f64>> {
        let mut output = vec![0.0; self.frame_len];
        self.inverse_into(coefficients, &mut output)?;
        Ok(output)
    }

    /// Inverse MDCT into a caller buffer of `N` samples
    pub fn inverse_into(&self, coefficients: &[f64], output: &mut [f64]) -> MdctResult<()> {
        check_len(self.coefficient_count(), coefficients.len())?;
        check_len(self.frame_len, output.len())?;
        ensure_finite(coefficients)?;

        let n2 = self.frame_len as f64;
        let mut packed = vec![Complex::new(0.0, 0.0); self.fft.fft_size()];
        let mut rot = vec![0.0; self.frame_len];

        stages::pack(coefficients, &mut packed);
        stages::apply_twiddle(&mut packed, &self.twiddle, 0.5);
        self.fft.process(&mut packed);
        stages::apply_twiddle(&mut packed, &self.twiddle, 8.0 / n2.sqrt());
        stages::unfold(&packed, &mut rot);
        stages::unrotate(&rot, output);

        Ok(())
    }
}

fn check_len(expected: usize, actual: usize) -> MdctResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(MdctError::LengthMismatch { expected, actual })
    }
}

/// Forward MDCT: `N` samples (`N % 4 == 0`) to `N/2` coefficients
pub fn mdct4(frame: &[f64]) -> MdctResult<Vec<f64>> {
    Mdct::new(frame.len())?.forward(frame)
}

/// Inverse MDCT: `N` coefficients (`N` even) to `2N` samples
pub fn imdct4(coefficients: &[f64]) -> MdctResult<Vec<f64>> {
    let n = coefficients.len();
    if n == 0 || n % 2 != 0 {
        return Err(MdctError::InvalidFrameLength { len: n, required: 2 });
    }
    Mdct::new(2 * n)?.inverse(coefficients)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_signal(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| ((i * 7919) % 113) as f64 / 113.0 - 0.5)
            .collect()
    }

    #[test]
    fn test_lengths() {
        let x = test_signal(64);
        let y = mdct4(&x).unwrap();
        assert_eq!(y.len(), 32);
        let z = imdct4(&y).unwrap();
        assert_eq!(z.len(), 64);
    }

    #[test]
    fn test_invalid_lengths() {
        assert_eq!(
            mdct4(&test_signal(101)),
            Err(MdctError::InvalidFrameLength { len: 101, required: 4 })
        );
        assert_eq!(
            mdct4(&test_signal(6)),
            Err(MdctError::InvalidFrameLength { len: 6, required: 4 })
        );
        assert_eq!(
            imdct4(&test_signal(7)),
            Err(MdctError::InvalidFrameLength { len: 7, required: 2 })
        );
        assert!(mdct4(&[]).is_err());
        assert!(imdct4(&[]).is_err());
    }

    #[test]
    fn test_imdct_accepts_any_even_length() {
        // 6 coefficients reconstruct a 12-sample frame
        let z = imdct4(&test_signal(6)).unwrap();
        assert_eq!(z.len(), 12);
    }

    #[test]
    fn test_matches_reference() {
        let x = test_signal(48);
        let fast = mdct4(&x).unwrap();
        let slow = reference::mdct(&x).unwrap();
        for (a, b) in fast.iter().zip(&slow) {
            assert!((a - b).abs() < 1e-10, "{} vs {}", a, b);
        }

        let fast_inv = imdct4(&fast).unwrap();
        let slow_inv = reference::imdct(&fast).unwrap();
        for (a, b) in fast_inv.iter().zip(&slow_inv) {
            assert!((a - b).abs() < 1e-10, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_planned_buffer_mismatch() {
        let mdct = Mdct::new(16).unwrap();
        assert_eq!(
            mdct.forward(&test_signal(12)),
            Err(MdctError::LengthMismatch { expected: 16, actual: 12 })
        );
        let mut out = vec![0.0; 4];
        assert_eq!(
            mdct.forward_into(&test_signal(16), &mut out),
            Err(MdctError::LengthMismatch { expected: 8, actual: 4 })
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut x = test_signal(16);
        x[5] = f64::NAN;
        assert_eq!(mdct4(&x), Err(MdctError::NumericDegenerate { index: 5 }));
        let mut y = vec![0.0; 8];
        y[2] = f64::NEG_INFINITY;
        assert_eq!(imdct4(&y), Err(MdctError::NumericDegenerate { index: 2 }));
    }

    #[test]
    fn test_smallest_frame() {
        // N = 4: one-point FFT, two coefficients
        let x = [1.0, -2.0, 0.5, 3.0];
        let fast = mdct4(&x).unwrap();
        let slow = reference::mdct(&x).unwrap();
        assert_eq!(fast.len(), 2);
        for (a, b) in fast.iter().zip(&slow) {
            assert!((a - b).abs() < 1e-12);
        }
    }
}
