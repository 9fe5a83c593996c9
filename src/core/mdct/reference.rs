//! Direct O(N²) MDCT/IMDCT used to validate the fast path.
//!
//! Same length rules and scaling as [`super::mdct4`] and [`super::imdct4`].

use crate::error::{ensure_finite, MdctError, MdctResult};
use std::f64::consts::PI;

fn basis(n: usize, k: usize, frame_len: usize) -> f64 {
    let big_n = frame_len as f64;
    let phase = n as f64 + 0.5 + big_n / 4.0;
    (2.0 * PI / big_n * phase * (k as f64 + 0.5)).cos()
}

/// Cosine-sum forward transform
pub fn mdct(frame: &[f64]) -> MdctResult<Vec<f64>> {
    let n = frame.len();
    if n == 0 || n % 4 != 0 {
        return Err(MdctError::InvalidFrameLength { len: n, required: 4 });
    }
    ensure_finite(frame)?;

    let scale = 1.0 / (n as f64).sqrt();
    Ok((0..n / 2)
        .map(|k| {
            scale
                * frame
                    .iter()
                    .enumerate()
                    .map(|(i, &x)| x * basis(i, k, n))
                    .sum::<f64>()
        })
        .collect())
}

/// Cosine-sum inverse transform
pub fn imdct(coefficients: &[f64]) -> MdctResult<Vec<f64>> {
    let m = coefficients.len();
    if m == 0 || m % 2 != 0 {
        return Err(MdctError::InvalidFrameLength { len: m, required: 2 });
    }
    ensure_finite(coefficients)?;

    let n = 2 * m;
    let scale = 4.0 / (n as f64).sqrt();
    Ok((0..n)
        .map(|i| {
            scale
                * coefficients
                    .iter()
                    .enumerate()
                    .map(|(k, &c)| c * basis(i, k, n))
                    .sum::<f64>()
        })
        .collect())
}
