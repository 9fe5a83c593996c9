//! Sub-stages of the FFT-based MDCT/IMDCT.
//!
//! Forward: rotate-and-negate, fold, twiddle, FFT, twiddle, scatter.
//! Inverse: pack, twiddle, FFT, twiddle, unfold, unrotate.
//!
//! Every stage writes into a caller-provided buffer and panics only on
//! mismatched buffer sizes, which the planned transform rules out.

use num_complex::Complex;
use std::f64::consts::PI;

/// `w[t] = exp(-i·2π·(t + 1/8) / period)` for `t` in `0..count`
pub fn twiddles(count: usize, period: usize) -> Vec<Complex<f64>> {
    let period = period as f64;
    (0..count)
        .map(|t| Complex::from_polar(1.0, -2.0 * PI * (t as f64 + 0.125) / period))
        .collect()
}

/// `buffer[t] *= scale · w[t]`
pub fn apply_twiddle(buffer: &mut [Complex<f64>], twiddle: &[Complex<f64>], scale: f64) {
    debug_assert_eq!(buffer.len(), twiddle.len());
    for (c, w) in buffer.iter_mut().zip(twiddle) {
        *c *= *w * scale;
    }
}

/// Circular shift right by a quarter frame, then negate the first quarter.
///
/// `rot[i] = x[(i - N/4) mod N]`
pub fn rotate_and_negate(frame: &[f64], rot: &mut [f64]) {
    let n = frame.len();
    debug_assert_eq!(rot.len(), n);
    let n4 = n / 4;

    rot[..n4].copy_from_slice(&frame[n - n4..]);
    rot[n4..].copy_from_slice(&frame[..n - n4]);
    for r in &mut rot[..n4] {
        *r = -*r;
    }
}

/// Fold the four quarters of the rotated frame into N/4 complex values
pub fn fold(rot: &[f64], folded: &mut [Complex<f64>]) {
    let n = rot.len();
    let m = n / 2;
    debug_assert_eq!(folded.len(), n / 4);

    for (t, c) in folded.iter_mut().enumerate() {
        let re = rot[2 * t] - rot[n - 2 * t - 1];
        let im = -(rot[m + 2 * t] - rot[m - 2 * t - 1]);
        *c = Complex::new(re, im);
    }
}

/// Interleave real parts forward and negated imaginary parts backward
pub fn scatter(folded: &[Complex<f64>], coefficients: &mut [f64]) {
    let m = coefficients.len();
    debug_assert_eq!(folded.len() * 2, m);

    for (t, c) in folded.iter().enumerate() {
        coefficients[2 * t] = c.re;
        coefficients[m - 2 * t - 1] = -c.im;
    }
}

/// `packed[t] = x[2t] + i·x[N - 2t - 1]`
pub fn pack(coefficients: &[f64], packed: &mut [Complex<f64>]) {
    let n = coefficients.len();
    debug_assert_eq!(packed.len() * 2, n);

    for (t, c) in packed.iter_mut().enumerate() {
        *c = Complex::new(coefficients[2 * t], coefficients[n - 2 * t - 1]);
    }
}

/// Spread the packed values over the 2N buffer and complete its odd symmetry
pub fn unfold(packed: &[Complex<f64>], rot: &mut [f64]) {
    let n = packed.len() * 2;
    let n2 = rot.len();
    debug_assert_eq!(n2, 2 * n);

    for (t, c) in packed.iter().enumerate() {
        rot[2 * t] = c.re;
        rot[n + 2 * t] = c.im;
    }
    for t in (1..n2).step_by(2) {
        rot[t] = -rot[n2 - t - 1];
    }
}

/// Undo the forward rotation: shift left by a quarter, negating the wrap
pub fn unrotate(rot: &[f64], output: &mut [f64]) {
    let n2 = rot.len();
    debug_assert_eq!(output.len(), n2);
    let m = n2 / 4;

    output[..3 * m].copy_from_slice(&rot[m..]);
    for (y, r) in output[3 * m..].iter_mut().zip(&rot[..m]) {
        *y = -r;
    }
}
