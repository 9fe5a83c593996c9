//! Vector norms and error measures

/// Euclidean norm
pub fn l2_norm(samples: &[f64]) -> f64 {
    samples.iter().map(|s| s * s).sum::<f64>().sqrt()
}

/// Compute peak amplitude
pub fn peak_amplitude(samples: &[f64]) -> f64 {
    samples.iter().map(|s| s.abs()).fold(0.0f64, f64::max)
}

/// Largest element-wise absolute difference over the common prefix
pub fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0f64, f64::max)
}

/// `residual / reference`, or the raw residual when the reference is silent
pub fn relative_error(residual: f64, reference: f64) -> f64 {
    if reference > f64::EPSILON {
        residual / reference
    } else {
        residual
    }
}

/// Convert amplitude to dB (relative to 1.0)
pub fn amplitude_to_db(amplitude: f64) -> f64 {
    if amplitude > 1e-300 {
        20.0 * amplitude.log10()
    } else {
        -6000.0
    }
}
