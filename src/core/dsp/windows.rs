//! Window functions for lapped MDCT analysis

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Window function types
///
/// All of these satisfy the Princen-Bradley condition for a 50% overlap,
/// so analysis plus synthesis windowing cancels the time-domain aliasing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowType {
    #[default]
    Rectangular,
    Sine,
    Vorbis,
    KaiserBesselDerived(f64), // Alpha parameter
}

impl WindowType {
    /// Parse `rect`, `sine`, `vorbis`, `kbd` or `kbd:<alpha>`
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        match lower.as_str() {
            "rect" | "rectangular" | "none" => Some(Self::Rectangular),
            "sine" | "sin" => Some(Self::Sine),
            "vorbis" => Some(Self::Vorbis),
            "kbd" => Some(Self::KaiserBesselDerived(4.0)),
            _ => {
                let alpha = lower.strip_prefix("kbd:")?.parse::<f64>().ok()?;
                if alpha.is_finite() && alpha >= 0.0 {
                    Some(Self::KaiserBesselDerived(alpha))
                } else {
                    None
                }
            }
        }
    }

    pub fn name(&self) -> String {
        match self {
            Self::Rectangular => "rect".to_string(),
            Self::Sine => "sine".to_string(),
            Self::Vorbis => "vorbis".to_string(),
            Self::KaiserBesselDerived(alpha) => format!("kbd:{}", alpha),
        }
    }

    /// Gain of windowed overlap-add reconstruction.
    ///
    /// Without a window each sample comes back twice (once per overlapping
    /// frame); the power-complementary windows split that into unity.
    pub fn overlap_gain(&self) -> f64 {
        match self {
            Self::Rectangular => 2.0,
            _ => 1.0,
        }
    }
}

/// Create window function
pub fn create_window(size: usize, window_type: WindowType) -> Vec<f64> {
    let n = size as f64;
    match window_type {
        WindowType::Rectangular => vec![1.0; size],
        WindowType::Sine => (0..size)
            .map(|i| (PI * (i as f64 + 0.5) / n).sin())
            .collect(),
        WindowType::Vorbis => (0..size)
            .map(|i| {
                let s = (PI * (i as f64 + 0.5) / n).sin();
                (0.5 * PI * s * s).sin()
            })
            .collect(),
        WindowType::KaiserBesselDerived(alpha) => kaiser_bessel_derived(size, alpha),
    }
}

/// KBD window: square root of the normalized running sum of a Kaiser kernel
fn kaiser_bessel_derived(size: usize, alpha: f64) -> Vec<f64> {
    let half = size / 2;
    if half == 0 {
        return vec![1.0; size];
    }

    let kernel: Vec<f64> = (0..=half)
        .map(|i| {
            let ratio = 2.0 * i as f64 / half as f64 - 1.0;
            bessel_i0(PI * alpha * (1.0 - ratio * ratio).max(0.0).sqrt())
        })
        .collect();
    let total: f64 = kernel.iter().sum();

    let mut window = Vec::with_capacity(size);
    let mut running = 0.0;
    for &k in &kernel[..half] {
        running += k;
        window.push((running / total).sqrt());
    }
    for i in half..size {
        window.push(window[size - 1 - i]);
    }
    window
}

/// Modified Bessel function I0 (for KBD window)
fn bessel_i0(x: f64) -> f64 {
    let mut sum = 1.0f64;
    let mut term = 1.0f64;
    let x2 = x * x;

    for k in 1..200 {
        term *= x2 / (4.0 * k as f64 * k as f64);
        sum += term;
        if term < 1e-17 * sum {
            break;
        }
    }
    sum
}

/// Check `w[n]^2 + w[n + N/2]^2` is constant across the first half
pub fn is_princen_bradley(window: &[f64], tolerance: f64) -> bool {
    if window.len() % 2 != 0 {
        return false;
    }
    let half = window.len() / 2;
    let Some(reference) = window.first().map(|w0| w0 * w0 + window[half] * window[half]) else {
        return true;
    };
    (0..half).all(|i| {
        let power = window[i] * window[i] + window[i + half] * window[i + half];
        (power - reference).abs() <= tolerance
    })
}
