//! mdctcheckr - FFT-based MDCT with alias-cancellation checks
//!
//! A type-IV Modified Discrete Cosine Transform pair built on a quarter-length
//! complex FFT, plus the tooling around it: Princen-Bradley windows, lapped
//! analysis/synthesis of whole signals, and a seeded check that overlapping
//! frames reconstruct their input.
//!
//! ## Module Structure
//!
//! - `core` - Transform engine, windows, lapped processing, TDAC check
//! - `cli` - Command-line interface
//! - `config` - Check presets and configuration
//! - `report` - Check result types
//! - `error` - Error type shared across the crate
//!
//! ## Quick Start
//!
//! ```rust
//! use mdctcheckr::{imdct4, mdct4};
//!
//! let x: Vec<f64> = (0..150).map(|i| (i as f64 * 0.37).sin()).collect();
//! let z1 = imdct4(&mdct4(&x[..100])?)?;
//! let z2 = imdct4(&mdct4(&x[50..150])?)?;
//!
//! // Overlapping halves sum to twice the input
//! for i in 0..50 {
//!     assert!((z1[50 + i] + z2[i] - 2.0 * x[50 + i]).abs() < 1e-9);
//! }
//! # Ok::<(), mdctcheckr::MdctError>(())
//! ```
//!
//! ## Length Rules
//!
//! | Operation | Input                  | Output        |
//! |-----------|------------------------|---------------|
//! | `mdct4`   | `N` samples, `N % 4 == 0` | `N/2` values |
//! | `imdct4`  | `N` values, `N` even   | `2N` samples  |
//!
//! Anything else fails with [`MdctError::InvalidFrameLength`]; inputs are
//! never padded or truncated.

// Transform engine and checks
pub mod core;

// Command-line interface
pub mod cli;

// Presets and configuration
pub mod config;

// Shared error type
pub mod error;

// Check result types
pub mod report;

// Re-export commonly used types at crate root for convenience
pub use config::{CheckConfig, CheckConfigBuilder, CheckPreset};
pub use crate::core::dsp::{create_window, WindowType};
pub use crate::core::{imdct4, mdct4, tdac_residual, LappedTransform, Mdct, TdacCheck};
pub use error::{MdctError, MdctResult};
pub use report::{CheckVerdict, TdacReport, TrialResult};
