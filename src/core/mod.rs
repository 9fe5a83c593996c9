//! Transform engine, lapped processing and alias-cancellation checks

pub mod dsp;
pub mod lapped;
pub mod mdct;
pub mod tdac;

pub use lapped::LappedTransform;
pub use mdct::{imdct4, mdct4, Mdct};
pub use tdac::{random_signal, tdac_residual, OverlapResidual, TdacCheck};
