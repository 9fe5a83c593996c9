//! Configuration module for mdctcheckr

mod check;

pub use check::{CheckConfig, CheckConfigBuilder, CheckPreset};
