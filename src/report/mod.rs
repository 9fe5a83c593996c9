//! Check report types

mod result;

pub use result::{CheckVerdict, TdacReport, TrialResult};
