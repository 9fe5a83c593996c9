//! Output formatting for CLI results

use crate::core::dsp::stats::amplitude_to_db;
use crate::report::{CheckVerdict, TdacReport, TrialResult};
use colorful::Colorful;

/// Format a check report for terminal output
pub fn format_report(report: &TdacReport, verbose: bool) -> String {
    let mut output = String::new();
    let config = &report.config;

    let header = format!("{} {}", report.verdict.symbol(), report.verdict.description());
    let header = match report.verdict {
        CheckVerdict::Pass => header.green().to_string(),
        CheckVerdict::Fail => header.red().to_string(),
    };
    output.push_str(&format!("{} [{}]\n", header, config.preset.name()));

    output.push_str(&format!(
        "  Frame: {}  Hop: {}  Signal: {}  Window: {}\n",
        config.frame_len,
        config.hop(),
        config.signal_len,
        config.window.name()
    ));
    output.push_str(&format!(
        "  Trials: {}  Failed: {}\n",
        report.trials.len(),
        report.failures().count()
    ));
    output.push_str(&format!(
        "  Max relative residual: {:.3e} ({:.1} dB, tolerance {:.0e})\n",
        report.max_relative_residual,
        amplitude_to_db(report.max_relative_residual),
        config.tolerance
    ));
    output.push_str(&format!(
        "  Mean relative residual: {:.3e}\n",
        report.mean_relative_residual
    ));

    if verbose {
        output.push_str("\n  Trials:\n");
        for trial in &report.trials {
            output.push_str(&format_trial(trial));
        }
        output.push_str(&format!("\n  Run: {}\n", report.run_id).cyan().to_string());
    } else {
        for trial in report.failures() {
            output.push_str(&format_trial(trial));
        }
    }

    output
}

fn format_trial(trial: &TrialResult) -> String {
    let line = format!(
        "    #{:<4} seed {:<8} residual {:.3e}  relative {:.3e}  max {:.3e}",
        trial.trial, trial.seed, trial.residual, trial.relative_residual, trial.max_error
    );
    if trial.passed {
        format!("{}\n", line)
    } else {
        format!("{}\n", line.yellow())
    }
}

/// Format a check report as pretty-printed JSON
pub fn format_json(report: &TdacReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CheckConfig;

    fn report(passed: bool) -> TdacReport {
        let trial = TrialResult {
            trial: 0,
            seed: 42,
            residual: if passed { 1e-14 } else { 0.5 },
            reference_norm: 1.0,
            relative_residual: if passed { 1e-14 } else { 0.5 },
            max_error: 1e-15,
            passed,
        };
        TdacReport::new(CheckConfig::default(), vec![trial])
    }

    #[test]
    fn test_text_lists_failures_only() {
        let text = format_report(&report(true), false);
        assert!(text.contains("Aliasing cancels"));
        assert!(!text.contains("seed 42"));

        let text = format_report(&report(false), false);
        assert!(text.contains("Reconstruction error above tolerance"));
        assert!(text.contains("seed 42"));
    }

    #[test]
    fn test_verbose_lists_trials() {
        let text = format_report(&report(true), true);
        assert!(text.contains("seed 42"));
        assert!(text.contains("Run:"));
    }

    #[test]
    fn test_json_output() {
        let json = format_json(&report(true)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["verdict"], "Pass");
        assert_eq!(value["config"]["frame_len"], 100);
        assert_eq!(value["trials"][0]["seed"], 42);
    }
}
