// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use mdctcheckr::cli::{format_json, format_report, print_presets, Args, OutputFormat};
use mdctcheckr::TdacCheck;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.list_presets {
        print_presets();
        return Ok(());
    }

    let config = args.to_config()?;
    let check = TdacCheck::new(config).context("Failed to set up check")?;

    let show_progress = args.format == OutputFormat::Text && check.config().trials > 1;
    let report = if show_progress {
        let progress = ProgressBar::new(check.config().trials as u64);
        progress.set_style(
            ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} trials")
                .context("Invalid progress template")?
                .progress_chars("=> "),
        );
        let report = check.run_with(|_| progress.inc(1));
        progress.finish_and_clear();
        report?
    } else {
        check.run()?
    };

    match args.format {
        OutputFormat::Text => print!("{}", format_report(&report, args.verbose)),
        OutputFormat::Json => println!("{}", format_json(&report)?),
    }

    if !report.passed() {
        info!("{} trial(s) failed", report.failures().count());
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
