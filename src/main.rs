// SPDX-License-Identifier: GPL-2.0-only
// Copyright (C) 2026 Virtprobe Contributors

//! Virtprobe - report which hypervisor this system is running under
//!
//! Entry point for the virtprobe CLI. Prints a single vendor line on
//! stdout when a hypervisor is identified and nothing when the system
//! looks like bare metal; the exit status follows the configured policy.

use clap::Parser;
use serde_json::json;

use virtprobe::cli::{Cli, OutputFormat};
use virtprobe::config::{ExitPolicy, Settings};
use virtprobe::detect::{Detection, Detector, XenVocabulary};
use virtprobe::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so the detection line stays parseable.
    // `-v` enables them without requiring users to know target names up
    // front; `RUST_LOG` still takes precedence.
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());
    if cli.verbose > 0 {
        if let Ok(directive) = "virtprobe=debug".parse() {
            env_filter = env_filter.add_directive(directive);
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::load(cli.config.as_deref())?;
    let vocabulary = effective_vocabulary(&cli, &settings);
    let exit_policy = effective_exit_policy(&cli, &settings);

    let detection = Detector::new().run();

    match cli.format {
        OutputFormat::Text => {
            if let Some(report) = detection.report() {
                println!("{}", report.render(vocabulary));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&detection_json(&detection, vocabulary))?)
        }
    }

    if !detection.is_detected() {
        let code = exit_policy.undetected_exit_code();
        if code != 0 {
            std::process::exit(code);
        }
    }

    Ok(())
}

/// CLI flag overrides the settings file
fn effective_vocabulary(cli: &Cli, settings: &Settings) -> XenVocabulary {
    cli.xen_labels
        .map(XenVocabulary::from)
        .unwrap_or(settings.xen_vocabulary)
}

/// `--strict-exit` forces the nonzero-on-undetected policy for one run
fn effective_exit_policy(cli: &Cli, settings: &Settings) -> ExitPolicy {
    if cli.strict_exit {
        ExitPolicy::NonzeroOnUndetected
    } else {
        settings.exit_policy
    }
}

fn detection_json(detection: &Detection, vocabulary: XenVocabulary) -> serde_json::Value {
    match detection.report() {
        Some(report) => json!({
            "detected": true,
            "vendor": report.vendor.label(),
            "mode": report.mode.map(|mode| mode.label(vocabulary)),
        }),
        None => json!({ "detected": false }),
    }
}
