//! Health check command handler.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;

use crate::core::config::Config;
use crate::core::health::{
    overall_severity, HealthChecker, MetricsProvider, Severity, ThresholdOverrides, ThresholdSet,
};
use crate::error::HealthError;
use crate::platform::SysinfoProvider;
use crate::ui::{render_json, render_table};

/// Report format selected with `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = HealthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(HealthError::config("invalid format: must be table or json")),
        }
    }
}

/// Everything a check run needs, resolved before measuring
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub format: OutputFormat,
    pub process: Option<String>,
    pub thresholds: ThresholdSet,
    pub color: bool,
}

impl CheckOptions {
    /// Resolve options with precedence defaults < config file < flags.
    ///
    /// Fails on an unknown format or inverted thresholds.
    pub fn resolve(matches: &ArgMatches, config: &Config) -> Result<Self> {
        let format = match matches.get_one::<String>("format").or(config.format.as_ref()) {
            Some(raw) => raw.parse::<OutputFormat>()?,
            None => OutputFormat::default(),
        };

        let process = matches
            .get_one::<String>("process")
            .or(config.process.as_ref())
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        let flag = |name: &str| matches.get_one::<f64>(name).copied();
        let flags = ThresholdOverrides {
            cpu_warning: flag("cpu-warning"),
            cpu_critical: flag("cpu-critical"),
            mem_warning: flag("mem-warning"),
            mem_critical: flag("mem-critical"),
            disk_warning: flag("disk-warning"),
            disk_critical: flag("disk-critical"),
        };

        let thresholds = ThresholdSet::with_overrides(config.thresholds.merge(flags));
        thresholds.validate()?;

        Ok(Self {
            format,
            process,
            thresholds,
            color: !matches.get_flag("no-color"),
        })
    }
}

/// Result of one check run
#[derive(Debug)]
pub struct CheckOutcome {
    pub report: String,
    pub severity: Severity,
    /// Non-fatal problems, e.g. the requested process was not found
    pub warnings: Vec<String>,
}

/// Measure with `provider`, classify and render.
///
/// CPU, memory and disk failures abort the run; process lookup problems
/// are collected as warnings.
pub fn run_check<P: MetricsProvider>(provider: P, options: &CheckOptions) -> Result<CheckOutcome> {
    let mut checker = HealthChecker::new(provider);
    checker.check_all()?;

    let mut warnings = Vec::new();
    if let Some(name) = &options.process {
        if let Err(e) = checker.check_process(name) {
            if !e.is_advisory() {
                return Err(e.into());
            }
            log::debug!("process check: {}", e);
            warnings.push(e.to_string());
        }
    }

    let snapshot = checker.finish();
    let severity = overall_severity(&snapshot, &options.thresholds);

    let report = match options.format {
        OutputFormat::Table => render_table(&snapshot, &options.thresholds, options.color),
        OutputFormat::Json => render_json(&snapshot, &options.thresholds)?,
    };

    Ok(CheckOutcome {
        report,
        severity,
        warnings,
    })
}

fn load_config(matches: &ArgMatches) -> Result<Config> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Execute the check command and return the overall severity
pub fn execute(matches: &ArgMatches) -> Result<Severity> {
    let config = load_config(matches).context("Failed to load configuration")?;
    let options = CheckOptions::resolve(matches, &config)?;

    if !options.color {
        colored::control::set_override(false);
    }

    let outcome = run_check(SysinfoProvider::new(), &options).context("Health checks failed")?;

    for warning in &outcome.warnings {
        eprintln!("{} {}", "process check warning:".yellow(), warning);
    }
    println!("{}", outcome.report);

    Ok(outcome.severity)
}
