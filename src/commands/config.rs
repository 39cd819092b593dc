//! `config` command handlers.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::core::config::Config;
use crate::core::health::{ThresholdOverrides, ThresholdSet};

pub fn handle(matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("init", sub_matches)) => init(sub_matches),
        _ => {
            println!("Use 'syshealth config --help' for more information.");
            Ok(())
        }
    }
}

fn init(matches: &clap::ArgMatches) -> Result<()> {
    let path = match matches.get_one::<PathBuf>("config") {
        Some(path) => path.clone(),
        None => Config::get_config_path()?,
    };

    let written = init_config(&path, matches.get_flag("force"))?;
    println!(
        "{} {}",
        "Config file written:".green(),
        written.display()
    );
    Ok(())
}

/// Config holding every default explicitly, as a starting point for edits
pub fn template() -> Config {
    let defaults = ThresholdSet::default();
    Config {
        format: Some("table".to_string()),
        process: None,
        thresholds: ThresholdOverrides {
            cpu_warning: Some(defaults.cpu_warning),
            cpu_critical: Some(defaults.cpu_critical),
            mem_warning: Some(defaults.mem_warning),
            mem_critical: Some(defaults.mem_critical),
            disk_warning: Some(defaults.disk_warning),
            disk_critical: Some(defaults.disk_critical),
        },
    }
}

/// Write [`template`] to `path`. An existing file is kept unless `force`.
pub fn init_config(path: &Path, force: bool) -> Result<PathBuf> {
    if path.exists() && !force {
        bail!(
            "Config file already exists: {:?} (use --force to overwrite)",
            path
        );
    }

    template()
        .save_to(path)
        .context("Failed to initialize config file")?;
    log::debug!("wrote config template to {:?}", path);

    Ok(path.to_path_buf())
}
