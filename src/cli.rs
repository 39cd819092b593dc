use clap::{Arg, ArgAction, Command};

/// Threshold flags: name, help text
const THRESHOLD_FLAGS: [(&str, &str); 6] = [
    ("cpu-warning", "CPU warning threshold (percent, optional)"),
    ("cpu-critical", "CPU critical threshold (percent, optional)"),
    ("mem-warning", "Memory warning threshold (percent, optional)"),
    ("mem-critical", "Memory critical threshold (percent, optional)"),
    ("disk-warning", "Disk warning threshold (free percent, optional)"),
    ("disk-critical", "Disk critical threshold (free percent, optional)"),
];

/// Arguments of the health check, accepted before or after `check`
fn check_args() -> Vec<Arg> {
    let mut args = vec![
        Arg::new("format")
            .short('f')
            .long("format")
            .value_name("FORMAT")
            .help("Output format (table|json) [default: table]")
            .global(true),
        Arg::new("process")
            .short('p')
            .long("process")
            .value_name("NAME")
            .help("Check specific process by name (optional)")
            .global(true),
        Arg::new("config")
            .short('c')
            .long("config")
            .value_name("PATH")
            .help("Use this config file instead of the user config")
            .value_parser(clap::value_parser!(std::path::PathBuf))
            .global(true),
    ];

    // Absent and negative values both keep the default
    for (name, help) in THRESHOLD_FLAGS {
        args.push(
            Arg::new(name)
                .long(name)
                .value_name("PERCENT")
                .help(help)
                .value_parser(clap::value_parser!(f64))
                .allow_negative_numbers(true)
                .global(true),
        );
    }

    args
}

pub fn build_cli() -> Command {
    Command::new("syshealth")
        .about("Point-in-time host health check")
        .long_about(
            "Measures CPU, memory and disk usage, classifies each against warning/critical \
             thresholds and exits with 0 (OK), 1 (WARNING), 2 (CRITICAL) or 3 (error).",
        )
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .args(check_args())
        .subcommand(
            Command::new("check")
                .about("Run the health check (default when no subcommand is given)"),
        )
        .subcommand(Command::new("version").about("Shows version information"))
        .subcommand(
            Command::new("config")
                .about("Manage the config file")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("init")
                        .about("Write a config file holding the default thresholds")
                        .arg(
                            Arg::new("force")
                                .long("force")
                                .help("Overwrite an existing config file")
                                .action(ArgAction::SetTrue),
                        ),
                ),
        )
}
