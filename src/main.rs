use colored::*;

use syshealth::cli::build_cli;
use syshealth::commands;

fn main() {
    let matches = match build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            // Usage errors share the configuration failure code
            let _ = e.print();
            std::process::exit(commands::parse_error_exit_code(&e));
        }
    };

    syshealth::init_logging(matches.get_flag("verbose"));

    let result = commands::run(&matches);
    if let Err(e) = &result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
    }

    std::process::exit(commands::exit_code(&result));
}
