use std::process::exit;

use colored::Colorize;
use log::info;

use bulk_rename::prelude::*;
use bulk_rename::{get_log_file, get_matches, get_target_directory, get_verbosity};

fn main() {
    let matches = get_matches();

    if let Err(e) = init_logger(get_verbosity(&matches), get_log_file(&matches).as_deref()) {
        eprintln!("{}", format!("Error: {e}").red());
        exit(1);
    }

    if let Err(e) = migrate(&matches) {
        eprintln!("{}", format!("Error: {e}").red());
        exit(1);
    }
}

fn migrate(matches: &clap::ArgMatches) -> Result<()> {
    let root = get_target_directory(matches)?;

    info!(
        "Recursively applying search and replace to {}",
        root.display()
    );

    let rules = ejml_rule_set();
    let report = run(&root, &rules)?;
    report.log_summary();

    info!("Finished!");

    Ok(())
}
