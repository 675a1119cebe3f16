use clap::Parser;
use std::path::PathBuf;
use std::process::exit;

use rusty_assistant::errors::AppError;
use rusty_assistant::logs::{
    count_by_level, filter_by_level, load_logs, render_count_table, render_details, LogLevel,
    LOG_LEVELS,
};

#[derive(Parser, Debug)]
#[command(name = "logview", version, about = "Log file analyzer")]
struct Cli {
    /// Path to the log file to be analyzed
    log_file_path: PathBuf,

    /// Log level to show detailed entries for (INFO, ERROR, DEBUG, WARNING)
    log_level: Option<String>,
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let entries = load_logs(&cli.log_file_path)?;

    if entries.is_empty() {
        println!("No valid logs loaded from the file. Exit.");
        return Ok(());
    }

    let counts = count_by_level(&entries);
    print!("{}", render_count_table(&counts));

    if let Some(label) = cli.log_level {
        match LogLevel::parse(&label) {
            Some(level) => {
                let filtered = filter_by_level(&entries, level);
                println!();
                print!("{}", render_details(&filtered, level));
            }
            None => {
                let valid: Vec<&str> = LOG_LEVELS.iter().map(|level| level.as_str()).collect();
                println!(
                    "Warning: Specified unknown log level '{}'. Valid levels are: {}",
                    label,
                    valid.join(", ")
                );
            }
        }
    }

    Ok(())
}
