use std::process::exit;

use rusty_assistant::prelude::*;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("{}", e);
        exit(1);
    }
}
