use std::{fs, path::PathBuf, process};

use clap::Parser;
use rill::run;

/// rill is a small imperative scripting language with numeric and text
/// values.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the script file to execute.
    script: PathBuf,
}

fn main() {
    let args = Args::parse();

    let source = fs::read_to_string(&args.script).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  args.script.display());
        process::exit(1);
    });

    if let Err(e) = run(&source) {
        eprintln!("{e}");
        process::exit(1);
    }
}
