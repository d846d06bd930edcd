//! Testforge CLI Entry Point
//!
//! Takes a function prototype and a target directory, generates one
//! boundary-case PHPUnit test file into that directory.

use clap::Parser;
use std::path::PathBuf;

use testforge_core::generate_test_suite;
use testforge_utils::logging::{self, LogLevel};

#[derive(Parser)]
#[command(name = "testforge")]
#[command(about = "Generate a boundary-case PHPUnit test suite for one function signature")]
#[command(version = "0.1.0")]
struct Cli {
    /// Function prototype, e.g. 'doExample($argc, $argv)'
    prototype: String,

    /// Directory to place the generated test file (must already exist)
    test_dir: PathBuf,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    logging::basic_config(Some(LogLevel::Warning))?;

    let cli = Cli::parse();

    match generate_test_suite(&cli.prototype, &cli.test_dir)? {
        Some(path) => println!("✅ Test suite written: {}", path.display()),
        None => println!("ℹ️  '{}' takes no parameters, no suite generated", cli.prototype),
    }

    Ok(())
}
