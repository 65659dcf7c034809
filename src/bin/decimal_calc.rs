// ============================================================================
// decimal-calc
// File-driven CLI front end for the decimal engine
// ============================================================================

use decimal_engine::decimal::DecimalStr;
use decimal_engine::harness;
use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: decimal-calc <test_file>");
        return ExitCode::FAILURE;
    };

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Error: cannot open file {path}: {err}");
            return ExitCode::FAILURE;
        },
    };

    let addend = DecimalStr::new(harness::DEFAULT_ADDEND).expect("default addend is well formed");

    let mut stdout = io::stdout().lock();
    if let Err(err) = harness::run(BufReader::new(file), &mut stdout, addend) {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
