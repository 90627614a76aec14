//! Prints a freshly signed App Store Connect API token to stdout

use ascjwt::{TokenConfig, TokenGenerator, TokenResult};
use ascjwt_common::LoggingTransformer;
use std::io::Write;
use std::process::ExitCode;

fn run() -> TokenResult<()> {
    let token = TokenGenerator::new(TokenConfig::default())?.generate()?;

    // One line, nothing else on stdout
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{token}")?;
    stdout.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    LoggingTransformer::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
