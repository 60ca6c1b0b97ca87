//! Binary entrypoint for the `slate` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A .env file may provide SLATE_STORE for the store root.
    let _ = dotenvy::dotenv();
    match slate::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
