//! Binary entrypoint for the `hal` CLI.

use std::process::ExitCode;

use inspire_hal::HalError;

fn main() -> ExitCode {
    inspire_hal::init_tracing();
    match inspire_hal::run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(HalError::Cli(err)) => {
            // Help and version go to stdout, usage errors to stderr.
            let _ = err.print();
            ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(2))
        }
        Err(err) => {
            eprintln!("{}", err.report());
            ExitCode::from(err.exit_code())
        }
    }
}
