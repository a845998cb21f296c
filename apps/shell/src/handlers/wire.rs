use basalt::domain::WireEnum;
use std::fmt::Display;
use std::process::ExitCode;
use tracing::debug;

/// Prints the symbolic name of `code`, or `unknown` with a failing exit code.
pub fn decode<E: WireEnum + Display>(code: i32) -> ExitCode {
    match E::from_wire(code) {
        Some(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        None => {
            debug!(vocabulary = E::NAME, code, "Undeclared wire code");
            println!("unknown");
            ExitCode::FAILURE
        },
    }
}
