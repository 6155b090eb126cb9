pub mod bench;
pub mod factor;
pub mod server;

use std::time::Duration;

use primefactor_core::{BigInt, FactorError, parse_number};

/// Exit status for bad user input (same as clap's usage errors).
pub const EXIT_USAGE: i32 = 2;

/// Exit status for anything else that stops a command.
pub const EXIT_FAILURE: i32 = 1;

/// Map a factorization error to a process exit status.
pub fn exit_code(err: &FactorError) -> i32 {
    if err.is_client_error() {
        EXIT_USAGE
    } else {
        EXIT_FAILURE
    }
}

/// Print the error and terminate the process.
pub fn fail(err: &FactorError) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(exit_code(err));
}

/// Parse a decimal argument, exiting with a usage error if it is not a number.
pub fn parse_or_exit(text: &str) -> BigInt {
    parse_number(text).unwrap_or_else(|e| fail(&e))
}

/// Render a duration as `"<ms> ms // <s> s"`.
pub fn format_duration(duration: Duration) -> String {
    let ms = duration.as_millis();
    format!("{ms} ms // {} s", duration.as_secs_f64())
}
