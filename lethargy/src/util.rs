//! Helpers for the edge of an application: reading the real arguments,
//! and turning errors into an exit.
//!
//! Nothing else in this crate prints or exits.

use std::fmt;

/// An owned snapshot of the process arguments, to pass to the `take_*` functions.
pub fn argv() -> Vec<String> {
    std::env::args().collect()
}

/// Print `message` (if any) to stderr and exit with status 1.
pub fn fail(message: Option<&dyn fmt::Display>) -> ! {
    if let Some(message) = message {
        eprintln!("{}", message);
    }
    std::process::exit(1);
}

/// Unwrap `result`, or print the error and exit.
pub fn show_errors<T, E: fmt::Display>(result: Result<T, E>) -> T {
    match result {
        Ok(val) => val,
        Err(e) => fail(Some(&e)),
    }
}

/// Unwrap `result`, or print `reason` instead of the error and exit.
pub fn expect<T, E>(result: Result<T, E>, reason: &str) -> T {
    match result {
        Ok(val) => val,
        Err(_) => fail(Some(&reason)),
    }
}

/// `println!` if `condition` holds, otherwise nothing.
pub fn print_if(condition: bool) -> fn(&dyn fmt::Display) {
    fn print(msg: &dyn fmt::Display) {
        println!("{}", msg);
    }
    fn ignore(_: &dyn fmt::Display) {}

    if condition {
        print
    } else {
        ignore
    }
}
