//! Bridge between build steps and the process executor.
//!
//! Structural executor errors (bad invocation, spawn failure) are routine
//! build-step failures from the user's point of view: report them through the
//! console channel and fold them into the step's boolean result. Exit codes
//! come back untouched for the step to interpret.

use crate::executor::{self, Invocation};
use crate::output::{self, ConsoleSink};

/// Run an invocation with console-streamed output. Returns the exit code, or
/// `None` when the process could not be run at all (already reported).
pub fn run_streamed(invocation: &Invocation) -> Option<i32> {
    let mut sink = ConsoleSink::new();
    match executor::execute(invocation, &mut sink) {
        Ok(code) => Some(code),
        Err(err) => {
            output::error(&err.message);
            for hint in &err.hints {
                output::warn(&hint.message);
            }
            None
        }
    }
}
