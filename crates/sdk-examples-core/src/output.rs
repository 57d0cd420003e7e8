// crates/sdk-examples-core/src/output.rs
// ============================================================================
// Module: Console Output
// Description: Line-oriented stdout/stderr writers for example binaries.
// Purpose: Surface write failures instead of panicking like print macros.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Example binaries report results on stdout and diagnostics on stderr. These
//! helpers return I/O errors so callers decide how a broken pipe is handled.

use std::io;
use std::io::Write;

/// Writes a line to stdout.
///
/// # Errors
///
/// Returns an error when stdout cannot be written.
pub fn write_stdout_line(message: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{message}")?;
    stdout.flush()
}

/// Writes a line to stderr.
///
/// # Errors
///
/// Returns an error when stderr cannot be written.
pub fn write_stderr_line(message: &str) -> io::Result<()> {
    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}
