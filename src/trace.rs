//! Shared printing helpers for the scenario drivers.
//!
//! Pattern modules compute their trace as plain strings so the logic stays
//! testable without capturing stdout; only the drivers print, through these
//! helpers.

use colored::Colorize;

/// Prints a bold section banner for one scenario step.
pub fn banner(title: &str) {
    println!("{}", format!("=== {title} ===").bold());
}

/// Prints a client-side narration line.
pub fn note(line: &str) {
    println!("{}", line.cyan());
}

/// Prints the trace lines a pattern operation returned.
pub fn emit(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

/// Prints a single trace line.
pub fn line(line: &str) {
    println!("{line}");
}

/// Prints an empty separator line.
pub fn blank() {
    println!();
}
