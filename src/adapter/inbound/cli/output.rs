//! Terminal output helpers for the diagnostic commands.

use std::fmt::Display;

use owo_colors::OwoColorize;

/// Print a section heading.
pub fn section(title: &str) {
    println!("{}", title.bold());
}

/// Print an aligned name/value line.
pub fn field(name: &str, value: impl Display) {
    println!("  {} {value}", format!("{name}:").dimmed());
}

/// Print a completed action line.
pub fn action_done(verb: &str, what: &str) {
    println!("{} {what}", verb.green().bold());
}

/// Print a follow-up hint for the operator.
pub fn hint(text: &str) {
    println!("{} {text}", "hint:".yellow().bold());
}
