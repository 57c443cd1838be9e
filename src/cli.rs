//! CLI argument parsing and command dispatch

pub mod args;
pub mod check;
pub mod common;
pub mod list;

// Re-export types for convenient access
pub use args::{Cli, Command};
pub use check::{CheckOptions, run_check};
pub use list::run_list;
