//! Library half of the building configurator CLI.
//!
//! Everything the binary does beyond argument parsing and printing lives here
//! so it can be tested without spawning a process.

pub mod logging;
pub mod replay;
pub mod settings;
pub mod views;
