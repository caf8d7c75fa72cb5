//! `vibo-invoice` command-line front end.

pub mod commands;
pub mod config;

pub use commands::run;
pub use config::{Cli, Command};
