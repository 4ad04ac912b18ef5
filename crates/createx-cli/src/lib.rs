//! # createx-cli
//!
//! The `createx` command: build the static guide, serve it with the content
//! API, validate module files, and print catalog statistics.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config_handlers;
pub mod logging;

pub use cli::{Cli, Command};
