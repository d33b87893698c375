//! CLI module for myflix.
//!
//! This module provides the command-line front-end over
//! [`crate::api::MovieApiClient`]:
//! - Argument parsing
//! - Command execution, one API call per command
//! - Plain-text rendering of results
//!
//! # Usage
//!
//! ```ignore
//! use myflix::cli::{execute, parse_args, TerminalPrompt};
//!
//! let command = parse_args(std::env::args());
//! match execute(&client, command, &TerminalPrompt).await {
//!     Ok(output) => println!("{}", output),
//!     Err(e) => {
//!         eprintln!("{}", e.user_message());
//!         std::process::exit(1);
//!     }
//! }
//! ```

pub mod args;
pub mod commands;
pub mod render;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use commands::{execute, CommandError, PasswordPrompt, TerminalPrompt};
pub use version::{version_line, VERSION};
