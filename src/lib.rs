//! myflix - client for the movie catalog REST service
//!
//! The library holds the API client and its seams; the binary in `main.rs`
//! is a thin command-line front-end over it.

pub mod adapters;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod session;
pub mod traits;
