#![forbid(unsafe_code)]

//! Command-line front end for `tonebridge-palette`.

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod hues;
pub mod inputs;
pub mod logging;
pub mod preset;
pub mod remap;
pub mod util;

pub use cli::run_from_env;
pub use error::{Result, ToneError};
