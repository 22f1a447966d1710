//! Command-line front end for colordir.
//!
//! Holds the [cli] submodule: argument parsing, the help screen, and
//! usage-error reporting.

pub mod cli;

pub use cli::{CliAction, Options, handle_args};
