//! Internal library crate for colordir.
//!
//! The shipped application is the `cdir` binary (`src/main.rs`).
//!
//! This library exists to share code between targets (binary, tests) and to keep modules organized.
//! This API is only used to build the `cdir` binary and is not considered a library for external use.

pub mod core;
pub mod ui;
pub mod utils;
