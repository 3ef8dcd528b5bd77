//! The `settings` module loads `settings/*.toml` and parses the command line.
//! Parsing of the shipped files is covered by the tests in `settings.rs`; see
//! `bin/logger_demo.rs` for a binary that loads them from the default location.

mod cli;
pub use clap::Parser;
pub use cli::*;

mod settings;
pub use settings::*;
