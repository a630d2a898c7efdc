//! Command-line interface for ritmo.
//!
//! `args` defines the clap surface; `commands` implements each command as
//! a function from (store, arguments, today) to rendered output.

pub mod args;
pub mod commands;
