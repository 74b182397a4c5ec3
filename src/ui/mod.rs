//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! All terminal output of the CLI goes through this module so quiet,
//! debug and JSON modes behave the same for every command.

pub mod output;
