#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # Greeter
//!
//! Command-line front end over `greeter-core`.
//!
//! This library re-exports the core crate for convenience.

pub use greeter_core;

pub mod cli;
pub mod commands;
