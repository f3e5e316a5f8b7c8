//! devid binary support: command-line parsing and bootstrap.
//!
//! The derivation itself lives in `devid-app`; this crate only loads
//! configuration, sets up tracing, wires adapters into the use case and
//! prints the result.

pub mod bootstrap;
pub mod cli;
