//! Command line layer shared by the crate's binaries.
//!
//! Each binary is bound to one `Preset`; the only flag it takes is `--log`.
//! The runner prints exactly one status line to stdout and never fails the
//! process, whatever happened to the split.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
