//! Shared pieces used by every `cidrex` crate: the run configuration and logging macros.

pub mod config;
pub mod log;
