//! sysup-exec: Command execution abstraction
//!
//! Provides the executor trait and the local implementation used to run
//! package manager binaries

pub mod error;
pub mod local;
pub mod result;
pub mod traits;
