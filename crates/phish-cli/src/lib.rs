//! Library surface of the pipeline CLI.
//!
//! Exposes the orchestrator and its supporting modules so integration
//! tests can drive a full run without spawning the binary.

#![deny(unsafe_code)]

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod summary;
