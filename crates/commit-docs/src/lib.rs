//! commit-docs library
//!
//! This module exports the configuration, logging setup and generation
//! pipeline of commit-docs for use in integration tests and as a library.

pub mod config;
pub mod generator;
pub mod logging;
