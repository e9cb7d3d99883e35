//! Shared library for `GpaCalc`
//! Contains the grade engine, configuration and logging used by the CLI

pub mod config;
pub mod core;
pub mod logger;

pub use crate::core::get_version;
