//! Shiplog Core - Core library for changelog generation
//!
//! This crate provides the error types and configuration shared by the
//! shiplog crates.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{ShiplogError, Result};
