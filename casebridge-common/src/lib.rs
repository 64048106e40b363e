//! # Casebridge Common Library
//!
//! Shared code for the casebridge workspace:
//! - Common error types
//! - Configuration loading and TOML write-back
//! - Tracing initialization
//! - URL sanitation for externally sourced links

pub mod config;
pub mod error;
pub mod logging;
pub mod url_utils;

pub use error::{Error, Result};
