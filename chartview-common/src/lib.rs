//! # Chartview Common Library
//!
//! Shared code for the chartview crates:
//! - Domain entities (chart positions, song detail, ranks, media)
//! - The single caller-visible error type
//! - Endpoint configuration loading

pub mod config;
pub mod error;
pub mod models;

pub use error::{Error, Result};
