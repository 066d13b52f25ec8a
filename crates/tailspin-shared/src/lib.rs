//! # Tailspin Shared
//!
//! Configuration, seed datasets and error types used by the adapter and
//! app crates.

pub mod config;
pub mod error;
mod json;
pub mod seed;

// Re-exports
pub use config::*;
pub use error::*;
pub use seed::*;
