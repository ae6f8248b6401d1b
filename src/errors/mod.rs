//! Error types for the front end.
//!
//! This module defines the diagnostics the parser accumulates. It includes:
//!
//! - An error structure carrying the offending token's span
//! - One variant per failure kind, with its exact message text
//! - Short suggestions used when rendering errors for a terminal

pub mod errors;

#[cfg(test)]
mod tests;
