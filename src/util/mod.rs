//! Utility functions module
//! 
//! Contains helpers for formatting the time and height readouts.

pub mod units;

// Re-export commonly used functions
pub use units::{format_height, format_seconds, height_placeholder};
