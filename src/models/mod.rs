//! Data models module
//! 
//! Contains the timer phase and display unit definitions.

pub mod phase;
pub mod unit;

// Re-export commonly used types
pub use phase::Phase;
pub use unit::DisplayUnit;
