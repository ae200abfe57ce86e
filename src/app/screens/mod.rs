//! TUI screen components
//!
//! Contains the stopwatch screen.

pub mod timer;

pub use timer::TimerScreen;
