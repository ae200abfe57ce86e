//! TUI application module
//! 
//! Contains the terminal user interface components, the timer screen
//! and input handling.

pub mod app;
pub mod input;
pub mod screens;
pub mod tui;

pub use app::App;
pub use input::{HitAreas, InputAction};
pub use screens::TimerScreen;
pub use tui::Tui;
