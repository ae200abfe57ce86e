//! Timer core
//! 
//! The stopwatch state machine together with the seams it talks through:
//! a monotonic clock, a refresh scheduler and the output surface.

pub mod clock;
pub mod controller;
pub mod scheduler;
pub mod surface;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use controller::TimerController;
pub use scheduler::{FrameScheduler, NoRefresh, RefreshHandle, RefreshScheduler};
pub use surface::Surface;
