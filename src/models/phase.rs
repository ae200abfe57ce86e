//! Timer lifecycle phase

use std::fmt;

/// Discrete lifecycle state of the stopwatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing measured yet, display reads zero
    #[default]
    Idle,
    /// Clock is running and the live readout refreshes every frame
    Running,
    /// Time is frozen and the height has been computed
    Stopped,
}

impl Phase {
    /// Label shown on the control button while in this phase
    pub fn control_label(&self) -> &'static str {
        match self {
            Phase::Idle => "Start Timer",
            Phase::Running => "Stop Timer",
            Phase::Stopped => "Reset",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_phase_is_idle() {
        assert_eq!(Phase::default(), Phase::Idle);
    }

    #[test]
    fn test_control_labels() {
        assert_eq!(Phase::Idle.control_label(), "Start Timer");
        assert_eq!(Phase::Running.control_label(), "Stop Timer");
        assert_eq!(Phase::Stopped.control_label(), "Reset");
    }
}
