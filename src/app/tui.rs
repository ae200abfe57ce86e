//! Terminal management system
//! 
//! Handles crossterm backend initialization, screen management,
//! and input event polling for the TUI application.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use std::{
    io::{self, Stdout},
    time::Duration,
};

/// Terminal wrapper that manages crossterm backend and screen state
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    poll_interval: Duration,
    modes: TerminalModes,
}

/// Terminal modes switched on by `init` that `restore` must undo.
/// Each step is recorded as soon as it succeeds, so a partial init is
/// still unwound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalModes {
    pub raw_mode: bool,
    pub alternate_screen: bool,
}

impl TerminalModes {
    /// Whether anything needs undoing
    pub fn any(&self) -> bool {
        self.raw_mode || self.alternate_screen
    }

    /// Hand back the recorded modes and forget them
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl Tui {
    /// Create a new TUI instance with crossterm backend
    pub fn new(poll_interval: Duration) -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        
        Ok(Self {
            terminal,
            poll_interval,
            modes: TerminalModes::default(),
        })
    }

    /// Initialize terminal with proper setup
    pub fn init(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        self.modes.raw_mode = true;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        self.modes.alternate_screen = true;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore terminal to original state
    pub fn restore(&mut self) -> io::Result<()> {
        let modes = self.modes.take();
        if modes.raw_mode {
            disable_raw_mode()?;
        }
        if modes.alternate_screen {
            execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
            self.terminal.show_cursor()?;
        }
        Ok(())
    }

    /// Longest time `poll_event` blocks
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Draw the UI using the provided render function
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Wait up to `timeout` (capped at the poll interval) for a key or
    /// mouse event. Other events are consumed and ignored.
    pub fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        let timeout = timeout.min(self.poll_interval);

        if event::poll(timeout)? {
            match event::read()? {
                event @ (Event::Key(_) | Event::Mouse(_)) => return Ok(Some(event)),
                _ => {}
            }
        }

        Ok(None)
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Ensure terminal is restored even if restore() wasn't called
        let _ = self.restore();
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_modes_need_no_restore() {
        let mut modes = TerminalModes::default();
        assert!(!modes.any());
        assert_eq!(modes.take(), TerminalModes::default());
    }

    #[test]
    fn test_partial_init_still_restores_raw_mode() {
        // enable_raw_mode succeeded, entering the alternate screen failed
        let mut modes = TerminalModes::default();
        modes.raw_mode = true;
        assert!(modes.any());

        let taken = modes.take();
        assert!(taken.raw_mode);
        assert!(!taken.alternate_screen);
        assert!(!modes.any());
    }

    #[test]
    fn test_restore_runs_once() {
        let mut modes = TerminalModes {
            raw_mode: true,
            alternate_screen: true,
        };
        assert!(modes.take().any());
        assert!(!modes.take().any());
    }
}
