//! Main application controller
//!
//! Manages the TUI, the stopwatch controller and the render loop.

use crate::{
    app::{
        input::{event_to_action, InputAction},
        screens::TimerScreen,
        tui::Tui,
    },
    config::AppConfig,
    timer::{FrameScheduler, MonotonicClock, RefreshHandle, TimerController},
    CliffTimerError, Result,
};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Application config
    config: AppConfig,
    /// Stopwatch screen, also the controller's output surface
    screen: TimerScreen,
    /// Stopwatch state machine
    controller: TimerController<MonotonicClock, FrameScheduler>,
    /// Refresh ticks from the frame scheduler
    tick_rx: mpsc::Receiver<RefreshHandle>,
    should_quit: bool,
}

impl App {
    /// Create a new application instance
    pub fn new(config: AppConfig) -> Result<Self> {
        let tui = Tui::new(config.input_poll_interval)
            .map_err(|e| CliffTimerError::TuiError(format!("Failed to create terminal: {}", e)))?;
        let (scheduler, tick_rx) = FrameScheduler::new(config.refresh_interval);
        let controller = TimerController::new(MonotonicClock::new(), scheduler);

        let mut screen = TimerScreen::new();
        controller.attach(&mut screen);

        Ok(Self {
            tui,
            config,
            screen,
            controller,
            tick_rx,
            should_quit: false,
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui
            .init()
            .map_err(|e| CliffTimerError::TuiError(format!("Failed to initialize terminal: {}", e)))?;
        info!(
            refresh_interval = ?self.config.refresh_interval,
            input_poll_interval = ?self.config.input_poll_interval,
            "Terminal initialized"
        );
        Ok(())
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.should_quit {
            self.drain_ticks();
            self.draw()?;
            self.handle_events()?;
        }

        info!("Exiting");
        self.tui.restore()?;
        Ok(())
    }

    /// Feed every tick that arrived since the last frame to the controller
    fn drain_ticks(&mut self) {
        while let Ok(handle) = self.tick_rx.try_recv() {
            self.controller.refresh_tick(handle, &mut self.screen);
        }
    }

    /// Draw the timer screen
    fn draw(&mut self) -> Result<()> {
        let screen = &mut self.screen;
        self.tui.draw(|f| screen.render(f))?;
        Ok(())
    }

    /// Wait for input and dispatch it. While running, the wait is capped at
    /// one frame so the live readout keeps moving.
    fn handle_events(&mut self) -> Result<()> {
        let timeout = if self.controller.pending_refresh().is_some() {
            self.config.refresh_interval
        } else {
            self.tui.poll_interval()
        };

        if let Some(event) = self.tui.poll_event(timeout)? {
            let action = event_to_action(&event, self.screen.hit_areas());
            self.dispatch(action);
        }
        Ok(())
    }

    fn dispatch(&mut self, action: InputAction) {
        match action {
            InputAction::ControlTap => {
                let phase = self.controller.control_tap(&mut self.screen);
                debug!(%phase, "Control tap handled");
            }
            InputAction::UnitTap => self.controller.unit_tap(&mut self.screen),
            InputAction::Quit => self.should_quit = true,
            InputAction::None => {}
        }
    }
}
