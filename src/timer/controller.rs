//! Timer & height controller
//!
//! Owns every piece of mutable stopwatch state and reacts to the three
//! external triggers: a tap on the control button, a tap on the height
//! label and a refresh tick. Handlers run to completion and render into
//! the [`Surface`] they are given.

use super::clock::Clock;
use super::scheduler::{RefreshHandle, RefreshScheduler};
use super::surface::Surface;
use crate::models::{DisplayUnit, Phase};
use crate::physics::fall_height;
use crate::util::units::{format_height, format_seconds, height_placeholder};
use std::time::Duration;
use tracing::{debug, info};

/// Stopwatch state machine
///
/// Invariants:
/// - a refresh is pending only while [`Phase::Running`]
/// - the height is computed once per stop and never converted in place
/// - [`Phase::Idle`] means zero elapsed time, zero height and meters
#[derive(Debug)]
pub struct TimerController<C: Clock, S: RefreshScheduler> {
    clock: C,
    scheduler: S,
    phase: Phase,
    start_instant: Option<Duration>,
    elapsed_seconds: f64,
    height_meters: f64,
    unit: DisplayUnit,
    pending_refresh: Option<RefreshHandle>,
}

impl<C: Clock, S: RefreshScheduler> TimerController<C, S> {
    /// Create a controller in the idle state
    pub fn new(clock: C, scheduler: S) -> Self {
        Self {
            clock,
            scheduler,
            phase: Phase::Idle,
            start_instant: None,
            elapsed_seconds: 0.0,
            height_meters: 0.0,
            unit: DisplayUnit::Meters,
            pending_refresh: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    /// Last computed height, always in meters
    pub fn height_meters(&self) -> f64 {
        self.height_meters
    }

    pub fn unit(&self) -> DisplayUnit {
        self.unit
    }

    /// Handle of the refresh tick currently expected, if any
    pub fn pending_refresh(&self) -> Option<RefreshHandle> {
        self.pending_refresh
    }

    /// Render the idle view onto a freshly attached surface
    pub fn attach(&self, surface: &mut impl Surface) {
        surface.set_time_text(&format_seconds(self.elapsed_seconds));
        if self.height_meters > 0.0 {
            surface.set_height_text(&format_height(self.height_meters, self.unit));
        } else {
            surface.set_height_text(&height_placeholder());
        }
        surface.set_control_text(self.phase.control_label());
    }

    /// Route a control tap by phase: start, stop or reset
    pub fn control_tap(&mut self, surface: &mut impl Surface) -> Phase {
        match self.phase {
            Phase::Idle => self.start(surface),
            Phase::Running => self.stop(surface),
            Phase::Stopped => self.reset(surface),
        }
        self.phase
    }

    /// Toggle the height unit. Does nothing until a height exists.
    pub fn unit_tap(&mut self, surface: &mut impl Surface) {
        if self.height_meters <= 0.0 {
            debug!("Unit toggle ignored, no height computed");
            return;
        }

        self.unit = self.unit.toggled();
        surface.set_height_text(&format_height(self.height_meters, self.unit));
        debug!(unit = self.unit.suffix(), "Height unit toggled");
    }

    /// Handle a refresh tick. Ticks whose handle is not the pending one
    /// were cancelled while in flight and are dropped.
    pub fn refresh_tick(&mut self, handle: RefreshHandle, surface: &mut impl Surface) {
        if self.phase != Phase::Running || self.pending_refresh != Some(handle) {
            debug!(generation = handle.generation(), phase = %self.phase, "Dropping stale refresh tick");
            return;
        }

        self.elapsed_seconds = self.read_elapsed();
        surface.set_time_text(&format_seconds(self.elapsed_seconds));
        self.pending_refresh = self.scheduler.schedule();
    }

    fn start(&mut self, surface: &mut impl Surface) {
        self.start_instant = Some(self.clock.now());
        self.phase = Phase::Running;
        surface.set_control_text(self.phase.control_label());
        self.pending_refresh = self.scheduler.schedule();

        if self.pending_refresh.is_none() {
            info!("Timer started without live refresh");
        } else {
            info!("Timer started");
        }
    }

    fn stop(&mut self, surface: &mut impl Surface) {
        self.cancel_refresh();

        self.elapsed_seconds = self.read_elapsed();
        self.height_meters = fall_height(self.elapsed_seconds);
        self.phase = Phase::Stopped;

        surface.set_time_text(&format_seconds(self.elapsed_seconds));
        if self.height_meters > 0.0 {
            surface.set_height_text(&format_height(self.height_meters, self.unit));
        }
        surface.set_control_text(self.phase.control_label());

        info!(
            elapsed_seconds = self.elapsed_seconds,
            height_meters = self.height_meters,
            "Timer stopped"
        );
    }

    fn reset(&mut self, surface: &mut impl Surface) {
        self.cancel_refresh();

        self.start_instant = None;
        self.elapsed_seconds = 0.0;
        self.height_meters = 0.0;
        self.unit = DisplayUnit::Meters;
        self.phase = Phase::Idle;

        surface.set_control_text(self.phase.control_label());
        surface.set_time_text(&format_seconds(self.elapsed_seconds));
        surface.set_height_text(&height_placeholder());

        info!("Timer reset");
    }

    fn cancel_refresh(&mut self) {
        if let Some(handle) = self.pending_refresh.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn read_elapsed(&self) -> f64 {
        match self.start_instant {
            Some(start) => self.clock.now().saturating_sub(start).as_secs_f64(),
            None => 0.0,
        }
    }
}
