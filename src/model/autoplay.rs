use crate::error::LifeError;
use log::info;
use std::time::Duration;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(250);
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// The interval in whole milliseconds, as browser timers take it
pub fn timer_millis(interval: Duration) -> Result<i32, LifeError> {
    let millis = interval.as_millis();
    i32::try_from(millis).map_err(|_| LifeError::IntervalTooLong { millis })
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PlayState {
    #[default]
    Stopped,
    Running,
}

/// Start/stop bookkeeping for continuous play.
///
/// The controller does not tick by itself. Whatever drives the ticks hands back
/// a handle `H` when scheduled, the controller keeps exactly that handle while
/// running, and gives the same handle back to be cancelled on stop. Starting
/// twice never schedules a second ticker.
#[derive(Debug)]
pub struct AutoPlay<H> {
    interval: Duration,
    handle: Option<H>,
}

impl<H> AutoPlay<H> {
    /// Intervals shorter than [`MIN_TICK_INTERVAL`] are raised to it
    pub fn new(interval: Duration) -> Self {
        AutoPlay {
            interval: interval.max(MIN_TICK_INTERVAL),
            handle: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> PlayState {
        if self.handle.is_some() {
            PlayState::Running
        } else {
            PlayState::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == PlayState::Running
    }

    /// Schedules the ticker unless already running.
    /// Returns whether a ticker was scheduled by this call.
    pub fn start<E>(
        &mut self,
        schedule: impl FnOnce(Duration) -> Result<H, E>,
    ) -> Result<bool, E> {
        if self.handle.is_some() {
            return Ok(false);
        }
        self.handle = Some(schedule(self.interval)?);
        info!("Autoplay started, one step every {:?}", self.interval);
        Ok(true)
    }

    /// Like [`AutoPlay::start`], then runs `first_tick` once if this call
    /// scheduled the ticker. Nothing runs when scheduling fails.
    pub fn start_and_tick<E>(
        &mut self,
        schedule: impl FnOnce(Duration) -> Result<H, E>,
        first_tick: impl FnOnce(),
    ) -> Result<bool, E> {
        let started = self.start(schedule)?;
        if started {
            first_tick();
        }
        Ok(started)
    }

    /// Cancels the ticker scheduled by [`AutoPlay::start`], if running.
    /// Returns whether a ticker was cancelled by this call.
    pub fn stop(&mut self, cancel: impl FnOnce(H)) -> bool {
        match self.handle.take() {
            Some(handle) => {
                cancel(handle);
                info!("Autoplay stopped");
                true
            }
            None => false,
        }
    }
}

impl<H> Default for AutoPlay<H> {
    fn default() -> Self {
        AutoPlay::new(DEFAULT_TICK_INTERVAL)
    }
}
