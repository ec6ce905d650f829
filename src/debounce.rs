//! Trailing-edge debouncing on top of Bevy's [`Timer`].

use std::time::Duration;

use bevy::prelude::*;

/// Holds the most recent value until the stream has been quiet for a full
/// interval, then hands it out exactly once.
///
/// Every [`push`](Self::push) restarts the countdown, so while values keep
/// arriving faster than the interval nothing is delivered and only the last
/// one survives.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    timer: Timer,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(interval: Duration) -> Self {
        Self {
            timer: Timer::new(interval, TimerMode::Once),
            pending: None,
        }
    }

    /// Replaces any pending value and restarts the countdown.
    pub fn push(&mut self, value: T) {
        self.timer.reset();
        self.pending = Some(value);
    }

    /// Advances the countdown and returns the pending value once it expires.
    pub fn tick(&mut self, delta: Duration) -> Option<T> {
        if self.pending.is_none() {
            return None;
        }
        self.timer.tick(delta);
        if self.timer.finished() {
            self.pending.take()
        } else {
            None
        }
    }

    /// Drops the pending value without delivering it.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
