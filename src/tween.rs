//! Time-based return of the handle to the origin.

use std::time::Duration;

use bevy::math::curve::{Curve, EaseFunction};
use bevy::prelude::*;

/// How long the handle takes to spring back after release.
pub const RETURN_DURATION: Duration = Duration::from_millis(300);

/// Eases an offset from its release value to zero.
#[derive(Debug, Clone)]
pub struct ReturnTween {
    from: Vec2,
    timer: Timer,
}

impl ReturnTween {
    pub fn new(from: Vec2, duration: Duration) -> Self {
        Self {
            from,
            timer: Timer::new(duration, TimerMode::Once),
        }
    }

    /// Advances the tween and returns the offset at the new time.
    pub fn tick(&mut self, delta: Duration) -> Vec2 {
        self.timer.tick(delta);
        self.current()
    }

    pub fn current(&self) -> Vec2 {
        if self.timer.finished() {
            return Vec2::ZERO;
        }
        let t = EaseFunction::QuadraticInOut.sample_clamped(self.timer.fraction());
        self.from * (1.0 - t)
    }

    pub fn finished(&self) -> bool {
        self.timer.finished()
    }
}
