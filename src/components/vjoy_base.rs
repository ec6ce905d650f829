use std::time::Duration;

use bevy::prelude::*;

use crate::debounce::Debouncer;
use crate::kinematics::{JoystickData, StickGeometry};
use crate::resources::vjoy_config::VjoyConfig;
use crate::tween::{ReturnTween, RETURN_DURATION};

/// Where the handle is in its drag lifecycle.
#[derive(Debug, Clone, Default)]
pub enum HandlePhase {
    #[default]
    Idle,
    Dragging,
    Returning(ReturnTween),
}

/// Something the joystick has to tell its consumer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VjoyReport {
    Moved(JoystickData),
    Released,
}

/// Per-instance joystick state, attached to the boundary node.
///
/// Gesture callbacks drive [`begin`](Self::begin), [`drag`](Self::drag) and
/// [`release`](Self::release); [`advance`](Self::advance) is called once per
/// frame with the elapsed time and yields the reports that became due.
#[derive(Component, Debug)]
pub struct VjoyBase {
    geometry: StickGeometry,
    phase: HandlePhase,
    position: Vec2,
    reporter: Debouncer<JoystickData>,
    /// A return cut short by a new press still owes its release.
    owes_release: bool,
}

impl VjoyBase {
    pub fn new(config: &VjoyConfig) -> Self {
        Self {
            geometry: config.geometry(),
            phase: HandlePhase::Idle,
            position: Vec2::ZERO,
            reporter: Debouncer::new(config.interval),
            owes_release: false,
        }
    }

    pub fn geometry(&self) -> &StickGeometry {
        &self.geometry
    }

    pub fn phase(&self) -> &HandlePhase {
        &self.phase
    }

    /// Clamped handle offset in screen space.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, HandlePhase::Dragging)
    }

    pub fn is_displaced(&self) -> bool {
        self.position != Vec2::ZERO
    }

    /// Starts a drag. A running return animation is abandoned where it is,
    /// and its release is reported on the next [`advance`](Self::advance).
    pub fn begin(&mut self) {
        if let HandlePhase::Returning(tween) = &self.phase {
            self.position = tween.current();
            self.owes_release = true;
            debug!("Joystick grabbed while returning at {:?}", self.position);
        }
        self.phase = HandlePhase::Dragging;
    }

    /// Feeds the cumulative drag translation since the gesture started.
    pub fn drag(&mut self, translation: Vec2) -> JoystickData {
        if !self.is_dragging() {
            self.begin();
        }
        let (clamped, data) = JoystickData::from_drag(translation, &self.geometry);
        self.position = clamped;
        self.reporter.push(data);
        data
    }

    /// Ends the drag and starts springing back. Returns `false` if no drag
    /// was in progress.
    pub fn release(&mut self) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.phase = HandlePhase::Returning(ReturnTween::new(self.position, RETURN_DURATION));
        true
    }

    /// Advances the report timer and the return animation.
    ///
    /// The report timer runs independently of the animation, so with an
    /// interval longer than the return a move can arrive after the release.
    pub fn advance(&mut self, delta: Duration) -> Vec<VjoyReport> {
        let mut reports = Vec::new();
        if std::mem::take(&mut self.owes_release) {
            reports.push(VjoyReport::Released);
        }
        if let Some(data) = self.reporter.tick(delta) {
            reports.push(VjoyReport::Moved(data));
        }

        if let HandlePhase::Returning(tween) = &mut self.phase {
            self.position = tween.tick(delta);
            if tween.finished() {
                self.position = Vec2::ZERO;
                self.phase = HandlePhase::Idle;
                reports.push(VjoyReport::Released);
            }
        }
        reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::StickDirection;

    const FRAME: Duration = Duration::from_millis(10);

    fn run(base: &mut VjoyBase, frames: u32) -> Vec<VjoyReport> {
        (0..frames).flat_map(|_| base.advance(FRAME)).collect()
    }

    #[test]
    fn test_drag_release_returns_to_idle() {
        let mut base = VjoyBase::new(&VjoyConfig::default());
        let max = base.geometry().max_distance;

        base.begin();
        let immediate = base.drag(Vec2::new(max, 0.0));
        assert_eq!(immediate.force, 1.0);
        assert_eq!(base.position(), Vec2::new(max, 0.0));

        let reports = run(&mut base, 10);
        let [VjoyReport::Moved(data)] = reports.as_slice() else {
            panic!("expected one move report, got {reports:?}");
        };
        assert_eq!(data.force, 1.0);
        assert_eq!(data.direction, Some(StickDirection::Right));

        assert!(base.release());
        assert!(run(&mut base, 29).is_empty());
        assert!(base.is_displaced());

        assert_eq!(run(&mut base, 1), vec![VjoyReport::Released]);
        assert_eq!(base.position(), Vec2::ZERO);
        assert!(matches!(base.phase(), HandlePhase::Idle));
    }

    #[test]
    fn test_burst_of_drags_reports_last() {
        let mut base = VjoyBase::new(&VjoyConfig::default());
        base.begin();
        for i in 1..=5 {
            base.drag(Vec2::new(i as f32 * 10.0, 0.0));
            assert!(base.advance(FRAME).is_empty());
        }
        let reports = run(&mut base, 9);
        assert_eq!(reports.len(), 1);
        let VjoyReport::Moved(data) = reports[0] else {
            panic!("expected a move report");
        };
        // 50 / 75 * 150
        assert!((data.position.x - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_long_interval_reports_after_release() {
        let config = VjoyConfig {
            interval: Duration::from_millis(500),
            ..default()
        };
        let mut base = VjoyBase::new(&config);
        base.begin();
        base.drag(Vec2::new(0.0, 20.0));
        base.release();

        // The return finishes at 300ms, the report still waits its full 500ms.
        assert!(run(&mut base, 29).is_empty());
        assert_eq!(run(&mut base, 1), vec![VjoyReport::Released]);
        assert!(run(&mut base, 19).is_empty());

        let reports = run(&mut base, 1);
        let [VjoyReport::Moved(data)] = reports.as_slice() else {
            panic!("expected one move report, got {reports:?}");
        };
        assert_eq!(data.direction, Some(StickDirection::Down));
    }

    #[test]
    fn test_regrab_still_reports_each_release() {
        let mut base = VjoyBase::new(&VjoyConfig::default());
        base.begin();
        base.drag(Vec2::new(40.0, 0.0));
        base.release();
        run(&mut base, 10);

        base.begin();
        base.drag(Vec2::new(-40.0, 0.0));
        base.release();
        let reports = run(&mut base, 40);

        let releases = reports.iter().filter(|r| **r == VjoyReport::Released).count();
        assert_eq!(releases, 2);
        assert_eq!(reports[0], VjoyReport::Released);
        assert_eq!(base.position(), Vec2::ZERO);
    }

    #[test]
    fn test_grab_during_return_interrupts() {
        let mut base = VjoyBase::new(&VjoyConfig::default());
        base.begin();
        base.drag(Vec2::new(0.0, -60.0));
        run(&mut base, 10);
        base.release();
        run(&mut base, 15);

        let midway = base.position();
        assert!(midway.y < 0.0 && midway.y > -60.0);

        base.begin();
        assert!(base.is_dragging());
        assert_eq!(base.position(), midway);

        // The interrupted return reports its release, then the handle stays put.
        assert_eq!(run(&mut base, 50), vec![VjoyReport::Released]);
        assert_eq!(base.position(), midway);
        assert!(base.is_dragging());
    }

    #[test]
    fn test_release_without_drag_is_ignored() {
        let mut base = VjoyBase::new(&VjoyConfig::default());
        assert!(!base.release());
        assert!(run(&mut base, 40).is_empty());
    }
}
