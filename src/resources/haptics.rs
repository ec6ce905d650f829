use bevy::prelude::*;

/// Strength of a haptic impact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
}

/// A platform haptics backend. Calls are fire-and-forget.
pub trait HapticFeedback: Send + Sync + 'static {
    fn impact(&self, style: ImpactStyle);
}

/// Backend used when the platform has no haptics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHaptics;

impl HapticFeedback for NoHaptics {
    fn impact(&self, _style: ImpactStyle) {}
}

/// The haptics capability, resolved once at startup.
///
/// Insert `Haptics::new(backend)` before adding the plugin to enable
/// feedback; otherwise a no-op backend is installed and a warning is logged.
#[derive(Resource)]
pub struct Haptics {
    backend: Box<dyn HapticFeedback>,
    available: bool,
}

impl Haptics {
    pub fn new(backend: impl HapticFeedback) -> Self {
        Self {
            backend: Box::new(backend),
            available: true,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            backend: Box::new(NoHaptics),
            available: false,
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn impact(&self, style: ImpactStyle) {
        self.backend.impact(style);
    }
}

impl Default for Haptics {
    fn default() -> Self {
        Self::unavailable()
    }
}

/// Installs the no-op backend if the app did not provide one.
pub(crate) fn resolve_haptics(mut commands: Commands, haptics: Option<Res<Haptics>>) {
    if haptics.is_none() {
        warn!("Haptic feedback is not available; joystick haptics disabled");
        commands.insert_resource(Haptics::unavailable());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct CountingHaptics(Arc<AtomicUsize>);

    impl HapticFeedback for CountingHaptics {
        fn impact(&self, style: ImpactStyle) {
            assert_eq!(style, ImpactStyle::Heavy);
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_backend_receives_impacts() {
        let backend = CountingHaptics::default();
        let haptics = Haptics::new(backend.clone());
        assert!(haptics.is_available());
        haptics.impact(ImpactStyle::Heavy);
        haptics.impact(ImpactStyle::Heavy);
        assert_eq!(backend.0.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_missing_backend_resolves_to_noop() {
        let mut app = App::new();
        app.add_systems(Startup, resolve_haptics);
        app.update();

        let haptics = app.world().resource::<Haptics>();
        assert!(!haptics.is_available());
        haptics.impact(ImpactStyle::Heavy);
    }

    #[test]
    fn test_provided_backend_is_kept() {
        let mut app = App::new();
        app.insert_resource(Haptics::new(CountingHaptics::default()));
        app.add_systems(Startup, resolve_haptics);
        app.update();

        assert!(app.world().resource::<Haptics>().is_available());
    }
}
