use std::time::Duration;

use bevy::prelude::*;

use crate::error::VjoyError;
use crate::kinematics::StickGeometry;

/// Configuration for a Virtual Joystick.
///
/// As a resource it is the template used by [`spawn_joystick`]; every spawned
/// joystick keeps its own copy as a component, so changing the resource later
/// only affects joysticks spawned afterwards.
///
/// [`spawn_joystick`]: crate::plugins::vjoy::spawn_joystick
#[derive(Resource, Component, Reflect, Debug, Clone)]
#[reflect(Resource, Component)]
pub struct VjoyConfig {
    /// Diameter of the boundary circle in logical pixels.
    pub size: f32,

    /// Base tint. Boundary, handle and border colors are derived from it
    /// by alpha blending.
    pub color: Color,

    /// Quiet period a move report must survive before it is delivered.
    pub interval: Duration,

    /// Fire a heavy haptic impact when a drag begins.
    pub haptics: bool,

    /// Opacity of the boundary fill.
    pub alpha_boundary: f32,

    /// Opacity of the draggable handle.
    pub alpha_handle: f32,

    /// Opacity of the border while the handle is away from the center.
    pub alpha_border_active: f32,
}

impl Default for VjoyConfig {
    fn default() -> Self {
        Self {
            size: 150.0,
            color: Color::srgb_u8(0x06, 0xb6, 0xd4),
            interval: Duration::from_millis(100),
            haptics: false,
            alpha_boundary: 0.2,
            alpha_handle: 0.6,
            alpha_border_active: 0.2,
        }
    }
}

impl VjoyConfig {
    /// Sets the base color from a CSS-style hex string (`#rgb`, `#rrggbb`, ...).
    pub fn with_hex_color(mut self, hex: &str) -> Result<Self, VjoyError> {
        let color = Srgba::hex(hex).map_err(|source| VjoyError::InvalidColor {
            value: hex.to_owned(),
            source,
        })?;
        self.color = color.into();
        Ok(self)
    }

    pub fn geometry(&self) -> StickGeometry {
        StickGeometry::new(self.size)
    }

    pub fn palette(&self) -> VjoyPalette {
        VjoyPalette {
            boundary_fill: self.color.with_alpha(self.alpha_boundary),
            handle_fill: self.color.with_alpha(self.alpha_handle),
            border_active: self.color.with_alpha(self.alpha_border_active),
            border_idle: self.color,
        }
    }
}

/// Colors derived once per joystick from [`VjoyConfig::color`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VjoyPalette {
    pub boundary_fill: Color,
    pub handle_fill: Color,
    pub border_active: Color,
    pub border_idle: Color,
}

impl VjoyPalette {
    pub fn border(&self, displaced: bool) -> Color {
        if displaced {
            self.border_active
        } else {
            self.border_idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VjoyConfig::default();
        assert_eq!(config.size, 150.0);
        assert_eq!(config.interval, Duration::from_millis(100));
        assert!(!config.haptics);
        assert_eq!(config.color, Color::Srgba(Srgba::hex("06b6d4").unwrap()));
    }

    #[test]
    fn test_hex_color() {
        let config = VjoyConfig::default().with_hex_color("#ff0000").unwrap();
        assert_eq!(config.color, Color::srgb(1.0, 0.0, 0.0));

        let err = VjoyConfig::default().with_hex_color("not-a-color").unwrap_err();
        assert!(err.to_string().contains("not-a-color"));
    }

    #[test]
    fn test_palette_blends_alpha() {
        let palette = VjoyConfig::default().palette();
        assert_eq!(palette.boundary_fill.alpha(), 0.2);
        assert_eq!(palette.handle_fill.alpha(), 0.6);
        assert_eq!(palette.border(true).alpha(), 0.2);
        assert_eq!(palette.border(false).alpha(), 1.0);
    }
}
