//! # Joystick Kinematics
//!
//! Pure geometry shared by the input and render systems:
//! 1. Clamping a drag translation to the allowed disk.
//! 2. Mapping the clamped offset to force, angle and an 8-way direction.
//! 3. Rescaling the offset into the reported `[-size, size]` range.
//!
//! Screen coordinates are used throughout (`+y` points down), while the
//! reported angle and position flip `y` so "up" is positive.

use std::f32::consts::PI;
use std::fmt;

use bevy::prelude::*;

/// Derived radii of a joystick of a given diameter.
#[derive(Clone, Copy, Debug, PartialEq, Reflect)]
pub struct StickGeometry {
    /// Diameter of the boundary circle.
    pub size: f32,
    /// Radius of the boundary circle (`size / 2`).
    pub boundary_radius: f32,
    /// Radius of the draggable handle (`size / 6`).
    pub handle_radius: f32,
    /// How far the handle center may travel from the origin.
    pub max_distance: f32,
}

impl StickGeometry {
    pub fn new(size: f32) -> Self {
        let boundary_radius = size / 2.0;
        let handle_radius = size / 6.0;
        Self {
            size,
            boundary_radius,
            handle_radius,
            max_distance: boundary_radius + handle_radius / 2.0,
        }
    }

    /// Rescales a clamped offset into the reported range, flipping `y`.
    pub fn report_position(&self, clamped: Vec2) -> Vec2 {
        let x = clamped.x / self.boundary_radius * self.size;
        let y = -clamped.y / self.boundary_radius * self.size;
        Vec2::new(
            x.clamp(-self.size, self.size),
            y.clamp(-self.size, self.size),
        )
    }
}

/// Keeps `raw` inside a disk of radius `max_distance`.
///
/// Inside (or on) the disk the input passes through untouched; outside it is
/// projected onto the circle along `atan2(y, x)`.
pub fn clamp_to_disk(raw: Vec2, max_distance: f32) -> Vec2 {
    let distance = raw.length();
    if distance <= max_distance {
        return raw;
    }
    let angle = raw.y.atan2(raw.x);
    Vec2::new(max_distance * angle.cos(), max_distance * angle.sin())
}

/// Force in `[0, 1]`, computed from the raw (pre-clamp) distance.
pub fn stick_force(distance: f32, max_distance: f32) -> f32 {
    (distance / max_distance).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Reflect)]
pub struct StickAngle {
    pub radian: f32,
    /// Always in `[0, 360)`.
    pub degree: f32,
}

impl StickAngle {
    /// Angle of a screen-space offset with "up" mapped to 90°.
    pub fn from_offset(offset: Vec2) -> Self {
        let radian = (-offset.y).atan2(offset.x);
        let mut degree = (radian * (180.0 / PI) + 360.0) % 360.0;
        // (-ε + 360) can round up to exactly 360 in f32.
        if degree >= 360.0 {
            degree -= 360.0;
        }
        Self { radian, degree }
    }
}

/// One of the eight compass buckets, each 45° wide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub enum StickDirection {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl StickDirection {
    pub const ALL: [StickDirection; 8] = [
        StickDirection::Right,
        StickDirection::UpRight,
        StickDirection::Up,
        StickDirection::UpLeft,
        StickDirection::Left,
        StickDirection::DownLeft,
        StickDirection::Down,
        StickDirection::DownRight,
    ];

    /// Buckets an angle in degrees. The `Right` window wraps across 0°/360°.
    /// Returns `None` for angles outside `[0, 360]` (e.g. NaN).
    pub fn from_degrees(degree: f32) -> Option<Self> {
        let direction = match degree {
            d if (337.5..=360.0).contains(&d) || (0.0..22.5).contains(&d) => StickDirection::Right,
            d if (22.5..67.5).contains(&d) => StickDirection::UpRight,
            d if (67.5..112.5).contains(&d) => StickDirection::Up,
            d if (112.5..157.5).contains(&d) => StickDirection::UpLeft,
            d if (157.5..202.5).contains(&d) => StickDirection::Left,
            d if (202.5..247.5).contains(&d) => StickDirection::DownLeft,
            d if (247.5..292.5).contains(&d) => StickDirection::Down,
            d if (292.5..337.5).contains(&d) => StickDirection::DownRight,
            _ => return None,
        };
        Some(direction)
    }

    pub fn label(self) -> &'static str {
        match self {
            StickDirection::Right => "right",
            StickDirection::UpRight => "up-right",
            StickDirection::Up => "up",
            StickDirection::UpLeft => "up-left",
            StickDirection::Left => "left",
            StickDirection::DownLeft => "down-left",
            StickDirection::Down => "down",
            StickDirection::DownRight => "down-right",
        }
    }
}

impl fmt::Display for StickDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single joystick report, as delivered to consumers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Reflect)]
pub struct JoystickData {
    /// Offset rescaled into `[-size, size]` on both axes, `+y` up.
    pub position: Vec2,
    /// `0.0` at the center, `1.0` at or beyond the travel limit.
    pub force: f32,
    pub angle: StickAngle,
    pub direction: Option<StickDirection>,
}

impl JoystickData {
    /// Runs a raw drag translation through the tracker and the mapper.
    ///
    /// Returns the clamped offset used for rendering alongside the report.
    pub fn from_drag(raw: Vec2, geometry: &StickGeometry) -> (Vec2, Self) {
        let clamped = clamp_to_disk(raw, geometry.max_distance);
        let angle = StickAngle::from_offset(clamped);
        let data = Self {
            position: geometry.report_position(clamped),
            force: stick_force(raw.length(), geometry.max_distance),
            angle,
            direction: StickDirection::from_degrees(angle.degree),
        };
        (clamped, data)
    }

    /// The compass label, or an empty string when no bucket matched.
    pub fn direction_label(&self) -> &'static str {
        self.direction.map_or("", StickDirection::label)
    }
}
