//! On-screen virtual joystick for Bevy.
//!
//! Add [`VjoyPlugin`], spawn a joystick with
//! [`spawn_joystick`](plugins::vjoy::spawn_joystick) and read
//! [`VjoyMoved`](plugins::vjoy::VjoyMoved) /
//! [`VjoyReleased`](plugins::vjoy::VjoyReleased) events or the
//! [`VjoyOutput`](resources::vjoy_output::VjoyOutput) resource.

use bevy::prelude::*;

pub mod components;
pub mod debounce;
pub mod error;
pub mod kinematics;
pub mod plugins;
pub mod resources;
pub mod tween;

pub mod prelude {
    pub use super::VjoyPlugin;
    pub use super::components::{vjoy_base::*, vjoy_knob::*};
    pub use super::error::VjoyError;
    pub use super::kinematics::{JoystickData, StickAngle, StickDirection, StickGeometry};
    pub use super::plugins::vjoy::{spawn_joystick, spawn_joystick_with, VjoyMoved, VjoyReleased};
    pub use super::resources::{haptics::*, vjoy_config::*, vjoy_output::*};
}

pub struct VjoyPlugin;

impl Plugin for VjoyPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(plugins::vjoy::plugin);
        #[cfg(feature = "dev")]
        app.add_plugins(plugins::debug::plugin);
    }
}
