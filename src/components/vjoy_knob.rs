use bevy::prelude::*;

/// Marks the draggable handle inside a joystick boundary.
#[derive(Component, Default, Reflect)]
#[reflect(Component)]
pub struct VjoyKnob;
