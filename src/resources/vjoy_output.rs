use bevy::prelude::*;

use crate::kinematics::JoystickData;

/// The last report delivered by any virtual joystick.
/// Read this from your movement systems to control entities, or listen for
/// [`VjoyMoved`](crate::plugins::vjoy::VjoyMoved) events instead.
#[derive(Resource, Default, Reflect, Debug)]
#[reflect(Resource)]
pub struct VjoyOutput {
    /// Reported position divided by the joystick size, each axis in -1.0..=1.0.
    /// (0,0) represents the center/idle state.
    pub dir: Vec2,
    pub last: Option<JoystickData>,
}

impl VjoyOutput {
    pub fn apply(&mut self, data: JoystickData, size: f32) {
        self.dir = data.position / size;
        self.last = Some(data);
    }

    pub fn clear(&mut self) {
        self.dir = Vec2::ZERO;
        self.last = None;
    }
}
