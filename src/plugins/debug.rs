use bevy::app::App;
use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

use crate::plugins::vjoy::{VjoyMoved, VjoyReleased};
use crate::resources::vjoy_config::VjoyConfig;
use crate::resources::vjoy_output::VjoyOutput;

pub(crate) fn plugin(app: &mut App) {
    app.add_plugins((
        LogDiagnosticsPlugin::default(),
        FrameTimeDiagnosticsPlugin::default(),
    ));

    app.add_plugins(EguiPlugin::default());

    // Edits to the config resource apply to joysticks spawned afterwards.
    app.add_plugins(ResourceInspectorPlugin::<VjoyConfig>::default());
    app.add_plugins(ResourceInspectorPlugin::<VjoyOutput>::default());

    app.add_systems(Update, log_joystick_events);
}

fn log_joystick_events(
    mut moved: EventReader<VjoyMoved>,
    mut released: EventReader<VjoyReleased>,
) {
    for event in moved.read() {
        let data = &event.data;
        debug!(
            "Joystick {} moved: position {} force {:.2} angle {:.1} {}",
            event.entity,
            data.position,
            data.force,
            data.angle.degree,
            data.direction_label()
        );
    }
    for event in released.read() {
        debug!("Joystick {} back at center", event.entity);
    }
}
