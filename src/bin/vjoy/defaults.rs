use bevy::{asset::AssetMetaCheck, prelude::*};

const BACKGROUND_COLOR: Color = Color::srgb(0.1, 0.1, 0.12);

// Sets up the default plugins like windows, assets, etc

pub(crate) fn plugin(app: &mut App) {
    app.insert_resource(ClearColor(BACKGROUND_COLOR))
        .add_plugins(
            DefaultPlugins
                .set(AssetPlugin {
                    meta_check: AssetMetaCheck::Never,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Virtual Joystick".into(),
                        resizable: true,
                        resolution: (800.0, 600.0).into(),
                        canvas: Some("#bevy".to_owned()),
                        desired_maximum_frame_latency: core::num::NonZero::new(1u32),
                        fit_canvas_to_parent: true,
                        ..default()
                    }),
                    ..default()
                }),
        );
}
