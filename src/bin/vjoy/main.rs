use bevy::prelude::*;

use vjoy::prelude::*;

mod defaults;

fn main() -> AppExit {
    App::new()
        .add_plugins((defaults::plugin, VjoyPlugin))
        .add_systems(Startup, (load_config, setup).chain())
        .add_systems(Update, report_joystick)
        .run()
}

/// Reads an optional `VJOY_COLOR` hex override from the environment.
fn load_config(mut config: ResMut<VjoyConfig>) {
    let Ok(hex) = std::env::var("VJOY_COLOR") else { return; };
    match config.clone().with_hex_color(&hex) {
        Ok(updated) => *config = updated,
        Err(err) => error!("{err}, keeping default color"),
    }
}

fn setup(mut commands: Commands, config: Res<VjoyConfig>) {
    commands.spawn(Camera2d);

    let joystick = spawn_joystick_with(&mut commands, config.clone());
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            align_items: AlignItems::End,
            justify_content: JustifyContent::Start,
            padding: UiRect::all(Val::VMin(8.0)),
            ..default()
        })
        .add_child(joystick);
}

fn report_joystick(mut moved: EventReader<VjoyMoved>, mut released: EventReader<VjoyReleased>) {
    for event in moved.read() {
        info!(
            "x: {:.1} y: {:.1} force: {:.2} angle: {:.1} direction: {}",
            event.data.position.x,
            event.data.position.y,
            event.data.force,
            event.data.angle.degree,
            event.data.direction_label()
        );
    }
    for _ in released.read() {
        info!("released");
    }
}
