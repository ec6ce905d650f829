//! # Virtual Joystick Plugin
//!
//! Provides an on-screen joystick for mouse and touch input.
//!
//! This plugin manages:
//! 1. Spawning the UI elements (boundary + handle).
//! 2. Turning picking drag events into clamped handle offsets and reports.
//! 3. Debounced delivery of [`VjoyMoved`] and the spring-back before [`VjoyReleased`].
//! 4. Rendering the handle offset and the boundary border state.
//!
//! ## Requirements
//! - Requires a `Camera2d` or `Camera3d` to be present in the world for UI rendering.
//! - Input comes from `bevy_picking`, which `DefaultPlugins` enables for UI nodes.

use bevy::picking::events::{Drag, DragEnd, Pointer, Pressed, Released};
use bevy::picking::pointer::PointerButton;
use bevy::picking::Pickable;
use bevy::prelude::*;
use bevy::time::TimeSystem;

use crate::components::vjoy_base::{VjoyBase, VjoyReport};
use crate::components::vjoy_knob::VjoyKnob;
use crate::kinematics::JoystickData;
use crate::resources::haptics::{resolve_haptics, Haptics, ImpactStyle};
use crate::resources::vjoy_config::VjoyConfig;
use crate::resources::vjoy_output::VjoyOutput;

/// Sent when a debounced move report is delivered.
#[derive(Event, Debug, Clone, Copy)]
pub struct VjoyMoved {
    /// The joystick boundary entity.
    pub entity: Entity,
    pub data: JoystickData,
}

/// Sent once the handle has finished springing back after a drag.
#[derive(Event, Debug, Clone, Copy)]
pub struct VjoyReleased {
    pub entity: Entity,
}

pub(crate) fn plugin(app: &mut App) {
    app
        .init_resource::<VjoyConfig>()
        .init_resource::<VjoyOutput>()
        .register_type::<VjoyConfig>()
        .register_type::<VjoyOutput>()
        .register_type::<VjoyKnob>()
        .add_event::<VjoyMoved>()
        .add_event::<VjoyReleased>()
        .add_systems(Startup, resolve_haptics)
        .add_systems(First, joystick_tick_system.after(TimeSystem))
        .add_systems(Update, joystick_render_system.run_if(any_with_component::<VjoyBase>));
}

/// Spawns a joystick configured by the [VjoyConfig] resource.
pub fn spawn_joystick(mut commands: Commands, config: Res<VjoyConfig>) {
    spawn_joystick_with(&mut commands, config.clone());
}

/// Spawns the visual hierarchy of a joystick and returns the boundary entity.
/// Place it by inserting positioning fields on its `Node` or by parenting it.
pub fn spawn_joystick_with(commands: &mut Commands, config: VjoyConfig) -> Entity {
    let geometry = config.geometry();
    let palette = config.palette();
    let handle_size = geometry.handle_radius * 2.0;

    commands
        .spawn((
            Name::new("Joystick Boundary"),
            VjoyBase::new(&config),
            Node {
                width: Val::Px(geometry.size),
                height: Val::Px(geometry.size),
                border: UiRect::all(Val::Px(2.0)),
                display: Display::Flex,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
            BackgroundColor(palette.boundary_fill),
            BorderColor(palette.border_idle),
            BorderRadius::all(Val::Percent(50.0)),
            config,
        ))
        .with_children(|parent| {
            parent.spawn((
                Name::new("Joystick Handle"),
                VjoyKnob,
                Node {
                    width: Val::Px(handle_size),
                    height: Val::Px(handle_size),
                    position_type: PositionType::Relative,
                    ..default()
                },
                BackgroundColor(palette.handle_fill),
                BorderRadius::all(Val::Percent(50.0)),
                Pickable::IGNORE,
            ));
        })
        .observe(on_press)
        .observe(on_drag)
        .observe(on_drag_end)
        .observe(on_release)
        .id()
}

fn on_press(
    mut trigger: Trigger<Pointer<Pressed>>,
    haptics: Res<Haptics>,
    mut q_base: Query<(&mut VjoyBase, &VjoyConfig)>,
) {
    if trigger.button != PointerButton::Primary {
        return;
    }
    trigger.propagate(false);
    let entity = trigger.target();
    let Ok((mut base, config)) = q_base.get_mut(entity) else { return; };

    base.begin();
    if config.haptics {
        haptics.impact(ImpactStyle::Heavy);
    }
    debug!("Joystick {entity} grabbed");
}

fn on_drag(mut trigger: Trigger<Pointer<Drag>>, mut q_base: Query<&mut VjoyBase>) {
    if trigger.button != PointerButton::Primary {
        return;
    }
    trigger.propagate(false);
    let translation = trigger.distance;
    let Ok(mut base) = q_base.get_mut(trigger.target()) else { return; };

    let data = base.drag(translation);
    trace!(
        "Joystick drag {translation} -> force {:.2} {}",
        data.force,
        data.direction_label()
    );
}

fn on_drag_end(mut trigger: Trigger<Pointer<DragEnd>>, mut q_base: Query<&mut VjoyBase>) {
    if trigger.button != PointerButton::Primary {
        return;
    }
    trigger.propagate(false);
    let entity = trigger.target();
    let Ok(mut base) = q_base.get_mut(entity) else { return; };

    if base.release() {
        debug!("Joystick {entity} released");
    }
}

/// A press that never turned into a drag still has to spring back.
fn on_release(mut trigger: Trigger<Pointer<Released>>, mut q_base: Query<&mut VjoyBase>) {
    if trigger.button != PointerButton::Primary {
        return;
    }
    trigger.propagate(false);
    let entity = trigger.target();
    let Ok(mut base) = q_base.get_mut(entity) else { return; };

    if base.release() {
        debug!("Joystick {entity} released");
    }
}

/// Advances report timers and return animations, then delivers what is due.
fn joystick_tick_system(
    time: Res<Time>,
    mut q_base: Query<(Entity, &mut VjoyBase)>,
    mut moved: EventWriter<VjoyMoved>,
    mut released: EventWriter<VjoyReleased>,
    mut vjoy_output: ResMut<VjoyOutput>,
) {
    let delta = time.delta();

    for (entity, mut base) in &mut q_base {
        let size = base.geometry().size;
        for report in base.advance(delta) {
            match report {
                VjoyReport::Moved(data) => {
                    vjoy_output.apply(data, size);
                    moved.write(VjoyMoved { entity, data });
                }
                VjoyReport::Released => {
                    vjoy_output.clear();
                    released.write(VjoyReleased { entity });
                }
            }
        }
    }
}

/// Moves the handle to the current offset and swaps the border color while
/// the handle is away from the center.
fn joystick_render_system(
    mut q_base: Query<(&VjoyBase, &VjoyConfig, &Children, &mut BorderColor)>,
    mut q_knob: Query<&mut Node, With<VjoyKnob>>,
) {
    for (base, config, children, mut border) in &mut q_base {
        border.0 = config.palette().border(base.is_displaced());

        let offset = base.position();
        for &child in children {
            if let Ok(mut knob_node) = q_knob.get_mut(child) {
                knob_node.left = Val::Px(offset.x);
                knob_node.top = Val::Px(offset.y);
            }
        }
    }
}
