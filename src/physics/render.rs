use bevy::prelude::*;

use crate::config::SELECTION_RING_PADDING;
use crate::physics::body::{BodyColor, BodyId};
use crate::physics::step::WorldBounds;
use crate::physics::store::BodyStore;
use crate::physics::systems::Selection;

/// Tags the circle mesh drawn for one body.
#[derive(Component, Debug, Clone, Copy)]
pub struct BodyVisual(pub BodyId);

/// One shared material per selectable color.
#[derive(Resource, Debug, Clone)]
pub struct BodyPalette {
    red: Handle<ColorMaterial>,
    blue: Handle<ColorMaterial>,
    green: Handle<ColorMaterial>,
}

impl BodyPalette {
    pub fn material(&self, color: BodyColor) -> Handle<ColorMaterial> {
        match color {
            BodyColor::Red => self.red.clone(),
            BodyColor::Blue => self.blue.clone(),
            BodyColor::Green => self.green.clone(),
        }
    }
}

/// Spawn the 2D camera and one circle per body in the store.
pub fn spawn_body_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    store: Res<BodyStore>,
    bounds: Res<WorldBounds>,
) {
    commands.spawn(Camera2d);

    let palette = BodyPalette {
        red: materials.add(BodyColor::Red.to_color()),
        blue: materials.add(BodyColor::Blue.to_color()),
        green: materials.add(BodyColor::Green.to_color()),
    };

    for body in store.list() {
        let world = bounds.plane_to_world(body.position);
        commands.spawn((
            Mesh2d(meshes.add(Circle::new(body.radius))),
            MeshMaterial2d(palette.material(body.color)),
            Transform::from_xyz(world.x, world.y, 0.0),
            BodyVisual(body.id),
        ));
    }

    commands.insert_resource(palette);
}

/// Copy positions and colors from the store onto the meshes, once per frame.
pub fn sync_body_visuals(
    store: Res<BodyStore>,
    bounds: Res<WorldBounds>,
    palette: Res<BodyPalette>,
    mut q: Query<(&BodyVisual, &mut Transform, &mut MeshMaterial2d<ColorMaterial>)>,
) {
    for (visual, mut tf, mut material) in &mut q {
        let Some(body) = store.get(visual.0) else {
            continue;
        };
        let world = bounds.plane_to_world(body.position);
        tf.translation.x = world.x;
        tf.translation.y = world.y;

        let wanted = palette.material(body.color);
        if material.0 != wanted {
            material.0 = wanted;
        }
    }
}

/// Ring around the body whose color menu is open.
pub fn draw_selection_gizmo(
    mut gizmos: Gizmos,
    selection: Res<Selection>,
    store: Res<BodyStore>,
    bounds: Res<WorldBounds>,
) {
    let Some(body) = selection.body().and_then(|id| store.get(id)) else {
        return;
    };
    gizmos.circle_2d(
        bounds.plane_to_world(body.position),
        body.radius + SELECTION_RING_PADDING,
        Color::WHITE,
    );
}
