use anyhow::Result;
use bevy::prelude::*;
use bevy::window::WindowResolution;

use ballpit::config::{BACKGROUND, CANVAS_HEIGHT, CANVAS_WIDTH, STEP_HZ, seed_bodies};
use ballpit::physics::{BodyStore, SimulationPlugin};

fn main() -> Result<()> {
    let store = BodyStore::new(seed_bodies())?;

    App::new()
        .insert_resource(ClearColor(BACKGROUND))
        // Configure the fixed timestep clock (used in FixedUpdate)
        .insert_resource(Time::<Fixed>::from_hz(STEP_HZ))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "ballpit".into(),
                resolution: WindowResolution::new(CANVAS_WIDTH, CANVAS_HEIGHT),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(SimulationPlugin::new(store))
        .run();

    Ok(())
}
