use bevy::prelude::*;
use tracing::{info, warn};

pub mod body;
pub mod driver;
pub mod render;
pub mod step;
pub mod store;
pub mod systems;

pub use body::{Body, BodyColor, BodyId};
pub use driver::StepDriver;
pub use step::{StepReport, WorldBounds};
pub use store::BodyStore;
pub use systems::Selection;

use driver::{driver_running, toggle_driver_on_space};
use step::{step_simulation, update_world_bounds};
use systems::{CursorPlane, choose_color_from_keys, escape_or_exit, pick_on_click, track_pointer};

/// Plug this into your App with `.add_plugins(SimulationPlugin::new(store))`.
pub struct SimulationPlugin {
    store: BodyStore,
}

impl SimulationPlugin {
    pub fn new(store: BodyStore) -> Self {
        Self { store }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        if self.store.is_empty() {
            warn!("simulation plugin: starting with no bodies");
        } else {
            info!(bodies = self.store.len(), "simulation plugin: starting");
        }
        app
            .insert_resource(self.store.clone())
            .init_resource::<WorldBounds>()
            .init_resource::<StepDriver>()
            .init_resource::<CursorPlane>()
            .init_resource::<Selection>()
            .add_systems(Startup, render::spawn_body_visuals)
            // Pointer and keyboard work happens off the step cadence
            .add_systems(
                Update,
                (
                    update_world_bounds,
                    track_pointer,
                    pick_on_click.after(track_pointer),
                    choose_color_from_keys,
                    escape_or_exit,
                    toggle_driver_on_space,
                ),
            )
            // One step per fixed tick (rate set in main via Time::<Fixed>)
            .add_systems(FixedUpdate, step_simulation.run_if(driver_running))
            // Draw after this frame's interaction has landed
            .add_systems(
                Update,
                (render::sync_body_visuals, render::draw_selection_gizmo)
                    .after(track_pointer)
                    .after(choose_color_from_keys),
            );
    }
}
