use bevy::prelude::*;

use crate::physics::body::{Body, BodyColor, BodyId};

/// Simulation timing: one step per fixed tick, paced like a display refresh
pub const STEP_HZ: f64 = 60.0;

/// Canvas size in plane units (logical window pixels)
pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 600;

/// Pointer nudge: velocity = (cursor - center) * IMPULSE_FACTOR
pub const IMPULSE_FACTOR: f32 = 0.1;

/// Gap between a selected body's edge and its highlight ring
pub const SELECTION_RING_PADDING: f32 = 4.0;

pub const BACKGROUND: Color = Color::srgb(0.06, 0.06, 0.08);

/// The reference scenario: three bodies of increasing size.
pub fn seed_bodies() -> Vec<Body> {
    vec![
        Body::new(BodyId(1), Vec2::new(100.0, 100.0), 20.0, Vec2::new(2.0, 2.0), BodyColor::Red),
        Body::new(BodyId(2), Vec2::new(200.0, 200.0), 30.0, Vec2::new(3.0, -3.0), BodyColor::Blue),
        Body::new(BodyId(3), Vec2::new(300.0, 300.0), 40.0, Vec2::new(-2.0, -2.0), BodyColor::Green),
    ]
}
