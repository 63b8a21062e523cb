use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use tracing::{debug, trace};

use super::body::Body;
use super::driver::StepDriver;
use super::store::BodyStore;
use crate::config::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Contact normal used when two centers coincide and `d / |d|` is undefined.
pub const COINCIDENT_NORMAL: Vec2 = Vec2::X;

/// Resource: plane extents (width, height). The plane spans `[0, size]` on both axes.
#[derive(Resource, Copy, Clone, Debug, PartialEq)]
pub struct WorldBounds {
    pub size: Vec2,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    /// Map a plane point (top-left origin, +Y down) to Bevy 2D world space
    /// (center origin, +Y up).
    pub fn plane_to_world(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x - 0.5 * self.size.x, 0.5 * self.size.y - p.y)
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32)
    }
}

/// What happened during one call to [`step`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Overlaps detected and resolved. A pair can be counted twice, once from each side.
    pub contacts: usize,
}

/// Advance every body by one unit of time.
///
/// Body `i` is integrated, reflected off the walls, then checked against every
/// other body in store order. Corrections land in the slice immediately, so
/// later checks in the same step see them; bodies after `i` have not been
/// integrated yet when `i` meets them.
pub fn step(bodies: &mut [Body], bounds: WorldBounds) -> StepReport {
    let mut report = StepReport::default();
    let n = bodies.len();

    for i in 0..n {
        integrate(&mut bodies[i]);
        reflect(&mut bodies[i], bounds);

        for j in 0..n {
            if i != j && resolve_pair(bodies, i, j) {
                report.contacts += 1;
            }
        }
    }

    report
}

/// Explicit Euler with a unit time step.
#[inline]
fn integrate(body: &mut Body) {
    body.position += body.velocity;
}

/// Flip the velocity component of every axis whose wall the circle touches.
/// Position is left alone, so a fast body may poke past the wall for a step.
fn reflect(body: &mut Body, bounds: WorldBounds) {
    let r = body.radius;
    let p = body.position;

    if p.x - r <= 0.0 || p.x + r >= bounds.size.x {
        body.velocity.x = -body.velocity.x;
    }
    if p.y - r <= 0.0 || p.y + r >= bounds.size.y {
        body.velocity.y = -body.velocity.y;
    }
}

/// Elastic response between `bodies[i]` and `bodies[j]` with radius as mass.
/// Returns true when the two overlapped.
fn resolve_pair(bodies: &mut [Body], i: usize, j: usize) -> bool {
    let a = bodies[i];
    let b = bodies[j];

    let d = b.position - a.position;
    let distance = d.length();
    let reach = a.radius + b.radius;
    if distance >= reach {
        return false;
    }

    let u = if distance > 0.0 { d / distance } else { COINCIDENT_NORMAL };

    let (r1, r2) = (a.radius, b.radius);
    let v1 = a.velocity.dot(u);
    let v2 = b.velocity.dot(u);
    let v1_new = (v1 * (r1 - r2) + 2.0 * r2 * v2) / reach;
    let v2_new = (v2 * (r2 - r1) + 2.0 * r1 * v1) / reach;

    let half_overlap = (reach - distance) * 0.5;

    // Only the normal component survives.
    let a = &mut bodies[i];
    a.velocity = v1_new * u;
    a.position -= u * half_overlap;

    let b = &mut bodies[j];
    b.velocity = v2_new * u;
    b.position += u * half_overlap;

    trace!(a = %bodies[i].id, b = %bodies[j].id, distance, "resolved overlap");
    true
}

/// Set `velocity = (point - center) * factor` on every body containing `point`.
/// Overlapping bodies under the pointer are all nudged. Returns how many were.
pub fn apply_impulse_near(bodies: &mut [Body], point: Vec2, factor: f32) -> usize {
    let mut nudged = 0;
    for body in bodies.iter_mut() {
        if body.contains(point) {
            body.velocity = (point - body.position) * factor;
            nudged += 1;
        }
    }
    nudged
}

/// Keep `WorldBounds` in sync with the primary window's logical size.
pub fn update_world_bounds(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut bounds: ResMut<WorldBounds>,
) {
    if let Ok(w) = windows.single() {
        let size = w.size();
        if size != bounds.size && size.x > 0.0 && size.y > 0.0 {
            debug!(width = size.x, height = size.y, "world bounds resized");
            bounds.size = size;
        }
    }
}

/// Fixed-timestep system: one [`step`] per tick while the driver runs.
pub fn step_simulation(
    bounds: Res<WorldBounds>,
    mut store: ResMut<BodyStore>,
    mut driver: ResMut<StepDriver>,
) {
    let report = store.step(*bounds);
    driver.record_step();
    if report.contacts > 0 {
        trace!(step = driver.steps(), contacts = report.contacts, "step");
    }
}
