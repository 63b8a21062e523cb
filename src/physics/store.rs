use std::collections::HashSet;

use anyhow::{Result, ensure};
use bevy::prelude::*;
use rand::SeedableRng;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;

use super::body::{Body, BodyColor, BodyId};
use super::step::{self, StepReport, WorldBounds};

/// Resource: the authoritative list of bodies, in insertion order.
///
/// Order matters: the step engine walks pairs in this order, and hit tests
/// return the first match.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct BodyStore {
    bodies: Vec<Body>,
}

impl BodyStore {
    /// Build the store from a seed set. Ids must be unique, radii positive and
    /// every coordinate finite.
    pub fn new(seeds: Vec<Body>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(seeds.len());
        for b in &seeds {
            ensure!(seen.insert(b.id), "duplicate body id {}", b.id);
            ensure!(
                b.radius.is_finite() && b.radius > 0.0,
                "body {} has non-positive radius {}",
                b.id,
                b.radius
            );
            ensure!(
                b.position.is_finite() && b.velocity.is_finite(),
                "body {} has a non-finite position or velocity",
                b.id
            );
        }
        Ok(Self { bodies: seeds })
    }

    /// Scatter `count` bodies uniformly inside `bounds` with small random
    /// velocities. Deterministic for a given `seed`. Ids run from 1.
    pub fn scatter(count: usize, bounds: WorldBounds, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let max_radius = (0.1 * bounds.size.min_element()).clamp(4.0, 40.0);
        let radius = Uniform::new_inclusive(4.0_f32, max_radius)?;
        let speed = Uniform::new_inclusive(-3.0_f32, 3.0)?;
        let color = Uniform::new(0, BodyColor::ALL.len())?;

        let mut bodies = Vec::with_capacity(count);
        for i in 0..count {
            let r = radius.sample(&mut rng);
            let x = Uniform::new_inclusive(r, (bounds.size.x - r).max(r))?.sample(&mut rng);
            let y = Uniform::new_inclusive(r, (bounds.size.y - r).max(r))?.sample(&mut rng);
            bodies.push(Body::new(
                BodyId(i as u32 + 1),
                Vec2::new(x, y),
                r,
                Vec2::new(speed.sample(&mut rng), speed.sample(&mut rng)),
                BodyColor::ALL[color.sample(&mut rng)],
            ));
        }
        Self::new(bodies)
    }

    pub fn list(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// First body (in store order) whose circle strictly contains `point`.
    pub fn find_at(&self, point: Vec2) -> Option<BodyId> {
        self.bodies.iter().find(|b| b.contains(point)).map(|b| b.id)
    }

    /// Recolor one body. Unknown ids are ignored.
    pub fn set_color(&mut self, id: BodyId, color: BodyColor) {
        if let Some(b) = self.get_mut(id) {
            b.color = color;
        }
    }

    /// Replace one body's velocity. Unknown ids are ignored.
    pub fn set_velocity(&mut self, id: BodyId, velocity: Vec2) {
        if let Some(b) = self.get_mut(id) {
            b.velocity = velocity;
        }
    }

    pub fn step(&mut self, bounds: WorldBounds) -> StepReport {
        step::step(&mut self.bodies, bounds)
    }

    pub fn apply_impulse_near(&mut self, point: Vec2, factor: f32) -> usize {
        step::apply_impulse_near(&mut self.bodies, point, factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::seed_bodies;

    fn store() -> BodyStore {
        BodyStore::new(seed_bodies()).unwrap()
    }

    #[test]
    fn list_keeps_insertion_order() {
        let ids: Vec<_> = store().list().iter().map(|b| b.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn empty_seed_set_is_allowed() {
        let empty = BodyStore::new(Vec::new()).unwrap();
        assert!(empty.is_empty());
        assert!(!store().is_empty());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut seeds = seed_bodies();
        seeds[2].id = BodyId(1);
        let err = BodyStore::new(seeds).unwrap_err();
        assert!(err.to_string().contains("duplicate body id #1"));
    }

    #[test]
    fn rejects_bad_radius() {
        for r in [0.0, -3.0, f32::NAN] {
            let mut seeds = seed_bodies();
            seeds[0].radius = r;
            assert!(BodyStore::new(seeds).is_err(), "radius {r} accepted");
        }
    }

    #[test]
    fn find_at_is_strict_and_ordered() {
        let mut seeds = seed_bodies();
        // Put body 2 on top of body 1 so both contain (100, 100).
        seeds[1].position = Vec2::new(110.0, 100.0);
        let store = BodyStore::new(seeds).unwrap();

        assert_eq!(store.find_at(Vec2::new(100.0, 100.0)), Some(BodyId(1)));
        // Exactly on body 3's rim (r = 40).
        assert_eq!(store.find_at(Vec2::new(340.0, 300.0)), None);
        assert_eq!(store.find_at(Vec2::new(339.0, 300.0)), Some(BodyId(3)));
        assert_eq!(store.find_at(Vec2::new(700.0, 500.0)), None);
    }

    #[test]
    fn set_color_touches_only_color() {
        let mut s = store();
        let before = *s.get(BodyId(2)).unwrap();
        s.set_color(BodyId(2), BodyColor::Red);
        let after = *s.get(BodyId(2)).unwrap();
        assert_eq!(after.color, BodyColor::Red);
        assert_eq!(Body { color: before.color, ..after }, before);
    }

    #[test]
    fn set_color_is_idempotent() {
        let mut once = store();
        once.set_color(BodyId(1), BodyColor::Blue);
        let mut twice = store();
        twice.set_color(BodyId(1), BodyColor::Blue);
        twice.set_color(BodyId(1), BodyColor::Blue);
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut s = store();
        let before = s.clone();
        s.set_color(BodyId(999), BodyColor::Red);
        s.set_velocity(BodyId(999), Vec2::new(9.0, 9.0));
        assert_eq!(s, before);
    }

    #[test]
    fn set_velocity_replaces_vector() {
        let mut s = store();
        s.set_velocity(BodyId(3), Vec2::new(1.5, -0.5));
        assert_eq!(s.get(BodyId(3)).unwrap().velocity, Vec2::new(1.5, -0.5));
    }

    #[test]
    fn scatter_is_deterministic_and_in_bounds() {
        let bounds = WorldBounds::new(400.0, 300.0);
        let a = BodyStore::scatter(32, bounds, 7).unwrap();
        let b = BodyStore::scatter(32, bounds, 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
        for body in a.list() {
            assert!(body.position.x >= body.radius && body.position.x <= 400.0 - body.radius);
            assert!(body.position.y >= body.radius && body.position.y <= 300.0 - body.radius);
        }
    }
}
