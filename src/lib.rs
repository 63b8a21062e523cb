//! Circles bouncing in a box: wall reflection, radius-weighted elastic
//! collisions and pointer nudges, with a small Bevy front end.
//!
//! The physics lives in [`physics::store`] and [`physics::step`] and has no
//! dependency on a running `App`; everything else in [`physics`] is plumbing
//! between Bevy and those two modules.

pub mod config;
pub mod physics;
