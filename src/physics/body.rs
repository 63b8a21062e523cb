use std::fmt;

use bevy::prelude::*;

/// Stable identity of a body. Assigned once, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Fill colors the user can pick from the color menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BodyColor {
    #[default]
    Red,
    Blue,
    Green,
}

impl BodyColor {
    pub const ALL: [BodyColor; 3] = [BodyColor::Red, BodyColor::Blue, BodyColor::Green];

    pub fn label(self) -> &'static str {
        match self {
            BodyColor::Red => "red",
            BodyColor::Blue => "blue",
            BodyColor::Green => "green",
        }
    }

    /// Render color used by the sprite palette.
    pub fn to_color(self) -> Color {
        match self {
            BodyColor::Red => Color::srgb(0.9, 0.2, 0.2),
            BodyColor::Blue => Color::srgb(0.2, 0.4, 0.95),
            BodyColor::Green => Color::srgb(0.2, 0.8, 0.3),
        }
    }
}

/// A circular rigid body in plane coordinates (origin top-left, +Y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub id: BodyId,
    /// Center of the circle.
    pub position: Vec2,
    /// Displacement per step.
    pub velocity: Vec2,
    /// Fixed for the body's lifetime; doubles as its mass in collisions.
    pub radius: f32,
    pub color: BodyColor,
}

impl Body {
    pub fn new(id: BodyId, position: Vec2, radius: f32, velocity: Vec2, color: BodyColor) -> Self {
        Self {
            id,
            position,
            velocity,
            radius,
            color,
        }
    }

    /// Strict hit test: a point on the rim does not count.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.distance(self.position) < self.radius
    }
}
