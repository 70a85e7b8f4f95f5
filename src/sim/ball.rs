//! Ball entity and the body capability it implements

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::RESTITUTION;
use crate::renderer::{Bounds, Surface};

/// Something the simulation can draw, move and pick with the pointer.
///
/// Only circles exist today, but the world talks to entities through this
/// trait so other shapes can be added without touching the frame loop.
pub trait Body {
    /// Paint onto the surface. Must not change state.
    fn draw(&self, surface: &mut dyn Surface);
    /// Integrate one frame of motion, then bounce off the surface edges
    fn update(&mut self, bounds: Bounds);
    /// Whether the point lies strictly inside the body
    fn hit_test(&self, point: Vec2) -> bool;
}

/// A rigid colored circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    /// Center in surface coordinates (origin top-left, y down)
    pub pos: Vec2,
    pub radius: f32,
    /// Any CSS color string
    pub color: String,
    /// Displacement per frame
    pub vel: Vec2,
}

impl Ball {
    /// Stationary ball
    pub fn new(id: u32, pos: Vec2, radius: f32, color: impl Into<String>) -> Self {
        Self::with_velocity(id, pos, radius, color, Vec2::ZERO)
    }

    pub fn with_velocity(
        id: u32,
        pos: Vec2,
        radius: f32,
        color: impl Into<String>,
        vel: Vec2,
    ) -> Self {
        Self {
            id,
            pos,
            radius,
            color: color.into(),
            vel,
        }
    }
}

/// Flip and damp a velocity component when the body is leaving the range.
///
/// Only fires while still moving outward, so a body that has already been
/// turned around is left alone until its position catches up.
#[inline]
fn bounce_axis(pos: f32, vel: f32, radius: f32, limit: f32) -> f32 {
    let leaving_high = pos + radius > limit && vel > 0.0;
    let leaving_low = pos - radius < 0.0 && vel < 0.0;
    if leaving_high || leaving_low {
        vel * -RESTITUTION
    } else {
        vel
    }
}

impl Body for Ball {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.begin_path();
        surface.circle(self.pos, self.radius);
        surface.set_fill_color(&self.color);
        surface.fill();
    }

    fn update(&mut self, bounds: Bounds) {
        self.pos += self.vel;
        self.vel.x = bounce_axis(self.pos.x, self.vel.x, self.radius, bounds.width);
        self.vel.y = bounce_axis(self.pos.y, self.vel.y, self.radius, bounds.height);
    }

    fn hit_test(&self, point: Vec2) -> bool {
        point.distance(self.pos) < self.radius
    }
}
