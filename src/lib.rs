//! Ball Canvas - bouncing, colliding, draggable balls
//!
//! Core modules:
//! - `sim`: Ball physics, collision resolution, pointer interaction
//! - `renderer`: Drawing surface abstraction
//! - `platform`: Browser canvas and DOM event glue (wasm32 only)
//! - `settings`: Configuration loaded at start-up

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use renderer::{Bounds, RecordingSurface, Surface};
pub use settings::Settings;

use glam::Vec2;

/// Simulation constants
pub mod consts {
    /// Velocity multiplier applied on edge contact (sign flip included by caller)
    pub const RESTITUTION: f32 = 0.6;
    /// Release velocity per pixel of drag displacement
    pub const FLING_SCALE: f32 = 0.1;
    /// Extra separation added when pushing overlapping balls apart (prevents sticking)
    pub const SEPARATION_MARGIN: f32 = 1.0;

    /// Surface size used before the first frame reports real bounds
    pub const DEFAULT_SURFACE_WIDTH: f32 = 800.0;
    pub const DEFAULT_SURFACE_HEIGHT: f32 = 600.0;

    /// Add-ball form defaults
    pub const DEFAULT_BALL_COLOR: &str = "black";
    pub const DEFAULT_BALL_SIZE: f32 = 30.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
