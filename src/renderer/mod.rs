//! Drawing surface abstraction
//!
//! The simulation only needs a handful of 2-D canvas operations. Anything that
//! can clear a region, fill a circle and report its size can host the balls.

pub mod recording;

pub use recording::{DrawCommand, RecordingSurface};

use glam::Vec2;

/// Pixel size of a drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A surface with no area (not laid out yet, or detached)
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Minimal 2-D drawing surface
pub trait Surface {
    /// Current pixel size
    fn bounds(&self) -> Bounds;
    /// Clear the rectangle from the origin to `bounds`
    fn clear(&mut self, bounds: Bounds);
    /// Start a new path
    fn begin_path(&mut self);
    /// Add a full circle to the current path
    fn circle(&mut self, center: Vec2, radius: f32);
    /// Set the fill color (any CSS color string)
    fn set_fill_color(&mut self, color: &str);
    /// Fill the current path
    fn fill(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_bounds() {
        assert!(Bounds::new(0.0, 600.0).is_degenerate());
        assert!(Bounds::new(800.0, -1.0).is_degenerate());
        assert!(Bounds::new(f32::NAN, 600.0).is_degenerate());
        assert!(!Bounds::new(800.0, 600.0).is_degenerate());
    }
}
