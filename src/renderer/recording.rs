//! Headless surface that records draw calls
//!
//! Used by the native runner and by tests to observe what a frame painted.

use glam::Vec2;

use super::{Bounds, Surface};

/// A single recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Bounds),
    BeginPath,
    Circle { center: Vec2, radius: f32 },
    FillColor(String),
    Fill,
}

/// Surface that keeps every command issued since the last `take_commands`
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    bounds: Bounds,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            bounds: Bounds::new(width, height),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of filled circles recorded
    pub fn filled_circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Fill))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn clear(&mut self, bounds: Bounds) {
        self.commands.push(DrawCommand::Clear(bounds));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::Circle { center, radius });
    }

    fn set_fill_color(&mut self, color: &str) {
        self.commands.push(DrawCommand::FillColor(color.to_string()));
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }
}
