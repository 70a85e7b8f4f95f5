//! Per-frame simulation step
//!
//! One call per display refresh: resolve collisions, repaint, integrate.
//! Velocities are in pixels per frame, so there is no timestep.

use super::ball::Body;
use super::collision::resolve_collisions;
use super::state::World;
use crate::renderer::Surface;

/// What a frame did (for hosts that want to log or test it)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Overlapping pairs resolved this frame
    pub collisions: usize,
    /// Balls drawn and integrated
    pub balls: usize,
    /// Frame skipped because the surface has no area
    pub skipped: bool,
}

/// Advance the world by one frame and paint it onto `surface`
pub fn frame(world: &mut World, surface: &mut dyn Surface) -> FrameReport {
    let bounds = surface.bounds();
    if bounds.is_degenerate() {
        log::trace!("Surface has no area ({:?}), skipping frame", bounds);
        return FrameReport {
            skipped: true,
            ..FrameReport::default()
        };
    }
    world.bounds = bounds;

    let collisions = resolve_collisions(&mut world.balls);

    surface.clear(bounds);
    for ball in &world.balls {
        ball.draw(surface);
    }

    for ball in &mut world.balls {
        ball.update(bounds);
    }

    FrameReport {
        collisions,
        balls: world.balls.len(),
        skipped: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::RESTITUTION;
    use crate::renderer::{Bounds, DrawCommand, RecordingSurface};
    use crate::settings::Settings;
    use crate::sim::Ball;
    use glam::Vec2;

    #[test]
    fn test_frame_clears_then_draws_in_order() {
        let mut world = World::from_settings(&Settings::default(), 1);
        let mut surface = RecordingSurface::new(800.0, 600.0);

        let report = frame(&mut world, &mut surface);
        assert_eq!(report.balls, 3);
        assert!(!report.skipped);

        let commands = surface.commands();
        assert_eq!(commands[0], DrawCommand::Clear(Bounds::new(800.0, 600.0)));
        assert_eq!(surface.filled_circles(), 3);
        let colors: Vec<&str> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillColor(color) => Some(color.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(colors, vec!["red", "blue", "green"]);
    }

    #[test]
    fn test_frame_draws_before_integrating() {
        let mut world = World::new(1);
        world.balls.push(Ball::with_velocity(
            1,
            Vec2::new(100.0, 100.0),
            10.0,
            "red",
            Vec2::new(2.0, 1.0),
        ));
        let mut surface = RecordingSurface::new(800.0, 600.0);

        frame(&mut world, &mut surface);

        assert!(surface.commands().contains(&DrawCommand::Circle {
            center: Vec2::new(100.0, 100.0),
            radius: 10.0
        }));
        assert_eq!(world.balls[0].pos, Vec2::new(102.0, 101.0));
    }

    #[test]
    fn test_seed_overlap_resolved_on_first_frame() {
        let mut world = World::from_settings(&Settings::default(), 1);
        let mut surface = RecordingSurface::new(800.0, 600.0);

        let report = frame(&mut world, &mut surface);
        // Blue and green start on the same center
        assert_eq!(report.collisions, 1);
        // Blue took green's velocity, then moved by it
        assert_eq!(world.balls[1].vel, Vec2::new(0.0, 5.0));
        assert_eq!(world.balls[2].vel, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_degenerate_surface_is_noop() {
        let mut world = World::from_settings(&Settings::default(), 1);
        let before = world.balls.clone();
        let mut surface = RecordingSurface::new(0.0, 0.0);

        let report = frame(&mut world, &mut surface);
        assert!(report.skipped);
        assert!(surface.commands().is_empty());
        assert_eq!(world.balls, before);
    }

    #[test]
    fn test_frame_tracks_surface_bounds() {
        let mut world = World::new(1);
        let mut surface = RecordingSurface::new(320.0, 240.0);
        frame(&mut world, &mut surface);
        assert_eq!(world.bounds, Bounds::new(320.0, 240.0));
    }

    #[test]
    fn test_edge_bounce_through_frame() {
        let mut world = World::new(1);
        world.balls.push(Ball::with_velocity(
            1,
            Vec2::new(195.0, 50.0),
            10.0,
            "red",
            Vec2::new(10.0, 0.0),
        ));
        let mut surface = RecordingSurface::new(200.0, 100.0);

        frame(&mut world, &mut surface);
        assert_eq!(world.balls[0].vel.x, 10.0 * -RESTITUTION);
    }

    #[test]
    fn test_long_run_stays_finite() {
        let mut world = World::from_settings(&Settings::default(), 11);
        for _ in 0..5 {
            world.add_ball("black", 20.0);
        }
        let mut surface = RecordingSurface::new(800.0, 600.0);

        for _ in 0..2000 {
            frame(&mut world, &mut surface);
            surface.take_commands();
        }

        assert!(world.balls.iter().all(|b| b.pos.is_finite()));
    }
}
