//! World state shared by the frame loop and pointer handlers
//!
//! Everything the demo knows lives here: the balls, the pointer drag, the
//! current selection and the add-ball draft.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::ball::{Ball, Body};
use crate::consts::*;
use crate::renderer::Bounds;
use crate::settings::Settings;

/// Pointer drag state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A ball is following the pointer
    Dragging {
        /// Index into `World::balls`
        index: usize,
        /// Where the pointer went down
        start: Vec2,
    },
}

/// Parameters for a ball about to be added
#[derive(Debug, Clone, PartialEq)]
pub struct BallDraft {
    pub color: String,
    pub size: f32,
}

impl Default for BallDraft {
    fn default() -> Self {
        Self {
            color: DEFAULT_BALL_COLOR.to_string(),
            size: DEFAULT_BALL_SIZE,
        }
    }
}

/// Balls present at start-up: (position, radius, color, velocity)
const SEED_BALLS: [((f32, f32), f32, &str, (f32, f32)); 3] = [
    ((500.0, 200.0), 30.0, "red", (4.0, 6.0)),
    ((300.0, 100.0), 40.0, "blue", (5.0, 0.0)),
    ((300.0, 100.0), 15.0, "green", (0.0, 5.0)),
];

/// Complete interactive state
#[derive(Debug, Clone)]
pub struct World {
    /// Balls in insertion order (drives collision pairing and hit priority)
    pub balls: Vec<Ball>,
    pub drag: DragState,
    /// Index of the ball picked for recoloring
    pub selected: Option<usize>,
    /// Open add-ball form, if any
    pub pending_add: Option<BallDraft>,
    /// Size of the surface as of the last frame
    pub bounds: Bounds,
    /// Defaults for a freshly opened add-ball form
    draft_defaults: BallDraft,
    rng: Pcg32,
    next_id: u32,
}

impl World {
    /// Empty world with default bounds
    pub fn new(seed: u64) -> Self {
        Self {
            balls: Vec::new(),
            drag: DragState::Idle,
            selected: None,
            pending_add: None,
            bounds: Bounds::new(DEFAULT_SURFACE_WIDTH, DEFAULT_SURFACE_HEIGHT),
            draft_defaults: BallDraft::default(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// World configured from settings, seeded with the start-up balls if enabled
    pub fn from_settings(settings: &Settings, seed: u64) -> Self {
        let mut world = Self::new(seed);
        let (width, height) = settings.surface_size();
        world.bounds = Bounds::new(width, height);
        world.draft_defaults = BallDraft {
            color: settings.default_color.clone(),
            size: settings.default_size,
        };
        if settings.seed_balls {
            world.spawn_seed_balls();
        }
        world
    }

    /// Allocate a new ball ID (never reused)
    pub fn next_ball_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append the fixed start-up set
    pub fn spawn_seed_balls(&mut self) {
        for ((x, y), radius, color, (dx, dy)) in SEED_BALLS {
            let id = self.next_ball_id();
            self.balls.push(Ball::with_velocity(
                id,
                Vec2::new(x, y),
                radius,
                color,
                Vec2::new(dx, dy),
            ));
        }
    }

    /// Append a stationary ball at a random spot inside the current bounds.
    ///
    /// Size is not validated; the caller owns sanitizing form input.
    pub fn add_ball(&mut self, color: impl Into<String>, size: f32) -> u32 {
        let Bounds { width, height } = self.effective_bounds();
        let pos = Vec2::new(
            self.rng.random_range(0.0..width),
            self.rng.random_range(0.0..height),
        );
        let id = self.next_ball_id();
        let ball = Ball::new(id, pos, size, color);
        log::debug!(
            "Added ball {} ({}, r={}) at ({:.1}, {:.1})",
            id,
            ball.color,
            ball.radius,
            pos.x,
            pos.y
        );
        self.balls.push(ball);
        id
    }

    /// Currently selected ball
    pub fn selected_ball(&self) -> Option<&Ball> {
        self.selected.and_then(|i| self.balls.get(i))
    }

    pub fn draft_defaults(&self) -> &BallDraft {
        &self.draft_defaults
    }

    /// Index of the first ball (in collection order) containing the point
    pub fn ball_at(&self, point: Vec2) -> Option<usize> {
        self.balls.iter().position(|b| b.hit_test(point))
    }

    /// Bounds usable for placement; falls back to the default surface size
    /// while the real surface has no area yet.
    fn effective_bounds(&self) -> Bounds {
        if self.bounds.is_degenerate() {
            Bounds::new(DEFAULT_SURFACE_WIDTH, DEFAULT_SURFACE_HEIGHT)
        } else {
            self.bounds
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_balls_get_unique_ids() {
        let world = World::from_settings(&Settings::default(), 1);
        let ids: Vec<u32> = world.balls.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(world.balls[0].vel, Vec2::new(4.0, 6.0));
        assert_eq!(world.balls[1].color, "blue");
        assert_eq!(world.balls[2].radius, 15.0);
    }

    #[test]
    fn test_seed_balls_disabled() {
        let settings = Settings {
            seed_balls: false,
            ..Settings::default()
        };
        let world = World::from_settings(&settings, 1);
        assert!(world.balls.is_empty());
    }

    #[test]
    fn test_add_ball_on_empty_surface() {
        let mut world = World::new(42);
        let id = world.add_ball("black", 30.0);

        assert_eq!(id, 1);
        assert_eq!(world.balls.len(), 1);
        let ball = &world.balls[0];
        assert_eq!(ball.radius, 30.0);
        assert_eq!(ball.color, "black");
        assert_eq!(ball.vel, Vec2::ZERO);
        assert!((0.0..800.0).contains(&ball.pos.x));
        assert!((0.0..600.0).contains(&ball.pos.y));
    }

    #[test]
    fn test_add_ball_uses_current_bounds() {
        let mut world = World::new(7);
        world.bounds = Bounds::new(50.0, 20.0);
        for _ in 0..100 {
            world.add_ball("red", 5.0);
        }
        assert!(
            world
                .balls
                .iter()
                .all(|b| (0.0..50.0).contains(&b.pos.x) && (0.0..20.0).contains(&b.pos.y))
        );
    }

    #[test]
    fn test_add_ball_falls_back_without_bounds() {
        let mut world = World::new(7);
        world.bounds = Bounds::new(0.0, 0.0);
        world.add_ball("red", 5.0);
        let pos = world.balls[0].pos;
        assert!((0.0..DEFAULT_SURFACE_WIDTH).contains(&pos.x));
        assert!((0.0..DEFAULT_SURFACE_HEIGHT).contains(&pos.y));
    }

    #[test]
    fn test_ids_are_monotonic_after_adds() {
        let mut world = World::from_settings(&Settings::default(), 3);
        world.add_ball("black", 30.0);
        world.add_ball("black", 30.0);
        let ids: Vec<u32> = world.balls.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_same_seed_same_placement() {
        let mut a = World::new(99);
        let mut b = World::new(99);
        a.add_ball("red", 10.0);
        b.add_ball("red", 10.0);
        assert_eq!(a.balls[0].pos, b.balls[0].pos);
    }

    #[test]
    fn test_ball_at_first_match_wins() {
        let world = World::from_settings(&Settings::default(), 1);
        // Blue (index 1) and green (index 2) share a center
        assert_eq!(world.ball_at(Vec2::new(300.0, 100.0)), Some(1));
        assert_eq!(world.ball_at(Vec2::new(500.0, 200.0)), Some(0));
        assert_eq!(world.ball_at(Vec2::new(10.0, 10.0)), None);
    }
}
