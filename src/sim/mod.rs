//! Ball simulation module
//!
//! Physics and pointer handling, free of any browser dependency:
//! - Velocities are per frame, one step per display refresh
//! - Seeded RNG only (ball placement)
//! - Collection order decides collision pairing and hit priority

pub mod ball;
pub mod collision;
pub mod interaction;
pub mod state;
pub mod tick;

pub use ball::{Ball, Body};
pub use collision::{Contact, circle_contact, resolve_collisions};
pub use interaction::{PointerEvent, parse_size};
pub use state::{BallDraft, DragState, World};
pub use tick::{FrameReport, frame};
