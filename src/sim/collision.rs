//! Ball-ball collision detection and response
//!
//! Response is deliberately simple: the first ball of an overlapping pair is
//! pushed out along the contact angle (the second stays put) and the two
//! velocity vectors are exchanged. Mass and momentum are not modelled, and
//! a ball touching several others is resolved against each partner in turn
//! within the same pass, so the outcome of multi-way contacts depends on
//! collection order.

use glam::Vec2;

use super::ball::Ball;
use crate::consts::SEPARATION_MARGIN;
use crate::polar_to_cartesian;

/// Overlap between two circles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Angle of the vector from the second ball's center to the first's
    pub angle: f32,
    /// How far the first ball must move to clear the second (margin included)
    pub push: f32,
}

/// Check two circles for overlap. Touching exactly is not a contact.
pub fn circle_contact(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> Option<Contact> {
    let delta = a_pos - b_pos;
    let distance = delta.length();
    let reach = a_radius + b_radius;

    if distance < reach {
        Some(Contact {
            angle: delta.y.atan2(delta.x),
            push: reach - distance + SEPARATION_MARGIN,
        })
    } else {
        None
    }
}

/// Apply a contact: move `a` out along the contact angle, swap velocities
pub fn resolve_contact(a: &mut Ball, b: &mut Ball, contact: Contact) {
    a.pos += polar_to_cartesian(contact.push, contact.angle);
    std::mem::swap(&mut a.vel, &mut b.vel);
}

/// Resolve every overlapping pair `(i, j)` with `i < j`, in nested order.
///
/// Returns the number of contacts resolved.
pub fn resolve_collisions(balls: &mut [Ball]) -> usize {
    let mut resolved = 0;

    for i in 0..balls.len() {
        let (head, tail) = balls.split_at_mut(i + 1);
        let a = &mut head[i];
        for (offset, b) in tail.iter_mut().enumerate() {
            if let Some(contact) = circle_contact(a.pos, a.radius, b.pos, b.radius) {
                log::trace!(
                    "Collision {} <-> {} (index {} / {}), push {:.2}",
                    a.id,
                    b.id,
                    i,
                    i + 1 + offset,
                    contact.push
                );
                resolve_contact(a, b, contact);
                resolved += 1;
            }
        }
    }

    resolved
}
