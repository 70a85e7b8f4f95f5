//! Pointer interaction and the add/recolor flows
//!
//! Pointer events mutate the world immediately; the next frame renders the
//! result. There is no queue between the host's event dispatch and the world.

use glam::Vec2;

use super::state::{BallDraft, DragState, World};
use crate::consts::FLING_SCALE;

/// Pointer input in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button pressed
    Down(Vec2),
    /// Pointer moved (with or without a button held)
    Move(Vec2),
    /// Button released, possibly outside the surface
    Up(Vec2),
    /// Press and release at the same spot, as reported by the host
    Click(Vec2),
}

/// Parse the add-form size field.
///
/// Reads an optional sign followed by leading digits; anything after them is
/// ignored ("12px" is 12). Empty, unparsable or zero input yields `fallback`.
pub fn parse_size(input: &str, fallback: f32) -> f32 {
    let trimmed = input.trim();
    let digits_end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());

    // Digits only, so f64 parsing never sees "inf" or an exponent
    match trimmed[..digits_end].parse::<f64>() {
        Ok(n) if n != 0.0 => n as f32,
        _ => fallback,
    }
}

impl World {
    /// Feed one pointer event through the drag/select state machine
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(p) => self.pointer_down(p),
            PointerEvent::Move(p) => self.pointer_move(p),
            PointerEvent::Up(p) => self.pointer_up(p),
            PointerEvent::Click(p) => self.click(p),
        }
    }

    /// Pick up the first ball under the pointer; a miss ends any stale drag
    pub fn pointer_down(&mut self, p: Vec2) {
        self.drag = match self.ball_at(p) {
            Some(index) => DragState::Dragging { index, start: p },
            None => DragState::Idle,
        };
    }

    /// Dragged ball follows the pointer exactly
    pub fn pointer_move(&mut self, p: Vec2) {
        if let DragState::Dragging { index, .. } = self.drag {
            if let Some(ball) = self.balls.get_mut(index) {
                ball.pos = p;
            }
        }
    }

    /// Release: the drag displacement becomes the ball's velocity
    pub fn pointer_up(&mut self, p: Vec2) {
        if let DragState::Dragging { index, start } = self.drag {
            if let Some(ball) = self.balls.get_mut(index) {
                ball.vel = (p - start) * FLING_SCALE;
                log::debug!("Flung ball {} with velocity {:?}", ball.id, ball.vel);
            }
            self.drag = DragState::Idle;
        }
    }

    /// Select the ball under the pointer, or clear the selection on a miss
    pub fn click(&mut self, p: Vec2) {
        self.selected = self.ball_at(p);
    }

    /// Recolor the selected ball and drop the selection.
    ///
    /// Returns false when nothing was selected.
    pub fn recolor_selected(&mut self, color: &str) -> bool {
        let Some(ball) = self.selected.take().and_then(|i| self.balls.get_mut(i)) else {
            return false;
        };
        log::debug!("Recolored ball {}: {} -> {}", ball.id, ball.color, color);
        ball.color = color.to_string();
        true
    }

    /// Open the add-ball form with default parameters
    pub fn begin_add(&mut self) {
        self.pending_add = Some(self.draft_defaults().clone());
    }

    pub fn is_adding(&self) -> bool {
        self.pending_add.is_some()
    }

    pub fn set_draft_color(&mut self, color: &str) {
        if let Some(draft) = self.pending_add.as_mut() {
            draft.color = color.to_string();
        }
    }

    /// Update the draft size from raw form text (see [`parse_size`]).
    ///
    /// Bad input falls back to the configured default size.
    pub fn set_draft_size(&mut self, input: &str) {
        let fallback = self.draft_defaults().size;
        if let Some(draft) = self.pending_add.as_mut() {
            draft.size = parse_size(input, fallback);
        }
    }

    /// Close the form without adding anything
    pub fn cancel_add(&mut self) {
        self.pending_add = None;
    }

    /// Add a ball from the open draft and close the form.
    ///
    /// Returns the new ball's ID, or `None` if no form was open.
    pub fn confirm_add(&mut self) -> Option<u32> {
        let BallDraft { color, size } = self.pending_add.take()?;
        Some(self.add_ball(color, size))
    }
}
