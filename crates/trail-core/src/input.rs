//! Pointer state as seen by the loop.
//!
//! Front-ends own the live `PointerState`, fold platform events into it via
//! [`PointerState::apply`] and hand a copy to the loop once per tick, so a
//! tick never observes a half-applied event.

use glam::Vec2;
use smallvec::SmallVec;

/// Touch points carried by a single touch event. Two inline slots cover the
/// single-finger case and the first multi-touch case without allocating.
pub type TouchPoints = SmallVec<[Vec2; 2]>;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub down: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PointerInput {
    Move(Vec2),
    Press,
    Release,
    /// Touch start or move with every active touch point.
    Touch(TouchPoints),
}

impl PointerState {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            down: false,
        }
    }

    /// Fold one input event into the state. Returns `true` if the event was
    /// accepted; multi-touch gestures are ignored and return `false`.
    pub fn apply(&mut self, input: &PointerInput) -> bool {
        match input {
            PointerInput::Move(p) => self.position = *p,
            PointerInput::Press => self.down = true,
            PointerInput::Release => self.down = false,
            PointerInput::Touch(points) => match single_touch(points) {
                Some(p) => self.position = p,
                None => return false,
            },
        }
        true
    }
}

#[inline]
pub fn single_touch(points: &[Vec2]) -> Option<Vec2> {
    match points {
        [p] => Some(*p),
        _ => None,
    }
}
