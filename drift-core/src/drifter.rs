use crate::types::ElementId;
use glam::Vec2;

/// A freely drifting element: position and velocity, plus the id of the
/// host-owned visual element the position is written to.
#[derive(Clone, Debug)]
pub struct Drifter {
    pub pos: Vec2,
    pub vel: Vec2,
    pub element: ElementId,
}

impl Drifter {
    pub fn new(pos: Vec2, element: ElementId) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            element,
        }
    }
}
