//! Synchronizing simulation state into host visuals.
//!
//! The simulation never touches host visuals directly; every tick the
//! host calls [`sync`] with a [`RenderSink`] and the computed positions
//! flow out through it. A sink that reports an element as detached simply
//! stops receiving writes for it, so a host that removes elements mid-run
//! does not need to tear the simulation down first.

use crate::sim::DriftSimulation;
use crate::types::ElementId;
use crate::well::Well;
use glam::Vec2;

/// Host-side write interface for drifter positions and well markers.
pub trait RenderSink {
    /// Whether the visual element for `id` still exists on the host side.
    fn is_attached(&self, id: ElementId) -> bool;

    /// Writes a drifter's clamped position to its visual element.
    fn place_element(&mut self, id: ElementId, pos: Vec2);

    /// Mirrors the current well set into the decorative markers.
    fn place_markers(&mut self, wells: &[Well]);

    /// Removes all marker visuals. Called by the host on stop; must be
    /// safe to call repeatedly.
    fn clear_markers(&mut self);
}

/// Writes the simulation's current state into the sink.
///
/// Skips detached elements, skips markers unless `show_wells` is set, and
/// writes nothing at all once the simulation has been stopped.
pub fn sync(sim: &DriftSimulation, sink: &mut impl RenderSink) {
    if sim.is_stopped() {
        return;
    }

    for d in sim.drifters() {
        if sink.is_attached(d.element) {
            sink.place_element(d.element, d.pos);
        }
    }

    if sim.config().show_wells {
        sink.place_markers(&sim.wells().wells);
    }
}
