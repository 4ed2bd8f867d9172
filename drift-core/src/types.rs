/// Identifier for a host-owned visual element animated by the simulation.
///
/// This is the index of the element in the list the host supplied at
/// construction, and is only meaningful within the lifetime of a given
/// [`crate::sim::DriftSimulation`] instance.
pub type ElementId = usize;
