//! Core multi-well drift simulation library.
//!
//! Main components:
//! - [`well`] - force-emitting wells, seeding and reseeding.
//! - [`force`] - the pure piecewise force field.
//! - [`phases`] - the per-tick interaction and drift phases.
//! - [`interaction`] - pointer-driven well repositioning modes.
//! - [`sim`] - the owning simulation instance and its throttled tick.
//! - [`render`] - the sink trait that carries positions to host visuals.
//! - [`config`] - configuration and defaults.
//! - [`types`] - shared type aliases.

pub mod config;
pub mod drifter;
pub mod force;
pub mod interaction;
pub mod phases;
pub mod render;
pub mod sim;
pub mod types;
pub mod well;
