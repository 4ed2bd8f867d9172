//! The two per-tick phases of the drift simulation.
//!
//! One processed tick runs:
//! 1. [`interaction_phase`] - the configured mode repositions every well
//!    using the latest pointer position.
//! 2. [`drift_phase`] - each drifter integrates the net well force with
//!    damping, noise, and boundary reflection.
//!
//! The phases are free functions over explicit state so they can be
//! exercised in tests without a scheduler or a host surface.

use crate::config::DriftConfig;
use crate::drifter::Drifter;
use crate::force;
use crate::well::WellSet;
use glam::Vec2;
use rand::Rng;

/// Applies the interaction mode to every well in the set.
///
/// ### Parameters
/// - `wells` - Well set to mutate in place.
/// - `pointer` - Latest pointer position in container space.
/// - `now` - Wall-clock time in seconds, used by the orbit mode.
/// - `cfg` - Mode selection and smoothing parameters.
/// - `bounds` - Container size, for clamping repelled wells.
pub fn interaction_phase(
    wells: &mut WellSet,
    pointer: Vec2,
    now: f64,
    cfg: &DriftConfig,
    bounds: Vec2,
) {
    for (i, well) in wells.wells.iter_mut().enumerate() {
        well.pos = cfg.mode.reposition(well.pos, i, pointer, now, cfg, bounds);
    }
}

/// Advances every drifter by one step.
///
/// Per drifter:
/// 1. `force = net_force(pos, wells)`;
/// 2. `vel = (vel + force) * damping + noise`, where the noise term is
///    `uniform(-1, 1)` per axis scaled by half the configured amplitude
///    (and skipped entirely at amplitude zero, keeping that path
///    deterministic);
/// 3. `pos += vel`;
/// 4. coordinates leaving `[padding, dim - padding]` are clamped to the
///    bound and the matching velocity component flips sign, scaled by the
///    restitution factor.
///
/// ### Parameters
/// - `drifters` - Drifters to mutate in place.
/// - `wells` - Current well set; read-only.
/// - `cfg` - Integration constants.
/// - `bounds` - Container size in pixels.
/// - `rng` - Noise source; untouched when the noise amplitude is zero.
pub fn drift_phase(
    drifters: &mut [Drifter],
    wells: &WellSet,
    cfg: &DriftConfig,
    bounds: Vec2,
    rng: &mut impl Rng,
) {
    let min = Vec2::splat(cfg.padding);
    let max = (bounds - Vec2::splat(cfg.padding)).max(min);

    for d in drifters.iter_mut() {
        let f = force::net_force(d.pos, wells, cfg);
        let mut vel = (d.vel + f) * cfg.damping;

        if cfg.noise_amplitude > 0.0 {
            let amp = cfg.noise_amplitude * 0.5;
            vel += Vec2::new(
                rng.random_range(-1.0..=1.0),
                rng.random_range(-1.0..=1.0),
            ) * amp;
        }

        let mut pos = d.pos + vel;

        if pos.x < min.x {
            pos.x = min.x;
            vel.x = -vel.x * cfg.restitution;
        } else if pos.x > max.x {
            pos.x = max.x;
            vel.x = -vel.x * cfg.restitution;
        }
        if pos.y < min.y {
            pos.y = min.y;
            vel.y = -vel.y * cfg.restitution;
        } else if pos.y > max.y {
            pos.y = max.y;
            vel.y = -vel.y * cfg.restitution;
        }

        d.pos = pos;
        d.vel = vel;
    }
}
