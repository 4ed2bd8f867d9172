//! Net force computation for the multi-well field.
//!
//! Every function here is pure: the force on a point depends only on the
//! point, the current well set, and the configuration. This keeps the
//! field testable without a live simulation or scheduler.
//!
//! Each well surrounds itself with three concentric zones, sized by its
//! [`orbit_radius`]:
//!
//! 1. core (`d < 0.5 r`) - repulsion along the outward normal, growing as
//!    the point approaches the center.
//! 2. orbit band (`0.5 r <= d < 1.5 r`) - a tangential push proportional
//!    to the well strength, plus a radial spring pulling the point toward
//!    `r` exactly.
//! 3. far (`d >= 1.5 r`) - plain radial attraction proportional to the
//!    well strength.
//!
//! Contributions from all wells are summed and the total magnitude is
//! clamped, so stacked or coincident wells cannot blow the integration up.

use crate::config::DriftConfig;
use crate::well::{Well, WellSet};
use glam::Vec2;

/// The ideal orbiting distance for a well of the given strength.
///
/// A deterministic function of strength only:
/// `orbit_radius_base + strength * orbit_radius_scale`.
pub fn orbit_radius(strength: f32, cfg: &DriftConfig) -> f32 {
    cfg.orbit_radius_base + strength * cfg.orbit_radius_scale
}

/// Computes the net force the well set exerts on `point`.
///
/// Sums the per-well zone forces, then caps the magnitude of the total at
/// `cfg.max_force` while preserving its direction.
///
/// ### Parameters
/// - `point` - Probe position in container pixel space.
/// - `wells` - The current well set; read-only.
/// - `cfg` - Zone gains, radius constants, and the magnitude cap.
///
/// ### Returns
/// A finite force vector with `length() <= cfg.max_force`.
pub fn net_force(point: Vec2, wells: &WellSet, cfg: &DriftConfig) -> Vec2 {
    let total = wells
        .wells
        .iter()
        .fold(Vec2::ZERO, |acc, w| acc + well_force(point, w, cfg));

    total.clamp_length_max(cfg.max_force)
}

/// One well's contribution, before the magnitude cap.
///
/// When the point coincides with the well center the outward normal is
/// undefined; it falls back to `+X` so a stack of coincident wells still
/// produces a non-zero, clampable push instead of a NaN.
fn well_force(point: Vec2, well: &Well, cfg: &DriftConfig) -> Vec2 {
    let offset = point - well.pos;
    let d = offset.length();
    let out = offset.normalize_or(Vec2::X);
    let r = orbit_radius(well.strength, cfg);

    if d < 0.5 * r {
        out * ((0.5 * r - d) * cfg.core_gain)
    } else if d < 1.5 * r {
        out.perp() * (well.strength * cfg.tangent_gain) + out * ((r - d) * cfg.spring_gain)
    } else {
        -out * (well.strength * cfg.pull_gain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_well(pos: Vec2, strength: f32) -> WellSet {
        WellSet::from_wells(vec![Well { pos, strength }])
    }

    #[test]
    fn core_zone_pushes_outward() {
        let cfg = DriftConfig::default();
        let well_pos = Vec2::new(200.0, 200.0);
        let wells = single_well(well_pos, 1.0);
        let r = orbit_radius(1.0, &cfg);

        // Probe at 0.3 r, to the right of the well.
        let point = well_pos + Vec2::new(0.3 * r, 0.0);
        let f = net_force(point, &wells, &cfg);

        // Outward means away from the well, i.e. positive x here.
        assert!(f.x > 0.0, "expected repulsion, got {:?}", f);
        assert_eq!(f.y, 0.0);
    }

    #[test]
    fn orbit_band_is_tangential_with_a_radial_spring() {
        let cfg = DriftConfig::default();
        let well_pos = Vec2::new(200.0, 200.0);
        let wells = single_well(well_pos, 1.0);
        let r = orbit_radius(1.0, &cfg);

        // Inside the band but beyond r: the spring component points inward.
        let out = Vec2::new(1.0, 0.0);
        let point = well_pos + out * (1.2 * r);
        let f = net_force(point, &wells, &cfg);

        let radial = f.dot(out);
        let tangential = f.dot(out.perp());
        assert!(radial < 0.0, "spring should pull toward r, got {}", radial);
        assert!(tangential != 0.0, "band force should have a tangential part");

        // Below r the spring flips sign and pushes outward.
        let point = well_pos + out * (0.7 * r);
        let f = net_force(point, &wells, &cfg);
        assert!(f.dot(out) > 0.0);
    }

    #[test]
    fn far_zone_attracts_toward_the_well() {
        let cfg = DriftConfig::default();
        let well_pos = Vec2::new(200.0, 200.0);
        let wells = single_well(well_pos, 1.0);
        let r = orbit_radius(1.0, &cfg);

        let point = well_pos + Vec2::new(3.0 * r, 0.0);
        let f = net_force(point, &wells, &cfg);

        assert!(f.x < 0.0, "expected attraction, got {:?}", f);
        assert!((f.length() - cfg.pull_gain).abs() < 1e-5);
    }

    #[test]
    fn coincident_wells_clamp_to_exactly_max_force() {
        let cfg = DriftConfig::default();
        let point = Vec2::new(100.0, 100.0);

        // Five wells stacked on the probe point. The raw repulsion sum is
        // far above the cap; the clamp has to bring it back to max_force
        // exactly, not to zero.
        let wells = WellSet::from_wells(
            (0..5)
                .map(|_| Well { pos: point, strength: 1.0 })
                .collect(),
        );

        let f = net_force(point, &wells, &cfg);
        assert!(f.is_finite());
        assert!((f.length() - cfg.max_force).abs() < 1e-5);
        // The degenerate outward normal falls back to +X.
        assert!(f.x > 0.0);
        assert_eq!(f.y, 0.0);
    }

    #[test]
    fn magnitude_never_exceeds_max_force_anywhere() {
        let cfg = DriftConfig::default();
        let wells = WellSet::from_wells(vec![
            Well { pos: Vec2::new(120.0, 80.0), strength: 1.0 },
            Well { pos: Vec2::new(130.0, 85.0), strength: 2.5 },
            Well { pos: Vec2::new(300.0, 400.0), strength: 0.2 },
            Well { pos: Vec2::new(120.0, 80.0), strength: 4.0 },
        ]);

        // Probe a coarse grid covering cores, bands, and far field.
        for gx in 0..40 {
            for gy in 0..30 {
                let point = Vec2::new(gx as f32 * 12.5, gy as f32 * 16.0);
                let f = net_force(point, &wells, &cfg);
                assert!(f.is_finite(), "non-finite force at {:?}", point);
                assert!(
                    f.length() <= cfg.max_force + 1e-5,
                    "force {} above cap at {:?}",
                    f.length(),
                    point
                );
            }
        }
    }

    #[test]
    fn zero_strength_well_exerts_no_far_pull() {
        let cfg = DriftConfig::default();
        let wells = single_well(Vec2::new(0.0, 0.0), 0.0);

        // Beyond 1.5 r the pull scales with strength, so zero strength
        // means zero force.
        let f = net_force(Vec2::new(500.0, 0.0), &wells, &cfg);
        assert_eq!(f, Vec2::ZERO);
    }
}
