//! Pointer-driven well repositioning.
//!
//! Each interaction mode implements one uniform contract: given a well's
//! current position and the latest pointer position, produce the well's
//! next position. The mode of a simulation is fixed for its lifetime.

use crate::config::DriftConfig;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    /// Wells never move.
    Fixed,
    /// Wells chase the pointer with exponential smoothing.
    Follow,
    /// Wells inside `repel_radius` are pushed away from the pointer.
    Repel,
    /// Wells circle the pointer on per-index rings, phase-shifted so they
    /// spread out instead of bunching up.
    Orbit,
}

impl InteractionMode {
    pub const ALL: [InteractionMode; 4] = [
        InteractionMode::Fixed,
        InteractionMode::Follow,
        InteractionMode::Repel,
        InteractionMode::Orbit,
    ];

    /// Computes the well's next position.
    ///
    /// ### Parameters
    /// - `well` - Current well position.
    /// - `index` - Index of the well in its set; selects the orbit ring
    ///   and phase offset.
    /// - `pointer` - Latest pointer position in container space.
    /// - `now` - Wall-clock time in seconds; advances the orbit angle.
    /// - `bounds` - Container size; repelled wells are clamped inside it.
    pub fn reposition(
        self,
        well: Vec2,
        index: usize,
        pointer: Vec2,
        now: f64,
        cfg: &DriftConfig,
        bounds: Vec2,
    ) -> Vec2 {
        match self {
            InteractionMode::Fixed => well,

            InteractionMode::Follow => well + (pointer - well) * cfg.follow_speed,

            InteractionMode::Repel => {
                let offset = well - pointer;
                let d = offset.length();
                if d >= cfg.repel_radius {
                    return well;
                }
                let out = offset.normalize_or(Vec2::X);
                let pushed = well + out * ((cfg.repel_radius - d) * cfg.follow_speed);
                pushed.clamp(Vec2::ZERO, bounds)
            }

            InteractionMode::Orbit => {
                let ring = cfg.orbit_radius_base * (1.0 + 0.4 * index as f32);
                let angle =
                    now * f64::from(cfg.orbit_angular_speed) + index as f64 * 2.4;
                let target =
                    pointer + Vec2::new(angle.cos() as f32, angle.sin() as f32) * ring;
                well + (target - well) * cfg.follow_speed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_mode_is_the_identity() {
        let cfg = DriftConfig::default();
        let well = Vec2::new(123.0, 45.0);
        let next = InteractionMode::Fixed.reposition(
            well,
            0,
            Vec2::new(400.0, 300.0),
            7.5,
            &cfg,
            Vec2::new(800.0, 600.0),
        );
        assert_eq!(next, well);
    }

    #[test]
    fn follow_mode_strictly_shrinks_the_distance_to_the_pointer() {
        let cfg = DriftConfig::default();
        let bounds = Vec2::new(800.0, 600.0);
        let pointer = Vec2::new(200.0, 150.0);
        let mut well = Vec2::new(650.0, 500.0);

        let mut dist = (pointer - well).length();
        for tick in 0..200 {
            well = InteractionMode::Follow.reposition(well, 0, pointer, 0.0, &cfg, bounds);
            let next = (pointer - well).length();
            if next < 1e-3 {
                break;
            }
            assert!(next < dist, "distance grew at tick {}: {} -> {}", tick, dist, next);
            dist = next;
        }
        assert!((pointer - well).length() < 1.0);
    }

    #[test]
    fn repel_mode_pushes_nearby_wells_away_and_ignores_far_ones() {
        let cfg = DriftConfig::default();
        let bounds = Vec2::new(800.0, 600.0);
        let pointer = Vec2::new(400.0, 300.0);

        let near = Vec2::new(430.0, 300.0);
        let pushed = InteractionMode::Repel.reposition(near, 0, pointer, 0.0, &cfg, bounds);
        assert!((pushed - pointer).length() > (near - pointer).length());

        let far = pointer + Vec2::new(cfg.repel_radius + 1.0, 0.0);
        let unchanged = InteractionMode::Repel.reposition(far, 0, pointer, 0.0, &cfg, bounds);
        assert_eq!(unchanged, far);
    }

    #[test]
    fn repel_mode_clamps_to_the_container() {
        let cfg = DriftConfig {
            follow_speed: 1.0,
            ..DriftConfig::default()
        };
        let bounds = Vec2::new(800.0, 600.0);

        // A well close to the left edge, pushed further left, must stop
        // at the container bound.
        let pointer = Vec2::new(30.0, 300.0);
        let well = Vec2::new(5.0, 300.0);
        let pushed = InteractionMode::Repel.reposition(well, 0, pointer, 0.0, &cfg, bounds);
        assert_eq!(pushed.x, 0.0);
        assert!(pushed.y >= 0.0 && pushed.y <= bounds.y);
    }

    #[test]
    fn orbit_mode_converges_to_the_indexed_ring() {
        let cfg = DriftConfig::default();
        let bounds = Vec2::new(800.0, 600.0);
        let pointer = Vec2::new(400.0, 300.0);

        // With time frozen the target is a fixed point on the ring, and
        // the smoothing converges to it.
        let mut well = Vec2::new(100.0, 100.0);
        for _ in 0..400 {
            well = InteractionMode::Orbit.reposition(well, 0, pointer, 2.0, &cfg, bounds);
        }
        let ring = cfg.orbit_radius_base;
        assert!(((well - pointer).length() - ring).abs() < 0.5);
    }

    #[test]
    fn orbit_angle_advances_with_time_and_index() {
        let cfg = DriftConfig::default();
        let bounds = Vec2::new(800.0, 600.0);
        let pointer = Vec2::new(400.0, 300.0);
        let well = pointer;

        let a = InteractionMode::Orbit.reposition(well, 0, pointer, 0.0, &cfg, bounds);
        let b = InteractionMode::Orbit.reposition(well, 0, pointer, 1.0, &cfg, bounds);
        let c = InteractionMode::Orbit.reposition(well, 1, pointer, 0.0, &cfg, bounds);

        assert!((a - b).length() > 1e-3, "time should move the target");
        assert!((a - c).length() > 1e-3, "index should shift the phase");
    }
}
