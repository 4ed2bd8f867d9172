use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct Well {
    pub pos: Vec2,
    pub strength: f32,
}

/// How a [`WellSet`] was created, remembered so a reseed can re-run the
/// same mode.
#[derive(Clone, Debug)]
pub enum Seeding {
    Random { count: usize },
    /// Normalized anchor points in `(0..1, 0..1)`, scaled by the container
    /// size at placement time.
    Anchors(Vec<Vec2>),
}

#[derive(Debug)]
pub struct WellSet {
    pub wells: Vec<Well>,
    seeding: Seeding,
}

impl WellSet {
    pub fn random(count: usize, strength_base: f32, size: Vec2, rng: &mut impl Rng) -> Self {
        let wells = (0..count)
            .map(|_| Well {
                pos: Vec2::new(
                    rng.random_range(0.0..=size.x),
                    rng.random_range(0.0..=size.y),
                ),
                strength: strength_base * rng.random_range(0.5..=1.0),
            })
            .collect();

        Self {
            wells,
            seeding: Seeding::Random { count },
        }
    }

    pub fn from_anchors(
        anchors: Vec<Vec2>,
        strength_base: f32,
        size: Vec2,
        rng: &mut impl Rng,
    ) -> Self {
        let wells = anchors
            .iter()
            .map(|a| Well {
                pos: *a * size,
                strength: strength_base * rng.random_range(0.7..=1.0),
            })
            .collect();

        Self {
            wells,
            seeding: Seeding::Anchors(anchors),
        }
    }

    /// Explicit well list, for tests and embedding. Reseeding such a set
    /// falls back to random placement with the same count.
    pub fn from_wells(wells: Vec<Well>) -> Self {
        let count = wells.len();
        Self {
            wells,
            seeding: Seeding::Random { count },
        }
    }

    /// Replaces the whole set by re-running the remembered seeding mode.
    pub fn reseed(&mut self, strength_base: f32, size: Vec2, rng: &mut impl Rng) {
        *self = match &self.seeding {
            Seeding::Random { count } => Self::random(*count, strength_base, size, rng),
            Seeding::Anchors(anchors) => {
                Self::from_anchors(anchors.clone(), strength_base, size, rng)
            }
        };
    }

    pub fn len(&self) -> usize {
        self.wells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_wells_stay_inside_container_across_reseeds() {
        let mut rng = rand::rng();
        let size = Vec2::new(640.0, 480.0);
        let mut set = WellSet::random(12, 1.0, size, &mut rng);

        for _ in 0..5 {
            assert_eq!(set.len(), 12);
            for w in &set.wells {
                assert!(w.pos.x >= 0.0 && w.pos.x <= size.x, "x out of range: {}", w.pos.x);
                assert!(w.pos.y >= 0.0 && w.pos.y <= size.y, "y out of range: {}", w.pos.y);
            }
            set.reseed(1.0, size, &mut rng);
        }
    }

    #[test]
    fn random_strengths_scale_with_base_and_never_go_negative() {
        let mut rng = rand::rng();
        let set = WellSet::random(20, 2.0, Vec2::new(100.0, 100.0), &mut rng);
        for w in &set.wells {
            assert!(w.strength >= 1.0 && w.strength <= 2.0);
        }

        // A zero base collapses every strength to exactly zero.
        let set = WellSet::random(20, 0.0, Vec2::new(100.0, 100.0), &mut rng);
        assert!(set.wells.iter().all(|w| w.strength == 0.0));
    }

    #[test]
    fn anchor_wells_land_at_scaled_positions() {
        let mut rng = rand::rng();
        let size = Vec2::new(400.0, 300.0);
        let mut set =
            WellSet::from_anchors(vec![Vec2::new(0.1, 0.1)], 1.0, size, &mut rng);

        // (0.1, 0.1) on a 400x300 container is (40, 30), on every reseed.
        for _ in 0..3 {
            assert_eq!(set.len(), 1);
            let w = &set.wells[0];
            assert!((w.pos - Vec2::new(40.0, 30.0)).length() < 1e-4);
            assert!(w.strength >= 0.7 && w.strength <= 1.0);
            set.reseed(1.0, size, &mut rng);
        }
    }

    #[test]
    fn reseed_of_explicit_set_keeps_the_count() {
        let mut rng = rand::rng();
        let mut set = WellSet::from_wells(vec![
            Well { pos: Vec2::new(1.0, 2.0), strength: 1.0 },
            Well { pos: Vec2::new(3.0, 4.0), strength: 0.5 },
        ]);

        set.reseed(1.0, Vec2::new(200.0, 200.0), &mut rng);
        assert_eq!(set.len(), 2);
    }
}
