//! The owning simulation instance.
//!
//! [`DriftSimulation`] exclusively owns the well set, the drifters, the
//! noise RNG, the cached pointer position, and the throttle clock. The
//! host calls [`DriftSimulation::tick`] from its per-frame callback and
//! forwards pointer events; everything else happens inside the tick, so
//! well updates always land before the force reads of the same tick.

use crate::config::DriftConfig;
use crate::drifter::Drifter;
use crate::phases;
use crate::well::WellSet;
use glam::Vec2;

/// Container size used when the host cannot provide one.
pub const DEFAULT_BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

pub struct DriftSimulation {
    cfg: DriftConfig,
    bounds: Vec2,
    wells: WellSet,
    drifters: Vec<Drifter>,
    rng: rand::rngs::ThreadRng,
    /// Latest pointer position in container space, if one was ever seen.
    pointer: Option<Vec2>,
    /// Time of the last processed tick; `None` until the first one.
    last_tick: Option<f64>,
    ticks: u64,
    stopped: bool,
}

impl DriftSimulation {
    /// Creates a simulation from the host's container size and the
    /// starting positions of its pre-existing visual elements.
    ///
    /// The config is sanitized once here. A missing, zero-sized, or
    /// non-finite `size` falls back to [`DEFAULT_BOUNDS`]. Wells come from
    /// the configured anchors when any are set, otherwise from uniform
    /// random placement. One drifter is created per element position, in
    /// order, clamped into the padded container; ids are the positions'
    /// indices.
    pub fn new(cfg: DriftConfig, size: Option<Vec2>, element_positions: Vec<Vec2>) -> Self {
        let mut rng = rand::rng();
        let mut cfg = cfg.sanitize();
        let bounds = resolve_bounds(size);
        cfg.padding = cfg.padding.min(bounds.x * 0.5).min(bounds.y * 0.5);

        let wells = if cfg.anchors.is_empty() {
            WellSet::random(cfg.well_count, cfg.strength_base, bounds, &mut rng)
        } else {
            WellSet::from_anchors(cfg.anchors.clone(), cfg.strength_base, bounds, &mut rng)
        };

        Self::assemble(cfg, bounds, wells, element_positions, rng)
    }

    /// Like [`DriftSimulation::new`] but with an explicit well set, for
    /// tests and embedders that need reproducible initial state.
    pub fn with_wells(
        cfg: DriftConfig,
        size: Option<Vec2>,
        wells: WellSet,
        element_positions: Vec<Vec2>,
    ) -> Self {
        let mut cfg = cfg.sanitize();
        let bounds = resolve_bounds(size);
        cfg.padding = cfg.padding.min(bounds.x * 0.5).min(bounds.y * 0.5);
        Self::assemble(cfg, bounds, wells, element_positions, rand::rng())
    }

    fn assemble(
        cfg: DriftConfig,
        bounds: Vec2,
        wells: WellSet,
        element_positions: Vec<Vec2>,
        rng: rand::rngs::ThreadRng,
    ) -> Self {
        let min = Vec2::splat(cfg.padding);
        let max = (bounds - Vec2::splat(cfg.padding)).max(min);
        let drifters = element_positions
            .into_iter()
            .enumerate()
            .map(|(id, pos)| Drifter::new(pos.clamp(min, max), id))
            .collect();

        Self {
            cfg,
            bounds,
            wells,
            drifters,
            rng,
            pointer: None,
            last_tick: None,
            ticks: 0,
            stopped: false,
        }
    }

    /// Advances the simulation if the tick interval has elapsed.
    ///
    /// Skipped calls (too early, or after [`DriftSimulation::stop`]) leave
    /// all state untouched and return `false`; the host keeps its frame
    /// scheduling alive either way. A processed tick runs the interaction
    /// phase (when a pointer has been seen) and then the drift phase, and
    /// returns `true`.
    ///
    /// ### Parameters
    /// - `now` - Host clock in seconds; only differences matter.
    pub fn tick(&mut self, now: f64) -> bool {
        if self.stopped {
            return false;
        }
        if let Some(last) = self.last_tick
            && now - last < self.cfg.tick_interval_secs()
        {
            return false;
        }

        if let Some(pointer) = self.pointer {
            phases::interaction_phase(&mut self.wells, pointer, now, &self.cfg, self.bounds);
        }
        phases::drift_phase(
            &mut self.drifters,
            &self.wells,
            &self.cfg,
            self.bounds,
            &mut self.rng,
        );

        self.last_tick = Some(now);
        self.ticks += 1;
        true
    }

    /// Handles the pointer entering the container.
    ///
    /// Caches the position and, when reseed-on-hover is enabled, replaces
    /// the whole well set.
    ///
    /// ### Returns
    /// `true` when the wells were reseeded, so the host knows to rebuild
    /// its marker visuals.
    pub fn pointer_enter(&mut self, pointer: Vec2) -> bool {
        if self.stopped {
            return false;
        }
        self.pointer = Some(pointer);
        if !self.cfg.reseed_on_hover {
            return false;
        }
        self.wells
            .reseed(self.cfg.strength_base, self.bounds, &mut self.rng);
        log::debug!("reseeded {} wells on hover", self.wells.len());
        true
    }

    /// Caches the latest pointer position; the next processed tick applies it.
    pub fn pointer_move(&mut self, pointer: Vec2) {
        if !self.stopped {
            self.pointer = Some(pointer);
        }
    }

    /// Stops the simulation for good. Idempotent: further calls, ticks,
    /// and pointer events are no-ops.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn config(&self) -> &DriftConfig {
        &self.cfg
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn wells(&self) -> &WellSet {
        &self.wells
    }

    pub fn drifters(&self) -> &[Drifter] {
        &self.drifters
    }

    /// Number of processed ticks (skipped calls do not count).
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

fn resolve_bounds(size: Option<Vec2>) -> Vec2 {
    match size {
        Some(s) if s.is_finite() && s.x > 0.0 && s.y > 0.0 => s,
        _ => {
            log::warn!(
                "container size unavailable or degenerate, falling back to {}x{}",
                DEFAULT_BOUNDS.x,
                DEFAULT_BOUNDS.y
            );
            DEFAULT_BOUNDS
        }
    }
}
