use crate::interaction::InteractionMode;
use glam::Vec2;

#[derive(Clone, Debug)]
pub struct DriftConfig {
    pub well_count: usize,
    pub strength_base: f32,
    pub noise_amplitude: f32,
    pub tick_interval_ms: f32,
    pub mode: InteractionMode,
    pub follow_speed: f32,
    pub show_wells: bool,
    pub marker_color: [u8; 4],
    /// Normalized anchor points in `(0..1, 0..1)`. Non-empty takes
    /// precedence over `well_count`.
    pub anchors: Vec<Vec2>,
    pub reseed_on_hover: bool,

    pub orbit_radius_base: f32,
    pub orbit_radius_scale: f32,
    pub max_force: f32,
    pub damping: f32,
    pub restitution: f32,
    pub padding: f32,
    pub core_gain: f32,
    pub tangent_gain: f32,
    pub spring_gain: f32,
    pub pull_gain: f32,
    pub repel_radius: f32,
    pub orbit_angular_speed: f32,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            well_count: 4,
            strength_base: 1.0,
            noise_amplitude: 0.4,
            tick_interval_ms: 16.0,
            mode: InteractionMode::Follow,
            follow_speed: 0.08,
            show_wells: true,
            marker_color: [220, 120, 40, 255],
            anchors: Vec::new(),
            reseed_on_hover: false,

            orbit_radius_base: 40.0,
            orbit_radius_scale: 40.0,
            max_force: 1.5,
            damping: 0.92,
            restitution: 0.5,
            padding: 12.0,
            core_gain: 0.08,
            tangent_gain: 0.35,
            spring_gain: 0.03,
            pull_gain: 0.3,
            repel_radius: 120.0,
            orbit_angular_speed: 1.6,
        }
    }
}

impl DriftConfig {
    /// Tick interval in seconds, the unit used by [`crate::sim::DriftSimulation::tick`].
    pub fn tick_interval_secs(&self) -> f64 {
        f64::from(self.tick_interval_ms) / 1000.0
    }

    /// Clamps out-of-range values once, at construction time.
    ///
    /// Negative (or NaN) magnitudes floor at zero, the tick interval floors
    /// at 1 ms, and damping is kept inside `[0, 1]`. After this call every
    /// numeric field satisfies the ranges the rest of the crate assumes.
    pub fn sanitize(mut self) -> Self {
        self.strength_base = self.strength_base.max(0.0);
        self.noise_amplitude = self.noise_amplitude.max(0.0);
        self.tick_interval_ms = self.tick_interval_ms.max(1.0);
        self.follow_speed = self.follow_speed.max(0.0);
        self.orbit_radius_base = self.orbit_radius_base.max(0.0);
        self.orbit_radius_scale = self.orbit_radius_scale.max(0.0);
        self.max_force = self.max_force.max(0.0);
        self.damping = self.damping.min(1.0).max(0.0);
        self.restitution = self.restitution.min(1.0).max(0.0);
        self.padding = self.padding.max(0.0);
        self.core_gain = self.core_gain.max(0.0);
        self.tangent_gain = self.tangent_gain.max(0.0);
        self.spring_gain = self.spring_gain.max(0.0);
        self.pull_gain = self.pull_gain.max(0.0);
        self.repel_radius = self.repel_radius.max(0.0);
        self
    }
}
