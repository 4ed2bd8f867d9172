//! Interactive drift-field viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns a [`DriftSimulation`] and
//! implements [`eframe::App`] to drive it from the frame callback, feed
//! it pointer events, and paint the drifting elements and well markers.

use drift_core::config::DriftConfig;
use drift_core::interaction::InteractionMode;
use drift_core::render::{self, RenderSink};
use drift_core::sim::{DEFAULT_BOUNDS, DriftSimulation};
use drift_core::types::ElementId;
use drift_core::well::Well;
use eframe::App;
use glam::Vec2;
use rand::Rng;

/// How many drifting elements the viewer scatters into the container.
const ELEMENT_COUNT: usize = 24;

/// Retained per-element visual state, the viewer's stand-in for the
/// host-owned elements the simulation animates.
struct ElementVisual {
    pos: Vec2,
    attached: bool,
}

/// The viewer-side [`RenderSink`]: element positions and marker
/// positions, updated by [`render::sync`] every processed tick.
struct Visuals {
    elements: Vec<ElementVisual>,
    markers: Vec<Vec2>,
}

impl Visuals {
    fn new(positions: &[Vec2]) -> Self {
        Self {
            elements: positions
                .iter()
                .map(|&pos| ElementVisual { pos, attached: true })
                .collect(),
            markers: Vec::new(),
        }
    }
}

impl RenderSink for Visuals {
    fn is_attached(&self, id: ElementId) -> bool {
        self.elements.get(id).is_some_and(|e| e.attached)
    }

    fn place_element(&mut self, id: ElementId, pos: Vec2) {
        if let Some(e) = self.elements.get_mut(id) {
            e.pos = pos;
        }
    }

    fn place_markers(&mut self, wells: &[Well]) {
        self.markers = wells.iter().map(|w| w.pos).collect();
    }

    fn clear_markers(&mut self) {
        self.markers.clear();
    }
}

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - One [`DriftSimulation`] instance and its [`Visuals`] sink.
/// - A pending [`DriftConfig`] edited in the side panel and applied by
///   the Restart button (the mode of a running instance is fixed).
/// - eframe/egui callbacks for drawing and pointer plumbing.
///
/// The typical per-frame update is:
/// 1. Handle panel interactions.
/// 2. Forward pointer enter/move events into the simulation.
/// 3. If `running`, call [`DriftSimulation::tick`] with the egui clock;
///    the simulation throttles itself to its configured interval.
/// 4. Sync positions into [`Visuals`] and paint them.
pub struct Viewer {
    sim: DriftSimulation,
    visuals: Visuals,
    pending: DriftConfig,

    rng: rand::rngs::ThreadRng,

    running: bool,
    hovered: bool,
}

impl Viewer {
    /// Creates a viewer with a default configuration and a fresh scatter
    /// of elements inside the default container.
    pub fn new() -> Self {
        let mut rng = rand::rng();
        let pending = DriftConfig::default();
        let (sim, visuals) = build_sim(&pending, &mut rng);

        Self {
            sim,
            visuals,
            pending,
            rng,
            running: false,
            hovered: false,
        }
    }

    /// Tears down the current simulation instance and starts a new one
    /// from the pending configuration. The new instance gets a fresh
    /// element scatter and starts paused.
    fn restart(&mut self) {
        let (sim, visuals) = build_sim(&self.pending, &mut self.rng);
        self.sim = sim;
        self.visuals = visuals;
        self.running = false;
        self.hovered = false;
    }

    /// Stops the simulation for good: no further ticks, no further
    /// position writes, markers removed. Safe to invoke repeatedly.
    fn stop(&mut self) {
        self.sim.stop();
        self.visuals.clear_markers();
        self.running = false;
    }

    /// Helper to draw a labeled `usize` [`egui::DragValue`].
    fn labeled_drag_usize(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut usize,
        range: std::ops::RangeInclusive<usize>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel UI (run controls, restart, stop).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let can_run = !self.sim.is_stopped();

                if ui
                    .add_enabled(
                        can_run,
                        egui::Button::new(if self.running { "⏸ Pause" } else { "▶ Run" }),
                    )
                    .clicked()
                {
                    self.running = !self.running;
                }

                if ui.add_enabled(can_run, egui::Button::new("Step")).clicked() {
                    let now = ctx.input(|i| i.time);
                    if self.sim.tick(now) {
                        render::sync(&self.sim, &mut self.visuals);
                    }
                }

                if ui.button("Restart").clicked() {
                    self.restart();
                }

                if ui.button("Stop").clicked() {
                    self.stop();
                }
            });
        });
    }

    /// Builds the bottom status bar (tick count, well and element counts).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.sim.is_stopped() {
                    ui.label("stopped");
                    ui.separator();
                }
                ui.label(format!("mode = {:?}", self.sim.config().mode));
                ui.label(format!("ticks = {}", self.sim.ticks()));
                ui.separator();
                ui.label(format!("wells = {}", self.sim.wells().len()));
                ui.label(format!("elements = {}", self.sim.drifters().len()));
            });
        });
    }

    /// Builds the right-hand configuration panel. Edits land in the
    /// pending config and take effect on Restart.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Config");
                ui.label("applies on Restart");

                ui.separator();
                ui.label("Interaction");
                egui::ComboBox::from_label("mode")
                    .selected_text(format!("{:?}", self.pending.mode))
                    .show_ui(ui, |ui| {
                        for mode in InteractionMode::ALL {
                            ui.selectable_value(
                                &mut self.pending.mode,
                                mode,
                                format!("{:?}", mode),
                            );
                        }
                    });
                Self::labeled_drag_f32(
                    ui,
                    "follow_speed:",
                    &mut self.pending.follow_speed,
                    0.0..=1.0,
                    0.005,
                );
                ui.checkbox(&mut self.pending.reseed_on_hover, "reseed on hover");

                ui.separator();
                ui.label("Wells");
                Self::labeled_drag_usize(
                    ui,
                    "well_count:",
                    &mut self.pending.well_count,
                    0..=16,
                    1.0,
                );
                Self::labeled_drag_f32(
                    ui,
                    "strength_base:",
                    &mut self.pending.strength_base,
                    0.0..=4.0,
                    0.05,
                );
                ui.checkbox(&mut self.pending.show_wells, "show wells");
                ui.horizontal(|ui| {
                    ui.label("marker color:");
                    let [r, g, b, a] = self.pending.marker_color;
                    let mut color = egui::Color32::from_rgba_unmultiplied(r, g, b, a);
                    ui.color_edit_button_srgba(&mut color);
                    self.pending.marker_color = color.to_array();
                });

                ui.separator();
                ui.label("Integration");
                Self::labeled_drag_f32(
                    ui,
                    "tick_interval_ms:",
                    &mut self.pending.tick_interval_ms,
                    1.0..=200.0,
                    1.0,
                );
                Self::labeled_drag_f32(
                    ui,
                    "noise_amplitude:",
                    &mut self.pending.noise_amplitude,
                    0.0..=8.0,
                    0.05,
                );
                Self::labeled_drag_f32(
                    ui,
                    "damping:",
                    &mut self.pending.damping,
                    0.0..=1.0,
                    0.005,
                );
                Self::labeled_drag_f32(
                    ui,
                    "max_force:",
                    &mut self.pending.max_force,
                    0.0..=10.0,
                    0.05,
                );

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    self.pending = DriftConfig::default();
                }
            });
    }

    /// Builds the central panel: the container outline, the drifting
    /// elements, the well markers, and the pointer plumbing.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
            let rect = response.rect;
            let painter = ui.painter_at(rect);
            let origin = rect.left_top();

            // Pointer events, mapped into container space. Enter fires on
            // the hover edge and may reseed; moves only cache the position.
            match response.hover_pos() {
                Some(pos) => {
                    let p = to_container(pos, origin);
                    if self.hovered {
                        self.sim.pointer_move(p);
                    } else if self.sim.pointer_enter(p) {
                        // Reseeded: drop the stale markers until the next
                        // sync repopulates them from the new set.
                        self.visuals.clear_markers();
                    }
                    self.hovered = true;
                }
                None => self.hovered = false,
            }

            // Advance the simulation; it throttles itself to the
            // configured tick interval.
            if self.running && !self.sim.is_stopped() {
                let now = ctx.input(|i| i.time);
                if self.sim.tick(now) {
                    render::sync(&self.sim, &mut self.visuals);
                }
                ctx.request_repaint();
            }

            // Container outline.
            let bounds = self.sim.bounds();
            let container = egui::Rect::from_min_size(origin, egui::vec2(bounds.x, bounds.y));
            painter.rect_stroke(
                container,
                egui::CornerRadius::ZERO,
                egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
                egui::StrokeKind::Inside,
            );

            // Drifting elements.
            for e in self.visuals.elements.iter().filter(|e| e.attached) {
                let p = origin + egui::vec2(e.pos.x, e.pos.y);
                painter.circle_filled(p, 6.0, egui::Color32::LIGHT_BLUE);
            }

            // Well markers.
            let [r, g, b, a] = self.sim.config().marker_color;
            let marker_color = egui::Color32::from_rgba_unmultiplied(r, g, b, a);
            for m in &self.visuals.markers {
                let p = origin + egui::vec2(m.x, m.y);
                painter.circle_stroke(p, 4.0, egui::Stroke::new(2.0, marker_color));
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}

/// Converts a screen-space hover position into container space.
fn to_container(pos: egui::Pos2, origin: egui::Pos2) -> Vec2 {
    Vec2::new(pos.x - origin.x, pos.y - origin.y)
}

/// Builds a simulation and its matching visuals from a configuration,
/// scattering one element per visual uniformly inside the container.
fn build_sim(cfg: &DriftConfig, rng: &mut impl Rng) -> (DriftSimulation, Visuals) {
    let positions: Vec<Vec2> = (0..ELEMENT_COUNT)
        .map(|_| {
            Vec2::new(
                rng.random_range(0.0..=DEFAULT_BOUNDS.x),
                rng.random_range(0.0..=DEFAULT_BOUNDS.y),
            )
        })
        .collect();

    let sim = DriftSimulation::new(cfg.clone(), Some(DEFAULT_BOUNDS), positions.clone());
    // Seed the visuals from the simulation's clamped positions so the
    // first painted frame matches the first tick's inputs.
    let clamped: Vec<Vec2> = sim.drifters().iter().map(|d| d.pos).collect();
    (sim, Visuals::new(&clamped))
}
