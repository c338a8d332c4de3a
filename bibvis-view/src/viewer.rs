//! Interactive bibliography cluster viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the diagram and simulation
//! configuration and implements [`eframe::App`]. It plays every host role
//! the layout core leaves external: the frame loop that steps the
//! simulation, the draw context (egui painter), and the highlight driver
//! that reacts to pointer hover and clicks.

use bibvis_core::{
    config::Config,
    diagram::Diagram,
    highlight::{self, Color, NodeHighlight, SetHighlight},
    phases,
    types::{NodeId, SetId},
};
use eframe::App;
use glam::Vec2;

use crate::demo;

/// Screen-space tolerance, in points, for picking a set's outline ring.
const RING_PICK_TOLERANCE: f32 = 6.0;

/// Main application state for the interactive viewer.
///
/// The per-frame update is:
/// 1. Handle pointer input: pan, zoom, hover, selection clicks.
/// 2. If `running` and enough time has passed, advance the tick counter
///    and call [`phases::step`].
/// 3. Draw sets (outline, leader line, title) behind nodes, with styles
///    resolved through the highlight mappings.
pub struct Viewer {
    diagram: Diagram,
    cfg: Config,
    /// Elapsed simulation ticks since the last reset.
    t: u64,

    rng: rand::rngs::ThreadRng,

    running: bool,
    zoom: f32,
    pan: egui::Vec2,

    /// Node whose entry is pinned in the other views.
    selected_node: Option<NodeId>,
    /// Set selection; cross-filters nodes of all other sets to Inactive.
    selected_set: Option<SetId>,

    step_interval: f64,
    last_step_time: f64,
}

impl Viewer {
    /// Creates a viewer seeded with the demo bibliography.
    pub fn new() -> Self {
        let mut rng = rand::rng();
        let diagram = demo::demo_diagram(&mut rng);
        log::info!(
            "built demo diagram: {} sets, {} nodes",
            diagram.sets.len(),
            diagram.nodes.len()
        );

        Self {
            diagram,
            cfg: Config::default(),
            t: 0,
            rng,
            running: true,
            zoom: 1.0,
            pan: egui::vec2(0.0, 0.0),
            selected_node: None,
            selected_set: None,
            step_interval: 1.0 / 60.0,
            last_step_time: 0.0,
        }
    }

    /// Rebuilds the demo diagram and restarts the simulation clock.
    ///
    /// Diagrams are rebuilt wholesale rather than edited in place; this
    /// is the same path the full tool takes when the filtered entry
    /// selection changes.
    fn reset(&mut self) {
        self.diagram = demo::demo_diagram(&mut self.rng);
        self.t = 0;
        self.selected_node = None;
        self.selected_set = None;
        self.running = true;
        log::info!("diagram rebuilt");
    }

    /// Advances the simulation by one tick.
    fn step_once(&mut self) {
        phases::step(&mut self.diagram, &self.cfg, self.t, &mut self.rng);
        self.t += 1;
    }

    /// Converts a world-space position to screen-space.
    ///
    /// World coordinates are scaled by `zoom`, offset by `pan`, and then
    /// centered inside the given `rect`.
    fn world_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let center = rect.center();
        egui::pos2(
            center.x + p.x * self.zoom + self.pan.x,
            center.y + p.y * self.zoom + self.pan.y,
        )
    }

    /// Inverse of [`Viewer::world_to_screen`] up to floating point
    /// rounding.
    fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let center = rect.center();
        Vec2::new(
            (p.x - center.x - self.pan.x) / self.zoom,
            (p.y - center.y - self.pan.y) / self.zoom,
        )
    }

    /// Topmost node under `world`, if any. Later nodes draw on top, so
    /// search back to front.
    fn node_at(&self, world: Vec2) -> Option<NodeId> {
        self.diagram
            .nodes
            .iter()
            .rposition(|n| n.pos.distance(world) <= self.cfg.node_radius)
    }

    /// Set whose outline ring passes under `world`, if any.
    fn set_at(&self, world: Vec2) -> Option<SetId> {
        let tolerance = RING_PICK_TOLERANCE / self.zoom;
        self.diagram
            .sets
            .iter()
            .rposition(|s| (s.pos.distance(world) - s.radius).abs() <= tolerance)
    }

    /// Writes the highlight state of every entity from the current hover
    /// and selection. The core never transitions highlights itself.
    fn refresh_highlights(&mut self, hovered_node: Option<NodeId>, hovered_set: Option<SetId>) {
        for (i, node) in self.diagram.nodes.iter_mut().enumerate() {
            node.highlight = if hovered_node == Some(i) {
                NodeHighlight::Hover
            } else if self.selected_set.is_some_and(|s| s != node.set) {
                NodeHighlight::Inactive
            } else if self.selected_node == Some(i) {
                NodeHighlight::Selected
            } else {
                NodeHighlight::None
            };
        }
        for (i, set) in self.diagram.sets.iter_mut().enumerate() {
            set.highlight = if hovered_set == Some(i) {
                SetHighlight::Hover
            } else if self.selected_set == Some(i) {
                SetHighlight::Selected
            } else {
                SetHighlight::None
            };
        }
    }

    fn color32(c: Color) -> egui::Color32 {
        egui::Color32::from_rgb(c.r, c.g, c.b)
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

    /// Builds the top panel UI (run controls, stepping, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                if ui.button("Step").clicked() {
                    self.step_once();
                }

                if ui.button("Rebuild").clicked() {
                    self.reset();
                }

                ui.separator();
                ui.add(egui::Slider::new(&mut self.zoom, 0.1..=10.0).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar (tick counter, entity counts).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("t = {}", self.t));
                if self.cfg.frozen(self.t) {
                    ui.label("(settled)");
                }
                ui.separator();
                ui.label(format!("sets = {}", self.diagram.sets.len()));
                ui.label(format!("entries = {}", self.diagram.nodes.len()));
            });
        });
    }

    /// Builds the right-hand configuration panel for simulation tuning.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                ui.separator();
                ui.label("Settling");
                ui.horizontal(|ui| {
                    ui.label("freeze_after:");
                    ui.add(
                        egui::DragValue::new(&mut self.cfg.freeze_after)
                            .range(0..=3600)
                            .speed(10.0),
                    );
                });
                Self::labeled_drag_f32(ui, "step_decay:", &mut self.cfg.step_decay, 1.0..=1000.0, 1.0);

                ui.separator();
                ui.label("Motion");
                Self::labeled_drag_f32(ui, "damping:", &mut self.cfg.damping, 0.0..=1.0, 0.01);
                Self::labeled_drag_f32(
                    ui,
                    "node_speed_cap:",
                    &mut self.cfg.node_speed_cap,
                    0.0..=50.0,
                    0.5,
                );
                Self::labeled_drag_f32(
                    ui,
                    "set_speed_cap:",
                    &mut self.cfg.set_speed_cap,
                    0.0..=50.0,
                    0.5,
                );

                ui.separator();
                ui.label("Forces");
                Self::labeled_drag_f32(
                    ui,
                    "set_repulsion:",
                    &mut self.cfg.set_repulsion,
                    0.0..=20.0,
                    0.1,
                );
                Self::labeled_drag_f32(
                    ui,
                    "node_pull_divisor:",
                    &mut self.cfg.node_pull_divisor,
                    100.0..=100_000.0,
                    100.0,
                );
                Self::labeled_drag_f32(
                    ui,
                    "target_pull_divisor:",
                    &mut self.cfg.target_pull_divisor,
                    1000.0..=1_000_000.0,
                    1000.0,
                );
                Self::labeled_drag_f32(
                    ui,
                    "horizontal_pull:",
                    &mut self.cfg.horizontal_pull,
                    0.0..=1.0,
                    0.01,
                );

                ui.separator();
                ui.label("Geometry");
                Self::labeled_drag_f32(ui, "min_radius:", &mut self.cfg.min_radius, 1.0..=100.0, 1.0);
                Self::labeled_drag_f32(
                    ui,
                    "radius_margin:",
                    &mut self.cfg.radius_margin,
                    0.0..=100.0,
                    1.0,
                );

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    self.cfg = Config::default();
                }
            });
    }

    /// Draws the diagram: set circles with leader lines and titles first,
    /// node circles on top.
    fn draw_diagram(&self, painter: &egui::Painter, rect: egui::Rect) {
        for set in &self.diagram.sets {
            let style = set.highlight.style();
            let color = Self::color32(style.color);
            let center = self.world_to_screen(set.pos, rect);
            painter.circle_stroke(
                center,
                set.radius * self.zoom,
                egui::Stroke::new(style.line_width, color),
            );

            let anchor = set.label_anchor();
            let start = set.leader_start(anchor);
            painter.line_segment(
                [
                    self.world_to_screen(start, rect),
                    self.world_to_screen(anchor, rect),
                ],
                egui::Stroke::new(1.0, color),
            );
            painter.text(
                self.world_to_screen(anchor, rect),
                egui::Align2::LEFT_BOTTOM,
                &set.title,
                egui::FontId::proportional(highlight::TITLE_FONT_SIZE * self.zoom),
                color,
            );
        }

        for node in &self.diagram.nodes {
            let style = node.highlight.style();
            let center = self.world_to_screen(node.pos, rect);
            painter.circle(
                center,
                self.cfg.node_radius * self.zoom,
                Self::color32(style.fill),
                egui::Stroke::new(1.0, Self::color32(style.stroke)),
            );
        }
    }

    /// Builds the central panel: input handling, stepping, drawing.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            // Pan with drag.
            if response.dragged() {
                self.pan += response.drag_delta();
            }

            let hover_world = response.hover_pos().map(|p| self.screen_to_world(p, rect));
            let hovered_node = hover_world.and_then(|w| self.node_at(w));
            // Nodes occlude set rings for picking.
            let hovered_set = hover_world
                .filter(|_| hovered_node.is_none())
                .and_then(|w| self.set_at(w));

            if response.clicked() {
                if let Some(node) = hovered_node {
                    self.selected_node =
                        (self.selected_node != Some(node)).then_some(node);
                } else if let Some(set) = hovered_set {
                    self.selected_set = (self.selected_set != Some(set)).then_some(set);
                } else {
                    self.selected_node = None;
                    self.selected_set = None;
                }
            }

            self.refresh_highlights(hovered_node, hovered_set);

            // Zoom around the mouse cursor.
            let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                let pointer_screen = response.hover_pos().unwrap_or(rect.center());
                let world_before = self.screen_to_world(pointer_screen, rect);

                let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                self.zoom = (self.zoom * factor).clamp(0.1, 10.0);

                let screen_after = self.world_to_screen(world_before, rect);
                self.pan += pointer_screen - screen_after;
            }

            self.draw_diagram(&painter, rect);

            // Auto-run the simulation.
            if self.running {
                let now = ctx.input(|i| i.time);
                if now - self.last_step_time >= self.step_interval {
                    self.step_once();
                    self.last_step_time = now;
                }
                ctx.request_repaint();
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

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn world_to_screen_and_back_is_roundtrip() {
        let mut viewer = Viewer::new();
        viewer.zoom = 2.0;
        viewer.pan = egui::vec2(15.0, -7.0);
        let rect = test_rect();

        let world_points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, -5.0),
            Vec2::new(-3.5, 8.25),
        ];

        let eps = 1e-4;
        for p in world_points {
            let screen = viewer.world_to_screen(p, rect);
            let back = viewer.screen_to_world(screen, rect);
            assert!(
                (back.x - p.x).abs() < eps && (back.y - p.y).abs() < eps,
                "roundtrip mismatch: p={p:?}, back={back:?}"
            );
        }
    }

    #[test]
    fn reset_restarts_the_clock_and_clears_selection() {
        let mut viewer = Viewer::new();
        for _ in 0..30 {
            viewer.step_once();
        }
        viewer.selected_node = Some(0);
        viewer.selected_set = Some(1);

        viewer.reset();

        assert_eq!(viewer.t, 0);
        assert!(viewer.selected_node.is_none());
        assert!(viewer.selected_set.is_none());
        assert!(!viewer.diagram.sets.is_empty());
        assert!(!viewer.diagram.nodes.is_empty());
    }

    #[test]
    fn hover_and_selection_drive_highlights() {
        let mut viewer = Viewer::new();
        viewer.selected_set = Some(0);

        viewer.refresh_highlights(Some(0), None);

        assert_eq!(viewer.diagram.nodes[0].highlight, NodeHighlight::Hover);
        assert_eq!(viewer.diagram.sets[0].highlight, SetHighlight::Selected);
        // Every node outside the selected set is filtered out.
        for node in &viewer.diagram.nodes {
            if node.set != 0 && node.highlight != NodeHighlight::Hover {
                assert_eq!(node.highlight, NodeHighlight::Inactive);
            }
        }
    }

    #[test]
    fn node_picking_prefers_the_topmost_node() {
        let mut viewer = Viewer::new();
        let pos = viewer.diagram.nodes[0].pos;
        // Stack another node exactly on top of node 0.
        let last = viewer.diagram.nodes.len() - 1;
        viewer.diagram.nodes[last].pos = pos;

        assert_eq!(viewer.node_at(pos), Some(last));
    }
}
