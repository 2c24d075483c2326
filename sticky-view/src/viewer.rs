//! Interactive stick-figure viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the current figure and the
//! generator settings, and implements [`eframe::App`] to draw the figure's
//! segments and expose the controls through an egui UI.

use eframe::App;
use glam::Vec2;
use rand::rng;
use sticky_core::{
    Order, Renderer, Segment, StickFigure, config::PatternConfig, export, patterns::Pattern,
};
use tracing::{error, info};

/// Deepest level the UI lets you build; the trunk tree doubles per level.
const MAX_DEPTH: u32 = 16;

/// Maps figure space (y up) to screen space (y down).
///
/// ### Fields
/// - `zoom` - Screen pixels per figure unit.
/// - `pan` - Screen-space offset in pixels, applied after zooming.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub zoom: f32,
    pub pan: egui::Vec2,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: egui::vec2(0.0, 0.0),
        }
    }
}

impl Camera {
    /// Converts a figure-space position to screen-space.
    ///
    /// Positions are scaled by `zoom`, offset by `pan`, and centered inside
    /// `rect`. The y-axis is flipped so that positive y goes up.
    pub fn world_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let center = rect.center();
        egui::pos2(
            center.x + p.x * self.zoom + self.pan.x,
            center.y - p.y * self.zoom + self.pan.y,
        )
    }

    /// Inverse of [`Camera::world_to_screen`] (up to floating point
    /// rounding).
    pub fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let center = rect.center();
        let x = (p.x - center.x - self.pan.x) / self.zoom;
        let y = (center.y - p.y + self.pan.y) / self.zoom;
        Vec2::new(x, y)
    }

    /// Zooms and pans so that the box `(lo, hi)` fills most of `rect`.
    ///
    /// A degenerate box keeps the current zoom and only recenters.
    pub fn fit(&mut self, (lo, hi): (Vec2, Vec2), rect: egui::Rect) {
        if !(lo.is_finite() && hi.is_finite()) {
            return;
        }
        let size = hi - lo;
        if size.x > f32::EPSILON || size.y > f32::EPSILON {
            let zx = rect.width() / size.x.max(f32::EPSILON);
            let zy = rect.height() / size.y.max(f32::EPSILON);
            self.zoom = (zx.min(zy) * 0.9).clamp(0.01, 100.0);
        }
        let mid = (lo + hi) * 0.5;
        self.pan = egui::vec2(-mid.x * self.zoom, mid.y * self.zoom);
    }
}

/// Strokes segments onto an egui painter, in figure space.
struct PainterRenderer<'a> {
    painter: &'a egui::Painter,
    camera: Camera,
    rect: egui::Rect,
    stroke: egui::Stroke,
}

impl Renderer for PainterRenderer<'_> {
    fn line(&mut self, segment: Segment) {
        let a = self.camera.world_to_screen(segment.from, self.rect);
        let b = self.camera.world_to_screen(segment.to, self.rect);
        self.painter.line_segment([a, b], self.stroke);
    }
}

/// Main application state for the interactive viewer.
///
/// ### Fields
/// - `figure` - The figure currently on screen.
/// - `pattern` / `depth` / `cfg` - Generator inputs used by [`Viewer::rebuild`].
/// - `order` - Segment order; together with `reveal` it controls the
///   progressive drawing.
/// - `reveal` - How many segments (in `order`) are drawn.
/// - `rng` - Random number generator for the random bush.
/// - `camera` - Pan/zoom state.
/// - `fit_pending` - Fit the camera to the figure on the next frame.
/// - `export_path` - Target file for the segment export.
/// - `status` - Last user-facing message (export result or error).
pub struct Viewer {
    figure: StickFigure,
    pattern: Pattern,
    depth: u32,
    cfg: PatternConfig,
    order: Order,
    reveal: usize,

    rng: rand::rngs::ThreadRng,

    camera: Camera,
    fit_pending: bool,

    export_path: String,
    status: Option<String>,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewer {
    /// Creates a viewer showing the default pattern at depth 10.
    pub fn new() -> Self {
        let mut viewer = Self {
            figure: StickFigure::new(),
            pattern: Pattern::default(),
            depth: 10,
            cfg: PatternConfig::default(),
            order: Order::default(),
            reveal: 0,
            rng: rng(),
            camera: Camera::default(),
            fit_pending: true,
            export_path: String::from("sticky-segments.txt"),
            status: None,
        };
        viewer.rebuild();
        viewer
    }

    fn segment_count(&self) -> usize {
        self.figure.node_count().saturating_sub(1)
    }

    /// Regenerates the figure from the current pattern, depth and config.
    ///
    /// On success every segment is revealed and the camera is refit on the
    /// next frame. On failure the previous figure is kept and the error is
    /// shown in the status bar.
    fn rebuild(&mut self) {
        match self.pattern.build(self.depth, &self.cfg, &mut self.rng) {
            Ok(figure) => {
                info!(
                    pattern = self.pattern.label(),
                    depth = self.depth,
                    nodes = figure.node_count(),
                    "figure rebuilt"
                );
                self.figure = figure;
                self.reveal = self.segment_count();
                self.fit_pending = true;
                self.status = None;
            }
            Err(e) => {
                error!(%e, "failed to build figure");
                self.status = Some(format!("build failed: {e}"));
            }
        }
    }

    fn export(&mut self) {
        match export::save_segments(&self.figure, self.order, &self.export_path) {
            Ok(count) => {
                self.status = Some(format!(
                    "wrote {count} segments to {}",
                    self.export_path
                ));
            }
            Err(e) => {
                error!(%e, path = %self.export_path, "export failed");
                self.status = Some(format!("export failed: {e}"));
            }
        }
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) -> bool {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed))
                .changed()
        })
        .inner
    }

    /// Builds the top panel UI (pattern, depth, order, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let before = (self.pattern, self.depth);

                egui::ComboBox::from_id_salt("pattern")
                    .selected_text(self.pattern.label())
                    .show_ui(ui, |ui| {
                        for p in Pattern::ALL {
                            ui.selectable_value(&mut self.pattern, p, p.label());
                        }
                    });

                ui.add(
                    egui::DragValue::new(&mut self.depth)
                        .prefix("depth = ")
                        .range(0..=MAX_DEPTH),
                );

                if (self.pattern, self.depth) != before {
                    self.rebuild();
                }

                if ui.button("Regrow").clicked() {
                    self.rebuild();
                }

                ui.separator();

                let order_before = self.order;
                egui::ComboBox::from_id_salt("order")
                    .selected_text(self.order.label())
                    .show_ui(ui, |ui| {
                        for o in Order::ALL {
                            ui.selectable_value(&mut self.order, o, o.label());
                        }
                    });
                if self.order != order_before {
                    self.reveal = self.segment_count();
                }

                let total = self.segment_count();
                ui.add(egui::Slider::new(&mut self.reveal, 0..=total).text("Reveal"));

                ui.separator();
                if ui.button("Fit").clicked() {
                    self.fit_pending = true;
                }
                ui.add(
                    egui::Slider::new(&mut self.camera.zoom, 0.01..=100.0)
                        .logarithmic(true)
                        .text("Zoom"),
                );
            });
        });
    }

    /// Builds the bottom status bar (node count, height, last message).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("height = {}", self.figure.height()));
                ui.label(format!("segments = {}", self.segment_count()));
                ui.label(format!("nodes = {}", self.figure.node_count()));
                if let Some(msg) = &self.status {
                    ui.separator();
                    ui.label(msg);
                }
            });
        });
    }

    /// Builds the right-hand panel for generator parameters and export.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Pattern");

                let mut changed = false;

                ui.separator();
                ui.label("Trunk");
                changed |= Self::labeled_drag_f32(
                    ui,
                    "trunk_len:",
                    &mut self.cfg.trunk_len,
                    0.0..=500.0,
                    1.0,
                );
                changed |= Self::labeled_drag_f32(
                    ui,
                    "short_trunk_len:",
                    &mut self.cfg.short_trunk_len,
                    0.0..=500.0,
                    1.0,
                );
                ui.horizontal(|ui| {
                    ui.label("short_trunk_from:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut self.cfg.short_trunk_from)
                                .range(0..=MAX_DEPTH),
                        )
                        .changed();
                });

                ui.separator();
                ui.label("Branches");
                changed |= Self::labeled_drag_f32(
                    ui,
                    "left_scale:",
                    &mut self.cfg.left_scale,
                    -2.0..=2.0,
                    0.01,
                );
                changed |= Self::labeled_drag_f32(
                    ui,
                    "right_scale:",
                    &mut self.cfg.right_scale,
                    -2.0..=2.0,
                    0.01,
                );
                changed |= Self::labeled_drag_f32(
                    ui,
                    "left_angle (rad):",
                    &mut self.cfg.left_angle,
                    -std::f32::consts::TAU..=std::f32::consts::TAU,
                    0.01,
                );
                changed |= Self::labeled_drag_f32(
                    ui,
                    "right_angle (rad):",
                    &mut self.cfg.right_angle,
                    -std::f32::consts::TAU..=std::f32::consts::TAU,
                    0.01,
                );
                changed |= Self::labeled_drag_f32(
                    ui,
                    "jitter (rad):",
                    &mut self.cfg.jitter,
                    0.0..=std::f32::consts::PI,
                    0.01,
                );

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    self.cfg = PatternConfig::default();
                    changed = true;
                }

                if changed {
                    self.rebuild();
                }

                ui.separator();
                ui.heading("Export");
                ui.text_edit_singleline(&mut self.export_path);
                if ui.button("Save segments").clicked() {
                    self.export();
                }
            });
    }

    /// Builds the central panel where the figure is drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            if self.fit_pending {
                self.camera.fit(self.figure.bounds(), rect);
                self.fit_pending = false;
            }

            // Pan with drag.
            if response.dragged() {
                self.camera.pan += response.drag_delta();
            }

            // Zoom around the mouse cursor.
            let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                let pointer_screen = response.hover_pos().unwrap_or(rect.center());
                let world_before = self.camera.screen_to_world(pointer_screen, rect);

                let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                self.camera.zoom = (self.camera.zoom * factor).clamp(0.01, 100.0);

                let screen_after = self.camera.world_to_screen(world_before, rect);
                self.camera.pan += pointer_screen - screen_after;
            }

            let mut renderer = PainterRenderer {
                painter: &painter,
                camera: self.camera,
                rect,
                stroke: egui::Stroke::new(1.0, egui::Color32::LIGHT_GREEN),
            };
            for segment in self.figure.segments(self.order).take(self.reveal) {
                renderer.line(segment);
            }

            let root = self.camera.world_to_screen(self.figure.root_pos(), rect);
            painter.circle_filled(root, 3.0, egui::Color32::LIGHT_RED);
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
    use glam::Vec2;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn world_to_screen_and_back_is_roundtrip() {
        let camera = Camera {
            zoom: 2.0,
            pan: egui::vec2(15.0, -7.0),
        };
        let rect = test_rect();

        let world_points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, -5.0),
            Vec2::new(-3.5, 8.25),
        ];

        let eps = 1e-4;

        for p in world_points {
            let screen = camera.world_to_screen(p, rect);
            let back = camera.screen_to_world(screen, rect);

            assert!(
                (back.x - p.x).abs() < eps && (back.y - p.y).abs() < eps,
                "roundtrip mismatch: p={:?}, back={:?}",
                p,
                back
            );
        }
    }

    #[test]
    fn fit_centers_bounds_in_rect() {
        let mut camera = Camera::default();
        let rect = test_rect();
        camera.fit((Vec2::new(-100.0, 0.0), Vec2::new(100.0, 300.0)), rect);

        // Height is the limiting axis: 600 / 300 * 0.9.
        assert!((camera.zoom - 1.8).abs() < 1e-4);

        let mid = camera.world_to_screen(Vec2::new(0.0, 150.0), rect);
        assert!((mid.x - rect.center().x).abs() < 1e-3);
        assert!((mid.y - rect.center().y).abs() < 1e-3);
    }

    #[test]
    fn fit_on_single_point_keeps_zoom() {
        let mut camera = Camera {
            zoom: 3.0,
            pan: egui::vec2(0.0, 0.0),
        };
        camera.fit((Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0)), test_rect());
        assert_eq!(camera.zoom, 3.0);
        assert_eq!(camera.pan, egui::vec2(-15.0, 15.0));
    }

    #[test]
    fn new_viewer_reveals_whole_figure() {
        let viewer = Viewer::new();
        assert_eq!(viewer.figure.node_count(), 1 << 10);
        assert_eq!(viewer.reveal, viewer.figure.node_count() - 1);
        assert!(viewer.fit_pending);
        assert!(viewer.status.is_none());
    }

    #[test]
    fn rebuild_uses_current_pattern_and_depth() {
        let mut viewer = Viewer::new();
        viewer.pattern = Pattern::Fork;
        viewer.depth = 2;
        viewer.reveal = 0;
        viewer.fit_pending = false;

        viewer.rebuild();

        assert_eq!(viewer.figure.node_count(), 7);
        assert_eq!(viewer.reveal, 6);
        assert!(viewer.fit_pending);
    }

    #[test]
    fn export_writes_segments_and_reports_status() {
        let mut viewer = Viewer::new();
        viewer.pattern = Pattern::Trunk;
        viewer.depth = 2;
        viewer.rebuild();

        let path = std::env::temp_dir().join(format!("sticky-view-{}.txt", std::process::id()));
        viewer.export_path = path.display().to_string();
        viewer.export();

        let text = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(text.lines().count(), 3);
        assert!(viewer.status.as_deref().unwrap().starts_with("wrote 3 segments"));
    }

    #[test]
    fn export_failure_is_reported() {
        let mut viewer = Viewer::new();
        viewer.export_path = String::from("/nonexistent-dir/for/sure/out.txt");
        viewer.export();
        assert!(viewer.status.as_deref().unwrap().starts_with("export failed"));
    }
}
