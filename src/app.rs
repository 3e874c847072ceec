use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Instant;

use tracing::*;

use crate::config::{AppConfig, DisplayConfig};
use crate::core::blend::compute_blend;
use crate::core::catalog::ModeCatalog;
use crate::core::mode::PlateShape;
use crate::core::sampler::FieldSampler;
use crate::core::summary::summarize;
use crate::ui::viewdata::UiFrame;

/// Immutable parameter set for one recomputation. The app holds the current
/// value and replaces it wholesale when the UI edits it; the pipeline never
/// sees partial updates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimParams {
    pub shape: PlateShape,
    pub drive_hz: f32,
    pub plate_size: f32,
    pub resolution: usize,
    pub threshold_fraction: f32,
}

impl SimParams {
    pub fn from_config(cfg: &AppConfig) -> Self {
        Self {
            shape: cfg.startup.shape,
            drive_hz: cfg.startup.drive_hz,
            plate_size: cfg.startup.plate_size.max(0.05),
            resolution: cfg.sampling.resolution,
            threshold_fraction: cfg.sampling.threshold_fraction,
        }
    }
}

pub struct App {
    params: SimParams,
    last_computed: Option<SimParams>,
    // One cached catalog per shape; only eigen_hz mutates after build.
    square_catalog: ModeCatalog,
    circle_catalog: ModeCatalog,
    sampler: FieldSampler,
    frame: UiFrame,
    display: DisplayConfig,
    exiting: Arc<AtomicBool>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, cfg: AppConfig, stop_flag: Arc<AtomicBool>) -> Self {
        let params = SimParams::from_config(&cfg);
        cc.egui_ctx.set_pixels_per_point(1.25);

        Self {
            params,
            last_computed: None,
            square_catalog: ModeCatalog::build(PlateShape::Square),
            circle_catalog: ModeCatalog::build(PlateShape::Circle),
            sampler: FieldSampler::new(params.resolution),
            frame: UiFrame::empty(),
            display: cfg.display,
            exiting: stop_flag,
        }
    }

    fn catalog_mut(&mut self, shape: PlateShape) -> &mut ModeCatalog {
        match shape {
            PlateShape::Square => &mut self.square_catalog,
            PlateShape::Circle => &mut self.circle_catalog,
        }
    }

    /// Run the full pipeline for the current parameter set, if it changed.
    fn recompute_if_needed(&mut self) {
        if self.last_computed == Some(self.params) {
            return;
        }
        let params = self.params;
        let started = Instant::now();

        self.sampler.set_resolution(params.resolution);
        let catalog = self.catalog_mut(params.shape);
        catalog.set_plate_size(params.plate_size);

        let blend = compute_blend(params.shape, params.drive_hz, params.plate_size, catalog);
        let summary = summarize(&blend, catalog);
        let eigen_hz: Vec<f32> = catalog.modes.iter().map(|m| m.eigen_hz).collect();
        let mode_labels: Vec<(u8, u8)> = catalog.modes.iter().map(|m| (m.m, m.n)).collect();

        let catalog = match params.shape {
            PlateShape::Square => &self.square_catalog,
            PlateShape::Circle => &self.circle_catalog,
        };
        let field = self
            .sampler
            .sample(&blend, catalog, params.threshold_fraction);

        let compute_ms = started.elapsed().as_secs_f32() * 1000.0;
        debug!(
            shape = %params.shape,
            drive_hz = params.drive_hz,
            points = field.nodal_points.len(),
            compute_ms,
            "field recomputed"
        );

        self.frame = UiFrame {
            shape: params.shape,
            drive_hz: blend.drive_hz,
            plate_size: params.plate_size,
            field,
            summary,
            eigen_hz,
            mode_labels,
            compute_ms,
        };
        self.last_computed = Some(params);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.exiting.load(Ordering::SeqCst) {
            info!("stop requested, closing window");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // The field is a pure function of the parameters: recompute only
        // when they differ from the last computed set, then let egui
        // repaint on interaction.
        self.recompute_if_needed();
        crate::ui::windows::main_window(ctx, &mut self.params, &self.frame, &self.display);
    }
}
