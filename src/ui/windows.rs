use egui::{CentralPanel, Color32, CornerRadius, Sense, SidePanel, Stroke, TopBottomPanel, Vec2};

use crate::app::SimParams;
use crate::config::DisplayConfig;
use crate::core::mode::{PlateShape, FMAX_HZ, FMIN_HZ};
use crate::core::sampler::to_canvas;
use crate::ui::viewdata::UiFrame;

/// === Pattern canvas ===
///
/// Plate outline plus one dot per nodal point. Normalized coordinates map
/// through `to_canvas`, which flips y for screen space.
pub fn draw_pattern(ui: &mut egui::Ui, frame: &UiFrame, display: &DisplayConfig) {
    let side = ui.available_width().min(560.0).max(240.0);
    let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::hover());
    let rect = response.rect;
    let center = rect.center();
    let half = rect.width() * 0.46;

    painter.rect_filled(rect, CornerRadius::ZERO, Color32::WHITE);

    let outline = Stroke::new(1.0, Color32::from_gray(120));
    match frame.shape {
        PlateShape::Square => {
            let plate = egui::Rect::from_center_size(center, Vec2::splat(half * 2.0));
            painter.rect_stroke(plate, CornerRadius::ZERO, outline, egui::StrokeKind::Middle);
        }
        PlateShape::Circle => {
            painter.circle_stroke(center, half, outline);
        }
    }

    let dot = Color32::from_gray(40);
    for point in &frame.field.nodal_points {
        let [x, y] = to_canvas(*point, [center.x, center.y], half);
        painter.circle_filled(egui::pos2(x, y), display.point_radius, dot);
    }
}

/// === Parameter controls ===
pub fn controls(ui: &mut egui::Ui, params: &mut SimParams) {
    ui.heading("Plate");
    ui.horizontal(|ui| {
        ui.selectable_value(&mut params.shape, PlateShape::Square, "Square");
        ui.selectable_value(&mut params.shape, PlateShape::Circle, "Circle");
    });

    ui.add_space(8.0);
    ui.add(
        egui::Slider::new(&mut params.drive_hz, FMIN_HZ..=FMAX_HZ)
            .logarithmic(true)
            .text("Drive frequency (Hz)"),
    );
    ui.add(
        egui::Slider::new(&mut params.plate_size, 0.6..=1.2)
            .text("Plate size"),
    );

    ui.add_space(8.0);
    ui.heading("Sampling");
    ui.add(
        egui::Slider::new(&mut params.resolution, 80..=640)
            .text("Grid resolution"),
    );
    ui.add(
        egui::Slider::new(&mut params.threshold_fraction, 0.01..=0.25)
            .text("Node threshold"),
    );
}

/// === Mode summary panel ===
pub fn summary_panel(ui: &mut egui::Ui, frame: &UiFrame) {
    ui.heading("Modes");
    let labels = &frame.mode_labels;
    let fmt = |index: usize| {
        labels
            .get(index)
            .map(|(m, n)| format!("({m}, {n})"))
            .unwrap_or_else(|| "—".to_string())
    };

    if let Some(closest) = frame.summary.closest {
        ui.label(format!(
            "Closest mode {} at {:.1} Hz, detuned {:.1} Hz",
            fmt(closest.index),
            closest.eigen_hz,
            closest.detuning_hz
        ));
    } else {
        ui.label("No modes available.");
    }
    if let (Some(primary), Some(secondary)) = (frame.summary.primary, frame.summary.secondary) {
        ui.label(format!(
            "Primary {}  weight {:.2}",
            fmt(primary.index),
            primary.weight
        ));
        ui.label(format!(
            "Secondary {}  weight {:.2}",
            fmt(secondary.index),
            secondary.weight
        ));
    }
    ui.add_space(4.0);
    ui.label(format!(
        "{} nodal points, peak |u| = {:.3}, {:.1} ms",
        frame.field.nodal_points.len(),
        frame.field.max_abs,
        frame.compute_ms
    ));
}

/// === Main window ===
pub fn main_window(
    ctx: &egui::Context,
    params: &mut SimParams,
    frame: &UiFrame,
    display: &DisplayConfig,
) {
    TopBottomPanel::top("top").show(ctx, |ui| {
        ui.heading("Cymatica — Chladni Pattern Explorer");
        ui.label("Nodal lines of a driven plate, blended between adjacent modes");
    });

    SidePanel::right("controls")
        .resizable(false)
        .default_width(300.0)
        .show(ctx, |ui| {
            controls(ui, params);
            ui.separator();
            summary_panel(ui, frame);
        });

    CentralPanel::default().show(ctx, |ui| {
        draw_pattern(ui, frame, display);
        if display.show_spectrum {
            ui.separator();
            ui.heading("Eigenfrequency spectrum");
            crate::ui::plots::eigen_spectrum_plot(
                ui,
                &frame.eigen_hz,
                &frame.mode_labels,
                frame.drive_hz,
            );
        }
    });
}
