use egui_plot::{Plot, VLine};

use crate::core::mode::{FMAX_HZ, FMIN_HZ};

/// Eigenfrequency spectrum on a log2(Hz) axis.
///
/// One vertical line per catalog eigenfrequency, a highlighted line for the
/// drive frequency, axis labels formatted back to Hz.
pub fn eigen_spectrum_plot(
    ui: &mut egui::Ui,
    eigen_hz: &[f32],
    mode_labels: &[(u8, u8)],
    drive_hz: f32,
) {
    Plot::new("eigen_spectrum")
        .height(140.0)
        .allow_scroll(false)
        .allow_drag(false)
        .show_y(false)
        .include_x((FMIN_HZ as f64).log2())
        .include_x((FMAX_HZ as f64).log2())
        .include_y(0.0)
        .include_y(1.0)
        .x_axis_formatter(|mark, _range| {
            let hz = 2f64.powf(mark.value);
            if hz >= 1000.0 {
                format!("{:.1} kHz", hz / 1000.0)
            } else {
                format!("{:.0} Hz", hz)
            }
        })
        .show(ui, |plot_ui| {
            for (i, &hz) in eigen_hz.iter().enumerate() {
                if !(FMIN_HZ..=FMAX_HZ).contains(&hz) {
                    continue;
                }
                let label = mode_labels
                    .get(i)
                    .map(|(m, n)| format!("({m},{n})"))
                    .unwrap_or_default();
                plot_ui.vline(
                    VLine::new(label, (hz as f64).log2()).color(egui::Color32::DARK_GRAY),
                );
            }
            let drive = drive_hz.clamp(FMIN_HZ, FMAX_HZ);
            plot_ui.vline(
                VLine::new("drive", (drive as f64).log2())
                    .color(egui::Color32::LIGHT_RED)
                    .width(2.0),
            );
        });
}
