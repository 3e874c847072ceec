// Entry point: config + CLI merge, then either a one-shot PNG snapshot or
// the egui/eframe explorer window.

use std::path::Path;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use cymatica::app::App;
use cymatica::cli::Args;
use cymatica::config::AppConfig;
use cymatica::render;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let mut cfg = AppConfig::load_or_default(&args.config);
    args.apply_to(&mut cfg);

    if !(cfg.startup.plate_size.is_finite() && cfg.startup.plate_size > 0.0) {
        warn!(
            plate_size = cfg.startup.plate_size,
            "plate size must be strictly positive, falling back to 1.0"
        );
        cfg.startup.plate_size = 1.0;
    }

    info!(
        shape = %cfg.startup.shape,
        drive_hz = cfg.startup.drive_hz,
        plate_size = cfg.startup.plate_size,
        resolution = cfg.sampling.resolution,
        "starting"
    );

    if let Some(png_path) = &args.png {
        if let Err(err) = render::snapshot(
            Path::new(png_path),
            cfg.startup.shape,
            cfg.startup.drive_hz,
            cfg.startup.plate_size,
            cfg.sampling.resolution,
            cfg.sampling.threshold_fraction,
        ) {
            error!("snapshot failed: {err:#}");
            std::process::exit(1);
        }
        return Ok(());
    }

    let stop_flag = Arc::new(AtomicBool::new(false));
    let stop_flag_for_ctrlc = stop_flag.clone();
    ctrlc::set_handler(move || {
        stop_flag_for_ctrlc.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([980.0, 760.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Cymatica",
        native_options,
        Box::new(|cc| Ok(Box::new(App::new(cc, cfg, stop_flag.clone())))),
    )
}
