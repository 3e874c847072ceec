use clap::Parser;

use crate::core::mode::PlateShape;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "cymatica.toml")]
    pub config: String,

    /// Plate shape (square | circle), overrides config
    #[arg(long)]
    pub shape: Option<PlateShape>,

    /// Driving frequency in Hz (clamped to 20..20000), overrides config
    #[arg(long)]
    pub freq: Option<f32>,

    /// Relative plate size (strictly positive), overrides config
    #[arg(long)]
    pub size: Option<f32>,

    /// Sampling grid resolution per axis, overrides config
    #[arg(long)]
    pub resolution: Option<usize>,

    /// Nodal threshold fraction, overrides config
    #[arg(long)]
    pub threshold: Option<f32>,

    /// Render one frame to a grayscale PNG and exit (no GUI)
    #[arg(long)]
    pub png: Option<String>,
}

impl Args {
    /// Fold CLI overrides into the loaded config.
    pub fn apply_to(&self, cfg: &mut crate::config::AppConfig) {
        if let Some(shape) = self.shape {
            cfg.startup.shape = shape;
        }
        if let Some(freq) = self.freq {
            cfg.startup.drive_hz = freq;
        }
        if let Some(size) = self.size {
            cfg.startup.plate_size = size;
        }
        if let Some(resolution) = self.resolution {
            cfg.sampling.resolution = resolution;
        }
        if let Some(threshold) = self.threshold {
            cfg.sampling.threshold_fraction = threshold;
        }
    }
}
