use crate::core::mode::PlateShape;
use crate::core::sampler::{DEFAULT_RESOLUTION, DEFAULT_THRESHOLD_FRACTION};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    #[serde(default = "SamplingConfig::default_resolution")]
    pub resolution: usize,
    #[serde(default = "SamplingConfig::default_threshold_fraction")]
    pub threshold_fraction: f32,
}

impl SamplingConfig {
    fn default_resolution() -> usize {
        DEFAULT_RESOLUTION
    }
    fn default_threshold_fraction() -> f32 {
        DEFAULT_THRESHOLD_FRACTION
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            resolution: Self::default_resolution(),
            threshold_fraction: Self::default_threshold_fraction(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupConfig {
    #[serde(default)]
    pub shape: PlateShape,
    #[serde(default = "StartupConfig::default_drive_hz")]
    pub drive_hz: f32,
    #[serde(default = "StartupConfig::default_plate_size")]
    pub plate_size: f32,
}

impl StartupConfig {
    fn default_drive_hz() -> f32 {
        440.0
    }
    fn default_plate_size() -> f32 {
        1.0
    }
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            shape: PlateShape::default(),
            drive_hz: Self::default_drive_hz(),
            plate_size: Self::default_plate_size(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "DisplayConfig::default_point_radius")]
    pub point_radius: f32,
    #[serde(default = "DisplayConfig::default_show_spectrum")]
    pub show_spectrum: bool,
}

impl DisplayConfig {
    fn default_point_radius() -> f32 {
        1.5
    }
    fn default_show_spectrum() -> bool {
        true
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            point_radius: Self::default_point_radius(),
            show_spectrum: Self::default_show_spectrum(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub startup: StartupConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl AppConfig {
    fn round_f32(x: f32) -> f32 {
        (x * 1_000_000.0).round() / 1_000_000.0
    }

    fn format_f32_compact(x: f32) -> String {
        let mut s = format!("{:.6}", x);
        while s.contains('.') && s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
        if s.is_empty() { "0".to_string() } else { s }
    }

    fn rounded(mut self) -> Self {
        self.sampling.threshold_fraction = Self::round_f32(self.sampling.threshold_fraction);
        self.startup.drive_hz = Self::round_f32(self.startup.drive_hz);
        self.startup.plate_size = Self::round_f32(self.startup.plate_size);
        self.display.point_radius = Self::round_f32(self.display.point_radius);
        self
    }

    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        eprintln!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    eprintln!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write defaults (commented out) and return them.
        let default_cfg = Self::default().rounded();
        if let Ok(text) = toml::to_string_pretty(&default_cfg) {
            let mut commented = String::new();
            for line in text.lines() {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    commented.push('\n');
                } else if trimmed.starts_with('[') && trimmed.ends_with(']') {
                    commented.push_str(line);
                    commented.push('\n');
                } else {
                    let mut out_line = line.to_string();
                    if let Some((lhs, rhs)) = line.split_once('=') {
                        let rhs_trim = rhs.trim();
                        let has_decimal = rhs_trim.contains('.');
                        if (has_decimal || rhs_trim.contains('e') || rhs_trim.contains('E'))
                            && !rhs_trim.contains('"')
                            && rhs_trim != "true"
                            && rhs_trim != "false"
                        {
                            if let Ok(val) = rhs_trim.parse::<f32>() {
                                let mut formatted = Self::format_f32_compact(val);
                                if has_decimal && !formatted.contains('.') {
                                    formatted.push_str(".0");
                                }
                                out_line = format!("{} = {}", lhs.trim(), formatted);
                            }
                        }
                    }
                    commented.push_str("# ");
                    commented.push_str(&out_line);
                    commented.push('\n');
                }
            }
            if let Err(err) = fs::write(path_obj, commented) {
                eprintln!("Failed to write default config to {path}: {err}");
            }
        } else {
            eprintln!("Failed to serialize default config; continuing with defaults");
        }
        default_cfg
    }
}
