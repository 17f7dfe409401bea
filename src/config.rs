use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::cli::{Args, Command, SizeArgs};
use crate::wheel::ColorWheel;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Fixed seed for noise and scatter; fresh entropy when unset
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub wheel: ColorWheel,
    #[serde(default)]
    pub wave: WaveConfig,
    #[serde(default)]
    pub noise: NoiseConfig,
    #[serde(default)]
    pub scatter: ScatterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WaveConfig {
    pub width: u32,
    pub height: f64,
    pub frequency: f64,
    pub strength: f64,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            width: 300,
            height: 40.0,
            frequency: 30.0,
            strength: 6.0,
        }
    }
}

impl WaveConfig {
    /// Baseline of the wave, halfway down its area
    pub fn mid_height(&self) -> f64 {
        self.height / 2.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NoiseConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScatterConfig {
    pub count: usize,
    pub width: f64,
    pub height: f64,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            count: 8,
            width: 400.0,
            height: 300.0,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Get the default XDG config path (~/.config/huewheel/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("huewheel").join("config.toml"))
    }

    /// Load config from the default XDG path if it exists
    /// Returns None if file doesn't exist, logs warning on parse errors
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            match Self::load(&path) {
                Ok(config) => Some(config),
                Err(e) => {
                    warn!("{:#}. Using defaults.", e);
                    None
                }
            }
        } else {
            None
        }
    }

    /// Explicit path if given, else the XDG file, else built-in defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::load_from_default_path().unwrap_or_default()),
        }
    }

    /// Initialize default config file at XDG path, returns the path
    pub fn init_default_config() -> Result<PathBuf> {
        let path = Self::default_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Self::write_template(&path)?;
        Ok(path)
    }

    /// Write the commented template to `path`, creating parent directories
    pub fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, Self::generate_config_template())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Generate a commented TOML config template
    pub fn generate_config_template() -> String {
        r#"# Huewheel Configuration
# This file is auto-generated. Edit as needed.

# Fixed seed for noise and scatter output (omit for a fresh seed each run)
# seed = 42

[wheel]
# Size of the color wheel rectangle in pixels
width = 300.0
height = 300.0
# Distance the knob is kept from the edges when picking
knob_inset = 10.0

[wave]
# Width in pixels (one point per pixel column)
width = 300
# Height of the wave's area; the wave is centered vertically
height = 40.0
# Number of wave lengths across the width
frequency = 30.0
# Amplitude in pixels
strength = 6.0

[noise]
# Noise texture size in pixels
width = 256
height = 256

[scatter]
# Number of background blobs
count = 8
# Area the blobs are placed in
width = 400.0
height = 300.0
"#
        .to_string()
    }

    /// Merge CLI arguments into config (CLI takes priority)
    pub fn merge_args(&mut self, args: &Args) {
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }

        match &args.command {
            Command::Pos { size, .. } | Command::Pick { size, .. } => {
                merge_size(size, &mut self.wheel.width, &mut self.wheel.height);
            }
            Command::Wave {
                size,
                frequency,
                strength,
            } => {
                if let Some(width) = size.width {
                    self.wave.width = width.max(0.0).round() as u32;
                }
                if let Some(height) = size.height {
                    self.wave.height = height;
                }
                if let Some(frequency) = frequency {
                    self.wave.frequency = *frequency;
                }
                if let Some(strength) = strength {
                    self.wave.strength = *strength;
                }
            }
            Command::Noise { width, height, .. } => {
                if let Some(width) = width {
                    self.noise.width = *width;
                }
                if let Some(height) = height {
                    self.noise.height = *height;
                }
            }
            Command::Scatter { count, size } => {
                if let Some(count) = count {
                    self.scatter.count = *count;
                }
                merge_size(size, &mut self.scatter.width, &mut self.scatter.height);
            }
            Command::Hex { .. }
            | Command::Nuance { .. }
            | Command::InitConfig
            | Command::Completions { .. } => {}
        }
    }
}

fn merge_size(size: &SizeArgs, width: &mut f64, height: &mut f64) {
    if let Some(w) = size.width {
        *width = w;
    }
    if let Some(h) = size.height {
        *height = h;
    }
}
