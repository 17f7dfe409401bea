use clap::ValueEnum;
use palette::{FromColor, Hsv, IntoColor, Srgb};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("hex color must have 6 or 8 digits, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex digit in '{0}'")]
    InvalidDigit(String),
}

/// Format unit-interval channels as six lowercase hex digits, no `#`.
///
/// Channels are clamped to `[0, 1]` (NaN counts as 0) and truncated after
/// scaling by 255, so 0.999 still formats as `fe`.
pub fn rgb_to_hex_string(r: f64, g: f64, b: f64) -> String {
    format!(
        "{:02x}{:02x}{:02x}",
        unit_to_byte(r),
        unit_to_byte(g),
        unit_to_byte(b)
    )
}

#[inline]
fn unit_to_byte(c: f64) -> u8 {
    if c.is_nan() {
        return 0;
    }
    (c.clamp(0.0, 1.0) * 255.0) as u8
}

/// 8-bit RGBA color, as typed into a hex field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    u8::MAX
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }

    /// Nearest 8-bit color for unit-interval channels
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        let round = |c: f64| {
            if c.is_nan() {
                0
            } else {
                (c.clamp(0.0, 1.0) * 255.0).round() as u8
            }
        };
        Self::new(round(r), round(g), round(b))
    }

    /// Parse from hex string like "#FF0000", "ff0000" or "FF000080"
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(hex.to_string()));
        }

        let byte = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ColorError::InvalidDigit(hex.to_string()))
        };

        match hex.len() {
            6 => Ok(Self::new(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: byte(6)?,
            }),
            n => Err(ColorError::InvalidLength(n)),
        }
    }

    /// Six-digit hex, alpha dropped
    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_unit(&self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Hue, saturation and brightness, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl Hsb {
    pub const fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    pub fn from_rgb(color: RgbColor) -> Self {
        let (r, g, b) = color.to_unit();
        let hsv: Hsv<palette::encoding::Srgb, f64> = Hsv::from_color(Srgb::new(r, g, b));
        Self {
            hue: (hsv.hue.into_positive_degrees() / 360.0).rem_euclid(1.0),
            saturation: hsv.saturation,
            brightness: hsv.value,
        }
    }

    pub fn to_rgb(&self) -> RgbColor {
        let hsv: Hsv<palette::encoding::Srgb, f64> = Hsv::new(
            self.hue.rem_euclid(1.0) * 360.0,
            self.saturation.clamp(0.0, 1.0),
            self.brightness.clamp(0.0, 1.0),
        );
        let rgb: Srgb<f64> = hsv.into_color();
        RgbColor::from_unit(rgb.red, rgb.green, rgb.blue)
    }

    pub fn to_hex(&self) -> String {
        self.to_rgb().to_hex()
    }
}

/// Shade variants given to background blobs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Nuance {
    Darker,
    Dark,
    #[default]
    Normal,
    Light,
    Lighter,
}

impl FromStr for Nuance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "darker" => Ok(Self::Darker),
            "dark" => Ok(Self::Dark),
            "normal" => Ok(Self::Normal),
            "light" => Ok(Self::Light),
            "lighter" => Ok(Self::Lighter),
            _ => Err(format!("Unknown nuance: {}", s)),
        }
    }
}

impl Nuance {
    /// Amount added to every channel, in unit-interval terms
    pub fn delta(&self) -> f64 {
        match self {
            Nuance::Darker => -0.07,
            Nuance::Dark => -0.03,
            Nuance::Normal => 0.0,
            Nuance::Light => 0.15,
            Nuance::Lighter => 0.25,
        }
    }

    /// Shift each RGB channel by [`Nuance::delta`], clamping to the valid
    /// range. Alpha is untouched.
    pub fn apply(&self, color: RgbColor) -> RgbColor {
        let delta = self.delta();
        let (r, g, b) = color.to_unit();
        RgbColor {
            a: color.a,
            ..RgbColor::from_unit(r + delta, g + delta, b + delta)
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Nuance::Darker => "darker",
            Nuance::Dark => "dark",
            Nuance::Normal => "normal",
            Nuance::Light => "light",
            Nuance::Lighter => "lighter",
        }
    }

    pub fn all() -> &'static [Nuance] {
        &[
            Nuance::Darker,
            Nuance::Dark,
            Nuance::Normal,
            Nuance::Light,
            Nuance::Lighter,
        ]
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        let current = all.iter().position(|n| n == self).unwrap_or(0);
        all[(current + 1) % all.len()]
    }
}

impl fmt::Display for Nuance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
