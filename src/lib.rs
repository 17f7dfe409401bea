//! Huewheel - math behind a color wheel picker
//!
//! Fast trig approximations, hue/saturation to pixel mapping for
//! rectangular wheels, hex formatting, wave paths and random decoration.
//! The `huewheel` binary wraps these for the command line.

pub mod cli;
pub mod color;
pub mod config;
pub mod random;
pub mod trig;
pub mod wave;
pub mod wheel;

pub use color::{rgb_to_hex_string, ColorError, Hsb, Nuance, RgbColor};
pub use random::{random_alpha, randomize_in, NoiseImage, PointRandomization, Scatter};
pub use trig::{atan_approx, cos_approx, sin_approx};
pub use wave::wave;
pub use wheel::{calc_angle, calc_pos, calc_r, ColorWheel, Point};
