use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::color::Nuance;

#[derive(Parser, Debug)]
#[command(name = "huewheel")]
#[command(author, version, about = "Color wheel geometry, hex colors, waves and noise")]
pub struct Args {
    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for noise and scatter output (reproducible runs)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Knob position for a hue/saturation pair
    Pos {
        /// Hue fraction, 0.0 to 1.0
        hue: f64,
        /// Saturation, 0.0 to 1.0
        saturation: f64,
        #[command(flatten)]
        size: SizeArgs,
    },

    /// Color under a pointer position on the wheel
    Pick {
        x: f64,
        y: f64,
        #[command(flatten)]
        size: SizeArgs,
        /// Brightness to combine with the picked hue and saturation
        #[arg(short, long, default_value = "1.0")]
        brightness: f64,
    },

    /// Hex string for unit-interval RGB channels
    Hex { r: f64, g: f64, b: f64 },

    /// Lighten or darken a hex color
    Nuance {
        /// Color like "#3a7bd5" or "3a7bd5ff"
        color: String,
        #[arg(short, long, value_enum, default_value = "lighter")]
        variant: Nuance,
    },

    /// Points of a wave path, one "x y" per line
    Wave {
        #[command(flatten)]
        size: SizeArgs,
        /// Wave lengths across the width
        #[arg(short, long)]
        frequency: Option<f64>,
        /// Amplitude in pixels
        #[arg(short, long)]
        strength: Option<f64>,
    },

    /// Write an alpha noise texture as a PAM image
    Noise {
        output: PathBuf,
        #[arg(long)]
        width: Option<usize>,
        #[arg(long)]
        height: Option<usize>,
    },

    /// Random blob placements for a colorful background
    Scatter {
        #[arg(short = 'n', long)]
        count: Option<usize>,
        #[command(flatten)]
        size: SizeArgs,
    },

    /// Write a commented default config to the user config directory
    InitConfig,

    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Area overrides shared by the geometry commands
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct SizeArgs {
    /// Area width in pixels
    #[arg(long)]
    pub width: Option<f64>,
    /// Area height in pixels
    #[arg(long)]
    pub height: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["huewheel", "scatter", "-n", "4", "--seed", "9"]).unwrap();
        assert_eq!(args.seed, Some(9));
        assert!(matches!(args.command, Command::Scatter { count: Some(4), .. }));
    }

    #[test]
    fn parses_nuance_variant() {
        let args =
            Args::try_parse_from(["huewheel", "nuance", "#102030", "--variant", "dark"]).unwrap();
        match args.command {
            Command::Nuance { color, variant } => {
                assert_eq!(color, "#102030");
                assert_eq!(variant, Nuance::Dark);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
