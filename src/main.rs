use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::BufWriter;
use tracing::{debug, info};

use huewheel::cli::{Args, Command};
use huewheel::config::Config;
use huewheel::{rgb_to_hex_string, wave, Hsb, NoiseImage, Point, RgbColor, Scatter};

fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("huewheel=info".parse()?),
        )
        .init();

    let args = Args::parse();

    match &args.command {
        Command::InitConfig => {
            let path = Config::init_default_config()?;
            info!("Wrote default config to {}", path.display());
            return Ok(());
        }
        Command::Completions { shell } => {
            clap_complete::generate(*shell, &mut Args::command(), "huewheel", &mut std::io::stdout());
            return Ok(());
        }
        _ => {}
    }

    let mut config = Config::resolve(args.config.as_deref())?;
    config.merge_args(&args);

    run(&args.command, &config)
}

fn run(command: &Command, config: &Config) -> Result<()> {
    match command {
        Command::Pos {
            hue, saturation, ..
        } => {
            let p = config.wheel.knob_position(Hsb::new(*hue, *saturation, 1.0));
            println!("{:.3} {:.3}", p.x, p.y);
        }
        Command::Pick { x, y, brightness, .. } => {
            let hsb = config.wheel.select(Point::new(*x, *y), *brightness);
            println!(
                "{:.4} {:.4} {:.4} #{}",
                hsb.hue,
                hsb.saturation,
                hsb.brightness,
                hsb.to_hex()
            );
        }
        Command::Hex { r, g, b } => {
            println!("{}", rgb_to_hex_string(*r, *g, *b));
        }
        Command::Nuance { color, variant } => {
            let color = RgbColor::from_hex(color)
                .with_context(|| format!("Could not parse color '{}'", color))?;
            println!("{}", variant.apply(color));
        }
        Command::Wave { .. } => {
            let cfg = &config.wave;
            for p in wave(cfg.width, cfg.frequency, cfg.strength, cfg.mid_height()) {
                println!("{} {:.3}", p.x, p.y);
            }
        }
        Command::Noise { output, .. } => {
            let mut rng = make_rng(config.seed);
            let image = NoiseImage::generate(config.noise.width, config.noise.height, &mut rng);
            let file = File::create(output)
                .with_context(|| format!("Failed to create {}", output.display()))?;
            image
                .write_pam(BufWriter::new(file))
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!(
                "Wrote {}x{} noise to {}",
                image.width(),
                image.height(),
                output.display()
            );
        }
        Command::Scatter { .. } => {
            let cfg = &config.scatter;
            let mut rng = make_rng(config.seed);
            let mut scatter = Scatter::new(cfg.count, &mut rng);
            scatter.reroll(cfg.width, cfg.height, &mut rng);
            for blob in scatter.blobs() {
                let p = blob.placement;
                println!(
                    "{:.3} {:.3} {:.3} {}",
                    p.diameter, p.offset_x, p.offset_y, blob.nuance
                );
            }
        }
        Command::InitConfig | Command::Completions { .. } => {}
    }

    Ok(())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!(seed, "using fixed seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}
