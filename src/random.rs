//! Random decoration: alpha noise textures and scattered background blobs.
//!
//! Every function takes the generator it draws from, so callers decide
//! between a seeded `StdRng` for reproducible output and `thread_rng()`.

use rand::seq::SliceRandom;
use rand::Rng;
use std::io::{self, Write};
use tracing::debug;

use crate::color::Nuance;

/// White RGB with alpha in the low byte.
const OPAQUE_WHITE_RGB: u32 = 0xFFFF_FF00;

/// `n` packed RGBA words with R = G = B = 255 and a uniformly random alpha
/// byte.
pub fn random_alpha(n: usize, rng: &mut impl Rng) -> Vec<u32> {
    (0..n)
        .map(|_| OPAQUE_WHITE_RGB | u32::from(rng.gen::<u8>()))
        .collect()
}

/// Size and offset of one decorative circle, relative to the center of the
/// area it was placed in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointRandomization {
    pub diameter: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Random circle sized from the area's mean half-extent and offset anywhere
/// within the area.
///
/// The diameter falls in `[d/4, 3d/4]` with `d = (width + height) / 4`.
/// Negative or non-finite extents count as zero.
pub fn randomize_in(width: f64, height: f64, rng: &mut impl Rng) -> PointRandomization {
    let width = sanitize_extent(width);
    let height = sanitize_extent(height);
    let decision = (width + height) / 4.0;

    PointRandomization {
        diameter: rng.gen_range(decision * 0.25..=decision * 0.75),
        offset_x: rng.gen_range(-(width / 2.0)..=width / 2.0),
        offset_y: rng.gen_range(-(height / 2.0)..=height / 2.0),
    }
}

// Bounded so the sampling ranges below stay finite.
fn sanitize_extent(v: f64) -> f64 {
    if v.is_finite() {
        v.clamp(0.0, f64::MAX / 4.0)
    } else {
        0.0
    }
}

/// A grain texture of translucent white pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseImage {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl NoiseImage {
    pub fn generate(width: usize, height: usize, rng: &mut impl Rng) -> Self {
        let count = width.saturating_mul(height);
        debug!(width, height, "generating alpha noise");
        Self {
            width,
            height,
            pixels: random_alpha(count, rng),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Packed `0xRRGGBBAA` words, row-major
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixels unpacked to `R, G, B, A` byte order
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_be_bytes()).collect()
    }

    /// Write as a PAM (`P7`) image with `RGB_ALPHA` tuples.
    pub fn write_pam<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(
            writer,
            "P7\nWIDTH {}\nHEIGHT {}\nDEPTH 4\nMAXVAL 255\nTUPLTYPE RGB_ALPHA\nENDHDR\n",
            self.width, self.height
        )?;
        writer.write_all(&self.to_rgba_bytes())?;
        writer.flush()
    }
}

/// One background blob: where it sits and how its color is shaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blob {
    pub placement: PointRandomization,
    pub nuance: Nuance,
}

/// A fixed set of blobs that can be re-placed when the area changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Scatter {
    blobs: Vec<Blob>,
}

impl Scatter {
    /// `count` unplaced blobs, each with a random nuance.
    pub fn new(count: usize, rng: &mut impl Rng) -> Self {
        let blobs = (0..count)
            .map(|_| Blob {
                placement: PointRandomization::default(),
                nuance: Nuance::all()
                    .choose(rng)
                    .copied()
                    .unwrap_or_default(),
            })
            .collect();
        Self { blobs }
    }

    /// Place every blob again inside a `width × height` area. Nuances are kept.
    pub fn reroll(&mut self, width: f64, height: f64, rng: &mut impl Rng) {
        debug!(count = self.blobs.len(), width, height, "rerolling scatter");
        for blob in &mut self.blobs {
            blob.placement = randomize_in(width, height, rng);
        }
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}
