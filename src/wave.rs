use crate::trig::sin_approx;
use crate::wheel::Point;

/// Sample a sine wave across `width` pixels, one point per integer x from
/// `0` to `width` inclusive.
///
/// `frequency` is the number of wave lengths fitted into `width`, and the
/// sine is taken of `x / wave_length` directly. A zero or non-finite wave
/// length gives a flat line at `mid_height`.
pub fn wave(width: u32, frequency: f64, strength: f64, mid_height: f64) -> Vec<Point> {
    let wave_length = width as f64 / frequency;
    let usable = wave_length.is_finite() && wave_length != 0.0;

    (0..=width)
        .map(|x| {
            let x = x as f64;
            let relative_x = if usable { x / wave_length } else { 0.0 };
            Point::new(x, strength * sin_approx(relative_x) + mid_height)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_width_plus_one_points() {
        let points = wave(10, 1.0, 5.0, 50.0);
        assert_eq!(points.len(), 11);
        assert_eq!(points[0], Point::new(0.0, 50.0));
        assert_eq!(points[10].x, 10.0);
    }

    #[test]
    fn x_steps_by_one() {
        let points = wave(64, 2.0, 3.0, 0.0);
        for (i, p) in points.iter().enumerate() {
            assert_eq!(p.x, i as f64);
        }
    }

    #[test]
    fn stays_within_strength() {
        for p in wave(400, 150.0, 8.0, 20.0) {
            assert!(p.y >= 20.0 - 8.0 - 1e-9 && p.y <= 20.0 + 8.0 + 1e-9, "{p:?}");
        }
    }

    #[test]
    fn peaks_where_sine_peaks() {
        // wave_length = 100 / 50 = 2, so x = π gives relative_x = π/2.
        let points = wave(100, 50.0, 10.0, 0.0);
        let peak = points
            .iter()
            .max_by(|a, b| a.y.total_cmp(&b.y))
            .unwrap();
        assert!((peak.y - 10.0).abs() < 0.1);
    }

    #[test]
    fn zero_width_or_frequency_is_flat() {
        assert_eq!(wave(0, 3.0, 5.0, 7.0), vec![Point::new(0.0, 7.0)]);
        for p in wave(20, 0.0, 5.0, 7.0) {
            assert_eq!(p.y, 7.0);
        }
    }
}
