//! End-to-end checks of the color picker math through the public API.

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use huewheel::{
    calc_angle, calc_pos, calc_r, cos_approx, random_alpha, randomize_in, rgb_to_hex_string,
    wave, ColorWheel, Hsb, Nuance, RgbColor,
};

fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(1.0);
    d.min(1.0 - d)
}

#[test]
fn test_cos_error_bound() {
    let steps = 10_000;
    for i in 0..=steps {
        let angle = -std::f64::consts::PI + std::f64::consts::TAU * i as f64 / steps as f64;
        assert!((cos_approx(angle) - angle.cos()).abs() < 0.02, "angle {angle}");
    }
}

#[test]
fn test_hue_round_trip_across_aspect_ratios() {
    for (w, h) in [(200.0, 200.0), (640.0, 120.0), (120.0, 640.0)] {
        for i in 0..360 {
            let hue = i as f64 / 360.0;
            let p = calc_pos(hue, 1.0, h, w);
            let back = calc_angle(p.x, p.y, w / 2.0, h / 2.0);
            assert!(hue_distance(hue, back) < 0.01, "{w}x{h} hue {hue} -> {back}");
        }
    }
}

#[test]
fn test_saturation_survives_round_trip() {
    let (w, h) = (500.0, 300.0);
    let hue = 0.25;
    for s in [0.0, 0.2, 0.55, 1.0] {
        let p = calc_pos(hue, s, h, w);
        let angle = calc_angle(p.x, p.y, w / 2.0, h / 2.0);
        assert!((calc_r(p.x, p.y, w, h, angle) - s).abs() < 1e-9);
    }
}

#[test]
fn test_hex_of_known_colors() {
    assert_eq!(rgb_to_hex_string(1.0, 0.0, 0.0), "ff0000");
    assert_eq!(rgb_to_hex_string(0.0, 0.0, 0.0), "000000");
}

#[test]
fn test_wave_point_count() {
    let points = wave(10, 1.0, 5.0, 50.0);
    assert_eq!(points.len(), 11);
    assert_eq!(points[0].y, 50.0);
}

#[test]
fn test_random_output_bounds() {
    let mut rng = StdRng::seed_from_u64(2024);

    let words = random_alpha(5, &mut rng);
    assert_eq!(words.len(), 5);
    assert!(words.iter().all(|w| w >> 8 == 0xFF_FFFF));

    let p = randomize_in(100.0, 100.0, &mut rng);
    assert!(p.diameter > 0.0);
    assert!((-50.0..=50.0).contains(&p.offset_x));
    assert!((-50.0..=50.0).contains(&p.offset_y));
}

#[test]
fn test_drag_to_pick_matches_displayed_color() {
    let wheel = ColorWheel::new(360.0, 240.0);
    let chosen = RgbColor::from_hex("#3a7bd5").unwrap();
    let knob = wheel.position_of_color(chosen);

    let chosen_hsb = Hsb::from_rgb(chosen);
    let picked = wheel.select(knob, chosen_hsb.brightness);

    assert!(hue_distance(picked.hue, chosen_hsb.hue) < 0.005);
    assert!((picked.saturation - chosen_hsb.saturation).abs() < 0.02);
}

#[test]
fn test_nuanced_hex_output() {
    let base = RgbColor::from_hex("808080").unwrap();
    assert_eq!(Nuance::Normal.apply(base).to_hex(), "808080");
    assert_eq!(Nuance::Lighter.apply(base).to_hex(), "c0c0c0");
}
