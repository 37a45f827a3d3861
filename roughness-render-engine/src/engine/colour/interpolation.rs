/// RGB triple with channels nominally in [0, 1].
pub type Rgb = [f32; 3];

/// Convert RGB in [0, 1] to HSV with hue in degrees [0, 360).
/// Grey inputs (zero chroma) report hue 0 and saturation 0.
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> [f32; 3] {
    let v = r.max(g).max(b);
    let c = v - r.min(g).min(b);

    let h = if c == 0.0 {
        0.0
    } else if v == r {
        (g - b) / c
    } else if v == g {
        2.0 + (b - r) / c
    } else {
        4.0 + (r - g) / c
    };

    let s = if v == 0.0 { 0.0 } else { c / v };

    [60.0 * if h < 0.0 { h + 6.0 } else { h }, s, v]
}

/// Inverse of [`rgb_to_hsv`]. The sector remainder keeps the sign of the
/// dividend, so hues outside [0, 360) extrapolate instead of wrapping.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    let channel = |n: f32| {
        let k = (n + h / 60.0) % 6.0;
        // f32::min and f32::max discard NaN; a NaN hue must poison the channel.
        if k.is_nan() {
            return f32::NAN;
        }
        v - v * s * k.min(4.0 - k).min(1.0).max(0.0)
    };
    [channel(5.0), channel(3.0), channel(1.0)]
}

/// Linear interpolation written as `t*b - (t-1)*a`.
/// Keep this form: it decides how NaN and infinities propagate.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    t * b - (t - 1.0) * a
}

/// Position of `v` between `a` and `b`; ±inf or NaN when `a == b`.
pub fn inverse_lerp(a: f32, b: f32, v: f32) -> f32 {
    (v - a) / (b - a)
}

pub fn lerp_colour(a: Rgb, b: Rgb, t: f32) -> Rgb {
    [lerp(a[0], b[0], t), lerp(a[1], b[1], t), lerp(a[2], b[2], t)]
}

/// Interpolate two hues in degrees along the shorter arc of the hue wheel.
pub fn lerp_hue(a: f32, b: f32, t: f32) -> f32 {
    let (low, high, t) = if a > b { (b, a, 1.0 - t) } else { (a, b, t) };
    let d = high - low;

    if d > 180.0 {
        let low = low + 360.0;
        (low + t * (high - low)) % 360.0
    } else {
        low + t * d
    }
}

/// Interpolate two RGB colours through HSV: saturation and value linearly,
/// hue along the shorter arc.
pub fn lerp_colour_hsv(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let a_hsv = rgb_to_hsv(a[0], a[1], a[2]);
    let b_hsv = rgb_to_hsv(b[0], b[1], b[2]);

    let h = lerp_hue(a_hsv[0], b_hsv[0], t);
    let s = lerp(a_hsv[1], b_hsv[1], t);
    let v = lerp(a_hsv[2], b_hsv[2], t);

    hsv_to_rgb(h, s, v)
}

/// Scale a 0-255 colour into [0, 1].
pub fn rgb_u8_to_unit(colour: [u8; 3]) -> Rgb {
    colour.map(|channel| channel as f32 / 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-4;

    fn assert_rgb_eq(actual: Rgb, expected: Rgb) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*a, *e, epsilon = EPSILON);
        }
    }

    #[test]
    fn primaries_to_hsv() {
        assert_eq!(rgb_to_hsv(1.0, 0.0, 0.0), [0.0, 1.0, 1.0]);
        assert_eq!(rgb_to_hsv(0.0, 1.0, 0.0), [120.0, 1.0, 1.0]);
        assert_eq!(rgb_to_hsv(0.0, 0.0, 1.0), [240.0, 1.0, 1.0]);
    }

    #[test]
    fn negative_sector_wraps_to_positive_hue() {
        // Magenta-ish red: max is r, g < b, so the raw sector is negative.
        let [h, _, _] = rgb_to_hsv(1.0, 0.0, 0.5);
        assert_abs_diff_eq!(h, 330.0, epsilon = EPSILON);
    }

    #[test]
    fn grey_has_zero_hue_and_saturation() {
        assert_eq!(rgb_to_hsv(0.4, 0.4, 0.4), [0.0, 0.0, 0.4]);
        assert_eq!(rgb_to_hsv(0.0, 0.0, 0.0), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn hsv_round_trip() {
        for hue_step in 0..36 {
            let h = hue_step as f32 * 10.0;
            for &s in &[0.25, 0.5, 1.0] {
                for &v in &[0.2, 0.75, 1.0] {
                    let rgb = hsv_to_rgb(h, s, v);
                    let [h2, s2, v2] = rgb_to_hsv(rgb[0], rgb[1], rgb[2]);
                    assert_abs_diff_eq!(h2, h, epsilon = 1e-2);
                    assert_abs_diff_eq!(s2, s, epsilon = EPSILON);
                    assert_abs_diff_eq!(v2, v, epsilon = EPSILON);
                }
            }
        }
    }

    #[test]
    fn grey_round_trip_keeps_value() {
        let rgb = hsv_to_rgb(200.0, 0.0, 0.6);
        let [_, s, v] = rgb_to_hsv(rgb[0], rgb[1], rgb[2]);
        assert_eq!(s, 0.0);
        assert_abs_diff_eq!(v, 0.6, epsilon = EPSILON);
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        assert_eq!(lerp(2.0, 8.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 8.0, 1.0), 8.0);
        assert_eq!(lerp(2.0, 8.0, 0.5), 5.0);
    }

    #[test]
    fn lerp_extrapolates() {
        assert_eq!(lerp(0.0, 1.0, 2.0), 2.0);
        assert_eq!(lerp(0.0, 1.0, -1.0), -1.0);
    }

    #[test]
    fn lerp_propagates_non_finite_inputs() {
        assert!(lerp(0.0, 1.0, f32::NAN).is_nan());
        // (t - 1) * 0 with t = inf is NaN, unlike the a + t*(b-a) form.
        assert!(lerp(0.0, 1.0, f32::INFINITY).is_nan());
        assert!(lerp(f32::INFINITY, 1.0, 1.0).is_nan());
    }

    #[test]
    fn hsv_to_rgb_propagates_non_finite_hue() {
        assert!(hsv_to_rgb(f32::NAN, 1.0, 1.0).iter().all(|c| c.is_nan()));
        assert!(hsv_to_rgb(f32::INFINITY, 0.5, 0.5).iter().all(|c| c.is_nan()));
        // Zero saturation still goes through the hue term.
        assert!(hsv_to_rgb(f32::NAN, 0.0, 1.0).iter().all(|c| c.is_nan()));
    }

    #[test]
    fn inverse_lerp_degenerate_range() {
        assert_eq!(inverse_lerp(3.0, 3.0, 4.0), f32::INFINITY);
        assert_eq!(inverse_lerp(3.0, 3.0, 2.0), f32::NEG_INFINITY);
        assert!(inverse_lerp(3.0, 3.0, 3.0).is_nan());
    }

    #[test]
    fn inverse_lerp_normalises() {
        assert_eq!(inverse_lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(inverse_lerp(0.0, 10.0, 10.0), 1.0);
        assert_eq!(inverse_lerp(-2.0, 2.0, 1.0), 0.75);
    }

    #[test]
    fn lerp_colour_endpoints() {
        let a = [0.1, 0.2, 0.3];
        let b = [0.9, 0.5, 0.0];
        assert_eq!(lerp_colour(a, b, 0.0), a);
        assert_eq!(lerp_colour(a, b, 1.0), b);
    }

    #[test]
    fn hsv_lerp_endpoints() {
        let a = rgb_u8_to_unit([239, 138, 98]);
        let b = rgb_u8_to_unit([103, 169, 207]);
        assert_rgb_eq(lerp_colour_hsv(a, b, 0.0), a);
        assert_rgb_eq(lerp_colour_hsv(a, b, 1.0), b);
        assert_rgb_eq(lerp_colour_hsv(b, a, 0.0), b);
        assert_rgb_eq(lerp_colour_hsv(b, a, 1.0), a);
    }

    #[test]
    fn hue_takes_short_arc() {
        assert_abs_diff_eq!(lerp_hue(350.0, 10.0, 0.5), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(lerp_hue(10.0, 350.0, 0.5), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(lerp_hue(350.0, 10.0, 0.25), 355.0, epsilon = EPSILON);
        assert_abs_diff_eq!(lerp_hue(0.0, 120.0, 0.5), 60.0, epsilon = EPSILON);
    }

    #[test]
    fn hsv_lerp_through_red_stays_red() {
        let a = hsv_to_rgb(350.0, 1.0, 1.0);
        let b = hsv_to_rgb(10.0, 1.0, 1.0);
        assert_rgb_eq(lerp_colour_hsv(a, b, 0.5), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn hsv_lerp_red_to_red_is_constant() {
        let red = [1.0, 0.0, 0.0];
        assert_rgb_eq(lerp_colour_hsv(red, red, 0.3), red);
    }

    #[test]
    fn unit_scaling() {
        assert_eq!(rgb_u8_to_unit([255, 0, 51]), [1.0, 0.0, 0.2]);
    }
}
