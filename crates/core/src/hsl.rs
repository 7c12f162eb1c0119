//! RGB <-> HSL conversion.
//!
//! HSL is only an intermediate here: the hue-rotation derivations on
//! [`Color`] convert to HSL, move the hue, and convert straight back.
//! Both conversions are pure functions over `f64`.

use crate::color::Color;

/// Hue/saturation/lightness triple.
///
/// `h` is in degrees [0, 360); `s` and `l` are in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Converts the RGB channels of `color` to HSL. Alpha is ignored.
///
/// Achromatic inputs (`r == g == b`) yield `h = 0, s = 0`.
pub fn rgb_to_hsl(color: Color) -> Hsl {
    let r = f64::from(color.r()) / 255.0;
    let g = f64::from(color.g()) / 255.0;
    let b = f64::from(color.b()) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    // sextant in [0, 6)
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl { h: h * 60.0, s, l }
}

/// Converts HSL back to 8-bit RGB, rounding each channel to the nearest integer.
pub fn hsl_to_rgb(hsl: Hsl) -> [u8; 3] {
    let Hsl { h, s, l } = hsl;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let h = h / 360.0;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    [to_u8(r), to_u8(g), to_u8(b)]
}

/// Piecewise ramp mapping a fractional hue offset to one channel.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_u8(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
