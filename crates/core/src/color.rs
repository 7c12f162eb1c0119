//! The [`Color`] value type.
//!
//! A `Color` holds 8-bit RGB channels plus an `f64` alpha in [0, 1]. It is
//! immutable: every derivation (grayscale, complementary, triadic palette)
//! returns a new value. The channel ranges are invariants of the type,
//! enforced by `u8` for RGB and by [`Color::new`] for alpha, so formatting
//! never has to cope with out-of-range input.
//!
//! Parsing from hex and rgb()/rgba() strings lives in the `parse` module.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;
use crate::hsl::{hsl_to_rgb, rgb_to_hsl, Hsl};

/// One RGBA color.
///
/// Serializes as a hex string: `"#rrggbb"` when opaque, `"#rrggbbaa"`
/// otherwise. Deserializes from either the hex or the rgb()/rgba() form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: f64,
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl Color {
    /// Creates a color, validating that `a` lies in [0, 1].
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Result<Self, ColorError> {
        Ok(Self {
            r,
            g,
            b,
            a: check_alpha(a)?,
        })
    }

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Returns a copy of this color with a different alpha.
    pub fn with_alpha(self, a: f64) -> Result<Self, ColorError> {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Red channel.
    pub fn r(&self) -> u8 {
        self.r
    }

    /// Green channel.
    pub fn g(&self) -> u8 {
        self.g
    }

    /// Blue channel.
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Alpha in [0, 1], where 1 is fully opaque.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Draws a random color from the thread-local entropy source.
    ///
    /// See [`Color::random_with`] for the distribution.
    pub fn random(alpha: Option<f64>) -> Result<Self, ColorError> {
        Self::random_with(&mut rand::thread_rng(), alpha)
    }

    /// Draws a random color from `rng`.
    ///
    /// Each RGB channel is uniform over 0..=255. When `alpha` is `None`, the
    /// alpha is a uniform real in [0, 1) rounded to three decimals, so it
    /// takes values in {0.000, 0.001, ..., 1.000}. A supplied alpha is used
    /// as-is after range validation.
    pub fn random_with<R: Rng>(rng: &mut R, alpha: Option<f64>) -> Result<Self, ColorError> {
        let a = match alpha {
            Some(a) => check_alpha(a)?,
            None => round3(rng.gen::<f64>()),
        };
        Ok(Self {
            r: rng.gen(),
            g: rng.gen(),
            b: rng.gen(),
            a,
        })
    }

    /// Formats as lowercase `#rrggbb`, or `#rrggbbaa` when alpha is not exactly 1.
    ///
    /// The alpha byte is `round(a * 255)`.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = (self.r, self.g, self.b);
        if self.a == 1.0 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            let a = (self.a * 255.0).round() as u8;
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Formats as `rgba(r, g, b, a)`, always with four arguments.
    ///
    /// Alpha uses the shortest decimal form, so opaque colors print `1`.
    pub fn to_rgba(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    /// Luma-weighted grayscale (0.299 R + 0.587 G + 0.114 B). Alpha is kept.
    pub fn to_grayscale(&self) -> Color {
        let luma =
            0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b);
        let gray = luma.round().clamp(0.0, 255.0) as u8;
        Color {
            r: gray,
            g: gray,
            b: gray,
            a: self.a,
        }
    }

    /// Rotates the HSL hue by `degrees` (mod 360), keeping saturation,
    /// lightness, and alpha.
    ///
    /// Returns `ColorError::InvalidChannel` for a NaN or infinite angle.
    pub fn hue_rotate(&self, degrees: f64) -> Result<Color, ColorError> {
        if !degrees.is_finite() {
            return Err(ColorError::InvalidChannel {
                channel: "hue",
                value: degrees,
            });
        }
        Ok(self.rotate_hue(degrees))
    }

    /// Unchecked rotation for angles known to be finite.
    pub(crate) fn rotate_hue(&self, degrees: f64) -> Color {
        let hsl = rgb_to_hsl(*self);
        let h = (hsl.h + degrees).rem_euclid(360.0);
        let [r, g, b] = hsl_to_rgb(Hsl { h, ..hsl });
        tracing::trace!(from = %self, degrees, h, "hue rotation");
        Color { r, g, b, a: self.a }
    }

    /// The complementary color: hue rotated by 180 degrees.
    ///
    /// This is a hue opposite, not a guarantee of a perceptual contrast ratio.
    pub fn contrast_color(&self) -> Color {
        self.rotate_hue(180.0)
    }

    /// Triadic palette: `[self, hue + 120, hue + 240]`, all with `self`'s alpha.
    pub fn palette(&self) -> [Color; 3] {
        [*self, self.rotate_hue(120.0), self.rotate_hue(240.0)]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

pub(crate) fn check_alpha(a: f64) -> Result<f64, ColorError> {
    if (0.0..=1.0).contains(&a) {
        Ok(a)
    } else {
        Err(ColorError::InvalidChannel {
            channel: "alpha",
            value: a,
        })
    }
}

/// Rounds to three decimal places.
pub(crate) fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
