//! Color harmonies built from HSL hue rotation.
//!
//! Every generator keeps the base color first and derives the rest with
//! [`Color::hue_rotate`], so all members share the base's saturation,
//! lightness, and alpha.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::color::Color;
use crate::error::ColorError;

/// Default spread in degrees for [`Scheme::Analogous`].
pub const DEFAULT_ANALOGOUS_SPREAD: f64 = 30.0;

/// Default member count for [`Scheme::Analogous`].
pub const DEFAULT_ANALOGOUS_COUNT: usize = 3;

/// Largest member count [`Palette::analogous`] accepts.
pub const MAX_ANALOGOUS_COUNT: usize = 360;

/// A named color harmony.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Complementary,
    Triadic,
    SplitComplementary,
    Analogous,
}

impl Scheme {
    const ALL: [Scheme; 4] = [
        Scheme::Complementary,
        Scheme::Triadic,
        Scheme::SplitComplementary,
        Scheme::Analogous,
    ];

    /// The lowercase name accepted by [`Scheme::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Scheme::Complementary => "complementary",
            Scheme::Triadic => "triadic",
            Scheme::SplitComplementary => "split-complementary",
            Scheme::Analogous => "analogous",
        }
    }

    /// Returns the names of all schemes.
    pub fn list_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.name()).collect()
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name() == s)
            .ok_or_else(|| ColorError::UnknownScheme(s.to_string()))
    }
}

/// An ordered, non-empty list of colors.
///
/// Serializes as an array of hex strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Creates a palette from explicit colors. Requires at least one color.
    pub fn new(colors: Vec<Color>) -> Result<Self, ColorError> {
        if colors.is_empty() {
            return Err(ColorError::InvalidPalette(
                "palette requires at least 1 color".to_string(),
            ));
        }
        Ok(Self { colors })
    }

    /// Creates a palette by parsing each string as a hex or rgb()/rgba() color.
    ///
    /// Requires at least one color.
    pub fn from_strs(inputs: &[&str]) -> Result<Self, ColorError> {
        let colors: Result<Vec<Color>, ColorError> = inputs.iter().map(|s| s.parse()).collect();
        Self::new(colors?)
    }

    /// Builds the palette for `scheme`, using the default analogous spread
    /// and count.
    pub fn from_scheme(base: Color, scheme: Scheme) -> Self {
        match scheme {
            Scheme::Complementary => Self::complementary(base),
            Scheme::Triadic => Self::triadic(base),
            Scheme::SplitComplementary => Self::split_complementary(base),
            Scheme::Analogous => {
                Self::spread_evenly(base, DEFAULT_ANALOGOUS_SPREAD, DEFAULT_ANALOGOUS_COUNT)
            }
        }
    }

    /// Base and its hue opposite.
    pub fn complementary(base: Color) -> Self {
        Self {
            colors: vec![base, base.contrast_color()],
        }
    }

    /// Base, base+120, base+240.
    pub fn triadic(base: Color) -> Self {
        Self {
            colors: base.palette().to_vec(),
        }
    }

    /// Base, base+150, base+210.
    pub fn split_complementary(base: Color) -> Self {
        Self {
            colors: vec![base, base.rotate_hue(150.0), base.rotate_hue(210.0)],
        }
    }

    /// `count` colors spread evenly over `spread` degrees centered on the base hue.
    ///
    /// For `count <= 1` the palette is just the base. Unlike the other
    /// generators the base is not necessarily first: with an odd count it
    /// sits in the middle.
    ///
    /// Rejects a NaN or infinite `spread` and a `count` above
    /// [`MAX_ANALOGOUS_COUNT`].
    pub fn analogous(base: Color, spread: f64, count: usize) -> Result<Self, ColorError> {
        if !spread.is_finite() {
            return Err(ColorError::InvalidChannel {
                channel: "hue",
                value: spread,
            });
        }
        if count > MAX_ANALOGOUS_COUNT {
            return Err(ColorError::InvalidPalette(format!(
                "analogous palette allows at most {MAX_ANALOGOUS_COUNT} colors, got {count}"
            )));
        }
        Ok(Self::spread_evenly(base, spread, count))
    }

    fn spread_evenly(base: Color, spread: f64, count: usize) -> Self {
        if count <= 1 {
            return Self { colors: vec![base] };
        }
        // |offset| <= |spread| / 2, so a finite spread gives finite offsets
        let colors = (0..count)
            .map(|i| {
                let offset = spread * (i as f64 / (count - 1) as f64 - 0.5);
                base.rotate_hue(offset)
            })
            .collect();
        Self { colors }
    }

    /// The colors in order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed palette.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterates over the colors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
