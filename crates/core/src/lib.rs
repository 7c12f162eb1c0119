#![deny(unsafe_code)]
//! Core color type for huekit.
//!
//! Provides the immutable [`Color`] value (8-bit RGB plus `f64` alpha) with
//! hex and rgb()/rgba() parsing and formatting, the HSL conversions behind
//! hue rotation, grayscale/complementary/triadic derivations, harmony
//! [`Palette`]s, and the seedable [`Xorshift64`] PRNG for reproducible
//! random colors.

pub mod color;
pub mod error;
pub mod hsl;
pub mod palette;
mod parse;
pub mod prng;

pub use color::Color;
pub use error::ColorError;
pub use hsl::{hsl_to_rgb, rgb_to_hsl, Hsl};
pub use palette::{Palette, Scheme};
pub use prng::Xorshift64;
