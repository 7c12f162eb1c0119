//! Parsing colors from hex and CSS-style rgb()/rgba() strings.
//!
//! Accepted forms:
//! * `#RRGGBB` and `#RRGGBBAA` (hex digits are case insensitive)
//! * `rgb(r, g, b)`, `rgba(r, g, b, a)`, and the four-argument `rgb(r, g, b, a)`
//!
//! Malformed input is rejected with [`ColorError::Parse`]; numbers that parse
//! but fall outside a channel's range are rejected with
//! [`ColorError::InvalidChannel`].
//!
//! One quirk is kept on purpose: an explicit rgba alpha of exactly `0` is
//! read as "no alpha" and becomes `1`. `rgba(0,0,0,0)` is therefore opaque
//! black, not transparent black.

use std::str::FromStr;

use crate::color::{check_alpha, round3, Color};
use crate::error::ColorError;

impl Color {
    /// Parses `#RRGGBB` or `#RRGGBBAA`.
    ///
    /// The alpha byte of the eight-digit form becomes `round(AA / 255, 3)`.
    pub fn from_hex(hex: &str) -> Result<Color, ColorError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| ColorError::parse(hex, "expected leading '#'"))?;
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorError::parse(
                hex,
                format!("expected 6 or 8 hex digits, got {}", digits.len()),
            ));
        }
        if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::parse(hex, "invalid hex digit"));
        }

        // all-ASCII past this point, so byte slicing is safe
        let byte = |i: usize| -> Result<u8, ColorError> {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| ColorError::parse(hex, e.to_string()))
        };

        let a = if digits.len() == 8 {
            round3(f64::from(byte(6)?) / 255.0)
        } else {
            1.0
        };

        Color::new(byte(0)?, byte(2)?, byte(4)?, a)
    }

    /// Parses `rgb(r, g, b)`, `rgba(r, g, b, a)`, or `rgb(r, g, b, a)`.
    ///
    /// Surrounding whitespace and whitespace around each field is ignored.
    /// RGB fields must be integers in [0, 255]. An alpha field must be a
    /// number in [0, 1]; an alpha of exactly `0` is replaced by `1` (see the
    /// module docs).
    pub fn from_rgba(rgba: &str) -> Result<Color, ColorError> {
        let trimmed = rgba.trim();
        let lower = trimmed.to_ascii_lowercase();
        let args = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .ok_or_else(|| ColorError::parse(rgba, "expected rgb( or rgba("))?
            .strip_suffix(')')
            .ok_or_else(|| ColorError::parse(rgba, "missing closing ')'"))?;

        let fields: Vec<&str> = args.split(',').map(str::trim).collect();
        if fields.len() != 3 && fields.len() != 4 {
            return Err(ColorError::parse(
                rgba,
                format!("expected 3 or 4 fields, got {}", fields.len()),
            ));
        }

        let r = parse_channel(rgba, fields[0], "red")?;
        let g = parse_channel(rgba, fields[1], "green")?;
        let b = parse_channel(rgba, fields[2], "blue")?;
        let a = match fields.get(3) {
            Some(field) => parse_alpha(rgba, field)?,
            None => 1.0,
        };

        Color::new(r, g, b, a)
    }
}

fn parse_number(input: &str, field: &str) -> Result<f64, ColorError> {
    field
        .parse::<f64>()
        .map_err(|_| ColorError::parse(input, format!("'{field}' is not a number")))
}

fn parse_channel(input: &str, field: &str, channel: &'static str) -> Result<u8, ColorError> {
    let value = parse_number(input, field)?;
    if value.fract() != 0.0 || !(0.0..=255.0).contains(&value) {
        return Err(ColorError::InvalidChannel { channel, value });
    }
    Ok(value as u8)
}

fn parse_alpha(input: &str, field: &str) -> Result<f64, ColorError> {
    match parse_number(input, field)? {
        // explicit zero reads as absent
        a if a == 0.0 => Ok(1.0),
        a => check_alpha(a),
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parses either form, dispatching on a leading `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('#') {
            Color::from_hex(s)
        } else {
            Color::from_rgba(s)
        }
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(r: u8, g: u8, b: u8, a: f64) -> Color {
        Color::new(r, g, b, a).unwrap()
    }

    // -- Hex --

    #[test]
    fn from_hex_eight_digits_derives_alpha() {
        let c = Color::from_hex("#ff340031").unwrap();
        assert_eq!(c, rgba(255, 52, 0, 0.192));
        assert_eq!(c.to_hex(), "#ff340031");
    }

    #[test]
    fn from_hex_six_digits_is_opaque() {
        assert_eq!(Color::from_hex("#00ff7f").unwrap(), Color::rgb(0, 255, 127));
    }

    #[test]
    fn from_hex_is_case_insensitive() {
        assert_eq!(
            Color::from_hex("#AbCdEf").unwrap(),
            Color::from_hex("#abcdef").unwrap()
        );
    }

    #[test]
    fn from_hex_ff_alpha_is_opaque() {
        let c = Color::from_hex("#123456ff").unwrap();
        assert_eq!(c.a(), 1.0);
        assert_eq!(c.to_hex(), "#123456");
    }

    #[test]
    fn from_hex_rejects_missing_hash() {
        assert!(matches!(
            Color::from_hex("ff0000"),
            Err(ColorError::Parse { .. })
        ));
    }

    #[test]
    fn from_hex_rejects_wrong_lengths() {
        for input in ["#", "#fff", "#ffff", "#fffff", "#fffffff", "#fffffffff"] {
            assert!(
                matches!(Color::from_hex(input), Err(ColorError::Parse { .. })),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn from_hex_rejects_non_hex_digits() {
        for input in ["#zz0000", "#+f0000", "#ff00 0", "#ff00é"] {
            assert!(
                matches!(Color::from_hex(input), Err(ColorError::Parse { .. })),
                "{input} should be rejected"
            );
        }
    }

    // -- rgb()/rgba() --

    #[test]
    fn from_rgba_with_alpha() {
        assert_eq!(
            Color::from_rgba("rgba(255,161,12,0.5)").unwrap(),
            rgba(255, 161, 12, 0.5)
        );
    }

    #[test]
    fn from_rgb_without_alpha_is_opaque() {
        assert_eq!(
            Color::from_rgba("rgb(255,161,12)").unwrap(),
            Color::rgb(255, 161, 12)
        );
    }

    #[test]
    fn four_argument_rgb_honors_alpha() {
        assert_eq!(
            Color::from_rgba("rgb(255,161,12,0.8)").unwrap(),
            rgba(255, 161, 12, 0.8)
        );
    }

    #[test]
    fn explicit_zero_alpha_reads_as_opaque() {
        assert_eq!(
            Color::from_rgba("rgba(0,0,0,0)").unwrap(),
            Color::rgb(0, 0, 0)
        );
        assert_eq!(Color::from_rgba("rgba(0,0,0,0.0)").unwrap().a(), 1.0);
    }

    #[test]
    fn from_rgba_tolerates_whitespace_and_case() {
        assert_eq!(
            Color::from_rgba("  RGBA( 10 , 20 , 30 , 0.25 )\n").unwrap(),
            rgba(10, 20, 30, 0.25)
        );
    }

    #[test]
    fn from_rgba_round_trips_to_rgba() {
        let c = rgba(1, 2, 3, 0.75);
        assert_eq!(Color::from_rgba(&c.to_rgba()).unwrap(), c);
    }

    #[test]
    fn from_rgba_rejects_malformed_shapes() {
        for input in [
            "",
            "hsl(1,2,3)",
            "rgb(1,2,3",
            "rgb 1,2,3)",
            "rgb(1,2)",
            "rgb(1,2,3,4,5)",
            "rgb(1,,3)",
            "rgb(red,0,0)",
            "rgba(1,2,3,half)",
        ] {
            assert!(
                matches!(Color::from_rgba(input), Err(ColorError::Parse { .. })),
                "{input:?} should be a parse error"
            );
        }
    }

    #[test]
    fn from_rgba_rejects_out_of_range_channels() {
        let cases = [
            ("rgb(256,0,0)", "red"),
            ("rgb(0,-1,0)", "green"),
            ("rgb(0,0,12.5)", "blue"),
            ("rgba(0,0,0,1.5)", "alpha"),
            ("rgba(0,0,0,-0.5)", "alpha"),
        ];
        for (input, expected) in cases {
            match Color::from_rgba(input) {
                Err(ColorError::InvalidChannel { channel, .. }) => {
                    assert_eq!(channel, expected, "{input}")
                }
                other => panic!("{input}: expected InvalidChannel, got {other:?}"),
            }
        }
    }

    // -- FromStr --

    #[test]
    fn from_str_dispatches_on_hash() {
        let hex: Color = "#ff0000".parse().unwrap();
        let func: Color = "rgb(255, 0, 0)".parse().unwrap();
        assert_eq!(hex, func);
        let padded: Color = "  #ff0000  ".parse().unwrap();
        assert_eq!(padded, hex);
    }

    #[test]
    fn try_from_str_matches_parse() {
        assert_eq!(
            Color::try_from("rgba(4, 5, 6, 0.5)").unwrap(),
            rgba(4, 5, 6, 0.5)
        );
        assert!(Color::try_from("nope").is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arbitrary_input_never_panics(s in "\\PC*") {
                let _ = s.parse::<Color>();
            }

            #[test]
            fn hex_parse_accepts_any_six_hex_digits(s in "#[0-9a-fA-F]{6}") {
                let c = Color::from_hex(&s).unwrap();
                prop_assert_eq!(c.to_hex(), s.to_ascii_lowercase());
            }
        }
    }
}
