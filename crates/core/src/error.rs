//! Error types for huekit core.

use thiserror::Error;

/// Errors produced while parsing, constructing, or grouping colors.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A hex or rgb()/rgba() string could not be parsed.
    #[error("cannot parse color '{input}': {reason}")]
    Parse { input: String, reason: String },

    /// A channel value was outside its valid range.
    ///
    /// RGB channels must be integers in [0, 255]; alpha must be in [0, 1].
    #[error("invalid {channel} channel value: {value}")]
    InvalidChannel { channel: &'static str, value: f64 },

    /// A harmony scheme name was not recognized.
    #[error("unknown scheme: {0}")]
    UnknownScheme(String),

    /// A palette could not be constructed from the given colors.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),
}

impl ColorError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::debug!(input, reason = %reason, "rejected color string");
        ColorError::Parse {
            input: input.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_includes_input_and_reason() {
        let err = ColorError::parse("#zz0000", "invalid hex digit");
        let msg = format!("{err}");
        assert!(msg.contains("#zz0000"), "missing input in: {msg}");
        assert!(msg.contains("invalid hex digit"), "missing reason in: {msg}");
    }

    #[test]
    fn invalid_channel_includes_channel_and_value() {
        let err = ColorError::InvalidChannel {
            channel: "alpha",
            value: 1.5,
        };
        let msg = format!("{err}");
        assert!(msg.contains("alpha"), "missing channel in: {msg}");
        assert!(msg.contains("1.5"), "missing value in: {msg}");
    }

    #[test]
    fn unknown_scheme_includes_name() {
        let err = ColorError::UnknownScheme("tetradic".into());
        let msg = format!("{err}");
        assert!(msg.contains("tetradic"), "missing name in: {msg}");
    }

    #[test]
    fn invalid_palette_includes_message() {
        let err = ColorError::InvalidPalette("empty".into());
        let msg = format!("{err}");
        assert!(msg.contains("empty"), "missing message in: {msg}");
    }

    #[test]
    fn color_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColorError>();
    }

    #[test]
    fn color_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<ColorError>();
    }
}
