//! Color literal handling
//!
//! The stop model stores color strings verbatim and the serializers pass
//! them through uninterpreted. Front-ends that accept free-text color
//! input can opt into validation here before handing the value to the
//! model.

use thiserror::Error;

/// Error for color literals that fail validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color: {0}")]
    Invalid(String),
}

/// Validate a CSS color literal and normalize it to lowercase `#rrggbb`
///
/// Accepts anything the CSS color grammar does (hex in short or long form,
/// `rgb()`, `hsl()`, named colors, ...). Alpha is discarded: the palette
/// table and the gradient outputs only deal in opaque six-digit hex.
///
/// # Examples
///
/// ```
/// use gradgen::color::normalize;
///
/// assert_eq!(normalize("#3B82F6").unwrap(), "#3b82f6");
/// assert_eq!(normalize("#fff").unwrap(), "#ffffff");
/// assert_eq!(normalize("red").unwrap(), "#ff0000");
/// assert!(normalize("#12345g").is_err());
/// ```
pub fn normalize(input: &str) -> Result<String, ColorError> {
    let color =
        csscolorparser::parse(input.trim()).map_err(|_| ColorError::Invalid(input.to_string()))?;
    let [r, g, b, _] = color.to_rgba8();
    Ok(format!("#{r:02x}{g:02x}{b:02x}"))
}
