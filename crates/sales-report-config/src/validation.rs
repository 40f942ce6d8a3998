//! Validation utilities and regex patterns

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

/// Regex pattern for CSS hex colors in short or long form (e.g., #444, #FF6384)
pub static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").expect("Invalid hex color regex pattern")
});

/// Validate that every palette entry is a hex color
#[allow(clippy::ptr_arg)]
pub fn validate_palette(palette: &Vec<String>) -> Result<(), ValidationError> {
    if palette.iter().all(|color| HEX_COLOR_REGEX.is_match(color)) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_palette_color"))
    }
}
