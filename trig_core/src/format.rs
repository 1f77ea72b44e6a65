//! # Display Formatting
//!
//! Fixed-precision rendering of computed scalars. Any non-finite value
//! (NaN from an out-of-domain input, ±∞ from a singular tangent) renders as
//! `"undefined"` rather than leaking `NaN`/`inf` to the user.

use serde::{Deserialize, Serialize};

/// Text shown in place of a non-finite value
pub const UNDEFINED: &str = "undefined";

/// Format `value` with `decimals` digits after the point, or "undefined".
///
/// ```rust
/// use trig_core::format::fixed;
///
/// assert_eq!(fixed(0.70710678, 4), "0.7071");
/// assert_eq!(fixed(f64::NAN, 4), "undefined");
/// ```
pub fn fixed(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        // Avoid "-0.0000" for tiny negatives
        let rounded = format!("{:.*}", decimals, value);
        if rounded.starts_with('-') && rounded[1..].chars().all(|c| c == '0' || c == '.') {
            rounded[1..].to_string()
        } else {
            rounded
        }
    } else {
        log::warn!("non-finite value {} displayed as undefined", value);
        UNDEFINED.to_string()
    }
}

/// Format a value the way a slider shows it: integers without a fraction,
/// everything else with the shortest round-trip representation.
///
/// ```rust
/// use trig_core::format::compact;
///
/// assert_eq!(compact(45.0), "45");
/// assert_eq!(compact(0.5), "0.5");
/// ```
pub fn compact(value: f64) -> String {
    if !value.is_finite() {
        return UNDEFINED.to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// One labelled line of a section's text output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLine {
    pub label: String,
    pub value: String,
    /// Rendered as a success indicator (e.g. special angle detected)
    #[serde(default)]
    pub highlight: bool,
}

impl DisplayLine {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            highlight: false,
        }
    }

    /// A line rendered as a success indicator
    pub fn success(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            highlight: true,
            ..Self::new(label, value)
        }
    }
}

impl std::fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_precision() {
        assert_eq!(fixed(8.660254, 3), "8.660");
        assert_eq!(fixed(21.650635, 2), "21.65");
        assert_eq!(fixed(1.0, 4), "1.0000");
    }

    #[test]
    fn test_fixed_undefined() {
        assert_eq!(fixed(f64::INFINITY, 2), UNDEFINED);
        assert_eq!(fixed(f64::NEG_INFINITY, 2), UNDEFINED);
        assert_eq!(fixed(f64::NAN, 2), UNDEFINED);
    }

    #[test]
    fn test_fixed_negative_zero() {
        assert_eq!(fixed(-1e-17, 4), "0.0000");
        assert_eq!(fixed(-0.5, 1), "-0.5");
    }

    #[test]
    fn test_compact() {
        assert_eq!(compact(-360.0), "-360");
        assert_eq!(compact(2.5), "2.5");
        assert_eq!(compact(f64::NAN), UNDEFINED);
    }

    #[test]
    fn test_display_line() {
        let line = DisplayLine::new("Quadrant", "II");
        assert_eq!(line.to_string(), "Quadrant: II");
        assert!(DisplayLine::success("Special angle", "45°").highlight);
    }
}
