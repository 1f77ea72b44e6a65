//! # Angle Units
//!
//! Type-safe wrappers for angular measurements. Inputs arrive in degrees (the
//! UI works in degrees), the math library works in radians; the newtypes keep
//! the two from being mixed up while serializing as bare numbers.
//!
//! ## Example
//!
//! ```rust
//! use trig_core::units::{Degrees, Radians};
//!
//! let right = Degrees(90.0);
//! let rad: Radians = right.into();
//! assert!((rad.0 - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Fixed conversion factor from degrees to radians (π/180)
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// Fixed conversion factor from radians to degrees (180/π)
pub const RAD_TO_DEG: f64 = 180.0 / PI;

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0 * DEG_TO_RAD)
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0 * RAD_TO_DEG)
    }
}

impl Degrees {
    /// Convert to radians
    pub fn to_radians(self) -> Radians {
        self.into()
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Radians {
    /// Convert to degrees
    pub fn to_degrees(self) -> Degrees {
        self.into()
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degrees_to_radians() {
        let rad: Radians = Degrees(180.0).into();
        assert_relative_eq!(rad.0, PI);
    }

    #[test]
    fn test_radians_to_degrees() {
        let deg = Radians(PI / 6.0).to_degrees();
        assert_relative_eq!(deg.0, 30.0, epsilon = 1e-12);
    }

    #[test]
    fn test_value_round_trip() {
        let deg = Degrees(225.0);
        assert_relative_eq!(deg.to_radians().to_degrees().value(), 225.0, epsilon = 1e-12);
        assert_relative_eq!(Degrees(-90.0).to_radians().value(), -PI / 2.0);
    }

    #[test]
    fn test_serialization() {
        let deg = Degrees(45.0);
        let json = serde_json::to_string(&deg).unwrap();
        assert_eq!(json, "45.0");

        let roundtrip: Degrees = serde_json::from_str(&json).unwrap();
        assert_eq!(deg, roundtrip);
    }
}
