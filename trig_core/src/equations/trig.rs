//! # Basic Trigonometric Formulas
//!
//! The guarded tangent, quadrant classification, the special-angle lookup
//! and the inverse functions with their forward counterparts. Angle
//! conversion lives on [`crate::units::Degrees`] and [`crate::units::Radians`].
//!
//! ## Thresholds
//!
//! Two independent tangent thresholds exist and both are reproduced:
//!
//! - [`COS_ZERO_THRESHOLD`] (1e-10): below this |cos θ| the tangent is infinite
//! - [`TAN_DISPLAY_LIMIT`] (1000): larger magnitudes are *displayed* as undefined
//!
//! Plotting uses a third limit, [`TAN_PLOT_LIMIT`] (10).

use serde::{Deserialize, Serialize};
use std::fmt;


/// |cos θ| at or below this value makes tan θ undefined
pub const COS_ZERO_THRESHOLD: f64 = 1e-10;

/// Tangent magnitudes at or above this value are displayed as "undefined"
pub const TAN_DISPLAY_LIMIT: f64 = 1000.0;

/// Tangent magnitudes above this value are masked or clamped in plots
pub const TAN_PLOT_LIMIT: f64 = 10.0;

/// The 17 special angles (degrees) recognised by the unit circle explorer.
pub const SPECIAL_ANGLES_DEG: [f64; 17] = [
    0.0, 30.0, 45.0, 60.0, 90.0, 120.0, 135.0, 150.0, 180.0, 210.0, 225.0, 240.0, 270.0, 300.0,
    315.0, 330.0, 360.0,
];

// =============================================================================
// TANGENT
// =============================================================================

/// Tangent computed as sin/cos, infinite when |cos| is at or below 1e-10
///
/// # Example
/// ```rust
/// use trig_core::equations::trig::tan_guarded;
/// use trig_core::units::Degrees;
///
/// assert!(tan_guarded(Degrees(90.0).to_radians().value()).is_infinite());
/// assert!((tan_guarded(Degrees(45.0).to_radians().value()) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn tan_guarded(radians: f64) -> f64 {
    let cos = radians.cos();
    if cos.abs() > COS_ZERO_THRESHOLD {
        radians.sin() / cos
    } else {
        f64::INFINITY
    }
}

/// Whether a tangent value is shown numerically (finite and below 1000 in magnitude)
#[inline]
pub fn tan_is_displayable(tan: f64) -> bool {
    tan.abs() < TAN_DISPLAY_LIMIT
}

// =============================================================================
// QUADRANTS
// =============================================================================

/// Quadrant of the unit circle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    I,
    II,
    III,
    IV,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Quadrant::I, Quadrant::II, Quadrant::III, Quadrant::IV];

    /// Roman numeral label
    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::I => "I",
            Quadrant::II => "II",
            Quadrant::III => "III",
            Quadrant::IV => "IV",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify an angle in degrees into a quadrant.
///
/// `[0, 90]` is I, `(90, 180]` is II, `(180, 270]` is III, everything else IV.
/// Boundaries belong to the lower quadrant, so 90° is I and 360° is IV.
pub fn quadrant(angle_deg: f64) -> Quadrant {
    if (0.0..=90.0).contains(&angle_deg) {
        Quadrant::I
    } else if angle_deg > 90.0 && angle_deg <= 180.0 {
        Quadrant::II
    } else if angle_deg > 180.0 && angle_deg <= 270.0 {
        Quadrant::III
    } else {
        Quadrant::IV
    }
}

/// Exact match against the 17 special angles
pub fn is_special_angle(angle_deg: f64) -> bool {
    SPECIAL_ANGLES_DEG.contains(&angle_deg)
}

// =============================================================================
// INVERSE FUNCTIONS
// =============================================================================

/// Inverse trigonometric function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InverseKind {
    #[default]
    Arcsin,
    Arccos,
    Arctan,
}

impl InverseKind {
    pub const ALL: [InverseKind; 3] = [InverseKind::Arcsin, InverseKind::Arccos, InverseKind::Arctan];

    pub fn name(&self) -> &'static str {
        match self {
            InverseKind::Arcsin => "arcsin",
            InverseKind::Arccos => "arccos",
            InverseKind::Arctan => "arctan",
        }
    }

    /// Name of the forward function (sin, cos, tan)
    pub fn forward_name(&self) -> &'static str {
        match self {
            InverseKind::Arcsin => "sin",
            InverseKind::Arccos => "cos",
            InverseKind::Arctan => "tan",
        }
    }

    /// Evaluate the inverse function, returning radians (NaN outside the domain)
    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            InverseKind::Arcsin => x.asin(),
            InverseKind::Arccos => x.acos(),
            InverseKind::Arctan => x.atan(),
        }
    }

    /// Evaluate the corresponding forward function at `radians`
    #[inline]
    pub fn forward(&self, radians: f64) -> f64 {
        match self {
            InverseKind::Arcsin => radians.sin(),
            InverseKind::Arccos => radians.cos(),
            InverseKind::Arctan => radians.tan(),
        }
    }

    pub fn domain_text(&self) -> &'static str {
        match self {
            InverseKind::Arcsin | InverseKind::Arccos => "[-1, 1]",
            InverseKind::Arctan => "(-∞, ∞)",
        }
    }

    pub fn range_text(&self) -> &'static str {
        match self {
            InverseKind::Arcsin => "[-π/2, π/2]",
            InverseKind::Arccos => "[0, π]",
            InverseKind::Arctan => "(-π/2, π/2)",
        }
    }

    /// Input range offered by the UI slider
    pub fn input_range(&self) -> (f64, f64) {
        match self {
            InverseKind::Arcsin | InverseKind::Arccos => (-1.0, 1.0),
            InverseKind::Arctan => (-10.0, 10.0),
        }
    }

    /// Principal branch of the forward function, in radians
    pub fn principal_branch(&self) -> (f64, f64) {
        use std::f64::consts::{FRAC_PI_2, PI};
        match self {
            InverseKind::Arcsin => (-FRAC_PI_2, FRAC_PI_2),
            InverseKind::Arccos => (0.0, PI),
            // Pulled in from the asymptotes so the branch stays plottable
            InverseKind::Arctan => (-FRAC_PI_2 + 0.1, FRAC_PI_2 - 0.1),
        }
    }
}

impl fmt::Display for InverseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use crate::units::{Degrees, Radians};
    use std::f64::consts::PI;

    #[test]
    fn test_pythagorean_identity() {
        let mut deg = -720.0;
        while deg <= 720.0 {
            let rad = Degrees(deg).to_radians().value();
            assert_abs_diff_eq!(rad.sin().powi(2) + rad.cos().powi(2), 1.0, epsilon = 1e-9);
            deg += 7.5;
        }
    }

    #[test]
    fn test_tangent_undefined_at_90() {
        let rad = Degrees(90.0).to_radians().value();
        assert!(rad.cos().abs() < COS_ZERO_THRESHOLD);
        assert!(tan_guarded(rad).is_infinite());
        assert!(!tan_is_displayable(tan_guarded(rad)));
    }

    #[test]
    fn test_tangent_near_90_is_finite_but_hidden() {
        let tan = tan_guarded(Degrees(89.999).to_radians().value());
        assert!(tan.is_finite());
        assert!(tan > 50_000.0);
        assert!(!tan_is_displayable(tan));
    }

    #[test]
    fn test_tangent_display_threshold() {
        assert!(tan_is_displayable(999.9));
        assert!(!tan_is_displayable(1000.0));
        assert!(!tan_is_displayable(-1000.0));
        assert!(!tan_is_displayable(f64::NAN));
    }

    #[test]
    fn test_quadrant_boundaries() {
        assert_eq!(quadrant(0.0), Quadrant::I);
        assert_eq!(quadrant(90.0), Quadrant::I);
        assert_eq!(quadrant(90.0001), Quadrant::II);
        assert_eq!(quadrant(180.0), Quadrant::II);
        assert_eq!(quadrant(270.0), Quadrant::III);
        assert_eq!(quadrant(270.0001), Quadrant::IV);
        assert_eq!(quadrant(360.0), Quadrant::IV);
    }

    #[test]
    fn test_special_angles() {
        assert_eq!(SPECIAL_ANGLES_DEG.len(), 17);
        assert!(is_special_angle(45.0));
        assert!(!is_special_angle(46.0));
        assert!(is_special_angle(0.0));
        assert!(is_special_angle(360.0));
        assert!(!is_special_angle(15.0));
    }

    #[test]
    fn test_inverse_round_trip() {
        let rad = InverseKind::Arcsin.apply(0.5);
        assert_relative_eq!(rad, PI / 6.0, epsilon = 1e-12);
        assert_relative_eq!(Radians(rad).to_degrees().value(), 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(InverseKind::Arcsin.forward(rad), 0.5, epsilon = 1e-9);

        let deg = Radians(InverseKind::Arctan.apply(1.732)).to_degrees().value();
        assert_abs_diff_eq!(deg, 60.0, epsilon = 0.01);
    }

    #[test]
    fn test_inverse_outside_domain_is_nan() {
        assert!(InverseKind::Arccos.apply(1.5).is_nan());
        assert!(InverseKind::Arctan.apply(1.0e6).is_finite());
    }
}
