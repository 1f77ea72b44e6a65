//! # Wave Formulas
//!
//! Parameterised periodic functions of the form
//!
//! ```text
//! y(x) = A·fn(f·x + φ) + D
//! ```
//!
//! with amplitude `A`, angular frequency `f`, phase `φ` (radians) and
//! vertical shift `D`.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;

/// Base function of a wave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WaveKind {
    #[default]
    Sine,
    Cosine,
    Tangent,
}

impl WaveKind {
    pub const ALL: [WaveKind; 3] = [WaveKind::Sine, WaveKind::Cosine, WaveKind::Tangent];

    pub fn display_name(&self) -> &'static str {
        match self {
            WaveKind::Sine => "Sine",
            WaveKind::Cosine => "Cosine",
            WaveKind::Tangent => "Tangent",
        }
    }

    /// Short function name used in equations (sin, cos, tan)
    pub fn function_name(&self) -> &'static str {
        match self {
            WaveKind::Sine => "sin",
            WaveKind::Cosine => "cos",
            WaveKind::Tangent => "tan",
        }
    }

    /// Evaluate the unmodified base function
    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            WaveKind::Sine => x.sin(),
            WaveKind::Cosine => x.cos(),
            WaveKind::Tangent => x.tan(),
        }
    }
}

impl fmt::Display for WaveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Period of a wave with angular frequency `frequency`: 2π/f
///
/// # Example
/// ```rust
/// use trig_core::equations::wave::period;
///
/// assert!((period(1.0) - 2.0 * std::f64::consts::PI).abs() < 1e-12);
/// assert!((period(2.0) - std::f64::consts::PI).abs() < 1e-12);
/// ```
#[inline]
pub fn period(frequency: f64) -> f64 {
    TAU / frequency
}

/// Evaluate y = A·fn(f·x + φ) + D at `x`
#[inline]
pub fn evaluate(kind: WaveKind, amplitude: f64, frequency: f64, phase_rad: f64, shift: f64, x: f64) -> f64 {
    amplitude * kind.apply(frequency * x + phase_rad) + shift
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_period() {
        assert_abs_diff_eq!(period(1.0), 6.2832, epsilon = 1e-4);
        assert_abs_diff_eq!(period(2.0), 3.1416, epsilon = 1e-4);
    }

    #[test]
    fn test_evaluate_identity_parameters() {
        for x in [-PI, -1.0, 0.0, 0.5, 2.0] {
            assert_abs_diff_eq!(evaluate(WaveKind::Sine, 1.0, 1.0, 0.0, 0.0, x), x.sin(), epsilon = 1e-12);
            assert_abs_diff_eq!(evaluate(WaveKind::Cosine, 1.0, 1.0, 0.0, 0.0, x), x.cos(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_evaluate_shifted() {
        // 2·sin(x + π/2) + 1 at x = 0 is 3
        assert_abs_diff_eq!(evaluate(WaveKind::Sine, 2.0, 1.0, FRAC_PI_2, 1.0, 0.0), 3.0, epsilon = 1e-12);
    }
}
