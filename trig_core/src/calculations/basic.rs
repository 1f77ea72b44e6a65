//! # Basic Trig Functions
//!
//! Evaluates sine, cosine and tangent at a single angle and describes a
//! four-panel figure: the point on the unit circle and the three function
//! curves with the current angle marked.
//!
//! ## Tangent Policy
//!
//! - |cos θ| ≤ 1e-10 → tangent is undefined (`tan == None`)
//! - |tan θ| ≥ 1000 → tangent is *displayed* as "undefined"
//! - |tan(x)| > 10 → the tangent curve has a gap at that sample
//!
//! ## Example
//!
//! ```rust
//! use trig_core::calculations::basic::{calculate, BasicInput};
//!
//! let result = calculate(&BasicInput { angle_deg: 45.0 });
//! assert!((result.sin - result.cos).abs() < 1e-12);
//! assert_eq!(result.tan_display(), "1.0000");
//!
//! let vertical = calculate(&BasicInput { angle_deg: 90.0 });
//! assert_eq!(vertical.tan_display(), "undefined");
//! ```

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::chart::{linspace, mask_above, CircleShape, Color, Curve, Figure, Marker, Panel, RefLine, Segment, Style};
use crate::equations::{tan_guarded, tan_is_displayable, Formula, TAN_PLOT_LIMIT};
use crate::errors::{TrigError, TrigResult};
use crate::format::{compact, fixed, DisplayLine, UNDEFINED};
use crate::settings::SampleDensity;
use crate::units::Degrees;

/// Formulas applied by this section
pub const FORMULAS: &[Formula] = &[
    Formula::DegreesToRadians,
    Formula::PythagoreanIdentity,
    Formula::TangentQuotient,
];

/// Input for the basic function evaluator.
///
/// Any finite angle is accepted; the UI slider covers [-360°, 360°] in 15° steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasicInput {
    /// Angle in degrees
    pub angle_deg: f64,
}

impl Default for BasicInput {
    fn default() -> Self {
        BasicInput { angle_deg: 45.0 }
    }
}

impl BasicInput {
    /// Validate input parameters.
    pub fn validate(&self) -> TrigResult<()> {
        if !self.angle_deg.is_finite() {
            return Err(TrigError::invalid_input(
                "angle_deg",
                self.angle_deg.to_string(),
                "Angle must be a finite number",
            ));
        }
        Ok(())
    }
}

/// Results of the basic function evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicResult {
    pub angle_deg: f64,
    pub angle_rad: f64,
    pub sin: f64,
    pub cos: f64,
    /// `None` when |cos| ≤ 1e-10
    pub tan: Option<f64>,
}

impl BasicResult {
    /// Whether the tangent is shown as a number (defined and below 1000 in magnitude)
    pub fn tan_is_displayable(&self) -> bool {
        self.tan.is_some_and(tan_is_displayable)
    }

    /// Tangent text: four decimals or "undefined"
    pub fn tan_display(&self) -> String {
        match self.tan {
            Some(tan) if tan_is_displayable(tan) => fixed(tan, 4),
            _ => UNDEFINED.to_string(),
        }
    }

    /// Labelled text lines for the result panel
    pub fn summary(&self) -> Vec<DisplayLine> {
        let deg = compact(self.angle_deg);
        vec![
            DisplayLine::new("Angle", format!("{}° = {} radians", deg, fixed(self.angle_rad, 4))),
            DisplayLine::new(format!("sin({}°)", deg), fixed(self.sin, 4)),
            DisplayLine::new(format!("cos({}°)", deg), fixed(self.cos, 4)),
            DisplayLine::new(format!("tan({}°)", deg), self.tan_display()),
        ]
    }
}

/// Evaluate sin, cos and the guarded tangent.
pub fn calculate(input: &BasicInput) -> BasicResult {
    let angle_rad = Degrees(input.angle_deg).to_radians().value();
    let tan = tan_guarded(angle_rad);

    BasicResult {
        angle_deg: input.angle_deg,
        angle_rad,
        sin: angle_rad.sin(),
        cos: angle_rad.cos(),
        tan: tan.is_finite().then_some(tan),
    }
}

/// Describe the 2×2 figure: unit circle, sine, cosine, tangent.
pub fn figure(result: &BasicResult, samples: &SampleDensity) -> Figure {
    let xs = linspace(-TAU, TAU, samples.curve);
    let marker_line = || RefLine::new(result.angle_rad, Style::dashed(Color::RED, 1.5).with_alpha(0.7));

    let unit_circle = Panel::new(format!("Unit Circle - Angle: {}°", compact(result.angle_deg)))
        .x_range(-1.5, 1.5)
        .y_range(-1.5, 1.5)
        .equal_aspect()
        .with_legend()
        .with(CircleShape {
            center: (0.0, 0.0),
            radius: 1.0,
            style: Style::solid(Color::BLACK, 2.0),
        })
        .with(Segment::new((0.0, 0.0), (result.cos, result.sin), Style::solid(Color::RED, 2.0)).with_end_markers())
        .with(
            Segment::new((result.cos, 0.0), (result.cos, result.sin), Style::dashed(Color::BLUE, 2.0).with_alpha(0.7))
                .labeled(format!("sin = {}", fixed(result.sin, 3))),
        )
        .with(
            Segment::new((0.0, 0.0), (result.cos, 0.0), Style::dashed(Color::GREEN, 2.0).with_alpha(0.7))
                .labeled(format!("cos = {}", fixed(result.cos, 3))),
        );

    let sine = Panel::new("Sine Function")
        .x_label("Angle (radians)")
        .y_label("sin(x)")
        .with_legend()
        .with(Curve::from_fn("sin(x)", &xs, f64::sin, Style::solid(Color::BLUE, 2.0)))
        .vline(marker_line())
        .with(Marker::new(result.angle_rad, result.sin, 10.0, Color::RED));

    let cosine = Panel::new("Cosine Function")
        .x_label("Angle (radians)")
        .y_label("cos(x)")
        .with_legend()
        .with(Curve::from_fn("cos(x)", &xs, f64::cos, Style::solid(Color::GREEN, 2.0)))
        .vline(marker_line())
        .with(Marker::new(result.angle_rad, result.cos, 10.0, Color::RED));

    let tan_samples: Vec<f64> = xs.iter().map(|x| x.tan()).collect();
    let mut tangent = Panel::new("Tangent Function")
        .x_label("Angle (radians)")
        .y_label("tan(x)")
        .y_range(-5.0, 5.0)
        .with_legend()
        .with(Curve::from_masked(
            "tan(x)",
            xs.clone(),
            mask_above(&tan_samples, TAN_PLOT_LIMIT),
            Style::solid(Color::ORANGE, 2.0),
        ))
        .vline(marker_line());
    if let Some(tan) = result.tan.filter(|t| t.abs() < TAN_PLOT_LIMIT) {
        tangent.push(Marker::new(result.angle_rad, tan, 10.0, Color::RED));
    }

    Figure::grid("Basic Trigonometric Functions", 2, 2)
        .with_panel(unit_circle)
        .with_panel(sine)
        .with_panel(cosine)
        .with_panel(tangent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::PlotElement;
    use approx::assert_abs_diff_eq;

    fn markers(panel: &Panel) -> usize {
        panel.elements.iter().filter(|e| matches!(e, PlotElement::Marker(_))).count()
    }

    #[test]
    fn test_values_at_30_degrees() {
        let result = calculate(&BasicInput { angle_deg: 30.0 });
        assert_abs_diff_eq!(result.sin, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(result.cos, 3f64.sqrt() / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.tan.unwrap(), 1.0 / 3f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_pythagorean_identity_any_angle() {
        for angle_deg in [-1234.5, -360.0, -90.0, 0.0, 17.0, 90.0, 270.0, 725.0, 10_000.0] {
            let r = calculate(&BasicInput { angle_deg });
            assert_abs_diff_eq!(r.sin * r.sin + r.cos * r.cos, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_tangent_undefined_at_90_and_270() {
        for angle_deg in [90.0, -90.0, 270.0] {
            let r = calculate(&BasicInput { angle_deg });
            assert!(r.tan.is_none(), "tan({}) should be undefined", angle_deg);
            assert_eq!(r.tan_display(), UNDEFINED);
        }
    }

    #[test]
    fn test_tangent_large_but_finite_is_hidden() {
        let r = calculate(&BasicInput { angle_deg: 89.999 });
        assert!(r.tan.is_some());
        assert!(!r.tan_is_displayable());
        assert_eq!(r.tan_display(), UNDEFINED);

        let r = calculate(&BasicInput { angle_deg: 89.0 });
        assert!(r.tan_is_displayable());
        assert_eq!(r.tan_display(), "57.2900");
    }

    #[test]
    fn test_summary_lines() {
        let lines = calculate(&BasicInput { angle_deg: 45.0 }).summary();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].value, "45° = 0.7854 radians");
        assert_eq!(lines[1].label, "sin(45°)");
        assert_eq!(lines[1].value, "0.7071");
        assert_eq!(lines[3].value, "1.0000");
    }

    #[test]
    fn test_summary_shows_undefined_above_display_limit() {
        // tan(89.95°) is about 1146
        let result = calculate(&BasicInput { angle_deg: 89.95 });
        assert!(result.tan.unwrap() > 1000.0);

        let lines = result.summary();
        assert_eq!(lines[3].label, "tan(89.95°)");
        assert_eq!(lines[3].value, UNDEFINED);
        assert_ne!(lines[1].value, UNDEFINED);
    }

    #[test]
    fn test_figure_layout() {
        let r = calculate(&BasicInput::default());
        let fig = figure(&r, &SampleDensity::default());
        assert_eq!((fig.rows, fig.cols, fig.panels.len()), (2, 2, 4));
        assert_eq!(fig.panels[0].title, "Unit Circle - Angle: 45°");
        assert!(fig.panels[0].equal_aspect);
        assert_eq!(fig.panels[3].y_range, Some((-5.0, 5.0)));
    }

    #[test]
    fn test_tangent_curve_is_masked_not_clamped() {
        let r = calculate(&BasicInput::default());
        let fig = figure(&r, &SampleDensity::default());
        let curve = fig.panels[3]
            .elements
            .iter()
            .find_map(|e| match e {
                PlotElement::Curve(c) => Some(c),
                _ => None,
            })
            .unwrap();
        assert_eq!(curve.len(), 1000);
        assert!(curve.gap_count() > 0);
        assert!(curve.y.iter().flatten().all(|v| v.abs() <= TAN_PLOT_LIMIT));
        // Four asymptotes in [-2π, 2π] split the curve into five runs
        assert_eq!(curve.segments().len(), 5);
    }

    #[test]
    fn test_tangent_marker_only_when_small() {
        let small = figure(&calculate(&BasicInput { angle_deg: 45.0 }), &SampleDensity::default());
        assert_eq!(markers(&small.panels[3]), 1);

        let steep = figure(&calculate(&BasicInput { angle_deg: 88.0 }), &SampleDensity::default());
        assert_eq!(markers(&steep.panels[3]), 0);

        let vertical = figure(&calculate(&BasicInput { angle_deg: 90.0 }), &SampleDensity::default());
        assert_eq!(markers(&vertical.panels[3]), 0);
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        assert!(BasicInput { angle_deg: 720.0 }.validate().is_ok());
        assert!(BasicInput { angle_deg: f64::NAN }.validate().is_err());
        assert!(BasicInput { angle_deg: f64::INFINITY }.validate().is_err());
    }
}
