//! # Wave Functions
//!
//! Generates y = A·fn(f·x + φ) + D for sine, cosine or tangent over
//! x ∈ [-4π, 4π] and compares it with the unmodified base function.
//!
//! Tangent samples are clamped to ±10 (boundary value substituted, no gaps),
//! for both the modified and the base curve.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::chart::{clamp_to, linspace, Color, Curve, Figure, Panel, RefLine, Style};
use crate::equations::wave::evaluate;
use crate::equations::{period, Formula, WaveKind, TAN_PLOT_LIMIT};
use crate::errors::{check_range, TrigError, TrigResult};
use crate::format::{compact, fixed, DisplayLine};
use crate::settings::SampleDensity;
use crate::units::Degrees;

pub const FORMULAS: &[Formula] = &[Formula::WaveEquation, Formula::WavePeriod];

/// Half-width of the plotted x interval
const X_EXTENT: f64 = 4.0 * PI;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveInput {
    pub kind: WaveKind,
    /// A, (0, 5]
    pub amplitude: f64,
    /// f, (0, 3]
    pub frequency: f64,
    /// φ in degrees, [-180, 180]
    pub phase_deg: f64,
    /// D, [-2, 2]
    pub vertical_shift: f64,
}

impl Default for WaveInput {
    fn default() -> Self {
        WaveInput {
            kind: WaveKind::Sine,
            amplitude: 1.0,
            frequency: 1.0,
            phase_deg: 0.0,
            vertical_shift: 0.0,
        }
    }
}

impl WaveInput {
    pub fn validate(&self) -> TrigResult<()> {
        check_positive("amplitude", self.amplitude, 5.0)?;
        check_positive("frequency", self.frequency, 3.0)?;
        check_range("phase_deg", self.phase_deg, -180.0, 180.0)?;
        check_range("vertical_shift", self.vertical_shift, -2.0, 2.0)
    }

    pub fn phase_rad(&self) -> f64 {
        Degrees(self.phase_deg).to_radians().value()
    }

    /// Evaluate the modified wave at `x`
    pub fn at(&self, x: f64) -> f64 {
        evaluate(self.kind, self.amplitude, self.frequency, self.phase_rad(), self.vertical_shift, x)
    }
}

/// (0, max]
fn check_positive(field: &str, value: f64, max: f64) -> TrigResult<()> {
    if value.is_finite() && value > 0.0 && value <= max {
        Ok(())
    } else {
        Err(TrigError::invalid_input(
            field,
            value.to_string(),
            format!("Must be greater than 0 and at most {}", max),
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveResult {
    pub input: WaveInput,
    pub phase_rad: f64,
    /// 2π / f
    pub period: f64,
    /// D + A
    pub max: f64,
    /// D − A
    pub min: f64,
    pub equation: String,
    pub equation_latex: String,
}

impl WaveResult {
    pub fn summary(&self) -> Vec<DisplayLine> {
        let input = &self.input;
        vec![
            DisplayLine::new("Equation", self.equation.clone()),
            DisplayLine::new("Period", fixed(self.period, 2)),
            DisplayLine::new("Amplitude", compact(input.amplitude)),
            DisplayLine::new("Frequency", compact(input.frequency)),
            DisplayLine::new(
                "Phase Shift",
                format!("{}° = {} rad", compact(input.phase_deg), fixed(self.phase_rad, 2)),
            ),
            DisplayLine::new("Vertical Shift", compact(input.vertical_shift)),
            DisplayLine::new("Max", fixed(self.max, 2)),
            DisplayLine::new("Min", fixed(self.min, 2)),
        ]
    }
}

/// " + v" or " - |v|"
fn signed_term(value: String) -> String {
    match value.strip_prefix('-') {
        Some(magnitude) => format!(" - {}", magnitude),
        None => format!(" + {}", value),
    }
}

/// Plain-text and LaTeX forms of the equation
fn equations(input: &WaveInput, phase_rad: f64) -> (String, String) {
    let name = input.kind.function_name();
    let amplitude = compact(input.amplitude);
    let frequency = compact(input.frequency);
    let phase = signed_term(fixed(phase_rad, 2));
    let shift = signed_term(compact(input.vertical_shift));

    (
        format!("y = {}·{}({}x{}){}", amplitude, name, frequency, phase, shift),
        format!(r"y = {} \{}({}x{}){}", amplitude, name, frequency, phase, shift),
    )
}

pub fn calculate(input: &WaveInput) -> WaveResult {
    let phase_rad = input.phase_rad();
    let (equation, equation_latex) = equations(input, phase_rad);

    WaveResult {
        input: *input,
        phase_rad,
        period: period(input.frequency),
        max: input.vertical_shift + input.amplitude,
        min: input.vertical_shift - input.amplitude,
        equation,
        equation_latex,
    }
}

/// Sample the modified and base curves over [-4π, 4π].
///
/// Returns `(x, modified, base)`; tangent values are clamped to ±10.
pub fn sample(input: &WaveInput, samples: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let xs = linspace(-X_EXTENT, X_EXTENT, samples);
    let modified: Vec<f64> = xs.iter().map(|&x| input.at(x)).collect();
    let base: Vec<f64> = xs.iter().map(|&x| input.kind.apply(x)).collect();

    match input.kind {
        WaveKind::Tangent => (xs, clamp_to(&modified, TAN_PLOT_LIMIT), clamp_to(&base, TAN_PLOT_LIMIT)),
        WaveKind::Sine | WaveKind::Cosine => (xs, modified, base),
    }
}

/// Two stacked panels: the modified wave with reference lines, and the comparison.
pub fn figure(result: &WaveResult, samples: &SampleDensity) -> Figure {
    let input = &result.input;
    let name = input.kind.display_name();
    let (xs, modified, base) = sample(input, samples.wave);
    let y_limit = match input.kind {
        WaveKind::Tangent => 10.0,
        WaveKind::Sine | WaveKind::Cosine => 6.0,
    };
    let modified_curve = Curve::from_samples(format!("Modified {}", name), xs.clone(), &modified, Style::solid(Color::BLUE, 3.0));
    let guide = |color: Color, dotted: bool| {
        let style = if dotted { Style::dotted(color, 1.5) } else { Style::dashed(color, 1.5) };
        style.with_alpha(0.7)
    };

    let wave = Panel::new(format!("Modified {} Wave", name))
        .x_label("x (radians)")
        .y_label("y")
        .x_range(-X_EXTENT, X_EXTENT)
        .y_range(-y_limit, y_limit)
        .with_legend()
        .with(modified_curve.clone())
        .hline(
            RefLine::new(input.vertical_shift, guide(Color::RED, false))
                .labeled(format!("Vertical Shift = {}", compact(input.vertical_shift))),
        )
        .hline(RefLine::new(result.max, guide(Color::GREEN, true)).labeled(format!("Max = {}", fixed(result.max, 2))))
        .hline(RefLine::new(result.min, guide(Color::GREEN, true)).labeled(format!("Min = {}", fixed(result.min, 2))));

    let comparison = Panel::new("Comparison: Base vs Modified Function")
        .x_label("x (radians)")
        .y_label("y")
        .x_range(-X_EXTENT, X_EXTENT)
        .y_range(-y_limit, y_limit)
        .with_legend()
        .with(Curve::from_samples(
            format!("Base {}", name),
            xs,
            &base,
            Style::solid(Color::GRAY, 2.0).with_alpha(0.5),
        ))
        .with(modified_curve);

    Figure::grid("Trigonometric Wave Functions", 2, 1)
        .with_panel(wave)
        .with_panel(comparison)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::PlotElement;
    use approx::assert_abs_diff_eq;

    fn wave(kind: WaveKind) -> WaveInput {
        WaveInput { kind, ..Default::default() }
    }

    #[test]
    fn test_period() {
        let r = calculate(&WaveInput::default());
        assert_abs_diff_eq!(r.period, 2.0 * PI, epsilon = 1e-12);
        assert_eq!(fixed(r.period, 4), "6.2832");

        let r = calculate(&WaveInput { frequency: 2.0, ..Default::default() });
        assert_abs_diff_eq!(r.period, 3.1416, epsilon = 1e-4);
    }

    #[test]
    fn test_equation_strings() {
        let r = calculate(&WaveInput::default());
        assert_eq!(r.equation, "y = 1·sin(1x + 0.00) + 0");
        assert_eq!(r.equation_latex, r"y = 1 \sin(1x + 0.00) + 0");

        let r = calculate(&WaveInput {
            kind: WaveKind::Cosine,
            amplitude: 2.5,
            frequency: 0.5,
            phase_deg: -90.0,
            vertical_shift: -1.2,
        });
        assert_eq!(r.equation, "y = 2.5·cos(0.5x - 1.57) - 1.2");
    }

    #[test]
    fn test_max_min_and_summary() {
        let r = calculate(&WaveInput {
            amplitude: 2.0,
            vertical_shift: 0.5,
            phase_deg: 45.0,
            ..Default::default()
        });
        assert_eq!(r.max, 2.5);
        assert_eq!(r.min, -1.5);
        let summary = r.summary();
        assert_eq!(summary[4].value, "45° = 0.79 rad");
        assert_eq!(summary[6].value, "2.50");
        assert_eq!(summary[7].value, "-1.50");
    }

    #[test]
    fn test_tangent_is_clamped_not_masked() {
        let (xs, modified, base) = sample(&wave(WaveKind::Tangent), 2000);
        assert_eq!(xs.len(), 2000);
        assert!(modified.iter().all(|v| v.is_finite() && v.abs() <= 10.0));
        assert!(base.iter().all(|v| v.abs() <= 10.0));
        assert!(modified.iter().any(|&v| v == 10.0));
        assert!(modified.iter().any(|&v| v == -10.0));

        let fig = figure(&calculate(&wave(WaveKind::Tangent)), &SampleDensity::default());
        for element in &fig.panels[1].elements {
            if let PlotElement::Curve(c) = element {
                assert_eq!(c.gap_count(), 0);
            }
        }
    }

    #[test]
    fn test_sine_not_clamped() {
        let input = WaveInput { amplitude: 5.0, vertical_shift: 2.0, ..Default::default() };
        let (_, modified, _) = sample(&input, 2000);
        let peak = modified.iter().cloned().fold(f64::MIN, f64::max);
        assert_abs_diff_eq!(peak, 7.0, epsilon = 1e-3);
    }

    #[test]
    fn test_figure_reference_lines_and_ranges() {
        let r = calculate(&WaveInput { amplitude: 2.0, vertical_shift: 1.0, ..Default::default() });
        let fig = figure(&r, &SampleDensity::default());
        assert_eq!((fig.rows, fig.cols), (2, 1));

        let hlines: Vec<f64> = fig.panels[0]
            .elements
            .iter()
            .filter_map(|e| match e {
                PlotElement::HLine(l) => Some(l.value),
                _ => None,
            })
            .collect();
        assert_eq!(hlines, vec![1.0, 3.0, -1.0]);
        assert_eq!(fig.panels[0].y_range, Some((-6.0, 6.0)));

        let tan = figure(&calculate(&wave(WaveKind::Tangent)), &SampleDensity::default());
        assert_eq!(tan.panels[0].y_range, Some((-10.0, 10.0)));
        assert_eq!(tan.panels[0].title, "Modified Tangent Wave");
    }

    #[test]
    fn test_validation() {
        assert!(WaveInput::default().validate().is_ok());
        assert!(WaveInput { amplitude: 0.0, ..Default::default() }.validate().is_err());
        assert!(WaveInput { amplitude: 5.5, ..Default::default() }.validate().is_err());
        assert!(WaveInput { frequency: 3.0, ..Default::default() }.validate().is_ok());
        assert!(WaveInput { phase_deg: 181.0, ..Default::default() }.validate().is_err());
        assert!(WaveInput { vertical_shift: -2.1, ..Default::default() }.validate().is_err());
    }
}
