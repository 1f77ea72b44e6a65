//! # Right Triangle Calculator
//!
//! Solves a right triangle from two independent measurements. Four input
//! modes are supported; each fixes two quantities and derives the rest:
//!
//! | Mode              | Given                | Derived                                  |
//! |-------------------|----------------------|------------------------------------------|
//! | `AngleHypotenuse` | angle, hypotenuse    | opp = hyp·sin θ, adj = hyp·cos θ         |
//! | `TwoSides`        | opposite, adjacent   | hyp = √(opp² + adj²), θ = atan(opp/adj)  |
//! | `AngleAdjacent`   | angle, adjacent      | opp = adj·tan θ, hyp = adj / cos θ       |
//! | `AngleOpposite`   | angle, opposite      | adj = opp / tan θ, hyp = opp / sin θ     |
//!
//! Angles are in degrees and restricted to (0°, 90°); sides must be at
//! least [`MIN_SIDE`].
//!
//! ## Example
//!
//! ```rust
//! use trig_core::calculations::triangle::{calculate, TriangleInput};
//!
//! let solved = calculate(&TriangleInput::AngleHypotenuse { angle_deg: 30.0, hypotenuse: 10.0 });
//! assert!((solved.opposite - 5.0).abs() < 1e-9);
//! assert!((solved.area - 21.650635).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};

use crate::chart::{linspace, Annotation, Color, Curve, Figure, Panel, RefLine, Style};
use crate::equations::{
    area, hypotenuse_angle_from_sides, perimeter, sides_from_angle_adjacent,
    sides_from_angle_hypotenuse, sides_from_angle_opposite, Formula,
};
use crate::errors::{TrigError, TrigResult};
use crate::format::{compact, fixed, DisplayLine};
use crate::settings::SampleDensity;
use crate::units::{Degrees, Radians};

/// Smallest side length the input widgets accept
pub const MIN_SIDE: f64 = 0.1;

/// Angle sweep for the second panel, degrees
const SWEEP_DEG: (f64, f64) = (1.0, 89.0);

/// Which pair of measurements is given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriangleMode {
    #[default]
    AngleHypotenuse,
    TwoSides,
    AngleAdjacent,
    AngleOpposite,
}

impl TriangleMode {
    pub const ALL: [TriangleMode; 4] = [
        TriangleMode::AngleHypotenuse,
        TriangleMode::TwoSides,
        TriangleMode::AngleAdjacent,
        TriangleMode::AngleOpposite,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            TriangleMode::AngleHypotenuse => "Angle and Hypotenuse",
            TriangleMode::TwoSides => "Two Sides",
            TriangleMode::AngleAdjacent => "Angle and Adjacent",
            TriangleMode::AngleOpposite => "Angle and Opposite",
        }
    }

    pub fn formula(&self) -> Formula {
        match self {
            TriangleMode::AngleHypotenuse => Formula::TriangleFromAngleHypotenuse,
            TriangleMode::TwoSides => Formula::TriangleFromTwoSides,
            TriangleMode::AngleAdjacent => Formula::TriangleFromAngleAdjacent,
            TriangleMode::AngleOpposite => Formula::TriangleFromAngleOpposite,
        }
    }
}

impl std::fmt::Display for TriangleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The two independent measurements for each mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TriangleInput {
    AngleHypotenuse { angle_deg: f64, hypotenuse: f64 },
    TwoSides { opposite: f64, adjacent: f64 },
    AngleAdjacent { angle_deg: f64, adjacent: f64 },
    AngleOpposite { angle_deg: f64, opposite: f64 },
}

impl Default for TriangleInput {
    fn default() -> Self {
        TriangleInput::for_mode(TriangleMode::default())
    }
}

impl TriangleInput {
    /// Default measurements for a mode (30°, hypotenuse 10, opposite 5, adjacent 8)
    pub fn for_mode(mode: TriangleMode) -> Self {
        match mode {
            TriangleMode::AngleHypotenuse => TriangleInput::AngleHypotenuse { angle_deg: 30.0, hypotenuse: 10.0 },
            TriangleMode::TwoSides => TriangleInput::TwoSides { opposite: 5.0, adjacent: 8.0 },
            TriangleMode::AngleAdjacent => TriangleInput::AngleAdjacent { angle_deg: 30.0, adjacent: 8.0 },
            TriangleMode::AngleOpposite => TriangleInput::AngleOpposite { angle_deg: 30.0, opposite: 5.0 },
        }
    }

    pub fn mode(&self) -> TriangleMode {
        match self {
            TriangleInput::AngleHypotenuse { .. } => TriangleMode::AngleHypotenuse,
            TriangleInput::TwoSides { .. } => TriangleMode::TwoSides,
            TriangleInput::AngleAdjacent { .. } => TriangleMode::AngleAdjacent,
            TriangleInput::AngleOpposite { .. } => TriangleMode::AngleOpposite,
        }
    }

    /// Validate input parameters.
    ///
    /// Angles must lie strictly inside (0, 90); sides must be at least 0.1.
    pub fn validate(&self) -> TrigResult<()> {
        match *self {
            TriangleInput::AngleHypotenuse { angle_deg, hypotenuse } => {
                check_angle(angle_deg)?;
                check_side("hypotenuse", hypotenuse)
            }
            TriangleInput::TwoSides { opposite, adjacent } => {
                check_side("opposite", opposite)?;
                check_side("adjacent", adjacent)
            }
            TriangleInput::AngleAdjacent { angle_deg, adjacent } => {
                check_angle(angle_deg)?;
                check_side("adjacent", adjacent)
            }
            TriangleInput::AngleOpposite { angle_deg, opposite } => {
                check_angle(angle_deg)?;
                check_side("opposite", opposite)
            }
        }
    }
}

fn check_angle(angle_deg: f64) -> TrigResult<()> {
    if angle_deg.is_finite() && angle_deg > 0.0 && angle_deg < 90.0 {
        Ok(())
    } else {
        Err(TrigError::invalid_input(
            "angle_deg",
            angle_deg.to_string(),
            "Must be strictly between 0 and 90 degrees",
        ))
    }
}

fn check_side(field: &str, value: f64) -> TrigResult<()> {
    if value.is_finite() && value >= MIN_SIDE {
        Ok(())
    } else {
        Err(TrigError::invalid_input(
            field,
            value.to_string(),
            format!("Must be at least {}", MIN_SIDE),
        ))
    }
}

/// A fully solved right triangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleResult {
    pub mode: TriangleMode,
    /// Angle A (between adjacent and hypotenuse), degrees
    pub angle_deg: f64,
    pub opposite: f64,
    pub adjacent: f64,
    pub hypotenuse: f64,
    pub area: f64,
    pub perimeter: f64,
}

impl TriangleResult {
    /// The other acute angle, 90° − A
    pub fn angle_b_deg(&self) -> f64 {
        90.0 - self.angle_deg
    }

    pub fn angle_rad(&self) -> f64 {
        Degrees(self.angle_deg).to_radians().value()
    }

    pub fn summary(&self) -> Vec<DisplayLine> {
        vec![
            DisplayLine::new("Angle A", format!("{}°", fixed(self.angle_deg, 2))),
            DisplayLine::new("Angle B", format!("{}°", fixed(self.angle_b_deg(), 2))),
            DisplayLine::new("Opposite", fixed(self.opposite, 3)),
            DisplayLine::new("Adjacent", fixed(self.adjacent, 3)),
            DisplayLine::new("Hypotenuse", fixed(self.hypotenuse, 3)),
            DisplayLine::new("Area", fixed(self.area, 3)),
            DisplayLine::new("Perimeter", fixed(self.perimeter, 3)),
        ]
    }

    pub fn formulas(&self) -> Vec<Formula> {
        vec![self.mode.formula(), Formula::TriangleArea, Formula::TrianglePerimeter]
    }
}

/// Solve the triangle for the given mode.
pub fn calculate(input: &TriangleInput) -> TriangleResult {
    let (angle_deg, opposite, adjacent, hypotenuse) = match *input {
        TriangleInput::AngleHypotenuse { angle_deg, hypotenuse } => {
            let (opposite, adjacent) = sides_from_angle_hypotenuse(Degrees(angle_deg).to_radians().value(), hypotenuse);
            (angle_deg, opposite, adjacent, hypotenuse)
        }
        TriangleInput::TwoSides { opposite, adjacent } => {
            let (hypotenuse, angle_rad) = hypotenuse_angle_from_sides(opposite, adjacent);
            (Radians(angle_rad).to_degrees().value(), opposite, adjacent, hypotenuse)
        }
        TriangleInput::AngleAdjacent { angle_deg, adjacent } => {
            let (opposite, hypotenuse) = sides_from_angle_adjacent(Degrees(angle_deg).to_radians().value(), adjacent);
            (angle_deg, opposite, adjacent, hypotenuse)
        }
        TriangleInput::AngleOpposite { angle_deg, opposite } => {
            let (adjacent, hypotenuse) = sides_from_angle_opposite(Degrees(angle_deg).to_radians().value(), opposite);
            (angle_deg, opposite, adjacent, hypotenuse)
        }
    };

    TriangleResult {
        mode: input.mode(),
        angle_deg,
        opposite,
        adjacent,
        hypotenuse,
        area: area(opposite, adjacent),
        perimeter: perimeter(opposite, adjacent, hypotenuse),
    }
}

/// Two panels: the triangle drawing and the angle sweep.
pub fn figure(result: &TriangleResult, samples: &SampleDensity) -> Figure {
    Figure::grid("Right Triangle Calculator", 1, 2)
        .with_panel(drawing_panel(result))
        .with_panel(sweep_panel(result, samples.sweep))
}

fn drawing_panel(result: &TriangleResult) -> Panel {
    let (adj, opp, hyp) = (result.adjacent, result.opposite, result.hypotenuse);
    let square = adj.min(opp) * 0.1;

    Panel::new("Right Triangle Visualization")
        .x_range(-2.0, adj + 2.0)
        .y_range(-2.0, opp + 2.0)
        .equal_aspect()
        .with(Curve::polyline(
            &[(0.0, 0.0), (adj, 0.0), (0.0, opp), (0.0, 0.0)],
            Style::solid(Color::BLUE, 3.0),
        ))
        .with(Annotation::new(format!("Adjacent = {}", fixed(adj, 2)), adj / 2.0, -0.5, 12.0))
        .with(Annotation::new(format!("Opposite = {}", fixed(opp, 2)), -1.0, opp / 2.0, 12.0).rotated(90.0))
        .with(
            Annotation::new(format!("Hypotenuse = {}", fixed(hyp, 2)), adj / 2.0 + 0.5, opp / 2.0 + 0.5, 12.0)
                .rotated(-result.angle_deg),
        )
        .with(Annotation::new(format!("{}°", fixed(result.angle_deg, 1)), 1.0, 0.5, 12.0))
        .with(Curve::polyline(
            &[(0.0, 0.0), (square, 0.0), (square, square), (0.0, square), (0.0, 0.0)],
            Style::solid(Color::RED, 2.0),
        ))
}

fn sweep_panel(result: &TriangleResult, samples: usize) -> Panel {
    let angles = linspace(SWEEP_DEG.0, SWEEP_DEG.1, samples);
    let curve = |label: &str, color: Color, f: &dyn Fn(f64) -> f64| {
        Curve::from_fn(label, &angles, |deg| f(Degrees(deg).to_radians().value()), Style::solid(color, 2.0))
    };
    let current = |label: String| {
        RefLine::new(result.angle_deg, Style::dotted(Color::BLACK, 1.5).with_alpha(0.7)).labeled(label)
    };
    let fixed_line = |name: &str, value: f64, color: Color| {
        RefLine::new(value, Style::dashed(color, 1.5)).labeled(format!("{} = {}", name, fixed(value, 2)))
    };

    let sides = Panel::new("How Side Lengths Change with Angle")
        .x_label("Angle (degrees)")
        .y_label("Side Length")
        .with_legend();
    let current_label = format!("Current angle = {}°", compact(result.angle_deg));

    match result.mode {
        TriangleMode::AngleHypotenuse => {
            let hyp = result.hypotenuse;
            sides
                .with(curve("Opposite", Color::RED, &|a: f64| hyp * a.sin()))
                .with(curve("Adjacent", Color::GREEN, &|a: f64| hyp * a.cos()))
                .hline(fixed_line("Hypotenuse", hyp, Color::BLUE))
                .vline(current(current_label))
        }
        TriangleMode::AngleAdjacent => {
            let adj = result.adjacent;
            sides
                .with(curve("Opposite", Color::RED, &|a: f64| adj * a.tan()))
                .with(curve("Hypotenuse", Color::BLUE, &|a: f64| adj / a.cos()))
                .hline(fixed_line("Adjacent", adj, Color::GREEN))
                .vline(current(current_label))
        }
        TriangleMode::AngleOpposite => {
            let opp = result.opposite;
            sides
                .with(curve("Adjacent", Color::GREEN, &|a: f64| opp / a.tan()))
                .with(curve("Hypotenuse", Color::BLUE, &|a: f64| opp / a.sin()))
                .hline(fixed_line("Opposite", opp, Color::RED))
                .vline(current(current_label))
        }
        TriangleMode::TwoSides => Panel::new("Trigonometric Functions")
            .x_label("Angle (degrees)")
            .y_label("Function Value")
            .y_range(0.0, 3.0)
            .with_legend()
            .with(curve("sin", Color::RED, &f64::sin))
            .with(curve("cos", Color::GREEN, &f64::cos))
            .with(curve("tan", Color::BLUE, &f64::tan))
            .vline(current(format!("Current angle = {}°", fixed(result.angle_deg, 1)))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::PlotElement;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_angle_hypotenuse_30_10() {
        let r = calculate(&TriangleInput::AngleHypotenuse { angle_deg: 30.0, hypotenuse: 10.0 });
        assert_abs_diff_eq!(r.opposite, 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r.adjacent, 8.660, epsilon = 1e-3);
        assert_eq!(r.hypotenuse, 10.0);
        assert_abs_diff_eq!(r.area, 21.65, epsilon = 1e-2);
        assert_abs_diff_eq!(r.perimeter, 23.66, epsilon = 1e-2);
        assert_abs_diff_eq!(r.angle_b_deg(), 60.0, epsilon = 1e-12);
    }

    #[test]
    fn test_two_sides_then_angle_hypotenuse_reproduces_sides() {
        for (opposite, adjacent) in [(5.0, 8.0), (0.1, 0.1), (3.0, 4.0), (120.0, 0.5), (0.2, 75.0)] {
            let forward = calculate(&TriangleInput::TwoSides { opposite, adjacent });
            let back = calculate(&TriangleInput::AngleHypotenuse {
                angle_deg: forward.angle_deg,
                hypotenuse: forward.hypotenuse,
            });
            assert_abs_diff_eq!(back.opposite, opposite, epsilon = 1e-6);
            assert_abs_diff_eq!(back.adjacent, adjacent, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_all_modes_satisfy_pythagoras() {
        for mode in TriangleMode::ALL {
            let r = calculate(&TriangleInput::for_mode(mode));
            assert_abs_diff_eq!(
                r.hypotenuse * r.hypotenuse,
                r.opposite * r.opposite + r.adjacent * r.adjacent,
                epsilon = 1e-9
            );
            assert_abs_diff_eq!(r.area, 0.5 * r.opposite * r.adjacent, epsilon = 1e-12);
            assert_eq!(r.mode, mode);
        }
    }

    #[test]
    fn test_angle_adjacent_and_opposite() {
        let adj = calculate(&TriangleInput::AngleAdjacent { angle_deg: 45.0, adjacent: 8.0 });
        assert_abs_diff_eq!(adj.opposite, 8.0, epsilon = 1e-9);
        assert_abs_diff_eq!(adj.hypotenuse, 8.0 * 2f64.sqrt(), epsilon = 1e-9);

        let opp = calculate(&TriangleInput::AngleOpposite { angle_deg: 30.0, opposite: 5.0 });
        assert_abs_diff_eq!(opp.hypotenuse, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(opp.adjacent, 5.0 * 3f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn test_summary_precision() {
        let lines = calculate(&TriangleInput::default()).summary();
        let values: Vec<&str> = lines.iter().map(|l| l.value.as_str()).collect();
        assert_eq!(
            values,
            vec!["30.00°", "60.00°", "5.000", "8.660", "10.000", "21.651", "23.660"]
        );
    }

    #[test]
    fn test_validation() {
        assert!(TriangleInput::default().validate().is_ok());
        assert!(TriangleInput::AngleHypotenuse { angle_deg: 0.0, hypotenuse: 1.0 }.validate().is_err());
        assert!(TriangleInput::AngleOpposite { angle_deg: 90.0, opposite: 1.0 }.validate().is_err());
        assert!(TriangleInput::TwoSides { opposite: 0.05, adjacent: 1.0 }.validate().is_err());

        let err = TriangleInput::AngleAdjacent { angle_deg: 30.0, adjacent: -2.0 }.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_input_json_is_mode_tagged() {
        let json = serde_json::to_value(TriangleInput::for_mode(TriangleMode::TwoSides)).unwrap();
        assert_eq!(json["mode"], "two_sides");
        let back: TriangleInput = serde_json::from_value(json).unwrap();
        assert_eq!(back.mode(), TriangleMode::TwoSides);
    }

    #[test]
    fn test_drawing_panel() {
        let r = calculate(&TriangleInput::default());
        let fig = figure(&r, &SampleDensity::default());
        let drawing = &fig.panels[0];
        assert_abs_diff_eq!(drawing.x_range.unwrap().1, r.adjacent + 2.0, epsilon = 1e-12);
        assert_eq!(drawing.y_range, Some((-2.0, r.opposite + 2.0)));

        let square = drawing
            .elements
            .iter()
            .filter_map(|e| match e {
                PlotElement::Curve(c) if c.style.color == Color::RED => Some(c),
                _ => None,
            })
            .next()
            .unwrap();
        assert_abs_diff_eq!(square.x[1], 0.5, epsilon = 1e-12);

        let hyp_label = drawing
            .elements
            .iter()
            .find_map(|e| match e {
                PlotElement::Text(t) if t.content.starts_with("Hypotenuse") => Some(t),
                _ => None,
            })
            .unwrap();
        assert_eq!(hyp_label.content, "Hypotenuse = 10.00");
        assert_eq!(hyp_label.rotation_deg, -30.0);
    }

    #[test]
    fn test_sweep_panel_per_mode() {
        let samples = SampleDensity::default();

        let hyp = figure(&calculate(&TriangleInput::default()), &samples);
        let sweep = &hyp.panels[1];
        assert_eq!(sweep.title, "How Side Lengths Change with Angle");
        let labels: Vec<&str> = sweep.legend_entries().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["Opposite", "Adjacent", "Hypotenuse = 10.00", "Current angle = 30°"]);

        let two = figure(&calculate(&TriangleInput::for_mode(TriangleMode::TwoSides)), &samples);
        let sweep = &two.panels[1];
        assert_eq!(sweep.title, "Trigonometric Functions");
        assert_eq!(sweep.y_range, Some((0.0, 3.0)));
        let curves: Vec<&Curve> = sweep
            .elements
            .iter()
            .filter_map(|e| match e {
                PlotElement::Curve(c) => Some(c),
                _ => None,
            })
            .collect();
        assert_eq!(curves.len(), 3);
        assert_eq!(curves[0].len(), 100);
        assert_eq!(curves[0].x[0], 1.0);
        assert_eq!(curves[0].x[99], 89.0);
    }
}
