//! # Unit Circle Explorer
//!
//! Classifies an angle in [0°, 360°] into a quadrant, reports its point
//! (cos θ, sin θ) on the unit circle and flags the special angles.
//!
//! ## Quadrant Tie-Break
//!
//! | Angle           | Quadrant |
//! |-----------------|----------|
//! | [0, 90]         | I        |
//! | (90, 180]       | II       |
//! | (180, 270]      | III      |
//! | anything else   | IV       |

use std::f64::consts::PI;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::chart::{
    Annotation, CircleShape, Color, Figure, Marker, Panel, RefLine, Segment, Style, TextBox,
};
use crate::equations::{is_special_angle, quadrant, Formula, Quadrant};
use crate::errors::{check_range, TrigResult};
use crate::format::{compact, fixed, DisplayLine};
use crate::units::Degrees;

pub const FORMULAS: &[Formula] = &[
    Formula::DegreesToRadians,
    Formula::UnitCirclePoint,
    Formula::QuadrantSigns,
];

/// Multiples of π/6 and π/4 in one turn, as fractions of π
const CANONICAL_FRACTIONS: [f64; 16] = [
    0.0,
    1.0 / 6.0,
    1.0 / 4.0,
    1.0 / 3.0,
    1.0 / 2.0,
    2.0 / 3.0,
    3.0 / 4.0,
    5.0 / 6.0,
    1.0,
    7.0 / 6.0,
    5.0 / 4.0,
    4.0 / 3.0,
    3.0 / 2.0,
    5.0 / 3.0,
    7.0 / 4.0,
    11.0 / 6.0,
];

/// (cos, sin) of the 16 canonical special-angle positions
pub static CANONICAL_POINTS: Lazy<Vec<(f64, f64)>> = Lazy::new(|| {
    CANONICAL_FRACTIONS
        .iter()
        .map(|fraction| {
            let angle = fraction * PI;
            (angle.cos(), angle.sin())
        })
        .collect()
});

/// Unit circle explorer input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitCircleInput {
    /// Angle in degrees, [0, 360]
    pub angle_deg: f64,
    /// Draw markers at the 16 canonical positions
    #[serde(default = "default_true")]
    pub show_reference: bool,
    /// Draw the quadrant labels
    #[serde(default = "default_true")]
    pub show_quadrants: bool,
}

fn default_true() -> bool {
    true
}

impl Default for UnitCircleInput {
    fn default() -> Self {
        UnitCircleInput {
            angle_deg: 45.0,
            show_reference: true,
            show_quadrants: true,
        }
    }
}

impl UnitCircleInput {
    pub fn validate(&self) -> TrigResult<()> {
        check_range("angle_deg", self.angle_deg, 0.0, 360.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitCircleResult {
    pub angle_deg: f64,
    pub angle_rad: f64,
    pub cos: f64,
    pub sin: f64,
    pub quadrant: Quadrant,
    /// Exact match against the special angle table
    pub special: bool,
    pub show_reference: bool,
    pub show_quadrants: bool,
}

impl UnitCircleResult {
    /// Coordinate text "(x, y)" at 3 decimals
    pub fn coordinates(&self) -> String {
        format!("({}, {})", fixed(self.cos, 3), fixed(self.sin, 3))
    }

    pub fn summary(&self) -> Vec<DisplayLine> {
        let mut lines = vec![
            DisplayLine::new("Quadrant", self.quadrant.label()),
            DisplayLine::new("Coordinates", self.coordinates()),
        ];
        if self.special {
            lines.push(DisplayLine::success("Special angle", format!("{}°", compact(self.angle_deg))));
        }
        lines
    }
}

pub fn calculate(input: &UnitCircleInput) -> UnitCircleResult {
    let angle_rad = Degrees(input.angle_deg).to_radians().value();

    UnitCircleResult {
        angle_deg: input.angle_deg,
        angle_rad,
        cos: angle_rad.cos(),
        sin: angle_rad.sin(),
        quadrant: quadrant(input.angle_deg),
        special: is_special_angle(input.angle_deg),
        show_reference: input.show_reference,
        show_quadrants: input.show_quadrants,
    }
}

/// Quadrant label positions and box colors
fn quadrant_labels() -> [(Quadrant, (f64, f64), Color); 4] {
    [
        (Quadrant::I, (0.7, 0.7), Color::LIGHT_BLUE),
        (Quadrant::II, (-0.7, 0.7), Color::LIGHT_GREEN),
        (Quadrant::III, (-0.7, -0.7), Color::LIGHT_YELLOW),
        (Quadrant::IV, (0.7, -0.7), Color::LIGHT_CORAL),
    ]
}

/// Single-panel figure of the unit circle.
pub fn figure(result: &UnitCircleResult) -> Figure {
    let deg = compact(result.angle_deg);
    let axis = Style::solid(Color::BLACK, 1.0).with_alpha(0.5);

    let mut panel = Panel::new(format!("Unit Circle - Angle: {}° (Quadrant {})", deg, result.quadrant))
        .x_range(-1.5, 1.5)
        .y_range(-1.5, 1.5)
        .equal_aspect()
        .with_legend()
        .with(CircleShape {
            center: (0.0, 0.0),
            radius: 1.0,
            style: Style::solid(Color::BLACK, 3.0),
        })
        .hline(RefLine::new(0.0, axis))
        .vline(RefLine::new(0.0, axis))
        .with(
            Segment::new((0.0, 0.0), (result.cos, result.sin), Style::solid(Color::RED, 4.0))
                .labeled(format!("{}°", deg)),
        )
        .with(Marker::new(result.cos, result.sin, 15.0, Color::RED))
        .with(
            Segment::new((result.cos, 0.0), (result.cos, result.sin), Style::solid(Color::BLUE, 3.0).with_alpha(0.7))
                .labeled(format!("sin({}°) = {}", deg, fixed(result.sin, 3))),
        )
        .with(
            Segment::new((0.0, 0.0), (result.cos, 0.0), Style::solid(Color::GREEN, 3.0).with_alpha(0.7))
                .labeled(format!("cos({}°) = {}", deg, fixed(result.cos, 3))),
        );

    if result.show_quadrants {
        for (q, (x, y), fill) in quadrant_labels() {
            panel.push(
                Annotation::new(q.label(), x, y, 20.0).boxed(TextBox::Circle { fill, alpha: 0.5 }),
            );
        }
    }

    if result.show_reference {
        for &(x, y) in CANONICAL_POINTS.iter() {
            panel.push(Marker::new(x, y, 6.0, Color::BLACK).with_alpha(0.6));
        }
    }

    Figure::grid("Unit Circle Explorer", 1, 1).with_panel(panel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::PlotElement;
    use approx::assert_abs_diff_eq;

    fn at(angle_deg: f64) -> UnitCircleResult {
        calculate(&UnitCircleInput { angle_deg, ..Default::default() })
    }

    #[test]
    fn test_quadrant_tie_breaks() {
        assert_eq!(at(0.0).quadrant, Quadrant::I);
        assert_eq!(at(90.0).quadrant, Quadrant::I);
        assert_eq!(at(90.0001).quadrant, Quadrant::II);
        assert_eq!(at(180.0).quadrant, Quadrant::II);
        assert_eq!(at(270.0).quadrant, Quadrant::III);
        assert_eq!(at(270.0001).quadrant, Quadrant::IV);
        assert_eq!(at(360.0).quadrant, Quadrant::IV);
    }

    #[test]
    fn test_special_angle_indicator() {
        let special = at(45.0);
        assert!(special.special);
        let last = special.summary().pop().unwrap();
        assert!(last.highlight);
        assert_eq!(last.to_string(), "Special angle: 45°");

        let plain = at(46.0);
        assert!(!plain.special);
        assert!(plain.summary().iter().all(|l| !l.highlight));
    }

    #[test]
    fn test_coordinates() {
        let r = at(120.0);
        assert_abs_diff_eq!(r.cos, -0.5, epsilon = 1e-12);
        assert_eq!(r.coordinates(), "(-0.500, 0.866)");
        assert_eq!(at(90.0).coordinates(), "(0.000, 1.000)");
    }

    #[test]
    fn test_canonical_points_on_circle() {
        assert_eq!(CANONICAL_POINTS.len(), 16);
        for &(x, y) in CANONICAL_POINTS.iter() {
            assert_abs_diff_eq!(x * x + y * y, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_figure_toggles() {
        let count = |r: &UnitCircleResult, pred: fn(&PlotElement) -> bool| {
            figure(r).panels[0].elements.iter().filter(|e| pred(e)).count()
        };
        let is_text = |e: &PlotElement| matches!(e, PlotElement::Text(_));
        let is_marker = |e: &PlotElement| matches!(e, PlotElement::Marker(_));

        let full = at(30.0);
        assert_eq!(count(&full, is_text), 4);
        // Current point plus the 16 reference markers
        assert_eq!(count(&full, is_marker), 17);

        let bare = calculate(&UnitCircleInput {
            angle_deg: 30.0,
            show_reference: false,
            show_quadrants: false,
        });
        assert_eq!(count(&bare, is_text), 0);
        assert_eq!(count(&bare, is_marker), 1);
    }

    #[test]
    fn test_quadrant_label_boxes_are_half_transparent() {
        let fig = figure(&at(30.0));
        let boxes: Vec<_> = fig.panels[0]
            .elements
            .iter()
            .filter_map(|e| match e {
                PlotElement::Text(a) => a.background,
                _ => None,
            })
            .collect();
        assert_eq!(boxes.len(), 4);
        for b in boxes {
            assert!(matches!(b, TextBox::Circle { alpha, .. } if alpha == 0.5));
        }
    }

    #[test]
    fn test_figure_title_has_quadrant() {
        let fig = figure(&at(200.0));
        assert_eq!(fig.panels[0].title, "Unit Circle - Angle: 200° (Quadrant III)");
    }

    #[test]
    fn test_validate_range() {
        assert!(UnitCircleInput::default().validate().is_ok());
        assert!(UnitCircleInput { angle_deg: 360.0, ..Default::default() }.validate().is_ok());
        assert!(UnitCircleInput { angle_deg: -1.0, ..Default::default() }.validate().is_err());
        assert!(UnitCircleInput { angle_deg: 360.5, ..Default::default() }.validate().is_err());
    }

    #[test]
    fn test_input_toggles_default_when_missing() {
        let input: UnitCircleInput = serde_json::from_str(r#"{ "angle_deg": 60.0 }"#).unwrap();
        assert!(input.show_reference);
        assert!(input.show_quadrants);
    }
}
