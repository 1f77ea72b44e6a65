//! # Inverse Functions
//!
//! Evaluates arcsin, arccos or arctan, checks the result by applying the
//! forward function, and describes four panels: the inverse curve, the
//! forward curve with its principal branch, a unit-circle view of the
//! angle and a table of canonical values.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use serde::{Deserialize, Serialize};

use crate::chart::{
    linspace, mask_above, Anchor, Annotation, CircleShape, Color, Curve, Figure, Marker, Panel, RefLine,
    Segment, Style, Table, TableRow, TextBox,
};
use crate::equations::{Formula, InverseKind, TAN_PLOT_LIMIT};
use crate::errors::{check_range, TrigResult};
use crate::format::{compact, fixed, DisplayLine};
use crate::settings::SampleDensity;
use crate::units::Radians;

/// Table rows within this distance of the input are highlighted
pub const TABLE_MATCH_TOLERANCE: f64 = 0.1;

const ARCSIN_TABLE: &[(f64, i32)] = &[
    (-1.0, -90),
    (-0.866, -60),
    (-0.707, -45),
    (-0.5, -30),
    (0.0, 0),
    (0.5, 30),
    (0.707, 45),
    (0.866, 60),
    (1.0, 90),
];

const ARCCOS_TABLE: &[(f64, i32)] = &[
    (-1.0, 180),
    (-0.866, 150),
    (-0.707, 135),
    (-0.5, 120),
    (0.0, 90),
    (0.5, 60),
    (0.707, 45),
    (0.866, 30),
    (1.0, 0),
];

const ARCTAN_TABLE: &[(f64, i32)] = &[
    (-1.732, -60),
    (-1.0, -45),
    (-0.577, -30),
    (0.0, 0),
    (0.577, 30),
    (1.0, 45),
    (1.732, 60),
    (2.747, 70),
];

/// Canonical (x, degrees) pairs for a function
pub fn lookup_table(kind: InverseKind) -> &'static [(f64, i32)] {
    match kind {
        InverseKind::Arcsin => ARCSIN_TABLE,
        InverseKind::Arccos => ARCCOS_TABLE,
        InverseKind::Arctan => ARCTAN_TABLE,
    }
}

/// Indices of table rows within [`TABLE_MATCH_TOLERANCE`] of `value`
pub fn matching_rows(kind: InverseKind, value: f64) -> Vec<usize> {
    lookup_table(kind)
        .iter()
        .enumerate()
        .filter(|(_, (x, _))| (x - value).abs() < TABLE_MATCH_TOLERANCE)
        .map(|(i, _)| i)
        .collect()
}

fn color(kind: InverseKind) -> Color {
    match kind {
        InverseKind::Arcsin => Color::BLUE,
        InverseKind::Arccos => Color::GREEN,
        InverseKind::Arctan => Color::RED,
    }
}

fn formula(kind: InverseKind) -> Formula {
    match kind {
        InverseKind::Arcsin => Formula::InverseSine,
        InverseKind::Arccos => Formula::InverseCosine,
        InverseKind::Arctan => Formula::InverseTangent,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InverseInput {
    pub function: InverseKind,
    pub value: f64,
}

impl Default for InverseInput {
    fn default() -> Self {
        InverseInput::for_function(InverseKind::default())
    }
}

impl InverseInput {
    /// Slider default for a function: 0.5 for arcsin/arccos, 1.0 for arctan
    pub fn for_function(function: InverseKind) -> Self {
        let value = match function {
            InverseKind::Arcsin | InverseKind::Arccos => 0.5,
            InverseKind::Arctan => 1.0,
        };
        InverseInput { function, value }
    }

    pub fn validate(&self) -> TrigResult<()> {
        let (min, max) = self.function.input_range();
        check_range("value", self.value, min, max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InverseResult {
    pub function: InverseKind,
    pub value: f64,
    pub result_rad: f64,
    pub result_deg: f64,
    /// Forward function applied to the result; equals `value` up to rounding
    pub verification: f64,
    pub domain: String,
    pub range: String,
}

impl InverseResult {
    pub fn summary(&self) -> Vec<DisplayLine> {
        let call = format!("{}({})", self.function, compact(self.value));
        vec![
            DisplayLine::new("Input", compact(self.value)),
            DisplayLine::new(call.clone(), format!("{} radians", fixed(self.result_rad, 4))),
            DisplayLine::new(call, format!("{}°", fixed(self.result_deg, 2))),
            DisplayLine::new("Domain", self.domain.clone()),
            DisplayLine::new("Range", self.range.clone()),
            DisplayLine::new("Verification", self.verification_text()),
        ]
    }

    /// e.g. "sin(0.5236) = 0.5000"
    pub fn verification_text(&self) -> String {
        format!(
            "{}({}) = {}",
            self.function.forward_name(),
            fixed(self.result_rad, 4),
            fixed(self.verification, 4)
        )
    }

    pub fn formulas(&self) -> Vec<Formula> {
        vec![formula(self.function)]
    }
}

pub fn calculate(input: &InverseInput) -> InverseResult {
    let result_rad = input.function.apply(input.value);

    InverseResult {
        function: input.function,
        value: input.value,
        result_rad,
        result_deg: Radians(result_rad).to_degrees().value(),
        verification: input.function.forward(result_rad),
        domain: input.function.domain_text().to_string(),
        range: input.function.range_text().to_string(),
    }
}

pub fn figure(result: &InverseResult, samples: &SampleDensity) -> Figure {
    Figure::grid("Inverse Trigonometric Functions", 2, 2)
        .with_panel(inverse_panel(result, samples.curve))
        .with_panel(forward_panel(result, samples))
        .with_panel(circle_panel(result))
        .with_panel(table_panel(result))
}

fn current_line(value: f64) -> RefLine {
    RefLine::new(value, Style::dashed(Color::RED, 1.5).with_alpha(0.7))
}

fn inverse_panel(result: &InverseResult, samples: usize) -> Panel {
    let kind = result.function;
    let (min, max) = kind.input_range();
    let xs = linspace(min, max, samples);
    let (y_min, y_max) = match kind {
        InverseKind::Arccos => (-0.5, PI + 0.5),
        InverseKind::Arcsin | InverseKind::Arctan => (-FRAC_PI_2 - 0.5, FRAC_PI_2 + 0.5),
    };

    let mut panel = Panel::new(format!("{}(x)", kind))
        .x_label("x")
        .y_label("y (radians)")
        .y_range(y_min, y_max)
        .with_legend()
        .with(Curve::from_fn(format!("{}(x)", kind), &xs, |x| kind.apply(x), Style::solid(color(kind), 3.0)));

    if kind == InverseKind::Arctan {
        let asymptote = Style::dashed(Color::GRAY, 1.5).with_alpha(0.5);
        panel = panel
            .hline(RefLine::new(FRAC_PI_2, asymptote).labeled("y = π/2"))
            .hline(RefLine::new(-FRAC_PI_2, asymptote).labeled("y = -π/2"));
    }

    panel
        .with(Marker::new(result.value, result.result_rad, 10.0, Color::RED))
        .vline(current_line(result.value))
        .hline(current_line(result.result_rad))
}

fn forward_panel(result: &InverseResult, samples: &SampleDensity) -> Panel {
    let kind = result.function;
    let xs = linspace(-TAU, TAU, samples.curve);
    let ys: Vec<f64> = xs.iter().map(|&x| kind.forward(x)).collect();
    let ys = match kind {
        InverseKind::Arctan => mask_above(&ys, TAN_PLOT_LIMIT),
        InverseKind::Arcsin | InverseKind::Arccos => ys.into_iter().map(Some).collect(),
    };
    let (branch_start, branch_end) = kind.principal_branch();
    let branch = linspace(branch_start, branch_end, samples.branch);

    Panel::new(format!("Corresponding {}(x) function", kind.forward_name()))
        .x_label("x (radians)")
        .y_label("y")
        .y_range(-3.0, 3.0)
        .with_legend()
        .with(Curve::from_masked(
            format!("{}(x)", kind.forward_name()),
            xs,
            ys,
            Style::solid(color(kind), 2.0).with_alpha(0.7),
        ))
        .with(Curve::from_fn("Principal branch", &branch, |x| kind.forward(x), Style::solid(color(kind), 4.0)))
        .with(Marker::new(result.result_rad, result.value, 10.0, Color::RED))
        .vline(current_line(result.result_rad))
        .hline(current_line(result.value))
}

fn circle_panel(result: &InverseResult) -> Panel {
    let mut panel = Panel::new("Unit Circle Representation")
        .x_range(-1.5, 1.5)
        .y_range(-1.5, 1.5)
        .equal_aspect()
        .with(CircleShape {
            center: (0.0, 0.0),
            radius: 1.0,
            style: Style::solid(Color::BLACK, 2.0),
        });

    match result.function {
        InverseKind::Arcsin | InverseKind::Arccos => {
            let (x, y) = (result.result_rad.cos(), result.result_rad.sin());
            panel.push(Segment::new((0.0, 0.0), (x, y), Style::solid(Color::RED, 3.0)).with_end_markers());
            panel.push(Segment::new((x, 0.0), (x, y), Style::dashed(Color::BLUE, 2.0).with_alpha(0.7)));
            panel.push(Segment::new((0.0, 0.0), (x, 0.0), Style::dashed(Color::GREEN, 2.0).with_alpha(0.7)));
        }
        InverseKind::Arctan => {
            panel.legend = true;
            panel.push(
                Segment::new((0.0, 0.0), (1.0, result.value), Style::solid(Color::RED, 3.0))
                    .with_end_markers()
                    .labeled(format!("slope = {}", fixed(result.value, 2))),
            );
        }
    }

    panel.with(
        Annotation::new(
            format!("{}({}) = {}°", result.function, fixed(result.value, 2), fixed(result.result_deg, 1)),
            0.1,
            0.1,
            10.0,
        )
        .anchored(Anchor::Left)
        .boxed(TextBox::Round { fill: Color::YELLOW, alpha: 0.7 }),
    )
}

fn table_panel(result: &InverseResult) -> Panel {
    let highlighted = matching_rows(result.function, result.value);
    let rows = lookup_table(result.function)
        .iter()
        .enumerate()
        .map(|(i, &(x, deg))| {
            let hit = highlighted.contains(&i);
            let prefix = if hit { "→ " } else { "" };
            TableRow {
                cells: vec![format!("{}{:.3}", prefix, x), format!("{}{}°", prefix, deg)],
                highlighted: hit,
            }
        })
        .collect();

    Panel::new("Special Values Reference").without_grid().with(Table {
        headers: vec!["x".to_string(), format!("{}(x) (°)", result.function)],
        rows,
        highlight: Color::HIGHLIGHT,
    })
}
