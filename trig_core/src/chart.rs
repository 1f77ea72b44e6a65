//! # Chart Description
//!
//! Declarative, renderer-agnostic description of the figures each section
//! produces. Nothing here draws anything: the GUI canvas and the terminal
//! viewer consume a [`Figure`] and decide how to paint it.
//!
//! ## Structure
//!
//! ```text
//! Figure (rows × cols grid)
//! └── Panel (title, axis labels, ranges)
//!     └── PlotElement (curve, marker, segment, reference line, circle, text, table)
//! ```
//!
//! Curves carry `Option<f64>` samples so that masked points (gaps) survive
//! serialization; `None` means "do not draw, break the line here".
//!
//! ## Example
//!
//! ```rust
//! use trig_core::chart::{linspace, Color, Curve, Panel, Style};
//!
//! let xs = linspace(0.0, std::f64::consts::PI, 50);
//! let panel = Panel::new("Sine")
//!     .y_range(-1.0, 1.0)
//!     .with(Curve::from_fn("sin(x)", &xs, f64::sin, Style::solid(Color::BLUE, 2.0)));
//! assert_eq!(panel.elements.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Styling
// ============================================================================

/// RGB color with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const GREEN: Color = Color::rgb(0.0, 0.5, 0.0);
    pub const ORANGE: Color = Color::rgb(1.0, 0.647, 0.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const LIGHT_BLUE: Color = Color::rgb(0.678, 0.847, 0.902);
    pub const LIGHT_GREEN: Color = Color::rgb(0.565, 0.933, 0.565);
    pub const LIGHT_YELLOW: Color = Color::rgb(1.0, 1.0, 0.878);
    pub const LIGHT_CORAL: Color = Color::rgb(0.941, 0.502, 0.502);
    /// Table row highlight (#ffcccc)
    pub const HIGHLIGHT: Color = Color::rgb(1.0, 0.8, 0.8);

    /// Hex string, e.g. "#ff0000"
    pub fn to_hex(&self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", channel(self.r), channel(self.g), channel(self.b))
    }
}

/// Line dash pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Dash {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Stroke style shared by lines, curves and outlines
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub color: Color,
    pub width: f32,
    pub dash: Dash,
    /// Opacity in [0, 1]
    pub alpha: f32,
}

impl Style {
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color, width, dash: Dash::Solid, alpha: 1.0 }
    }

    pub fn dashed(color: Color, width: f32) -> Self {
        Self { dash: Dash::Dashed, ..Self::solid(color, width) }
    }

    pub fn dotted(color: Color, width: f32) -> Self {
        Self { dash: Dash::Dotted, ..Self::solid(color, width) }
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }
}

// ============================================================================
// Plot Elements
// ============================================================================

/// A sampled curve. `y[i] == None` is a gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub label: Option<String>,
    pub x: Vec<f64>,
    pub y: Vec<Option<f64>>,
    pub style: Style,
}

impl Curve {
    /// Sample `f` at every `x`. Non-finite results become gaps.
    pub fn from_fn(label: impl Into<String>, xs: &[f64], f: impl Fn(f64) -> f64, style: Style) -> Self {
        let y = xs.iter().map(|&x| finite(f(x))).collect();
        Self { label: Some(label.into()), x: xs.to_vec(), y, style }
    }

    /// Build from precomputed samples. Non-finite values become gaps.
    pub fn from_samples(label: impl Into<String>, x: Vec<f64>, y: &[f64], style: Style) -> Self {
        Self {
            label: Some(label.into()),
            x,
            y: y.iter().map(|&v| finite(v)).collect(),
            style,
        }
    }

    /// Build from samples that already carry gaps (see [`mask_above`])
    pub fn from_masked(label: impl Into<String>, x: Vec<f64>, y: Vec<Option<f64>>, style: Style) -> Self {
        Self { label: Some(label.into()), x, y, style }
    }

    /// Unlabelled outline through the given points
    pub fn polyline(points: &[(f64, f64)], style: Style) -> Self {
        Self {
            label: None,
            x: points.iter().map(|p| p.0).collect(),
            y: points.iter().map(|p| finite(p.1)).collect(),
            style,
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Number of masked samples
    pub fn gap_count(&self) -> usize {
        self.y.iter().filter(|v| v.is_none()).count()
    }

    /// Split into contiguous runs of drawable points
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for (&x, y) in self.x.iter().zip(&self.y) {
            match y {
                Some(y) => current.push((x, *y)),
                None => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

/// A single highlighted point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub label: Option<String>,
    pub x: f64,
    pub y: f64,
    /// Marker diameter in points
    pub size: f32,
    pub color: Color,
    pub alpha: f32,
}

impl Marker {
    pub fn new(x: f64, y: f64, size: f32, color: Color) -> Self {
        Self { label: None, x, y, size, color, alpha: 1.0 }
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }
}

/// Straight line between two points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub label: Option<String>,
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub style: Style,
    /// Draw a dot at both ends
    pub end_markers: bool,
}

impl Segment {
    pub fn new(from: (f64, f64), to: (f64, f64), style: Style) -> Self {
        Self { label: None, from, to, style, end_markers: false }
    }

    pub fn labeled(self, label: impl Into<String>) -> Self {
        Self { label: Some(label.into()), ..self }
    }

    pub fn with_end_markers(self) -> Self {
        Self { end_markers: true, ..self }
    }
}

/// Horizontal or vertical reference line spanning the whole panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefLine {
    pub label: Option<String>,
    pub value: f64,
    pub style: Style,
}

impl RefLine {
    pub fn new(value: f64, style: Style) -> Self {
        Self { label: None, value, style }
    }

    pub fn labeled(self, label: impl Into<String>) -> Self {
        Self { label: Some(label.into()), ..self }
    }
}

/// Circle outline in data coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleShape {
    pub center: (f64, f64),
    pub radius: f64,
    pub style: Style,
}

/// Horizontal anchoring of a text annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Anchor {
    Left,
    #[default]
    Center,
}

/// Background drawn behind a text annotation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TextBox {
    Round { fill: Color, alpha: f32 },
    Circle { fill: Color, alpha: f32 },
}

/// Text placed in data coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub content: String,
    pub position: (f64, f64),
    /// Font size in points
    pub size: f32,
    /// Counter-clockwise rotation in degrees
    pub rotation_deg: f64,
    pub anchor: Anchor,
    pub background: Option<TextBox>,
}

impl Annotation {
    pub fn new(content: impl Into<String>, x: f64, y: f64, size: f32) -> Self {
        Self {
            content: content.into(),
            position: (x, y),
            size,
            rotation_deg: 0.0,
            anchor: Anchor::Center,
            background: None,
        }
    }

    pub fn rotated(self, rotation_deg: f64) -> Self {
        Self { rotation_deg, ..self }
    }

    pub fn anchored(self, anchor: Anchor) -> Self {
        Self { anchor, ..self }
    }

    pub fn boxed(self, background: TextBox) -> Self {
        Self { background: Some(background), ..self }
    }
}

/// One row of a lookup table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub highlighted: bool,
}

/// A table occupying a whole panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
    pub highlight: Color,
}

impl Table {
    pub fn highlighted_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().enumerate().filter(|(_, r)| r.highlighted).map(|(i, _)| i)
    }
}

/// Anything that can be placed on a panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum PlotElement {
    Curve(Curve),
    Marker(Marker),
    Segment(Segment),
    HLine(RefLine),
    VLine(RefLine),
    Circle(CircleShape),
    Text(Annotation),
    Table(Table),
}

impl PlotElement {
    /// Legend label and style color, if this element appears in the legend
    pub fn legend_entry(&self) -> Option<(&str, Color)> {
        match self {
            PlotElement::Curve(c) => c.label.as_deref().map(|l| (l, c.style.color)),
            PlotElement::Marker(m) => m.label.as_deref().map(|l| (l, m.color)),
            PlotElement::Segment(s) => s.label.as_deref().map(|l| (l, s.style.color)),
            PlotElement::HLine(r) | PlotElement::VLine(r) => r.label.as_deref().map(|l| (l, r.style.color)),
            PlotElement::Circle(_) | PlotElement::Text(_) | PlotElement::Table(_) => None,
        }
    }
}

macro_rules! impl_into_element {
    ($($type:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$type> for PlotElement {
                fn from(value: $type) -> Self {
                    PlotElement::$variant(value)
                }
            }
        )*
    };
}

impl_into_element!(
    Curve => Curve,
    Marker => Marker,
    Segment => Segment,
    CircleShape => Circle,
    Annotation => Text,
    Table => Table,
);

// ============================================================================
// Panels and Figures
// ============================================================================

/// One subplot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub x_range: Option<(f64, f64)>,
    pub y_range: Option<(f64, f64)>,
    /// One data unit is the same length on both axes
    pub equal_aspect: bool,
    pub grid: bool,
    pub legend: bool,
    pub elements: Vec<PlotElement>,
}

impl Panel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: None,
            y_label: None,
            x_range: None,
            y_range: None,
            equal_aspect: false,
            grid: true,
            legend: false,
            elements: Vec::new(),
        }
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn x_range(mut self, min: f64, max: f64) -> Self {
        self.x_range = Some((min, max));
        self
    }

    pub fn y_range(mut self, min: f64, max: f64) -> Self {
        self.y_range = Some((min, max));
        self
    }

    pub fn equal_aspect(mut self) -> Self {
        self.equal_aspect = true;
        self
    }

    pub fn without_grid(mut self) -> Self {
        self.grid = false;
        self
    }

    pub fn with_legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Add an element (builder style)
    pub fn with(mut self, element: impl Into<PlotElement>) -> Self {
        self.elements.push(element.into());
        self
    }

    pub fn hline(self, line: RefLine) -> Self {
        self.with(PlotElement::HLine(line))
    }

    pub fn vline(self, line: RefLine) -> Self {
        self.with(PlotElement::VLine(line))
    }

    /// Add an element in place
    pub fn push(&mut self, element: impl Into<PlotElement>) {
        self.elements.push(element.into());
    }

    /// The table on this panel, if it is a table panel
    pub fn table(&self) -> Option<&Table> {
        self.elements.iter().find_map(|e| match e {
            PlotElement::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Legend entries in insertion order
    pub fn legend_entries(&self) -> Vec<(&str, Color)> {
        self.elements.iter().filter_map(PlotElement::legend_entry).collect()
    }

    /// Axis bounds: explicit ranges where set, otherwise the data extent
    pub fn bounds(&self) -> ((f64, f64), (f64, f64)) {
        let mut xs = Extent::default();
        let mut ys = Extent::default();

        for element in &self.elements {
            match element {
                PlotElement::Curve(c) => {
                    for (&x, y) in c.x.iter().zip(&c.y) {
                        if let Some(y) = y {
                            xs.add(x);
                            ys.add(*y);
                        }
                    }
                }
                PlotElement::Marker(m) => {
                    xs.add(m.x);
                    ys.add(m.y);
                }
                PlotElement::Segment(s) => {
                    xs.add(s.from.0);
                    xs.add(s.to.0);
                    ys.add(s.from.1);
                    ys.add(s.to.1);
                }
                PlotElement::HLine(r) => ys.add(r.value),
                PlotElement::VLine(r) => xs.add(r.value),
                PlotElement::Circle(c) => {
                    xs.add(c.center.0 - c.radius);
                    xs.add(c.center.0 + c.radius);
                    ys.add(c.center.1 - c.radius);
                    ys.add(c.center.1 + c.radius);
                }
                PlotElement::Text(t) => {
                    xs.add(t.position.0);
                    ys.add(t.position.1);
                }
                PlotElement::Table(_) => {}
            }
        }

        (
            self.x_range.unwrap_or_else(|| xs.range()),
            self.y_range.unwrap_or_else(|| ys.range()),
        )
    }
}

/// Running min/max over finite values
#[derive(Default)]
struct Extent {
    min: Option<f64>,
    max: Option<f64>,
}

impl Extent {
    fn add(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }

    fn range(&self) -> (f64, f64) {
        match (self.min, self.max) {
            (Some(min), Some(max)) if max > min => (min, max),
            (Some(v), Some(_)) => (v - 1.0, v + 1.0),
            _ => (0.0, 1.0),
        }
    }
}

/// A grid of panels, filled row by row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub title: String,
    pub rows: usize,
    pub cols: usize,
    pub panels: Vec<Panel>,
}

impl Figure {
    pub fn grid(title: impl Into<String>, rows: usize, cols: usize) -> Self {
        Self {
            title: title.into(),
            rows,
            cols,
            panels: Vec::with_capacity(rows * cols),
        }
    }

    pub fn with_panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }

    /// Panel at grid position (row, col)
    pub fn panel(&self, row: usize, col: usize) -> Option<&Panel> {
        if col >= self.cols {
            return None;
        }
        self.panels.get(row * self.cols + col)
    }
}

// ============================================================================
// Sampling Helpers
// ============================================================================

/// `n` evenly spaced samples from `start` to `end` inclusive
///
/// ```rust
/// use trig_core::chart::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Replace samples whose magnitude exceeds `limit` (or that are not finite) with gaps
pub fn mask_above(values: &[f64], limit: f64) -> Vec<Option<f64>> {
    values
        .iter()
        .map(|&v| if v.is_finite() && v.abs() <= limit { Some(v) } else { None })
        .collect()
}

/// Clamp samples into `[-limit, limit]`, substituting the boundary value
pub fn clamp_to(values: &[f64], limit: f64) -> Vec<f64> {
    values.iter().map(|&v| v.clamp(-limit, limit)).collect()
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
