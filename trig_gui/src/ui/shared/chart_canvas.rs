//! Canvas renderer for chart figures
//!
//! Draws a `trig_core::chart::Figure` as a grid of panels: frame, grid lines
//! with tick labels, axis labels, every plot element, and an optional legend.
//! Geometry is clipped to the panel bounds in data space before it is mapped
//! to pixels, so masked tangent curves and long reference lines never spill
//! into neighbouring panels.

use std::f64::consts::TAU;

use iced::widget::canvas::{self, Frame, Geometry, LineDash, Path, Stroke, Text};
use iced::{alignment, Color as IcedColor, Pixels, Point, Rectangle, Renderer, Size, Theme, Vector};

use trig_core::chart::{linspace, Anchor, Annotation, Color, Dash, Figure, Panel, PlotElement, Style, Table, TextBox};

use crate::Message;

const FIGURE_TITLE_HEIGHT: f32 = 26.0;
const MARGIN_TOP: f32 = 26.0;
const MARGIN_BOTTOM: f32 = 36.0;
const MARGIN_LEFT: f32 = 52.0;
const MARGIN_RIGHT: f32 = 14.0;

const TICK_TARGET: usize = 6;
const TABLE_ROW_HEIGHT: f32 = 22.0;
const CIRCLE_SEGMENTS: usize = 128;

const DASHED: &[f32] = &[6.0, 4.0];
const DOTTED: &[f32] = &[1.5, 3.0];

const AXIS_COLOR: IcedColor = IcedColor::from_rgb(0.35, 0.35, 0.35);
const GRID_COLOR: IcedColor = IcedColor::from_rgb(0.88, 0.88, 0.88);
const TEXT_COLOR: IcedColor = IcedColor::BLACK;

/// Canvas program for drawing one figure
pub struct FigureChart<'a> {
    figure: &'a Figure,
}

impl<'a> FigureChart<'a> {
    pub fn new(figure: &'a Figure) -> Self {
        Self { figure }
    }
}

/// Maps data coordinates into a pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotTransform {
    pub area: Rectangle,
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl PlotTransform {
    /// With `equal_aspect` the area shrinks (centered) so one unit has the
    /// same pixel length on both axes.
    pub fn new(area: Rectangle, x: (f64, f64), y: (f64, f64), equal_aspect: bool) -> Self {
        if !equal_aspect {
            return Self { area, x, y };
        }

        let sx = area.width as f64 / (x.1 - x.0);
        let sy = area.height as f64 / (y.1 - y.0);
        let scale = sx.min(sy);
        let width = ((x.1 - x.0) * scale) as f32;
        let height = ((y.1 - y.0) * scale) as f32;

        Self {
            area: Rectangle {
                x: area.x + (area.width - width) / 2.0,
                y: area.y + (area.height - height) / 2.0,
                width,
                height,
            },
            x,
            y,
        }
    }

    pub fn to_screen(&self, (x, y): (f64, f64)) -> Point {
        let fx = (x - self.x.0) / (self.x.1 - self.x.0);
        let fy = (y - self.y.0) / (self.y.1 - self.y.0);
        Point::new(
            self.area.x + fx as f32 * self.area.width,
            // Screen y grows downwards
            self.area.y + (1.0 - fy as f32) * self.area.height,
        )
    }

    pub fn contains(&self, (x, y): (f64, f64)) -> bool {
        x >= self.x.0 && x <= self.x.1 && y >= self.y.0 && y <= self.y.1
    }
}

/// Clip the segment p0-p1 to the rectangle x × y (Liang-Barsky).
pub fn clip_segment(
    p0: (f64, f64),
    p1: (f64, f64),
    x: (f64, f64),
    y: (f64, f64),
) -> Option<((f64, f64), (f64, f64))> {
    let (dx, dy) = (p1.0 - p0.0, p1.1 - p0.1);
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    for (p, q) in [
        (-dx, p0.0 - x.0),
        (dx, x.1 - p0.0),
        (-dy, p0.1 - y.0),
        (dy, y.1 - p0.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((
        (p0.0 + t0 * dx, p0.1 + t0 * dy),
        (p0.0 + t1 * dx, p0.1 + t1 * dy),
    ))
}

/// Round tick positions covering [min, max], about `target` of them.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let span = max - min;
    if !(span > 0.0) || !span.is_finite() || target == 0 {
        return Vec::new();
    }

    let step = nice_step(span / target as f64);
    let first = (min / step).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Tick label with as many decimals as the tick step needs
pub fn tick_label(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    let text = format!("{:.*}", decimals, value);
    // "-0" reads badly on an axis
    if text.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        text.trim_start_matches('-').to_string()
    } else {
        text
    }
}

fn iced_color(color: Color, alpha: f32) -> IcedColor {
    IcedColor::from_rgba(color.r, color.g, color.b, alpha)
}

/// Stroke for a chart style, dash pattern included
pub fn stroke_for(style: &Style) -> Stroke<'static> {
    let segments: &'static [f32] = match style.dash {
        Dash::Solid => &[],
        Dash::Dashed => DASHED,
        Dash::Dotted => DOTTED,
    };
    Stroke {
        line_dash: LineDash { segments, offset: 0 },
        ..Stroke::default()
            .with_color(iced_color(style.color, style.alpha))
            .with_width(style.width)
    }
}

fn thin(color: IcedColor) -> Stroke<'static> {
    Stroke::default().with_color(color).with_width(1.0)
}

fn label(content: impl Into<String>, position: Point, size: f32, align_x: alignment::Horizontal) -> Text {
    Text {
        content: content.into(),
        position,
        color: TEXT_COLOR,
        size: Pixels(size),
        align_x: align_x.into(),
        align_y: alignment::Vertical::Center.into(),
        ..Text::default()
    }
}

/// Stroke a polyline, clipped to the transform's data bounds
fn stroke_polyline(frame: &mut Frame, t: &PlotTransform, points: &[(f64, f64)], style: &Style) {
    if points.len() < 2 {
        return;
    }

    let path = Path::new(|builder| {
        let mut pen: Option<(f64, f64)> = None;
        for pair in points.windows(2) {
            if let Some((a, b)) = clip_segment(pair[0], pair[1], t.x, t.y) {
                if pen != Some(a) {
                    builder.move_to(t.to_screen(a));
                }
                builder.line_to(t.to_screen(b));
                // Only continue the same sub-path when the segment ended unclipped
                pen = if b == pair[1] { Some(b) } else { None };
            } else {
                pen = None;
            }
        }
    });
    frame.stroke(&path, stroke_for(style));
}

fn fill_dot(frame: &mut Frame, center: Point, radius: f32, color: IcedColor) {
    frame.fill(&Path::circle(center, radius), color);
}

fn draw_annotation(frame: &mut Frame, t: &PlotTransform, annotation: &Annotation) {
    if !t.contains(annotation.position) {
        return;
    }

    let anchor_point = t.to_screen(annotation.position);
    let size = annotation.size;
    let width = annotation.content.chars().count() as f32 * size * 0.6;
    let height = size * 1.4;
    let (left, align_x) = match annotation.anchor {
        Anchor::Left => (0.0, alignment::Horizontal::Left),
        Anchor::Center => (-width / 2.0, alignment::Horizontal::Center),
    };

    frame.with_save(|frame| {
        frame.translate(Vector::new(anchor_point.x, anchor_point.y));
        if annotation.rotation_deg != 0.0 {
            // Counter-clockwise in data space is clockwise on screen
            frame.rotate(-(annotation.rotation_deg.to_radians() as f32));
        }

        match annotation.background {
            Some(TextBox::Round { fill, alpha }) => {
                let rect = Path::rounded_rectangle(
                    Point::new(left - 4.0, -height / 2.0 - 2.0),
                    Size::new(width + 8.0, height + 4.0),
                    4.0_f32.into(),
                );
                frame.fill(&rect, iced_color(fill, alpha));
            }
            Some(TextBox::Circle { fill, alpha }) => {
                let radius = width.max(height) / 2.0 + 4.0;
                fill_dot(frame, Point::new(left + width / 2.0, 0.0), radius, iced_color(fill, alpha));
            }
            None => {}
        }

        frame.fill_text(label(annotation.content.clone(), Point::ORIGIN, size, align_x));
    });
}

fn draw_element(frame: &mut Frame, t: &PlotTransform, element: &PlotElement) {
    match element {
        PlotElement::Curve(curve) => {
            for segment in curve.segments() {
                stroke_polyline(frame, t, &segment, &curve.style);
            }
        }
        PlotElement::Marker(marker) => {
            if t.contains((marker.x, marker.y)) {
                fill_dot(
                    frame,
                    t.to_screen((marker.x, marker.y)),
                    marker.size / 2.0,
                    iced_color(marker.color, marker.alpha),
                );
            }
        }
        PlotElement::Segment(segment) => {
            stroke_polyline(frame, t, &[segment.from, segment.to], &segment.style);
            if segment.end_markers {
                let color = iced_color(segment.style.color, segment.style.alpha);
                for end in [segment.from, segment.to] {
                    if t.contains(end) {
                        fill_dot(frame, t.to_screen(end), 4.0, color);
                    }
                }
            }
        }
        PlotElement::HLine(line) => {
            stroke_polyline(frame, t, &[(t.x.0, line.value), (t.x.1, line.value)], &line.style);
        }
        PlotElement::VLine(line) => {
            stroke_polyline(frame, t, &[(line.value, t.y.0), (line.value, t.y.1)], &line.style);
        }
        PlotElement::Circle(circle) => {
            let outline: Vec<(f64, f64)> = linspace(0.0, TAU, CIRCLE_SEGMENTS + 1)
                .into_iter()
                .map(|a| (circle.center.0 + circle.radius * a.cos(), circle.center.1 + circle.radius * a.sin()))
                .collect();
            stroke_polyline(frame, t, &outline, &circle.style);
        }
        PlotElement::Text(annotation) => draw_annotation(frame, t, annotation),
        PlotElement::Table(_) => {}
    }
}

fn draw_axes(frame: &mut Frame, panel: &Panel, t: &PlotTransform, cell: Rectangle) {
    let area = t.area;
    let x_ticks = nice_ticks(t.x.0, t.x.1, TICK_TARGET);
    let y_ticks = nice_ticks(t.y.0, t.y.1, TICK_TARGET);
    let x_step = x_ticks.get(1).zip(x_ticks.first()).map_or(1.0, |(b, a)| b - a);
    let y_step = y_ticks.get(1).zip(y_ticks.first()).map_or(1.0, |(b, a)| b - a);

    for &x in &x_ticks {
        let px = t.to_screen((x, t.y.0)).x;
        if panel.grid {
            frame.stroke(&Path::line(Point::new(px, area.y), Point::new(px, area.y + area.height)), thin(GRID_COLOR));
        }
        frame.fill_text(label(
            tick_label(x, x_step),
            Point::new(px, area.y + area.height + 9.0),
            9.0,
            alignment::Horizontal::Center,
        ));
    }

    for &y in &y_ticks {
        let py = t.to_screen((t.x.0, y)).y;
        if panel.grid {
            frame.stroke(&Path::line(Point::new(area.x, py), Point::new(area.x + area.width, py)), thin(GRID_COLOR));
        }
        frame.fill_text(label(tick_label(y, y_step), Point::new(area.x - 4.0, py), 9.0, alignment::Horizontal::Right));
    }

    let border = Path::rectangle(Point::new(area.x, area.y), Size::new(area.width, area.height));
    frame.stroke(&border, thin(AXIS_COLOR));

    if let Some(ref x_label) = panel.x_label {
        frame.fill_text(label(
            x_label.clone(),
            Point::new(area.x + area.width / 2.0, cell.y + cell.height - 10.0),
            10.0,
            alignment::Horizontal::Center,
        ));
    }

    if let Some(ref y_label) = panel.y_label {
        frame.with_save(|frame| {
            frame.translate(Vector::new(cell.x + 10.0, area.y + area.height / 2.0));
            frame.rotate(-std::f32::consts::FRAC_PI_2);
            frame.fill_text(label(y_label.clone(), Point::ORIGIN, 10.0, alignment::Horizontal::Center));
        });
    }
}

fn draw_legend(frame: &mut Frame, panel: &Panel, area: Rectangle) {
    let entries = panel.legend_entries();
    if entries.is_empty() {
        return;
    }

    let longest = entries.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let width = longest as f32 * 5.6 + 34.0;
    let row_height = 14.0;
    let height = entries.len() as f32 * row_height + 8.0;
    let top_left = Point::new(area.x + area.width - width - 6.0, area.y + 6.0);

    let background = Path::rectangle(top_left, Size::new(width, height));
    frame.fill(&background, IcedColor::from_rgba(1.0, 1.0, 1.0, 0.85));
    frame.stroke(&background, thin(GRID_COLOR));

    for (i, (text, color)) in entries.into_iter().enumerate() {
        let y = top_left.y + 4.0 + row_height * (i as f32 + 0.5);
        let swatch = Path::line(Point::new(top_left.x + 6.0, y), Point::new(top_left.x + 24.0, y));
        frame.stroke(&swatch, Stroke::default().with_color(iced_color(color, 1.0)).with_width(2.0));
        frame.fill_text(label(text, Point::new(top_left.x + 28.0, y), 9.0, alignment::Horizontal::Left));
    }
}

fn draw_table(frame: &mut Frame, table: &Table, area: Rectangle) {
    let columns = table.headers.len().max(1);
    let column_width = area.width / columns as f32;

    let rows = std::iter::once((&table.headers, false)).chain(table.rows.iter().map(|r| (&r.cells, r.highlighted)));
    for (i, (cells, highlighted)) in rows.enumerate() {
        let y = area.y + i as f32 * TABLE_ROW_HEIGHT;
        if y + TABLE_ROW_HEIGHT > area.y + area.height {
            break;
        }
        if highlighted {
            frame.fill_rectangle(
                Point::new(area.x, y),
                Size::new(area.width, TABLE_ROW_HEIGHT),
                iced_color(table.highlight, 1.0),
            );
        }
        for (c, cell) in cells.iter().enumerate() {
            let center = Point::new(area.x + column_width * (c as f32 + 0.5), y + TABLE_ROW_HEIGHT / 2.0);
            let size = if i == 0 { 11.0 } else { 10.0 };
            frame.fill_text(label(cell.clone(), center, size, alignment::Horizontal::Center));
        }
        frame.stroke(
            &Path::line(Point::new(area.x, y + TABLE_ROW_HEIGHT), Point::new(area.x + area.width, y + TABLE_ROW_HEIGHT)),
            thin(GRID_COLOR),
        );
    }
}

fn draw_panel(frame: &mut Frame, panel: &Panel, cell: Rectangle) {
    frame.fill_text(Text {
        content: panel.title.clone(),
        position: Point::new(cell.x + cell.width / 2.0, cell.y + 4.0),
        color: TEXT_COLOR,
        size: Pixels(12.0),
        align_x: alignment::Horizontal::Center.into(),
        ..Text::default()
    });

    let area = Rectangle {
        x: cell.x + MARGIN_LEFT,
        y: cell.y + MARGIN_TOP,
        width: cell.width - MARGIN_LEFT - MARGIN_RIGHT,
        height: cell.height - MARGIN_TOP - MARGIN_BOTTOM,
    };
    if area.width < 10.0 || area.height < 10.0 {
        return;
    }

    if let Some(table) = panel.table() {
        draw_table(frame, table, area);
        return;
    }

    let (x, y) = panel.bounds();
    let t = PlotTransform::new(area, x, y, panel.equal_aspect);

    draw_axes(frame, panel, &t, cell);
    for element in &panel.elements {
        draw_element(frame, &t, element);
    }
    if panel.legend {
        draw_legend(frame, panel, t.area);
    }
}

impl canvas::Program<Message> for FigureChart<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        // Chart colors assume a light background in both themes
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), IcedColor::WHITE);

        frame.fill_text(Text {
            content: self.figure.title.clone(),
            position: Point::new(bounds.width / 2.0, 6.0),
            color: TEXT_COLOR,
            size: Pixels(14.0),
            align_x: alignment::Horizontal::Center.into(),
            ..Text::default()
        });

        let rows = self.figure.rows.max(1);
        let cols = self.figure.cols.max(1);
        let cell_width = bounds.width / cols as f32;
        let cell_height = (bounds.height - FIGURE_TITLE_HEIGHT) / rows as f32;

        for row in 0..rows {
            for col in 0..cols {
                if let Some(panel) = self.figure.panel(row, col) {
                    let cell = Rectangle {
                        x: col as f32 * cell_width,
                        y: FIGURE_TITLE_HEIGHT + row as f32 * cell_height,
                        width: cell_width,
                        height: cell_height,
                    };
                    draw_panel(&mut frame, panel, cell);
                }
            }
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn area() -> Rectangle {
        Rectangle { x: 10.0, y: 20.0, width: 200.0, height: 100.0 }
    }

    #[test]
    fn test_transform_maps_corners() {
        let t = PlotTransform::new(area(), (-1.0, 1.0), (0.0, 10.0), false);
        assert_eq!(t.to_screen((-1.0, 0.0)), Point::new(10.0, 120.0));
        assert_eq!(t.to_screen((1.0, 10.0)), Point::new(210.0, 20.0));
        assert_eq!(t.to_screen((0.0, 5.0)), Point::new(110.0, 70.0));
    }

    #[test]
    fn test_equal_aspect_centers_square() {
        let t = PlotTransform::new(area(), (-1.5, 1.5), (-1.5, 1.5), true);
        assert_relative_eq!(t.area.width, 100.0);
        assert_relative_eq!(t.area.height, 100.0);
        assert_relative_eq!(t.area.x, 60.0);
        assert_relative_eq!(t.area.y, 20.0);
        let center = t.to_screen((0.0, 0.0));
        assert_relative_eq!(center.x, 110.0);
        assert_relative_eq!(center.y, 70.0);
    }

    #[test]
    fn test_clip_inside_is_unchanged() {
        let clipped = clip_segment((0.0, 0.0), (1.0, 1.0), (-2.0, 2.0), (-2.0, 2.0));
        assert_eq!(clipped, Some(((0.0, 0.0), (1.0, 1.0))));
    }

    #[test]
    fn test_clip_crossing_edge() {
        let ((_, _), (x1, y1)) = clip_segment((0.0, 0.0), (0.0, 10.0), (-1.0, 1.0), (-5.0, 5.0)).unwrap();
        assert_relative_eq!(x1, 0.0);
        assert_relative_eq!(y1, 5.0);

        let ((x0, y0), _) = clip_segment((-4.0, -4.0), (4.0, 4.0), (-1.0, 1.0), (-1.0, 1.0)).unwrap();
        assert_relative_eq!(x0, -1.0);
        assert_relative_eq!(y0, -1.0);
    }

    #[test]
    fn test_clip_outside_is_dropped() {
        assert_eq!(clip_segment((0.0, 6.0), (1.0, 9.0), (-1.0, 1.0), (-5.0, 5.0)), None);
        assert_eq!(clip_segment((3.0, 0.0), (3.0, 1.0), (-1.0, 1.0), (-5.0, 5.0)), None);
    }

    #[test]
    fn test_nice_ticks() {
        assert_eq!(nice_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(nice_ticks(-1.5, 1.5, 6), vec![-1.5, -1.0, -0.5, 0.0, 0.5, 1.0, 1.5]);
        assert!(nice_ticks(1.0, 1.0, 5).is_empty());

        let ticks = nice_ticks(-TAU, TAU, 6);
        assert_eq!(ticks.first(), Some(&-6.0));
        assert_eq!(ticks.last(), Some(&6.0));
    }

    #[test]
    fn test_tick_labels() {
        assert_eq!(tick_label(2.0, 2.0), "2");
        assert_eq!(tick_label(-0.5, 0.5), "-0.5");
        assert_eq!(tick_label(-0.0, 0.5), "0.0");
        assert_eq!(tick_label(0.25, 0.05), "0.25");
    }

    #[test]
    fn test_stroke_dash_patterns() {
        assert!(stroke_for(&Style::solid(Color::BLUE, 2.0)).line_dash.segments.is_empty());
        assert_eq!(stroke_for(&Style::dashed(Color::RED, 1.0)).line_dash.segments, DASHED);
        let dotted = stroke_for(&Style::dotted(Color::GREEN, 1.0).with_alpha(0.5));
        assert_eq!(dotted.line_dash.segments, DOTTED);
        assert_eq!(dotted.width, 1.0);
    }
}
