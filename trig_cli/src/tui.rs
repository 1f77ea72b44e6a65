//! Terminal figure viewer.
//!
//! Draws a [`Figure`] as a grid of Ratatui canvases (Braille resolution).
//! Curves are split at their gaps, reference lines span the panel bounds,
//! text annotations are printed at their data position and table panels use
//! the `Table` widget. `q` or `Esc` closes the viewer.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color as TermColor, Modifier, Style as TermStyle};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Paragraph, Row, Table as TableWidget};
use ratatui::{DefaultTerminal, Frame};
use trig_core::chart::{linspace, Color, Figure, Panel, PlotElement, Table};
use trig_core::format::fixed;

/// Points used to approximate a circle outline
const CIRCLE_SEGMENTS: usize = 96;

/// Show `figure` until the user quits.
pub fn show(figure: &Figure) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = run(&mut terminal, figure);
    ratatui::restore();
    result
}

fn run(terminal: &mut DefaultTerminal, figure: &Figure) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, figure))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                return Ok(());
            }
        }
    }
}

fn term_color(color: Color) -> TermColor {
    // Black strokes vanish on dark terminals
    if color == Color::BLACK {
        return TermColor::Gray;
    }
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    TermColor::Rgb(channel(color.r), channel(color.g), channel(color.b))
}

fn draw(frame: &mut Frame, figure: &Figure) {
    let [title_area, grid_area, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(figure.title.as_str()).centered()).style(TermStyle::default().add_modifier(Modifier::BOLD)),
        title_area,
    );
    frame.render_widget(Paragraph::new("q / Esc: quit").style(TermStyle::default().fg(TermColor::DarkGray)), help_area);

    let rows = Layout::vertical(vec![Constraint::Ratio(1, figure.rows.max(1) as u32); figure.rows.max(1)]).split(grid_area);
    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::horizontal(vec![Constraint::Ratio(1, figure.cols.max(1) as u32); figure.cols.max(1)]).split(*row_area);
        for (col, cell) in cols.iter().enumerate() {
            if let Some(panel) = figure.panel(row, col) {
                draw_panel(frame, panel, *cell);
            }
        }
    }
}

fn draw_panel(frame: &mut Frame, panel: &Panel, area: Rect) {
    if let Some(table) = panel.table() {
        draw_table(frame, panel, table, area);
        return;
    }

    let legend = legend_line(panel);
    let legend_height = if legend.spans.is_empty() { 0 } else { 1 };
    let [plot_area, legend_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(legend_height)]).areas(area);

    let ((x0, x1), (y0, y1)) = panel.bounds();
    let block = Block::bordered()
        .title(panel.title.as_str())
        .title_bottom(axis_caption(panel, (x0, x1), (y0, y1)));

    let canvas = Canvas::default()
        .block(block)
        .marker(symbols::Marker::Braille)
        .x_bounds([x0, x1])
        .y_bounds([y0, y1])
        .paint(|ctx| paint(ctx, panel, (x0, x1), (y0, y1)));

    frame.render_widget(canvas, plot_area);
    if legend_height > 0 {
        frame.render_widget(Paragraph::new(legend), legend_area);
    }
}

/// "x (radians) [-6.28, 6.28]  y [-5.00, 5.00]"
fn axis_caption(panel: &Panel, x: (f64, f64), y: (f64, f64)) -> String {
    let name = |label: &Option<String>, axis: &str| label.clone().unwrap_or_else(|| axis.to_string());
    format!(
        "{} [{}, {}]  {} [{}, {}]",
        name(&panel.x_label, "x"),
        fixed(x.0, 2),
        fixed(x.1, 2),
        name(&panel.y_label, "y"),
        fixed(y.0, 2),
        fixed(y.1, 2)
    )
}

fn legend_line(panel: &Panel) -> Line<'static> {
    if !panel.legend {
        return Line::default();
    }
    let spans: Vec<Span<'static>> = panel
        .legend_entries()
        .into_iter()
        .flat_map(|(label, color)| {
            [
                Span::styled("■ ", TermStyle::default().fg(term_color(color))),
                Span::raw(format!("{}  ", label)),
            ]
        })
        .collect();
    Line::from(spans)
}

fn line(ctx: &mut Context, from: (f64, f64), to: (f64, f64), color: Color) {
    ctx.draw(&CanvasLine {
        x1: from.0,
        y1: from.1,
        x2: to.0,
        y2: to.1,
        color: term_color(color),
    });
}

fn polyline(ctx: &mut Context, points: &[(f64, f64)], color: Color) {
    for pair in points.windows(2) {
        line(ctx, pair[0], pair[1], color);
    }
}

fn paint(ctx: &mut Context, panel: &Panel, x: (f64, f64), y: (f64, f64)) {
    for element in &panel.elements {
        match element {
            PlotElement::Curve(c) => {
                for segment in c.segments() {
                    polyline(ctx, &segment, c.style.color);
                }
            }
            PlotElement::Marker(m) => ctx.draw(&Points {
                coords: &[(m.x, m.y)],
                color: term_color(m.color),
            }),
            PlotElement::Segment(s) => {
                line(ctx, s.from, s.to, s.style.color);
                if s.end_markers {
                    ctx.draw(&Points {
                        coords: &[s.from, s.to],
                        color: term_color(s.style.color),
                    });
                }
            }
            PlotElement::HLine(r) => line(ctx, (x.0, r.value), (x.1, r.value), r.style.color),
            PlotElement::VLine(r) => line(ctx, (r.value, y.0), (r.value, y.1), r.style.color),
            PlotElement::Circle(c) => {
                let outline: Vec<(f64, f64)> = linspace(0.0, std::f64::consts::TAU, CIRCLE_SEGMENTS + 1)
                    .into_iter()
                    .map(|t| (c.center.0 + c.radius * t.cos(), c.center.1 + c.radius * t.sin()))
                    .collect();
                polyline(ctx, &outline, c.style.color);
            }
            PlotElement::Text(t) => {
                // Text goes on its own layer so later lines do not erase it
                ctx.layer();
                ctx.print(t.position.0, t.position.1, t.content.clone());
            }
            PlotElement::Table(_) => {}
        }
    }
}

fn draw_table(frame: &mut Frame, panel: &Panel, table: &Table, area: Rect) {
    let highlight = TermStyle::default().bg(term_color(table.highlight)).fg(TermColor::Black);
    let rows: Vec<Row> = table
        .rows
        .iter()
        .map(|row| {
            let r = Row::new(row.cells.clone());
            if row.highlighted {
                r.style(highlight)
            } else {
                r
            }
        })
        .collect();
    let widths = vec![Constraint::Ratio(1, table.headers.len().max(1) as u32); table.headers.len().max(1)];

    let widget = TableWidget::new(rows, widths)
        .header(Row::new(table.headers.clone()).style(TermStyle::default().add_modifier(Modifier::BOLD)))
        .block(Block::bordered().title(panel.title.as_str()));
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use trig_core::{evaluate, CalculationInput, Section, Settings};

    fn rendered(section: Section) -> String {
        let output = evaluate(&CalculationInput::default_for(section), &Settings::default()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
        terminal.draw(|frame| draw(frame, &output.figure)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_panel_titles_are_drawn() {
        let screen = rendered(Section::BasicFunctions);
        assert!(screen.contains("Sine Function"));
        assert!(screen.contains("Tangent Function"));
        assert!(screen.contains("q / Esc: quit"));
    }

    #[test]
    fn test_inverse_table_is_drawn() {
        let screen = rendered(Section::Inverse);
        assert!(screen.contains("Special Values Reference"));
        assert!(screen.contains("→ 0.500"));
    }

    #[test]
    fn test_color_mapping() {
        assert_eq!(term_color(Color::RED), TermColor::Rgb(255, 0, 0));
        assert_eq!(term_color(Color::BLACK), TermColor::Gray);
    }

    #[test]
    fn test_legend_only_when_enabled() {
        let output = evaluate(&CalculationInput::default_for(Section::Wave), &Settings::default()).unwrap();
        let legend = legend_line(&output.figure.panels[0]);
        let text: String = legend.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("Modified Sine"));
        assert!(text.contains("Max = 1.00"));

        let triangle = evaluate(&CalculationInput::default_for(Section::Triangle), &Settings::default()).unwrap();
        assert!(legend_line(&triangle.figure.panels[0]).spans.is_empty());
    }

    #[test]
    fn test_axis_caption() {
        let panel = Panel::new("p").x_label("Angle (degrees)");
        assert_eq!(axis_caption(&panel, (1.0, 89.0), (0.0, 3.0)), "Angle (degrees) [1.00, 89.00]  y [0.00, 3.00]");
    }
}
