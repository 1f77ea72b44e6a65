//! Results Panel (Right Side)
//!
//! Shows, for the current section:
//! - the error of the last evaluation, if any
//! - summary lines (success indicators in green)
//! - the formulas applied
//! - the chart, drawn on a canvas
//! - the quick reference card, under every section

use iced::widget::{column, container, row, rule, scrollable, text, Canvas, Column, Row, Space};
use iced::{Element, Length};

use trig_core::equations::QUICK_REFERENCE;
use trig_core::format::DisplayLine;
use trig_core::SectionOutput;

use super::shared::chart_canvas::FigureChart;
use crate::{App, Message};

/// Canvas height per figure row in pixels
const CHART_ROW_HEIGHT: f32 = 340.0;

/// Render the results panel
///
/// The `input_ratio` parameter is the ratio used by the input panel.
/// This panel uses the complementary ratio (1 - input_ratio).
pub fn view_results_panel(app: &App, input_ratio: f32) -> Element<'_, Message> {
    let mut content: Column<'_, Message> = column![].spacing(6);

    if let Some(ref error) = app.error_message {
        content = content.push(column![
            text("Error").size(14),
            Space::new().height(4),
            text(error).size(12).color([0.8, 0.2, 0.2]),
        ]);
    }

    match app.current_output() {
        Some(output) => content = content.push(view_output(output)),
        None => {
            content = content.push(text("No result yet").size(14).color([0.5, 0.5, 0.5]));
        }
    }

    content = content.push(Space::new().height(8));
    content = content.push(rule::horizontal(1));
    content = content.push(view_quick_reference());

    // Use complementary ratio (scale to 0-100 for better precision)
    let portion = ((1.0 - input_ratio) * 100.0) as u16;

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(portion))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_output(output: &SectionOutput) -> Element<'_, Message> {
    let mut summary: Column<'_, Message> = column![text("Results").size(14)].spacing(3);
    for line in &output.summary {
        summary = summary.push(view_line(line));
    }

    let mut formulas: Column<'_, Message> = column![text("Formulas").size(14)].spacing(3);
    for formula in &output.formulas {
        let meta = formula.metadata();
        formulas = formulas.push(
            row![
                text(meta.name).size(11).width(Length::Fixed(170.0)),
                text(meta.formula_plain).size(11),
            ]
            .spacing(8),
        );
    }

    let height = CHART_ROW_HEIGHT * output.figure.rows.max(1) as f32;
    let chart: Element<'_, Message> = Canvas::new(FigureChart::new(&output.figure))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .into();

    column![
        row![summary.width(Length::FillPortion(1)), formulas.width(Length::FillPortion(1))].spacing(12),
        Space::new().height(8),
        chart,
    ]
    .spacing(4)
    .into()
}

fn view_line(line: &DisplayLine) -> Element<'_, Message> {
    let label = text(format!("{}:", line.label)).size(12).width(Length::Fixed(170.0));
    let value = if line.highlight {
        text(format!("✓ {}", line.value)).size(12).color([0.1, 0.6, 0.2])
    } else {
        text(&line.value).size(12)
    };
    row![label, value].spacing(8).into()
}

/// Quick reference entries grouped by category, one group per column
fn quick_reference_columns() -> Vec<(&'static str, Vec<&'static str>)> {
    QUICK_REFERENCE
        .iter()
        .map(|(category, formulas)| {
            let entries = formulas.iter().map(|f| f.metadata().formula_plain).collect();
            (category.display_name(), entries)
        })
        .collect()
}

fn view_quick_reference() -> Element<'static, Message> {
    let mut columns: Row<'static, Message> = row![].spacing(12);
    for (title, entries) in quick_reference_columns() {
        let mut group: Column<'static, Message> = column![text(format!("{}:", title)).size(12)].spacing(3);
        for entry in entries {
            group = group.push(text(format!("• {}", entry)).size(11));
        }
        columns = columns.push(group.width(Length::FillPortion(1)));
    }

    column![text("📚 Quick Reference").size(14), columns].spacing(6).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_reference_has_three_columns_of_three() {
        let columns = quick_reference_columns();
        assert_eq!(columns.len(), 3);
        assert!(columns.iter().all(|(_, entries)| entries.len() == 3));

        let titles: Vec<_> = columns.iter().map(|(title, _)| *title).collect();
        assert_eq!(titles, ["Basic Identities", "Special Angles", "Unit Circle"]);
        assert_eq!(columns[0].1[0], "sin²θ + cos²θ = 1");
    }
}
