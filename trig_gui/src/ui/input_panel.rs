//! Input Panel (Center)
//!
//! Dispatches to the input editor of the current section.

use iced::widget::{container, scrollable, Column};
use iced::{Element, Length};

use trig_core::Section;

use super::{input_basic, input_inverse, input_triangle, input_unit_circle, input_wave};
use crate::{App, Message};

/// Render the input panel for the current section
///
/// The `ratio` parameter determines the relative size of this panel vs results panel.
/// A ratio of 0.5 means equal sizes, 0.7 means input takes 70% of the space.
pub fn view_input_panel(app: &App, ratio: f32) -> Element<'_, Message> {
    let panel: Column<'_, Message> = match app.section {
        Section::BasicFunctions => input_basic::view(&app.basic),
        Section::UnitCircle => input_unit_circle::view(&app.unit_circle),
        Section::Triangle => input_triangle::view(app),
        Section::Wave => input_wave::view(&app.wave),
        Section::Inverse => input_inverse::view(&app.inverse),
    };

    // Convert ratio to fill portion (scale to 0-100 for better precision)
    let portion = (ratio * 100.0) as u16;

    container(scrollable(panel.padding(8).spacing(8)))
        .width(Length::FillPortion(portion))
        .style(container::bordered_box)
        .padding(5)
        .into()
}
