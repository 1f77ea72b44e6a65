//! Toolbar component
//!
//! Application title, the current section and the theme toggle.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use trig_core::Section;

use crate::Message;

/// Render the application header
pub fn view_header(section: Section, dark_mode: bool) -> Element<'static, Message> {
    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };

    row![
        text("Trigcalc").size(28),
        Space::new().width(12),
        text("Interactive Trigonometry Calculator").size(14).color([0.5, 0.5, 0.5]),
        Space::new().width(Length::Fill),
        text(section.display_name()).size(14),
        Space::new().width(16),
        button(text(theme_label).size(11))
            .on_press(Message::ToggleDarkMode)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .align_y(Alignment::Center)
    .into()
}
