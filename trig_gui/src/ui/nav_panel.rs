//! Navigation Panel (Left Sidebar)
//!
//! One button per calculator section; the active section is highlighted.

use iced::widget::{button, column, container, rule, text, Column, Space};
use iced::{Element, Length, Padding};

use trig_core::Section;

use crate::Message;

/// Render the navigation sidebar
pub fn view_nav_panel(current: Section, width: f32) -> Element<'static, Message> {
    let mut panel_content: Column<'_, Message> = column![
        text("Choose a section").size(11).color([0.5, 0.5, 0.5]),
        Space::new().height(4),
    ]
    .spacing(2);

    for section in Section::ALL {
        let style = if section == current {
            button::primary
        } else {
            button::secondary
        };
        panel_content = panel_content.push(
            button(text(section.display_name()).size(11))
                .on_press(Message::SelectSection(section))
                .padding(Padding::from([6, 8]))
                .style(style)
                .width(Length::Fill),
        );
    }

    panel_content = panel_content.push(Space::new().height(8));
    panel_content = panel_content.push(rule::horizontal(1));
    panel_content = panel_content.push(
        text("Move the sliders to explore; every change recomputes the section.")
            .size(10)
            .color([0.5, 0.5, 0.5]),
    );

    container(panel_content.padding(4))
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(4)
        .into()
}
