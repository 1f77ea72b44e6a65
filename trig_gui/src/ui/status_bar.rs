//! Status Bar (Bottom)
//!
//! Shows the outcome of the last evaluation.

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar(status: &str, has_error: bool) -> Element<'_, Message> {
    let status_text = if has_error {
        text(status).size(10).color([0.8, 0.2, 0.2])
    } else {
        text(status).size(10)
    };

    row![
        text(format!("Trigcalc v{}", env!("CARGO_PKG_VERSION"))).size(10),
        Space::new().width(Length::Fill),
        status_text,
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
