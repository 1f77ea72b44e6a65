//! Labeled input rows shared by the section editors

use std::ops::RangeInclusive;

use iced::widget::{column, row, slider, text, text_input, Space};
use iced::{Alignment, Element, Length};

use crate::Message;

/// Slider with a caption and the current value, e.g. "Amplitude (A): 1.0"
pub fn labeled_slider<'a>(
    label: &'a str,
    range: RangeInclusive<f64>,
    value: f64,
    step: f64,
    decimals: usize,
    on_change: impl Fn(f64) -> Message + 'a,
) -> Element<'a, Message> {
    column![
        row![
            text(label).size(11),
            Space::new().width(Length::Fill),
            text(format!("{:.*}", decimals, value)).size(11),
        ],
        slider(range, value, on_change).step(step),
    ]
    .spacing(4)
    .into()
}

/// Text input with a fixed-width caption
pub fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(110.0)),
        text_input("", value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
