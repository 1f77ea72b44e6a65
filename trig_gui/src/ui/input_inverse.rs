//! Input view for the inverse functions section

use iced::widget::{column, pick_list, row, text, Column};
use iced::{Alignment, Length};

use trig_core::calculations::InverseInput;
use trig_core::equations::InverseKind;

use super::shared::controls::labeled_slider;
use crate::update::{ARCTAN_STEP, INVERSE_STEP};
use crate::Message;

pub fn view(input: &InverseInput) -> Column<'_, Message> {
    let (min, max) = input.function.input_range();
    let (step, decimals) = match input.function {
        InverseKind::Arctan => (ARCTAN_STEP, 1),
        InverseKind::Arcsin | InverseKind::Arccos => (INVERSE_STEP, 2),
    };

    column![
        text("Inverse Function Input").size(14),
        row![
            text("Function").size(11).width(Length::Fixed(110.0)),
            pick_list(InverseKind::ALL, Some(input.function), Message::InverseFunctionSelected).text_size(11),
        ]
        .align_y(Alignment::Center),
        labeled_slider("Input value", min..=max, input.value, step, decimals, Message::InverseValueChanged),
        text(format!("Domain: {}", input.function.domain_text())).size(10).color([0.5, 0.5, 0.5]),
    ]
}
