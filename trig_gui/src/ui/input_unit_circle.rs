//! Input view for the unit circle explorer

use iced::widget::{checkbox, column, text, Column};

use trig_core::calculations::UnitCircleInput;

use super::shared::controls::labeled_slider;
use crate::update::UNIT_CIRCLE_ANGLE_STEP;
use crate::Message;

pub fn view(input: &UnitCircleInput) -> Column<'_, Message> {
    column![
        text("Unit Circle Explorer").size(14),
        labeled_slider(
            "Angle (degrees)",
            0.0..=360.0,
            input.angle_deg,
            UNIT_CIRCLE_ANGLE_STEP,
            0,
            Message::UnitCircleAngleChanged,
        ),
        checkbox(input.show_reference)
            .label("Show reference angles")
            .on_toggle(Message::ShowReferenceToggled)
            .text_size(11),
        checkbox(input.show_quadrants)
            .label("Show quadrant labels")
            .on_toggle(Message::ShowQuadrantsToggled)
            .text_size(11),
    ]
}
