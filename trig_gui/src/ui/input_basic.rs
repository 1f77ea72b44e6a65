//! Input view for the basic functions section

use iced::widget::{column, text, Column};

use trig_core::calculations::BasicInput;

use super::shared::controls::labeled_slider;
use crate::update::BASIC_ANGLE_STEP;
use crate::Message;

pub fn view(input: &BasicInput) -> Column<'_, Message> {
    column![
        text("Input Angle").size(14),
        labeled_slider(
            "Angle (degrees)",
            -360.0..=360.0,
            input.angle_deg,
            BASIC_ANGLE_STEP,
            0,
            Message::BasicAngleChanged,
        ),
    ]
}
