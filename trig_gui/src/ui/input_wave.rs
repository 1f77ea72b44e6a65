//! Input view for the wave function generator

use iced::widget::{column, pick_list, row, text, Column};
use iced::{Alignment, Length};

use trig_core::calculations::WaveInput;
use trig_core::equations::WaveKind;

use super::shared::controls::labeled_slider;
use crate::update::{AMPLITUDE_STEP, FREQUENCY_STEP, PHASE_STEP, SHIFT_STEP};
use crate::Message;

pub fn view(input: &WaveInput) -> Column<'_, Message> {
    column![
        text("Wave Parameters").size(14),
        row![
            text("Wave Type").size(11).width(Length::Fixed(110.0)),
            pick_list(WaveKind::ALL, Some(input.kind), Message::WaveKindSelected).text_size(11),
        ]
        .align_y(Alignment::Center),
        labeled_slider("Amplitude (A)", 0.1..=5.0, input.amplitude, AMPLITUDE_STEP, 1, Message::AmplitudeChanged),
        labeled_slider("Frequency (f)", 0.1..=3.0, input.frequency, FREQUENCY_STEP, 1, Message::FrequencyChanged),
        labeled_slider(
            "Phase Shift (φ) degrees",
            -180.0..=180.0,
            input.phase_deg,
            PHASE_STEP,
            0,
            Message::PhaseChanged,
        ),
        labeled_slider(
            "Vertical Shift (D)",
            -2.0..=2.0,
            input.vertical_shift,
            SHIFT_STEP,
            1,
            Message::VerticalShiftChanged,
        ),
    ]
}
