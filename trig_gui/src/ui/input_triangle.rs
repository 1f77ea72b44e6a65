//! Input view for the right-triangle solver
//!
//! The mode radio decides which pair of measurements is editable. Side
//! lengths are free text so partial edits ("1.", "") never fight the cursor;
//! they are parsed on every change.

use iced::widget::{column, radio, text, Column, Space};
use iced::Element;

use trig_core::calculations::triangle::MIN_SIDE;
use trig_core::calculations::TriangleMode;

use super::shared::controls::{labeled_input, labeled_slider};
use crate::update::TRIANGLE_ANGLE_STEP;
use crate::{App, Message};

pub fn view(app: &App) -> Column<'_, Message> {
    let mut modes = column![text("Calculate using:").size(11)].spacing(4);
    for mode in TriangleMode::ALL {
        modes = modes.push(
            radio(mode.display_name(), mode, Some(app.triangle_mode), Message::TriangleModeSelected)
                .size(14)
                .text_size(11),
        );
    }

    let angle = || angle_slider(app.triangle_angle_deg);

    let fields: Column<'_, Message> = match app.triangle_mode {
        TriangleMode::AngleHypotenuse => column![
            angle(),
            labeled_input("Hypotenuse", &app.hypotenuse, Message::HypotenuseChanged),
        ],
        TriangleMode::TwoSides => column![
            labeled_input("Opposite side", &app.opposite, Message::OppositeChanged),
            labeled_input("Adjacent side", &app.adjacent, Message::AdjacentChanged),
        ],
        TriangleMode::AngleAdjacent => column![
            angle(),
            labeled_input("Adjacent side", &app.adjacent, Message::AdjacentChanged),
        ],
        TriangleMode::AngleOpposite => column![
            angle(),
            labeled_input("Opposite side", &app.opposite, Message::OppositeChanged),
        ],
    };

    column![
        text("Right Triangle Calculator").size(14),
        modes,
        Space::new().height(4),
        fields.spacing(8),
        text(format!("Side lengths must be at least {}", MIN_SIDE)).size(10).color([0.5, 0.5, 0.5]),
    ]
}

fn angle_slider(value: f64) -> Element<'static, Message> {
    labeled_slider("Angle (degrees)", 1.0..=89.0, value, TRIANGLE_ANGLE_STEP, 0, Message::TriangleAngleChanged)
}
