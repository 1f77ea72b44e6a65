//! # Trigcalc GUI Application
//!
//! Desktop shell for the trigonometry calculator, built with Iced.
//!
//! Layout: header with the dark-mode toggle, a navigation sidebar listing the
//! five sections, the section's input widgets in the center, the summary,
//! formulas and chart on the right, and a status bar. Every widget change
//! re-evaluates the current section through `trig_core::evaluate`.

mod ui;
mod update;

use std::path::PathBuf;

use iced::widget::{column, container, row, rule, Space};
use iced::{Element, Length, Size, Theme};

use trig_core::calculations::{BasicInput, InverseInput, TriangleMode, UnitCircleInput, WaveInput};
use trig_core::equations::{InverseKind, WaveKind};
use trig_core::{Section, SectionOutput, Settings};

/// Width of the navigation sidebar in pixels
const NAV_WIDTH: f32 = 190.0;

/// Share of the remaining width given to the input panel
const INPUT_RATIO: f32 = 0.3;

/// Application state
pub struct App {
    settings: Settings,
    // Dark-mode changes are written back here
    settings_path: Option<PathBuf>,
    section: Section,
    dark_mode: bool,

    // Per-section inputs. They survive section switches.
    basic: BasicInput,
    unit_circle: UnitCircleInput,
    triangle_mode: TriangleMode,
    triangle_angle_deg: f64,
    // Side lengths are edited as text
    hypotenuse: String,
    opposite: String,
    adjacent: String,
    wave: WaveInput,
    inverse: InverseInput,

    output: Option<SectionOutput>,
    error_message: Option<String>,
    status: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    SelectSection(Section),
    ToggleDarkMode,

    BasicAngleChanged(f64),

    UnitCircleAngleChanged(f64),
    ShowReferenceToggled(bool),
    ShowQuadrantsToggled(bool),

    TriangleModeSelected(TriangleMode),
    TriangleAngleChanged(f64),
    HypotenuseChanged(String),
    OppositeChanged(String),
    AdjacentChanged(String),

    WaveKindSelected(WaveKind),
    AmplitudeChanged(f64),
    FrequencyChanged(f64),
    PhaseChanged(f64),
    VerticalShiftChanged(f64),

    InverseFunctionSelected(InverseKind),
    InverseValueChanged(f64),
}

impl App {
    fn new() -> Self {
        let settings_path = Settings::locate(None);
        let settings = match Settings::resolve(settings_path.as_deref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                Settings::default()
            }
        };
        App::with_settings(settings, settings_path)
    }

    fn title(&self) -> String {
        format!("Trigcalc - {}", self.section.display_name())
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let header = ui::toolbar::view_header(self.section, self.dark_mode);

        let body = row![
            ui::nav_panel::view_nav_panel(self.section, NAV_WIDTH),
            ui::input_panel::view_input_panel(self, INPUT_RATIO),
            ui::results_panel::view_results_panel(self, INPUT_RATIO),
        ]
        .spacing(8)
        .height(Length::Fill);

        let content = column![
            header,
            rule::horizontal(1),
            Space::new().height(4),
            body,
            rule::horizontal(1),
            ui::status_bar::view_status_bar(&self.status, self.error_message.is_some()),
        ]
        .spacing(4)
        .padding(10);

        container(content).width(Length::Fill).height(Length::Fill).into()
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size(Size::new(1500.0, 950.0))
        .run()
}
