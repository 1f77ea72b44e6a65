//! Message handling and re-evaluation.
//!
//! Every message mutates the input of one section and then re-runs
//! `trig_core::evaluate` for the section on screen. Errors do not clear the
//! last good output; the results panel shows the error instead.

use trig_core::calculations::{InverseInput, TriangleInput, TriangleMode};
use trig_core::equations::InverseKind;
use std::path::PathBuf;

use trig_core::{
    evaluate, save_settings, CalculationInput, Section, SectionOutput, Settings, TrigError, TrigResult,
};

use crate::{App, Message};

/// Slider steps
pub const BASIC_ANGLE_STEP: f64 = 15.0;
pub const UNIT_CIRCLE_ANGLE_STEP: f64 = 5.0;
pub const TRIANGLE_ANGLE_STEP: f64 = 1.0;
pub const AMPLITUDE_STEP: f64 = 0.1;
pub const FREQUENCY_STEP: f64 = 0.1;
pub const PHASE_STEP: f64 = 15.0;
pub const SHIFT_STEP: f64 = 0.1;
pub const INVERSE_STEP: f64 = 0.01;
pub const ARCTAN_STEP: f64 = 0.1;

/// Snap a slider value to its step, dropping float noise like 0.30000000000000004
pub fn snap(value: f64, step: f64) -> f64 {
    let snapped = (value / step).round() * step;
    (snapped * 1e6).round() / 1e6
}

/// Parse a side length typed by the user
fn parse_side(field: &str, text: &str) -> TrigResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TrigError::missing_field(field));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| TrigError::invalid_input(field, trimmed, "not a number"))
}

impl App {
    pub fn with_settings(settings: Settings, settings_path: Option<PathBuf>) -> Self {
        let mut app = App {
            section: settings.default_section,
            dark_mode: settings.dark_mode,
            settings,
            settings_path,
            basic: Default::default(),
            unit_circle: Default::default(),
            triangle_mode: TriangleMode::default(),
            triangle_angle_deg: 30.0,
            hypotenuse: "10".to_string(),
            opposite: "5".to_string(),
            adjacent: "8".to_string(),
            wave: Default::default(),
            inverse: Default::default(),
            output: None,
            error_message: None,
            status: String::new(),
        };
        app.refresh();
        app
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::SelectSection(section) => self.section = section,
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                self.settings.dark_mode = self.dark_mode;
                self.persist_settings();
                // Theme only, nothing to recompute
                return;
            }

            Message::BasicAngleChanged(v) => self.basic.angle_deg = snap(v, BASIC_ANGLE_STEP),

            Message::UnitCircleAngleChanged(v) => self.unit_circle.angle_deg = snap(v, UNIT_CIRCLE_ANGLE_STEP),
            Message::ShowReferenceToggled(on) => self.unit_circle.show_reference = on,
            Message::ShowQuadrantsToggled(on) => self.unit_circle.show_quadrants = on,

            Message::TriangleModeSelected(mode) => self.triangle_mode = mode,
            Message::TriangleAngleChanged(v) => self.triangle_angle_deg = snap(v, TRIANGLE_ANGLE_STEP),
            Message::HypotenuseChanged(s) => self.hypotenuse = s,
            Message::OppositeChanged(s) => self.opposite = s,
            Message::AdjacentChanged(s) => self.adjacent = s,

            Message::WaveKindSelected(kind) => self.wave.kind = kind,
            Message::AmplitudeChanged(v) => self.wave.amplitude = snap(v, AMPLITUDE_STEP),
            Message::FrequencyChanged(v) => self.wave.frequency = snap(v, FREQUENCY_STEP),
            Message::PhaseChanged(v) => self.wave.phase_deg = snap(v, PHASE_STEP),
            Message::VerticalShiftChanged(v) => self.wave.vertical_shift = snap(v, SHIFT_STEP),

            Message::InverseFunctionSelected(function) => {
                if function != self.inverse.function {
                    self.inverse = InverseInput::for_function(function);
                }
            }
            Message::InverseValueChanged(v) => {
                let step = if self.inverse.function == InverseKind::Arctan {
                    ARCTAN_STEP
                } else {
                    INVERSE_STEP
                };
                self.inverse.value = snap(v, step);
            }
        }

        self.refresh();
    }

    /// Build the triangle input from the slider and the text fields
    pub fn triangle_input(&self) -> TrigResult<TriangleInput> {
        let angle_deg = self.triangle_angle_deg;
        Ok(match self.triangle_mode {
            TriangleMode::AngleHypotenuse => TriangleInput::AngleHypotenuse {
                angle_deg,
                hypotenuse: parse_side("hypotenuse", &self.hypotenuse)?,
            },
            TriangleMode::TwoSides => TriangleInput::TwoSides {
                opposite: parse_side("opposite", &self.opposite)?,
                adjacent: parse_side("adjacent", &self.adjacent)?,
            },
            TriangleMode::AngleAdjacent => TriangleInput::AngleAdjacent {
                angle_deg,
                adjacent: parse_side("adjacent", &self.adjacent)?,
            },
            TriangleMode::AngleOpposite => TriangleInput::AngleOpposite {
                angle_deg,
                opposite: parse_side("opposite", &self.opposite)?,
            },
        })
    }

    /// Input for the section currently on screen
    pub fn current_input(&self) -> TrigResult<CalculationInput> {
        Ok(match self.section {
            Section::BasicFunctions => CalculationInput::Basic(self.basic),
            Section::UnitCircle => CalculationInput::UnitCircle(self.unit_circle),
            Section::Triangle => CalculationInput::Triangle(self.triangle_input()?),
            Section::Wave => CalculationInput::Wave(self.wave),
            Section::Inverse => CalculationInput::Inverse(self.inverse),
        })
    }

    /// Write the settings back to the file they were resolved from, if any
    fn persist_settings(&mut self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        if let Err(e) = save_settings(&self.settings, path) {
            log::warn!("could not save settings: {}", e);
            self.status = format!("Error: {}", e.error_code());
        }
    }

    /// Re-evaluate the current section
    fn refresh(&mut self) {
        let result = self
            .current_input()
            .and_then(|input| evaluate(&input, &self.settings));

        match result {
            Ok(output) => {
                self.status = format!("{} updated", self.section.display_name());
                self.output = Some(output);
                self.error_message = None;
            }
            Err(e) => {
                log::debug!("evaluation failed: {}", e);
                self.status = format!("Error: {}", e.error_code());
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Output to show, only when it belongs to the current section
    pub fn current_output(&self) -> Option<&SectionOutput> {
        self.output.as_ref().filter(|o| o.section == self.section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trig_core::equations::WaveKind;
    use trig_core::{load_settings, CalculationResult};

    fn app() -> App {
        App::with_settings(Settings::default(), None)
    }

    #[test]
    fn test_starts_on_configured_section() {
        let settings = Settings {
            default_section: Section::Wave,
            dark_mode: true,
            ..Settings::default()
        };
        let app = App::with_settings(settings, None);
        assert_eq!(app.section, Section::Wave);
        assert!(app.dark_mode);
        assert_eq!(app.current_output().unwrap().section, Section::Wave);
    }

    #[test]
    fn test_slider_change_reevaluates() {
        let mut app = app();
        app.update(Message::BasicAngleChanged(90.0));
        match &app.current_output().unwrap().result {
            CalculationResult::Basic(r) => {
                assert_eq!(r.angle_deg, 90.0);
                assert!(r.tan.is_none());
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_section_switch_keeps_inputs() {
        let mut app = app();
        app.update(Message::SelectSection(Section::Wave));
        app.update(Message::WaveKindSelected(WaveKind::Tangent));
        app.update(Message::SelectSection(Section::BasicFunctions));
        app.update(Message::SelectSection(Section::Wave));
        assert_eq!(app.wave.kind, WaveKind::Tangent);
        assert_eq!(app.current_output().unwrap().section, Section::Wave);
    }

    #[test]
    fn test_empty_side_reports_missing_field() {
        let mut app = app();
        app.update(Message::SelectSection(Section::Triangle));
        app.update(Message::HypotenuseChanged("  ".into()));
        let message = app.error_message.clone().unwrap();
        assert!(message.contains("hypotenuse"));
        assert_eq!(app.status, "Error: MISSING_FIELD");

        app.update(Message::HypotenuseChanged("12".into()));
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_side_below_minimum_is_rejected() {
        let mut app = app();
        app.update(Message::SelectSection(Section::Triangle));
        app.update(Message::TriangleModeSelected(TriangleMode::TwoSides));
        app.update(Message::OppositeChanged("0.05".into()));
        assert_eq!(app.status, "Error: INVALID_INPUT");

        app.update(Message::OppositeChanged("abc".into()));
        assert!(app.error_message.unwrap().contains("not a number"));
    }

    #[test]
    fn test_inverse_function_change_resets_value() {
        let mut app = app();
        app.update(Message::SelectSection(Section::Inverse));
        app.update(Message::InverseValueChanged(-0.73));
        assert_eq!(app.inverse.value, -0.73);

        app.update(Message::InverseFunctionSelected(InverseKind::Arctan));
        assert_eq!(app.inverse.value, 1.0);
        app.update(Message::InverseValueChanged(7.349));
        assert_eq!(app.inverse.value, 7.3);
    }

    #[test]
    fn test_dark_mode_toggle() {
        let mut app = app();
        let before = app.status.clone();
        app.update(Message::ToggleDarkMode);
        assert!(app.dark_mode);
        assert_eq!(app.status, before);
    }

    #[test]
    fn test_dark_mode_is_saved_to_settings_file() {
        let path = std::env::temp_dir().join("trigcalc_gui_test_dark_mode.json");
        let _ = std::fs::remove_file(&path);

        let mut app = App::with_settings(Settings::default(), Some(path.clone()));
        app.update(Message::ToggleDarkMode);
        assert!(load_settings(&path).unwrap().dark_mode);

        app.update(Message::ToggleDarkMode);
        assert!(!load_settings(&path).unwrap().dark_mode);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_dark_mode_save_failure_keeps_theme() {
        let path = std::env::temp_dir()
            .join("trigcalc_gui_test_no_such_dir")
            .join("settings.json");

        let mut app = App::with_settings(Settings::default(), Some(path));
        app.update(Message::ToggleDarkMode);
        assert!(app.dark_mode);
        assert_eq!(app.status, "Error: FILE_ERROR");
    }

    #[test]
    fn test_snap() {
        assert_eq!(snap(0.30000000000000004, 0.1), 0.3);
        assert_eq!(snap(47.0, 15.0), 45.0);
        assert_eq!(snap(-0.004, 0.01), 0.0);
        assert_eq!(snap(1.26, 0.1), 1.3);
    }

    #[test]
    fn test_parse_side() {
        assert_eq!(parse_side("adjacent", " 8.5 ").unwrap(), 8.5);
        assert_eq!(parse_side("adjacent", "").unwrap_err().error_code(), "MISSING_FIELD");
        assert_eq!(parse_side("adjacent", "x").unwrap_err().error_code(), "INVALID_INPUT");
    }
}
