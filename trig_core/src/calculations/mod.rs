//! # Section Calculations
//!
//! One module per calculator section. Each follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable) with `validate()`
//! - `*Result` - Computed values (JSON-serializable) with `summary()`
//! - `calculate(input) -> *Result` - Pure, infallible computation
//! - `figure(result, samples) -> Figure` - Declarative chart description
//!
//! [`evaluate`] ties these together for a single section and is what the
//! GUI and CLI call.
//!
//! ## Available Sections
//!
//! - [`basic`] - sin, cos, tan at one angle
//! - [`unit_circle`] - quadrant, coordinates, special angles
//! - [`triangle`] - right-triangle solver (four input modes)
//! - [`wave`] - y = A·fn(f·x + φ) + D
//! - [`inverse`] - arcsin, arccos, arctan with round-trip check

pub mod basic;
pub mod inverse;
pub mod triangle;
pub mod unit_circle;
pub mod wave;

use serde::{Deserialize, Serialize};

use crate::chart::Figure;
use crate::equations::Formula;
use crate::errors::TrigResult;
use crate::format::DisplayLine;
use crate::settings::Settings;

// Re-export commonly used types
pub use basic::{BasicInput, BasicResult};
pub use inverse::{InverseInput, InverseResult};
pub use triangle::{TriangleInput, TriangleMode, TriangleResult};
pub use unit_circle::{UnitCircleInput, UnitCircleResult};
pub use wave::{WaveInput, WaveResult};

/// The five calculator sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    BasicFunctions,
    UnitCircle,
    Triangle,
    Wave,
    Inverse,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::BasicFunctions,
        Section::UnitCircle,
        Section::Triangle,
        Section::Wave,
        Section::Inverse,
    ];

    /// Name shown in navigation
    pub fn display_name(&self) -> &'static str {
        match self {
            Section::BasicFunctions => "Basic Trig Functions",
            Section::UnitCircle => "Unit Circle Explorer",
            Section::Triangle => "Triangle Calculator",
            Section::Wave => "Wave Functions",
            Section::Inverse => "Inverse Functions",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Input for exactly one section.
///
/// Serialized with a `section` tag so a request is a flat JSON object:
///
/// ```rust
/// use trig_core::calculations::{BasicInput, CalculationInput};
///
/// let input = CalculationInput::Basic(BasicInput { angle_deg: 30.0 });
/// let json = serde_json::to_string(&input).unwrap();
/// assert_eq!(json, r#"{"section":"basic","angle_deg":30.0}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum CalculationInput {
    Basic(BasicInput),
    UnitCircle(UnitCircleInput),
    Triangle(TriangleInput),
    Wave(WaveInput),
    Inverse(InverseInput),
}

impl CalculationInput {
    /// Default input for a section
    pub fn default_for(section: Section) -> Self {
        match section {
            Section::BasicFunctions => CalculationInput::Basic(BasicInput::default()),
            Section::UnitCircle => CalculationInput::UnitCircle(UnitCircleInput::default()),
            Section::Triangle => CalculationInput::Triangle(TriangleInput::default()),
            Section::Wave => CalculationInput::Wave(WaveInput::default()),
            Section::Inverse => CalculationInput::Inverse(InverseInput::default()),
        }
    }

    pub fn section(&self) -> Section {
        match self {
            CalculationInput::Basic(_) => Section::BasicFunctions,
            CalculationInput::UnitCircle(_) => Section::UnitCircle,
            CalculationInput::Triangle(_) => Section::Triangle,
            CalculationInput::Wave(_) => Section::Wave,
            CalculationInput::Inverse(_) => Section::Inverse,
        }
    }

    pub fn validate(&self) -> TrigResult<()> {
        match self {
            CalculationInput::Basic(i) => i.validate(),
            CalculationInput::UnitCircle(i) => i.validate(),
            CalculationInput::Triangle(i) => i.validate(),
            CalculationInput::Wave(i) => i.validate(),
            CalculationInput::Inverse(i) => i.validate(),
        }
    }
}

/// Typed result of one section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum CalculationResult {
    Basic(BasicResult),
    UnitCircle(UnitCircleResult),
    Triangle(TriangleResult),
    Wave(WaveResult),
    Inverse(InverseResult),
}

/// Everything a shell needs to present one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionOutput {
    pub section: Section,
    pub result: CalculationResult,
    /// Display lines in presentation order
    pub summary: Vec<DisplayLine>,
    /// Formulas applied
    pub formulas: Vec<Formula>,
    pub figure: Figure,
}

/// Validate and evaluate one section.
///
/// # Errors
///
/// Returns `TrigError::InvalidInput` when a parameter is outside the range
/// the section accepts. Domain edges (vertical tangent, arccos(±1)) are not
/// errors; they surface as "undefined" text or plot gaps.
///
/// # Example
///
/// ```rust
/// use trig_core::calculations::{evaluate, CalculationInput, Section};
/// use trig_core::settings::Settings;
///
/// let output = evaluate(&CalculationInput::default_for(Section::Wave), &Settings::default()).unwrap();
/// assert_eq!(output.figure.panels.len(), 2);
/// ```
pub fn evaluate(input: &CalculationInput, settings: &Settings) -> TrigResult<SectionOutput> {
    input.validate()?;
    log::debug!("evaluating {}: {:?}", input.section(), input);

    let samples = &settings.samples;
    let output = match input {
        CalculationInput::Basic(i) => {
            let r = basic::calculate(i);
            SectionOutput {
                section: Section::BasicFunctions,
                summary: r.summary(),
                formulas: basic::FORMULAS.to_vec(),
                figure: basic::figure(&r, samples),
                result: CalculationResult::Basic(r),
            }
        }
        CalculationInput::UnitCircle(i) => {
            let r = unit_circle::calculate(i);
            SectionOutput {
                section: Section::UnitCircle,
                summary: r.summary(),
                formulas: unit_circle::FORMULAS.to_vec(),
                figure: unit_circle::figure(&r),
                result: CalculationResult::UnitCircle(r),
            }
        }
        CalculationInput::Triangle(i) => {
            let r = triangle::calculate(i);
            SectionOutput {
                section: Section::Triangle,
                summary: r.summary(),
                formulas: r.formulas(),
                figure: triangle::figure(&r, samples),
                result: CalculationResult::Triangle(r),
            }
        }
        CalculationInput::Wave(i) => {
            let r = wave::calculate(i);
            SectionOutput {
                section: Section::Wave,
                summary: r.summary(),
                formulas: wave::FORMULAS.to_vec(),
                figure: wave::figure(&r, samples),
                result: CalculationResult::Wave(r),
            }
        }
        CalculationInput::Inverse(i) => {
            let r = inverse::calculate(i);
            SectionOutput {
                section: Section::Inverse,
                summary: r.summary(),
                formulas: r.formulas(),
                figure: inverse::figure(&r, samples),
                result: CalculationResult::Inverse(r),
            }
        }
    };

    Ok(output)
}
