//! # Trigcalc CLI Application
//!
//! Command-line front end for the trigonometry calculator. Each section is
//! a subcommand; results print as text (default) or JSON, and `--plot`
//! opens the section's figure in a Ratatui terminal viewer.
//!
//! ```text
//! trigcalc basic --angle 30
//! trigcalc triangle two-sides --opposite 3 --adjacent 4 --json
//! trigcalc wave --kind tangent --frequency 2 --plot
//! trigcalc reference
//! ```

mod tui;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use trig_core::calculations::{
    BasicInput, InverseInput, TriangleInput, UnitCircleInput, WaveInput,
};
use trig_core::equations::{InverseKind, WaveKind, QUICK_REFERENCE};
use trig_core::units::Radians;
use trig_core::{evaluate, CalculationInput, SectionOutput, Settings, TrigError, TrigResult};

/// Interactive trigonometry calculator
#[derive(Parser, Debug)]
#[command(name = "trigcalc", author, version, about, long_about = None)]
struct Cli {
    /// Settings file (falls back to $TRIGCALC_SETTINGS, then defaults)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Print the complete section output as JSON
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    json: bool,

    /// Show the figure in the terminal chart viewer
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    plot: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// sin, cos and tan at one angle
    Basic {
        /// Angle (degrees unless --radians)
        #[arg(long, default_value_t = 45.0, allow_negative_numbers = true)]
        angle: f64,
        /// Interpret --angle as radians
        #[arg(long, action = ArgAction::SetTrue)]
        radians: bool,
    },
    /// Quadrant, coordinates and special angles on the unit circle
    UnitCircle {
        /// Angle in degrees, 0 to 360
        #[arg(long, default_value_t = 45.0)]
        angle: f64,
        /// Hide the 16 reference points
        #[arg(long, action = ArgAction::SetTrue)]
        no_reference: bool,
        /// Hide the quadrant labels
        #[arg(long, action = ArgAction::SetTrue)]
        no_quadrants: bool,
    },
    /// Solve a right triangle
    Triangle {
        #[command(subcommand)]
        mode: TriangleCommand,
    },
    /// y = A·fn(f·x + φ) + D
    Wave {
        #[arg(long, value_enum, default_value_t = WaveArg::Sine)]
        kind: WaveArg,
        /// Amplitude A, (0, 5]
        #[arg(long, default_value_t = 1.0)]
        amplitude: f64,
        /// Frequency f, (0, 3]
        #[arg(long, default_value_t = 1.0)]
        frequency: f64,
        /// Phase shift φ in degrees, -180 to 180
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        phase: f64,
        /// Vertical shift D, -2 to 2
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        shift: f64,
    },
    /// arcsin, arccos or arctan with a round-trip check
    Inverse {
        #[arg(long, value_enum, default_value_t = InverseArg::Arcsin)]
        function: InverseArg,
        /// Input value (default 0.5, or 1.0 for arctan)
        #[arg(long, allow_negative_numbers = true)]
        value: Option<f64>,
    },
    /// Print the quick reference of identities
    Reference,
}

#[derive(Subcommand, Debug)]
enum TriangleCommand {
    /// Angle and hypotenuse
    AngleHyp {
        #[arg(long, default_value_t = 30.0)]
        angle: f64,
        #[arg(long, default_value_t = 10.0)]
        hypotenuse: f64,
    },
    /// Opposite and adjacent sides
    TwoSides {
        #[arg(long, default_value_t = 5.0)]
        opposite: f64,
        #[arg(long, default_value_t = 8.0)]
        adjacent: f64,
    },
    /// Angle and adjacent side
    AngleAdj {
        #[arg(long, default_value_t = 30.0)]
        angle: f64,
        #[arg(long, default_value_t = 8.0)]
        adjacent: f64,
    },
    /// Angle and opposite side
    AngleOpp {
        #[arg(long, default_value_t = 30.0)]
        angle: f64,
        #[arg(long, default_value_t = 5.0)]
        opposite: f64,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum WaveArg {
    Sine,
    Cosine,
    Tangent,
}

impl From<WaveArg> for WaveKind {
    fn from(arg: WaveArg) -> Self {
        match arg {
            WaveArg::Sine => WaveKind::Sine,
            WaveArg::Cosine => WaveKind::Cosine,
            WaveArg::Tangent => WaveKind::Tangent,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum InverseArg {
    Arcsin,
    Arccos,
    Arctan,
}

impl From<InverseArg> for InverseKind {
    fn from(arg: InverseArg) -> Self {
        match arg {
            InverseArg::Arcsin => InverseKind::Arcsin,
            InverseArg::Arccos => InverseKind::Arccos,
            InverseArg::Arctan => InverseKind::Arctan,
        }
    }
}

impl Command {
    /// Section input for this command, `None` for `reference`
    fn to_input(&self) -> Option<CalculationInput> {
        let input = match *self {
            Command::Basic { angle, radians } => {
                let angle_deg = if radians { Radians(angle).to_degrees().value() } else { angle };
                CalculationInput::Basic(BasicInput { angle_deg })
            }
            Command::UnitCircle { angle, no_reference, no_quadrants } => CalculationInput::UnitCircle(UnitCircleInput {
                angle_deg: angle,
                show_reference: !no_reference,
                show_quadrants: !no_quadrants,
            }),
            Command::Triangle { ref mode } => CalculationInput::Triangle(match *mode {
                TriangleCommand::AngleHyp { angle, hypotenuse } => {
                    TriangleInput::AngleHypotenuse { angle_deg: angle, hypotenuse }
                }
                TriangleCommand::TwoSides { opposite, adjacent } => TriangleInput::TwoSides { opposite, adjacent },
                TriangleCommand::AngleAdj { angle, adjacent } => {
                    TriangleInput::AngleAdjacent { angle_deg: angle, adjacent }
                }
                TriangleCommand::AngleOpp { angle, opposite } => {
                    TriangleInput::AngleOpposite { angle_deg: angle, opposite }
                }
            }),
            Command::Wave { kind, amplitude, frequency, phase, shift } => CalculationInput::Wave(WaveInput {
                kind: kind.into(),
                amplitude,
                frequency,
                phase_deg: phase,
                vertical_shift: shift,
            }),
            Command::Inverse { function, value } => {
                let mut input = InverseInput::for_function(function.into());
                if let Some(value) = value {
                    input.value = value;
                }
                CalculationInput::Inverse(input)
            }
            Command::Reference => return None,
        };
        Some(input)
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
}

fn to_json<T: serde::Serialize>(value: &T) -> TrigResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| TrigError::SerializationError { reason: e.to_string() })
}

/// Plain-text report of one section
fn render_text(output: &SectionOutput) -> String {
    let rule = "═".repeat(39);
    let mut text = format!("{rule}\n  {}\n{rule}\n\n", output.section.display_name().to_uppercase());

    for line in &output.summary {
        let marker = if line.highlight { "[OK] " } else { "" };
        text.push_str(&format!("{}{}\n", marker, line));
    }

    text.push_str("\nFormulas:\n");
    for formula in &output.formulas {
        let meta = formula.metadata();
        text.push_str(&format!("  {:<28} {}\n", meta.name, meta.formula_plain));
    }
    text
}

/// The nine quick-reference identities in three groups
fn render_reference() -> String {
    let mut text = String::from("Quick Reference\n");
    for (category, formulas) in QUICK_REFERENCE {
        text.push_str(&format!("\n{}:\n", category.display_name()));
        for formula in formulas {
            text.push_str(&format!("  • {}\n", formula.metadata().formula_plain));
        }
    }
    text
}

fn run(cli: &Cli) -> TrigResult<()> {
    let Some(input) = cli.command.to_input() else {
        if cli.json {
            let reference: Vec<_> = QUICK_REFERENCE
                .iter()
                .flat_map(|(_, formulas)| formulas.iter().map(|f| f.metadata()))
                .collect();
            println!("{}", to_json(&reference)?);
        } else {
            print!("{}", render_reference());
        }
        return Ok(());
    };

    let settings = Settings::resolve(cli.settings.as_deref())?;
    let output = evaluate(&input, &settings)?;

    if cli.plot {
        tui::show(&output.figure).map_err(|e| TrigError::Internal {
            message: format!("terminal viewer failed: {}", e),
        })?;
    }

    if cli.json {
        println!("{}", to_json(&output)?);
    } else {
        print!("{}", render_text(&output));
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    log::debug!("{:?}", cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trig_core::Section;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("trigcalc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_match_sliders() {
        let cli = parse(&["wave"]);
        assert_eq!(cli.command.to_input(), Some(CalculationInput::Wave(WaveInput::default())));

        let cli = parse(&["triangle", "angle-hyp"]);
        assert_eq!(cli.command.to_input(), Some(CalculationInput::Triangle(TriangleInput::default())));

        let cli = parse(&["inverse", "--function", "arctan"]);
        assert_eq!(
            cli.command.to_input(),
            Some(CalculationInput::Inverse(InverseInput { function: InverseKind::Arctan, value: 1.0 }))
        );
    }

    #[test]
    fn test_negative_values_and_global_flags() {
        let cli = parse(&["wave", "--phase", "-90", "--shift", "-1.5", "--json"]);
        assert!(cli.json);
        match cli.command.to_input() {
            Some(CalculationInput::Wave(w)) => {
                assert_eq!(w.phase_deg, -90.0);
                assert_eq!(w.vertical_shift, -1.5);
            }
            other => panic!("unexpected input {:?}", other),
        }
    }

    #[test]
    fn test_radians_flag_converts() {
        let cli = parse(&["basic", "--angle", "3.141592653589793", "--radians"]);
        match cli.command.to_input() {
            Some(CalculationInput::Basic(b)) => assert!((b.angle_deg - 180.0).abs() < 1e-9),
            other => panic!("unexpected input {:?}", other),
        }
    }

    #[test]
    fn test_unit_circle_toggles() {
        let cli = parse(&["unit-circle", "--angle", "120", "--no-reference"]);
        assert_eq!(
            cli.command.to_input(),
            Some(CalculationInput::UnitCircle(UnitCircleInput {
                angle_deg: 120.0,
                show_reference: false,
                show_quadrants: true,
            }))
        );
    }

    #[test]
    fn test_reference_has_no_input() {
        assert!(parse(&["reference"]).command.to_input().is_none());
        let text = render_reference();
        assert!(text.contains("Basic Identities:"));
        assert_eq!(text.matches("  • ").count(), 9);
    }

    #[test]
    fn test_render_text_marks_special_angle() {
        let input = CalculationInput::default_for(Section::UnitCircle);
        let output = evaluate(&input, &Settings::default()).unwrap();
        let text = render_text(&output);
        assert!(text.contains("UNIT CIRCLE EXPLORER"));
        assert!(text.contains("Quadrant: I"));
        assert!(text.contains("[OK] Special angle: 45°"));
    }

    #[test]
    fn test_out_of_range_is_an_error() {
        let cli = parse(&["inverse", "--function", "arcsin", "--value", "1.5"]);
        let input = cli.command.to_input().unwrap();
        let err = evaluate(&input, &Settings::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("1.5"));
    }
}
