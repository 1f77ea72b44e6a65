//! # trig_core - Trigonometry Calculator Engine
//!
//! `trig_core` is the computational heart of the trig calculator. It turns a
//! handful of scalar parameters into display text and a declarative chart
//! description for five sections: basic functions, the unit circle, right
//! triangles, wave functions and inverse functions.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All inputs, results and figures implement Serialize/Deserialize
//! - **Renderer-agnostic**: Figures are data; the GUI and CLI decide how to draw them
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use trig_core::{evaluate, CalculationInput, Settings};
//! use trig_core::calculations::BasicInput;
//!
//! let input = CalculationInput::Basic(BasicInput { angle_deg: 60.0 });
//! let output = evaluate(&input, &Settings::default()).unwrap();
//!
//! for line in &output.summary {
//!     println!("{}", line);
//! }
//! assert_eq!(output.figure.panels.len(), 4);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The five sections and the `evaluate` dispatcher
//! - [`equations`] - Closed-form formulas and the formula registry
//! - [`chart`] - Figure, panel and plot element descriptions
//! - [`format`] - Fixed-precision display strings
//! - [`units`] - Degree and radian newtypes
//! - [`settings`] - Sample densities, theme, start-up section
//! - [`errors`] - Structured error types
//! - [`file_io`] - Settings file operations with atomic saves

pub mod calculations;
pub mod chart;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod format;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{evaluate, CalculationInput, CalculationResult, Section, SectionOutput};
pub use errors::{TrigError, TrigResult};
pub use file_io::{load_settings, save_settings};
pub use settings::Settings;
