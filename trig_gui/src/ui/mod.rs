//! UI module for the Trigcalc GUI
//!
//! # Panel Structure
//! - `toolbar` - Application header with the dark-mode toggle
//! - `nav_panel` - Left sidebar: the five calculator sections
//! - `input_panel` - Center panel: dispatches to input_* child modules
//! - `results_panel` - Right panel: summary, formulas and chart
//! - `status_bar` - Bottom status messages
//!
//! # Input Panel Children
//! - `input_basic` - Angle slider
//! - `input_unit_circle` - Angle slider and display toggles
//! - `input_triangle` - Mode radio, angle slider, side lengths
//! - `input_wave` - Wave type and the four parameters
//! - `input_inverse` - Function and input value
//!
//! # Shared Components
//! - `shared/controls` - Labeled slider and text input rows
//! - `shared/chart_canvas` - Canvas renderer for `trig_core::chart::Figure`

// Top-level panels
pub mod input_panel;
pub mod nav_panel;
pub mod results_panel;
pub mod status_bar;
pub mod toolbar;

// Input panel children
pub mod input_basic;
pub mod input_inverse;
pub mod input_triangle;
pub mod input_unit_circle;
pub mod input_wave;

// Shared components
pub mod shared;
