//! Shared UI components reusable across input/result modules
//!
//! Contains:
//! - `controls` - Labeled slider and text input rows
//! - `chart_canvas` - Canvas program drawing a chart `Figure`

pub mod chart_canvas;
pub mod controls;
