//! # Trigonometric Formulas
//!
//! This module contains every closed-form formula used by the calculators.
//! Keeping them in one place means the section modules only orchestrate:
//! read inputs, call formulas, describe charts.
//!
//! ## Modules
//!
//! - [`trig`] - Angle conversion, guarded tangent, quadrants, special angles, inverse functions
//! - [`triangle`] - Right-triangle solving (four input modes), area and perimeter
//! - [`wave`] - Parameterised wave evaluation and period
//! - [`registry`] - Formula metadata and the quick reference card
//!
//! ## Conventions
//!
//! - **Angles**: degrees at the UI boundary, radians inside every formula
//! - **Quadrant boundaries**: belong to the lower-numbered quadrant (90° is I)
//! - **Undefined values**: represented as NaN or ±∞, never as errors

pub mod registry;
pub mod triangle;
pub mod trig;
pub mod wave;

// Re-export commonly used items
pub use trig::{
    tan_guarded,
    tan_is_displayable,
    quadrant,
    is_special_angle,
    InverseKind,
    Quadrant,
    COS_ZERO_THRESHOLD,
    SPECIAL_ANGLES_DEG,
    TAN_DISPLAY_LIMIT,
    TAN_PLOT_LIMIT,
};

pub use triangle::{
    sides_from_angle_hypotenuse,
    hypotenuse_angle_from_sides,
    sides_from_angle_adjacent,
    sides_from_angle_opposite,
    area,
    perimeter,
};

pub use wave::{period, WaveKind};

pub use registry::{
    Formula,
    FormulaCategory,
    FormulaMetadata,
    ALL_FORMULAS,
    QUICK_REFERENCE,
    generate_reference_markdown,
};
