//! # Formula Registry
//!
//! Central registry of the formulas the calculator applies, plus the quick
//! reference card of identities shown beneath every section.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe formula identification via the `Formula` enum
//! - Metadata (plain text and LaTeX forms) for display and documentation
//! - Serialization support for JSON export
//!
//! ## Usage
//!
//! ```rust
//! use trig_core::equations::registry::{Formula, FormulaCategory};
//!
//! let meta = Formula::PythagoreanIdentity.metadata();
//! assert_eq!(meta.category, FormulaCategory::BasicIdentities);
//! println!("{}", meta.formula_plain);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Formula Categories
// ============================================================================

/// Categories for grouping formulas in the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormulaCategory {
    /// Fundamental identities (Pythagorean, quotient)
    BasicIdentities,
    /// Exact values at 30°, 45°, 60°
    SpecialAngles,
    /// Unit circle facts and angle conversion
    UnitCircle,
    /// Right-triangle solving
    RightTriangle,
    /// Parameterised wave functions
    Waves,
    /// Inverse trigonometric functions
    Inverse,
}

impl FormulaCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            FormulaCategory::BasicIdentities => "Basic Identities",
            FormulaCategory::SpecialAngles => "Special Angles",
            FormulaCategory::UnitCircle => "Unit Circle",
            FormulaCategory::RightTriangle => "Right Triangle",
            FormulaCategory::Waves => "Waves",
            FormulaCategory::Inverse => "Inverse Functions",
        }
    }

    /// Sort order for the reference document
    pub fn sort_order(&self) -> u8 {
        match self {
            FormulaCategory::BasicIdentities => 1,
            FormulaCategory::SpecialAngles => 2,
            FormulaCategory::UnitCircle => 3,
            FormulaCategory::RightTriangle => 4,
            FormulaCategory::Waves => 5,
            FormulaCategory::Inverse => 6,
        }
    }

    /// All categories in sort order
    pub fn all() -> Vec<FormulaCategory> {
        use FormulaCategory::*;
        let mut cats = vec![BasicIdentities, SpecialAngles, UnitCircle, RightTriangle, Waves, Inverse];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

// ============================================================================
// Formula Metadata
// ============================================================================

/// Metadata for a single formula.
#[derive(Debug, Clone, Serialize)]
pub struct FormulaMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Plain-text form, e.g. "sin²θ + cos²θ = 1"
    pub formula_plain: &'static str,
    /// LaTeX form for math rendering
    pub formula_latex: &'static str,
    pub category: FormulaCategory,
    /// Function implementing it, if any
    pub source_function: Option<&'static str>,
}

// ============================================================================
// Formula Enum
// ============================================================================

/// Every formula the calculator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formula {
    // Quick reference: basic identities
    PythagoreanIdentity,
    TangentQuotient,
    TangentSecantIdentity,
    // Quick reference: special angles
    Special30,
    Special45,
    Special60,
    // Quick reference: unit circle
    UnitCirclePoint,
    FullPeriod,
    QuadrantSigns,

    DegreesToRadians,

    TriangleFromAngleHypotenuse,
    TriangleFromTwoSides,
    TriangleFromAngleAdjacent,
    TriangleFromAngleOpposite,
    TriangleArea,
    TrianglePerimeter,

    WaveEquation,
    WavePeriod,

    InverseSine,
    InverseCosine,
    InverseTangent,
}

impl Formula {
    /// Get full metadata for this formula
    pub fn metadata(&self) -> FormulaMetadata {
        use FormulaCategory::*;
        let (name, formula_plain, formula_latex, category, source_function) = match self {
            Formula::PythagoreanIdentity => (
                "Pythagorean Identity",
                "sin²θ + cos²θ = 1",
                r"\sin^2\theta + \cos^2\theta = 1",
                BasicIdentities,
                None,
            ),
            Formula::TangentQuotient => (
                "Tangent Quotient",
                "tan θ = sin θ / cos θ",
                r"\tan\theta = \frac{\sin\theta}{\cos\theta}",
                BasicIdentities,
                Some("tan_guarded"),
            ),
            Formula::TangentSecantIdentity => (
                "Tangent-Secant Identity",
                "1 + tan²θ = sec²θ",
                r"1 + \tan^2\theta = \sec^2\theta",
                BasicIdentities,
                None,
            ),
            Formula::Special30 => (
                "Thirty Degrees",
                "sin(30°) = 1/2, cos(30°) = √3/2",
                r"\sin 30^\circ = \frac{1}{2},\ \cos 30^\circ = \frac{\sqrt{3}}{2}",
                SpecialAngles,
                None,
            ),
            Formula::Special45 => (
                "Forty-Five Degrees",
                "sin(45°) = √2/2, cos(45°) = √2/2",
                r"\sin 45^\circ = \cos 45^\circ = \frac{\sqrt{2}}{2}",
                SpecialAngles,
                None,
            ),
            Formula::Special60 => (
                "Sixty Degrees",
                "sin(60°) = √3/2, cos(60°) = 1/2",
                r"\sin 60^\circ = \frac{\sqrt{3}}{2},\ \cos 60^\circ = \frac{1}{2}",
                SpecialAngles,
                None,
            ),
            Formula::UnitCirclePoint => (
                "Point on the Unit Circle",
                "(cos θ, sin θ) = point on circle",
                r"(\cos\theta, \sin\theta)",
                UnitCircle,
                None,
            ),
            Formula::FullPeriod => (
                "Full Period",
                "Period: 2π radians = 360°",
                r"2\pi\ \text{rad} = 360^\circ",
                UnitCircle,
                None,
            ),
            Formula::QuadrantSigns => (
                "Quadrant Signs",
                "Quadrants determine sign",
                r"\text{quadrant} \Rightarrow \operatorname{sign}(\sin\theta), \operatorname{sign}(\cos\theta)",
                UnitCircle,
                Some("quadrant"),
            ),
            Formula::DegreesToRadians => (
                "Degrees to Radians",
                "θ_rad = θ_deg · π/180",
                r"\theta_{rad} = \theta_{deg} \cdot \frac{\pi}{180}",
                UnitCircle,
                Some("Degrees::to_radians"),
            ),
            Formula::TriangleFromAngleHypotenuse => (
                "Sides from Angle and Hypotenuse",
                "opp = hyp·sin θ, adj = hyp·cos θ",
                r"a_{opp} = c \sin\theta,\ a_{adj} = c \cos\theta",
                RightTriangle,
                Some("sides_from_angle_hypotenuse"),
            ),
            Formula::TriangleFromTwoSides => (
                "Hypotenuse and Angle from Two Sides",
                "hyp = √(opp² + adj²), θ = atan(opp/adj)",
                r"c = \sqrt{a_{opp}^2 + a_{adj}^2},\ \theta = \arctan\frac{a_{opp}}{a_{adj}}",
                RightTriangle,
                Some("hypotenuse_angle_from_sides"),
            ),
            Formula::TriangleFromAngleAdjacent => (
                "Sides from Angle and Adjacent",
                "opp = adj·tan θ, hyp = adj / cos θ",
                r"a_{opp} = a_{adj} \tan\theta,\ c = \frac{a_{adj}}{\cos\theta}",
                RightTriangle,
                Some("sides_from_angle_adjacent"),
            ),
            Formula::TriangleFromAngleOpposite => (
                "Sides from Angle and Opposite",
                "adj = opp / tan θ, hyp = opp / sin θ",
                r"a_{adj} = \frac{a_{opp}}{\tan\theta},\ c = \frac{a_{opp}}{\sin\theta}",
                RightTriangle,
                Some("sides_from_angle_opposite"),
            ),
            Formula::TriangleArea => (
                "Right Triangle Area",
                "A = ½·opp·adj",
                r"A = \frac{1}{2} a_{opp} a_{adj}",
                RightTriangle,
                Some("area"),
            ),
            Formula::TrianglePerimeter => (
                "Perimeter",
                "P = opp + adj + hyp",
                r"P = a_{opp} + a_{adj} + c",
                RightTriangle,
                Some("perimeter"),
            ),
            Formula::WaveEquation => (
                "General Wave",
                "y = A·fn(f·x + φ) + D",
                r"y = A\,f(\omega x + \varphi) + D",
                Waves,
                Some("evaluate"),
            ),
            Formula::WavePeriod => (
                "Wave Period",
                "T = 2π / f",
                r"T = \frac{2\pi}{f}",
                Waves,
                Some("period"),
            ),
            Formula::InverseSine => (
                "Inverse Sine",
                "y = arcsin(x), x ∈ [-1, 1], y ∈ [-π/2, π/2]",
                r"y = \arcsin x,\ x \in [-1, 1]",
                Inverse,
                Some("InverseKind::apply"),
            ),
            Formula::InverseCosine => (
                "Inverse Cosine",
                "y = arccos(x), x ∈ [-1, 1], y ∈ [0, π]",
                r"y = \arccos x,\ x \in [-1, 1]",
                Inverse,
                Some("InverseKind::apply"),
            ),
            Formula::InverseTangent => (
                "Inverse Tangent",
                "y = arctan(x), x ∈ ℝ, y ∈ (-π/2, π/2)",
                r"y = \arctan x,\ x \in \mathbb{R}",
                Inverse,
                Some("InverseKind::apply"),
            ),
        };

        FormulaMetadata {
            name,
            formula_plain,
            formula_latex,
            category,
            source_function,
        }
    }

    /// Get all formulas in a given category
    pub fn in_category(category: FormulaCategory) -> Vec<Formula> {
        ALL_FORMULAS
            .iter()
            .filter(|f| f.metadata().category == category)
            .copied()
            .collect()
    }
}

/// All formulas in the registry (for iteration)
pub static ALL_FORMULAS: &[Formula] = &[
    Formula::PythagoreanIdentity,
    Formula::TangentQuotient,
    Formula::TangentSecantIdentity,
    Formula::Special30,
    Formula::Special45,
    Formula::Special60,
    Formula::UnitCirclePoint,
    Formula::FullPeriod,
    Formula::QuadrantSigns,
    Formula::DegreesToRadians,
    Formula::TriangleFromAngleHypotenuse,
    Formula::TriangleFromTwoSides,
    Formula::TriangleFromAngleAdjacent,
    Formula::TriangleFromAngleOpposite,
    Formula::TriangleArea,
    Formula::TrianglePerimeter,
    Formula::WaveEquation,
    Formula::WavePeriod,
    Formula::InverseSine,
    Formula::InverseCosine,
    Formula::InverseTangent,
];

/// The quick reference card: three columns of three identities each.
pub static QUICK_REFERENCE: &[(FormulaCategory, [Formula; 3])] = &[
    (
        FormulaCategory::BasicIdentities,
        [Formula::PythagoreanIdentity, Formula::TangentQuotient, Formula::TangentSecantIdentity],
    ),
    (
        FormulaCategory::SpecialAngles,
        [Formula::Special30, Formula::Special45, Formula::Special60],
    ),
    (
        FormulaCategory::UnitCircle,
        [Formula::UnitCirclePoint, Formula::FullPeriod, Formula::QuadrantSigns],
    ),
];

/// Generate the formula reference as markdown, grouped by category.
///
/// ```rust
/// use trig_core::equations::registry::generate_reference_markdown;
///
/// let markdown = generate_reference_markdown();
/// assert!(markdown.contains("## Basic Identities"));
/// assert!(markdown.contains("sin²θ + cos²θ = 1"));
/// ```
pub fn generate_reference_markdown() -> String {
    let mut output = String::with_capacity(4_000);

    output.push_str(
        r#"# Trigcalc Formula Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-reference`

Angles are in degrees at the user interface and in radians everywhere else.

---

"#,
    );

    for category in FormulaCategory::all() {
        let formulas = Formula::in_category(category);
        if formulas.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));
        output.push_str("| Formula | Plain | LaTeX |\n");
        output.push_str("|---------|-------|-------|\n");
        for formula in formulas {
            let meta = formula.metadata();
            output.push_str(&format!(
                "| {} | `{}` | `{}` |\n",
                meta.name, meta.formula_plain, meta.formula_latex
            ));
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_formulas_have_metadata() {
        assert_eq!(ALL_FORMULAS.len(), 21);

        for formula in ALL_FORMULAS {
            let meta = formula.metadata();
            assert!(!meta.name.is_empty(), "Formula {:?} has no name", formula);
            assert!(!meta.formula_plain.is_empty(), "Formula {:?} has no plain form", formula);
            assert!(!meta.formula_latex.is_empty(), "Formula {:?} has no LaTeX form", formula);
        }
    }

    #[test]
    fn test_quick_reference_matches_categories() {
        assert_eq!(QUICK_REFERENCE.len(), 3);
        for (category, formulas) in QUICK_REFERENCE {
            for formula in formulas {
                assert_eq!(formula.metadata().category, *category);
            }
        }
    }

    #[test]
    fn test_categories_sorted() {
        let orders: Vec<u8> = FormulaCategory::all().iter().map(|c| c.sort_order()).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted);
    }

    #[test]
    fn test_markdown_lists_every_formula() {
        let markdown = generate_reference_markdown();
        for formula in ALL_FORMULAS {
            assert!(markdown.contains(formula.metadata().name));
        }
    }
}
