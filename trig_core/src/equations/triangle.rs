//! # Right-Triangle Formulas
//!
//! Solving a right triangle from two independent measurements. All angles
//! here are in radians; the reference angle sits at the vertex between the
//! adjacent side and the hypotenuse.
//!
//! ```text
//!     |\
//!     | \
//! opp |  \ hyp
//!     |   \
//!     |____\ θ
//!      adj
//! ```
//!
//! Callers are expected to pass angles in (0, π/2) and strictly positive
//! sides; no degenerate-triangle handling happens at this level.

/// Opposite and adjacent sides from angle and hypotenuse
///
/// # Formula
/// opp = hyp·sin θ, adj = hyp·cos θ
///
/// # Example
/// ```rust
/// use trig_core::equations::triangle::sides_from_angle_hypotenuse;
///
/// let (opp, adj) = sides_from_angle_hypotenuse(30f64.to_radians(), 10.0);
/// assert!((opp - 5.0).abs() < 1e-9);
/// assert!((adj - 8.660254).abs() < 1e-6);
/// ```
#[inline]
pub fn sides_from_angle_hypotenuse(angle_rad: f64, hypotenuse: f64) -> (f64, f64) {
    (hypotenuse * angle_rad.sin(), hypotenuse * angle_rad.cos())
}

/// Hypotenuse and angle (radians) from the two legs
///
/// # Formula
/// hyp = √(opp² + adj²), θ = atan(opp/adj)
#[inline]
pub fn hypotenuse_angle_from_sides(opposite: f64, adjacent: f64) -> (f64, f64) {
    (
        (opposite.powi(2) + adjacent.powi(2)).sqrt(),
        (opposite / adjacent).atan(),
    )
}

/// Opposite side and hypotenuse from angle and adjacent side
///
/// # Formula
/// opp = adj·tan θ, hyp = adj / cos θ
#[inline]
pub fn sides_from_angle_adjacent(angle_rad: f64, adjacent: f64) -> (f64, f64) {
    (adjacent * angle_rad.tan(), adjacent / angle_rad.cos())
}

/// Adjacent side and hypotenuse from angle and opposite side
///
/// # Formula
/// adj = opp / tan θ, hyp = opp / sin θ
#[inline]
pub fn sides_from_angle_opposite(angle_rad: f64, opposite: f64) -> (f64, f64) {
    (opposite / angle_rad.tan(), opposite / angle_rad.sin())
}

/// Area of a right triangle: ½·opp·adj
#[inline]
pub fn area(opposite: f64, adjacent: f64) -> f64 {
    0.5 * opposite * adjacent
}

/// Perimeter: opp + adj + hyp
#[inline]
pub fn perimeter(opposite: f64, adjacent: f64, hypotenuse: f64) -> f64 {
    opposite + adjacent + hypotenuse
}
