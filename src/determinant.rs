//! Closed-form determinants for the square cases the application can produce.
//!
//! No general NxN determinant lives here on purpose: the callers only ever form square systems
//! out of 2 vectors of 2 components or 3 vectors of 3 components.

/// Computes the determinant of the 2x2 matrix with rows `v1` and `v2`.
///
/// # Panics
///
/// Panics if either slice has fewer than 2 elements.
#[inline]
pub fn det2(v1: &[f64], v2: &[f64]) -> f64 {
    v1[0] * v2[1] - v1[1] * v2[0]
}

/// Computes the determinant of the 3x3 matrix with rows `v1`, `v2` and `v3`, by cofactor
/// expansion along the first row.
///
/// # Panics
///
/// Panics if any slice has fewer than 3 elements.
#[inline]
pub fn det3(v1: &[f64], v2: &[f64], v3: &[f64]) -> f64 {
    v1[0] * (v2[1] * v3[2] - v2[2] * v3[1]) - v1[1] * (v2[0] * v3[2] - v2[2] * v3[0])
        + v1[2] * (v2[0] * v3[1] - v2[1] * v3[0])
}
